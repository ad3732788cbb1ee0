//! Pet detail page

use crate::core::Destination;
use crate::store::{Pet, PetId, PetRepository, Subscription};

pub struct DetailScreen {
    subscription: Subscription,
    shown: Option<PetId>,
    pet: Option<Pet>,
}

impl DetailScreen {
    pub fn new(repo: &mut PetRepository) -> Self {
        Self {
            subscription: repo.subscribe(),
            shown: None,
            pet: None,
        }
    }

    /// Load the pet for `current` when it is a detail page
    ///
    /// Reloads when the destination changed or the repository reported a
    /// change. An adopted pet leaves `pet()` empty.
    pub fn sync(&mut self, repo: &PetRepository, current: &Destination) {
        let changed = self.subscription.has_changes();
        match *current {
            Destination::PetDetail(id) => {
                if changed || self.shown != Some(id) {
                    self.shown = Some(id);
                    self.pet = repo.get(id).cloned();
                }
            }
            _ if changed => {
                // Events are drained; force a reload on the next detail page
                self.shown = None;
                self.pet = None;
            }
            _ => {}
        }
    }

    /// Id of the detail page last loaded
    pub fn shown(&self) -> Option<PetId> {
        self.shown
    }

    pub fn pet(&self) -> Option<&Pet> {
        self.pet.as_ref()
    }
}
