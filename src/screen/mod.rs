//! Screen module - Per-screen state derived from the repository
//!
//! Every screen holder subscribes to the repository when it is created and
//! recomputes its view in `sync` only after a change was reported.

pub mod add;
pub mod detail;
pub mod favorites;
pub mod home;
pub mod list;
pub mod search;

pub use add::{AddPetForm, FormField};
pub use detail::DetailScreen;
pub use favorites::FavoritesScreen;
pub use home::HomeScreen;
pub use list::PetList;
pub use search::filter_pets;

use crate::core::Destination;
use crate::store::{Pet, PetRepository};

/// All screen state holders
pub struct Screens {
    pub home: HomeScreen,
    pub favorites: FavoritesScreen,
    pub detail: DetailScreen,
    pub add: AddPetForm,
}

impl Screens {
    pub fn new(repo: &mut PetRepository) -> Self {
        Self {
            home: HomeScreen::new(repo),
            favorites: FavoritesScreen::new(repo),
            detail: DetailScreen::new(repo),
            add: AddPetForm::new(),
        }
    }

    /// Bring every holder up to date with the repository
    pub fn sync(&mut self, repo: &PetRepository, current: &Destination) {
        self.home.sync(repo);
        self.favorites.sync(repo);
        self.detail.sync(repo, current);
    }

    /// List behind a list destination
    pub fn list_mut(&mut self, current: &Destination) -> Option<&mut PetList> {
        match current {
            Destination::Home => Some(self.home.list_mut()),
            Destination::Favorites => Some(self.favorites.list_mut()),
            _ => None,
        }
    }

    /// Pet an action on `current` applies to
    pub fn target_pet(&self, current: &Destination) -> Option<&Pet> {
        match current {
            Destination::Home => self.home.selected_pet(),
            Destination::Favorites => self.favorites.selected_pet(),
            Destination::PetDetail(_) => self.detail.pet(),
            _ => None,
        }
    }
}
