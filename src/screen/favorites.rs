//! Favorites tab: pets with at least one like

use super::PetList;
use crate::store::{Pet, PetRepository, Subscription};

pub struct FavoritesScreen {
    subscription: Subscription,
    list: PetList,
}

impl FavoritesScreen {
    pub fn new(repo: &mut PetRepository) -> Self {
        let subscription = repo.subscribe();
        let mut list = PetList::default();
        list.replace(repo.favorites());
        Self { subscription, list }
    }

    pub fn sync(&mut self, repo: &PetRepository) {
        if self.subscription.has_changes() {
            self.list.replace(repo.favorites());
        }
    }

    pub fn list(&self) -> &PetList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut PetList {
        &mut self.list
    }

    pub fn selected_pet(&self) -> Option<&Pet> {
        self.list.selected_pet()
    }
}
