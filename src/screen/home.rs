//! Home tab: every pet, optionally narrowed by a search query

use super::search::filter_pets;
use super::PetList;
use crate::store::{Pet, PetRepository, Subscription};

pub struct HomeScreen {
    subscription: Subscription,
    query: String,
    list: PetList,
    dirty: bool,
}

impl HomeScreen {
    pub fn new(repo: &mut PetRepository) -> Self {
        let mut screen = Self {
            subscription: repo.subscribe(),
            query: String::new(),
            list: PetList::default(),
            dirty: true,
        };
        screen.sync(repo);
        screen
    }

    /// Recompute the visible pets if the repository or the query changed
    pub fn sync(&mut self, repo: &PetRepository) {
        let changed = self.subscription.has_changes();
        if changed || self.dirty {
            self.list.replace(filter_pets(&self.query, repo.pets()));
            self.dirty = false;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the search query; takes effect on the next sync
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.list.move_to_top();
            self.dirty = true;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PetId;

    #[test]
    fn test_initial_listing() {
        let mut repo = PetRepository::with_mock_data();
        let screen = HomeScreen::new(&mut repo);
        assert_eq!(screen.list().len(), 10);
        assert_eq!(screen.selected_pet().unwrap().name, "Luna");
    }

    #[test]
    fn test_recomputes_after_removal() {
        let mut repo = PetRepository::with_mock_data();
        let mut screen = HomeScreen::new(&mut repo);
        screen.list_mut().move_to_bottom();

        repo.remove(PetId(10)).unwrap();
        assert_eq!(screen.list().len(), 10);
        screen.sync(&repo);
        assert_eq!(screen.list().len(), 9);
        assert_eq!(screen.selected_pet().unwrap().name, "Coco");
    }

    #[test]
    fn test_query_filters_on_sync() {
        let mut repo = PetRepository::with_mock_data();
        let mut screen = HomeScreen::new(&mut repo);
        screen.set_query("husky");
        screen.sync(&repo);
        assert_eq!(screen.selected_pet().unwrap().name, "Thor");

        screen.set_query("");
        screen.sync(&repo);
        assert_eq!(screen.list().len(), 10);
    }
}
