//! Selectable pet list shared by the list screens

use crate::store::Pet;

/// A derived list of pets with a cursor that always stays in bounds
#[derive(Debug, Clone, Default)]
pub struct PetList {
    pets: Vec<Pet>,
    selected: usize,
}

impl PetList {
    /// Replace the contents, keeping the cursor in bounds
    pub fn replace(&mut self, pets: Vec<Pet>) {
        self.pets = pets;
        self.clamp();
    }

    fn clamp(&mut self) {
        if self.selected >= self.pets.len() {
            self.selected = self.pets.len().saturating_sub(1);
        }
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_pet(&self) -> Option<&Pet> {
        self.pets.get(self.selected)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.pets.len() {
            self.selected += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected = self.pets.len().saturating_sub(1);
    }
}
