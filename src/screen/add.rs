//! New pet form

use crossterm::event::{KeyCode, KeyEvent};

use crate::error::{PetviewError, Result};
use crate::handler::update_input_buffer;
use crate::store::{NewPet, PetId, PetRepository, Species};

/// Form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    Breed,
    Location,
    Species,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Age,
        FormField::Breed,
        FormField::Location,
        FormField::Species,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::Breed => "Breed",
            FormField::Location => "Location",
            FormField::Species => "Species",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddPetForm {
    pub name: String,
    pub age: String,
    pub breed: String,
    pub location: String,
    pub species: Species,
    focus: Option<FormField>,
    /// Cursor (in chars) inside the focused text field
    cursor: usize,
    /// Validation error from the last submit
    error: Option<String>,
}

impl AddPetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus.unwrap_or(FormField::Name)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text of a field as displayed
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Breed => &self.breed,
            FormField::Location => &self.location,
            FormField::Species => self.species.label(),
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Age => Some(&mut self.age),
            FormField::Breed => Some(&mut self.breed),
            FormField::Location => Some(&mut self.location),
            FormField::Species => None,
        }
    }

    fn set_focus(&mut self, field: FormField) {
        self.focus = Some(field);
        self.cursor = self.value(field).chars().count();
    }

    pub fn next_field(&mut self) {
        let next = (self.focus().index() + 1) % FormField::ALL.len();
        self.set_focus(FormField::ALL[next]);
    }

    pub fn prev_field(&mut self) {
        let index = self.focus().index();
        let prev = if index == 0 {
            FormField::ALL.len() - 1
        } else {
            index - 1
        };
        self.set_focus(FormField::ALL[prev]);
    }

    /// Apply an editing key to the focused field
    ///
    /// Returns true if the form changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let focus = self.focus();
        if focus == FormField::Species {
            return match key.code {
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    self.species = self.species.next();
                    true
                }
                _ => false,
            };
        }

        let cursor = self.cursor;
        let Some(text) = self.text_mut(focus) else {
            return false;
        };
        match update_input_buffer(key, text, cursor) {
            Some((buffer, cursor)) => {
                *text = buffer;
                self.cursor = cursor;
                self.error = None;
                true
            }
            None => false,
        }
    }

    /// Validate and add the pet, clearing the form on success
    pub fn submit(&mut self, repo: &mut PetRepository) -> Result<PetId> {
        let result = self.build().and_then(|pet| repo.add(pet));
        match &result {
            Ok(_) => *self = Self::default(),
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }

    fn build(&self) -> Result<NewPet> {
        let age = self.age.trim().parse::<u32>().map_err(|_| {
            PetviewError::invalid_pet(format!("age must be a whole number, got '{}'", self.age))
        })?;
        Ok(NewPet::new(
            self.name.clone(),
            age,
            self.breed.clone(),
            self.location.clone(),
            self.species,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut AddPetForm, s: &str) {
        for c in s.chars() {
            form.input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_fill_and_submit() {
        let mut repo = PetRepository::with_mock_data();
        let mut form = AddPetForm::new();

        type_str(&mut form, "Susy");
        form.next_field();
        type_str(&mut form, "1");
        form.next_field();
        type_str(&mut form, "Mixed");
        form.next_field();
        type_str(&mut form, "Madrid");
        form.next_field();
        form.input(key(KeyCode::Char(' ')));

        let id = form.submit(&mut repo).unwrap();
        let pet = repo.get(id).unwrap();
        assert_eq!(pet.name, "Susy");
        assert_eq!(pet.age, 1);
        assert_eq!(pet.species, Species::Cat);
        assert!(form.name.is_empty());
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_invalid_age_keeps_input() {
        let mut repo = PetRepository::with_mock_data();
        let mut form = AddPetForm::new();
        type_str(&mut form, "Susy");
        form.next_field();
        type_str(&mut form, "one");

        assert!(form.submit(&mut repo).is_err());
        assert!(form.error().unwrap().contains("age must be a whole number"));
        assert_eq!(form.name, "Susy");
        assert_eq!(repo.len(), 10);

        // Editing clears the error
        form.input(key(KeyCode::Backspace));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut repo = PetRepository::with_mock_data();
        let mut form = AddPetForm::new();
        form.next_field();
        type_str(&mut form, "2");
        assert!(matches!(
            form.submit(&mut repo),
            Err(PetviewError::InvalidPet(_))
        ));
    }

    #[test]
    fn test_field_cycling() {
        let mut form = AddPetForm::new();
        form.prev_field();
        assert_eq!(form.focus(), FormField::Species);
        form.next_field();
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_cursor_follows_focus() {
        let mut form = AddPetForm::new();
        type_str(&mut form, "Kiwi");
        form.next_field();
        form.prev_field();
        assert_eq!(form.cursor(), 4);
        form.input(key(KeyCode::Left));
        form.input(key(KeyCode::Char('X')));
        assert_eq!(form.name, "KiwXi");
    }
}
