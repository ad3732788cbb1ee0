//! Pet records

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub u32);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Other,
}

impl Species {
    pub fn label(self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Other => "other",
        }
    }

    /// Cycle to the next species (used by the add form)
    pub fn next(self) -> Self {
        match self {
            Species::Dog => Species::Cat,
            Species::Cat => Species::Other,
            Species::Other => Species::Dog,
        }
    }
}

/// A pet available for adoption
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// Age in years
    pub age: u32,
    pub breed: String,
    /// City where the pet currently lives
    pub location: String,
    pub species: Species,
    /// Likes received; any like makes the pet a favorite
    pub likes: u32,
}

impl Pet {
    pub fn is_favorite(&self) -> bool {
        self.likes > 0
    }

    /// "2 years", "1 year"
    pub fn age_label(&self) -> String {
        if self.age == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", self.age)
        }
    }
}

/// Pet data before the repository assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub species: Species,
    #[serde(default)]
    pub likes: u32,
}

impl NewPet {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        breed: impl Into<String>,
        location: impl Into<String>,
        species: Species,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            breed: breed.into(),
            location: location.into(),
            species,
            likes: 0,
        }
    }

    pub(crate) fn into_pet(self, id: PetId) -> Pet {
        Pet {
            id,
            name: self.name.trim().to_string(),
            age: self.age,
            breed: self.breed.trim().to_string(),
            location: self.location.trim().to_string(),
            species: self.species,
            likes: self.likes,
        }
    }
}
