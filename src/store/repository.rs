//! Pet repository with change notifications
//!
//! The repository is owned by the application and handed to whoever needs
//! it. Screens do not poll it: they hold a [`Subscription`] and recompute
//! their view only after the repository reported a change.

use std::fs;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};

use super::{NewPet, Pet, PetId, Species};
use crate::error::{PetviewError, Result};

/// Change notification sent to every live subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoEvent {
    Added(PetId),
    Liked(PetId),
    Removed(PetId),
}

/// Receiving end of repository change notifications
pub struct Subscription {
    rx: Receiver<RepoEvent>,
}

impl Subscription {
    /// Drain pending events (non-blocking)
    pub fn pending(&self) -> Vec<RepoEvent> {
        self.rx.try_iter().collect()
    }

    /// Drain pending events, reporting whether there were any
    pub fn has_changes(&self) -> bool {
        !self.pending().is_empty()
    }
}

/// In-memory collection of adoptable pets
pub struct PetRepository {
    pets: Vec<Pet>,
    next_id: u32,
    revision: u64,
    subscribers: Vec<Sender<RepoEvent>>,
}

impl PetRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            pets: Vec::new(),
            next_id: 1,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    /// Repository seeded with the built-in sample pets
    pub fn with_mock_data() -> Self {
        let seed = [
            ("Luna", 2, "Labrador", "Madrid", Species::Dog),
            ("Thor", 4, "Husky", "Barcelona", Species::Dog),
            ("Milo", 1, "Beagle", "Valencia", Species::Dog),
            ("Bella", 3, "Poodle", "Sevilla", Species::Dog),
            ("Simba", 5, "Golden Retriever", "Zaragoza", Species::Dog),
            ("Kira", 2, "German Shepherd", "Malaga", Species::Dog),
            ("Rocky", 6, "Bulldog", "Murcia", Species::Dog),
            ("Nala", 1, "Siamese Cat", "Palma", Species::Cat),
            ("Coco", 3, "Persian Cat", "Las Palmas", Species::Cat),
            ("Leo", 4, "Maine Coon", "Bilbao", Species::Cat),
        ];

        let mut repo = Self::new();
        for (name, age, breed, location, species) in seed {
            let id = PetId(repo.next_id);
            repo.next_id += 1;
            repo.pets
                .push(NewPet::new(name, age, breed, location, species).into_pet(id));
        }
        repo
    }

    /// Build a repository from pet records, validating each one
    pub fn from_pets(pets: Vec<NewPet>) -> Result<Self> {
        let mut repo = Self::new();
        for pet in pets {
            repo.add(pet)?;
        }
        // Loading is not a change anyone observed
        repo.revision = 0;
        Ok(repo)
    }

    /// Load pets from a JSON array file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let pets: Vec<NewPet> = serde_json::from_str(&content)?;
        log::info!("loaded {} pet(s) from {}", pets.len(), path.display());
        Self::from_pets(pets)
    }

    /// Register interest in changes
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        Subscription { rx }
    }

    fn notify(&mut self, event: RepoEvent) {
        self.revision += 1;
        // Dropped subscriptions are pruned here
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    /// All pets, in insertion order
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Number of successful mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    /// Case-insensitive lookup by name
    pub fn find_by_name(&self, name: &str) -> Option<&Pet> {
        let name = name.trim();
        self.pets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Pets with at least one like
    pub fn favorites(&self) -> Vec<Pet> {
        self.pets.iter().filter(|p| p.is_favorite()).cloned().collect()
    }

    /// Add a pet, returning its new id
    pub fn add(&mut self, pet: NewPet) -> Result<PetId> {
        let name = pet.name.trim();
        if name.is_empty() {
            return Err(PetviewError::invalid_pet("name must not be empty"));
        }
        if self.find_by_name(name).is_some() {
            return Err(PetviewError::invalid_pet(format!(
                "a pet named '{}' already exists",
                name
            )));
        }

        let id = PetId(self.next_id);
        self.next_id += 1;
        let pet = pet.into_pet(id);
        log::debug!("added pet #{} {}", id, pet.name);
        self.pets.push(pet);
        self.notify(RepoEvent::Added(id));
        Ok(id)
    }

    /// Like a pet, returning its new like count
    pub fn like(&mut self, id: PetId) -> Result<u32> {
        let pet = self
            .pets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PetviewError::PetNotFound(id))?;
        pet.likes += 1;
        let likes = pet.likes;
        self.notify(RepoEvent::Liked(id));
        Ok(likes)
    }

    /// Remove a pet (adoption)
    pub fn remove(&mut self, id: PetId) -> Result<Pet> {
        let index = self
            .pets
            .iter()
            .position(|p| p.id == id)
            .ok_or(PetviewError::PetNotFound(id))?;
        let pet = self.pets.remove(index);
        log::debug!("removed pet #{} {}", id, pet.name);
        self.notify(RepoEvent::Removed(id));
        Ok(pet)
    }
}

impl Default for PetRepository {
    fn default() -> Self {
        Self::new()
    }
}
