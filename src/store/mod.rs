//! Store module - In-memory pet repository

pub mod pet;
pub mod repository;

pub use pet::{NewPet, Pet, PetId, Species};
pub use repository::{PetRepository, RepoEvent, Subscription};
