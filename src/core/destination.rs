//! Navigation destinations

use std::fmt;

use crate::store::PetId;

/// A navigable screen
///
/// Destinations are plain values: they are compared, hashed and stored in
/// back stacks. Detail pages are keyed by the repository's stable id, never
/// by the pet's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Pet list (root of the Home tab)
    Home,
    /// Liked pets (root of the Favorites tab)
    Favorites,
    /// About page (root of the About tab)
    About,
    /// New pet form
    AddPet,
    /// Detail page for a single pet
    PetDetail(PetId),
}

impl Destination {
    /// Short label used in the status bar breadcrumb
    pub fn label(&self) -> String {
        match self {
            Destination::Home => "Home".to_string(),
            Destination::Favorites => "Favorites".to_string(),
            Destination::About => "About".to_string(),
            Destination::AddPet => "Add pet".to_string(),
            Destination::PetDetail(id) => format!("Pet #{}", id),
        }
    }

    /// Whether this destination renders a selectable pet list
    pub fn is_list(&self) -> bool {
        matches!(self, Destination::Home | Destination::Favorites)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
