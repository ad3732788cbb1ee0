//! View mode definitions

use crate::store::PetId;

/// Current view/input mode with embedded state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewMode {
    /// Welcome page shown before entering the tabs
    Start,
    /// Normal browsing mode
    #[default]
    Browse,
    /// Search input on the pet list
    Search { query: String },
    /// Confirmation dialog
    Confirm { action: PendingAction },
    /// Key binding overlay
    Help,
}

/// Action pending confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Adopt (remove) a pet
    Adopt { id: PetId, name: String },
}
