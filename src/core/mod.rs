//! Core module - Navigation state and view modes

pub mod destination;
pub mod mode;
pub mod state;
pub mod tab;

pub use destination::Destination;
pub use mode::{PendingAction, ViewMode};
pub use state::AppState;
pub use tab::{BackStack, PopOutcome, RootBackPolicy, Tab, TabNavigator};
