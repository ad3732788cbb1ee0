//! Application state management

use super::{RootBackPolicy, ViewMode};

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current view mode
    pub mode: ViewMode,
    /// Status message
    pub message: Option<String>,
    /// What back does at a tab's root
    pub root_back_policy: RootBackPolicy,
    /// Show the back stack breadcrumb in the status bar
    pub show_breadcrumb: bool,
}

impl AppState {
    pub fn new(root_back_policy: RootBackPolicy) -> Self {
        Self {
            mode: ViewMode::Browse,
            message: None,
            root_back_policy,
            show_breadcrumb: true,
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RootBackPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(RootBackPolicy::Exit);
        assert_eq!(state.mode, ViewMode::Browse);
        assert!(state.message.is_none());
        assert_eq!(state.root_back_policy, RootBackPolicy::Exit);
    }

    #[test]
    fn test_message() {
        let mut state = AppState::default();
        state.set_message("Liked Luna");
        assert_eq!(state.message.as_deref(), Some("Liked Luna"));
        state.clear_message();
        assert!(state.message.is_none());
    }
}
