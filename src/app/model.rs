//! Application model: everything the event loop mutates

use crossterm::event::KeyEvent;

use super::Config;
use crate::core::{AppState, TabNavigator, ViewMode};
use crate::error::Result;
use crate::handler::{handle_action, handle_key_event, ActionResult};
use crate::screen::Screens;
use crate::store::PetRepository;

/// Navigator, repository, screen holders and UI state
///
/// The navigator is only mutated through its own operations, from
/// `handle_action`, on the event loop thread.
pub struct AppModel {
    pub state: AppState,
    pub navigator: TabNavigator,
    pub repo: PetRepository,
    pub screens: Screens,
}

impl AppModel {
    /// Assemble a model around an existing repository
    pub fn new(mut repo: PetRepository, navigator: TabNavigator, state: AppState) -> Self {
        let mut screens = Screens::new(&mut repo);
        screens.sync(&repo, navigator.current());
        Self {
            state,
            navigator,
            repo,
            screens,
        }
    }

    /// Build the model described by the configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo = load_repository(config)?;
        let navigator = TabNavigator::new(&config.tabs, config.default_tab)?;

        let mut state = AppState::new(config.root_back_policy);
        state.show_breadcrumb = config.show_breadcrumb;
        if config.show_start {
            state.mode = ViewMode::Start;
        }

        Ok(Self::new(repo, navigator, state))
    }

    /// Handle one key press and bring the screens up to date
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<ActionResult> {
        let action = handle_key_event(&self.state, self.navigator.current(), key);
        if !matches!(action, crate::handler::KeyAction::None) {
            self.state.clear_message();
        }
        let result = handle_action(self, action)?;
        self.sync();
        Ok(result)
    }

    /// Recompute screen state after repository or navigation changes
    pub fn sync(&mut self) {
        self.screens.sync(&self.repo, self.navigator.current());
    }
}

/// Repository from `--data` / `general.data_file`, or the sample pets
pub fn load_repository(config: &Config) -> anyhow::Result<PetRepository> {
    match &config.data_file {
        Some(path) => Ok(PetRepository::load_from(path)?),
        None => Ok(PetRepository::with_mock_data()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Destination, Tab};
    use crate::error::PetviewError;

    #[test]
    fn test_from_config_defaults() {
        let model = AppModel::from_config(&Config::default()).unwrap();
        assert_eq!(model.state.mode, ViewMode::Start);
        assert_eq!(model.navigator.current(), &Destination::Home);
        assert_eq!(model.repo.len(), 10);
    }

    #[test]
    fn test_from_config_rejects_default_outside_tabs() {
        let mut config = Config::default();
        config.tabs = vec![Tab::Home, Tab::Favorites];
        config.default_tab = Tab::About;
        let err = AppModel::from_config(&config).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<PetviewError>(),
            Some(PetviewError::InvalidTab(Tab::About))
        ));
    }

    #[test]
    fn test_from_config_skip_start() {
        let mut config = Config::default();
        config.show_start = false;
        config.default_tab = Tab::Favorites;
        let model = AppModel::from_config(&config).unwrap();
        assert_eq!(model.state.mode, ViewMode::Browse);
        assert_eq!(model.navigator.current(), &Destination::Favorites);
    }
}
