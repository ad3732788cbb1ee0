//! Action execution handler
//!
//! This module handles the execution of KeyActions, translating them into
//! navigator moves, repository mutations and state changes.

use crate::app::AppModel;
use crate::core::{Destination, PendingAction, PopOutcome, RootBackPolicy, Tab, ViewMode};
use crate::error::Result;
use crate::handler::key::KeyAction;
use crate::integrate::exit_code;
use crate::screen::AddPetForm;

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Quit with the given exit code
    Quit(i32),
}

/// Execute an action against the model
///
/// Only a navigator contract violation (selecting a tab outside the tab
/// set) is returned as an error; it is not recoverable.
pub fn handle_action(model: &mut AppModel, action: KeyAction) -> Result<ActionResult> {
    match action {
        KeyAction::None => {}
        KeyAction::Quit => return Ok(ActionResult::Quit(exit_code::SUCCESS)),

        KeyAction::EnterPets => leave_start_page(model, Tab::Home)?,
        KeyAction::EnterAbout => leave_start_page(model, Tab::About)?,

        KeyAction::SelectTab(index) => {
            if let Some(tab) = model.navigator.tab_at(index) {
                model.navigator.select_tab_or_reset_if_current(tab)?;
            }
        }
        KeyAction::NextTab => model.navigator.next_tab(),
        KeyAction::PrevTab => model.navigator.prev_tab(),

        KeyAction::MoveUp => with_list(model, |list| list.move_up()),
        KeyAction::MoveDown => with_list(model, |list| list.move_down()),
        KeyAction::MoveToTop => with_list(model, |list| list.move_to_top()),
        KeyAction::MoveToBottom => with_list(model, |list| list.move_to_bottom()),

        KeyAction::OpenDetail => {
            let current = *model.navigator.current();
            if let Some(pet) = model.screens.target_pet(&current) {
                let dest = Destination::PetDetail(pet.id);
                model.navigator.push(dest);
            }
        }
        KeyAction::Back => {
            if let Some(result) = go_back(model) {
                return Ok(result);
            }
        }

        KeyAction::Like => like_target(model),
        KeyAction::ConfirmAdopt => {
            let current = *model.navigator.current();
            if let Some(pet) = model.screens.target_pet(&current) {
                model.state.mode = ViewMode::Confirm {
                    action: PendingAction::Adopt {
                        id: pet.id,
                        name: pet.name.clone(),
                    },
                };
            }
        }
        KeyAction::ExecuteAdopt => {
            if let ViewMode::Confirm {
                action: PendingAction::Adopt { id, name },
            } = std::mem::take(&mut model.state.mode)
            {
                match model.repo.remove(id) {
                    Ok(_) => {
                        log::info!("adopted #{} {}", id, name);
                        if *model.navigator.current() == Destination::PetDetail(id) {
                            model.navigator.pop();
                        }
                        model.state.set_message(format!("{} found a home!", name));
                    }
                    Err(e) => model.state.set_message(e.to_string()),
                }
            }
        }

        KeyAction::OpenAddForm => {
            // Every visit starts from an empty form
            model.screens.add = AddPetForm::new();
            model.navigator.push(Destination::AddPet);
        }
        KeyAction::FormNextField => model.screens.add.next_field(),
        KeyAction::FormPrevField => model.screens.add.prev_field(),
        KeyAction::FormInput(key) => {
            model.screens.add.input(key);
        }
        KeyAction::SubmitForm => match model.screens.add.submit(&mut model.repo) {
            Ok(id) => {
                let name = model
                    .repo
                    .get(id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                model.navigator.pop();
                model.state.set_message(format!("Added {}", name));
            }
            Err(e) => model.state.set_message(e.to_string()),
        },

        KeyAction::StartSearch => {
            model.state.mode = ViewMode::Search {
                query: model.screens.home.query().to_string(),
            };
        }
        KeyAction::UpdateSearch { query } => {
            model.screens.home.set_query(&query);
            model.state.mode = ViewMode::Search { query };
        }
        KeyAction::ConfirmSearch => {
            model.state.mode = ViewMode::Browse;
            let count = model.screens.home.list().len();
            if !model.screens.home.query().is_empty() {
                model.state.set_message(format!("{} match(es)", count));
            }
        }

        KeyAction::Cancel => {
            if matches!(model.state.mode, ViewMode::Search { .. }) {
                model.screens.home.set_query("");
            }
            model.state.mode = ViewMode::Browse;
        }

        KeyAction::ShowHelp => model.state.mode = ViewMode::Help,
    }

    Ok(ActionResult::Continue)
}

/// Leave the start page for `tab`, staying on the default tab if it is not enabled
fn leave_start_page(model: &mut AppModel, tab: Tab) -> Result<()> {
    model.state.mode = ViewMode::Browse;
    if model.navigator.contains(tab) {
        model.navigator.select_tab(tab)?;
    } else {
        model.state.set_message(format!("{} is not enabled", tab));
    }
    Ok(())
}

/// Apply `f` to the list behind the current destination, if any
fn with_list(model: &mut AppModel, f: impl FnOnce(&mut crate::screen::PetList)) {
    let current = *model.navigator.current();
    if let Some(list) = model.screens.list_mut(&current) {
        f(list);
    }
}

/// Pop the active stack, applying the root policy at the root
fn go_back(model: &mut AppModel) -> Option<ActionResult> {
    match model.navigator.pop() {
        PopOutcome::Popped(dest) => {
            log::debug!("back from {} to {}", dest, model.navigator.current());
            None
        }
        // Back at the list root clears an active search first
        PopOutcome::AtRoot
            if *model.navigator.current() == Destination::Home
                && !model.screens.home.query().is_empty() =>
        {
            model.screens.home.set_query("");
            None
        }
        PopOutcome::AtRoot => match model.state.root_back_policy {
            RootBackPolicy::Exit => Some(ActionResult::Quit(exit_code::SUCCESS)),
            RootBackPolicy::Ignore => {
                model
                    .state
                    .set_message(format!("Already at {}", model.navigator.active_tab()));
                None
            }
        },
    }
}

fn like_target(model: &mut AppModel) {
    let current = *model.navigator.current();
    let Some((id, name)) = model
        .screens
        .target_pet(&current)
        .map(|p| (p.id, p.name.clone()))
    else {
        return;
    };
    match model.repo.like(id) {
        Ok(likes) => model
            .state
            .set_message(format!("Liked {} ({} like(s))", name, likes)),
        Err(e) => model.state.set_message(e.to_string()),
    }
}
