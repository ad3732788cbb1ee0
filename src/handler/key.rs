//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{AppState, Destination, ViewMode};

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Leave the start page for the pet list
    EnterPets,
    /// Leave the start page for the about tab
    EnterAbout,
    /// Select the tab at a tab bar position, resetting it if already active
    SelectTab(usize),
    /// Switch to the next tab
    NextTab,
    /// Switch to the previous tab
    PrevTab,
    /// Move selection up
    MoveUp,
    /// Move selection down
    MoveDown,
    /// Move to top
    MoveToTop,
    /// Move to bottom
    MoveToBottom,
    /// Open the detail page of the selected pet
    OpenDetail,
    /// Go back in the active tab
    Back,
    /// Like the selected pet
    Like,
    /// Ask before adopting the selected pet
    ConfirmAdopt,
    /// Execute confirmed adoption
    ExecuteAdopt,
    /// Open the new pet form
    OpenAddForm,
    /// Start search input
    StartSearch,
    /// Search query edited
    UpdateSearch { query: String },
    /// Keep the current search and return to browsing
    ConfirmSearch,
    /// Cancel current input/mode
    Cancel,
    /// Move to the next form field
    FormNextField,
    /// Move to the previous form field
    FormPrevField,
    /// Editing key for the focused form field
    FormInput(KeyEvent),
    /// Submit the new pet form
    SubmitForm,
    /// Show help overlay
    ShowHelp,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, current: &Destination, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match &state.mode {
        ViewMode::Start => handle_start_mode(key),
        ViewMode::Browse if *current == Destination::AddPet => handle_form_mode(key),
        ViewMode::Browse => handle_browse_mode(current, key),
        ViewMode::Search { query } => handle_search_mode(key, query),
        ViewMode::Confirm { .. } => handle_confirm_mode(key),
        ViewMode::Help => KeyAction::Cancel,
    }
}

/// Handle keys on the start page
fn handle_start_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') => KeyAction::EnterPets,
        KeyCode::Char('i') => KeyAction::EnterAbout,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

/// Handle keys in browse mode
fn handle_browse_mode(current: &Destination, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,

        // Tabs
        KeyCode::Char(c @ '1'..='9') => KeyAction::SelectTab(c as usize - '1' as usize),
        KeyCode::Tab => KeyAction::NextTab,
        KeyCode::BackTab => KeyAction::PrevTab,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::MoveToTop,
        KeyCode::Char('G') | KeyCode::End => KeyAction::MoveToBottom,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') if current.is_list() => {
            KeyAction::OpenDetail
        }
        KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => KeyAction::Back,

        // Pet actions
        KeyCode::Char('f') => KeyAction::Like,
        KeyCode::Char('x') | KeyCode::Delete => KeyAction::ConfirmAdopt,
        KeyCode::Char('a') if *current == Destination::Home => KeyAction::OpenAddForm,
        KeyCode::Char('/') if *current == Destination::Home => KeyAction::StartSearch,

        // Help
        KeyCode::Char('?') => KeyAction::ShowHelp,

        _ => KeyAction::None,
    }
}

/// Handle keys while the new pet form is shown
fn handle_form_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Back,
        KeyCode::Enter => KeyAction::SubmitForm,
        KeyCode::Tab | KeyCode::Down => KeyAction::FormNextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::FormPrevField,
        _ => KeyAction::FormInput(key),
    }
}

/// Handle keys in search mode
fn handle_search_mode(key: KeyEvent, query: &str) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::ConfirmSearch,
        KeyCode::Esc => KeyAction::Cancel,
        _ => match update_input_buffer(key, query, query.chars().count()) {
            Some((query, _)) => KeyAction::UpdateSearch { query },
            None => KeyAction::None,
        },
    }
}

/// Handle keys in confirm mode
fn handle_confirm_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::ExecuteAdopt,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

/// Byte offset of the `cursor`-th char
fn byte_index(buffer: &str, cursor: usize) -> usize {
    buffer
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(buffer.len())
}

/// Update input buffer based on key event
///
/// `cursor` counts chars, not bytes. Returns the new buffer content and
/// cursor, or None if no change.
pub fn update_input_buffer(key: KeyEvent, buffer: &str, cursor: usize) -> Option<(String, usize)> {
    let len = buffer.chars().count();
    let cursor = cursor.min(len);
    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => {
            let mut new_buffer = buffer.to_string();
            new_buffer.insert(byte_index(buffer, cursor), c);
            Some((new_buffer, cursor + 1))
        }
        KeyCode::Backspace => {
            if cursor > 0 {
                let mut new_buffer = buffer.to_string();
                new_buffer.remove(byte_index(buffer, cursor - 1));
                Some((new_buffer, cursor - 1))
            } else {
                None
            }
        }
        KeyCode::Delete => {
            if cursor < len {
                let mut new_buffer = buffer.to_string();
                new_buffer.remove(byte_index(buffer, cursor));
                Some((new_buffer, cursor))
            } else {
                None
            }
        }
        KeyCode::Left => {
            if cursor > 0 {
                Some((buffer.to_string(), cursor - 1))
            } else {
                None
            }
        }
        KeyCode::Right => {
            if cursor < len {
                Some((buffer.to_string(), cursor + 1))
            } else {
                None
            }
        }
        KeyCode::Home => {
            if cursor > 0 {
                Some((buffer.to_string(), 0))
            } else {
                None
            }
        }
        KeyCode::End => {
            if cursor < len {
                Some((buffer.to_string(), len))
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PendingAction;
    use crate::store::PetId;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn browse(current: Destination, code: KeyCode) -> KeyAction {
        handle_key_event(&AppState::default(), &current, key(code))
    }

    #[test]
    fn test_number_keys_select_tabs() {
        assert_eq!(
            browse(Destination::Home, KeyCode::Char('1')),
            KeyAction::SelectTab(0)
        );
        assert_eq!(
            browse(Destination::About, KeyCode::Char('3')),
            KeyAction::SelectTab(2)
        );
    }

    #[test]
    fn test_open_detail_only_on_lists() {
        assert_eq!(
            browse(Destination::Favorites, KeyCode::Enter),
            KeyAction::OpenDetail
        );
        assert_eq!(browse(Destination::About, KeyCode::Enter), KeyAction::None);
        assert_eq!(
            browse(Destination::PetDetail(PetId(1)), KeyCode::Char('l')),
            KeyAction::None
        );
    }

    #[test]
    fn test_home_only_keys() {
        assert_eq!(
            browse(Destination::Home, KeyCode::Char('/')),
            KeyAction::StartSearch
        );
        assert_eq!(
            browse(Destination::Favorites, KeyCode::Char('/')),
            KeyAction::None
        );
        assert_eq!(
            browse(Destination::Home, KeyCode::Char('a')),
            KeyAction::OpenAddForm
        );
    }

    #[test]
    fn test_back_keys() {
        for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Char('h')] {
            assert_eq!(browse(Destination::Home, code), KeyAction::Back);
        }
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(
            browse(Destination::AddPet, KeyCode::Char('q')),
            KeyAction::FormInput(key(KeyCode::Char('q')))
        );
        assert_eq!(browse(Destination::AddPet, KeyCode::Esc), KeyAction::Back);
        assert_eq!(
            browse(Destination::AddPet, KeyCode::Tab),
            KeyAction::FormNextField
        );
        assert_eq!(
            browse(Destination::AddPet, KeyCode::Enter),
            KeyAction::SubmitForm
        );
    }

    #[test]
    fn test_search_mode_edits_query() {
        let mut state = AppState::default();
        state.mode = ViewMode::Search {
            query: "lu".to_string(),
        };
        assert_eq!(
            handle_key_event(&state, &Destination::Home, key(KeyCode::Char('n'))),
            KeyAction::UpdateSearch {
                query: "lun".to_string()
            }
        );
        assert_eq!(
            handle_key_event(&state, &Destination::Home, key(KeyCode::Enter)),
            KeyAction::ConfirmSearch
        );
    }

    #[test]
    fn test_confirm_mode() {
        let mut state = AppState::default();
        state.mode = ViewMode::Confirm {
            action: PendingAction::Adopt {
                id: PetId(1),
                name: "Luna".to_string(),
            },
        };
        assert_eq!(
            handle_key_event(&state, &Destination::Home, key(KeyCode::Char('y'))),
            KeyAction::ExecuteAdopt
        );
        assert_eq!(
            handle_key_event(&state, &Destination::Home, key(KeyCode::Esc)),
            KeyAction::Cancel
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_key_event(&AppState::default(), &Destination::AddPet, ctrl_c),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_update_input_buffer_multibyte() {
        let (buf, cur) = update_input_buffer(key(KeyCode::Char('ñ')), "Bru", 3).unwrap();
        assert_eq!((buf.as_str(), cur), ("Bruñ", 4));
        let (buf, cur) = update_input_buffer(key(KeyCode::Char('o')), &buf, cur).unwrap();
        assert_eq!(buf, "Bruño");
        let (buf, cur) = update_input_buffer(key(KeyCode::Backspace), &buf, cur - 1).unwrap();
        assert_eq!((buf.as_str(), cur), ("Bruo", 3));
    }

    #[test]
    fn test_update_input_buffer_bounds() {
        assert!(update_input_buffer(key(KeyCode::Backspace), "", 0).is_none());
        assert!(update_input_buffer(key(KeyCode::Right), "ab", 2).is_none());
        assert_eq!(
            update_input_buffer(key(KeyCode::Home), "ab", 2),
            Some(("ab".to_string(), 0))
        );
    }
}
