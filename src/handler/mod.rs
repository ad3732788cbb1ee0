//! Handler module - Input event handling

pub mod action;
pub mod key;

pub use action::{handle_action, ActionResult};
pub use key::{handle_key_event, update_input_buffer, KeyAction};
