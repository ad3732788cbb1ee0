//! PetView - Browse and adopt pets in your terminal
//!
//! The navigation core is [`core::TabNavigator`]: a fixed set of tabs, each
//! with its own back stack. Screens read an injected
//! [`store::PetRepository`] and refresh on its change notifications.

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod integrate;
pub mod render;
pub mod screen;
pub mod store;
