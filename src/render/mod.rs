//! Render module - UI rendering

pub mod detail;
pub mod form;
pub mod pages;
pub mod pets;
pub mod status;
pub mod tabs;

pub use detail::render_detail;
pub use form::render_add_form;
pub use pages::{render_about, render_start};
pub use pets::{render_pet_list, species_icon};
pub use status::{breadcrumb, render_popups, render_status_bar};
pub use tabs::render_tab_bar;
