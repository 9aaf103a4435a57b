// UI module
// Contains layout, components, and the agent listing model

pub mod components;
pub mod layout;
pub mod listing;

pub use components::ActivityLog;
pub use layout::{render_app_layout, UiActions};
