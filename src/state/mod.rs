// State management module
// Handles the agent list view state and fetch ordering

pub mod app_state;

pub use app_state::{AgentsState, AppState, FetchApplied};
