// Agents API module
// HTTP client and wire types for the backend that runs the agents

pub mod client;
pub mod types;

pub use client::AgentsClient;
pub use types::{Agent, AgentId};
