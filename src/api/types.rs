//! Wire types for the agents API
//!
//! These mirror the JSON the backend produces; the panel does not own them.

use serde::{Deserialize, Serialize};

/// Unique identifier for an agent
pub type AgentId = String;

/// An agent as reported by `GET /agents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Opaque identifier, unique within one response
    pub id: AgentId,
    /// Display name
    pub name: String,
    /// Client channels the agent is attached to, in backend order (may be empty)
    pub clients: Vec<String>,
}

/// Envelope returned by `GET /agents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListResponse {
    /// All agents known to the backend
    pub agents: Vec<Agent>,
}
