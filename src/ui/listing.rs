// Agent listing model
// Turns the view state into the nested rows the layout draws

use crate::api::AgentId;
use crate::state::AgentsState;

/// What the agent list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Waiting for the first fetch
    Loading,
    /// Last fetch failed; carries the error text
    Failed(String),
    /// Fetch succeeded with zero agents
    Empty,
    /// One row per agent, in response order
    Agents(Vec<AgentRow>),
}

/// Top-level row, keyed by agent id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRow {
    pub id: AgentId,
    pub name: String,
    pub clients: Vec<ClientRow>,
}

/// Inner row, keyed by client name, with a stop control for its agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    pub name: String,
    /// Agent the row's stop control targets
    pub agent_id: AgentId,
}

/// Build the listing for the current state
pub fn listing(state: &AgentsState) -> Listing {
    match state {
        AgentsState::Loading => Listing::Loading,
        AgentsState::Error(message) => Listing::Failed(message.clone()),
        AgentsState::Loaded(agents) if agents.is_empty() => Listing::Empty,
        AgentsState::Loaded(agents) => Listing::Agents(
            agents
                .iter()
                .map(|agent| AgentRow {
                    id: agent.id.clone(),
                    name: agent.name.clone(),
                    clients: agent
                        .clients
                        .iter()
                        .map(|client| ClientRow {
                            name: client.clone(),
                            agent_id: agent.id.clone(),
                        })
                        .collect(),
                })
                .collect(),
        ),
    }
}
