// Application state management
// Holds the fetched agent list and the fetch generation bookkeeping

use crate::api::{Agent, AgentId};

/// What the panel currently knows about the agent list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentsState {
    /// No fetch has completed yet
    Loading,
    /// The most recent fetch failed
    Error(String),
    /// The most recent fetch succeeded (the list may be empty)
    Loaded(Vec<Agent>),
}

/// Outcome of handing a fetch completion to [`AppState::apply_fetch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    /// The completion belonged to the newest fetch and replaced the state
    Applied,
    /// A newer fetch had been issued; the completion was dropped
    Stale,
}

/// Main application state
///
/// Only fetch completions write `agents`. Stop requests never touch it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current agent list state
    pub agents: AgentsState,
    /// Generation of the newest fetch issued
    latest_generation: u64,
    /// Generation still awaiting its completion, if any
    pending_generation: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            agents: AgentsState::Loading,
            latest_generation: 0,
            pending_generation: None,
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch and return its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_generation += 1;
        self.pending_generation = Some(self.latest_generation);
        self.latest_generation
    }

    /// Apply a fetch result if it belongs to the newest fetch
    ///
    /// A success replaces the whole list, a failure replaces it with
    /// `AgentsState::Error`. Older generations are ignored so a slow
    /// response can never overwrite a newer one.
    pub fn apply_fetch<E: std::fmt::Display>(
        &mut self,
        generation: u64,
        result: Result<Vec<Agent>, E>,
    ) -> FetchApplied {
        if generation != self.latest_generation {
            return FetchApplied::Stale;
        }

        self.pending_generation = None;
        self.agents = match result {
            Ok(agents) => AgentsState::Loaded(agents),
            Err(e) => AgentsState::Error(e.to_string()),
        };
        FetchApplied::Applied
    }

    /// Whether a fetch is still outstanding
    pub fn is_fetching(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Whether the agent is part of the currently rendered list
    pub fn contains_agent(&self, id: &AgentId) -> bool {
        match &self.agents {
            AgentsState::Loaded(agents) => agents.iter().any(|a| &a.id == id),
            _ => false,
        }
    }
}
