//! Background request dispatch
//!
//! egui draws frames synchronously, so HTTP calls run on a tokio runtime
//! owned by the dispatcher. Finished calls come back as [`Completion`]s on a
//! channel that the UI drains once per frame. Requests are independent:
//! nothing serializes, cancels or retries them.

use crate::api::{Agent, AgentId, AgentsClient};
use crate::error::ClientError;
use std::sync::mpsc::{self, Receiver, Sender};

/// A finished request
#[derive(Debug)]
pub enum Completion {
    /// `GET /agents` finished
    Fetch {
        /// Generation the fetch was issued under
        generation: u64,
        /// Agent list or failure
        result: Result<Vec<Agent>, ClientError>,
    },
    /// `POST /agents/{id}/stop` finished
    Stop {
        /// Agent the stop was issued for
        agent_id: AgentId,
        /// Raw reply payload or failure
        result: Result<serde_json::Value, ClientError>,
    },
}

/// Runs agents API calls off the UI thread
pub struct RequestDispatcher {
    runtime: tokio::runtime::Runtime,
    client: AgentsClient,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    repaint: Option<egui::Context>,
}

impl RequestDispatcher {
    /// Create a dispatcher with its own multi-thread runtime
    pub fn new(client: AgentsClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("aim-http")
            .enable_all()
            .build()?;
        let (sender, receiver) = mpsc::channel();

        Ok(Self {
            runtime,
            client,
            sender,
            receiver,
            repaint: None,
        })
    }

    /// Wake this egui context whenever a request completes
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Base URL of the agents API requests go to
    pub fn base_url(&self) -> &reqwest::Url {
        self.client.base_url()
    }

    /// Issue `GET /agents` tagged with `generation`
    pub fn fetch(&self, generation: u64) {
        let client = self.client.clone();
        let notify = self.notifier();
        tracing::info!(generation, "Requesting agent list");

        self.runtime.spawn(async move {
            let result = client.fetch_agents().await;
            notify.send(Completion::Fetch { generation, result });
        });
    }

    /// Issue `POST /agents/{id}/stop`
    pub fn stop(&self, agent_id: AgentId) {
        let client = self.client.clone();
        let notify = self.notifier();
        tracing::info!(agent_id = %agent_id, "Requesting agent stop");

        self.runtime.spawn(async move {
            let result = client.stop_agent(&agent_id).await;
            notify.send(Completion::Stop { agent_id, result });
        });
    }

    /// Drain every completion that has arrived so far
    pub fn poll(&self) -> Vec<Completion> {
        self.receiver.try_iter().collect()
    }

    /// Block until a completion arrives or `timeout` passes
    #[cfg(test)]
    pub fn wait(&self, timeout: std::time::Duration) -> Option<Completion> {
        self.receiver.recv_timeout(timeout).ok()
    }

    fn notifier(&self) -> Notifier {
        Notifier {
            sender: self.sender.clone(),
            repaint: self.repaint.clone(),
        }
    }
}

/// Send half handed to each spawned request
struct Notifier {
    sender: Sender<Completion>,
    repaint: Option<egui::Context>,
}

impl Notifier {
    fn send(self, completion: Completion) {
        // The receiver only goes away when the window closes
        if self.sender.send(completion).is_err() {
            tracing::debug!("Dropping completion after shutdown");
            return;
        }
        if let Some(ctx) = self.repaint {
            ctx.request_repaint();
        }
    }
}
