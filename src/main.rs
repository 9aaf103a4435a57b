// Eliza AIM - Main Entry Point
// Native panel for listing and stopping agents on a local agents API

mod api;
mod config;
mod dispatch;
mod error;
mod state;
mod ui;

use api::{AgentId, AgentsClient};
use config::Config;
use dispatch::{Completion, RequestDispatcher};
use eframe::egui;
use state::{AppState, FetchApplied};
use tracing::{info, warn};
use ui::{render_app_layout, ActivityLog, UiActions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("eliza_aim=info")),
        )
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let client = AgentsClient::new(&config.api.base_url)?;
    let dispatcher = RequestDispatcher::new(client)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Eliza AIM")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Eliza AIM",
        options,
        Box::new(move |cc| {
            let dispatcher = dispatcher.with_repaint(cc.egui_ctx.clone());
            Box::new(AimApp::new(dispatcher, &config))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI exited with error: {}", e))
}

/// Main application struct
/// Owns the view state and drives requests from UI intents
struct AimApp {
    /// Agent list state and fetch ordering
    state: AppState,
    /// Diagnostic lines shown in the activity panel
    activity: ActivityLog,
    /// Runs HTTP calls in the background
    dispatcher: RequestDispatcher,
}

impl AimApp {
    /// Create the app and issue the initial fetch
    fn new(dispatcher: RequestDispatcher, config: &Config) -> Self {
        let mut app = Self {
            state: AppState::new(),
            activity: ActivityLog::new(config.ui.activity_log_lines),
            dispatcher,
        };
        app.activity
            .add_line(format!("Using agents API at {}", app.dispatcher.base_url()));
        app.refresh();
        app
    }

    /// Issue a fresh `GET /agents`
    fn refresh(&mut self) {
        let generation = self.state.begin_fetch();
        self.dispatcher.fetch(generation);
    }

    /// Issue `POST /agents/{id}/stop` for a listed agent
    fn stop(&mut self, agent_id: AgentId) {
        if !self.state.contains_agent(&agent_id) {
            warn!(agent_id = %agent_id, "Ignoring stop for agent that is not listed");
            return;
        }
        self.activity.add_line(format!("Stopping agent {}", agent_id));
        self.dispatcher.stop(agent_id);
    }

    /// Dispatch what the user asked for this frame
    fn handle_actions(&mut self, actions: UiActions) {
        if actions.refresh {
            self.refresh();
        }
        for agent_id in actions.stop {
            self.stop(agent_id);
        }
    }

    /// Fold finished requests into state and the diagnostic channel
    fn handle_completions(&mut self) {
        for completion in self.dispatcher.poll() {
            match completion {
                Completion::Fetch { generation, result } => {
                    let summary = match &result {
                        Ok(agents) => format!("Loaded {} agents", agents.len()),
                        Err(e) => format!("Failed to load agents: {}", e),
                    };
                    match self.state.apply_fetch(generation, result) {
                        FetchApplied::Applied => {
                            info!(generation, "{}", summary);
                            self.activity.add_line(summary);
                        }
                        FetchApplied::Stale => {
                            info!(generation, "Discarding stale agent list");
                        }
                    }
                }
                // Stop outcomes are diagnostic only; the list stays as fetched
                Completion::Stop { agent_id, result } => match result {
                    Ok(payload) => {
                        info!(agent_id = %agent_id, payload = %payload, "Agent stop acknowledged");
                        self.activity
                            .add_line(format!("Stop {}: {}", agent_id, payload));
                    }
                    Err(e) => {
                        warn!(agent_id = %agent_id, error = %e, "Agent stop failed");
                        self.activity
                            .add_line(format!("Stop {} failed: {}", agent_id, e));
                    }
                },
            }
        }
    }
}

impl eframe::App for AimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_completions();
        let actions = render_app_layout(ctx, &self.state, &mut self.activity);
        self.handle_actions(actions);
    }
}
