// Main application layout
// Menu bar, agent list with refresh and stop controls, activity log

use crate::api::AgentId;
use crate::state::AppState;
use crate::ui::components::*;
use crate::ui::listing::{listing, AgentRow, Listing};
use eframe::egui;

/// User intents collected while drawing one frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UiActions {
    /// Refresh was activated
    pub refresh: bool,
    /// Stop was activated for these agents, one entry per activation
    pub stop: Vec<AgentId>,
}

/// Render the main application layout
/// Returns what the user asked for; the caller dispatches it
pub fn render_app_layout(
    ctx: &egui::Context,
    state: &AppState,
    activity: &mut ActivityLog,
) -> UiActions {
    let mut actions = UiActions::default();

    render_menu_bar(ctx, &mut actions);

    egui::TopBottomPanel::bottom("activity_panel")
        .resizable(true)
        .default_height(160.0)
        .show(ctx, |ui| activity.render(ui));

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading(egui::RichText::new("Eliza AIM").size(28.0).strong());
            ui.add_space(16.0);
        });

        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.heading("Agents");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                if refresh_button(ui, state.is_fetching()).clicked() {
                    actions.refresh = true;
                }
            });
        });
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("agent_list_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| render_listing(ui, &listing(&state.agents), &mut actions));
    });

    actions
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, actions: &mut UiActions) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Refresh").clicked() {
                    actions.refresh = true;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.set_visuals(if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    });
                }
            });
        });
    });
}

/// Render the agent list, or a placeholder when there is nothing to list
fn render_listing(ui: &mut egui::Ui, listing: &Listing, actions: &mut UiActions) {
    match listing {
        Listing::Loading => placeholder(ui, |ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading agents...").italics().weak());
        }),
        Listing::Failed(message) => placeholder(ui, |ui| {
            ui.label(
                egui::RichText::new("Could not load agents")
                    .color(egui::Color32::from_rgb(220, 0, 0)),
            );
            ui.add_space(4.0);
            ui.label(egui::RichText::new(message).weak().size(12.0));
        }),
        Listing::Empty => placeholder(ui, |ui| {
            ui.label(egui::RichText::new("No agents running").italics().weak());
        }),
        Listing::Agents(rows) => {
            for row in rows {
                ui.push_id(&row.id, |ui| render_agent_row(ui, row, actions));
                ui.add_space(8.0);
            }
        }
    }
}

fn placeholder(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        add_contents(ui);
    });
}

/// Render one agent with its client rows
fn render_agent_row(ui: &mut egui::Ui, row: &AgentRow, actions: &mut UiActions) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("- {}", row.name)).strong().size(16.0));
    });

    for client in &row.clients {
        ui.push_id(&client.name, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(24.0);
                ui.label(format!("• {}", client.name));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if stop_button(ui).clicked() {
                        actions.stop.push(client.agent_id.clone());
                    }
                });
            });
        });
    }
}
