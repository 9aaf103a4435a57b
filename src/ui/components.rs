// Reusable UI components
// Buttons and the activity log panel

use eframe::egui;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(249, 115, 22); // Orange

/// Render the refresh button, spinning while a fetch is outstanding
pub fn refresh_button(ui: &mut egui::Ui, fetching: bool) -> egui::Response {
    if fetching {
        ui.spinner();
    }
    ui.button(egui::RichText::new("⟳ Refresh").color(ACCENT).strong())
        .on_hover_text("Reload the agent list")
}

/// Render a stop button (typically red)
pub fn stop_button(ui: &mut egui::Ui) -> egui::Response {
    ui.small_button(egui::RichText::new("⏸ Stop").color(egui::Color32::from_rgb(220, 0, 0)))
        .on_hover_text("Stop this agent")
}

/// Activity log
/// Scrollable record of request outcomes, mirrored from the tracing output
pub struct ActivityLog {
    /// Buffer of log lines
    lines: Vec<String>,
    /// Maximum number of lines to keep (0 = unlimited)
    max_lines: usize,
    /// Whether to auto-scroll to bottom
    auto_scroll: bool,
}

impl ActivityLog {
    /// Create a new activity log
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            max_lines,
            auto_scroll: true,
        }
    }

    /// Add a line to the log
    pub fn add_line(&mut self, line: String) {
        self.lines.push(line);
        if self.max_lines > 0 && self.lines.len() > self.max_lines {
            self.lines.remove(0);
        }
    }

    /// Lines currently held, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Clear all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Render the log in a scrollable area
    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Activity").heading());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                ui.add_space(8.0);
                ui.checkbox(&mut self.auto_scroll, "Auto-scroll");
            });
        });
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("activity_log_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(4.0, 2.0);

                for line in self.lines() {
                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new(line)
                                .size(12.0)
                                .family(egui::FontFamily::Monospace),
                        );
                    });
                }

                if self.auto_scroll && !self.lines.is_empty() {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_log_is_bounded() {
        let mut log = ActivityLog::new(2);
        log.add_line("one".to_string());
        log.add_line("two".to_string());
        log.add_line("three".to_string());
        assert_eq!(log.lines(), &["two".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_activity_log_unlimited() {
        let mut log = ActivityLog::new(0);
        for i in 0..2000 {
            log.add_line(i.to_string());
        }
        assert_eq!(log.lines().len(), 2000);
        log.clear();
        assert!(log.lines().is_empty());
    }
}
