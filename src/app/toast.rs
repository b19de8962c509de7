//! Toast notifications for backend alerts

use super::App;
use crate::constants::{TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use crate::theme;
use eframe::egui;

impl App {
    /// Promote the next pending alert to the toast slot if it is free
    pub(crate) fn poll_alerts(&mut self) {
        if self.toast_message.is_some() || self.alerts.is_empty() {
            return;
        }
        if let Some(msg) = self.alerts.pop() {
            self.toast_message = Some(msg);
            self.toast_start = Some(std::time::Instant::now());
        }
    }

    /// Bottom-right of the central panel, visible then fading, paused on hover
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };

        let total_duration = TOAST_VISIBLE_SECS + TOAST_FADE_SECS;
        let margin = theme::SPACING_LG;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let elapsed = self.toast_elapsed();
        let alpha = theme::fade_alpha(elapsed, TOAST_VISIBLE_SECS, TOAST_FADE_SECS);

        let response = egui::Area::new(egui::Id::new("alert_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                theme::toast_frame(alpha).show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(msg)
                            .size(theme::FONT_BODY)
                            .color(theme::with_alpha(theme::TEXT_PRIMARY, alpha)),
                    );
                });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        if self.toast_elapsed() >= total_duration {
            self.dismiss_toast();
        } else {
            ctx.request_repaint();
        }
    }

    fn toast_elapsed(&self) -> f32 {
        self.toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0)
    }

    pub(crate) fn dismiss_toast(&mut self) {
        self.toast_message = None;
        self.toast_start = None;
    }
}
