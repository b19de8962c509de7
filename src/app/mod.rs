//! App module - contains the main application state and logic

mod toast;

use crate::backend::SchemeBackend;
use crate::settings::Settings;
use crate::theme;
use crate::types::{Action, Alerts};
use crate::ui::root::RootView;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) root: RootView,
    pub(crate) backend: Arc<dyn SchemeBackend>,
    pub(crate) alerts: Alerts,
    pub(crate) data_dir: PathBuf,
    pub(crate) greeting_name: String,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        backend: Arc<dyn SchemeBackend>,
        alerts: Alerts,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_backend(backend, alerts, settings, data_dir)
    }

    /// Build the app state without touching a rendering context
    pub fn with_backend(
        backend: Arc<dyn SchemeBackend>,
        alerts: Alerts,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        let root = RootView::new();
        debug!(widgets = ?root.describe(), "Root view composed");

        Self {
            root,
            backend,
            alerts,
            data_dir,
            central_panel_rect: None,
            toast_message: None,
            toast_start: None,
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            needs_center: settings.window_pos().is_none(),
            greeting_name: settings.greeting_name,
        }
    }

    /// Carry out what the view asked for. Backend results are discarded;
    /// failures only reach the log.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Greet => {
                debug!("Dispatching greet");
                if let Err(e) = self.backend.greet() {
                    warn!(error = %e, "Backend greet failed");
                }
            }
        }
    }

    pub fn current_settings(&self) -> Settings {
        Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            greeting_name: self.greeting_name.clone(),
        }
    }

    pub fn save_settings(&self) {
        self.current_settings().save(&self.data_dir);
    }
}
