//! Two-screen navigation demo built with eframe/egui.
//!
//! This module defines [`NavApp`], which owns the navigation core
//! ([`RootComponent`]) and implements [`eframe::App`] to render the
//! active screen and forward user interactions to the matching screen
//! component.

use eframe::App;
use nav_core::{
    component::{Child, DetailsComponent, ListComponent, RootComponent},
    config::Config,
};

/// Duration of the fade-in when a new screen becomes active (seconds).
const FADE_SECS: f64 = 0.25;

/// Main application state for the demo.
///
/// [`NavApp`] glues together:
/// - The navigation core: [`RootComponent`] and its screen components.
/// - UI state for the List screen's two text fields.
/// - Transition bookkeeping (fade timing, pending focus request).
///
/// The typical per-frame update is:
/// 1. [`NavApp::sync_active`] — notice stack changes since the last
///    frame and reset per-screen state accordingly.
/// 2. Render the status bar and the active screen, faded in while a
///    transition is still young.
///
/// ### Fields
/// - `root` - Navigation root owning the stack and screen components.
/// - `list_text_primary` - Contents of the List screen's first field.
/// - `list_text_secondary` - Contents of the List screen's second field.
///
/// - `shown` - The configuration rendered in the previous frame.
/// - `focus_primary` - Whether the first text field should grab focus
///   on the next List frame.
/// - `fade_started` - Time stamp (egui time) when the current screen
///   became active.
pub struct NavApp {
    root: RootComponent,

    list_text_primary: String,
    list_text_secondary: String,

    shown: Config,
    focus_primary: bool,
    fade_started: f64,
}

impl NavApp {
    /// Creates the app with a fresh navigation root.
    ///
    /// The initial screen is whatever the root starts on (`Details`);
    /// it is shown fully opaque, with empty text fields and no pending
    /// focus request.
    pub fn new() -> Self {
        let root = RootComponent::new();
        let shown = root.active_config();

        Self {
            root,
            list_text_primary: String::new(),
            list_text_secondary: String::new(),
            shown,
            focus_primary: matches!(shown, Config::List),
            fade_started: f64::NEG_INFINITY,
        }
    }

    /// Reconciles UI state with the navigation stack.
    ///
    /// If the active configuration changed since the last frame, the
    /// fade timer restarts and per-screen state is reset: entering the
    /// List screen recreates it, so both text fields are cleared and
    /// the first one is armed to request focus.
    ///
    /// ### Parameters
    /// - `now` - Current egui time in seconds.
    fn sync_active(&mut self, now: f64) {
        let active = self.root.active_config();
        if active == self.shown {
            return;
        }

        self.shown = active;
        self.fade_started = now;

        match active {
            Config::List => {
                self.list_text_primary.clear();
                self.list_text_secondary.clear();
                self.focus_primary = true;
            }
            Config::Details => {
                self.focus_primary = false;
            }
        }
    }

    /// Opacity of the active screen at time `now`.
    ///
    /// Ramps linearly from `0.0` to `1.0` over [`FADE_SECS`] after the
    /// last transition, then stays at `1.0`.
    fn fade_opacity(&self, now: f64) -> f32 {
        (((now - self.fade_started) / FADE_SECS) as f32).clamp(0.0, 1.0)
    }

    /// Helper to draw a single-line text field.
    fn ui_text_field(ui: &mut egui::Ui, text: &mut String) -> egui::Response {
        ui.add(egui::TextEdit::singleline(text))
    }

    /// Builds the List screen: two text fields and a navigation button.
    ///
    /// The first field requests input focus exactly once after the
    /// screen becomes active.
    fn ui_list_screen(&mut self, ui: &mut egui::Ui, component: &ListComponent) {
        ui.vertical(|ui| {
            let primary = Self::ui_text_field(ui, &mut self.list_text_primary);
            if self.focus_primary {
                primary.request_focus();
                self.focus_primary = false;
            }

            ui.add_space(32.0);
            Self::ui_text_field(ui, &mut self.list_text_secondary);

            if ui.button("Next screen").clicked() {
                component.go_to_other_screen();
            }
        });
    }

    /// Builds the Details screen: a single navigation button.
    fn ui_details_screen(ui: &mut egui::Ui, component: &DetailsComponent) {
        ui.vertical(|ui| {
            if ui.button("Next screen").clicked() {
                component.go_to_other_screen();
            }
        });
    }

    /// Builds the bottom status bar (active screen, stack depth).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("stack depth = {}", self.root.stack().len()));
                ui.separator();
                ui.label(format!("screen = {}", self.root.active_config().name()));
            });
        });
    }

    /// Builds the central panel hosting the active screen.
    fn ui_central_panel(&mut self, ctx: &egui::Context, now: f64) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let opacity = self.fade_opacity(now);
            ui.set_opacity(opacity);
            if opacity < 1.0 {
                ctx.request_repaint();
            }

            match self.root.active_child() {
                Child::List(component) => self.ui_list_screen(ui, &component),
                Child::Details(component) => Self::ui_details_screen(ui, &component),
            }
        });
    }
}

impl App for NavApp {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Reconciles UI state with the navigation stack.
    /// - Renders the bottom status bar.
    /// - Draws the active screen and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.sync_active(now);

        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx, now);
    }
}
