//! Application entry point for the two-screen navigation demo.
//!
//! This binary sets up eframe/egui and delegates all interactive
//! logic and rendering to [`NavApp`] from the `app` module.

mod app;

use app::NavApp;

/// Starts the native eframe application.
///
/// This function configures [`eframe::NativeOptions`] with a centered
/// window and launches the main window titled `"Two Screens"`. All UI
/// state and rendering are handled by [`NavApp`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting two-screen navigation demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(480.0, 360.0)),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Two Screens",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the demo.
            Ok(Box::new(NavApp::new()))
        }),
    )
}
