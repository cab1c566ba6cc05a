//! Application entry point for the material catalog browser.
//!
//! This binary sets up eframe/egui and delegates all interactive
//! logic and rendering to [`Browser`] from the `browser` module.

mod browser;

use browser::Browser;
use std::path::PathBuf;

/// Starts the native eframe application.
///
/// Initializes console logging, reads the optional bundle path from the
/// command line, and launches the main window titled
/// `"Material Catalog Browser"`. All UI state and rendering are handled
/// by [`Browser`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // CLI: one optional positional argument, the bundle file to open.
    // Without it the browser starts with an empty catalog.
    let initial_file: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Material Catalog Browser"),
        ..Default::default()
    };

    eframe::run_native(
        "Material Catalog Browser",
        options,
        Box::new(move |_cc| Ok(Box::new(Browser::new(initial_file)))),
    )
}
