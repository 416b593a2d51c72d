//! Native window frontend using egui/eframe

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::ConnectFiveApp;
pub use game_state::GameState;

use std::time::Duration;

/// Open the board window and block until it is closed
pub fn run(pacing: Duration, seed: Option<u64>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([560.0, 380.0])
            .with_title("Connect Five"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Five",
        options,
        Box::new(move |cc| Ok(Box::new(ConnectFiveApp::new(cc, pacing, seed)))),
    )
}
