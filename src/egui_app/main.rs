//! egui Native Desktop App - Main Entry Point
//!
//! Entry point for the FinTrack desktop client. Implements `eframe::App`;
//! each frame drains finished network calls and renders whichever view the
//! session state allows.

use eframe::egui;
use fintrack::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "FinTrack",
        options,
        Box::new(|_cc| Ok(Box::new(FinTrackApp::default()))),
    )
}

/// Main application state
struct FinTrackApp {
    state: AppState,
}

impl Default for FinTrackApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for FinTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_results();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
