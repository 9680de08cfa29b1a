//! Views Module
//!
//! The gated views of the client. `render_main_panel` is the route gate: it
//! picks the view from the session phase, so the auth form is unreachable
//! while authenticated and protected views are unreachable while anonymous.

use eframe::egui;

use crate::egui_app::session::SessionPhase;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub mod auth_view;
pub mod dashboard_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("💰 FinTrack").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.session.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(user) = state.session.user() {
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                        }
                    }
                });
            });
        });
}

/// Render the view the current session phase allows
///
/// - `Resolving`: loading indicator while the persisted token is validated
/// - `Anonymous`: the login/register form
/// - `Authenticated`: the dashboard
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| match state.session.phase().clone() {
        SessionPhase::Resolving => render_loading(ui),
        SessionPhase::Anonymous => auth_view::render(ui, state),
        SessionPhase::Authenticated(_) => dashboard_view::render(ui, state),
    });
}

fn render_loading(ui: &mut egui::Ui) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.vertical_centered(|ui| {
        ui.add_space(available_rect.height() / 2.0 - 30.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Restoring session...");
    });
}
