use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    let Some(user) = state.session.user().cloned() else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        ui.label(
            egui::RichText::new(format!("Welcome back, {}!", user.username))
                .size(26.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(6.0);
        ui.colored_label(colors::TEXT_SECONDARY, &user.email);

        ui.add_space(24.0);

        egui::Frame::default()
            .fill(colors::PANEL_BG)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.set_width(420.0);
                ui.label(
                    egui::RichText::new("Your session")
                        .size(16.0)
                        .strong()
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(8.0);
                ui.colored_label(colors::TEXT_SECONDARY, format!("Signed in as {}", user.email));
                ui.colored_label(colors::TEXT_SECONDARY, format!("Role: {}", user.role));
                ui.add_space(8.0);
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "Your session stays valid for 24 hours; signing out removes it from this device.",
                );
            });

        ui.add_space(24.0);

        if ui
            .add_sized(
                [140.0, 32.0],
                egui::Button::new(egui::RichText::new("Logout").color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT),
            )
            .clicked()
        {
            state.logout();
        }
    });
}
