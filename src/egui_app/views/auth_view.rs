use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Fill the entire background first
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            // Calculate vertical centering
            let total_height = if state.is_register_mode { 380.0 } else { 280.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            // App title
            ui.label(
                egui::RichText::new("💰 FinTrack")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if state.is_register_mode {
                    "Create Account"
                } else {
                    "Welcome Back"
                })
                .size(24.0)
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if let Some(error) = state.session.error() {
                ui.label(egui::RichText::new(error.to_string()).color(colors::ERROR));
                ui.add_space(10.0);
            } else if let Some(notice) = state.session.notice() {
                ui.label(egui::RichText::new(notice.to_string()).color(colors::SUCCESS));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            // Username field only for registration
            if state.is_register_mode {
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(
                            egui::RichText::new("Username:").color(colors::TEXT_SECONDARY),
                        ),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut state.username_input)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                ui.add_space(8.0);
            }

            // Email field
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            // Password field
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Password:").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            if state.is_register_mode {
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(
                            egui::RichText::new("Confirm:").color(colors::TEXT_SECONDARY),
                        ),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut state.confirm_password_input)
                            .password(true)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                ui.add_space(8.0);
            }

            ui.add_space(20.0);

            // Buttons centered; disabled while a call is outstanding so a
            // double-submit cannot fire a second request.
            ui.horizontal(|ui| {
                let button_width = 120.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit = ui.add_enabled(
                    state.session.can_submit(),
                    egui::Button::new(
                        egui::RichText::new(if state.is_register_mode {
                            "Sign Up"
                        } else {
                            "Login"
                        })
                        .color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::ACCENT)
                    .min_size(egui::vec2(button_width, 32.0)),
                );
                if submit.clicked() {
                    if state.is_register_mode {
                        state.handle_register();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle = ui.add_sized(
                    [button_width, 32.0],
                    egui::Button::new(
                        egui::RichText::new(if state.is_register_mode {
                            "Back to Login"
                        } else {
                            "Create Account"
                        })
                        .color(colors::TEXT_SECONDARY),
                    ),
                );
                if toggle.clicked() {
                    state.toggle_auth_mode();
                }
            });

            if state.session.is_busy() {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
