//! Small reusable widgets: cards, pill buttons, badges, and the notice stack.

use eframe::egui;

use crate::controller::events::NoticeSeverity;
use crate::controller::state::ViewController;
use crate::ui::theme;

pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(theme::CARD_FILL)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(18.0)
        .inner_margin(egui::Margin::symmetric(28, 24))
}

pub fn pill_button(text: &str, width: f32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_owned())
            .strong()
            .size(16.0)
            .color(egui::Color32::WHITE),
    )
    .fill(theme::ACCENT)
    .corner_radius(22.0)
    .min_size(egui::vec2(width, 44.0))
}

/// Pill button that shows a spinner and `busy_text` while `busy`.
pub fn busy_button(
    ui: &mut egui::Ui,
    idle_text: &str,
    busy_text: &str,
    busy: bool,
    enabled: bool,
) -> bool {
    let width = ui.available_width();
    if busy {
        egui::Frame::new()
            .fill(theme::ACCENT.gamma_multiply(0.6))
            .corner_radius(22.0)
            .inner_margin(egui::Margin::symmetric(14, 10))
            .show(ui, |ui| {
                ui.set_width(width - 28.0);
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().color(egui::Color32::WHITE));
                    ui.label(
                        egui::RichText::new(busy_text)
                            .strong()
                            .size(16.0)
                            .color(egui::Color32::WHITE),
                    );
                });
            });
        return false;
    }
    ui.add_enabled(enabled, pill_button(idle_text, width)).clicked()
}

pub fn grade_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(theme::BADGE_FILL)
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(18, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).strong().size(20.0));
        });
}

pub fn show_notices(ctx: &egui::Context, controller: &mut ViewController) {
    let mut dismissed = None;
    egui::Area::new(egui::Id::new("notice_stack"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            for (index, active) in controller.notices().enumerate() {
                let fill = match active.notice.severity {
                    NoticeSeverity::Error => theme::ERROR_FILL,
                    NoticeSeverity::Success => theme::SUCCESS_FILL,
                };
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&active.notice.title)
                                        .strong()
                                        .color(egui::Color32::WHITE),
                                );
                                ui.label(
                                    egui::RichText::new(&active.notice.description)
                                        .color(egui::Color32::WHITE),
                                );
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                if ui.small_button("Dismiss").clicked() {
                                    dismissed = Some(index);
                                }
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });
    if let Some(index) = dismissed {
        controller.dismiss_notice(index);
    }
}
