//! The three screens plus the header. Each returns the action the user took,
//! if any; text fields edit the draft in place.

use eframe::egui;
use shared::domain::{FormTab, GradeResult};

use crate::controller::state::ViewController;
use crate::ui::{theme, widgets};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    GetStarted,
    SetTab(FormTab),
    PickFile,
    ClearFile,
    SubmitText,
    SubmitFile,
    Back,
    Reload,
}

const CONTENT_MAX_WIDTH: f32 = 860.0;

pub fn show_header(ctx: &egui::Context) -> Option<UiAction> {
    let mut action = None;
    egui::TopBottomPanel::top("app_header")
        .resizable(false)
        .exact_height(64.0)
        .frame(
            egui::Frame::new()
                .fill(theme::APP_BACKGROUND)
                .inner_margin(egui::Margin::symmetric(28, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(egui::RichText::new("स्कोर.ai").strong().size(24.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(widgets::pill_button("Get Started", 140.0)).clicked() {
                        action = Some(UiAction::GetStarted);
                    }
                });
            });
        });
    action
}

pub fn show_hero(ui: &mut egui::Ui) -> Option<UiAction> {
    let mut action = None;
    let avail = ui.available_size();
    ui.add_space((avail.y * 0.14).clamp(24.0, 120.0));
    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_MAX_WIDTH);
        egui::Frame::new()
            .fill(theme::CARD_FILL.gamma_multiply(0.8))
            .corner_radius(20.0)
            .inner_margin(egui::Margin::symmetric(24, 10))
            .show(ui, |ui| {
                ui.label("तत्काल निबंध स्कोरे. वास्तविक शिक्षण अंतर्दृष्टि.");
            });
        ui.add_space(24.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("Grade ").strong().size(52.0));
            ui.label(egui::RichText::new("Smarter").strong().italics().size(52.0));
            ui.label(egui::RichText::new(", Not Harder.").strong().size(52.0));
        });
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(
                "Harness the power of AI to evaluate essays instantly, with detailed feedback on \
                 grammar, coherence, and argument quality. Save hours while ensuring fair, \
                 consistent, and insightful grading.",
            )
            .size(18.0)
            .weak(),
        );
        ui.add_space(36.0);
        if ui.add(widgets::pill_button("Upload Your Essay", 260.0)).clicked() {
            action = Some(UiAction::GetStarted);
        }
    });
    action
}

pub fn show_essay_input(ui: &mut egui::Ui, controller: &mut ViewController) -> Option<UiAction> {
    let mut action = None;
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_MAX_WIDTH);
        widgets::card_frame(ui).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button("Review Your Essay").clicked() {
                    action = Some(UiAction::Reload);
                }
            });
            ui.add_space(16.0);

            let mut tab = controller.active_tab();
            ui.columns(2, |columns| {
                for (column, candidate) in columns.iter_mut().zip([FormTab::Type, FormTab::Upload]) {
                    column.vertical_centered_justified(|ui| {
                        ui.selectable_value(&mut tab, candidate, candidate.label());
                    });
                }
            });
            if tab != controller.active_tab() {
                action = Some(UiAction::SetTab(tab));
            }
            ui.add_space(16.0);

            let tab_action = match controller.active_tab() {
                FormTab::Type => show_type_tab(ui, controller),
                FormTab::Upload => show_upload_tab(ui, controller),
            };
            if tab_action.is_some() {
                action = tab_action;
            }
        });
    });
    action
}

fn show_type_tab(ui: &mut egui::Ui, controller: &mut ViewController) -> Option<UiAction> {
    let loading = controller.is_grading();
    let draft = controller.draft_mut();

    ui.label(egui::RichText::new("Essay Topic").size(16.0));
    ui.add_enabled(
        !loading,
        egui::TextEdit::singleline(&mut draft.topic)
            .hint_text("Enter the essay topic...")
            .desired_width(f32::INFINITY)
            .margin(egui::Margin::symmetric(12, 10)),
    );
    ui.add_space(12.0);

    ui.label(egui::RichText::new("Essay Text").size(16.0));
    egui::ScrollArea::vertical()
        .max_height(320.0)
        .show(ui, |ui| {
            ui.add_enabled(
                !loading,
                egui::TextEdit::multiline(&mut draft.essay_text)
                    .hint_text("माझा आवडता छंद")
                    .desired_rows(14)
                    .desired_width(f32::INFINITY)
                    .margin(egui::Margin::symmetric(12, 10)),
            );
        });
    ui.add_space(16.0);

    widgets::busy_button(ui, "Get Grade", "Grading...", loading, true)
        .then_some(UiAction::SubmitText)
}

fn show_upload_tab(ui: &mut egui::Ui, controller: &mut ViewController) -> Option<UiAction> {
    let mut action = None;
    let processing = controller.is_extracting();
    let selected = controller
        .draft()
        .selected_file
        .as_ref()
        .map(|file| file.file_name.clone());

    ui.label(egui::RichText::new("Upload Marathi Essay PDF").size(16.0));
    ui.add_space(6.0);

    let hovering_file = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let stroke_color = if hovering_file {
        theme::ACCENT
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };
    let zone = egui::Frame::new()
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .corner_radius(16.0)
        .inner_margin(egui::Margin::symmetric(24, 40))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("⬆").size(36.0).weak());
                ui.label(
                    egui::RichText::new(
                        selected
                            .as_deref()
                            .unwrap_or("Click to upload or drag and drop"),
                    )
                    .weak(),
                );
                ui.small("PDF files only");
            });
        })
        .response
        .interact(egui::Sense::click());
    if zone.clicked() && !processing {
        action = Some(UiAction::PickFile);
    }
    if selected.is_some() && !processing {
        ui.horizontal(|ui| {
            if ui.small_button("Remove file").clicked() {
                action = Some(UiAction::ClearFile);
            }
        });
    }
    ui.add_space(16.0);

    let enabled = selected.is_some();
    if widgets::busy_button(
        ui,
        "Process PDF & Get Grade",
        "Processing...",
        processing,
        enabled,
    ) {
        action = Some(UiAction::SubmitFile);
    }
    action
}

/// Text shown on the results screen: heading, badge, and one line per bullet.
pub fn results_content(topic: &str, result: &GradeResult) -> (String, String, Vec<String>) {
    (topic.to_string(), result.badge(), result.feedback.clone())
}

pub fn show_results(ui: &mut egui::Ui, topic: &str, result: &GradeResult) -> Option<UiAction> {
    let mut action = None;
    let (heading, badge, bullets) = results_content(topic, result);
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_MAX_WIDTH);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(heading).strong().size(34.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::grade_badge(ui, &badge);
            });
        });
        ui.add_space(16.0);

        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Feedback").strong().size(24.0));
            ui.add_space(10.0);
            egui::ScrollArea::vertical()
                .max_height(ui.available_height().max(200.0))
                .show(ui, |ui| {
                    for item in &bullets {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new("•").weak());
                            ui.label(egui::RichText::new(item).size(16.0));
                        });
                        ui.add_space(8.0);
                    }
                });
        });

        ui.add_space(24.0);
        if ui.add(widgets::pill_button("Grade Another Essay", 260.0)).clicked() {
            action = Some(UiAction::Back);
        }
    });
    action
}
