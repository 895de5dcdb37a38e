//! Visual style and font setup.

use std::{path::PathBuf, sync::Arc};

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
pub const APP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(244, 246, 251);
pub const BADGE_FILL: egui::Color32 = egui::Color32::from_rgb(254, 240, 199);
pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(153, 27, 27);
pub const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(22, 101, 52);

const DEVANAGARI_FONT_NAME: &str = "devanagari";

/// Fonts commonly shipped with a Devanagari range. egui's bundled fonts have
/// none, so Marathi text renders as boxes without one of these.
const DEVANAGARI_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
    "/usr/share/fonts/truetype/lohit-marathi/Lohit-Marathi.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
    "C:\\Windows\\Fonts\\mangal.ttf",
];

pub fn apply_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = APP_BACKGROUND;
    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.hyperlink_color = ACCENT;

    // Keep text inputs visibly outlined on the light background.
    style.visuals.widgets.inactive.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.noninteractive.bg_stroke.color);
    style.visuals.widgets.hovered.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.hovered.bg_stroke.color);
    style.visuals.widgets.active.bg_stroke =
        egui::Stroke::new(1.2, ACCENT.gamma_multiply(0.9));

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.interact_size = egui::vec2(40.0, 32.0);
    ctx.set_style(style);
}

/// Registers a Devanagari-capable font as a fallback for every family.
/// Returns the path that was loaded, if any.
pub fn install_fonts(ctx: &egui::Context, preferred: Option<PathBuf>) -> Option<PathBuf> {
    let candidates = preferred
        .into_iter()
        .chain(DEVANAGARI_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            DEVANAGARI_FONT_NAME.to_owned(),
            Arc::new(egui::FontData::from_owned(bytes)),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push(DEVANAGARI_FONT_NAME.to_owned());
        }
        ctx.set_fonts(fonts);
        tracing::info!(font = %path.display(), "loaded devanagari font");
        return Some(path);
    }

    tracing::warn!("no devanagari font found; Marathi text may not render");
    None
}
