use std::{path::PathBuf, time::Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{FormTab, SelectedFile, ViewState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration, state::ViewController};
use crate::ui::{
    panels::{self, UiAction},
    theme, widgets,
};

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub font_path: Option<PathBuf>,
}

pub struct GraderApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: ViewController,
}

impl GraderApp {
    pub fn bootstrap(
        cc: &eframe::CreationContext<'_>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        theme::apply_style(&cc.egui_ctx);
        theme::install_fonts(&cc.egui_ctx, startup.font_path);
        Self::new(cmd_tx, ui_rx)
    }

    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: ViewController::new(),
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.controller.apply(event);
        }
    }

    pub fn perform(&mut self, action: UiAction) {
        match action {
            UiAction::GetStarted => self.controller.get_started(),
            UiAction::SetTab(tab) => self.controller.set_tab(tab),
            UiAction::PickFile => {
                let picked = rfd::FileDialog::new()
                    .add_filter("PDF", &["pdf"])
                    .set_title("Select essay PDF")
                    .pick_file();
                if let Some(path) = picked {
                    self.controller.select_file(SelectedFile::from_path(path));
                }
            }
            UiAction::ClearFile => self.controller.clear_file(),
            UiAction::SubmitText => {
                let cmd = self.controller.submit_text();
                orchestration::submit(&mut self.controller, &self.cmd_tx, cmd);
            }
            UiAction::SubmitFile => {
                let cmd = self.controller.submit_file();
                orchestration::submit(&mut self.controller, &self.cmd_tx, cmd);
            }
            UiAction::Back => self.controller.back(),
            UiAction::Reload => self.controller.reload(),
        }
    }

    fn accept_dropped_files(&mut self, ctx: &egui::Context) {
        if self.controller.view() != &ViewState::Input
            || self.controller.active_tab() != FormTab::Upload
            || self.controller.is_extracting()
        {
            return;
        }
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            self.controller.select_file(SelectedFile::from_path(path));
        }
    }
}

impl eframe::App for GraderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.accept_dropped_files(ctx);
        self.controller.prune_notices(Instant::now());

        let mut action = panels::show_header(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let view_action = match self.controller.view().clone() {
                        ViewState::Hero => panels::show_hero(ui),
                        ViewState::Input => panels::show_essay_input(ui, &mut self.controller),
                        ViewState::Results { topic, result } => {
                            panels::show_results(ui, &topic, &result)
                        }
                    };
                    if view_action.is_some() {
                        action = view_action;
                    }
                });
        });
        widgets::show_notices(ctx, &mut self.controller);

        if let Some(action) = action {
            tracing::debug!(?action, "ui action");
            self.perform(action);
        }

        let busy = self.controller.is_grading() || self.controller.is_extracting();
        if busy || self.controller.notices().next().is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
