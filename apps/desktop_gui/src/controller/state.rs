//! View controller: which screen is mounted, the essay draft, and the
//! in-flight flags for the two bridge calls.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use shared::domain::{EssayDraft, FormTab, GradeResult, RequestId, SelectedFile, ViewState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{Notice, UiError, UiErrorContext, UiEvent};

pub const NOTICE_LIMIT: usize = 3;
pub const NOTICE_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingGrade {
    request_id: RequestId,
    topic: String,
}

#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct ViewController {
    view: ViewState,
    draft: EssayDraft,
    active_tab: FormTab,
    grading: Option<PendingGrade>,
    extracting: Option<RequestId>,
    last_request_id: RequestId,
    notices: VecDeque<ActiveNotice>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            view: ViewState::Hero,
            draft: EssayDraft::default(),
            active_tab: FormTab::Type,
            grading: None,
            extracting: None,
            last_request_id: RequestId(0),
            notices: VecDeque::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn draft(&self) -> &EssayDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EssayDraft {
        &mut self.draft
    }

    pub fn active_tab(&self) -> FormTab {
        self.active_tab
    }

    pub fn is_grading(&self) -> bool {
        self.grading.is_some()
    }

    pub fn is_extracting(&self) -> bool {
        self.extracting.is_some()
    }

    pub fn get_started(&mut self) {
        if self.view != ViewState::Hero {
            return;
        }
        self.enter_input();
        tracing::debug!("view: hero -> input");
    }

    pub fn set_tab(&mut self, tab: FormTab) {
        if self.view == ViewState::Input {
            self.active_tab = tab;
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        if self.view != ViewState::Input {
            return;
        }
        if !file.is_pdf() {
            self.push_notice(Notice::unsupported_file());
            return;
        }
        tracing::debug!(file_name = %file.file_name, "essay file selected");
        self.draft.selected_file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.draft.selected_file = None;
    }

    /// Validates the typed draft and returns the grading command to queue.
    /// Returns nothing while a grading call is already in flight.
    pub fn submit_text(&mut self) -> Option<BackendCommand> {
        if self.view != ViewState::Input || self.grading.is_some() {
            return None;
        }
        if !self.draft.is_submittable() {
            self.push_notice(Notice::missing_information());
            return None;
        }

        let request_id = self.issue_request_id();
        self.grading = Some(PendingGrade {
            request_id,
            topic: self.draft.topic.clone(),
        });
        Some(BackendCommand::GradeEssay {
            request_id,
            essay: self.draft.essay_text.clone(),
            topic: self.draft.topic.clone(),
        })
    }

    /// Returns the extraction command for the selected PDF, if any.
    pub fn submit_file(&mut self) -> Option<BackendCommand> {
        if self.view != ViewState::Input || self.extracting.is_some() {
            return None;
        }
        let Some(file) = self.draft.selected_file.clone() else {
            self.push_notice(Notice::no_file_selected());
            return None;
        };

        let request_id = self.issue_request_id();
        self.extracting = Some(request_id);
        Some(BackendCommand::ExtractEssay { request_id, file })
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::ExtractionFinished { request_id, essay } => {
                if !self.awaiting_extraction(request_id) {
                    tracing::debug!(request_id = request_id.0, "dropping stale extraction result");
                    return;
                }
                self.extracting = None;
                self.draft.topic = essay.topic;
                self.draft.essay_text = essay.essay;
                self.active_tab = FormTab::Type;
                self.push_notice(Notice::extraction_complete());
            }
            UiEvent::ExtractionFailed { request_id, error } => {
                if !self.awaiting_extraction(request_id) {
                    tracing::debug!(request_id = request_id.0, "dropping stale extraction failure");
                    return;
                }
                self.extracting = None;
                self.push_failure(request_id, &error);
            }
            UiEvent::GradingFinished { request_id, result } => {
                let Some(pending) = self.take_pending_grade(request_id) else {
                    tracing::debug!(request_id = request_id.0, "dropping stale grade result");
                    return;
                };
                self.show_results(pending.topic, result);
                self.push_notice(Notice::grading_complete());
            }
            UiEvent::GradingFailed { request_id, error } => {
                if self.take_pending_grade(request_id).is_none() {
                    tracing::debug!(request_id = request_id.0, "dropping stale grade failure");
                    return;
                }
                self.push_failure(request_id, &error);
            }
            UiEvent::BackendUnavailable(error) => {
                tracing::error!(error = error.message(), "grading worker unavailable");
                self.grading = None;
                self.extracting = None;
                self.push_notice(error.notice());
            }
        }
    }

    /// Rolls back a submission whose command never reached the worker.
    pub fn reject(&mut self, request_id: RequestId, error: UiError) {
        match error.context() {
            UiErrorContext::Grading => {
                let _ = self.take_pending_grade(request_id);
            }
            UiErrorContext::Extraction => {
                if self.extracting == Some(request_id) {
                    self.extracting = None;
                }
            }
            UiErrorContext::BackendStartup => {}
        }
        self.push_notice(error.notice());
    }

    /// Leaves the results screen for a fresh, empty draft.
    pub fn back(&mut self) {
        if matches!(self.view, ViewState::Results { .. }) {
            self.enter_input();
            tracing::debug!("view: results -> input");
        }
    }

    /// Starts over from the landing screen. Anything still in flight is
    /// ignored when it completes.
    pub fn reload(&mut self) {
        let last_request_id = self.last_request_id;
        *self = Self::new();
        self.last_request_id = last_request_id;
        tracing::debug!("view: reloaded to hero");
    }

    pub fn notices(&self) -> impl Iterator<Item = &ActiveNotice> {
        self.notices.iter()
    }

    pub fn dismiss_notice(&mut self, index: usize) {
        let _ = self.notices.remove(index);
    }

    pub fn prune_notices(&mut self, now: Instant) {
        self.notices
            .retain(|active| now.saturating_duration_since(active.shown_at) < NOTICE_TTL);
    }

    fn push_notice(&mut self, notice: Notice) {
        if self.notices.len() == NOTICE_LIMIT {
            self.notices.pop_front();
        }
        self.notices.push_back(ActiveNotice {
            notice,
            shown_at: Instant::now(),
        });
    }

    fn push_failure(&mut self, request_id: RequestId, error: &UiError) {
        tracing::warn!(
            request_id = request_id.0,
            category = ?error.category(),
            error = error.message(),
            "bridge call failed"
        );
        self.push_notice(error.notice());
    }

    fn enter_input(&mut self) {
        self.view = ViewState::Input;
        self.draft = EssayDraft::default();
        self.active_tab = FormTab::Type;
        self.grading = None;
        self.extracting = None;
    }

    fn show_results(&mut self, topic: String, result: GradeResult) {
        self.view = ViewState::Results { topic, result };
        self.draft = EssayDraft::default();
        self.extracting = None;
        tracing::debug!("view: input -> results");
    }

    fn issue_request_id(&mut self) -> RequestId {
        self.last_request_id = self.last_request_id.next();
        self.last_request_id
    }

    fn awaiting_extraction(&self, request_id: RequestId) -> bool {
        self.view == ViewState::Input && self.extracting == Some(request_id)
    }

    fn take_pending_grade(&mut self, request_id: RequestId) -> Option<PendingGrade> {
        if self.view != ViewState::Input {
            return None;
        }
        if self.grading.as_ref().map(|pending| pending.request_id) != Some(request_id) {
            return None;
        }
        self.grading.take()
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
