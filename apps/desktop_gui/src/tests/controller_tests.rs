use super::*;
use crate::controller::events::{NoticeSeverity, UiErrorCategory};
use shared::{
    domain::{default_feedback, ExtractedEssay, DEFAULT_GRADE},
    error::{Endpoint, GradingError},
};

fn controller_at_input() -> ViewController {
    let mut controller = ViewController::new();
    controller.get_started();
    controller
}

fn type_draft(controller: &mut ViewController, topic: &str, essay: &str) {
    let draft = controller.draft_mut();
    draft.topic = topic.to_string();
    draft.essay_text = essay.to_string();
}

fn grading_request_id(cmd: &BackendCommand) -> RequestId {
    match cmd {
        BackendCommand::GradeEssay { request_id, .. } => *request_id,
        other => panic!("expected grade command, got {other:?}"),
    }
}

fn notice_titles(controller: &ViewController) -> Vec<String> {
    controller
        .notices()
        .map(|active| active.notice.title.clone())
        .collect()
}

fn grading_failure(request_id: RequestId) -> UiEvent {
    UiEvent::GradingFailed {
        request_id,
        error: UiError::from_grading_error(
            UiErrorContext::Grading,
            &GradingError::Status {
                endpoint: Endpoint::GradeEssay,
                status: 500,
            },
        ),
    }
}

#[test]
fn starts_on_hero_and_get_started_moves_to_empty_input() {
    let mut controller = ViewController::new();
    assert_eq!(controller.view(), &ViewState::Hero);

    controller.get_started();
    assert_eq!(controller.view(), &ViewState::Input);
    assert_eq!(controller.draft(), &EssayDraft::default());
    assert_eq!(controller.active_tab(), FormTab::Type);
    assert!(!controller.is_grading());
    assert!(!controller.is_extracting());
}

#[test]
fn blank_or_whitespace_fields_never_produce_a_grade_command() {
    let blanks = ["", " ", "\t", "\n", "  \r\n "];
    for topic in blanks {
        for essay in ["...", "a real essay"] {
            let mut controller = controller_at_input();
            type_draft(&mut controller, topic, essay);
            assert!(controller.submit_text().is_none(), "topic {topic:?}");
            assert!(!controller.is_grading());
        }
    }
    for essay in blanks {
        let mut controller = controller_at_input();
        type_draft(&mut controller, "Education", essay);
        assert!(controller.submit_text().is_none(), "essay {essay:?}");
    }
    for topic in blanks {
        for essay in blanks {
            let mut controller = controller_at_input();
            type_draft(&mut controller, topic, essay);
            assert!(controller.submit_text().is_none());
            assert_eq!(notice_titles(&controller), vec!["Missing Information"]);
            assert_eq!(controller.view(), &ViewState::Input);
        }
    }
}

#[test]
fn submit_text_sends_untrimmed_fields_once_while_loading() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, " Education ", "...\n");

    let cmd = controller.submit_text().expect("grade command");
    assert_eq!(
        cmd,
        BackendCommand::GradeEssay {
            request_id: grading_request_id(&cmd),
            essay: "...\n".to_string(),
            topic: " Education ".to_string(),
        }
    );
    assert!(controller.is_grading());

    assert!(controller.submit_text().is_none(), "duplicate click ignored");
    assert!(notice_titles(&controller).is_empty());
}

#[test]
fn successful_grade_moves_to_results_with_service_fields() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    let request_id = grading_request_id(&controller.submit_text().expect("cmd"));

    let result = GradeResult {
        grade: "A".to_string(),
        feedback: vec!["Good flow".to_string()],
    };
    controller.apply(UiEvent::GradingFinished {
        request_id,
        result: result.clone(),
    });

    assert_eq!(
        controller.view(),
        &ViewState::Results {
            topic: "Education".to_string(),
            result,
        }
    );
    assert!(!controller.is_grading());
    assert_eq!(controller.draft(), &EssayDraft::default());
    assert_eq!(notice_titles(&controller), vec!["Grading Complete"]);
}

#[test]
fn results_use_topic_captured_at_submission() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    let request_id = grading_request_id(&controller.submit_text().expect("cmd"));
    controller.draft_mut().topic = "edited while loading".to_string();

    controller.apply(UiEvent::GradingFinished {
        request_id,
        result: GradeResult::default(),
    });
    match controller.view() {
        ViewState::Results { topic, result } => {
            assert_eq!(topic, "Education");
            assert_eq!(result.grade, DEFAULT_GRADE);
            assert_eq!(result.feedback, default_feedback());
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn failed_grade_stays_on_input_without_result() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    let request_id = grading_request_id(&controller.submit_text().expect("cmd"));

    controller.apply(grading_failure(request_id));

    assert_eq!(controller.view(), &ViewState::Input);
    assert!(!controller.is_grading());
    assert_eq!(controller.draft().topic, "Education");
    let notices: Vec<_> = controller.notices().map(|a| a.notice.clone()).collect();
    assert_eq!(
        notices,
        vec![Notice::error(
            "Error",
            "Failed to grade essay. Please try again."
        )]
    );

    assert!(controller.submit_text().is_some(), "user may retry manually");
}

#[test]
fn back_from_results_clears_result_and_draft() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    controller.select_file(SelectedFile::from_path("/tmp/essay.pdf"));
    let request_id = grading_request_id(&controller.submit_text().expect("cmd"));
    controller.apply(UiEvent::GradingFinished {
        request_id,
        result: GradeResult::default(),
    });

    controller.back();
    assert_eq!(controller.view(), &ViewState::Input);
    assert_eq!(controller.draft(), &EssayDraft::default());
    assert_eq!(controller.active_tab(), FormTab::Type);
}

#[test]
fn back_and_get_started_only_act_from_their_source_state() {
    let mut controller = ViewController::new();
    controller.back();
    assert_eq!(controller.view(), &ViewState::Hero);

    controller.get_started();
    type_draft(&mut controller, "kept", "kept");
    controller.get_started();
    controller.back();
    assert_eq!(controller.draft().topic, "kept");
}

#[test]
fn submit_file_without_selection_shows_notice() {
    let mut controller = controller_at_input();
    controller.set_tab(FormTab::Upload);
    assert!(controller.submit_file().is_none());
    assert!(!controller.is_extracting());
    assert_eq!(notice_titles(&controller), vec!["No File Selected"]);
}

#[test]
fn non_pdf_selection_is_refused() {
    let mut controller = controller_at_input();
    controller.select_file(SelectedFile::from_path("/tmp/notes.docx"));
    assert!(controller.draft().selected_file.is_none());
    assert_eq!(notice_titles(&controller), vec!["Unsupported File"]);
}

#[test]
fn extraction_fills_draft_and_switches_to_type_tab_without_grading() {
    let mut controller = controller_at_input();
    controller.set_tab(FormTab::Upload);
    controller.select_file(SelectedFile::from_path("/tmp/essay.pdf"));
    let cmd = controller.submit_file().expect("extract command");
    let request_id = match &cmd {
        BackendCommand::ExtractEssay { request_id, file } => {
            assert_eq!(file.file_name, "essay.pdf");
            *request_id
        }
        other => panic!("expected extract command, got {other:?}"),
    };
    assert!(controller.is_extracting());
    assert!(controller.submit_file().is_none(), "trigger disabled while processing");

    controller.apply(UiEvent::ExtractionFinished {
        request_id,
        essay: ExtractedEssay {
            topic: "Hobbies".to_string(),
            essay: "माझा आवडता छंद".to_string(),
        },
    });

    assert_eq!(controller.draft().topic, "Hobbies");
    assert_eq!(controller.draft().essay_text, "माझा आवडता छंद");
    assert_eq!(controller.active_tab(), FormTab::Type);
    assert!(!controller.is_extracting());
    assert!(!controller.is_grading(), "extraction never grades on its own");
    assert_eq!(controller.view(), &ViewState::Input);
    assert_eq!(notice_titles(&controller), vec!["Success"]);
}

#[test]
fn failed_extraction_leaves_form_unchanged() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "typed topic", "typed essay");
    controller.set_tab(FormTab::Upload);
    controller.select_file(SelectedFile::from_path("/tmp/essay.pdf"));
    let request_id = controller.submit_file().expect("cmd").request_id();

    controller.apply(UiEvent::ExtractionFailed {
        request_id,
        error: UiError::from_grading_error(
            UiErrorContext::Extraction,
            &GradingError::Transport {
                endpoint: Endpoint::OcrEssay,
                message: "connection refused".to_string(),
            },
        ),
    });

    assert_eq!(controller.draft().topic, "typed topic");
    assert_eq!(controller.draft().essay_text, "typed essay");
    assert_eq!(controller.active_tab(), FormTab::Upload);
    assert!(!controller.is_extracting());
    assert_eq!(notice_titles(&controller), vec!["Upload Failed"]);
}

#[test]
fn tab_switch_keeps_both_tabs_data() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "topic", "essay");
    controller.set_tab(FormTab::Upload);
    controller.select_file(SelectedFile::from_path("/tmp/essay.pdf"));
    controller.set_tab(FormTab::Type);

    assert_eq!(controller.draft().topic, "topic");
    assert!(controller.draft().selected_file.is_some());
}

#[test]
fn grading_and_extraction_flags_are_independent() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "topic", "essay");
    controller.select_file(SelectedFile::from_path("/tmp/essay.pdf"));

    let grade = controller.submit_text().expect("grade");
    let extract = controller.submit_file().expect("extract");
    assert_ne!(grade.request_id(), extract.request_id());
    assert!(controller.is_grading());
    assert!(controller.is_extracting());

    controller.apply(grading_failure(grade.request_id()));
    assert!(!controller.is_grading());
    assert!(controller.is_extracting());
}

#[test]
fn responses_after_reload_are_ignored() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    let stale = grading_request_id(&controller.submit_text().expect("cmd"));

    controller.reload();
    assert_eq!(controller.view(), &ViewState::Hero);
    assert!(!controller.is_grading());

    controller.apply(UiEvent::GradingFinished {
        request_id: stale,
        result: GradeResult::default(),
    });
    assert_eq!(controller.view(), &ViewState::Hero);

    controller.get_started();
    type_draft(&mut controller, "Second", "...");
    let fresh = grading_request_id(&controller.submit_text().expect("cmd"));
    assert_ne!(fresh, stale, "request ids are not reused after reload");

    controller.apply(UiEvent::GradingFinished {
        request_id: stale,
        result: GradeResult::default(),
    });
    assert_eq!(controller.view(), &ViewState::Input);
    assert!(controller.is_grading());
}

#[test]
fn stale_extraction_after_back_is_ignored() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    controller.select_file(SelectedFile::from_path("/tmp/essay.pdf"));
    let extract_id = controller.submit_file().expect("extract").request_id();
    let grade_id = grading_request_id(&controller.submit_text().expect("grade"));
    controller.apply(UiEvent::GradingFinished {
        request_id: grade_id,
        result: GradeResult::default(),
    });
    controller.back();

    controller.apply(UiEvent::ExtractionFinished {
        request_id: extract_id,
        essay: ExtractedEssay {
            topic: "late".to_string(),
            essay: "late".to_string(),
        },
    });
    assert_eq!(controller.draft(), &EssayDraft::default());
}

#[test]
fn rejected_command_rolls_back_loading_flag() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    let request_id = grading_request_id(&controller.submit_text().expect("cmd"));

    controller.reject(
        request_id,
        UiError::from_message(UiErrorContext::Grading, "UI command queue is full; please retry"),
    );
    assert!(!controller.is_grading());
    assert_eq!(notice_titles(&controller), vec!["Error"]);
}

#[test]
fn backend_unavailable_clears_flags_and_reports() {
    let mut controller = controller_at_input();
    type_draft(&mut controller, "Education", "...");
    controller.submit_text().expect("cmd");

    controller.apply(UiEvent::BackendUnavailable(UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: failed to build runtime",
    )));
    assert!(!controller.is_grading());
    let notices: Vec<_> = controller.notices().map(|a| a.notice.clone()).collect();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, NoticeSeverity::Error);
}

#[test]
fn notices_are_capped_and_expire() {
    let mut controller = controller_at_input();
    for _ in 0..(NOTICE_LIMIT + 2) {
        assert!(controller.submit_text().is_none());
    }
    assert_eq!(controller.notices().count(), NOTICE_LIMIT);

    controller.dismiss_notice(0);
    assert_eq!(controller.notices().count(), NOTICE_LIMIT - 1);

    controller.prune_notices(Instant::now() + NOTICE_TTL + Duration::from_millis(1));
    assert_eq!(controller.notices().count(), 0);
}

#[test]
fn error_categories_follow_grading_error_kind() {
    let status = UiError::from_grading_error(
        UiErrorContext::Grading,
        &GradingError::Status {
            endpoint: Endpoint::GradeEssay,
            status: 502,
        },
    );
    assert_eq!(status.category(), UiErrorCategory::Service);
    assert!(status.message().contains("502"));

    let queue = UiError::from_message(
        UiErrorContext::Grading,
        "Backend command processor disconnected (possible startup/runtime failure)",
    );
    assert_eq!(queue.category(), UiErrorCategory::Transport);
    assert_eq!(queue.notice().title, "Error");
}
