//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ClientSettings, EssayUpload, GradingService, HttpGradingService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the worker thread that owns the tokio runtime and the HTTP client.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let service: Arc<dyn GradingService> = match HttpGradingService::new(&settings) {
                Ok(service) => Arc::new(service),
                Err(err) => {
                    tracing::error!("failed to build grading service client: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::BackendUnavailable(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: {err:#}"),
                    )));
                    return;
                }
            };
            tracing::info!(service_url = %settings.service_url, "backend worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                let service = Arc::clone(&service);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = handle_command(service.as_ref(), cmd).await;
                    if ui_tx.try_send(event).is_err() {
                        tracing::warn!("ui event queue unavailable; dropping backend result");
                    }
                });
            }
            tracing::info!("command queue closed; backend worker stopping");
        });
    });
}

/// Runs one bridge call to completion and reports its outcome.
pub async fn handle_command(service: &dyn GradingService, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::ExtractEssay { request_id, file } => {
            let outcome = match EssayUpload::read(&file).await {
                Ok(upload) => service.extract(upload).await,
                Err(err) => Err(err),
            };
            match outcome {
                Ok(essay) => UiEvent::ExtractionFinished { request_id, essay },
                Err(err) => UiEvent::ExtractionFailed {
                    request_id,
                    error: UiError::from_grading_error(UiErrorContext::Extraction, &err),
                },
            }
        }
        BackendCommand::GradeEssay {
            request_id,
            essay,
            topic,
        } => match service.grade(&essay, &topic).await {
            Ok(result) => UiEvent::GradingFinished { request_id, result },
            Err(err) => UiEvent::GradingFailed {
                request_id,
                error: UiError::from_grading_error(UiErrorContext::Grading, &err),
            },
        },
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
