//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};
use crate::controller::state::ViewController;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    let request_id = cmd.request_id();
    let context = match &cmd {
        BackendCommand::ExtractEssay { .. } => UiErrorContext::Extraction,
        BackendCommand::GradeEssay { .. } => UiErrorContext::Grading,
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(
                command = cmd_name,
                request_id = request_id.0,
                "queued ui->backend command"
            );
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::from_message(
            context,
            "UI command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => Err(UiError::from_message(
            context,
            "Backend command processor disconnected (possible startup/runtime failure)",
        )),
    }
}

/// Queues a command produced by the controller, rolling the controller back
/// when the worker cannot take it.
pub fn submit(
    controller: &mut ViewController,
    cmd_tx: &Sender<BackendCommand>,
    cmd: Option<BackendCommand>,
) {
    let Some(cmd) = cmd else {
        return;
    };
    let request_id = cmd.request_id();
    if let Err(err) = dispatch_backend_command(cmd_tx, cmd) {
        tracing::warn!(request_id = request_id.0, error = err.message(), "command not queued");
        controller.reject(request_id, err);
    }
}
