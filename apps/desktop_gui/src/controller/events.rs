//! Backend-to-UI events, error modeling, and user-facing notices.

use shared::{
    domain::{ExtractedEssay, GradeResult, RequestId},
    error::GradingError,
};

#[derive(Debug)]
pub enum UiEvent {
    ExtractionFinished {
        request_id: RequestId,
        essay: ExtractedEssay,
    },
    ExtractionFailed {
        request_id: RequestId,
        error: UiError,
    },
    GradingFinished {
        request_id: RequestId,
        result: GradeResult,
    },
    GradingFailed {
        request_id: RequestId,
        error: UiError,
    },
    /// The bridge worker could not start; nothing queued will ever complete.
    BackendUnavailable(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Service,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Extraction,
    Grading,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
            || message_lower.contains("queue")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_grading_error(context: UiErrorContext, err: &GradingError) -> Self {
        let category = match err {
            GradingError::Status { .. } => UiErrorCategory::Service,
            GradingError::Transport { .. } => UiErrorCategory::Transport,
            GradingError::Decode { .. } | GradingError::File { .. } => {
                UiErrorCategory::Validation
            }
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    /// Detail for logs; never shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The generic notice shown for this failure. Service detail is dropped.
    pub fn notice(&self) -> Notice {
        match self.context {
            UiErrorContext::Extraction => Notice::error(
                "Upload Failed",
                "Failed to process PDF. Please try again.",
            ),
            UiErrorContext::Grading => {
                Notice::error("Error", "Failed to grade essay. Please try again.")
            }
            UiErrorContext::BackendStartup => Notice::error(
                "Service Unavailable",
                "The grading worker could not start. Restart the app and try again.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn missing_information() -> Self {
        Self::error(
            "Missing Information",
            "Please provide both topic and essay text.",
        )
    }

    pub fn no_file_selected() -> Self {
        Self::error("No File Selected", "Please select a PDF file to upload.")
    }

    pub fn unsupported_file() -> Self {
        Self::error("Unsupported File", "PDF files only.")
    }

    pub fn extraction_complete() -> Self {
        Self::success("Success", "Essay extracted from PDF successfully!")
    }

    pub fn grading_complete() -> Self {
        Self::success(
            "Grading Complete",
            "Your essay has been evaluated successfully!",
        )
    }
}
