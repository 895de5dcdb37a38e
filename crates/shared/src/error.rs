use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    GradeEssay,
    OcrEssay,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::GradeEssay => crate::protocol::GRADE_ESSAY_PATH,
            Self::OcrEssay => crate::protocol::OCR_ESSAY_PATH,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Failure talking to the Grading Service. The detail is for logs only; the
/// UI shows a generic per-endpoint message.
#[derive(Debug, Error)]
pub enum GradingError {
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: Endpoint, message: String },
    #[error("invalid response payload from {endpoint}: {message}")]
    Decode { endpoint: Endpoint, message: String },
    #[error("could not read essay file '{path}': {message}")]
    File { path: String, message: String },
}

impl GradingError {
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Status { endpoint, .. }
            | Self::Transport { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(*endpoint),
            Self::File { .. } => None,
        }
    }
}
