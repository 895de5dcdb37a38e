//! Backend commands queued from UI to backend worker.

use shared::domain::{RequestId, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ExtractEssay {
        request_id: RequestId,
        file: SelectedFile,
    },
    GradeEssay {
        request_id: RequestId,
        essay: String,
        topic: String,
    },
}

impl BackendCommand {
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::ExtractEssay { request_id, .. } | Self::GradeEssay { request_id, .. } => {
                *request_id
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtractEssay { .. } => "extract_essay",
            Self::GradeEssay { .. } => "grade_essay",
        }
    }
}
