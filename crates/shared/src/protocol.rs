use serde::{Deserialize, Serialize};

use crate::domain::{default_feedback, ExtractedEssay, GradeResult, DEFAULT_GRADE};

pub const GRADE_ESSAY_PATH: &str = "/grade-essay";
pub const OCR_ESSAY_PATH: &str = "/ocr-marathi-essay";
pub const OCR_FILE_FIELD: &str = "file";
pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEssayRequest {
    pub essay: String,
    pub topic: String,
}

/// Body returned by the grading endpoint. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEssayResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Vec<String>>,
}

impl GradeEssayResponse {
    /// Substitutes the built-in defaults field by field. An empty grade counts
    /// as missing.
    pub fn into_result(self) -> GradeResult {
        let grade = self
            .grade
            .filter(|grade| !grade.is_empty())
            .unwrap_or_else(|| DEFAULT_GRADE.to_string());
        let feedback = self.feedback.unwrap_or_else(default_feedback);
        GradeResult { grade, feedback }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrEssayResponse {
    pub essay: String,
    pub topic: String,
}

impl From<OcrEssayResponse> for ExtractedEssay {
    fn from(value: OcrEssayResponse) -> Self {
        Self {
            topic: value.topic,
            essay: value.essay,
        }
    }
}
