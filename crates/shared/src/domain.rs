use std::path::PathBuf;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(RequestId);

impl RequestId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

pub const DEFAULT_GRADE: &str = "6";

pub const DEFAULT_FEEDBACK: [&str; 4] = [
    "Essay is well-structured with clear introduction, body, and conclusion.",
    "Good use of examples to support main points.",
    "Grammar and spelling are mostly correct.",
    "Could improve transitions between paragraphs.",
];

pub fn default_feedback() -> Vec<String> {
    DEFAULT_FEEDBACK.iter().map(|item| item.to_string()).collect()
}

/// Top-level screen of the client. `Results` carries the graded essay so the
/// results screen cannot be shown without a result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Hero,
    Input,
    Results {
        topic: String,
        result: GradeResult,
    },
}

impl ViewState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Input => "input",
            Self::Results { .. } => "results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormTab {
    #[default]
    Type,
    Upload,
}

impl FormTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Type => "Type Essay",
            Self::Upload => "Upload PDF",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("essay.pdf")
            .to_string();
        Self { path, file_name }
    }

    pub fn is_pdf(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EssayDraft {
    pub topic: String,
    pub essay_text: String,
    pub selected_file: Option<SelectedFile>,
}

impl EssayDraft {
    /// Both fields must contain something other than whitespace.
    pub fn is_submittable(&self) -> bool {
        !self.topic.trim().is_empty() && !self.essay_text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub grade: String,
    pub feedback: Vec<String>,
}

impl GradeResult {
    pub fn badge(&self) -> String {
        format!("Grade {}", self.grade)
    }
}

impl Default for GradeResult {
    fn default() -> Self {
        Self {
            grade: DEFAULT_GRADE.to_string(),
            feedback: default_feedback(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEssay {
    pub topic: String,
    pub essay: String,
}
