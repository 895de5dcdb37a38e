use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::de::DeserializeOwned;
use shared::{
    domain::{ExtractedEssay, GradeResult, SelectedFile},
    error::{Endpoint, GradingError},
    protocol::{
        GradeEssayRequest, GradeEssayResponse, OcrEssayResponse, OCR_FILE_FIELD, PDF_MIME_TYPE,
    },
};
use tracing::{info, warn};

pub mod config;

pub use config::{load_settings, ClientSettings};

/// PDF bytes ready to be posted to the OCR endpoint.
#[derive(Debug, Clone)]
pub struct EssayUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl EssayUpload {
    pub async fn read(file: &SelectedFile) -> Result<Self, GradingError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|err| GradingError::File {
                path: file.path.display().to_string(),
                message: err.to_string(),
            })?;
        Ok(Self {
            file_name: file.file_name.clone(),
            bytes,
        })
    }
}

/// The two operations offered by the remote Grading Service.
#[async_trait]
pub trait GradingService: Send + Sync {
    async fn extract(&self, upload: EssayUpload) -> Result<ExtractedEssay, GradingError>;
    async fn grade(&self, essay: &str, topic: &str) -> Result<GradeResult, GradingError>;
}

pub struct HttpGradingService {
    http: Client,
    base_url: String,
}

impl HttpGradingService {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("failed to build grading service HTTP client")?;
        Ok(Self::with_client(http, settings.service_url.clone()))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

fn transport_error(endpoint: Endpoint, err: reqwest::Error) -> GradingError {
    GradingError::Transport {
        endpoint,
        message: err.to_string(),
    }
}

async fn decode_success<T: DeserializeOwned>(
    endpoint: Endpoint,
    response: Response,
) -> Result<T, GradingError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        warn!(%endpoint, status = status.as_u16(), detail = %detail, "grading service rejected request");
        return Err(GradingError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }
    let body = response
        .bytes()
        .await
        .map_err(|err| transport_error(endpoint, err))?;
    serde_json::from_slice(&body).map_err(|err| GradingError::Decode {
        endpoint,
        message: err.to_string(),
    })
}

#[async_trait]
impl GradingService for HttpGradingService {
    async fn extract(&self, upload: EssayUpload) -> Result<ExtractedEssay, GradingError> {
        let endpoint = Endpoint::OcrEssay;
        let size_bytes = upload.bytes.len();
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name.clone())
            .mime_str(PDF_MIME_TYPE)
            .map_err(|err| transport_error(endpoint, err))?;
        let form = Form::new().part(OCR_FILE_FIELD, part);

        let response = self
            .http
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport_error(endpoint, err))?;
        let body: OcrEssayResponse = decode_success(endpoint, response).await?;
        info!(
            file_name = %upload.file_name,
            size_bytes,
            topic_chars = body.topic.chars().count(),
            essay_chars = body.essay.chars().count(),
            "ocr: essay extracted"
        );
        Ok(body.into())
    }

    async fn grade(&self, essay: &str, topic: &str) -> Result<GradeResult, GradingError> {
        let endpoint = Endpoint::GradeEssay;
        let response = self
            .http
            .post(self.url(endpoint))
            .json(&GradeEssayRequest {
                essay: essay.to_string(),
                topic: topic.to_string(),
            })
            .send()
            .await
            .map_err(|err| transport_error(endpoint, err))?;
        let body: GradeEssayResponse = decode_success(endpoint, response).await?;
        if body.grade.is_none() || body.feedback.is_none() {
            info!(
                grade_present = body.grade.is_some(),
                feedback_present = body.feedback.is_some(),
                "grade: substituting defaults for missing fields"
            );
        }
        let result = body.into_result();
        info!(grade = %result.grade, feedback_items = result.feedback.len(), "grade: essay graded");
        Ok(result)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
