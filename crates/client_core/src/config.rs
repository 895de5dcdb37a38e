use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const SETTINGS_FILE: &str = "grader.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub service_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    service_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `grader.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if file.exists() {
        let raw = fs::read_to_string(file)
            .with_context(|| format!("failed to read settings file '{}'", file.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("invalid settings file '{}'", file.display()))?;
        if let Some(v) = file_cfg.service_url {
            settings.service_url = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = v;
        }
    }

    let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = env("GRADER_SERVICE_URL") {
        settings.service_url = v;
    }
    if let Some(v) = env("APP__SERVICE_URL") {
        settings.service_url = v;
    }
    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = v
            .trim()
            .parse()
            .with_context(|| format!("APP__REQUEST_TIMEOUT_SECS is not a number: {v}"))?;
    }

    settings.service_url = normalize_service_url(&settings.service_url)?;
    if settings.request_timeout_secs == 0 {
        bail!("request timeout must be at least one second");
    }
    Ok(settings)
}

/// Trims whitespace and trailing slashes and checks the URL is http(s).
pub fn normalize_service_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(DEFAULT_SERVICE_URL.to_string());
    }
    let parsed = url::Url::parse(trimmed)
        .with_context(|| format!("invalid grading service url: {trimmed}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => bail!("grading service url must use http or https, got {other}"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
