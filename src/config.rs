//! Configuration handling for the intake client
//!
//! Values come from the platform config file when present, with environment
//! overrides applied on top at load time. The loaded struct is passed into
//! the app at construction; nothing below this layer reads the environment.

use crate::state::ValidationRules;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default intake endpoint (the deployment proxy target)
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/upload";
/// Default maximum resume size in megabytes
const DEFAULT_MAX_UPLOAD_MB: u64 = 5;

/// User configuration for the intake client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Intake endpoint URL
    pub endpoint: Option<String>,
    /// Maximum resume size in megabytes
    pub max_upload_mb: Option<u64>,
    /// Whether a resume attachment is mandatory
    pub resume_required: Option<bool>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "tcus", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: IntakeConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Environment overrides, mirroring the deployment's variable names
    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("INTAKE_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Ok(mb) = std::env::var("INTAKE_MAX_FILE_MB") {
            if let Ok(mb) = mb.parse() {
                self.max_upload_mb = Some(mb);
            }
        }
        if let Ok(required) = std::env::var("INTAKE_RESUME_REQUIRED") {
            self.resume_required = Some(required == "1" || required.eq_ignore_ascii_case("true"));
        }
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Intake endpoint URL with default
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Maximum resume size in megabytes with default
    pub fn max_upload_mb(&self) -> u64 {
        self.max_upload_mb.unwrap_or(DEFAULT_MAX_UPLOAD_MB)
    }

    /// Whether a resume attachment is mandatory (default: yes)
    pub fn resume_required(&self) -> bool {
        self.resume_required.unwrap_or(true)
    }

    /// Project the config onto the validators' bounds
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            resume_required: self.resume_required(),
            max_upload_mb: self.max_upload_mb(),
        }
    }
}
