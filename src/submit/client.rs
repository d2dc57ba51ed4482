//! HTTP client for the spreadsheet-backed intake endpoint
//!
//! The endpoint is an opaque sink: it accepts form-URL-encoded key/value
//! pairs and answers with a success status and an arbitrary text body, or a
//! non-success status describing the problem.

use super::traits::IntakeClientTrait;
use crate::config::IntakeConfig;
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

/// Accepted submission: the endpoint's status and response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub status: u16,
    #[allow(dead_code)]
    pub body: String,
}

/// Why a submission failed, as a tagged result rather than a caught fault
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    #[error("intake endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },
    /// The request never completed (DNS, connect, TLS, mid-body failure)
    #[error("failed to reach intake endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Reduce the failure to the single banner string shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Endpoint { status, body } => {
                let body = body.trim();
                if body.is_empty() {
                    format!("Submission failed with status {status}")
                } else {
                    format!("Submission failed ({status}): {body}")
                }
            }
            Self::Transport(_) => "Unexpected error".to_string(),
        }
    }
}

/// Client for the intake endpoint
pub struct IntakeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl IntakeClient {
    /// Create a new intake client against the configured endpoint
    pub fn new(config: &IntakeConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }
}

#[async_trait]
impl IntakeClientTrait for IntakeClient {
    async fn submit(&self, fields: &[(String, String)]) -> Result<SubmitReceipt, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, pairs = fields.len(), "posting intake form");

        let response = self.http.post(&self.endpoint).form(fields).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(SubmitReceipt {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(SubmitError::Endpoint {
                status: status.as_u16(),
                body,
            })
        }
    }
}
