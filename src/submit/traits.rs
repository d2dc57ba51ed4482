//! Trait abstraction for the intake client to enable mocking in tests

use super::client::{SubmitError, SubmitReceipt};
use async_trait::async_trait;

/// Trait for intake endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeClientTrait: Send + Sync {
    /// POST the serialized form to the intake endpoint.
    ///
    /// Any non-success status or transport fault is an error; there is no
    /// retry and no client-side timeout beyond the transport's own.
    async fn submit(&self, fields: &[(String, String)]) -> Result<SubmitReceipt, SubmitError>;
}
