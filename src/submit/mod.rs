//! Submission module: payload encoding and the intake endpoint client

mod client;
mod payload;
mod traits;

pub use client::{IntakeClient, SubmitError, SubmitReceipt};
pub use payload::encode_form;
pub use traits::IntakeClientTrait;

#[cfg(test)]
pub use traits::MockIntakeClientTrait;
