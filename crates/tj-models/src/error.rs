//! Error types for model operations.

use thiserror::Error;

/// Errors from the model layer.
///
/// Non-finite parameter values are deliberately NOT an error: they propagate
/// through the math into the output samples, and guarding inputs is the
/// caller's job.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("No closed form for model '{model}': evaluate is defined for deterministic models only")]
    NoClosedForm { model: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;
