//! Skill function trait and errors

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors returned by skill functions and the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillError {
    /// The argument text could not be interpreted
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Function not found: {0}")]
    FunctionNotFound(String),

    #[error("Function failed: {0}")]
    Failed(String),
}

impl SkillError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type SkillResult<T> = Result<T, SkillError>;

/// A named, described, asynchronous function taking one text argument
///
/// This is the contract a template or function-calling engine drives:
/// it supplies the argument text, awaits the call, and uses the returned
/// text (if any) as the function's output.
#[async_trait]
pub trait SkillFunction: Send + Sync {
    /// Function name within its skill
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema of the single text argument
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "input": { "type": "string" }
            },
            "required": ["input"]
        })
    }

    /// Run the function; `None` means it produces no value
    async fn invoke(&self, input: &str) -> SkillResult<Option<String>>;
}
