//! Text-argument function calls

use serde::{Deserialize, Serialize};

/// A request to run one registered skill function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Caller-chosen identifier echoed back in the result
    pub id: String,
    pub skill: String,
    pub function: String,
    /// Raw argument text, passed through unparsed
    #[serde(default)]
    pub input: String,
}

impl FunctionCall {
    pub fn new(
        id: impl Into<String>,
        skill: impl Into<String>,
        function: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            skill: skill.into(),
            function: function.into(),
            input: input.into(),
        }
    }

    /// `skill.function`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.skill, self.function)
    }
}

/// Outcome of a [`FunctionCall`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    #[serde(rename = "callId")]
    pub call_id: String,
    /// Function output, or the error message when `is_error` is set
    pub content: String,
    #[serde(rename = "isError", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl FunctionResult {
    pub fn success(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: error.into(),
            is_error: true,
        }
    }
}
