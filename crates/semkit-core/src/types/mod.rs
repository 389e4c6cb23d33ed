//! Core types shared across modules

mod credentials;
mod function;

pub use credentials::{CredentialKey, OpenAICredentials, AzureOpenAICredentials};
pub use function::{FunctionCall, FunctionResult};
