//! Semkit Core
//!
//! Two independent building blocks of the semkit toolkit:
//!
//! - **Credential settings**: resolve OpenAI and Azure OpenAI connection
//!   parameters from a dotenv-style file (or another settings source) and
//!   validate that the required ones are present.
//! - **Core skills**: text-argument functions for a template or
//!   function-calling engine, starting with the `wait` skill.
//!
//! ```rust,no_run
//! use semkit_core::SettingsResolver;
//!
//! let resolver = SettingsResolver::current_dir();
//! let openai = resolver.resolve_openai()?;
//! let azure = resolver.resolve_azure_openai(true)?;
//! # Ok::<(), semkit_core::SettingsError>(())
//! ```

pub mod types;
pub mod logging;
pub mod settings;
pub mod resolver;
pub mod skills;

pub use types::{
    CredentialKey, OpenAICredentials, AzureOpenAICredentials,
    FunctionCall, FunctionResult,
};

pub use settings::{
    SettingsSource, SettingsError, SettingsResult,
    DotenvSource, EnvSettingsSource, MemorySettingsSource, ChainSettingsSource,
};

pub use logging::{Logger, SharedLogger, FileLogger};

pub use resolver::{SettingsResolver, SettingsLocation, ValidationMode};

pub use skills::{SkillFunction, SkillError, SkillResult, SkillRegistry, FunctionInfo, WaitSkill};
