//! Credential resolution
//!
//! Turns a settings location into validated provider credentials.

mod settings_resolver;

pub use settings_resolver::{SettingsResolver, SettingsLocation, ValidationMode, DEFAULT_DOTENV_FILE};
