//! Settings sources
//!
//! Flat, read-only key-value sources that credentials are resolved from:
//! - `SettingsSource` trait for implementing custom sources
//! - `DotenvSource`: `KEY=VALUE` files
//! - `EnvSettingsSource`: the process environment
//! - `MemorySettingsSource`: fixed values
//! - `ChainSettingsSource`: ordered fallback across sources

mod traits;
mod dotenv_source;
mod env_source;
mod memory_source;
mod chain_source;

pub use traits::{SettingsSource, SettingsError, SettingsResult};
pub use dotenv_source::DotenvSource;
pub use env_source::EnvSettingsSource;
pub use memory_source::MemorySettingsSource;
pub use chain_source::ChainSettingsSource;
