//! Logging abstractions
//!
//! Two flavours, both runtime-agnostic:
//! - the [`Logger`] trait, injected into components that a host embeds
//!   (the skill registry), so the host decides where lines go. The
//!   default is [`FileLogger`];
//! - [`file_logger`], a process-wide debug log for code paths that have no
//!   logger handle (settings resolution).

mod traits;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};

pub use file_logger::{log, debug, info, warn, error, log_file_path, FileLogger, LogLevel};
