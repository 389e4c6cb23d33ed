//! Core skills and their registration seam
//!
//! A skill is a named group of [`SkillFunction`]s. Each function takes one
//! text argument and may produce text; a template or function-calling
//! engine looks functions up in a [`SkillRegistry`] and awaits them.
//!
//! ```rust,ignore
//! use semkit_core::skills::{SkillRegistry, SkillFunction, WaitSkill};
//!
//! registry.import_skill("wait", [Arc::new(WaitSkill::new()) as Arc<dyn SkillFunction>]);
//! registry.invoke("wait", "wait", "5").await?;
//! ```

mod traits;
mod wait;
mod registry;

pub use traits::{SkillFunction, SkillError, SkillResult};
pub use wait::WaitSkill;
pub use registry::{SkillRegistry, FunctionInfo};
