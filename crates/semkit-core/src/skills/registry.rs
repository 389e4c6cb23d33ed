//! Skill registry
//!
//! Holds the functions imported under a skill name and dispatches
//! text-argument calls to them. Lookups are case-insensitive on the
//! qualified name `skill.function`.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::{SkillError, SkillFunction, SkillResult};
use crate::logging::{FileLogger, SharedLogger};
use crate::types::{FunctionCall, FunctionResult};

/// Description of a registered function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub skill: String,
    pub name: String,
    pub description: String,
    /// JSON Schema for the text argument
    pub input_schema: Value,
}

impl FunctionInfo {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.skill, self.name)
    }
}

struct RegisteredFunction {
    skill: String,
    function: Arc<dyn SkillFunction>,
}

fn registry_key(skill: &str, function: &str) -> String {
    format!("{}.{}", skill.to_lowercase(), function.to_lowercase())
}

/// Registry of skill functions
///
/// `SkillRegistry::default()` logs to the debug log file; hosts pass their
/// own [`Logger`](crate::logging::Logger) through [`SkillRegistry::new`].
///
/// ```rust,ignore
/// let registry = SkillRegistry::default();
/// registry.import_skill("wait", [Arc::new(WaitSkill::new()) as Arc<dyn SkillFunction>]);
/// registry.invoke("wait", "wait", "5").await?;
/// ```
pub struct SkillRegistry {
    functions: RwLock<HashMap<String, RegisteredFunction>>,
    logger: SharedLogger,
}

impl SkillRegistry {
    pub fn new(logger: SharedLogger) -> Self {
        Self {
            functions: RwLock::new(HashMap::new()),
            logger,
        }
    }

    /// Register `functions` under `skill_name`
    ///
    /// A function with the same qualified name replaces the earlier one.
    /// Returns the number of functions imported.
    pub fn import_skill<I>(&self, skill_name: &str, functions: I) -> usize
    where
        I: IntoIterator<Item = Arc<dyn SkillFunction>>,
    {
        let mut table = self.functions.write();
        let mut count = 0;
        for function in functions {
            let key = registry_key(skill_name, function.name());
            let replaced = table.insert(
                key.clone(),
                RegisteredFunction {
                    skill: skill_name.to_string(),
                    function,
                },
            );
            if replaced.is_some() {
                self.logger.warn(&format!("[SkillRegistry] Replaced function {}", key));
            }
            count += 1;
        }

        self.logger.info(&format!(
            "[SkillRegistry] Imported {} functions into skill '{}'",
            count, skill_name
        ));
        count
    }

    /// Remove every function of a skill, returning how many were removed
    pub fn remove_skill(&self, skill_name: &str) -> usize {
        let skill_lower = skill_name.to_lowercase();
        let mut table = self.functions.write();
        let before = table.len();
        table.retain(|_, f| f.skill.to_lowercase() != skill_lower);
        before - table.len()
    }

    pub fn get(&self, skill: &str, function: &str) -> Option<Arc<dyn SkillFunction>> {
        self.functions
            .read()
            .get(&registry_key(skill, function))
            .map(|f| Arc::clone(&f.function))
    }

    pub fn contains(&self, skill: &str, function: &str) -> bool {
        self.functions.read().contains_key(&registry_key(skill, function))
    }

    /// All registered functions, ordered by qualified name
    pub fn functions(&self) -> Vec<FunctionInfo> {
        let mut infos: Vec<FunctionInfo> = self
            .functions
            .read()
            .values()
            .map(|f| FunctionInfo {
                skill: f.skill.clone(),
                name: f.function.name().to_string(),
                description: f.function.description().to_string(),
                input_schema: f.function.input_schema(),
            })
            .collect();
        infos.sort_by_key(|info| info.qualified_name().to_lowercase());
        infos
    }

    pub fn function_count(&self) -> usize {
        self.functions.read().len()
    }

    /// Invoke one function with its argument text
    pub async fn invoke(&self, skill: &str, function: &str, input: &str) -> SkillResult<Option<String>> {
        // Clone the handle out so the lock is released before awaiting.
        let target = self
            .get(skill, function)
            .ok_or_else(|| SkillError::FunctionNotFound(format!("{}.{}", skill, function)))?;

        self.logger.debug(&format!("[SkillRegistry] Invoking {}.{}", skill, function));
        target.invoke(input).await
    }

    /// Invoke a call and wrap the outcome for the caller
    pub async fn invoke_call(&self, call: &FunctionCall) -> FunctionResult {
        match self.invoke(&call.skill, &call.function, &call.input).await {
            Ok(output) => FunctionResult::success(call.id.clone(), output.unwrap_or_default()),
            Err(e) => {
                self.logger.error(&format!(
                    "[SkillRegistry] {} failed: {}",
                    call.qualified_name(),
                    e
                ));
                FunctionResult::error(call.id.clone(), e.to_string())
            }
        }
    }

    /// Invoke several calls concurrently on the current task
    ///
    /// Results are returned in the order of `calls`.
    pub async fn invoke_calls(&self, calls: &[FunctionCall]) -> Vec<FunctionResult> {
        join_all(calls.iter().map(|call| self.invoke_call(call))).await
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new(Arc::new(FileLogger::new(module_path!())))
    }
}

impl std::fmt::Debug for SkillRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillRegistry")
            .field("functions", &self.functions().iter().map(FunctionInfo::qualified_name).collect::<Vec<_>>())
            .finish()
    }
}
