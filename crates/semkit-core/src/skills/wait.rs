//! Wait skill: suspend for a number of seconds

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::traits::{SkillError, SkillFunction, SkillResult};

const NOT_A_NUMBER: &str = "seconds text must be a number";

/// Pauses the calling task for a caller-given number of seconds
///
/// The wait is a tokio timer, so it yields to other tasks instead of
/// blocking a thread. Cancellation is left to the caller (drop the future).
///
/// Usage from a template engine: `{{wait.wait 5}}` waits five seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaitSkill;

impl WaitSkill {
    pub fn new() -> Self {
        Self
    }

    /// Parse a seconds argument into a duration
    ///
    /// Accepts any decimal number, with surrounding whitespace. Negative
    /// values clamp to zero. NaN, infinities and values too large for a
    /// `Duration` are rejected like non-numeric text.
    pub fn parse_seconds(seconds_text: &str) -> SkillResult<Duration> {
        let seconds: f64 = seconds_text
            .trim()
            .parse()
            .map_err(|_| SkillError::invalid_argument(NOT_A_NUMBER))?;
        if seconds.is_nan() {
            return Err(SkillError::invalid_argument(NOT_A_NUMBER));
        }

        Duration::try_from_secs_f64(seconds.max(0.0))
            .map_err(|_| SkillError::invalid_argument(NOT_A_NUMBER))
    }

    /// Wait for `seconds_text` seconds
    ///
    /// Fails before suspending if the text is not a number.
    pub async fn wait(&self, seconds_text: &str) -> SkillResult<()> {
        let duration = Self::parse_seconds(seconds_text)?;
        crate::debug_log!("waiting {:?}", duration);
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

#[async_trait]
impl SkillFunction for WaitSkill {
    fn name(&self) -> &str {
        "wait"
    }

    fn description(&self) -> &str {
        "Wait for a certain number of seconds."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "seconds_text": {
                    "type": "string",
                    "description": "Number of seconds to wait; negative values wait zero seconds"
                }
            },
            "required": ["seconds_text"]
        })
    }

    async fn invoke(&self, input: &str) -> SkillResult<Option<String>> {
        self.wait(input).await?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(WaitSkill::parse_seconds("5").unwrap(), Duration::from_secs(5));
        assert_eq!(WaitSkill::parse_seconds(" 0.25 ").unwrap(), Duration::from_millis(250));
        assert_eq!(WaitSkill::parse_seconds("1e1").unwrap(), Duration::from_secs(10));
        assert_eq!(WaitSkill::parse_seconds("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_negative_clamps_to_zero() {
        assert_eq!(WaitSkill::parse_seconds("-3").unwrap(), Duration::ZERO);
        assert_eq!(WaitSkill::parse_seconds("-inf").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for text in ["abc", "", "5s", "NaN", "inf", "1e400"] {
            assert_eq!(
                WaitSkill::parse_seconds(text),
                Err(SkillError::InvalidArgument(NOT_A_NUMBER.to_string())),
                "input {text:?}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_suspends_at_least_requested_time() {
        let start = Instant::now();
        WaitSkill::new().wait("5").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_wait_returns_immediately() {
        let start = Instant::now();
        WaitSkill::new().wait("-3").await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_wait_fails_before_suspending() {
        let start = Instant::now();
        let err = WaitSkill::new().wait("abc").await.unwrap_err();
        assert_eq!(err.to_string(), "seconds text must be a number");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_share_one_task() {
        let skill = WaitSkill::new();
        let start = Instant::now();

        // Three concurrent waits on the current task finish together.
        let (a, b, c) = tokio::join!(skill.wait("3"), skill.wait("3"), skill.wait("1"));
        a.unwrap();
        b.unwrap();
        c.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invoke_produces_no_value() {
        let skill = WaitSkill::new();
        assert_eq!(skill.name(), "wait");
        assert_eq!(skill.invoke("1").await, Ok(None));
        assert!(skill.invoke("soon").await.is_err());
    }
}
