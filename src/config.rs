//! 定义了编辑生命周期状态机的可配置参数。
//! Defines configurable parameters for the edit lifecycle state machine.

use crate::commit::CommitMode;
use std::{fmt, sync::Arc, time::Duration};

/// A structure containing all configurable parameters for a machine instance.
///
/// 包含状态机实例所有可配置参数的结构体。
#[derive(Debug, Clone)]
pub struct Config {
    /// The committed value the machine starts with.
    /// 状态机启动时的已提交值。
    pub initial_value: String,

    /// Behavioral flags and the commit strategy.
    /// 行为开关与提交策略。
    pub behavior: BehaviorConfig,

    /// Timing parameters for the state-scoped timers.
    /// 各状态作用域定时器的时间参数。
    pub timing: TimingConfig,

    /// Optional validator applied to the draft value. Absence means every
    /// value is valid.
    /// 应用于草稿值的可选校验器。缺省表示所有值都有效。
    pub validate: Option<Validator>,
}

/// Behavioral flags and the commit strategy.
///
/// 行为开关与提交策略。
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// When set, the widget never leaves the read-only states.
    /// 设置后，控件永远不会离开只读状态。
    pub is_disabled: bool,
    /// Allow re-entering `edit` while a commit is in flight.
    /// 允许在提交进行中重新进入 `edit` 状态。
    pub allow_edit_while_loading: bool,
    /// Apply the draft as the committed value immediately on submit, rolling
    /// back if the commit fails or times out.
    /// 提交时立即将草稿应用为已提交值，失败或超时则回滚。
    pub optimistic_update: bool,
    /// How completion of the asynchronous commit is determined.
    /// 异步提交的完成方式。
    pub commit_mode: CommitMode,
}

/// Timing parameters for the state-scoped timers.
///
/// 各状态作用域定时器的时间参数。
#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// How long `loading` waits for confirmation before giving up and
    /// showing the error state.
    /// `loading` 状态在放弃并显示错误状态之前等待确认的时长。
    pub save_timeout: Duration,
    /// How long the transient `saved` feedback state lasts.
    /// 瞬态 `saved` 反馈状态的持续时长。
    pub saved_duration: Duration,
    /// How long the transient `error` feedback state lasts.
    /// 瞬态 `error` 反馈状态的持续时长。
    pub error_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: String::new(),
            behavior: BehaviorConfig::default(),
            timing: TimingConfig::default(),
            validate: None,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            is_disabled: false,
            allow_edit_while_loading: false,
            optimistic_update: true,
            commit_mode: CommitMode::Confirmation,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            save_timeout: Duration::from_millis(2000),
            saved_duration: Duration::from_millis(700),
            error_duration: Duration::from_millis(1000),
        }
    }
}

/// A cloneable, shareable validation predicate over draft values.
///
/// 可克隆、可共享的草稿值校验谓词。
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Validator {
    /// Wraps a predicate function as a validator.
    /// 将谓词函数包装为校验器。
    pub fn new(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Runs the predicate against a value.
    /// 对一个值运行谓词。
    pub fn check(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings_and_flags() {
        let config = Config::default();
        assert_eq!(config.timing.save_timeout, Duration::from_millis(2000));
        assert_eq!(config.timing.saved_duration, Duration::from_millis(700));
        assert_eq!(config.timing.error_duration, Duration::from_millis(1000));
        assert!(!config.behavior.is_disabled);
        assert!(!config.behavior.allow_edit_while_loading);
        assert!(config.behavior.optimistic_update);
        assert_eq!(config.behavior.commit_mode, CommitMode::Confirmation);
        assert!(config.validate.is_none());
    }

    #[test]
    fn test_validator_check_and_clone() {
        let validator = Validator::new(|value| value.len() > 3);
        assert!(validator.check("pizza"));
        assert!(!validator.check("ab"));

        let cloned = validator.clone();
        assert!(cloned.check("sushi"));
        assert_eq!(format!("{:?}", cloned), "Validator(..)");
    }
}
