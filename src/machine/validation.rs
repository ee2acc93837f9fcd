//! 状态转换合法性与守卫条件模块
//! State Transition Legality and Guard Condition Module
//!
//! 该模块负责转换合法性检查和事件守卫判断，为生命周期状态机提供一致且
//! 可靠的验证服务。
//!
//! This module handles transition legality checks and event guard
//! decisions. It provides consistent and reliable validation services for
//! the lifecycle state machine.

use super::{context::EditContext, state::EditState};
use crate::config::BehaviorConfig;

/// 状态验证器，负责所有状态相关的验证和检查逻辑
/// State validator responsible for all state-related validation and check logic
pub struct StateValidator;

impl StateValidator {
    /// 验证状态转换是否合法
    /// Validate if state transition is legal
    pub fn is_valid_transition(current_state: &EditState, new_state: &EditState) -> bool {
        use EditState::*;

        match (current_state, new_state) {
            // View状态的转换：激活进入编辑，或外部确认直接进入saved
            // Transitions from View: activation into edit, or an external
            // confirmation straight into saved
            (View, Edit) => true,
            (View, Saved) => true,

            // Edit状态的转换：取消/空操作回到view，提交进入loading
            // Transitions from Edit: cancel/no-op back to view, submit into loading
            (Edit, View) => true,
            (Edit, Loading) => true,

            // Loading状态的转换：重新编辑、确认、超时失败，或等待式提交
            // 成功直接回到view
            // Transitions from Loading: re-edit, confirmation, timeout
            // failure, or awaited-commit success straight back to view
            (Loading, Edit) => true,
            (Loading, Saved) => true,
            (Loading, Error) => true,
            (Loading, View) => true,

            // Saved状态的转换：反馈结束回到view，或重新编辑
            // Transitions from Saved: feedback elapses back to view, or re-edit
            (Saved, View) => true,
            (Saved, Edit) => true,

            // Error状态的转换：反馈结束回到view、重新编辑，或迟来的外部确认
            // Transitions from Error: feedback elapses back to view,
            // re-edit, or a late external confirmation
            (Error, View) => true,
            (Error, Edit) => true,
            (Error, Saved) => true,

            // 同状态转换（幂等；saved→saved 重启反馈定时器）
            // Same state transition (idempotent; saved→saved restarts the
            // feedback timer)
            (state1, state2) if state1 == state2 => true,

            // 其他转换都是无效的
            // All other transitions are invalid
            _ => false,
        }
    }

    /// 检查控件是否启用（激活进入编辑的守卫）
    /// Check if the widget is enabled (guard for activating into edit)
    pub fn is_enabled(behavior: &BehaviorConfig) -> bool {
        !behavior.is_disabled
    }

    /// 检查是否允许在提交进行中重新进入编辑
    /// Check if re-entering edit is allowed while a commit is in flight
    pub fn can_edit_while_loading(behavior: &BehaviorConfig) -> bool {
        !behavior.is_disabled && behavior.allow_edit_while_loading
    }

    /// 检查提交是否应该发生：草稿有效且与已提交值不同。
    /// 未更改的有效草稿不得触发保存。
    ///
    /// Check if a commit should happen: the draft is valid and differs
    /// from the committed value. An unchanged, valid draft must not
    /// trigger a save.
    pub fn should_commit(context: &EditContext) -> bool {
        context.is_valid && context.is_dirty()
    }

    /// 检查状态是否拥有作用域定时器
    /// Check if the state owns a scoped timer
    pub fn owns_timer(state: &EditState) -> bool {
        matches!(
            state,
            EditState::Loading | EditState::Saved | EditState::Error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        // 正常的编辑提交流程
        assert!(StateValidator::is_valid_transition(
            &EditState::View,
            &EditState::Edit
        ));
        assert!(StateValidator::is_valid_transition(
            &EditState::Edit,
            &EditState::Loading
        ));
        assert!(StateValidator::is_valid_transition(
            &EditState::Loading,
            &EditState::Saved
        ));
        assert!(StateValidator::is_valid_transition(
            &EditState::Saved,
            &EditState::View
        ));

        // 失败路径
        assert!(StateValidator::is_valid_transition(
            &EditState::Loading,
            &EditState::Error
        ));
        assert!(StateValidator::is_valid_transition(
            &EditState::Error,
            &EditState::View
        ));

        // 外部确认可以从view直接进入saved
        assert!(StateValidator::is_valid_transition(
            &EditState::View,
            &EditState::Saved
        ));

        // 等待式提交成功直接回到view
        assert!(StateValidator::is_valid_transition(
            &EditState::Loading,
            &EditState::View
        ));

        // saved→saved 自转换重启定时器
        assert!(StateValidator::is_valid_transition(
            &EditState::Saved,
            &EditState::Saved
        ));
    }

    #[test]
    fn test_invalid_transitions() {
        // 不能跳过edit直接进入loading
        assert!(!StateValidator::is_valid_transition(
            &EditState::View,
            &EditState::Loading
        ));

        // 反馈状态之间不能互相转换（error只能经由loading之后的确认进入saved）
        assert!(!StateValidator::is_valid_transition(
            &EditState::Saved,
            &EditState::Error
        ));

        // view不能直接进入error
        assert!(!StateValidator::is_valid_transition(
            &EditState::View,
            &EditState::Error
        ));

        // edit不能直接出现保存反馈
        assert!(!StateValidator::is_valid_transition(
            &EditState::Edit,
            &EditState::Saved
        ));
        assert!(!StateValidator::is_valid_transition(
            &EditState::Edit,
            &EditState::Error
        ));
    }

    #[test]
    fn test_enabled_guards() {
        let mut behavior = BehaviorConfig::default();
        assert!(StateValidator::is_enabled(&behavior));
        assert!(!StateValidator::can_edit_while_loading(&behavior));

        behavior.allow_edit_while_loading = true;
        assert!(StateValidator::can_edit_while_loading(&behavior));

        // 禁用锁定一切
        behavior.is_disabled = true;
        assert!(!StateValidator::is_enabled(&behavior));
        assert!(!StateValidator::can_edit_while_loading(&behavior));
    }

    #[test]
    fn test_should_commit() {
        let mut context = EditContext::new("pizza".into(), None);

        // 未更改的有效草稿：不提交
        assert!(!StateValidator::should_commit(&context));

        // 更改且有效：提交
        context.draft = "sushi".into();
        assert!(StateValidator::should_commit(&context));

        // 更改但无效：不提交
        context.is_valid = false;
        assert!(!StateValidator::should_commit(&context));
    }

    #[test]
    fn test_timer_ownership() {
        assert!(!StateValidator::owns_timer(&EditState::View));
        assert!(!StateValidator::owns_timer(&EditState::Edit));
        assert!(StateValidator::owns_timer(&EditState::Loading));
        assert!(StateValidator::owns_timer(&EditState::Saved));
        assert!(StateValidator::owns_timer(&EditState::Error));
    }
}
