//! 编辑生命周期状态机核心 - 纯转换逻辑
//! Edit Lifecycle Machine Core - Pure Transition Logic
//!
//! 该模块是状态机的核心：一个同步、无副作用的转换函数。对每个事件，
//! 它更新状态与上下文，并返回一组由驱动方执行的效果（武装/解除定时器、
//! 调用提交操作）。定时器以作用域于当前状态的可取消截止时间建模。
//!
//! This module is the core of the machine: a synchronous, side-effect-free
//! transition function. For each event it updates the state and context and
//! returns a list of effects for the driver to execute (arm/disarm the
//! timer, invoke the commit operation). Timers are modeled as cancellable
//! deadlines scoped to the current state.

use super::{
    context::EditContext,
    event::{EditEvent, TimeoutEvent},
    state::EditState,
    validation::StateValidator,
};
use crate::{config::Config, error::Result};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tracing::{trace, warn};

/// 全局单调递增的实例ID，用于日志记录
/// Globally monotonic instance ID for logging
static NEXT_MACHINE_ID: AtomicU64 = AtomicU64::new(0);

/// An instruction for the driver, produced by a transition.
///
/// The pure machine never touches a clock or spawns a task itself; it
/// describes what should happen and the driver makes it happen.
///
/// 转换产生的、交给驱动方的指令。
///
/// 纯状态机自身从不接触时钟或派生任务；它描述应当发生什么，由驱动方
/// 使其发生。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the state-scoped timer. Replaces any previously armed timer.
    /// 武装状态作用域定时器。替换之前武装的任何定时器。
    ArmTimer(TimeoutEvent, Duration),
    /// Cancel the armed timer, if any.
    /// 取消已武装的定时器（如有）。
    DisarmTimer,
    /// Invoke the asynchronous commit operation with the submitted draft.
    /// 以提交的草稿调用异步提交操作。
    Commit(String),
}

/// A point-in-time copy of the machine's state and context, the unit the
/// rendering layer consumes.
///
/// 状态机状态与上下文的时点副本，是渲染层消费的单元。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The current lifecycle state.
    /// 当前生命周期状态。
    pub state: EditState,
    /// The current extended state.
    /// 当前扩展状态。
    pub context: EditContext,
}

/// 生命周期状态机，拥有当前状态与上下文并执行全部转换
/// The lifecycle machine, owning the current state and context and
/// executing every transition
#[derive(Debug)]
pub struct LifecycleMachine {
    /// 当前状态
    /// Current state
    state: EditState,
    /// 扩展状态
    /// Extended state
    context: EditContext,
    /// 实例配置
    /// Instance configuration
    config: Config,
    /// 实例ID，用于日志记录
    /// Instance ID for logging
    id: u64,
}

impl LifecycleMachine {
    /// Creates a machine in the initial `view` state for the configured
    /// initial value.
    ///
    /// 为配置的初始值创建处于初始 `view` 状态的状态机。
    pub fn new(config: Config) -> Self {
        let context = EditContext::new(config.initial_value.clone(), config.validate.as_ref());
        let id = NEXT_MACHINE_ID.fetch_add(1, Ordering::Relaxed);
        trace!(id, initial_value = %context.committed, "Lifecycle machine created");
        Self {
            state: EditState::View,
            context,
            config,
            id,
        }
    }

    /// 获取当前状态
    /// Gets the current state
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// 获取当前上下文
    /// Gets the current context
    pub fn context(&self) -> &EditContext {
        &self.context
    }

    /// Takes a point-in-time snapshot of state and context.
    /// 拍取状态与上下文的时点快照。
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            context: self.context.clone(),
        }
    }

    /// Processes one event to completion and returns the effects the
    /// driver must execute. Events that do not apply in the current state
    /// are ignored without error.
    ///
    /// 将一个事件处理完毕并返回驱动方必须执行的效果。在当前状态下不适用
    /// 的事件被忽略，不产生错误。
    pub fn handle_event(&mut self, event: EditEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match (self.state, event) {
            // 激活进入编辑
            // Activation into edit
            (EditState::View, EditEvent::Click | EditEvent::Focus)
                if StateValidator::is_enabled(&self.config.behavior) =>
            {
                self.transition_to(EditState::Edit, &mut effects);
            }

            // 外部确认：无论来自哪个只读状态都提交权威值并（重新）进入saved
            // External confirmation: from any read-only state, commit the
            // authoritative value and (re-)enter saved
            (
                EditState::View | EditState::Loading | EditState::Saved | EditState::Error,
                EditEvent::Saved(value),
            ) => {
                self.context.commit_external(value);
                self.transition_to(EditState::Saved, &mut effects);
            }

            // 编辑中：更新草稿并重新校验，无状态转换
            // Editing: update the draft and revalidate, no state change
            (EditState::Edit, EditEvent::Change(value)) => {
                self.context.draft = value;
                self.context.revalidate(self.config.validate.as_ref());
                trace!(
                    id = self.id,
                    draft = %self.context.draft,
                    is_valid = self.context.is_valid,
                    "Draft changed"
                );
            }

            // 放弃编辑
            // Abandon the edit
            (EditState::Edit, EditEvent::Esc) => {
                self.transition_to(EditState::View, &mut effects);
            }

            // 提交草稿：有效且已更改才进入loading；无效则停留在edit等待
            // 修正；有效但未更改则是空操作，回到view
            // Submit the draft: only a valid, changed draft enters loading;
            // an invalid one stays in edit awaiting correction; a valid,
            // unchanged one is a no-op and falls back to view
            (EditState::Edit, EditEvent::Enter | EditEvent::Blur) => {
                if StateValidator::should_commit(&self.context) {
                    self.transition_to(EditState::Loading, &mut effects);
                } else if !self.context.is_valid {
                    trace!(id = self.id, draft = %self.context.draft, "Submit blocked by validation");
                } else {
                    self.transition_to(EditState::View, &mut effects);
                }
            }

            // 提交进行中重新进入编辑
            // Re-entering edit while a commit is in flight
            (EditState::Loading, EditEvent::Click | EditEvent::Focus)
                if StateValidator::can_edit_while_loading(&self.config.behavior) =>
            {
                self.transition_to(EditState::Edit, &mut effects);
            }

            // 从反馈状态重新进入编辑
            // Re-entering edit from a feedback state
            (EditState::Saved | EditState::Error, EditEvent::Click | EditEvent::Focus)
                if StateValidator::is_enabled(&self.config.behavior) =>
            {
                self.transition_to(EditState::Edit, &mut effects);
            }

            // 其余事件在当前状态下不适用
            // Remaining events do not apply in the current state
            (state, event) => {
                trace!(
                    id = self.id,
                    state = state.name(),
                    event = event.name(),
                    "Event ignored in current state"
                );
            }
        }

        effects
    }

    /// Reacts to the state-scoped timer elapsing. A timeout that no longer
    /// matches the current state is stale and ignored.
    ///
    /// 响应状态作用域定时器到期。与当前状态不再匹配的超时是过期的，将被
    /// 忽略。
    pub fn handle_timeout(&mut self, timeout: TimeoutEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match (self.state, timeout) {
            // 保存超时：乐观模式下回滚，然后显示错误反馈
            // Save timeout: roll back under optimistic mode, then show the
            // error feedback
            (EditState::Loading, TimeoutEvent::SaveTimeout) => {
                warn!(id = self.id, "Commit timed out waiting for confirmation");
                if self.config.behavior.optimistic_update {
                    self.context.rollback();
                }
                self.transition_to(EditState::Error, &mut effects);
            }

            // 反馈结束，回到view
            // Feedback over, back to view
            (EditState::Saved, TimeoutEvent::SavedElapsed)
            | (EditState::Error, TimeoutEvent::ErrorElapsed) => {
                self.transition_to(EditState::View, &mut effects);
            }

            (state, timeout) => {
                trace!(
                    id = self.id,
                    state = state.name(),
                    ?timeout,
                    "Stale timeout ignored"
                );
            }
        }

        effects
    }

    /// Reacts to the awaited commit operation resolving. Only meaningful
    /// while still in `loading`; a result arriving after the state moved on
    /// is ignored.
    ///
    /// 响应等待式提交操作的完成。仅在仍处于 `loading` 时有意义；状态已经
    /// 前进之后到达的结果将被忽略。
    pub fn handle_commit_result(&mut self, result: Result<()>) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.state != EditState::Loading {
            trace!(
                id = self.id,
                state = self.state.name(),
                "Commit result arrived after leaving loading, ignored"
            );
            return effects;
        }

        match result {
            Ok(()) => {
                self.context.commit_draft();
                self.transition_to(EditState::View, &mut effects);
            }
            Err(error) => {
                warn!(id = self.id, %error, "Commit operation failed");
                if self.config.behavior.optimistic_update {
                    self.context.rollback();
                }
                self.transition_to(EditState::Error, &mut effects);
            }
        }

        effects
    }

    /// Executes a transition: validates it, swaps the state, runs entry
    /// actions, and re-derives the timer effects. Self-transitions re-run
    /// entry actions and restart the state's timer.
    ///
    /// 执行一次转换：验证、切换状态、运行进入动作并重新推导定时器效果。
    /// 自转换会重新运行进入动作并重启该状态的定时器。
    fn transition_to(&mut self, new_state: EditState, effects: &mut Vec<Effect>) {
        if !StateValidator::is_valid_transition(&self.state, &new_state) {
            warn!(
                id = self.id,
                current_state = self.state.name(),
                attempted_state = new_state.name(),
                "Invalid state transition attempted"
            );
            return;
        }

        let old_state = self.state;
        self.state = new_state;

        // 离开拥有定时器的状态（包括自转换）都会先取消其定时器
        // Leaving a timer-owning state (self-transitions included) first
        // cancels its timer
        if StateValidator::owns_timer(&old_state) {
            effects.push(Effect::DisarmTimer);
        }

        match new_state {
            // view进入动作：草稿重置为已提交值
            // view entry: the draft resets to the committed value
            EditState::View => {
                self.context.reset_draft();
            }
            // edit进入动作：仅重新校验；从loading/saved/error重新进入时
            // 草稿得以保留
            // edit entry: revalidate only; the draft survives re-entry
            // from loading/saved/error
            EditState::Edit => {
                self.context.revalidate(self.config.validate.as_ref());
            }
            // loading进入动作：可选的乐观应用，然后调用提交
            // loading entry: optional optimistic apply, then invoke commit
            EditState::Loading => {
                if self.config.behavior.optimistic_update {
                    self.context.apply_optimistic();
                }
                effects.push(Effect::Commit(self.context.draft.clone()));
                effects.push(Effect::ArmTimer(
                    TimeoutEvent::SaveTimeout,
                    self.config.timing.save_timeout,
                ));
            }
            EditState::Saved => {
                effects.push(Effect::ArmTimer(
                    TimeoutEvent::SavedElapsed,
                    self.config.timing.saved_duration,
                ));
            }
            EditState::Error => {
                effects.push(Effect::ArmTimer(
                    TimeoutEvent::ErrorElapsed,
                    self.config.timing.error_duration,
                ));
            }
        }

        trace!(
            id = self.id,
            from = old_state.name(),
            to = new_state.name(),
            committed = %self.context.committed,
            "State transition executed"
        );
    }
}
