//! Defines the events the machine reacts to.
//!
//! 定义状态机响应的事件。

/// A user-facing or externally delivered event.
///
/// The rendering layer translates raw input events into these; `Saved` is
/// the confirmation event delivered when the owner's value becomes
/// authoritative (e.g. after a parent re-fetch).
///
/// 面向用户或由外部送达的事件。
///
/// 渲染层将原始输入事件翻译成这些事件；`Saved` 是当所有者的值成为权威值时
/// （例如父级重新拉取之后）送达的确认事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// The read-only rendering was clicked.
    /// 只读渲染被点击。
    Click,
    /// The read-only rendering received focus.
    /// 只读渲染获得焦点。
    Focus,
    /// The input control produced a new draft value.
    /// 输入控件产生了新的草稿值。
    Change(String),
    /// Escape pressed: abandon the edit.
    /// 按下 Escape：放弃编辑。
    Esc,
    /// Enter pressed: submit the draft.
    /// 按下 Enter：提交草稿。
    Enter,
    /// The input control lost focus: submit the draft.
    /// 输入控件失去焦点：提交草稿。
    Blur,
    /// An authoritative value arrived from outside.
    /// 权威值从外部送达。
    Saved(String),
}

/// A state-scoped timer elapsing.
///
/// Exactly one of these can be armed at a time; entering a state that owns
/// a timer arms it, leaving that state by any transition disarms it.
///
/// 状态作用域定时器到期。
///
/// 同一时刻最多武装一个定时器；进入拥有定时器的状态时武装它，
/// 以任何转换离开该状态时解除它。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutEvent {
    /// `loading` gave up waiting for confirmation.
    /// `loading` 放弃等待确认。
    SaveTimeout,
    /// The transient `saved` feedback ran its course.
    /// 瞬态 `saved` 反馈结束。
    SavedElapsed,
    /// The transient `error` feedback ran its course.
    /// 瞬态 `error` 反馈结束。
    ErrorElapsed,
}

impl EditEvent {
    /// Gets the event's name for logging.
    /// 获取事件名用于日志记录。
    pub fn name(&self) -> &'static str {
        match self {
            EditEvent::Click => "click",
            EditEvent::Focus => "focus",
            EditEvent::Change(_) => "change",
            EditEvent::Esc => "esc",
            EditEvent::Enter => "enter",
            EditEvent::Blur => "blur",
            EditEvent::Saved(_) => "saved",
        }
    }
}
