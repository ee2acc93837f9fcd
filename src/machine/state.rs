//! Defines the states of the edit lifecycle.
//!
//! 定义编辑生命周期的状态。

/// The state of an inline-edit widget.
/// 行内编辑控件的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditState {
    /// The committed value is displayed read-only. Initial state.
    /// 只读显示已提交值。初始状态。
    View,

    /// The draft value is being edited in an input control.
    /// 草稿值正在输入控件中被编辑。
    Edit,

    /// A commit is in flight; the machine is waiting for confirmation,
    /// resolution, or the save timeout.
    /// 提交进行中；状态机正在等待确认、完成或保存超时。
    Loading,

    /// Transient feedback: the value was saved. Auto-reverts to `View`.
    /// 瞬态反馈：值已保存。自动回到 `View`。
    Saved,

    /// Transient feedback: the commit failed or timed out. Auto-reverts
    /// to `View`.
    /// 瞬态反馈：提交失败或超时。自动回到 `View`。
    Error,
}

impl EditState {
    /// Gets the string representation of the state, for logs and consumers
    /// that key styling off the state name.
    ///
    /// 获取状态的字符串表示，供日志以及按状态名决定样式的消费者使用。
    pub fn name(&self) -> &'static str {
        match self {
            EditState::View => "view",
            EditState::Edit => "edit",
            EditState::Loading => "loading",
            EditState::Saved => "saved",
            EditState::Error => "error",
        }
    }

    /// Whether the widget is showing the read-only rendering. Every state
    /// except `Edit` renders the committed value.
    ///
    /// 控件是否处于只读渲染。除 `Edit` 外的所有状态都渲染已提交值。
    pub fn is_display(&self) -> bool {
        !matches!(self, EditState::Edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(EditState::View.name(), "view");
        assert_eq!(EditState::Edit.name(), "edit");
        assert_eq!(EditState::Loading.name(), "loading");
        assert_eq!(EditState::Saved.name(), "saved");
        assert_eq!(EditState::Error.name(), "error");
    }

    #[test]
    fn test_display_states() {
        assert!(EditState::View.is_display());
        assert!(EditState::Loading.is_display());
        assert!(EditState::Saved.is_display());
        assert!(EditState::Error.is_display());
        assert!(!EditState::Edit.is_display());
    }
}
