//! The mutable context owned by a machine instance.
//!
//! 状态机实例独占拥有的可变上下文。

use crate::config::Validator;

/// The extended state carried alongside the current [`EditState`].
///
/// `draft` is only meaningful while in `edit` or `loading`; it is reset to
/// `committed` on every entry to `view`. `prior` is the snapshot taken when
/// an optimistic update is applied, used for rollback.
///
/// 与当前 [`EditState`] 一同携带的扩展状态。
///
/// `draft` 仅在 `edit` 或 `loading` 期间有意义；每次进入 `view` 时被重置为
/// `committed`。`prior` 是应用乐观更新时拍下的快照，用于回滚。
///
/// [`EditState`]: crate::machine::state::EditState
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContext {
    /// The authoritative, last-confirmed value shown in read mode.
    /// 读取模式下展示的权威的、最近确认的值。
    pub committed: String,
    /// The in-progress, not-yet-committed edit buffer.
    /// 进行中的、尚未提交的编辑缓冲区。
    pub draft: String,
    /// Snapshot of `committed` taken before an optimistic apply.
    /// 乐观应用之前对 `committed` 拍下的快照。
    pub prior: String,
    /// Result of the last validation run over `draft`.
    /// 对 `draft` 的最近一次校验结果。
    pub is_valid: bool,
}

impl EditContext {
    /// Creates the initial context for a committed value, validating it up
    /// front so `is_valid` starts out meaningful.
    ///
    /// 为已提交值创建初始上下文，并预先校验，使 `is_valid` 从一开始就有意义。
    pub fn new(initial_value: String, validate: Option<&Validator>) -> Self {
        let is_valid = validate.map_or(true, |v| v.check(&initial_value));
        Self {
            draft: initial_value.clone(),
            prior: String::new(),
            committed: initial_value,
            is_valid,
        }
    }

    /// Resets the draft to the committed value. Runs on every `view` entry.
    /// 将草稿重置为已提交值。每次进入 `view` 时运行。
    pub fn reset_draft(&mut self) {
        self.draft.clone_from(&self.committed);
    }

    /// Recomputes `is_valid` over the current draft. An absent validator
    /// means every value is valid.
    ///
    /// 针对当前草稿重新计算 `is_valid`。校验器缺省表示所有值都有效。
    pub fn revalidate(&mut self, validate: Option<&Validator>) {
        self.is_valid = validate.map_or(true, |v| v.check(&self.draft));
    }

    /// Applies the draft as the committed value, snapshotting the old one
    /// for rollback. The optimistic half of submit.
    ///
    /// 将草稿应用为已提交值，并为回滚拍下旧值快照。提交的乐观一半。
    pub fn apply_optimistic(&mut self) {
        self.prior.clone_from(&self.committed);
        self.committed.clone_from(&self.draft);
    }

    /// Restores the committed value from the pre-optimistic snapshot.
    /// 从乐观更新前的快照恢复已提交值。
    pub fn rollback(&mut self) {
        self.committed.clone_from(&self.prior);
    }

    /// Commits an externally supplied authoritative value.
    /// 提交由外部提供的权威值。
    pub fn commit_external(&mut self, value: String) {
        self.committed = value;
    }

    /// Commits the draft as the new authoritative value (awaited-mode
    /// success path).
    ///
    /// 将草稿提交为新的权威值（等待式提交成功路径）。
    pub fn commit_draft(&mut self) {
        self.committed.clone_from(&self.draft);
    }

    /// Whether the draft differs from the committed value.
    /// 草稿是否与已提交值不同。
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }
}
