//! Traits for abstracting over the external commit operation.
//!
//! 用于抽象外部提交操作的 trait。

use crate::error::Result;
use async_trait::async_trait;

/// The asynchronous commit collaborator.
///
/// This trait is the seam between the machine and whatever actually
/// persists a submitted value (an HTTP call, a database write, a parent
/// component callback). Implementations are free to take as long as they
/// like; the machine bounds the wait with its save timeout.
///
/// 异步提交协作者。
///
/// 此 trait 是状态机与实际持久化提交值的一方（HTTP 调用、数据库写入、
/// 父组件回调）之间的接缝。实现可以耗时任意长；状态机用保存超时来
/// 限定等待时间。
#[async_trait]
pub trait CommitSink: Send + Sync + 'static {
    /// Persists the submitted draft value.
    /// 持久化已提交的草稿值。
    async fn commit(&self, value: &str) -> Result<()>;
}

/// How completion of the asynchronous commit is determined.
///
/// Both modes share every other transition of the machine; they only
/// parameterize how the `loading` state is left.
///
/// 异步提交的完成方式。
///
/// 两种模式共享状态机的其余全部转换；它们只参数化 `loading` 状态的
/// 退出方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Fire-and-forget: the sink is invoked and its result discarded.
    /// Completion is signaled by an externally delivered `Saved` event
    /// carrying the authoritative value, or by the save timeout forcing
    /// the error state.
    ///
    /// 即发即忘：调用接收器并丢弃其结果。完成由外部送达的携带权威值的
    /// `Saved` 事件表示，或由保存超时强制进入错误状态。
    Confirmation,

    /// Awaited: the machine suspends on the sink's result. Success commits
    /// the draft and returns to `view`; failure rolls back and surfaces
    /// the transient error state.
    ///
    /// 等待式：状态机挂起等待接收器的结果。成功则提交草稿并返回 `view`；
    /// 失败则回滚并显示瞬态错误状态。
    Awaited,
}
