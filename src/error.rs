//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the inline-edit library.
///
/// Validation and commit failures inside the machine are represented as
/// states, never as errors (the machine boundary is infallible). This type
/// covers the crate's collaborator surfaces instead: commit sinks and the
/// channels between a handle and its actor task.
///
/// 行内编辑库的主要错误类型。
///
/// 状态机内部的校验失败和提交失败都表示为状态，永远不会作为错误抛出
/// （状态机边界是不可失败的）。此类型覆盖的是本库的协作者表面：
/// 提交接收器以及句柄与其 actor 任务之间的通道。
#[derive(Debug, Error)]
pub enum Error {
    /// The external commit operation reported a failure.
    /// 外部提交操作报告了失败。
    #[error("commit operation failed: {0}")]
    CommitFailed(String),

    /// An internal channel between the handle and the actor task was closed
    /// unexpectedly, usually because the actor has terminated.
    /// 句柄与 actor 任务之间的内部通道意外关闭，通常是因为 actor 已终止。
    #[error("machine task is no longer running")]
    ChannelClosed,
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;
