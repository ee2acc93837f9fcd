//! The user-facing API of a running machine instance.
//!
//! 运行中状态机实例的用户侧 API。

use super::{
    actor::MachineActor,
    event::EditEvent,
    lifecycle::{LifecycleMachine, Snapshot},
};
use crate::{
    commit::CommitSink,
    config::Config,
    error::{Error, Result},
};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Capacity of the handle-to-actor event channel.
/// 句柄到 actor 事件通道的容量。
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// A handle to a running inline-edit lifecycle machine.
///
/// The machine itself runs in a dedicated actor task; the handle sends it
/// events and observes its state through a watch channel. Handles are cheap
/// to clone; the actor stops once every handle is dropped. One machine
/// instance exists per widget instance.
///
/// 运行中的行内编辑生命周期状态机的句柄。
///
/// 状态机本身运行在专用的 actor 任务中；句柄向其发送事件并通过 watch
/// 通道观察其状态。句柄可廉价克隆；所有句柄被丢弃后 actor 停止。
/// 每个控件实例对应一个状态机实例。
#[derive(Debug, Clone)]
pub struct InlineEdit {
    event_tx: mpsc::Sender<EditEvent>,
    state_rx: watch::Receiver<Snapshot>,
}

impl InlineEdit {
    /// Constructs a machine from its configuration and spawns the actor
    /// task driving it. The sink is the external commit collaborator.
    ///
    /// 从配置构造状态机并派生驱动它的 actor 任务。接收器是外部提交
    /// 协作者。
    pub fn spawn(config: Config, sink: Arc<dyn CommitSink>) -> Self {
        let mode = config.behavior.commit_mode;
        let machine = LifecycleMachine::new(config);
        let (event_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (state_tx, state_rx) = watch::channel(machine.snapshot());

        let actor = MachineActor::new(machine, events_rx, state_tx, sink, mode);
        tokio::spawn(actor.run());

        Self { event_tx, state_rx }
    }

    /// Delivers an event to the machine. Completion of this call means the
    /// event was queued, not yet processed; observe the outcome through
    /// [`current`] or [`changed`].
    ///
    /// 向状态机送达一个事件。本调用完成表示事件已入队，尚未被处理；
    /// 通过 [`current`] 或 [`changed`] 观察结果。
    ///
    /// [`current`]: InlineEdit::current
    /// [`changed`]: InlineEdit::changed
    pub async fn send(&self, event: EditEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| Error::ChannelClosed)
    }

    /// Gets the latest published state and context snapshot.
    /// 获取最近发布的状态与上下文快照。
    pub fn current(&self) -> Snapshot {
        self.state_rx.borrow().clone()
    }

    /// Waits until the actor publishes the next snapshot. One snapshot is
    /// published per processed stimulus, including ignored events.
    ///
    /// 等待 actor 发布下一份快照。每处理一个刺激就发布一份快照，
    /// 包括被忽略的事件。
    pub async fn changed(&mut self) -> Result<()> {
        self.state_rx.changed().await.map_err(|_| Error::ChannelClosed)
    }

    /// Gets an independent subscription to the machine's snapshots.
    /// 获取对状态机快照的独立订阅。
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state_rx.clone()
    }
}
