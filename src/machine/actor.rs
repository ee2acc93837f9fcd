//! The actor task that drives a lifecycle machine.
//!
//! 驱动生命周期状态机的 actor 任务。

use super::{
    event::{EditEvent, TimeoutEvent},
    lifecycle::{Effect, LifecycleMachine, Snapshot},
};
use crate::{
    commit::{CommitMode, CommitSink},
    error::{Error, Result},
};
use std::sync::Arc;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::Instant,
};
use tracing::{debug, warn};

/// The actor that owns a machine and executes its effects.
///
/// It runs in a dedicated task and processes, one to completion at a time:
/// events from the public handle, the single armed state-scoped timer, and
/// (in awaited mode) the in-flight commit result. After every processed
/// stimulus it publishes a fresh snapshot on the watch channel.
///
/// 拥有状态机并执行其效果的 actor。
///
/// 它运行在专用任务中，逐个处理完毕：来自公共句柄的事件、单个已武装的
/// 状态作用域定时器，以及（等待式模式下）进行中的提交结果。每处理完一个
/// 刺激就在 watch 通道上发布一份新的快照。
pub(crate) struct MachineActor {
    machine: LifecycleMachine,
    events_rx: mpsc::Receiver<EditEvent>,
    state_tx: watch::Sender<Snapshot>,
    sink: Arc<dyn CommitSink>,
    mode: CommitMode,
    /// The armed state-scoped timer, if any. Replaced or cleared on every
    /// transition, so a timer can never fire for an exited state.
    /// 已武装的状态作用域定时器（如有）。每次转换时被替换或清除，因此
    /// 定时器永远不会为已退出的状态触发。
    armed: Option<(TimeoutEvent, Instant)>,
    /// The in-flight awaited commit, if any. A newer commit replaces it,
    /// discarding the superseded result.
    /// 进行中的等待式提交（如有）。更新的提交会替换它，丢弃被取代的结果。
    pending: Option<oneshot::Receiver<Result<()>>>,
}

impl MachineActor {
    pub(crate) fn new(
        machine: LifecycleMachine,
        events_rx: mpsc::Receiver<EditEvent>,
        state_tx: watch::Sender<Snapshot>,
        sink: Arc<dyn CommitSink>,
        mode: CommitMode,
    ) -> Self {
        Self {
            machine,
            events_rx,
            state_tx,
            sink,
            mode,
            armed: None,
            pending: None,
        }
    }

    /// Runs the actor's main event loop until every handle is dropped.
    ///
    /// 运行 actor 的主事件循环，直到所有句柄都被丢弃。
    pub(crate) async fn run(mut self) {
        loop {
            let armed = self.armed;
            tokio::select! {
                // 1. Handle events from the public handle.
                // 1. 处理来自公共句柄的事件。
                maybe_event = self.events_rx.recv() => {
                    match maybe_event {
                        Some(event) => {
                            let effects = self.machine.handle_event(event);
                            self.apply_effects(effects);
                        }
                        None => {
                            debug!("All handles dropped, machine actor stopping");
                            break;
                        }
                    }
                }
                // 2. Handle the state-scoped timer elapsing.
                // 2. 处理状态作用域定时器到期。
                Some(timeout) = Self::timer_elapsed(armed), if armed.is_some() => {
                    self.armed = None;
                    let effects = self.machine.handle_timeout(timeout);
                    self.apply_effects(effects);
                }
                // 3. Handle the awaited commit resolving.
                // 3. 处理等待式提交的完成。
                result = Self::commit_resolved(&mut self.pending), if self.pending.is_some() => {
                    self.pending = None;
                    let effects = self.machine.handle_commit_result(result);
                    self.apply_effects(effects);
                }
            }
        }
    }

    /// Waits for the armed timer's deadline and yields its timeout event.
    /// 等待已武装定时器的截止时间并产出其超时事件。
    async fn timer_elapsed(armed: Option<(TimeoutEvent, Instant)>) -> Option<TimeoutEvent> {
        match armed {
            Some((timeout, deadline)) => {
                tokio::time::sleep_until(deadline).await;
                Some(timeout)
            }
            None => None,
        }
    }

    /// Waits for the in-flight awaited commit to resolve. A dropped sender
    /// (the commit task panicked or was superseded) counts as a failure.
    ///
    /// 等待进行中的等待式提交完成。发送端被丢弃（提交任务崩溃或被取代）
    /// 计为失败。
    async fn commit_resolved(pending: &mut Option<oneshot::Receiver<Result<()>>>) -> Result<()> {
        match pending.as_mut() {
            Some(receiver) => match receiver.await {
                Ok(result) => result,
                Err(_) => Err(Error::ChannelClosed),
            },
            None => std::future::pending().await,
        }
    }

    /// Executes the effects of one transition and publishes a snapshot.
    /// 执行一次转换的效果并发布快照。
    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::DisarmTimer => {
                    self.armed = None;
                }
                Effect::ArmTimer(timeout, duration) => {
                    self.armed = Some((timeout, Instant::now() + duration));
                }
                Effect::Commit(value) => {
                    self.start_commit(value);
                }
            }
        }
        // send_replace keeps working with zero receivers; the actor's
        // lifetime is tied to the event channel, not the watch.
        // send_replace 在没有接收者时也照常工作；actor 的生命周期由事件
        // 通道决定，而非 watch。
        self.state_tx.send_replace(self.machine.snapshot());
    }

    /// Launches the asynchronous commit operation per the configured mode.
    /// 按配置的模式启动异步提交操作。
    fn start_commit(&mut self, value: String) {
        let sink = self.sink.clone();
        match self.mode {
            CommitMode::Confirmation => {
                // Fire-and-forget: completion arrives as a Saved event or
                // the save timeout, never through the sink's result.
                // 即发即忘：完成以 Saved 事件或保存超时的形式到达，
                // 永远不经由接收器的结果。
                tokio::spawn(async move {
                    if let Err(error) = sink.commit(&value).await {
                        warn!(%error, "Fire-and-forget commit reported a failure");
                    }
                });
            }
            CommitMode::Awaited => {
                let (result_tx, result_rx) = oneshot::channel();
                tokio::spawn(async move {
                    let result = sink.commit(&value).await;
                    // The receiver may have been superseded by a newer
                    // commit; its result is then discarded.
                    // 接收端可能已被更新的提交取代；其结果随之被丢弃。
                    let _ = result_tx.send(result);
                });
                self.pending = Some(result_rx);
            }
        }
    }
}
