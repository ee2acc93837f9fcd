//! tests/common/harness.rs
use async_trait::async_trait;
use inline_edit::{
    commit::CommitSink,
    error::{Error, Result},
};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "inline_edit=trace".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// What the mock sink does after recording a commit call.
#[derive(Debug, Clone, Copy)]
enum SinkBehavior {
    /// Never completes. Models a confirmation-mode backend whose outcome
    /// only ever arrives as a `Saved` event (or not at all).
    Hang,
    /// Resolves `Ok(())` after the delay.
    SucceedAfter(Duration),
    /// Resolves a commit failure after the delay.
    FailAfter(Duration),
}

/// A mock commit collaborator that records every submitted value and then
/// follows a scripted outcome.
pub struct MockCommitSink {
    calls: Mutex<Vec<String>>,
    behavior: SinkBehavior,
}

impl MockCommitSink {
    /// A sink that accepts the call and never resolves.
    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            behavior: SinkBehavior::Hang,
        })
    }

    /// A sink that resolves successfully after `delay`.
    pub fn succeeding_after(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            behavior: SinkBehavior::SucceedAfter(delay),
        })
    }

    /// A sink that fails after `delay`.
    pub fn failing_after(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            behavior: SinkBehavior::FailAfter(delay),
        })
    }

    /// The values committed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommitSink for MockCommitSink {
    async fn commit(&self, value: &str) -> Result<()> {
        self.calls.lock().unwrap().push(value.to_string());
        match self.behavior {
            SinkBehavior::Hang => std::future::pending().await,
            SinkBehavior::SucceedAfter(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
            SinkBehavior::FailAfter(delay) => {
                tokio::time::sleep(delay).await;
                Err(Error::CommitFailed("scripted failure".to_string()))
            }
        }
    }
}
