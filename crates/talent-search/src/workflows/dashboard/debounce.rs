use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Delivers a keyword only once typing has paused for `quiet_period`.
///
/// Each `push` cancels the pending delivery, so a burst of keystrokes yields
/// only its final value. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct KeywordDebouncer {
    quiet_period: Duration,
    sender: mpsc::UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl KeywordDebouncer {
    pub fn new(quiet_period: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let debouncer = Self {
            quiet_period,
            sender,
            pending: None,
        };
        (debouncer, receiver)
    }

    pub fn push(&mut self, keyword: impl Into<String>) {
        self.cancel();

        let keyword = keyword.into();
        let sender = self.sender.clone();
        let deadline = Instant::now() + self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = sender.send(keyword);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for KeywordDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
