use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::client::ImportTaskSource;
use super::models::ImportStatus;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Periodically fetches the import task of a subscription while an upload
/// is running and publishes each snapshot to its subscribers.
///
/// Polling stops once the task has ended or failed, which matches
/// [`should_stop_polling`](super::progress::UploadProgressView::should_stop_polling)
/// when there is no form error. The poller owns at most one background task.
/// Scheduling again aborts the previous one first, and dropping the poller
/// aborts it too.
pub struct UploadPoller<S: ImportTaskSource + 'static> {
    source: Arc<S>,
    subscription: u32,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
    tx: Arc<watch::Sender<Option<ImportStatus>>>,
}

impl<S: ImportTaskSource + 'static> UploadPoller<S> {
    pub fn new(source: Arc<S>, subscription: u32, interval: Duration) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            source,
            subscription,
            interval,
            handle: None,
            tx: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ImportStatus>> {
        self.tx.subscribe()
    }

    /// Last published snapshot.
    pub fn latest(&self) -> Option<ImportStatus> {
        self.tx.borrow().clone()
    }

    pub fn schedule(&mut self) {
        self.unschedule();
        tracing::debug!(
            subscription = self.subscription,
            interval_ms = self.interval.as_millis() as u64,
            "upload polling scheduled"
        );
        self.handle = Some(tokio::spawn(poll_loop(
            Arc::clone(&self.source),
            self.subscription,
            self.interval,
            Arc::clone(&self.tx),
        )));
    }

    pub fn unschedule(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(subscription = self.subscription, "upload polling cancelled");
        }
    }

    /// True while the polling task is alive.
    pub fn is_scheduled(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<S: ImportTaskSource + 'static> Drop for UploadPoller<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn poll_loop<S: ImportTaskSource>(
    source: Arc<S>,
    subscription: u32,
    interval: Duration,
    tx: Arc<watch::Sender<Option<ImportStatus>>>,
) {
    loop {
        tokio::time::sleep(interval).await;
        match source.fetch_task(subscription).await {
            Ok(status) => {
                let finished = status.is_finished();
                let failed = status.failed;
                tracing::debug!(subscription, step = status.step, finished, failed, "import task polled");
                tx.send_replace(Some(status));
                if finished || failed {
                    break;
                }
            }
            Err(err) => {
                tracing::warn!(subscription, error = %err, "import task poll failed, polling stopped");
                break;
            }
        }
    }
}
