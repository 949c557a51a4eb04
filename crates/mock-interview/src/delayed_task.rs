use std::{future::Future, time::Duration};

use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// One-shot future that runs after a delay and can be called off.
///
/// Dropping the handle cancels the task, so a view that owns one cannot be
/// updated after it is torn down.
pub struct DelayedTask {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl DelayedTask {
    /// Run `job` once `delay` has elapsed.
    #[instrument(skip(job))]
    pub fn schedule<F>(label: &'static str, delay: Duration, job: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(label, "Delayed task firing");
            job.await;
        });

        Self { label, handle }
    }

    /// Call the task off. No-op if it already ran.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            self.handle.abort();
            debug!(label = self.label, "Delayed task cancelled");
        }
    }
}
