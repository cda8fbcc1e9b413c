//! Deferred re-prompt scheduling
//!
//! One pending task per user. Scheduling again for the same user aborts the
//! previous task. Tasks live only in memory, so a restart drops them.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::UserId;

#[derive(Debug, Default)]
pub struct RepromptScheduler {
    tasks: Mutex<HashMap<UserId, JoinHandle<()>>>,
}

impl RepromptScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` for `user_id` once `delay` has elapsed
    pub async fn schedule<F>(&self, user_id: &UserId, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });

        let mut tasks = self.tasks.lock().await;
        tasks.retain(|_, task| !task.is_finished());
        if let Some(previous) = tasks.insert(user_id.clone(), handle) {
            previous.abort();
        }
        debug!(user_id = %user_id, delay_ms = delay.as_millis() as u64, "Re-prompt scheduled");
    }

    /// Abort a user's scheduled re-prompt, returning whether one was still waiting
    pub async fn cancel(&self, user_id: &UserId) -> bool {
        match self.tasks.lock().await.remove(user_id) {
            Some(task) if !task.is_finished() => {
                task.abort();
                debug!(user_id = %user_id, "Re-prompt cancelled");
                true
            }
            _ => false,
        }
    }

    /// Whether a re-prompt is still waiting to fire for this user
    pub async fn is_scheduled(&self, user_id: &UserId) -> bool {
        self.tasks
            .lock()
            .await
            .get(user_id)
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for RepromptScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.get_mut().drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_action_runs_after_delay() {
        let scheduler = RepromptScheduler::new();
        let user = UserId::from("U1");
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        scheduler
            .schedule(&user, Duration::from_secs(1), async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        assert!(scheduler.is_scheduled(&user).await);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_scheduled(&user).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_replaces_previous_task() {
        let scheduler = RepromptScheduler::new();
        let user = UserId::from("U1");
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let counter = fired.clone();
            scheduler
                .schedule(&user, Duration::from_secs(1), async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let scheduler = RepromptScheduler::new();
        let user = UserId::from("U1");
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        scheduler
            .schedule(&user, Duration::from_secs(1), async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        assert!(scheduler.cancel(&user).await);
        assert!(!scheduler.cancel(&user).await);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
