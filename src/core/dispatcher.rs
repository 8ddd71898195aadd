use crate::core::{Attempt, AttemptOutcome, Candidates, Connector};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

pub const DEFAULT_WORKERS: usize = 4;
pub const MAX_WORKERS: usize = 256;

/// Runs every candidate through a [`Connector`] on a fixed-size pool of
/// tokio tasks.
///
/// Workers pull from one shared queue, so completion order is arbitrary.
/// Nothing stops the run early: an accepted password does not cancel the
/// attempts still queued.
pub struct Dispatcher<C: Connector> {
    connector: Arc<C>,
    workers: usize,
}

impl<C: Connector + 'static> Dispatcher<C> {
    pub fn new(connector: C, workers: usize) -> Self {
        Self {
            connector: Arc::new(connector),
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of worker tasks actually started for `total` candidates.
    pub fn pool_size(&self, total: usize) -> usize {
        self.workers.min(total)
    }

    /// Returns once every worker has finished. Outcomes are sorted by
    /// candidate index.
    pub async fn run(&self, ssid: &str, candidates: &Candidates) -> Vec<AttemptOutcome> {
        let total = candidates.len();
        if total == 0 {
            return Vec::new();
        }

        let queue: Arc<Mutex<VecDeque<Attempt>>> =
            Arc::new(Mutex::new(candidates.attempts(ssid).into()));
        let results: Arc<Mutex<Vec<AttemptOutcome>>> =
            Arc::new(Mutex::new(Vec::with_capacity(total)));
        let completed = Arc::new(AtomicUsize::new(0));

        let pool_size = self.pool_size(total);
        tracing::info!(
            "🚀 Dispatching {} attempts against '{}' on {} workers",
            total,
            ssid,
            pool_size
        );

        let mut handles = Vec::with_capacity(pool_size);
        for worker_id in 0..pool_size {
            let queue = Arc::clone(&queue);
            let results = Arc::clone(&results);
            let completed = Arc::clone(&completed);
            let connector = Arc::clone(&self.connector);

            handles.push(tokio::spawn(async move {
                loop {
                    // 鎖只在取出時持有, 不跨越 await
                    let next = queue.lock().await.pop_front();
                    let Some(attempt) = next else {
                        break;
                    };

                    tracing::debug!("worker {} trying candidate #{}", worker_id, attempt.index);
                    let outcome = attempt_isolated(Arc::clone(&connector), attempt).await;

                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    tracing::debug!(
                        "[{}/{}] candidate #{} -> {:?} ({} ms)",
                        done,
                        total,
                        outcome.index,
                        outcome.status,
                        outcome.elapsed_ms
                    );
                    if outcome.is_accepted() {
                        tracing::info!("🔑 Candidate #{} was accepted", outcome.index);
                    }

                    results.lock().await.push(outcome);
                }
            }));
        }

        for (worker_id, handle) in handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                tracing::error!("❌ Worker {} terminated abnormally: {}", worker_id, e);
            }
        }

        // 若所有 worker 都已中止, 剩下的候選在此補跑
        let leftover: Vec<Attempt> = queue.lock().await.drain(..).collect();
        if !leftover.is_empty() {
            tracing::warn!(
                "⚠️ {} attempts left in the queue after the workers stopped, running them now",
                leftover.len()
            );
            let mut results = results.lock().await;
            for attempt in leftover {
                results.push(attempt_isolated(Arc::clone(&self.connector), attempt).await);
            }
        }

        let mut outcomes = std::mem::take(&mut *results.lock().await);
        outcomes.sort_by_key(|o| o.index);

        tracing::info!("✅ Finished {} of {} attempts", outcomes.len(), total);

        outcomes
    }
}

/// Runs one attempt on its own task so a panicking connector costs only
/// that attempt. The panic is recorded as a failed outcome.
async fn attempt_isolated<C: Connector + 'static>(
    connector: Arc<C>,
    attempt: Attempt,
) -> AttemptOutcome {
    let started = Instant::now();
    let task_attempt = attempt.clone();

    match tokio::spawn(async move { connector.attempt(&task_attempt).await }).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("❌ Attempt for candidate #{} aborted: {}", attempt.index, e);
            AttemptOutcome::spawn_failed(
                &attempt,
                format!("attempt aborted: {}", e),
                started.elapsed(),
            )
        }
    }
}
