// ============================================================
// Layer 6 — Worker Pool
// ============================================================
// A fixed-size rayon thread pool that runs one closure per item
// and returns every result, in input order, once all items have
// finished.
//
// Job boundary guarantees:
//   - a panic inside a job becomes JobError::Processing
//   - with a timeout set, a job that runs past it becomes
//     JobError::Timeout and its worker slot is released
//
// Timed jobs run on a helper thread the worker waits on with
// `recv_timeout`. A helper that never finishes is detached, not
// killed: its thread stays alive until the blocked I/O returns.
//
// Results are gathered by rayon's indexed `collect`, so no
// shared map is ever written from several threads.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{mpsc, Arc},
    thread,
    time::Duration,
};

use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};

use crate::domain::error::{JobError, PipelineError};

pub struct WorkerPool {
    pool:    ThreadPool,
    timeout: Option<Duration>,
}

impl WorkerPool {
    /// Build a pool of `workers` threads. `0` picks rayon's
    /// default (one per available CPU).
    pub fn new(workers: usize, timeout: Option<Duration>) -> Result<Self, PipelineError> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("llm-prep-worker-{i}"));
        if workers > 0 {
            builder = builder.num_threads(workers);
        }
        let pool = builder.build()?;

        tracing::debug!(
            "Worker pool ready: {} threads, timeout={:?}",
            pool.current_num_threads(),
            timeout
        );
        Ok(Self { pool, timeout })
    }

    /// Number of worker threads
    pub fn size(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `job` over every item. Returns only after every item has
    /// reached a terminal state; `results[i]` belongs to `items[i]`.
    pub fn run<T, R, F>(&self, items: Vec<T>, job: F) -> Vec<Result<R, JobError>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Result<R, JobError> + Send + Sync + 'static,
    {
        let job = Arc::new(job);
        self.pool.install(|| {
            items
                .into_par_iter()
                .map(|item| self.execute(&job, item))
                .collect()
        })
    }

    fn execute<T, R, F>(&self, job: &Arc<F>, item: T) -> Result<R, JobError>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Result<R, JobError> + Send + Sync + 'static,
    {
        let Some(limit) = self.timeout else {
            return guarded(|| job(item));
        };

        let (tx, rx) = mpsc::channel();
        let job      = Arc::clone(job);

        thread::Builder::new()
            .name("llm-prep-job".into())
            .spawn(move || {
                // The receiver is gone if the job already timed out
                let _ = tx.send(guarded(|| job(item)));
            })
            .map_err(|e| JobError::Processing(format!("cannot spawn job thread: {e}")))?;

        match rx.recv_timeout(limit) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(JobError::Timeout(limit)),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(JobError::Processing(
                "job thread exited without a result".into(),
            )),
        }
    }
}

/// Run `f`, turning a panic into `JobError::Processing`.
fn guarded<R>(f: impl FnOnce() -> Result<R, JobError>) -> Result<R, JobError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(JobError::Processing(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_results_follow_input_order() {
        let pool    = WorkerPool::new(4, None).unwrap();
        let results = pool.run((0..50).collect(), |i: u32| Ok(i * 2));
        let values: Vec<u32> = results.into_iter().map(Result::unwrap).collect();
        assert_eq!(values, (0..50).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_pool_size_is_bounded() {
        let pool = WorkerPool::new(3, None).unwrap();
        assert_eq!(pool.size(), 3);

        let active = Arc::new(AtomicUsize::new(0));
        let peak   = Arc::new(AtomicUsize::new(0));
        let (a, p) = (Arc::clone(&active), Arc::clone(&peak));

        pool.run((0..24).collect(), move |_: u32| {
            let now = a.fetch_add(1, Ordering::SeqCst) + 1;
            p.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(5));
            a.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        });

        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[test]
    fn test_panic_is_isolated_to_its_job() {
        let pool    = WorkerPool::new(2, None).unwrap();
        let results = pool.run(vec![1, 2, 3], |i: u32| {
            if i == 2 {
                panic!("boom");
            }
            Ok(i)
        });

        assert_eq!(results[0].as_ref().unwrap(), &1);
        assert!(matches!(&results[1], Err(JobError::Processing(msg)) if msg.contains("boom")));
        assert_eq!(results[2].as_ref().unwrap(), &3);
    }

    #[test]
    fn test_timeout_becomes_a_failure() {
        let pool    = WorkerPool::new(2, Some(Duration::from_millis(50))).unwrap();
        let results = pool.run(vec![0u64, 2_000], |ms| {
            thread::sleep(Duration::from_millis(ms));
            Ok(ms)
        });

        assert_eq!(results[0].as_ref().unwrap(), &0);
        assert!(matches!(results[1], Err(JobError::Timeout(_))));
    }

    #[test]
    fn test_panic_under_timeout_is_a_processing_error() {
        let pool    = WorkerPool::new(1, Some(Duration::from_secs(5))).unwrap();
        let results = pool.run(vec![()], |_| -> Result<(), JobError> { panic!("late boom") });
        assert!(matches!(&results[0], Err(JobError::Processing(msg)) if msg.contains("late boom")));
    }
}
