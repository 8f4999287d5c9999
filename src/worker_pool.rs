//! # Worker Pool Module
//!
//! Fixed-size pool of OS threads used by the accept loop when more than one
//! connection worker is configured.
//!
//! ## Features
//!
//! - **Shared queue**: all workers pull from one `mpsc` receiver behind a mutex
//! - **Panic isolation**: a panicking job is logged and the worker keeps going
//! - **Metrics**: dispatched, completed and panicked job counts plus queue depth
//!
//! ## Configuration
//!
//! Built from [`ServerConfig`]: `FUNSRV_WORKERS` threads (default 1, meaning
//! no pool) with `FUNSRV_WORKER_STACK_SIZE` bytes of stack each.

use crate::runtime_config::{ServerConfig, DEFAULT_WORKER_STACK_SIZE};
use std::io;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use tracing::{debug, error, info};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Configuration for a worker pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPoolConfig {
    /// Number of worker threads
    pub num_workers: usize,
    /// Stack size for worker threads
    pub stack_size: usize,
}

impl WorkerPoolConfig {
    pub fn new(num_workers: usize, stack_size: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
            stack_size,
        }
    }
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self {
            num_workers: 1,
            stack_size: DEFAULT_WORKER_STACK_SIZE,
        }
    }
}

impl From<&ServerConfig> for WorkerPoolConfig {
    fn from(config: &ServerConfig) -> Self {
        Self::new(config.workers, config.worker_stack_size)
    }
}

/// Metrics for a worker pool
#[derive(Debug, Default)]
pub struct WorkerPoolMetrics {
    /// Jobs handed to the queue
    pub dispatched_count: AtomicU64,
    /// Jobs that ran to completion, including ones that panicked
    pub completed_count: AtomicU64,
    /// Jobs that panicked
    pub panic_count: AtomicU64,
    /// Jobs queued or running (approximate)
    pub queue_depth: AtomicUsize,
}

impl WorkerPoolMetrics {
    pub fn record_dispatch(&self) {
        self.dispatched_count.fetch_add(1, Ordering::Relaxed);
        self.queue_depth.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_completion(&self) {
        self.completed_count.fetch_add(1, Ordering::Relaxed);
        self.queue_depth.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn record_panic(&self) {
        self.panic_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_dispatched_count(&self) -> u64 {
        self.dispatched_count.load(Ordering::Relaxed)
    }

    pub fn get_completed_count(&self) -> u64 {
        self.completed_count.load(Ordering::Relaxed)
    }

    pub fn get_panic_count(&self) -> u64 {
        self.panic_count.load(Ordering::Relaxed)
    }

    pub fn get_queue_depth(&self) -> usize {
        self.queue_depth.load(Ordering::Relaxed)
    }
}

struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn spawn(
        id: usize,
        stack_size: usize,
        receiver: Arc<Mutex<mpsc::Receiver<Job>>>,
        metrics: Arc<WorkerPoolMetrics>,
    ) -> io::Result<Self> {
        let thread = thread::Builder::new()
            .name(format!("funserver-worker-{}", id))
            .stack_size(stack_size)
            .spawn(move || {
                debug!(worker_id = id, "Worker thread started");
                loop {
                    // The lock is released before the job runs.
                    let message = match receiver.lock() {
                        Ok(rx) => rx.recv(),
                        Err(poisoned) => poisoned.into_inner().recv(),
                    };
                    let Ok(job) = message else {
                        break;
                    };
                    if let Err(panic) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
                        metrics.record_panic();
                        error!(worker_id = id, panic_message = ?panic, "Connection job panicked");
                    }
                    metrics.record_completion();
                }
                debug!(worker_id = id, "Worker thread exiting");
            })?;
        Ok(Self {
            id,
            thread: Some(thread),
        })
    }
}

/// A fixed pool of worker threads sharing one job queue.
pub struct WorkerPool {
    workers: Vec<Worker>,
    sender: Option<mpsc::Sender<Job>>,
    metrics: Arc<WorkerPoolMetrics>,
}

impl WorkerPool {
    /// Spawn `config.num_workers` threads.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to create a thread.
    pub fn new(config: WorkerPoolConfig) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));
        let metrics = Arc::new(WorkerPoolMetrics::default());

        info!(
            num_workers = config.num_workers,
            stack_size = config.stack_size,
            "Creating worker pool"
        );

        let mut workers = Vec::with_capacity(config.num_workers);
        for id in 0..config.num_workers {
            workers.push(Worker::spawn(
                id,
                config.stack_size,
                Arc::clone(&receiver),
                Arc::clone(&metrics),
            )?);
        }

        Ok(Self {
            workers,
            sender: Some(sender),
            metrics,
        })
    }

    /// Queue `f` on the next free worker.
    ///
    /// # Errors
    ///
    /// Returns `BrokenPipe` if every worker has exited.
    pub fn execute<F>(&self, f: F) -> io::Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "worker pool shut down"))?;
        self.metrics.record_dispatch();
        sender.send(Box::new(f)).map_err(|_| {
            self.metrics.record_completion();
            io::Error::new(io::ErrorKind::BrokenPipe, "worker pool shut down")
        })
    }

    pub fn metrics(&self) -> Arc<WorkerPoolMetrics> {
        Arc::clone(&self.metrics)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the channel lets every worker finish its queue and exit.
        drop(self.sender.take());
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    error!(worker_id = worker.id, "Worker thread panicked during shutdown");
                }
            }
        }
    }
}
