use super::service::AppService;
use crate::worker_pool::{WorkerPool, WorkerPoolConfig};
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{error, info, warn};

/// Accept loop around an [`AppService`].
///
/// With one worker (the default) each connection is read, answered and
/// closed before the next `accept`. With more, accepted streams go to a
/// [`WorkerPool`].
pub struct HttpServer {
    service: AppService,
    pool_config: WorkerPoolConfig,
}

/// Handle to a running HTTP server
///
/// Provides methods for waiting until the server is ready, stopping it, or
/// joining the accept thread.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl ServerHandle {
    /// The bound address, with the real port when `:0` was requested.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait for the server to be ready to accept connections
    ///
    /// # Errors
    ///
    /// Returns `TimedOut` if no connection succeeds within ~250ms (50 attempts × 5ms).
    pub fn wait_ready(&self) -> io::Result<()> {
        for _ in 0..50 {
            if TcpStream::connect(self.addr).is_ok() {
                return Ok(());
            }
            thread::sleep(Duration::from_millis(5));
        }
        Err(io::Error::new(io::ErrorKind::TimedOut, "server not ready"))
    }

    /// Stop accepting connections and wait for the accept thread to exit.
    ///
    /// A connection already being served is finished first.
    pub fn stop(self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // Wake the blocking accept so it observes the flag.
        if let Err(e) = TcpStream::connect(self.addr) {
            warn!(error = %e, "Could not wake accept loop");
        }
        if self.handle.join().is_err() {
            error!("Accept thread panicked");
        }
    }

    /// Flag that stops the accept loop once set; for signal handlers.
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Block until the accept thread completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the accept thread panicked.
    pub fn join(self) -> std::thread::Result<()> {
        self.handle.join()
    }
}

impl HttpServer {
    pub fn new(service: AppService) -> Self {
        Self {
            service,
            pool_config: WorkerPoolConfig::default(),
        }
    }

    /// Use a worker pool for connections.
    pub fn with_workers(mut self, pool_config: WorkerPoolConfig) -> Self {
        self.pool_config = pool_config;
        self
    }

    /// Bind `addr` and start accepting on a background thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid, the port cannot be bound,
    /// or the worker pool cannot be created.
    pub fn start<A: ToSocketAddrs>(self, addr: A) -> io::Result<ServerHandle> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid address"))?;
        let listener = TcpListener::bind(addr)?;
        let addr = listener.local_addr()?;
        let pool = if self.pool_config.num_workers > 1 {
            Some(WorkerPool::new(self.pool_config)?)
        } else {
            None
        };

        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let service = self.service;
        let handle = thread::Builder::new()
            .name("funserver-accept".to_string())
            .spawn(move || accept_loop(listener, service, pool, flag))?;

        info!(addr = %addr, workers = self.pool_config.num_workers, "Server listening");
        Ok(ServerHandle {
            addr,
            shutdown,
            handle,
        })
    }
}

fn accept_loop(
    listener: TcpListener,
    service: AppService,
    pool: Option<WorkerPool>,
    shutdown: Arc<AtomicBool>,
) {
    for stream in listener.incoming() {
        if shutdown.load(Ordering::SeqCst) {
            break;
        }
        let stream = match stream {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        match &pool {
            None => service.serve_connection(stream),
            Some(pool) => {
                let service = service.clone();
                if let Err(e) = pool.execute(move || service.serve_connection(stream)) {
                    error!(error = %e, "Worker pool rejected connection");
                }
            }
        }
    }
    if let Some(pool) = pool {
        let metrics = pool.metrics();
        // Dropping the pool joins its workers, so the counts below are final.
        drop(pool);
        info!(
            dispatched = metrics.get_dispatched_count(),
            completed = metrics.get_completed_count(),
            panics = metrics.get_panic_count(),
            queue_depth = metrics.get_queue_depth(),
            "Worker pool drained"
        );
    }
    info!("Accept loop stopped");
}
