use crate::dispatcher::Dispatcher;
use crate::logging::{init_logging_with_config, LogConfig};
use crate::runtime_config::ServerConfig;
use crate::server::{AppService, HttpResponse, HttpServer, ServerHandle};
use crate::worker_pool::WorkerPoolConfig;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Command-line interface for funserver
#[derive(Parser)]
#[command(name = "funserver")]
#[command(version, about = "Minimal HTTP/1.x server with built-in routes", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Dispatch one request path offline and print the raw response
    Route {
        /// Request target without the leading slash, e.g. `cat?kitty=1`
        path: String,
    },
}

/// Overrides for [`ServerConfig`]; unset flags keep the environment value.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Address and port to listen on
    #[arg(long)]
    pub addr: Option<String>,

    /// Directory with root.html and index.html
    #[arg(long)]
    pub www_dir: Option<PathBuf>,

    /// Directory with kitty1.html and kitty2.html
    #[arg(long)]
    pub images_dir: Option<PathBuf>,

    /// Base directory for /file/ lookups
    #[arg(long)]
    pub file_root: Option<PathBuf>,

    /// Base URL for the github route
    #[arg(long)]
    pub github_api: Option<String>,

    /// Timeout in seconds for the outbound GitHub request
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Number of connection workers (1 = sequential)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Seconds a connection may stay idle before its read fails
    #[arg(long)]
    pub read_timeout_secs: Option<u64>,
}

impl ServeArgs {
    pub fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(addr) = self.addr {
            config.addr = addr;
        }
        if let Some(dir) = self.www_dir {
            config.www_dir = dir;
        }
        if let Some(dir) = self.images_dir {
            config.images_dir = dir;
        }
        if let Some(dir) = self.file_root {
            config.file_root = dir;
        }
        if let Some(api) = self.github_api {
            config.github_api = api;
        }
        if let Some(secs) = self.timeout_secs {
            config.upstream_timeout = Duration::from_secs(secs);
        }
        if let Some(workers) = self.workers.filter(|n| *n > 0) {
            config.workers = workers;
        }
        if let Some(secs) = self.read_timeout_secs.filter(|n| *n > 0) {
            config.read_timeout = Duration::from_secs(secs);
        }
        config
    }
}

/// Parse `std::env::args` and run the selected command.
///
/// # Errors
///
/// Returns an error if logging, the listener, or the outbound client cannot
/// be set up.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => {
            let _guard = init_logging_with_config(&LogConfig::from_env())?;
            serve(args.apply(ServerConfig::from_env()))
        }
        Commands::Route { path } => {
            let dispatcher = Dispatcher::from_config(&ServerConfig::from_env())?;
            let response = route_once(&dispatcher, &path);
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&response.to_bytes())?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

/// Dispatch `path` as if it arrived in a `GET` line. A leading `/` is
/// tolerated.
pub fn route_once(dispatcher: &Dispatcher, path: &str) -> HttpResponse {
    dispatcher.dispatch(Some(path.strip_prefix('/').unwrap_or(path)))
}

fn serve(config: ServerConfig) -> Result<()> {
    info!(
        addr = %config.addr,
        www_dir = %config.www_dir.display(),
        images_dir = %config.images_dir.display(),
        file_root = %config.file_root.display(),
        github_api = %config.github_api,
        workers = config.workers,
        read_timeout_secs = config.read_timeout.as_secs(),
        "Starting funserver"
    );
    let dispatcher = Dispatcher::from_config(&config)?;
    let service =
        AppService::new(Arc::new(dispatcher)).with_read_timeout(Some(config.read_timeout));
    let handle = HttpServer::new(service)
        .with_workers(WorkerPoolConfig::from(&config))
        .start(config.addr.as_str())
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    install_shutdown_handler(&handle)?;

    handle
        .join()
        .map_err(|e| anyhow::anyhow!("accept thread panicked: {e:?}"))?;
    info!("Server stopped");
    Ok(())
}

#[cfg(unix)]
fn install_shutdown_handler(handle: &ServerHandle) -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("Failed to register signal handlers")?;
    let flag = handle.shutdown_flag();
    let addr = handle.addr();
    std::thread::Builder::new()
        .name("funserver-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                info!(signal, "Shutdown signal received");
                request_shutdown(&flag, addr);
            }
        })
        .context("Failed to spawn signal thread")?;
    Ok(())
}

#[cfg(not(unix))]
fn install_shutdown_handler(_handle: &ServerHandle) -> Result<()> {
    Ok(())
}

/// Set the stop flag and poke the listener so a blocked `accept` returns.
#[cfg(unix)]
fn request_shutdown(flag: &std::sync::atomic::AtomicBool, addr: std::net::SocketAddr) {
    flag.store(true, std::sync::atomic::Ordering::SeqCst);
    if let Err(e) = std::net::TcpStream::connect(addr) {
        tracing::warn!(error = %e, "Could not wake accept loop");
    }
}
