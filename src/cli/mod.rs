//! # CLI Module
//!
//! Command-line entry point for the `funserver` binary.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Bind the listener and serve until SIGINT or SIGTERM:
//!
//! ```bash
//! funserver serve --addr 127.0.0.1:9000 --www-dir www --workers 4
//! ```
//!
//! Every flag overrides the matching `FUNSRV_*` environment variable (see
//! [`runtime_config`](crate::runtime_config)).
//!
//! ### `route`
//!
//! Dispatch a single request path without opening a socket and print the
//! raw response:
//!
//! ```bash
//! funserver route 'multiply?num1=3&num2=4'
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use funserver::cli::run_cli;
//!
//! run_cli()?;
//! ```

mod commands;


pub use commands::{run_cli, route_once, Cli, Commands, ServeArgs};
