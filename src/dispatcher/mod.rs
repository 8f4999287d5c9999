//! # Dispatcher Module
//!
//! Turns a parsed request path into exactly one [`HttpResponse`].
//!
//! ## Overview
//!
//! The dispatcher owns the collaborators the route handlers need (the `www`,
//! `images` and file-root directories, and the outbound fetcher for the
//! GitHub route) and is shared read-only between connections.
//!
//! ## Request Flow
//!
//! 1. No path (no `GET` line was seen) → `400 Bad Request`,
//!    `<html>Illegal request: no GET</html>`
//! 2. [`classify`](crate::router::classify) picks the route
//! 3. Parametrized routes strip their token from the path
//! 4. The route's handler runs its validation steps
//! 5. A [`RouteError`](crate::error::RouteError) is rendered with its own
//!    status and body
//!
//! ## Example
//!
//! ```rust,no_run
//! use funserver::dispatcher::Dispatcher;
//! use funserver::runtime_config::ServerConfig;
//!
//! let dispatcher = Dispatcher::from_config(&ServerConfig::default()).unwrap();
//! let response = dispatcher.dispatch(Some("multiply?num1=3&num2=4"));
//! assert_eq!(response.body_text(), "Result is: 12");
//! ```

mod core;

pub use core::{Dispatcher, NO_GET_BODY, UNRECOGNIZED_BODY};
