//! # funserver
//!
//! **funserver** is a deliberately small HTTP/1.x server: a hand-written
//! request-line parser, a query-string decoder, and a fixed table of
//! built-in routes, served over plain `std::net` sockets.
//!
//! ## Architecture
//!
//! - **[`server`]** - TCP accept loop, request-header parsing, query decoding and
//!   response serialization
//! - **[`router`]** - Ordered classification of a request path into a [`router::Route`]
//! - **[`dispatcher`]** - Runs the chosen route handler and renders failures
//! - **[`handlers`]** - One module per built-in route
//! - **[`error`]** - Route failures and the status/body each one maps to
//! - **[`static_files`]** - Confined reads from the `www`, `images` and file-root directories
//! - **[`upstream`]** - Outbound GitHub API client used by the `github?` route
//! - **[`worker_pool`]** - Optional fixed thread pool for serving connections
//! - **[`runtime_config`]** / **[`logging`]** - Environment-driven configuration
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Accept as HttpServer<br/>(accept loop)
//!     participant Service as AppService
//!     participant Parser as parse_request
//!     participant Dispatcher
//!     participant Handler as Route handler
//!
//!     Client->>Accept: TCP connect
//!     Accept->>Service: serve_connection(stream)
//!     Service->>Parser: read lines until blank line
//!     Parser-->>Service: Option<path>
//!     Service->>Dispatcher: dispatch(path)
//!     Dispatcher->>Dispatcher: classify(path)
//!     Dispatcher->>Handler: handle(stripped query)
//!     Handler-->>Dispatcher: Result<HttpResponse, RouteError>
//!     Dispatcher-->>Service: HttpResponse
//!     Service->>Client: status line, Content-Type, body
//!     Service->>Client: close
//! ```
//!
//! ## Routes
//!
//! | Request target     | Status         | Body                                   |
//! |--------------------|----------------|----------------------------------------|
//! | `/`                | 200            | `root.html` with a file listing        |
//! | `/json`            | 200            | random image as JSON                   |
//! | `/random`          | 200            | `index.html`                           |
//! | `/cat?kitty=N`    | 200 / 400 / 406| `kitty<N>.html`                        |
//! | `/ft_to_cm?ft&in`  | 200 / 400 / 406| height in centimeters                  |
//! | `/file/<path>`     | 200 / 404      | existence check                        |
//! | `/multiply?num1&num2` | 200 / 400   | product (default operands 5)           |
//! | `/github?query=..` | 200 / 400 / 406| repository summaries                   |
//! | anything else      | 400            | `I am not sure what you want me to do...` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use funserver::dispatcher::Dispatcher;
//! use funserver::runtime_config::ServerConfig;
//! use funserver::server::{AppService, HttpServer};
//! use std::sync::Arc;
//!
//! let config = ServerConfig::from_env();
//! let dispatcher = Dispatcher::from_config(&config).unwrap();
//! let handle = HttpServer::new(AppService::new(Arc::new(dispatcher)))
//!     .start(config.addr.as_str())
//!     .unwrap();
//! handle.join().unwrap();
//! ```

pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod images;
pub mod logging;
pub mod router;
pub mod runtime_config;
pub mod server;
pub mod static_files;
pub mod upstream;
pub mod worker_pool;

pub use dispatcher::Dispatcher;
pub use error::{QueryError, RouteError};
pub use router::{classify, Route};
pub use runtime_config::ServerConfig;
pub use server::{AppService, HttpResponse, HttpServer, ServerHandle};
