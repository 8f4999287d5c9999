//! The wire side: reading a request's header block, decoding query strings,
//! serializing responses, and the TCP accept loop.

pub mod http_server;
pub mod query;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use query::{decode_query, QueryParams};
pub use request::{parse_request, ParsedRequest};
pub use response::{write_response, HttpResponse};
pub use service::AppService;
