use super::request::parse_request;
use super::response::{write_response, HttpResponse};
use crate::dispatcher::Dispatcher;
use crate::ids::ConnectionId;
use http::StatusCode;
use std::io::{self, BufReader, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info_span, warn};

/// How long a connection may stay silent before its read fails.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-connection glue: parse the header block, dispatch, write the response.
#[derive(Clone)]
pub struct AppService {
    pub dispatcher: Arc<Dispatcher>,
    read_timeout: Option<Duration>,
}

impl AppService {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
        }
    }

    /// Bound each read on an accepted stream. `None` waits forever, which
    /// lets one idle client hold up a sequential server.
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout.filter(|t| !t.is_zero());
        self
    }

    /// Build the response for the request read from `input`.
    ///
    /// A read failure yields a best-effort `400` carrying the I/O error text
    /// and is also returned as `Err` so the caller can log it.
    pub fn respond<R: Read>(&self, input: R) -> (HttpResponse, Option<io::Error>) {
        let mut reader = BufReader::new(input);
        match parse_request(&mut reader) {
            Ok(parsed) => (self.dispatcher.dispatch(parsed.path.as_deref()), None),
            Err(e) => {
                let body = format!("<html>ERROR: {}</html>", e);
                (HttpResponse::html(StatusCode::BAD_REQUEST, body), Some(e))
            }
        }
    }

    /// Read one request from `input`, write its response to `output`.
    pub fn handle<R: Read, W: Write>(&self, input: R, output: &mut W) -> io::Result<HttpResponse> {
        let (response, read_err) = self.respond(input);
        if let Some(e) = &read_err {
            warn!(error = %e, "Failed to read request header");
        }
        write_response(output, &response)?;
        Ok(response)
    }

    /// Serve one accepted TCP connection to completion and close it.
    ///
    /// Errors are logged; nothing propagates to the accept loop.
    pub fn serve_connection(&self, mut stream: TcpStream) {
        let connection_id = ConnectionId::new();
        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        let span = info_span!("connection", id = %connection_id, peer = %peer);
        let _enter = span.enter();

        // A timed-out read surfaces as an I/O error and gets the best-effort 400.
        if let Err(e) = stream.set_read_timeout(self.read_timeout) {
            warn!(error = %e, "Failed to set read timeout");
        }
        let input = match stream.try_clone() {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "Failed to clone connection stream");
                return;
            }
        };
        if let Err(e) = self.handle(input, &mut stream) {
            error!(error = %e, "Failed to write response");
        }
        if let Err(e) = stream.shutdown(Shutdown::Both) {
            // The peer may already have closed its side.
            tracing::debug!(error = %e, "Connection shutdown failed");
        }
    }
}
