//! Request-level error taxonomy.
//!
//! Every validation step in a route handler returns one of these values
//! instead of unwinding. The dispatcher turns them into a complete HTTP
//! response, so no request-level failure ever reaches the connection loop.

use http::StatusCode;
use std::fmt;
use std::io;

/// Failure produced while decoding a raw query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A `&`-separated segment without any `=`
    MalformedPair {
        /// The offending segment, undecoded
        pair: String,
    },
    /// A key or value whose percent-escapes do not decode to UTF-8
    Decode {
        /// The raw text that failed to decode
        raw: String,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MalformedPair { pair } => {
                write!(f, "Malformed query argument: {}", pair)
            }
            QueryError::Decode { raw } => {
                write!(f, "Query argument is not valid UTF-8 once decoded: {}", raw)
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Failure of a single route handler.
///
/// Messages keep their trailing newline where the rendered body expects one;
/// [`RouteError::body`] only adds the `Error code NNN: ` prefix.
#[derive(Debug)]
pub enum RouteError {
    /// The query string was empty after stripping the route token
    MissingArguments(String),
    /// A required query key is absent
    MissingArgument(String),
    /// A query value has the wrong type or is out of range
    InvalidArgument(String),
    /// The `file/` route could not find the requested path
    NotFound(String),
    /// The outbound GitHub call or its JSON decoding failed
    Upstream(String),
    /// Reading a static page from disk failed
    Io(io::Error),
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::MissingArguments(_) => StatusCode::NOT_ACCEPTABLE,
            RouteError::NotFound(_) => StatusCode::NOT_FOUND,
            RouteError::MissingArgument(_)
            | RouteError::InvalidArgument(_)
            | RouteError::Upstream(_)
            | RouteError::Io(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Render the response body for this failure.
    pub fn body(&self) -> String {
        match self {
            RouteError::MissingArguments(msg) => format!("Error code 406: {}", msg),
            RouteError::MissingArgument(msg) | RouteError::InvalidArgument(msg) => {
                format!("Error code 400: {}", msg)
            }
            RouteError::NotFound(path) => format!("File not found: {}", path),
            RouteError::Upstream(msg) => format!("An exception was thrown: {}\n", msg),
            RouteError::Io(e) => format!("<html>ERROR: {}</html>", e),
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MissingArguments(msg)
            | RouteError::MissingArgument(msg)
            | RouteError::InvalidArgument(msg)
            | RouteError::Upstream(msg) => f.write_str(msg.trim_end()),
            RouteError::NotFound(path) => write!(f, "file not found: {}", path),
            RouteError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RouteError {
    fn from(e: io::Error) -> Self {
        RouteError::Io(e)
    }
}

impl From<QueryError> for RouteError {
    fn from(e: QueryError) -> Self {
        RouteError::InvalidArgument(format!("{}\n", e))
    }
}
