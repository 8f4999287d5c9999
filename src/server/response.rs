use http::StatusCode;
use std::io::{self, Write};

pub const TEXT_HTML: &str = "text/html";
pub const APPLICATION_JSON: &str = "application/json";

fn status_reason(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        406 => "Wrong Values: No default",
        _ => status.canonical_reason().unwrap_or("Unknown"),
    }
}

/// One complete response: status line, `Content-Type`, body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// `200 OK` with an HTML body.
    pub fn ok_html(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::OK, TEXT_HTML, body)
    }

    /// HTML response with an arbitrary status.
    pub fn html(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, TEXT_HTML, body)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn reason(&self) -> &'static str {
        status_reason(self.status)
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, lossily decoded.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Serialize into the exact bytes sent on the wire.
    ///
    /// Headers end with a bare `\n`, not CRLF; no `Content-Length` is sent
    /// since the connection is closed after the body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\nContent-Type: {}; charset=utf-8\n\n",
            self.status.as_u16(),
            self.reason(),
            self.content_type
        );
        let mut out = Vec::with_capacity(head.len() + self.body.len());
        out.extend_from_slice(head.as_bytes());
        out.extend_from_slice(&self.body);
        out
    }
}

/// Write `response` to `out` and flush.
pub fn write_response<W: Write>(out: &mut W, response: &HttpResponse) -> io::Result<()> {
    out.write_all(&response.to_bytes())?;
    out.flush()
}
