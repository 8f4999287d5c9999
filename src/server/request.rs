use std::io::{self, BufRead, Read};
use tracing::debug;

/// Longest header line accepted, including its terminator.
pub const MAX_LINE_BYTES: usize = 8 * 1024;

/// What the parser extracted from one connection's header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Path of the first `GET` line with its leading `/` removed; `None` when
    /// no `GET` line arrived before the blank line or end of stream
    pub path: Option<String>,
}

/// Read one line, stripping `\n` or `\r\n`. `Ok(None)` at end of stream.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    let n = reader
        .by_ref()
        .take(MAX_LINE_BYTES as u64)
        .read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(None);
    }
    if n == MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("header line exceeds {} bytes", MAX_LINE_BYTES),
        ));
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Extract the path from `GET <path> HTTP/<ver>`.
///
/// The token between the first and second space loses its first character
/// (the leading `/`). Lines without a second space, or with an empty token,
/// yield `None`.
pub fn extract_path(line: &str) -> Option<String> {
    if !line.starts_with("GET") {
        return None;
    }
    let first = line.find(' ')?;
    let rest = &line[first + 1..];
    let second = rest.find(' ')?;
    let mut token = rest[..second].chars();
    token.next()?;
    Some(token.as_str().to_string())
}

/// Consume header lines until the blank terminator or end of stream.
///
/// The first well-formed `GET` line supplies the path; every other line is
/// ignored. A read error aborts only the current connection.
pub fn parse_request<R: BufRead>(reader: &mut R) -> io::Result<ParsedRequest> {
    let mut path = None;
    let mut lines_read = 0;
    let mut buf = Vec::with_capacity(256);

    while let Some(line) = read_line(reader, &mut buf)? {
        lines_read += 1;
        debug!(line = %line, "Received header line");
        if line.is_empty() {
            break;
        }
        if path.is_none() {
            path = extract_path(&line);
        }
    }

    debug!(
        lines_read = lines_read,
        path = ?path,
        "Finished parsing header"
    );

    Ok(ParsedRequest { path })
}
