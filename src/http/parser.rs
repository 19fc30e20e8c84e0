use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::RequestTarget;

/// Only GET requests are understood; any line containing this token is the request line.
pub const METHOD_TOKEN: &str = "GET";

/// Longest request line accepted, newline included.
pub const MAX_LINE: usize = 8192;

/// Why reading the header block stopped before its blank line.
#[derive(Debug)]
enum ReadStop {
    /// Peer closed the stream
    Eof,
    Io(std::io::Error),
    TimedOut,
    /// No newline within `MAX_LINE` bytes
    LineTooLong,
}

/// Extract the target from a single request line.
///
/// Returns the text following `GET ` up to the next space, or to the end of the
/// line when no space follows. `None` if the line does not contain the token.
pub fn extract_target(line: &str) -> Option<&str> {
    let start = line.find(METHOD_TOKEN)? + METHOD_TOKEN.len();
    let rest = &line[start..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    Some(match rest.find(' ') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Consume the request header block and return the request target.
///
/// Reads lines until the blank line that ends the header block. The first line
/// containing the method token provides the target. A failed, timed out,
/// truncated or overlong read ends parsing early with whatever was found so far.
pub async fn read_request_target<R>(reader: &mut R, timeout: Option<Duration>) -> RequestTarget
where
    R: AsyncBufRead + Unpin,
{
    let mut target: Option<RequestTarget> = None;
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        if let Err(stop) = read_line(reader, &mut buf, timeout).await {
            tracing::debug!(reason = ?stop, "Request read ended early");
            break;
        }

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        tracing::debug!("Request line: ({})", line);

        if line.is_empty() {
            break;
        }

        if target.is_none() {
            target = extract_target(&line).map(RequestTarget::from);
        }
    }

    target.unwrap_or_default()
}

async fn read_line<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    timeout: Option<Duration>,
) -> Result<(), ReadStop>
where
    R: AsyncBufRead + Unpin,
{
    let mut limited = (&mut *reader).take(MAX_LINE as u64);
    let read = limited.read_until(b'\n', buf);
    let n = match timeout {
        Some(limit) => tokio::time::timeout(limit, read)
            .await
            .map_err(|_| ReadStop::TimedOut)?,
        None => read.await,
    }
    .map_err(ReadStop::Io)?;

    if n == 0 {
        return Err(ReadStop::Eof);
    }
    if n == MAX_LINE && !buf.ends_with(b"\n") {
        return Err(ReadStop::LineTooLong);
    }
    Ok(())
}

/// Drop a trailing `\n` or `\r\n`.
pub(crate) fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
