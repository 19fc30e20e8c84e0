//! Response body generation.
//!
//! HTML pages are streamed line by line with marker substitution; images are
//! copied verbatim in bounded chunks.

use anyhow::{Context, bail};
use bytes::BytesMut;
use chrono::{DateTime, Utc};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::mime::ContentType;
use crate::http::parser::trim_line_ending;
use crate::http::resource::ResourceLookup;
use crate::http::response::marker_date;

/// Lines containing this get the current date appended.
pub const DATE_MARKER: &[u8] = b"<cs371date>";
/// Lines containing this get the server name appended. Prefix match.
pub const SERVER_MARKER: &[u8] = b"<cs371server";

/// Body sent when an HTML resource is missing.
pub const NOT_FOUND_BODY: &[u8] = b"<h1>404 Not Found</h1>\n";

/// Image copy chunk size
const CHUNK_SIZE: usize = 8192;

/// Write the response body for a resolved resource.
///
/// A missing HTML page degrades to an inline 404 body. A missing image is an
/// error: the header has already promised image bytes.
/// Returns the number of body bytes written.
pub async fn write_content<W>(
    stream: &mut W,
    content_type: ContentType,
    lookup: ResourceLookup,
    server_name: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    match (lookup, content_type.is_image()) {
        (ResourceLookup::Found { file, .. }, false) => {
            write_html(stream, file, server_name, now).await
        }
        (ResourceLookup::NotFound, false) => {
            stream.write_all(NOT_FOUND_BODY).await?;
            Ok(NOT_FOUND_BODY.len() as u64)
        }
        (ResourceLookup::Found { path, file, len }, true) => write_binary(stream, file, len)
            .await
            .with_context(|| format!("copying {}", path.display())),
        (ResourceLookup::NotFound, true) => bail!("image resource not found"),
    }
}

async fn write_html<W>(
    stream: &mut W,
    file: File,
    server_name: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let date = marker_date(now);
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut written = 0u64;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        let text = trim_line_ending(&line);
        let mut out = Vec::with_capacity(text.len() + 64);
        out.extend_from_slice(text);

        if contains(text, DATE_MARKER) {
            out.extend_from_slice(date.as_bytes());
        }
        if contains(text, SERVER_MARKER) {
            out.extend_from_slice(server_name.as_bytes());
        }
        out.push(b'\n');

        stream.write_all(&out).await?;
        written += out.len() as u64;
    }

    Ok(written)
}

async fn write_binary<W>(stream: &mut W, file: File, len: u64) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut reader = file.take(len);
    let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
    let mut written = 0u64;

    loop {
        buf.clear();
        let n = reader.read_buf(&mut buf).await?;
        if n == 0 {
            break;
        }

        stream.write_all(&buf).await?;
        written += n as u64;
    }

    if written != len {
        bail!("resource truncated: sent {} of {} bytes", written, len);
    }

    Ok(written)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
