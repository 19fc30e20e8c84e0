use chrono::{DateTime, Utc};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::mime::ContentType;
use crate::http::resource::ResourceLookup;
use crate::http::response::{ResponseHead, StatusCode};

/// Write the status line and header block.
///
/// The status follows the shared resource lookup: `200` when the resource was
/// opened, `404` otherwise. The stream is left open. Returns the status sent.
pub async fn write_header<W>(
    stream: &mut W,
    content_type: ContentType,
    lookup: &ResourceLookup,
    server: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<StatusCode>
where
    W: AsyncWrite + Unpin,
{
    let status = if lookup.is_found() {
        StatusCode::Ok
    } else {
        StatusCode::NotFound
    };

    let head = ResponseHead {
        status,
        date: now,
        server,
        content_type,
    };

    stream.write_all(&head.serialize()).await?;
    Ok(status)
}
