use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::SiteConfig;
use crate::http::mime::ContentType;
use crate::http::parser::read_request_target;
use crate::http::render::write_content;
use crate::http::request::RequestTarget;
use crate::http::resource::ResourceLookup;
use crate::http::response::StatusCode;
use crate::http::writer::write_header;

/// Handles exactly one request on one connection, then closes it.
pub struct Connection<S> {
    stream: BufReader<S>,
    site: Arc<SiteConfig>,
    now: DateTime<Utc>,
    state: ConnectionState,
}

enum ConnectionState {
    Start,
    RequestRead(RequestTarget),
    HeaderSent {
        target: RequestTarget,
        content_type: ContentType,
        lookup: ResourceLookup,
        status: StatusCode,
    },
    ContentSent {
        target: RequestTarget,
        status: StatusCode,
        bytes: u64,
    },
    Closed,
}

impl ConnectionState {
    fn name(&self) -> &'static str {
        match self {
            ConnectionState::Start => "start",
            ConnectionState::RequestRead(_) => "request-read",
            ConnectionState::HeaderSent { .. } => "header-sent",
            ConnectionState::ContentSent { .. } => "content-sent",
            ConnectionState::Closed => "closed",
        }
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<SiteConfig>) -> Self {
        Self {
            stream: BufReader::new(stream),
            site,
            now: Utc::now(),
            state: ConnectionState::Start,
        }
    }

    /// Use a fixed time for the `Date` header and date markers.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Serve the request and close the connection.
    ///
    /// The stream is flushed and shut down on every path; a failure in any
    /// stage skips the remaining stages and is returned after closing.
    pub async fn run(mut self) -> anyhow::Result<()> {
        tracing::info!("Handling connection");
        let mut failure = None;

        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);
            let stage = state.name();

            match state {
                ConnectionState::Closed => break,
                state => match self.advance(state).await {
                    Ok(next) => self.state = next,
                    Err(e) => {
                        tracing::debug!(stage, error = %e, "Connection failed, closing");
                        failure = Some(e);
                    }
                },
            }
        }

        self.close().await;
        tracing::info!("Done handling connection");

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn advance(&mut self, state: ConnectionState) -> anyhow::Result<ConnectionState> {
        let next = match state {
            ConnectionState::Start => {
                let target =
                    read_request_target(&mut self.stream, self.site.read_timeout()).await;
                ConnectionState::RequestRead(target)
            }

            ConnectionState::RequestRead(target) => {
                let content_type = ContentType::resolve(target.as_str());
                let lookup = ResourceLookup::resolve(&self.site.document_root, &target).await;
                let status = write_header(
                    &mut self.stream,
                    content_type,
                    &lookup,
                    &self.site.server_header,
                    self.now,
                )
                .await?;

                ConnectionState::HeaderSent {
                    target,
                    content_type,
                    lookup,
                    status,
                }
            }

            ConnectionState::HeaderSent {
                target,
                content_type,
                lookup,
                status,
            } => {
                let bytes = write_content(
                    &mut self.stream,
                    content_type,
                    lookup,
                    &self.site.marker_server_name,
                    self.now,
                )
                .await?;

                ConnectionState::ContentSent {
                    target,
                    status,
                    bytes,
                }
            }

            ConnectionState::ContentSent {
                target,
                status,
                bytes,
            } => {
                tracing::info!(
                    request_target = %target,
                    status = status.as_u16(),
                    bytes,
                    "Response sent"
                );
                ConnectionState::Closed
            }

            ConnectionState::Closed => ConnectionState::Closed,
        };

        Ok(next)
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.flush().await {
            tracing::debug!(error = %e, "Flush on close failed");
            return;
        }
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Shutdown on close failed");
        }
    }
}
