//! HTTP protocol implementation.
//!
//! A minimal HTTP/1.1 responder: one request per connection, `GET` only,
//! `Connection: close` on every response.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one connection through its stages and closes it
//! - **`parser`**: Reads the request header block and extracts the target
//! - **`request`**: The request target
//! - **`mime`**: Content category from the target's extension
//! - **`resource`**: Maps a target onto a local file, once per connection
//! - **`response`**: Status codes, header block and date formats
//! - **`writer`**: Writes the status line and headers
//! - **`render`**: Writes the HTML or image body
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │    Start    │ ← Read header block
//!        └──────┬──────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   RequestRead    │ ← Resolve resource, write header
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   HeaderSent     │ ← Write body
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   ContentSent    │
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Flush and shut down (also reached on any error)
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webworker::config::SiteConfig;
//! use webworker::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let site = Arc::new(SiteConfig::default());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let site = site.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, site).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod render;
pub mod request;
pub mod resource;
pub mod response;
pub mod writer;
