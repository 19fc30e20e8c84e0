//! Webworker - single-request HTTP/1.1 responder
//!
//! Core library: reads one request from an accepted connection and answers it
//! with a templated HTML page or a raw image, then closes the connection.

pub mod config;
pub mod http;
pub mod server;
