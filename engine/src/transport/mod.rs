//! # Transport Module
//!
//! The seam between the engine and whatever carries the status request.
//!
//! A [`Transport`] sends one fan-out request and hands back a [`ReplyStream`]
//! that yields raw reply payloads as they arrive. The stream ending means no
//! further reply can arrive. Addressing, connection setup and authentication
//! all stay behind this trait.
//!
//! - **`HttpTransport`**: asks every configured server over HTTP, one task per server

pub mod http;
#[cfg(test)]
pub(crate) mod scripted;

pub use http::HttpTransport;

use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
};
use tokio::sync::mpsc;

/// Raw reply payloads in arrival order.
pub type ReplyStream = mpsc::Receiver<Vec<u8>>;

/// Sends one broadcast-style request.
pub trait Transport: Send + Sync {
    /// Sends the request and returns the stream its replies arrive on.
    fn scatter(&self) -> Pin<Box<dyn Future<Output = Result<ReplyStream>> + Send + '_>>;

    /// Get the name of this transport
    fn name(&self) -> &'static str;
}
