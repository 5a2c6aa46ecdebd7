//! # Server Survey Engine
//!
//! Scatter-gather status collection for a fleet of servers whose size is not
//! known up front.
//!
//! ## Features
//!
//! - **One request, many replies**: a single fan-out request, replies gathered within a bounded window
//! - **Early completion**: the window closes as soon as an expected number of replies arrived
//! - **Rollups**: global totals and per-cluster sums, updated atomically per reply
//! - **Ranking**: stable ordering under ten sort keys, highest-first by default
//! - **Reports**: server and cluster tables, or the raw records as JSON
//!
//! ## Architecture
//!
//! - **`transport`**: how the request travels and how replies come back
//! - **`metrics`**: the decoded status record and the rollups built from it
//! - **`collectors`**: reply collection, aggregation and the `Survey` driving them
//! - **`ranking`**, **`compact`**, **`humanize`**, **`report`**: pure transforms over collected data
//!
//! ## Usage
//!
//! ```no_run
//! use server_survey_engine::{
//!     Collector,
//!     HttpTransport,
//!     ReplyCollector,
//!     Survey,
//!     SurveyOptions,
//! };
//! use std::time::Duration;
//!
//! # async fn run() -> eyre::Result<()> {
//! let servers = vec!["http://n1.example.net:8222".parse()?];
//! let transport = HttpTransport::new(reqwest::Client::new(), &servers, "/statsz", Duration::from_secs(5))?;
//! let mut survey = Survey::new(ReplyCollector::new(Box::new(transport)), SurveyOptions::default());
//! survey.collect(1, Duration::from_secs(5)).await?;
//! println!("{}", survey.format());
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate tracing;

pub mod collectors;
pub mod compact;
pub mod error;
pub mod humanize;
pub mod metrics;
pub mod ranking;
pub mod report;
pub mod transport;

pub use collectors::*;
pub use error::SurveyError;
pub use metrics::*;
pub use ranking::{
    rank,
    SortOrder,
};
pub use report::Report;
pub use transport::{
    HttpTransport,
    ReplyStream,
    Transport,
};
