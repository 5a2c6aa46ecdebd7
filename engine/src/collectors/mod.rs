//! # Collectors Module
//!
//! The scatter-gather half of the engine.
//!
//! ## Architecture
//!
//! - **`Collector` trait**: the interface the binary drives, collect once then format or summarize
//! - **`ReplyCollector`**: sends the request through a transport and owns the completion policy
//! - **`Aggregator`**: the single exclusion boundary every decoded reply is merged under
//! - **`Survey`**: ties collection, ranking, compaction and the report together
//!
//! A run is a closed epoch. Once the collection window closes the aggregator
//! is sealed and late replies are dropped.

pub mod aggregator;
pub mod collector;
pub mod reply_collector;
pub mod survey;

pub use aggregator::Aggregator;
pub use collector::Collector;
pub use reply_collector::ReplyCollector;
pub use survey::{
    Survey,
    SurveyOptions,
};
