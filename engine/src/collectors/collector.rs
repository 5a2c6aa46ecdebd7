use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
    time::Duration,
};

/// Trait for collecting and formatting survey data
pub trait Collector {
    /// Collect replies for one window, stopping early once `expected`
    /// replies arrived (`0` waits the full `window`)
    fn collect(
        &mut self,
        expected: usize,
        window: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Format data for display
    fn format(&self) -> String;

    /// Get data summary as JSON
    fn summary(&self) -> serde_json::Value;

    /// Get the name of this collector
    fn name(&self) -> &'static str;
}
