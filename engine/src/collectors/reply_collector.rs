use crate::{
    collectors::Aggregator,
    error::SurveyError,
    metrics::{
        Aggregate,
        StatusRecord,
    },
    transport::Transport,
};
use std::time::Duration;
use tokio::time::{
    timeout_at,
    Instant,
};

/// Sends one request through a [`Transport`] and gathers the replies of a
/// single, bounded collection window.
pub struct ReplyCollector {
    transport: Box<dyn Transport>,
}

impl ReplyCollector {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Runs one collection window.
    ///
    /// With `expected > 0` the window closes after that many replies or when
    /// `timeout` elapses, whichever comes first. With `expected == 0` the
    /// full timeout is awaited unless the transport ends its reply stream
    /// first: a finished stream closes the window early in both cases, so a
    /// transport that knows its population (such as [`HttpTransport`]) does
    /// not sit out the timeout. Broadcast transports never end the stream.
    ///
    /// [`HttpTransport`]: crate::transport::HttpTransport
    ///
    /// # Errors
    /// - [`SurveyError::Decode`] as soon as any reply fails to decode; the
    ///   whole run is abandoned.
    /// - [`SurveyError::NoResults`] when the window closes without replies.
    /// - [`SurveyError::Transport`] when the request could not be sent.
    pub async fn collect(&self, expected: usize, timeout: Duration) -> Result<Aggregate, SurveyError> {
        let aggregator = Aggregator::new();
        let start = Instant::now();
        let deadline = start + timeout;

        info!(transport = self.transport.name(), expected, ?timeout, "requesting server status");
        let mut replies = self.transport.scatter().await.map_err(SurveyError::Transport)?;

        loop {
            let payload = match timeout_at(deadline, replies.recv()).await {
                Ok(Some(payload)) => payload,
                Ok(None) => {
                    debug!("reply stream ended");
                    break;
                }
                Err(_) => {
                    debug!("collection window elapsed");
                    break;
                }
            };

            let index = aggregator.len();
            let record = match StatusRecord::decode(&payload) {
                Ok(record) => record.with_round_trip_time(start.elapsed()),
                Err(source) => {
                    error!(index, error = %source, "could not decode reply");
                    aggregator.seal();
                    return Err(SurveyError::Decode { index, source });
                }
            };
            debug!(server = %record.server_name, rtt = ?record.round_trip_time, "reply received");
            aggregator.on_record(record);

            if expected > 0 && aggregator.len() >= expected {
                debug!(expected, "expected number of replies reached");
                break;
            }
        }

        // closes the epoch, anything still in flight is dropped by its sender
        drop(replies);
        let aggregate = aggregator.seal();

        if aggregate.records.is_empty() {
            return Err(SurveyError::NoResults);
        }

        info!(
            servers = aggregate.totals.server_count,
            clusters = aggregate.clusters.len(),
            elapsed = ?start.elapsed(),
            "collection finished"
        );
        Ok(aggregate)
    }
}
