use crate::{
    error::SurveyError,
    transport::{
        ReplyStream,
        Transport,
    },
};
use eyre::Result;
use reqwest::Client;
use std::{
    future::Future,
    pin::Pin,
    time::Duration,
};
use tokio::sync::mpsc;
use url::Url;

/// Fans the status request out over HTTP, one GET per configured server.
///
/// Failed requests and non-2xx answers are logged and dropped, exactly like
/// a reply lost on the network.
pub struct HttpTransport {
    http_client: Client,
    targets: Vec<Url>,
    request_timeout: Duration,
}

impl HttpTransport {
    /// `status_path` is resolved against every server URL, so an absolute
    /// path replaces whatever path the server URL carries.
    pub fn new(
        http_client: Client,
        servers: &[Url],
        status_path: &str,
        request_timeout: Duration,
    ) -> Result<Self, SurveyError> {
        if servers.is_empty() {
            return Err(SurveyError::NoServers);
        }
        let targets = servers
            .iter()
            .map(|server| server.join(status_path))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SurveyError::Transport(eyre::eyre!("invalid status path '{status_path}': {e}")))?;

        Ok(Self {
            http_client,
            targets,
            request_timeout,
        })
    }

    pub fn targets(&self) -> &[Url] {
        &self.targets
    }

    async fn fetch(http_client: &Client, target: Url, timeout: Duration) -> Result<Vec<u8>> {
        let response = http_client
            .get(target)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

impl Transport for HttpTransport {
    fn scatter(&self) -> Pin<Box<dyn Future<Output = Result<ReplyStream>> + Send + '_>> {
        Box::pin(async move {
            let (tx, rx) = mpsc::channel(self.targets.len().max(1));

            for target in &self.targets {
                let http_client = self.http_client.clone();
                let tx = tx.clone();
                let target = target.clone();
                let timeout = self.request_timeout;

                tokio::spawn(async move {
                    match Self::fetch(&http_client, target.clone(), timeout).await {
                        Ok(body) => {
                            if tx.send(body).await.is_err() {
                                debug!(%target, "collection window closed, discarding late reply");
                            }
                        }
                        Err(err) => warn!(%target, error = %err, "no status reply"),
                    }
                });
            }

            debug!(servers = self.targets.len(), "status request sent");
            Ok(rx)
        })
    }

    fn name(&self) -> &'static str {
        "HttpTransport"
    }
}
