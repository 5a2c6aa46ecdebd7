use crate::transport::{
    ReplyStream,
    Transport,
};
use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
    time::Duration,
};
use tokio::sync::mpsc;

/// Plays back a fixed list of replies, each after its own delay measured from
/// the moment the request was sent.
pub(crate) struct ScriptedTransport {
    replies: Vec<(Duration, Vec<u8>)>,
    /// Keep the stream open after the last reply, the way a broadcast
    /// transport never knows it has heard from everybody.
    keep_open: bool,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: Vec<(Duration, Vec<u8>)>) -> Self {
        Self {
            replies,
            keep_open: true,
        }
    }

    pub(crate) fn closing(mut self) -> Self {
        self.keep_open = false;
        self
    }
}

impl Transport for ScriptedTransport {
    fn scatter(&self) -> Pin<Box<dyn Future<Output = Result<ReplyStream>> + Send + '_>> {
        Box::pin(async move {
            let (tx, rx) = mpsc::channel(self.replies.len().max(1));
            for (delay, payload) in self.replies.clone() {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(payload).await;
                });
            }
            if self.keep_open {
                tokio::spawn(async move { tx.closed().await });
            }
            Ok(rx)
        })
    }

    fn name(&self) -> &'static str {
        "ScriptedTransport"
    }
}

/// A well-formed status reply.
pub(crate) fn status_reply(name: &str, cluster: &str, connections: u64) -> Vec<u8> {
    serde_json::json!({
        "server": {
            "name": name,
            "host": format!("{name}.example.net"),
            "ver": "2.10.7",
            "cluster": cluster,
            "jetstream": false,
            "time": "2024-03-01T12:00:00Z",
        },
        "statsz": {
            "start": "2024-03-01T11:00:00Z",
            "mem": 1024,
            "cores": 4,
            "cpu": 1.5,
            "connections": connections,
            "subscriptions": 10,
            "slow_consumers": 0,
        },
    })
    .to_string()
    .into_bytes()
}
