use chrono::{
    DateTime,
    Utc,
};
use serde::{
    de::IgnoredAny,
    Deserialize,
    Serialize,
    Serializer,
};
use std::time::Duration;

/// One reply from one server instance.
///
/// Records are built once, when a reply is decoded, and only handed out by
/// reference afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusRecord {
    pub server_name: String,
    pub host: String,
    pub version: String,
    pub cluster_name: String,
    pub domain: String,
    pub jetstream_enabled: bool,

    pub connections: u64,
    pub subscriptions: u64,
    pub route_count: usize,
    pub gateway_count: usize,
    /// Inbound connections summed over every gateway of this server.
    pub gateway_inbound_total: u64,

    pub memory_bytes: i64,
    pub cpu_percent: f64,
    pub core_count: i64,
    pub slow_consumer_count: u64,

    pub process_start_time: DateTime<Utc>,
    pub report_time: DateTime<Utc>,

    /// Measured by the collector, never part of the payload.
    #[serde(rename = "rtt", serialize_with = "serialize_nanos")]
    pub round_trip_time: Duration,
}

impl StatusRecord {
    /// Decodes a raw status reply. The round-trip time is left at zero.
    pub fn decode(payload: &[u8]) -> Result<Self, serde_json::Error> {
        let message: StatsMessage = serde_json::from_slice(payload)?;
        Ok(message.into())
    }

    pub fn with_round_trip_time(mut self, round_trip_time: Duration) -> Self {
        self.round_trip_time = round_trip_time;
        self
    }

    /// Time between process start and the moment the server reported, zero if
    /// the clocks disagree.
    pub fn uptime(&self) -> Duration {
        (self.report_time - self.process_start_time).to_std().unwrap_or_default()
    }

    /// `no`, `yes`, or the JetStream domain when one is set.
    pub fn jetstream_label(&self) -> &str {
        match (self.jetstream_enabled, self.domain.as_str()) {
            (false, _) => "no",
            (true, "") => "yes",
            (true, domain) => domain,
        }
    }
}

fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_nanos().min(u64::MAX as u128) as u64)
}

// Wire shape of a status reply: `{"server": {...}, "statsz": {...}}`

#[derive(Debug, Deserialize)]
struct StatsMessage {
    server: ServerInfo,
    statsz: ServerStats,
}

#[derive(Debug, Deserialize)]
struct ServerInfo {
    #[serde(default)]
    name: String,
    #[serde(default)]
    host: String,
    #[serde(default, rename = "ver")]
    version: String,
    #[serde(default)]
    cluster: String,
    #[serde(default)]
    domain: String,
    #[serde(default)]
    jetstream: bool,
    time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ServerStats {
    start: DateTime<Utc>,
    #[serde(default)]
    mem: i64,
    #[serde(default)]
    cores: i64,
    #[serde(default)]
    cpu: f64,
    #[serde(default)]
    connections: u64,
    #[serde(default)]
    subscriptions: u64,
    #[serde(default)]
    slow_consumers: u64,
    #[serde(default)]
    routes: Vec<IgnoredAny>,
    #[serde(default)]
    gateways: Vec<GatewayStat>,
}

#[derive(Debug, Deserialize)]
struct GatewayStat {
    #[serde(default)]
    inbound_connections: u64,
}

impl From<StatsMessage> for StatusRecord {
    fn from(StatsMessage { server, statsz }: StatsMessage) -> Self {
        Self {
            server_name: server.name,
            host: server.host,
            version: server.version,
            cluster_name: server.cluster,
            domain: server.domain,
            jetstream_enabled: server.jetstream,
            connections: statsz.connections,
            subscriptions: statsz.subscriptions,
            route_count: statsz.routes.len(),
            gateway_count: statsz.gateways.len(),
            gateway_inbound_total: statsz.gateways.iter().map(|g| g.inbound_connections).sum(),
            memory_bytes: statsz.mem,
            cpu_percent: statsz.cpu,
            core_count: statsz.cores,
            slow_consumer_count: statsz.slow_consumers,
            process_start_time: statsz.start,
            report_time: server.time,
            round_trip_time: Duration::ZERO,
        }
    }
}
