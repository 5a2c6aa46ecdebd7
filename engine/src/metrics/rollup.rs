use super::StatusRecord;
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::BTreeMap;

/// Totals over every reply of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRollup {
    pub server_count: usize,
    pub connection_total: u64,
    pub memory_total: i64,
    pub slow_consumer_total: u64,
    pub subscription_total: u64,
    pub jetstream_server_count: usize,
}

impl GlobalRollup {
    pub fn add(&mut self, record: &StatusRecord) {
        self.server_count += 1;
        self.connection_total += record.connections;
        self.memory_total += record.memory_bytes;
        self.slow_consumer_total += record.slow_consumer_count;
        self.subscription_total += record.subscriptions;
        if record.jetstream_enabled {
            self.jetstream_server_count += 1;
        }
    }
}

/// Running sums for the servers of one cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRollup {
    pub name: String,
    /// Server names in arrival order, duplicates included.
    pub node_names: Vec<String>,
    pub connection_total: u64,
    pub gateway_out_total: usize,
    pub gateway_in_total: u64,
}

impl ClusterRollup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add(&mut self, record: &StatusRecord) {
        self.node_names.push(record.server_name.clone());
        self.connection_total += record.connections;
        self.gateway_out_total += record.gateway_count;
        self.gateway_in_total += record.gateway_inbound_total;
    }
}

/// Everything one collection run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregate {
    /// Records in arrival order.
    pub records: Vec<StatusRecord>,
    pub totals: GlobalRollup,
    /// Keyed by cluster name; only non-empty names appear.
    pub clusters: BTreeMap<String, ClusterRollup>,
}

impl Aggregate {
    pub(crate) fn add(&mut self, record: StatusRecord) {
        self.totals.add(&record);
        if !record.cluster_name.is_empty() {
            self.clusters
                .entry(record.cluster_name.clone())
                .or_insert_with(|| ClusterRollup::new(record.cluster_name.clone()))
                .add(&record);
        }
        self.records.push(record);
    }
}
