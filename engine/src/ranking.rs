//! Orders collected records for display.
//!
//! The command line exposes a `reverse` flag whose meaning is inverted: the
//! natural view is highest-first, and `reverse` asks for lowest-first. Inside
//! the engine that is an explicit [`SortOrder`], see
//! [`SortOrder::from_reverse_flag`].

use crate::metrics::StatusRecord;
use serde::{
    Deserialize,
    Serialize,
};
use server_survey_config::SortKey;
use std::cmp::Ordering;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// `reverse == false` is the default, highest-first view.
    pub fn from_reverse_flag(reverse: bool) -> Self {
        if reverse {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// Returns the records ordered by `key`.
///
/// `SortKey::Name` always sorts ascending and ignores `order`. The sort is
/// stable, records comparing equal keep their arrival order.
pub fn rank(records: &[StatusRecord], key: SortKey, order: SortOrder) -> Vec<&StatusRecord> {
    let mut ranked = records.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| {
        let cmp = compare(a, b, key);
        match (key, order) {
            (SortKey::Name, _) | (_, SortOrder::Ascending) => cmp,
            (_, SortOrder::Descending) => cmp.reverse(),
        }
    });
    ranked
}

/// Ascending comparison of two records under `key`.
fn compare(a: &StatusRecord, b: &StatusRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.server_name.cmp(&b.server_name),
        SortKey::Conns => a.connections.cmp(&b.connections),
        SortKey::Subs => a.subscriptions.cmp(&b.subscriptions),
        SortKey::Routes => a.route_count.cmp(&b.route_count),
        SortKey::Gws => a.gateway_count.cmp(&b.gateway_count),
        SortKey::Mem => a.memory_bytes.cmp(&b.memory_bytes),
        SortKey::Cpu => a.cpu_percent.partial_cmp(&b.cpu_percent).unwrap_or(Ordering::Equal),
        SortKey::Slow => a.slow_consumer_count.cmp(&b.slow_consumer_count),
        // a later start is a smaller uptime
        SortKey::Uptime => b.process_start_time.cmp(&a.process_start_time),
        SortKey::Rtt => a.round_trip_time.cmp(&b.round_trip_time),
    }
}
