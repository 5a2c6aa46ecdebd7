//! Turns ranked records and rollups into display rows, then into tables.
//!
//! Every cell is computed here; `comfy-table` only draws.

use crate::{
    compact::compact,
    humanize::{
        format_bytes,
        format_count,
        format_cpu,
        format_rtt,
        format_uptime,
    },
    metrics::{
        ClusterRollup,
        GlobalRollup,
        StatusRecord,
    },
};
use comfy_table::{
    presets,
    Attribute,
    Cell,
    ContentArrangement,
    Table,
};
use std::collections::BTreeMap;

pub const SERVER_HEADERS: [&str; 15] = [
    "Name", "Cluster", "Host", "Version", "JS", "Conns", "Subs", "Routes", "GWs", "Mem", "CPU %", "Cores", "Slow",
    "Uptime", "RTT",
];

pub const CLUSTER_HEADERS: [&str; 5] = [
    "Cluster",
    "Node Count",
    "Outgoing Gateways",
    "Incoming Gateways",
    "Connections",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub server_rows: Vec<Vec<String>>,
    pub server_totals: Vec<String>,
    /// Empty when no record named a cluster.
    pub cluster_rows: Vec<Vec<String>>,
    pub cluster_totals: Option<Vec<String>>,
}

impl Report {
    /// `ranked` is displayed in the given order; `compact_columns` shortens
    /// the name and host columns.
    pub fn compose(
        ranked: &[&StatusRecord],
        totals: &GlobalRollup,
        clusters: &BTreeMap<String, ClusterRollup>,
        compact_columns: bool,
    ) -> Self {
        let mut names = ranked.iter().map(|r| r.server_name.clone()).collect::<Vec<_>>();
        let mut hosts = ranked.iter().map(|r| r.host.clone()).collect::<Vec<_>>();
        if compact_columns {
            names = compact(&names);
            hosts = compact(&hosts);
        }

        let server_rows = ranked
            .iter()
            .zip(names)
            .zip(hosts)
            .map(|((record, name), host)| {
                vec![
                    name,
                    record.cluster_name.clone(),
                    host,
                    record.version.clone(),
                    record.jetstream_label().to_string(),
                    format_count(record.connections),
                    format_count(record.subscriptions),
                    format_count(record.route_count as u64),
                    format_count(record.gateway_count as u64),
                    format_bytes(record.memory_bytes),
                    format_cpu(record.cpu_percent),
                    record.core_count.to_string(),
                    format_count(record.slow_consumer_count),
                    format_uptime(record.uptime()),
                    format_rtt(record.round_trip_time),
                ]
            })
            .collect();

        let mut server_totals = vec![String::new(); SERVER_HEADERS.len()];
        server_totals[1] = format_count(clusters.len() as u64);
        server_totals[2] = format_count(totals.server_count as u64);
        server_totals[4] = format_count(totals.jetstream_server_count as u64);
        server_totals[5] = format_count(totals.connection_total);
        server_totals[6] = format_count(totals.subscription_total);
        server_totals[9] = format_bytes(totals.memory_total);
        server_totals[12] = format_count(totals.slow_consumer_total);

        let (cluster_rows, cluster_totals) = Self::compose_clusters(clusters);

        Self {
            server_rows,
            server_totals,
            cluster_rows,
            cluster_totals,
        }
    }

    fn compose_clusters(clusters: &BTreeMap<String, ClusterRollup>) -> (Vec<Vec<String>>, Option<Vec<String>>) {
        if clusters.is_empty() {
            return (Vec::new(), None);
        }

        // stable, so equal totals stay in name order
        let mut ordered = clusters.values().collect::<Vec<_>>();
        ordered.sort_by_key(|c| c.connection_total);

        let (mut nodes, mut outgoing, mut incoming, mut connections) = (0u64, 0u64, 0u64, 0u64);
        let rows = ordered
            .into_iter()
            .map(|cluster| {
                nodes += cluster.node_names.len() as u64;
                outgoing += cluster.gateway_out_total as u64;
                incoming += cluster.gateway_in_total;
                connections += cluster.connection_total;
                vec![
                    cluster.name.clone(),
                    format_count(cluster.node_names.len() as u64),
                    format_count(cluster.gateway_out_total as u64),
                    format_count(cluster.gateway_in_total),
                    format_count(cluster.connection_total),
                ]
            })
            .collect();

        let totals = vec![
            String::new(),
            format_count(nodes),
            format_count(outgoing),
            format_count(incoming),
            format_count(connections),
        ];
        (rows, Some(totals))
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("Server Overview\n");
        output.push_str(&format!(
            "{}\n",
            Self::table(&SERVER_HEADERS, &self.server_rows, &self.server_totals)
        ));

        if let Some(cluster_totals) = &self.cluster_totals {
            output.push_str("\nCluster Overview\n");
            output.push_str(&format!(
                "{}\n",
                Self::table(&CLUSTER_HEADERS, &self.cluster_rows, cluster_totals)
            ));
        }

        output
    }

    fn table(headers: &[&str], rows: &[Vec<String>], totals: &[String]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                headers
                    .iter()
                    .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                    .collect::<Vec<_>>(),
            );

        for row in rows {
            table.add_row(row);
        }
        table.add_row(
            totals
                .iter()
                .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

        table
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metrics::Aggregate;
    use chrono::{
        TimeZone,
        Utc,
    };
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn record(name: &str, cluster: &str, connections: u64) -> StatusRecord {
        StatusRecord {
            server_name: name.to_string(),
            host: format!("{name}.example.net"),
            version: "2.10.7".to_string(),
            cluster_name: cluster.to_string(),
            connections,
            subscriptions: 1_200,
            route_count: 2,
            gateway_count: 1,
            gateway_inbound_total: 3,
            memory_bytes: 1536,
            cpu_percent: 12.7,
            core_count: 8,
            process_start_time: Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap(),
            report_time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 1, 1).unwrap(),
            round_trip_time: Duration::from_micros(4_600),
            ..Default::default()
        }
    }

    fn aggregate(records: Vec<StatusRecord>) -> Aggregate {
        let mut aggregate = Aggregate::default();
        for record in records {
            aggregate.add(record);
        }
        aggregate
    }

    fn compose(aggregate: &Aggregate, compact_columns: bool) -> Report {
        let ranked = aggregate.records.iter().collect::<Vec<_>>();
        Report::compose(&ranked, &aggregate.totals, &aggregate.clusters, compact_columns)
    }

    #[test]
    fn server_row_carries_every_column() {
        let aggregate = aggregate(vec![record("n1", "east", 1_234)]);

        let report = compose(&aggregate, false);

        assert_eq!(
            report.server_rows,
            vec![vec![
                "n1",
                "east",
                "n1.example.net",
                "2.10.7",
                "no",
                "1,234",
                "1,200",
                "2",
                "1",
                "1.5 KiB",
                "13",
                "8",
                "0",
                "1h 1m 1s",
                "5ms",
            ]]
        );
    }

    #[test]
    fn jetstream_column_shows_the_domain() {
        let mut plain = record("n1", "", 1);
        plain.jetstream_enabled = true;
        let mut hub = record("n2", "", 1);
        hub.jetstream_enabled = true;
        hub.domain = "hub".to_string();
        let aggregate = aggregate(vec![plain, hub, record("n3", "", 1)]);

        let report = compose(&aggregate, false);

        let js = report.server_rows.iter().map(|row| row[4].as_str()).collect::<Vec<_>>();
        assert_eq!(js, vec!["yes", "hub", "no"]);
        assert_eq!(report.server_totals[4], "2");
    }

    #[test]
    fn totals_row_places_each_sum_under_its_column() {
        let aggregate = aggregate(vec![
            record("a", "A", 5),
            record("b", "B", 20),
            record("c", "A", 5),
            record("d", "", 1_000),
        ]);

        let report = compose(&aggregate, false);

        assert_eq!(
            report.server_totals,
            vec!["", "2", "4", "", "0", "1,030", "4,800", "", "", "6.0 KiB", "", "", "0", "", ""]
        );
    }

    #[test]
    fn clusters_are_ordered_by_connections() {
        let aggregate = aggregate(vec![
            record("a", "A", 5),
            record("b", "B", 20),
            record("c", "A", 5),
            record("d", "C", 10),
        ]);

        let report = compose(&aggregate, false);

        let order = report.cluster_rows.iter().map(|row| row[0].as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["A", "C", "B"]);
        assert_eq!(report.cluster_rows[0], vec!["A", "2", "2", "6", "10"]);
        assert_eq!(report.cluster_totals.unwrap(), vec!["", "4", "4", "12", "40"]);
    }

    #[test]
    fn no_clusters_means_no_cluster_table() {
        let aggregate = aggregate(vec![record("a", "", 5)]);

        let report = compose(&aggregate, true);
        let rendered = report.render();

        assert!(report.cluster_rows.is_empty());
        assert_eq!(report.cluster_totals, None);
        assert!(rendered.contains("Server Overview"));
        assert!(!rendered.contains("Cluster Overview"));
    }

    #[test]
    fn compaction_shortens_names_and_hosts() {
        let aggregate = aggregate(vec![record("n1.east", "A", 1), record("n2.east", "A", 1)]);

        let compacted = compose(&aggregate, true);
        let full = compose(&aggregate, false);

        assert_eq!(compacted.server_rows[0][0], "n1");
        assert_eq!(compacted.server_rows[1][2], "n2");
        assert_eq!(full.server_rows[1][2], "n2.east.example.net");
    }

    #[test]
    fn rendering_includes_both_tables() {
        let aggregate = aggregate(vec![record("n1", "east", 7)]);

        let rendered = compose(&aggregate, true).render();

        assert!(rendered.contains("Cluster Overview"));
        assert!(rendered.contains("Outgoing Gateways"));
        assert!(rendered.contains("east"));
    }
}
