//! Per-environment reports built from one fetch.

use alertbar_config::Environment;
use serde::Serialize;

use crate::classify::classify;
use crate::types::{AlertRecord, MAX_SHOW};

/// Summary of one environment for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentReport {
    /// The environment this report describes.
    pub environment: Environment,
    /// The first [`MAX_SHOW`] active alert lines in backend order, sorted.
    pub active_lines: Vec<String>,
    /// Total active alerts before capping.
    pub active_count: usize,
    /// Silenced and inhibited alerts.
    pub silenced_count: usize,
    /// Heartbeat alerts.
    pub ignored_count: usize,
    /// Alerts skipped for missing an `alertname`.
    pub malformed_count: usize,
    /// Why the fetch failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

impl EnvironmentReport {
    /// Builds a report from the records fetched for `environment`.
    #[must_use]
    pub fn from_records(environment: Environment, records: &[AlertRecord]) -> Self {
        let classified = classify(environment.name(), records);
        let active_count = classified.active_lines.len();

        // Keep the first MAX_SHOW in backend order, then sort those for display
        let mut active_lines = classified.active_lines;
        active_lines.truncate(MAX_SHOW);
        active_lines.sort();

        Self {
            environment,
            active_lines,
            active_count,
            silenced_count: classified.silenced,
            ignored_count: classified.ignored,
            malformed_count: classified.malformed,
            fetch_error: None,
        }
    }

    /// Builds the zero-count report for an environment whose fetch failed.
    #[must_use]
    pub fn failed(environment: Environment, reason: impl Into<String>) -> Self {
        Self {
            environment,
            active_lines: Vec::new(),
            active_count: 0,
            silenced_count: 0,
            ignored_count: 0,
            malformed_count: 0,
            fetch_error: Some(reason.into()),
        }
    }

    /// Returns true if more active alerts exist than are listed.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.active_count > MAX_SHOW
    }

    /// Total records accounted for.
    #[must_use]
    pub fn total(&self) -> usize {
        self.active_count + self.silenced_count + self.ignored_count + self.malformed_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prod() -> Environment {
        Environment::new("prod", "http://prod:9093")
    }

    #[test]
    fn report_counts_all_buckets() {
        let records = vec![
            AlertRecord::new("DiskFull").with_label("job", "node1"),
            AlertRecord::new("NodeDown").silenced_by("sil1"),
            AlertRecord::new("Heartbeat").with_label("severity", "heartbeat"),
            AlertRecord::default(),
        ];
        let report = EnvironmentReport::from_records(prod(), &records);

        assert_eq!(report.active_count, 1);
        assert_eq!(report.silenced_count, 1);
        assert_eq!(report.ignored_count, 1);
        assert_eq!(report.malformed_count, 1);
        assert_eq!(report.total(), records.len());
        assert_eq!(report.fetch_error, None);
    }

    #[test]
    fn report_caps_in_backend_order_then_sorts() {
        let records: Vec<AlertRecord> = (0..25)
            .rev()
            .map(|i| AlertRecord::new(format!("Alert{i:02}")))
            .collect();
        let report = EnvironmentReport::from_records(prod(), &records);

        assert_eq!(report.active_count, 25);
        assert_eq!(report.active_lines.len(), MAX_SHOW);
        assert!(report.is_truncated());
        let expected: Vec<String> = (5..25).map(|i| format!("Alert{i:02} | ")).collect();
        assert_eq!(report.active_lines, expected);
    }

    #[test]
    fn report_exactly_max_not_truncated() {
        let records: Vec<AlertRecord> = (0..MAX_SHOW)
            .map(|i| AlertRecord::new(format!("Alert{i:02}")))
            .collect();
        let report = EnvironmentReport::from_records(prod(), &records);
        assert_eq!(report.active_lines.len(), MAX_SHOW);
        assert!(!report.is_truncated());
    }

    #[test]
    fn report_failed_is_zeroed() {
        let report = EnvironmentReport::failed(prod(), "connection refused");
        assert_eq!(report.total(), 0);
        assert!(report.active_lines.is_empty());
        assert_eq!(report.fetch_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn report_serializes_environment() {
        let report = EnvironmentReport::from_records(prod(), &[AlertRecord::new("A")]);
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["environment"]["name"], "prod");
        assert_eq!(json["active_count"], 1);
        assert!(json.get("fetch_error").is_none());
    }
}
