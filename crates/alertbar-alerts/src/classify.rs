//! Partitioning of one environment's alerts into display buckets.

use tracing::{debug, warn};

use crate::types::{AlertRecord, Classification};

/// Counts and display lines for one environment's records.
///
/// Every input record lands in exactly one of `silenced`, `ignored`,
/// `malformed`, or `active_lines`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Silenced and inhibited records.
    pub silenced: usize,
    /// Heartbeat records.
    pub ignored: usize,
    /// Records without an `alertname` label.
    pub malformed: usize,
    /// One display line per active record, in input order.
    pub active_lines: Vec<String>,
}

impl Classified {
    /// Number of records classified.
    #[must_use]
    pub fn total(&self) -> usize {
        self.silenced + self.ignored + self.malformed + self.active_lines.len()
    }
}

/// Classifies `records` fetched from environment `env`.
///
/// Malformed records are skipped with a warning instead of failing the
/// whole environment.
pub fn classify(env: &str, records: &[AlertRecord]) -> Classified {
    let mut out = Classified::default();

    for record in records {
        let class = record.classify();
        match class {
            Classification::Silenced | Classification::Inhibited => {
                debug!(env, labels = ?record.labels, reason = %class, "skipping silenced alert");
                out.silenced += 1;
            }
            Classification::Ignored => {
                debug!(env, labels = ?record.labels, "skipping heartbeat alert");
                out.ignored += 1;
            }
            Classification::Malformed => {
                warn!(env, labels = ?record.labels, "skipping alert without alertname");
                out.malformed += 1;
            }
            Classification::Active => {
                if let Some(line) = record.display_line() {
                    out.active_lines.push(line);
                }
            }
        }
    }

    out
}
