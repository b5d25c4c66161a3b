//! Alertmanager polling, classification and reporting for alertbar.
//!
//! `alertbar-alerts` fetches the current alerts of every configured
//! Alertmanager environment and condenses them into per-environment
//! reports suitable for a menu-bar summary.
//!
//! # Pipeline
//!
//! ```text
//! EnvironmentRegistry ─► AlertmanagerClient ─► classify ─► EnvironmentReport
//!                            (GET /api/v1/alerts)
//! ```
//!
//! - **Fetch**: one request per environment, all in flight concurrently
//! - **Classify**: silenced, inhibited, heartbeat, malformed, or active
//! - **Format**: one display line per active alert
//! - **Report**: counts plus the sorted, capped list of active lines
//!
//! # Example
//!
//! ```rust
//! use alertbar_alerts::{AlertRecord, EnvironmentReport};
//! use alertbar_config::Environment;
//!
//! let records = vec![
//!     AlertRecord::new("DiskFull").with_label("job", "node1"),
//!     AlertRecord::new("NodeDown").silenced_by("sil1"),
//! ];
//!
//! let report = EnvironmentReport::from_records(
//!     Environment::new("prod", "http://alertmanager:9093"),
//!     &records,
//! );
//! assert_eq!(report.active_lines, vec!["DiskFull job=node1 | ".to_string()]);
//! assert_eq!(report.silenced_count, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod client;
pub mod collector;
pub mod error;
pub mod report;
pub mod types;

// Re-export main types at crate root
pub use classify::{Classified, classify};
pub use client::{AlertmanagerClient, DEFAULT_REQUEST_TIMEOUT, USER_AGENT};
pub use collector::AlertCollector;
pub use error::{FetchError, Result};
pub use report::EnvironmentReport;
pub use types::{AlertRecord, AlertStatus, AlertsResponse, Classification, MAX_SHOW};
