//! # alertbar-cli
//!
//! Menu-bar summary of Prometheus Alertmanager alerts.
//!
//! Each invocation:
//! - Loads the environments from `~/.config/bitbar/alertmanager.ini`
//! - Queries every environment's `/api/v1/alerts` endpoint
//! - Prints the aggregate counts and the active alerts per environment
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   GET /api/v1/alerts   ┌────────────────┐
//! │ alertbar-cli │───────────────────────►│  Alertmanager  │ × N
//! └──────┬───────┘                        └────────────────┘
//!        │ stdout
//!        ▼
//!   menu-bar host
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod output;
pub mod status;

pub use cli::{Cli, Format, RunOptions};
pub use error::CliError;
pub use output::{OutputFormat, Summary};
pub use status::StatusCommand;
