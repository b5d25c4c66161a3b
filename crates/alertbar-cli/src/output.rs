//! Output rendering for a collected run.
//!
//! Supports the menu-bar plugin markup (default) and JSON.
//!
//! Menu markup layout:
//!
//! ```text
//! :rotating_light: [2, 0]
//! ---
//! :warning: prod Active: 2 Silenced: 1 Ignored: 0| href=http://prod:9093
//! DiskFull job=node1 | href=http://prom/graph
//! NodeDown |
//! ---
//! :warning: staging Active: 0 Silenced: 0 Ignored: 0| href=http://staging:9093
//! ```

use std::io::Write;

use alertbar_alerts::{EnvironmentReport, MAX_SHOW};
use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Renders a [`Summary`] in the selected [`Format`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Creates a renderer for `format`.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Writes `summary` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W: Write>(self, writer: &mut W, summary: &Summary) -> Result<(), CliError> {
        match self.format {
            Format::Menu => summary.write_menu(writer),
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, summary)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }

    /// Renders `summary` into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string(self, summary: &Summary) -> Result<String, CliError> {
        let mut buf = Vec::new();
        self.write(&mut buf, summary)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

/// Trait for types that can be rendered as menu-bar plugin markup.
pub trait MenuDisplay {
    /// Write the value as menu markup.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_menu<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// All environment reports of one run, in registry order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// One report per configured environment.
    pub environments: Vec<EnvironmentReport>,
}

impl Summary {
    /// Wraps the reports of a run.
    #[must_use]
    pub const fn new(environments: Vec<EnvironmentReport>) -> Self {
        Self { environments }
    }

    /// Active alert counts, one per environment.
    #[must_use]
    pub fn active_counts(&self) -> Vec<usize> {
        self.environments.iter().map(|r| r.active_count).collect()
    }
}

impl MenuDisplay for Summary {
    fn write_menu<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        let counts: Vec<String> = self
            .active_counts()
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(writer, ":rotating_light: [{}]", counts.join(", "))?;

        for report in &self.environments {
            report.write_menu(writer)?;
        }
        Ok(())
    }
}

impl MenuDisplay for EnvironmentReport {
    fn write_menu<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "---")?;
        writeln!(
            writer,
            ":warning: {} Active: {} Silenced: {} Ignored: {}| href={}",
            self.environment.name(),
            self.active_count,
            self.silenced_count,
            self.ignored_count,
            self.environment.url()
        )?;
        if self.is_truncated() {
            writeln!(writer, ":bomb: Truncated error list to {MAX_SHOW}")?;
        }
        for line in &self.active_lines {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertbar_alerts::AlertRecord;
    use alertbar_config::Environment;

    fn report(name: &str, records: &[AlertRecord]) -> EnvironmentReport {
        EnvironmentReport::from_records(
            Environment::new(name, format!("http://{name}:9093")),
            records,
        )
    }

    #[test]
    fn menu_empty_summary() {
        let out = OutputFormat::default()
            .to_string(&Summary::default())
            .expect("render");
        assert_eq!(out, ":rotating_light: []\n");
    }

    #[test]
    fn menu_full_layout() {
        let summary = Summary::new(vec![
            report(
                "prod",
                &[
                    AlertRecord::new("NodeDown"),
                    AlertRecord::new("DiskFull")
                        .with_label("job", "node1")
                        .with_generator_url("http://prom/graph"),
                    AlertRecord::new("Muted").silenced_by("sil1"),
                ],
            ),
            EnvironmentReport::failed(
                Environment::new("staging", "http://staging:9093"),
                "connection refused",
            ),
        ]);

        let out = OutputFormat::new(Format::Menu)
            .to_string(&summary)
            .expect("render");
        let expected = concat!(
            ":rotating_light: [2, 0]\n",
            "---\n",
            ":warning: prod Active: 2 Silenced: 1 Ignored: 0| href=http://prod:9093\n",
            "DiskFull job=node1 | href=http://prom/graph\n",
            "NodeDown | \n",
            "---\n",
            ":warning: staging Active: 0 Silenced: 0 Ignored: 0| href=http://staging:9093\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn menu_truncation_notice() {
        let records: Vec<AlertRecord> = (0..25)
            .map(|i| AlertRecord::new(format!("Alert{i:02}")))
            .collect();
        let out = OutputFormat::default()
            .to_string(&Summary::new(vec![report("prod", &records)]))
            .expect("render");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], ":rotating_light: [25]");
        assert_eq!(lines[3], ":bomb: Truncated error list to 20");
        let alert_lines = &lines[4..];
        assert_eq!(alert_lines.len(), 20);
        assert!(alert_lines.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(alert_lines[0], "Alert00 | ");
    }

    #[test]
    fn menu_no_truncation_at_cap() {
        let records: Vec<AlertRecord> = (0..20)
            .map(|i| AlertRecord::new(format!("Alert{i:02}")))
            .collect();
        let out = OutputFormat::default()
            .to_string(&Summary::new(vec![report("prod", &records)]))
            .expect("render");
        assert!(!out.contains(":bomb:"));
    }

    #[test]
    fn json_output() {
        let summary = Summary::new(vec![report("prod", &[AlertRecord::new("DiskFull")])]);
        let out = OutputFormat::new(Format::Json)
            .to_string(&summary)
            .expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(parsed["environments"][0]["environment"]["name"], "prod");
        assert_eq!(parsed["environments"][0]["active_lines"][0], "DiskFull | ");
    }

    #[test]
    fn default_format_is_menu() {
        let summary = Summary::new(vec![report("prod", &[AlertRecord::new("DiskFull")])]);
        let out = OutputFormat::default().to_string(&summary).expect("render");
        assert!(out.starts_with(":rotating_light: [1]\n"));
    }
}
