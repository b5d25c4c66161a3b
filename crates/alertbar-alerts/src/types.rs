//! Core types for the alert pipeline.
//!
//! This module provides the wire types returned by the Alertmanager v1 API
//! and the per-record classification:
//! - [`AlertRecord`]: One alert as returned by a backend
//! - [`AlertStatus`]: The silencing and inhibition markers of an alert
//! - [`Classification`]: The bucket an alert falls into for display

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of active alert lines shown per environment.
pub const MAX_SHOW: usize = 20;

/// Severity value of synthetic pipeline-liveness alerts.
pub const HEARTBEAT_SEVERITY: &str = "heartbeat";

/// Labels rendered as ` key=value` qualifiers after the alert name, in order.
pub const QUALIFIER_LABELS: [&str; 3] = ["job", "service", "project"];

/// The bucket an alert is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Matched by at least one silence.
    Silenced,
    /// Suppressed by another firing alert.
    Inhibited,
    /// A heartbeat alert, never shown.
    Ignored,
    /// Missing its `alertname` label.
    Malformed,
    /// Shown in the active list.
    Active,
}

impl Classification {
    /// Returns the classification as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Silenced => "silenced",
            Self::Inhibited => "inhibited",
            Self::Ignored => "ignored",
            Self::Malformed => "malformed",
            Self::Active => "active",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Silencing and inhibition markers attached to an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStatus {
    /// IDs of the silences matching this alert.
    #[serde(rename = "silencedBy", default, deserialize_with = "null_as_default")]
    pub silenced_by: Vec<String>,
    /// Fingerprints of the alerts inhibiting this one.
    #[serde(rename = "inhibitedBy", default, deserialize_with = "null_as_default")]
    pub inhibited_by: Vec<String>,
}

/// One alert as returned by `GET /api/v1/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Identifying labels; `alertname` is expected to be present.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: BTreeMap<String, String>,
    /// Silencing state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AlertStatus,
    /// Link back to the rule expression that produced the alert.
    #[serde(rename = "generatorURL", default, skip_serializing_if = "Option::is_none")]
    pub generator_url: Option<String>,
}

impl AlertRecord {
    /// Creates a record with the given alert name and no other labels.
    #[must_use]
    pub fn new(alertname: impl Into<String>) -> Self {
        Self::default().with_label("alertname", alertname)
    }

    /// Adds a label.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Marks the record as silenced by `silence_id`.
    #[must_use]
    pub fn silenced_by(mut self, silence_id: impl Into<String>) -> Self {
        self.status.silenced_by.push(silence_id.into());
        self
    }

    /// Marks the record as inhibited by `fingerprint`.
    #[must_use]
    pub fn inhibited_by(mut self, fingerprint: impl Into<String>) -> Self {
        self.status.inhibited_by.push(fingerprint.into());
        self
    }

    /// Sets the generator URL.
    #[must_use]
    pub fn with_generator_url(mut self, url: impl Into<String>) -> Self {
        self.generator_url = Some(url.into());
        self
    }

    /// Returns a label value.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Returns the `alertname` label.
    #[must_use]
    pub fn alertname(&self) -> Option<&str> {
        self.label("alertname")
    }

    /// Buckets the record.
    ///
    /// Checks run in a fixed order: silences, inhibitions, heartbeat
    /// severity, then the `alertname` label. A silenced record without an
    /// `alertname` therefore still counts as silenced.
    #[must_use]
    pub fn classify(&self) -> Classification {
        if !self.status.silenced_by.is_empty() {
            Classification::Silenced
        } else if !self.status.inhibited_by.is_empty() {
            Classification::Inhibited
        } else if self.label("severity") == Some(HEARTBEAT_SEVERITY) {
            Classification::Ignored
        } else if self.alertname().is_none() {
            Classification::Malformed
        } else {
            Classification::Active
        }
    }

    /// Renders the single display line for this alert.
    ///
    /// `<alertname>[ job=..][ service=..][ project=..] | [href=<generatorURL>]`
    ///
    /// Qualifiers whose label is absent or empty are omitted. Returns `None`
    /// when the record has no `alertname`.
    #[must_use]
    pub fn display_line(&self) -> Option<String> {
        let mut line = self.alertname()?.to_string();
        for key in QUALIFIER_LABELS {
            if let Some(value) = self.label(key).filter(|v| !v.is_empty()) {
                line.push(' ');
                line.push_str(key);
                line.push('=');
                line.push_str(value);
            }
        }
        line.push_str(" | ");
        if let Some(url) = &self.generator_url {
            line.push_str("href=");
            line.push_str(url);
        }
        Some(line)
    }
}

/// Body of a `GET /api/v1/alerts` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertsResponse {
    /// The alerts; absent or null means none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<AlertRecord>,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
