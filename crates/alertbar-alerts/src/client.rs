//! HTTP client for the Alertmanager v1 alerts API.
//!
//! # Example
//!
//! ```rust,no_run
//! use alertbar_alerts::AlertmanagerClient;
//! use alertbar_config::Environment;
//!
//! # async fn example() -> Result<(), alertbar_alerts::FetchError> {
//! let client = AlertmanagerClient::new()?;
//! let env = Environment::new("prod", "http://alertmanager:9093");
//! let alerts = client.fetch(&env).await?;
//! println!("{} alerts", alerts.len());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use alertbar_config::Environment;
use reqwest::Client;
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::types::{AlertRecord, AlertsResponse};

/// User agent sent with every request.
pub const USER_AGENT: &str = "bitbar-alertmanager https://github.com/kfdm/bitbar-alertmanager";

/// Path of the alerts endpoint, relative to an environment's base URL.
pub const ALERTS_PATH: &str = "/api/v1/alerts";

/// Default request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Alertmanager API client shared across environments.
#[derive(Debug, Clone)]
pub struct AlertmanagerClient {
    client: Client,
    request_timeout: Duration,
}

impl AlertmanagerClient {
    /// Creates a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a client with a custom per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(request_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            client,
            request_timeout,
        })
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Fetches all alerts currently known to `env`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, timeout, a non-success status,
    /// or a body that is not an alerts payload.
    pub async fn fetch(&self, env: &Environment) -> Result<Vec<AlertRecord>> {
        let url = alerts_url(env);
        debug!(env = env.name(), url = %url, "querying alertmanager");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: AlertsResponse = serde_json::from_str(&body)?;
        debug!(env = env.name(), count = parsed.data.len(), "received alerts");
        Ok(parsed.data)
    }
}

/// Builds the alerts endpoint URL for `env`.
#[must_use]
pub fn alerts_url(env: &Environment) -> String {
    format!("{}{ALERTS_PATH}", env.url().trim_end_matches('/'))
}
