//! Collection of reports across every configured environment.
//!
//! This module provides the [`AlertCollector`], the entry point of the
//! pipeline. It fetches every environment concurrently, isolates failures
//! per environment, and returns one report per environment in registry
//! order regardless of which fetch finished first.

use alertbar_config::{Environment, EnvironmentRegistry};
use futures::future::join_all;
use tracing::{error, info};

use crate::client::AlertmanagerClient;
use crate::report::EnvironmentReport;

/// Fetches and summarizes alerts for a registry of environments.
#[derive(Debug, Clone)]
pub struct AlertCollector {
    client: AlertmanagerClient,
}

impl AlertCollector {
    /// Creates a collector using `client` for every request.
    #[must_use]
    pub const fn new(client: AlertmanagerClient) -> Self {
        Self { client }
    }

    /// Builds one report per environment, in registry order.
    ///
    /// A failed fetch is logged and reported with zero counts; it never
    /// affects the other environments.
    pub async fn collect(&self, registry: &EnvironmentRegistry) -> Vec<EnvironmentReport> {
        let reports = join_all(registry.iter().map(|env| self.collect_one(env))).await;

        let failed = reports.iter().filter(|r| r.fetch_error.is_some()).count();
        info!(
            environments = reports.len(),
            failed,
            "collected alert reports"
        );
        reports
    }

    async fn collect_one(&self, env: &Environment) -> EnvironmentReport {
        match self.client.fetch(env).await {
            Ok(records) => EnvironmentReport::from_records(env.clone(), &records),
            Err(e) => {
                error!(env = env.name(), error = %e, "error querying server");
                EnvironmentReport::failed(env.clone(), e.to_string())
            }
        }
    }
}
