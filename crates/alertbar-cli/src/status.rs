//! Alert status command implementation.
//!
//! Loads the environment registry, collects one report per environment
//! and renders the summary.

use std::io::Write;

use alertbar_alerts::{AlertCollector, AlertmanagerClient};
use alertbar_config::EnvironmentRegistry;
use tracing::debug;

use crate::cli::RunOptions;
use crate::error::CliError;
use crate::output::{OutputFormat, Summary};

/// Status command executor.
#[derive(Debug, Clone)]
pub struct StatusCommand {
    options: RunOptions,
}

impl StatusCommand {
    /// Create a new status command.
    #[must_use]
    pub const fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Load the registry from the configured (or default) path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_registry(&self) -> Result<EnvironmentRegistry, CliError> {
        let path = match &self.options.config_path {
            Some(path) => path.clone(),
            None => EnvironmentRegistry::default_path()?,
        };
        debug!(path = %path.display(), "loading environments");
        Ok(EnvironmentRegistry::load(&path)?)
    }

    /// Execute the status command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or output fails.
    /// Unreachable environments are not errors.
    pub async fn execute<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        let registry = self.load_registry()?;
        self.execute_with(&registry, writer).await
    }

    /// Execute against an already-loaded registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or output fails.
    pub async fn execute_with<W: Write>(
        &self,
        registry: &EnvironmentRegistry,
        writer: &mut W,
    ) -> Result<(), CliError> {
        let summary = self.collect(registry).await?;
        OutputFormat::new(self.options.format).write(writer, &summary)?;
        Ok(())
    }

    /// Collect the summary without rendering it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub async fn collect(&self, registry: &EnvironmentRegistry) -> Result<Summary, CliError> {
        let client = AlertmanagerClient::with_timeout(self.options.timeout)?;
        let reports = AlertCollector::new(client).collect(registry).await;
        Ok(Summary::new(reports))
    }
}
