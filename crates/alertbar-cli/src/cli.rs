//! Command-line argument parsing with clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Environment variable set by the menu-bar host when it runs the plugin.
pub const HOSTED_ENV_VAR: &str = "BitBar";

/// alertbar - summarize Alertmanager alerts for a menu-bar status item.
///
/// Every option is optional; with no arguments the tool reads
/// `~/.config/bitbar/alertmanager.ini` and prints the menu markup.
#[derive(Parser, Debug, Clone)]
#[command(name = "alertbar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the environments file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run in hosted mode (quiet logging). Implied when `BitBar` is set.
    #[arg(long)]
    pub hosted: bool,

    /// Per-environment request timeout in seconds.
    #[arg(short, long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Menu)]
    pub format: Format,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum Format {
    /// Menu-bar plugin markup.
    #[default]
    Menu,
    /// JSON output for scripting.
    Json,
}

impl Cli {
    /// Resolves the parsed arguments into run options.
    ///
    /// `hosted_env` reports whether [`HOSTED_ENV_VAR`] is present; it is
    /// passed in so the environment is only inspected at startup.
    #[must_use]
    pub fn into_options(self, hosted_env: bool) -> RunOptions {
        RunOptions {
            config_path: self.config,
            hosted: self.hosted || hosted_env,
            timeout: Duration::from_secs(self.timeout),
            format: self.format,
        }
    }
}

/// Startup configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Environments file; `None` means the default location.
    pub config_path: Option<PathBuf>,
    /// Quiet logging for the menu-bar host.
    pub hosted: bool,
    /// Per-environment request timeout.
    pub timeout: Duration,
    /// Output format.
    pub format: Format,
}

impl RunOptions {
    /// Log filter directive for this mode.
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        if self.hosted { "warn" } else { "debug" }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            hosted: false,
            timeout: alertbar_alerts::DEFAULT_REQUEST_TIMEOUT,
            format: Format::Menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_help_does_not_panic() {
        Cli::command().debug_assert();
    }

    // No arguments behaves like the plain plugin
    #[test]
    fn parse_no_arguments() {
        let cli = Cli::parse_from(["alertbar"]);
        assert_eq!(cli.config, None);
        assert!(!cli.hosted);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.format, Format::Menu);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["alertbar", "-c", "/tmp/envs.ini"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/envs.ini")));
    }

    #[test]
    fn parse_json_format_and_timeout() {
        let cli = Cli::parse_from(["alertbar", "--format", "json", "--timeout", "3"]);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.timeout, 3);
    }

    #[test]
    fn format_default_is_menu() {
        assert_eq!(Format::default(), Format::Menu);
    }

    #[test]
    fn options_hosted_from_environment() {
        let options = Cli::parse_from(["alertbar"]).into_options(true);
        assert!(options.hosted);
        assert_eq!(options.log_directive(), "warn");
    }

    #[test]
    fn options_hosted_from_flag() {
        let options = Cli::parse_from(["alertbar", "--hosted"]).into_options(false);
        assert!(options.hosted);
    }

    #[test]
    fn options_verbose_by_default() {
        let options = Cli::parse_from(["alertbar"]).into_options(false);
        assert!(!options.hosted);
        assert_eq!(options.log_directive(), "debug");
        assert_eq!(options.timeout, Duration::from_secs(10));
    }

    #[test]
    fn options_default_matches_no_arguments() {
        assert_eq!(Cli::parse_from(["alertbar"]).into_options(false), RunOptions::default());
    }
}
