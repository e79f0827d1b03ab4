// ⚙️ CLI Configuration
// Command-line flags and logging setup for the interest-calculator binary.

use crate::session::{OutputFormat, SessionOptions};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "interest-calculator")]
#[command(version)]
#[command(about = "利息计算器：计算单利与复利", long_about = None)]
pub struct CliConfig {
    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(short = 'l', long, default_value = "warn", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// Print the result as JSON instead of the text block
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl CliConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

/// Logs go to stderr so they never mix with the prompts on stdout
pub fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_config_default() {
        let config = CliConfig::parse_from(["interest-calculator"]);
        assert_eq!(config.log_level, "warn");
        assert!(!config.json);
        assert_eq!(config.session_options().output, OutputFormat::Text);
    }

    #[test]
    fn test_cli_config_custom() {
        let config = CliConfig::parse_from(["interest-calculator", "--log-level", "debug", "--json"]);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.session_options().output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_unknown_level() {
        let result = CliConfig::try_parse_from(["interest-calculator", "-l", "loud"]);
        assert!(result.is_err());
    }
}
