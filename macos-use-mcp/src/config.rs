use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SERVER_ADDR: &str = "localhost:50051";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("server address must not be empty")]
    EmptyServerAddress,
    #[error("request timeout must be greater than zero seconds")]
    ZeroRequestTimeout,
}

/// Settings shared by every tool handler.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Address of the MacosUse gRPC server
    #[arg(long, env = "MACOS_USE_SERVER_ADDR", default_value = DEFAULT_SERVER_ADDR)]
    pub server_addr: String,

    /// Deadline for each remote call, in seconds
    #[arg(long, env = "MACOS_USE_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Timeout for establishing the gRPC connection, in seconds
    #[arg(long, env = "MACOS_USE_CONNECT_TIMEOUT", default_value_t = 10)]
    pub connect_timeout: u64,

    /// Allow the execute_shell_command tool to run commands
    #[arg(long, env = "MACOS_USE_SHELL_COMMANDS_ENABLED")]
    pub shell_commands_enabled: bool,

    /// Append a JSON line per tool invocation to this file
    #[arg(long, env = "MACOS_USE_AUDIT_LOG_FILE")]
    pub audit_log_file: Option<PathBuf>,

    /// Also write daily rolling log files to this directory
    #[arg(long, env = "MACOS_USE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            request_timeout: 30,
            connect_timeout: 10,
            shell_commands_enabled: false,
            audit_log_file: None,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_addr.trim().is_empty() {
            return Err(ConfigError::EmptyServerAddress);
        }
        if self.request_timeout == 0 {
            return Err(ConfigError::ZeroRequestTimeout);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["macos-use-mcp"]).unwrap();
        assert_eq!(cli.config.server_addr, "localhost:50051");
        assert_eq!(cli.config.request_timeout(), Duration::from_secs(30));
        assert_eq!(cli.config.connect_timeout(), Duration::from_secs(10));
        assert!(!cli.config.shell_commands_enabled);
        assert!(cli.config.audit_log_file.is_none());
        assert!(cli.config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "macos-use-mcp",
            "--server-addr",
            "10.0.0.5:6000",
            "--request-timeout",
            "5",
            "--shell-commands-enabled",
            "--audit-log-file",
            "/tmp/audit.jsonl",
        ])
        .unwrap();
        assert_eq!(cli.config.server_addr, "10.0.0.5:6000");
        assert_eq!(cli.config.request_timeout, 5);
        assert!(cli.config.shell_commands_enabled);
        assert_eq!(
            cli.config.audit_log_file,
            Some(PathBuf::from("/tmp/audit.jsonl"))
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            server_addr: "  ".into(),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyServerAddress));

        let config = Config {
            request_timeout: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRequestTimeout));
    }
}
