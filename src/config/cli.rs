use std::path::PathBuf;

use clap::{Args, ValueHint, builder::BoolishValueParser};

/// Settings overrides accepted by every subcommand.
#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "CATALOG_ADMIN_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Override the REST API base URL.
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the request timeout.
    #[arg(long = "timeout-seconds", value_name = "SECONDS", global = true)]
    pub timeout_seconds: Option<u64>,

    /// Override where the session token is stored.
    #[arg(
        long = "token-file",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub token_file: Option<PathBuf>,

    /// Override the display language (uz|ru).
    #[arg(long = "lang", value_name = "LANG", global = true)]
    pub language: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}
