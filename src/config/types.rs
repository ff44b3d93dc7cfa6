//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_RECORD_TYPE, DNS_ATTEMPTS, DNS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Resolver settings are consumed by `init_resolver`; the remaining fields
/// decide how lookups are run and rendered.
///
/// # Examples
///
/// ```no_run
/// use checkdns::Config;
///
/// let config = Config {
///     record_type: "MX".to_string(),
///     colorize: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Targets given directly (hostnames or IPv4 addresses)
    pub targets: Vec<String>,

    /// Batch file to read targets from (`-` for stdin)
    pub file: Option<PathBuf>,

    /// Requested record type token, validated at lookup time
    pub record_type: String,

    /// Colorize table output
    pub colorize: bool,

    /// Draw borders around single-lookup tables
    pub border: bool,

    /// Run batch lookups without printing any rows
    pub quiet: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// Attempts per query
    pub attempts: usize,

    /// Maximum batch lookups in flight
    pub max_concurrency: usize,

    /// Explicit upstream nameservers; empty means the system configuration
    pub nameservers: Vec<IpAddr>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            file: None,
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            colorize: true,
            border: false,
            quiet: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DNS_TIMEOUT_SECS,
            attempts: DNS_ATTEMPTS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            nameservers: Vec::new(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Forward lookup
/// checkdns example.com
///
/// # Mail exchangers, without colors
/// checkdns example.com --type MX --no-color
///
/// # Reverse lookup (IPv4 targets always query PTR)
/// checkdns 8.8.8.8
///
/// # Batch file, targets separated by newlines or semicolons
/// checkdns --file domains.txt --type ANY
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "checkdns",
    about = "Resolves domains and IPv4 addresses and prints DNS records as tables."
)]
pub struct Opt {
    /// Hostnames or IPv4 addresses to look up
    #[arg(required_unless_present = "file")]
    pub targets: Vec<String>,

    /// Record type: A|AAAA|CNAME|MX|TXT|NS|PTR|ANY
    #[arg(short = 't', long = "type", default_value = DEFAULT_RECORD_TYPE)]
    pub record_type: String,

    /// File of targets separated by newlines or semicolons (`-` for stdin)
    #[arg(short, long, value_parser)]
    pub file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Draw table borders for single lookups
    #[arg(long)]
    pub border: bool,

    /// Run batch lookups without printing results
    #[arg(short, long, requires = "file")]
    pub quiet: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Attempts per query before giving up
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub attempts: usize,

    /// Maximum batch lookups in flight
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Upstream nameserver to query instead of the system configuration (repeatable)
    #[arg(long = "nameserver")]
    pub nameservers: Vec<IpAddr>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            targets: opt.targets,
            file: opt.file,
            record_type: opt.record_type,
            colorize: !opt.no_color,
            border: opt.border,
            quiet: opt.quiet,
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            attempts: opt.attempts,
            max_concurrency: opt.max_concurrency.max(1),
            nameservers: opt.nameservers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.record_type, "A");
        assert!(config.colorize);
        assert!(!config.border);
        assert!(!config.quiet);
        assert_eq!(config.timeout_seconds, DNS_TIMEOUT_SECS);
        assert_eq!(config.attempts, DNS_ATTEMPTS);
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert!(config.nameservers.is_empty());
    }

    #[test]
    fn test_opt_into_config() {
        let opt = Opt::try_parse_from([
            "checkdns",
            "example.com",
            "--type",
            "MX",
            "--no-color",
            "--max-concurrency",
            "0",
            "--nameserver",
            "1.1.1.1",
        ])
        .expect("Should parse options");
        let config = Config::from(opt);

        assert_eq!(config.targets, vec!["example.com".to_string()]);
        assert_eq!(config.record_type, "MX");
        assert!(!config.colorize);
        // Zero in-flight lookups would stall a batch
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.nameservers, vec!["1.1.1.1".parse::<IpAddr>().unwrap()]);
    }

    #[test]
    fn test_opt_requires_target_or_file() {
        assert!(Opt::try_parse_from(["checkdns"]).is_err());
        assert!(Opt::try_parse_from(["checkdns", "--file", "domains.txt"]).is_ok());
    }

    #[test]
    fn test_quiet_requires_file() {
        assert!(Opt::try_parse_from(["checkdns", "example.com", "--quiet"]).is_err());
        assert!(Opt::try_parse_from(["checkdns", "-f", "domains.txt", "--quiet"]).is_ok());
    }
}
