//! Tests for command-line parsing.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use checkdns::config::{LogFormat, LogLevel};
use checkdns::{Config, Opt};
use clap::Parser;

fn parse(args: &[&str]) -> Config {
    Opt::try_parse_from(args)
        .expect("arguments should parse")
        .into()
}

#[test]
fn test_single_target_defaults() {
    let config = parse(&["checkdns", "example.com"]);
    assert_eq!(config.targets, vec!["example.com"]);
    assert_eq!(config.record_type, "A");
    assert!(config.file.is_none());
    assert!(config.colorize);
    assert!(!config.border);
    assert!(matches!(config.log_level, LogLevel::Warn));
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert!(config.nameservers.is_empty());
}

#[test]
fn test_multiple_targets_and_type() {
    let config = parse(&["checkdns", "-t", "MX", "a.example", "8.8.8.8"]);
    assert_eq!(config.targets, vec!["a.example", "8.8.8.8"]);
    assert_eq!(config.record_type, "MX");
}

#[test]
fn test_type_is_not_validated_by_parser() {
    // Unsupported types are rejected by the lookup with its own message.
    let config = parse(&["checkdns", "--type", "SOA", "example.com"]);
    assert_eq!(config.record_type, "SOA");
}

#[test]
fn test_batch_options() {
    let config = parse(&[
        "checkdns",
        "--file",
        "domains.txt",
        "--quiet",
        "--max-concurrency",
        "4",
        "--timeout-seconds",
        "2",
        "--attempts",
        "3",
    ]);
    assert!(config.targets.is_empty());
    assert_eq!(config.file, Some(PathBuf::from("domains.txt")));
    assert!(config.quiet);
    assert_eq!(config.max_concurrency, 4);
    assert_eq!(config.timeout_seconds, 2);
    assert_eq!(config.attempts, 3);
}

#[test]
fn test_stdin_source() {
    let config = parse(&["checkdns", "-f", "-"]);
    assert_eq!(config.file, Some(PathBuf::from("-")));
}

#[test]
fn test_zero_concurrency_is_clamped() {
    let config = parse(&["checkdns", "-f", "domains.txt", "--max-concurrency", "0"]);
    assert_eq!(config.max_concurrency, 1);
}

#[test]
fn test_presentation_and_logging_flags() {
    let config = parse(&[
        "checkdns",
        "--no-color",
        "--border",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "example.com",
    ]);
    assert!(!config.colorize);
    assert!(config.border);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_repeated_nameservers() {
    let config = parse(&[
        "checkdns",
        "--nameserver",
        "192.0.2.53",
        "--nameserver",
        "2001:db8::53",
        "example.com",
    ]);
    assert_eq!(config.nameservers.len(), 2);
    assert_eq!(
        config.nameservers[0],
        IpAddr::V4(Ipv4Addr::new(192, 0, 2, 53))
    );
    assert!(config.nameservers[1].is_ipv6());
}

#[test]
fn test_invalid_invocations() {
    assert!(Opt::try_parse_from(["checkdns"]).is_err());
    assert!(Opt::try_parse_from(["checkdns", "--quiet", "example.com"]).is_err());
    assert!(Opt::try_parse_from(["checkdns", "--nameserver", "not-an-ip", "a.example"]).is_err());
    assert!(Opt::try_parse_from(["checkdns", "--log-level", "loud", "a.example"]).is_err());
}
