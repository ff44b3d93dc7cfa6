//! Input classification.
//!
//! Decides whether a target is an IPv4 address and whether a record type token
//! is supported. Both checks are pure.

use std::sync::LazyLock;

use regex::Regex;

use super::types::RecordType;

/// Dotted-decimal IPv4 address, each octet 0-255 without leading zeros.
const IPV4_PATTERN: &str = r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])$";

static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IPV4_PATTERN).expect("IPv4 pattern is a valid regex"));

/// Returns true if `address` is a dotted-decimal IPv4 address.
///
/// IPv6 literals are not recognized and are resolved as hostnames.
///
/// # Examples
///
/// ```
/// use checkdns::is_ip_address;
///
/// assert!(is_ip_address("192.168.1.1"));
/// assert!(!is_ip_address("192.168.1.256"));
/// assert!(!is_ip_address("example.com"));
/// ```
pub fn is_ip_address(address: &str) -> bool {
    IPV4_RE.is_match(address)
}

/// Returns true if `token` names a supported record type (case-sensitive).
pub fn is_valid_type(token: &str) -> bool {
    token.parse::<RecordType>().is_ok()
}
