//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, lookups, and resolution
//! - Categorization of resolver library errors into stable error codes
//!
//! Resolution errors never abort a batch: they become error rows. Only an
//! invalid record type, an unavailable source, or a failing output stream stop
//! a call early.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_resolve_error;
pub use types::{InitializationError, LookupError, ResolveError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_error_code() {
        let err = ResolveError::new(ResolveError::TIMEOUT);
        assert_eq!(err.code(), "ETIMEOUT");
        assert_eq!(err.to_string(), "ETIMEOUT");
        assert!(!err.is_no_data());
    }

    #[test]
    fn test_resolve_error_no_data() {
        assert!(ResolveError::no_data().is_no_data());
        assert!(ResolveError::new("ENODATA").is_no_data());
        // Codes are compared exactly
        assert!(!ResolveError::new("enodata").is_no_data());
    }

    #[test]
    fn test_lookup_error_messages() {
        let err = LookupError::InvalidRecordType("SOA".to_string());
        assert_eq!(err.to_string(), "Error: Type not valid. (SOA)");

        let err = LookupError::SourceUnavailable(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "Error: File does not exist. (missing.txt)");
    }

    #[test]
    fn test_lookup_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LookupError::from(io);
        assert!(matches!(err, LookupError::Output(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
