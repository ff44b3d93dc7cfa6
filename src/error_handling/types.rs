//! Error type definitions.
//!
//! This module defines the initialization, lookup, and resolution errors used
//! throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors that abort a lookup or a batch before any row is produced.
///
/// Resolution failures are not part of this enum: they are turned into error
/// rows so a batch can continue with the next target.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The requested record type is not one of the supported tokens.
    #[error("Error: Type not valid. ({0})")]
    InvalidRecordType(String),

    /// The batch source does not exist or cannot be accessed.
    #[error("Error: File does not exist. ({})", .0.display())]
    SourceUnavailable(PathBuf),

    /// The batch source exists but reading it failed.
    #[error("Error: Failed to read {}: {source}", .path.display())]
    SourceRead {
        /// Path of the source
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing rows to the output failed.
    #[error("Error: Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// A failed resolution, identified by an opaque error code.
///
/// Codes follow the conventional resolver vocabulary (`ENODATA`, `ENOTFOUND`,
/// `ETIMEOUT`, ...). Only the no-data case is meaningful to the lookup logic;
/// every other code is displayed as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}")]
pub struct ResolveError {
    code: String,
}

impl ResolveError {
    /// The name exists but has no record of the queried type.
    pub const NO_DATA: &'static str = "ENODATA";
    /// The name does not exist (NXDOMAIN).
    pub const NOT_FOUND: &'static str = "ENOTFOUND";
    /// The upstream server failed to answer (SERVFAIL).
    pub const SERVER_FAILURE: &'static str = "ESERVFAIL";
    /// The upstream server refused the query.
    pub const REFUSED: &'static str = "EREFUSED";
    /// The upstream server could not interpret the query.
    pub const FORMAT_ERROR: &'static str = "EFORMERR";
    /// The upstream server does not implement the query kind.
    pub const NOT_IMPLEMENTED: &'static str = "ENOTIMP";
    /// No answer arrived within the configured timeout.
    pub const TIMEOUT: &'static str = "ETIMEOUT";
    /// No upstream server could be reached.
    pub const CONNECTION_REFUSED: &'static str = "ECONNREFUSED";
    /// The target could not be parsed as a name or address.
    pub const BAD_NAME: &'static str = "EBADNAME";
    /// Anything the categorization does not recognize.
    pub const BAD_RESPONSE: &'static str = "EBADRESP";

    /// Creates an error carrying the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Shorthand for the no-data error.
    pub fn no_data() -> Self {
        Self::new(Self::NO_DATA)
    }

    /// The error code as reported by the resolver.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// True when the name exists but holds no record of the queried type.
    pub fn is_no_data(&self) -> bool {
        self.code == Self::NO_DATA
    }
}
