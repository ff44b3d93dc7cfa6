//! Configuration constants.
//!
//! Timeouts, limits, and table layout values used as defaults throughout the
//! application.

/// DNS query timeout in seconds
/// Most queries complete in well under a second; 5s leaves room for slow
/// upstreams without hanging an interactive session.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Attempts per query before the resolver gives up
pub const DNS_ATTEMPTS: usize = 2;

/// Port used for nameservers given with `--nameserver`
pub const DNS_PORT: u16 = 53;

/// Maximum number of batch lookups in flight at once
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Record type used when none is requested
pub const DEFAULT_RECORD_TYPE: &str = "A";

// Streaming table layout (label, type, value)
pub const STREAM_LABEL_WIDTH: usize = 30;
pub const STREAM_TYPE_WIDTH: usize = 5;
pub const STREAM_VALUE_WIDTH: usize = 50;

/// Column widths of the fixed three-column stream used for batch output.
pub const STREAM_COLUMN_WIDTHS: [usize; 3] =
    [STREAM_LABEL_WIDTH, STREAM_TYPE_WIDTH, STREAM_VALUE_WIDTH];

/// Batch source name that reads targets from standard input
pub const STDIN_SOURCE: &str = "-";
