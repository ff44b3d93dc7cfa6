//! checkdns library: DNS lookups rendered as tables
//!
//! Resolves hostnames and IPv4 addresses for `A`, `AAAA`, `CNAME`, `MX`,
//! `TXT`, `NS`, `PTR` and `ANY` records, normalizes the answers into uniform
//! display rows, and hands each row set to a [`RowSink`]: a collector, a
//! callback, or one of the table renderers.
//!
//! IPv4 targets are always reverse-resolved. An `ANY` query the upstream
//! answers with no data is retried once as `A`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use checkdns::initialization::init_resolver;
//! use checkdns::{Collector, Config, Lookup};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver(&Config::default())?;
//! let lookup = Lookup::new(Arc::new(resolver));
//!
//! let mut rows = Collector::new();
//! lookup.lookup("example.com", Some("MX"), &mut rows).await?;
//! for row in rows.into_rows() {
//!     println!("{} {} {}", row.label, row.record_type, row.value_text());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod batch;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod render;
pub mod sink;
pub mod summary;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use dns::{
    effective_type, is_ip_address, is_valid_type, normalize, DisplayRow, HickoryResolver, Lookup,
    RawResult, RecordType, Resolve, RowKind, RowValue,
};
pub use error_handling::{InitializationError, LookupError, ResolveError};
pub use render::{LookupOptions, TablePrinter, TableStream};
pub use run::{run_lookups, RunReport};
pub use sink::{Collector, Discard, FnSink, RowSink};
pub use summary::BatchSummary;

// Internal run module (wires configuration, resolver and renderers together)
mod run {
    use std::io;
    use std::sync::Arc;

    use anyhow::{Context, Result};

    use crate::config::Config;
    use crate::dns::Lookup;
    use crate::initialization::init_resolver;
    use crate::render::{LookupOptions, TablePrinter, TableStream};
    use crate::sink::Discard;
    use crate::summary::BatchSummary;

    /// Results of a `run_lookups` call.
    #[derive(Debug, Clone, Default)]
    pub struct RunReport {
        /// Number of targets given directly and looked up
        pub direct_lookups: usize,
        /// Totals of the batch, if a batch source was given
        pub batch: Option<BatchSummary>,
    }

    /// Runs every lookup the configuration asks for and prints the results.
    ///
    /// Direct targets are looked up one after another and printed to stdout
    /// as one table each. A batch source is then streamed into a fixed-width
    /// table, or run silently when `config.quiet` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver cannot be initialized, the record type
    /// is not supported, the batch source cannot be read, or writing to stdout
    /// fails.
    pub async fn run_lookups(config: Config) -> Result<RunReport> {
        let resolver = init_resolver(&config).context("Failed to initialize DNS resolver")?;
        let lookup = Lookup::new(Arc::new(resolver));
        let options = LookupOptions {
            colorize: config.colorize,
        };
        let requested = Some(config.record_type.as_str());

        let mut report = RunReport::default();

        if !config.targets.is_empty() {
            let mut printer = TablePrinter::new(io::stdout(), options).with_border(config.border);
            for target in &config.targets {
                lookup.lookup(target, requested, &mut printer).await?;
                report.direct_lookups += 1;
            }
        }

        if let Some(source) = &config.file {
            let summary = if config.quiet {
                lookup
                    .lookup_from_file(source, requested, &mut Discard, config.max_concurrency)
                    .await?
            } else {
                let mut stream = TableStream::new(io::stdout(), options);
                let summary = lookup
                    .lookup_from_file(source, requested, &mut stream, config.max_concurrency)
                    .await?;
                stream.finish().context("Failed to write output")?;
                summary
            };
            report.batch = Some(summary);
        }

        Ok(report)
    }
}
