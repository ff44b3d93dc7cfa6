//! Lookup orchestration.
//!
//! Decides which record type is actually queried, calls the resolver, retries
//! a rejected ANY query once as A, and normalizes the answer into rows.

use std::sync::Arc;

use log::debug;

use super::normalize::normalize;
use super::resolution::Resolve;
use super::types::{DisplayRow, RecordType};
use super::validate::is_ip_address;
use crate::config::DEFAULT_RECORD_TYPE;
use crate::error_handling::LookupError;
use crate::sink::RowSink;

/// Maximum number of times an ANY query rejected with no data is retried as A.
const ANY_FALLBACK_RETRIES: usize = 1;

/// Returns the record type queried for `target` when `requested` is asked for.
///
/// - IPv4 targets are always reverse-resolved (PTR).
/// - A PTR request for a hostname becomes a forward A lookup.
/// - Otherwise the requested type is used.
pub fn effective_type(target: &str, requested: RecordType) -> RecordType {
    if is_ip_address(target) {
        RecordType::PTR
    } else if requested == RecordType::PTR {
        RecordType::A
    } else {
        requested
    }
}

/// Parses a requested record type token, defaulting to `A`.
///
/// # Errors
///
/// Returns `LookupError::InvalidRecordType` for any token outside the
/// supported set.
pub fn parse_record_type(requested: Option<&str>) -> Result<RecordType, LookupError> {
    let token = requested.unwrap_or(DEFAULT_RECORD_TYPE);
    token.parse::<RecordType>().map_err(|_| {
        let err = LookupError::InvalidRecordType(token.to_string());
        debug!("{err}");
        err
    })
}

/// Resolves targets and delivers normalized rows.
///
/// Cloning is cheap; clones share the resolver.
#[derive(Clone)]
pub struct Lookup {
    resolver: Arc<dyn Resolve>,
}

impl Lookup {
    pub fn new(resolver: Arc<dyn Resolve>) -> Self {
        Self { resolver }
    }

    /// Looks up `target` and delivers its rows to `sink`.
    ///
    /// `requested` defaults to `A`. Resolution failures are delivered as a
    /// single error row, so this only fails before resolving (invalid type)
    /// or when the sink cannot write.
    ///
    /// # Errors
    ///
    /// - `LookupError::InvalidRecordType` if `requested` is not supported; the
    ///   sink receives nothing.
    /// - `LookupError::Output` if the sink fails.
    pub async fn lookup(
        &self,
        target: &str,
        requested: Option<&str>,
        sink: &mut dyn RowSink,
    ) -> Result<(), LookupError> {
        let requested = parse_record_type(requested)?;
        let rows = self.query(target, requested).await;
        sink.accept(rows)?;
        Ok(())
    }

    /// Resolves `target` and returns its rows.
    ///
    /// An ANY query answered with no data is retried once as A and the retry's
    /// rows are returned instead of the error. Any other failure yields one
    /// error row carrying the target, the queried type, and the error code.
    pub async fn query(&self, target: &str, requested: RecordType) -> Vec<DisplayRow> {
        let mut requested = requested;
        let mut retries = 0;
        loop {
            let effective = effective_type(target, requested);
            debug!("Resolving {target} as {effective} (requested {requested})");

            match self.resolver.resolve(target, effective).await {
                Ok(raw) => return normalize(target, effective, raw),
                Err(e)
                    if e.is_no_data()
                        && effective == RecordType::ANY
                        && retries < ANY_FALLBACK_RETRIES =>
                {
                    debug!("ANY query for {target} returned no data, retrying as A");
                    requested = RecordType::A;
                    retries += 1;
                }
                Err(e) => {
                    debug!("Resolving {target} as {effective} failed: {e}");
                    return vec![DisplayRow::error(target, effective, e.code())];
                }
            }
        }
    }
}
