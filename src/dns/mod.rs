//! DNS resolution, normalization, and lookup orchestration.
//!
//! This module provides:
//! - Input classification (IPv4 targets, supported record types)
//! - The [`Resolve`] seam and its `hickory-resolver` implementation
//! - Normalization of raw answers into uniform display rows
//! - The [`Lookup`] orchestrator that ties them together
//!
//! All resolution is async and respects the resolver's configured timeouts.

mod lookup;
mod normalize;
mod resolution;
mod types;
mod validate;

// Re-export public API
pub use lookup::{effective_type, parse_record_type, Lookup};
pub use normalize::normalize;
pub use resolution::{HickoryResolver, Resolve};
pub use types::{
    AnyRecord, AnyValue, DisplayRow, MxRecord, RawResult, RecordType, RowKind, RowValue,
};
pub use validate::{is_ip_address, is_valid_type};
