//! DNS record types, raw resolver results, and display rows.

use std::fmt;

use strum_macros::{EnumIter, EnumString};

/// Record types that can be requested and displayed.
///
/// Parsing is case-sensitive: `"MX".parse::<RecordType>()` succeeds, `"mx"`
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    PTR,
    ANY,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::ANY => "ANY",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mail exchanger of an MX answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub priority: u16,
    pub exchange: String,
}

/// Payload of a single record inside an ANY answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyValue {
    /// A or AAAA address
    Address(String),
    /// MX record
    Exchange { priority: u16, exchange: String },
    /// Name-valued records (NS, CNAME, PTR)
    Value(String),
    /// TXT character-strings
    Entries(Vec<String>),
    /// Any record kind without a displayable payload
    Opaque,
}

/// A record inside an ANY answer, tagged with its type mnemonic as reported by
/// the resolver (which may be a type this crate does not support, e.g. `SOA`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyRecord {
    pub rtype: String,
    pub value: AnyValue,
}

/// Raw resolver output, one variant per response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResult {
    /// A, AAAA, CNAME and NS answers
    Addresses(Vec<String>),
    /// Hostnames from a reverse lookup
    Ptr(Vec<String>),
    Mx(Vec<MxRecord>),
    /// One list of character-strings per TXT record
    Txt(Vec<Vec<String>>),
    Any(Vec<AnyRecord>),
}

/// Value columns of a display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    Text(String),
    Mx { priority: u16, exchange: String },
}

/// Whether a row carries resolved data or a resolution error code.
///
/// Renderers use this as a style hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Record,
    Error,
}

/// A uniform, uncolored output row.
///
/// Rows after the first of a set have an empty label, which tells the renderer
/// they continue the previous target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    pub record_type: RecordType,
    pub value: RowValue,
    pub kind: RowKind,
}

impl DisplayRow {
    /// A row holding resolved data.
    pub fn record(label: impl Into<String>, record_type: RecordType, value: RowValue) -> Self {
        Self {
            label: label.into(),
            record_type,
            value,
            kind: RowKind::Record,
        }
    }

    /// A row reporting that resolving `label` as `record_type` failed with `code`.
    pub fn error(label: impl Into<String>, record_type: RecordType, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            record_type,
            value: RowValue::Text(code.into()),
            kind: RowKind::Error,
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.label.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.kind == RowKind::Error
    }

    /// Plain cells: label, type, then one value (or priority and exchange for MX).
    pub fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.label.clone(), self.record_type.to_string()];
        match &self.value {
            RowValue::Text(text) => fields.push(text.clone()),
            RowValue::Mx { priority, exchange } => {
                fields.push(priority.to_string());
                fields.push(exchange.clone());
            }
        }
        fields
    }

    /// The value columns folded into one string.
    pub fn value_text(&self) -> String {
        match &self.value {
            RowValue::Text(text) => text.clone(),
            RowValue::Mx { priority, exchange } => format!("{priority} {exchange}"),
        }
    }
}
