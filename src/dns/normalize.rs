//! Row normalization.
//!
//! Turns a [`RawResult`] into the uniform, uncolored [`DisplayRow`]s consumed by
//! sinks. Order follows the resolver answer; only the first row of a set is
//! labeled with the target.

use super::types::{AnyRecord, AnyValue, DisplayRow, RawResult, RecordType, RowValue};

/// Maps a resolver answer for `target` to display rows.
///
/// `effective_type` is the type that was actually queried; it labels the
/// single row produced for address, name, and text answers.
pub fn normalize(target: &str, effective_type: RecordType, raw: RawResult) -> Vec<DisplayRow> {
    match raw {
        RawResult::Ptr(hostnames) => vec![DisplayRow::record(
            target,
            RecordType::PTR,
            RowValue::Text(hostnames.join(",")),
        )],
        RawResult::Mx(exchanges) => exchanges
            .into_iter()
            .enumerate()
            .map(|(i, mx)| {
                DisplayRow::record(
                    label_for(i, target),
                    RecordType::MX,
                    RowValue::Mx {
                        priority: mx.priority,
                        exchange: mx.exchange,
                    },
                )
            })
            .collect(),
        RawResult::Any(records) => records
            .into_iter()
            .filter_map(any_row)
            .enumerate()
            .map(|(i, (record_type, value))| {
                DisplayRow::record(label_for(i, target), record_type, RowValue::Text(value))
            })
            .collect(),
        RawResult::Addresses(values) => vec![DisplayRow::record(
            target,
            effective_type,
            RowValue::Text(values.join(",")),
        )],
        RawResult::Txt(records) => {
            let flattened: Vec<String> = records.iter().map(|entries| entries.join(",")).collect();
            vec![DisplayRow::record(
                target,
                effective_type,
                RowValue::Text(flattened.join(",")),
            )]
        }
    }
}

fn label_for(index: usize, target: &str) -> String {
    if index == 0 {
        target.to_string()
    } else {
        String::new()
    }
}

/// Type and display value of one ANY record, or `None` for unsupported types.
fn any_row(record: AnyRecord) -> Option<(RecordType, String)> {
    let record_type = record.rtype.parse::<RecordType>().ok()?;
    let value = match (record_type, record.value) {
        (RecordType::A | RecordType::AAAA, AnyValue::Address(address)) => address,
        (RecordType::MX, AnyValue::Exchange { exchange, .. }) => exchange,
        (RecordType::NS | RecordType::CNAME, AnyValue::Value(value)) => value,
        (RecordType::TXT, AnyValue::Entries(entries)) => entries.join(","),
        _ => "-".to_string(),
    };
    Some((record_type, value))
}
