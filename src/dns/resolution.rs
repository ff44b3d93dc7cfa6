//! Resolver adapter.
//!
//! [`Resolve`] is the seam between the lookup logic and the DNS library. The
//! production implementation, [`HickoryResolver`], wraps a `hickory-resolver`
//! instance and turns its answers into [`RawResult`]s.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::lookup::Lookup as DnsLookup;
use hickory_resolver::proto::rr::rdata::TXT;
use hickory_resolver::proto::rr::{Name, RData, RecordType as WireType};
use hickory_resolver::TokioAsyncResolver;

use super::types::{AnyRecord, AnyValue, MxRecord, RawResult, RecordType};
use crate::error_handling::{categorize_resolve_error, ResolveError};

/// Resolves a target for one record type.
///
/// Implementations return the answer shaped after `record_type` (see
/// [`RawResult`]) or a [`ResolveError`] whose code is opaque to callers.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, target: &str, record_type: RecordType)
        -> Result<RawResult, ResolveError>;
}

impl From<RecordType> for WireType {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => WireType::A,
            RecordType::AAAA => WireType::AAAA,
            RecordType::CNAME => WireType::CNAME,
            RecordType::MX => WireType::MX,
            RecordType::TXT => WireType::TXT,
            RecordType::NS => WireType::NS,
            RecordType::PTR => WireType::PTR,
            RecordType::ANY => WireType::ANY,
        }
    }
}

/// [`Resolve`] implementation backed by `hickory-resolver`.
pub struct HickoryResolver {
    inner: TokioAsyncResolver,
}

impl HickoryResolver {
    pub fn new(inner: TokioAsyncResolver) -> Self {
        Self { inner }
    }

    async fn query(&self, target: &str, record_type: RecordType) -> Result<DnsLookup, ResolveError> {
        self.inner
            .lookup(target, WireType::from(record_type))
            .await
            .map_err(|e| {
                log::debug!("{record_type} lookup for {target} failed: {e}");
                categorize_resolve_error(&e)
            })
    }

    async fn reverse(&self, target: &str) -> Result<RawResult, ResolveError> {
        let ip: IpAddr = target
            .parse()
            .map_err(|_| ResolveError::new(ResolveError::BAD_NAME))?;
        let response = self.inner.reverse_lookup(ip).await.map_err(|e| {
            log::debug!("Reverse lookup for {target} failed: {e}");
            categorize_resolve_error(&e)
        })?;
        let names: Vec<String> = response.iter().map(|ptr| name_to_string(&ptr.0)).collect();
        non_empty(names).map(RawResult::Ptr)
    }
}

#[async_trait]
impl Resolve for HickoryResolver {
    async fn resolve(
        &self,
        target: &str,
        record_type: RecordType,
    ) -> Result<RawResult, ResolveError> {
        if record_type == RecordType::PTR {
            return self.reverse(target).await;
        }

        let lookup = self.query(target, record_type).await?;
        extract(record_type, &lookup)
    }
}

/// Keeps the records of the queried type and shapes them into a [`RawResult`].
fn extract(record_type: RecordType, lookup: &DnsLookup) -> Result<RawResult, ResolveError> {
    match record_type {
        RecordType::A => non_empty(
            lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::A(a) => Some(a.to_string()),
                    _ => None,
                })
                .collect(),
        )
        .map(RawResult::Addresses),
        RecordType::AAAA => non_empty(
            lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::AAAA(aaaa) => Some(aaaa.to_string()),
                    _ => None,
                })
                .collect(),
        )
        .map(RawResult::Addresses),
        RecordType::CNAME => non_empty(
            lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::CNAME(cname) => Some(name_to_string(&cname.0)),
                    _ => None,
                })
                .collect(),
        )
        .map(RawResult::Addresses),
        RecordType::NS => non_empty(
            lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::NS(ns) => Some(name_to_string(&ns.0)),
                    _ => None,
                })
                .collect(),
        )
        .map(RawResult::Addresses),
        RecordType::PTR => non_empty(
            lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::PTR(ptr) => Some(name_to_string(&ptr.0)),
                    _ => None,
                })
                .collect(),
        )
        .map(RawResult::Ptr),
        RecordType::MX => non_empty(
            lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::MX(mx) => Some(MxRecord {
                        priority: mx.preference(),
                        exchange: name_to_string(mx.exchange()),
                    }),
                    _ => None,
                })
                .collect(),
        )
        .map(RawResult::Mx),
        RecordType::TXT => non_empty(
            lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::TXT(txt) => Some(txt_entries(txt)),
                    _ => None,
                })
                .collect(),
        )
        .map(RawResult::Txt),
        RecordType::ANY => non_empty(
            lookup
                .record_iter()
                .map(|record| AnyRecord {
                    rtype: record.record_type().to_string(),
                    value: record.data().map(any_value).unwrap_or(AnyValue::Opaque),
                })
                .collect(),
        )
        .map(RawResult::Any),
    }
}

fn any_value(rdata: &RData) -> AnyValue {
    match rdata {
        RData::A(a) => AnyValue::Address(a.to_string()),
        RData::AAAA(aaaa) => AnyValue::Address(aaaa.to_string()),
        RData::MX(mx) => AnyValue::Exchange {
            priority: mx.preference(),
            exchange: name_to_string(mx.exchange()),
        },
        RData::NS(ns) => AnyValue::Value(name_to_string(&ns.0)),
        RData::CNAME(cname) => AnyValue::Value(name_to_string(&cname.0)),
        RData::PTR(ptr) => AnyValue::Value(name_to_string(&ptr.0)),
        RData::TXT(txt) => AnyValue::Entries(txt_entries(txt)),
        _ => AnyValue::Opaque,
    }
}

fn txt_entries(txt: &TXT) -> Vec<String> {
    txt.iter()
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}

/// An answer without any record of the queried type is a no-data result.
fn non_empty<T>(values: Vec<T>) -> Result<Vec<T>, ResolveError> {
    if values.is_empty() {
        Err(ResolveError::no_data())
    } else {
        Ok(values)
    }
}

/// Renders a name without the trailing root label.
fn name_to_string(name: &Name) -> String {
    let name = name.to_utf8();
    name.strip_suffix('.').unwrap_or(&name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::proto::rr::rdata::MX;
    use std::str::FromStr;

    #[test]
    fn test_wire_type_mapping() {
        assert_eq!(WireType::from(RecordType::A), WireType::A);
        assert_eq!(WireType::from(RecordType::AAAA), WireType::AAAA);
        assert_eq!(WireType::from(RecordType::MX), WireType::MX);
        assert_eq!(WireType::from(RecordType::ANY), WireType::ANY);
    }

    #[test]
    fn test_name_to_string_strips_root() {
        let name = Name::from_str("mail.example.com.").unwrap();
        assert_eq!(name_to_string(&name), "mail.example.com");
        let relative = Name::from_str("example").unwrap();
        assert_eq!(name_to_string(&relative), "example");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(vec![1]), Ok(vec![1]));
        assert!(non_empty(Vec::<u8>::new()).unwrap_err().is_no_data());
    }

    #[test]
    fn test_any_value_mx_and_txt() {
        let exchange = Name::from_str("mx1.example.com.").unwrap();
        let mx = RData::MX(MX::new(10, exchange));
        assert_eq!(
            any_value(&mx),
            AnyValue::Exchange {
                priority: 10,
                exchange: "mx1.example.com".to_string()
            }
        );

        let txt = RData::TXT(TXT::new(vec!["v=spf1".to_string(), "-all".to_string()]));
        assert_eq!(
            any_value(&txt),
            AnyValue::Entries(vec!["v=spf1".to_string(), "-all".to_string()])
        );
    }

    #[test]
    fn test_any_value_address() {
        let a = RData::A("192.0.2.1".parse::<std::net::Ipv4Addr>().unwrap().into());
        assert_eq!(any_value(&a), AnyValue::Address("192.0.2.1".to_string()));
    }
}
