//! Error categorization.
//!
//! Maps errors from `hickory-resolver` onto the stable codes carried by
//! [`ResolveError`], so the rest of the crate never inspects resolver internals.

use hickory_resolver::error::{ResolveError as HickoryError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;

use super::types::ResolveError;

/// Categorizes a `hickory_resolver` error into a [`ResolveError`].
///
/// An empty answer is reported by hickory as `NoRecordsFound`; its response
/// code tells an empty NOERROR answer (no data) apart from NXDOMAIN and server
/// failures.
pub fn categorize_resolve_error(error: &HickoryError) -> ResolveError {
    let code = match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            code_for_response(*response_code)
        }
        ResolveErrorKind::Timeout => ResolveError::TIMEOUT,
        ResolveErrorKind::Io(_) | ResolveErrorKind::NoConnections => {
            ResolveError::CONNECTION_REFUSED
        }
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => ResolveError::TIMEOUT,
            ProtoErrorKind::Io(_) => ResolveError::CONNECTION_REFUSED,
            _ => ResolveError::BAD_RESPONSE,
        },
        _ => ResolveError::BAD_RESPONSE,
    };
    log::trace!("Categorized resolver error '{error}' as {code}");
    ResolveError::new(code)
}

/// Returns the error code for a negative response code.
pub(crate) fn code_for_response(response_code: ResponseCode) -> &'static str {
    match response_code {
        ResponseCode::NoError => ResolveError::NO_DATA,
        ResponseCode::NXDomain => ResolveError::NOT_FOUND,
        ResponseCode::ServFail => ResolveError::SERVER_FAILURE,
        ResponseCode::Refused => ResolveError::REFUSED,
        ResponseCode::FormErr => ResolveError::FORMAT_ERROR,
        ResponseCode::NotImp => ResolveError::NOT_IMPLEMENTED,
        _ => ResolveError::BAD_RESPONSE,
    }
}
