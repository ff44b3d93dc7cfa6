// Shared test helpers: an in-memory resolver with canned answers.
//
// Included with `mod helpers;` by the integration tests that need it.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use checkdns::{RawResult, RecordType, Resolve, ResolveError};

/// Resolver returning canned answers and recording every call.
///
/// Unscripted queries fail with `ENOTFOUND`.
#[derive(Default)]
pub struct ScriptedResolver {
    answers: HashMap<(String, RecordType), Result<RawResult, ResolveError>>,
    calls: Mutex<Vec<(String, RecordType)>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(
        mut self,
        target: &str,
        record_type: RecordType,
        answer: Result<RawResult, ResolveError>,
    ) -> Self {
        self.answers.insert((target.to_string(), record_type), answer);
        self
    }

    /// Answers an A query with the given addresses.
    #[allow(dead_code)] // Used by other test files
    pub fn address(self, target: &str, addresses: &[&str]) -> Self {
        let raw = RawResult::Addresses(addresses.iter().map(|a| a.to_string()).collect());
        self.answer(target, RecordType::A, Ok(raw))
    }

    #[allow(dead_code)] // Used by other test files
    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Resolve for ScriptedResolver {
    async fn resolve(
        &self,
        target: &str,
        record_type: RecordType,
    ) -> Result<RawResult, ResolveError> {
        self.calls
            .lock()
            .unwrap()
            .push((target.to_string(), record_type));
        self.answers
            .get(&(target.to_string(), record_type))
            .cloned()
            .unwrap_or_else(|| Err(ResolveError::new(ResolveError::NOT_FOUND)))
    }
}
