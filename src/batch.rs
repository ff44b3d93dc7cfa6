//! Batch lookups.
//!
//! Reads a list of targets separated by newlines or semicolons and looks each
//! one up, a bounded number at a time. Row sets are delivered in source order.

use std::path::Path;

use futures::stream::{self, StreamExt};
use log::debug;
use tokio::io::AsyncReadExt;

use crate::config::STDIN_SOURCE;
use crate::dns::{parse_record_type, Lookup};
use crate::error_handling::LookupError;
use crate::sink::RowSink;
use crate::summary::BatchSummary;

/// Splits batch content into targets.
///
/// Segments are separated by `\n` or `;`, trimmed, and dropped when empty.
///
/// ```
/// use checkdns::batch::split_targets;
///
/// assert_eq!(
///     split_targets("a.example;b.example\r\n\nbad"),
///     vec!["a.example", "b.example", "bad"]
/// );
/// ```
pub fn split_targets(content: &str) -> Vec<String> {
    content
        .split(|c| c == '\n' || c == ';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the targets of a batch source (`-` reads standard input).
///
/// Invalid UTF-8 is replaced rather than rejected, so a damaged segment only
/// fails its own lookup.
///
/// # Errors
///
/// - `LookupError::SourceUnavailable` if the path does not exist or cannot be
///   accessed.
/// - `LookupError::SourceRead` if the source exists but reading it fails.
pub async fn read_targets(source: &Path) -> Result<Vec<String>, LookupError> {
    let read_error = |e: std::io::Error| LookupError::SourceRead {
        path: source.to_path_buf(),
        source: e,
    };

    let bytes = if source.as_os_str() == STDIN_SOURCE {
        debug!("Reading targets from stdin");
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .map_err(read_error)?;
        bytes
    } else {
        if let Err(e) = tokio::fs::metadata(source).await {
            let err = LookupError::SourceUnavailable(source.to_path_buf());
            debug!("{err}: {e}");
            return Err(err);
        }
        tokio::fs::read(source).await.map_err(read_error)?
    };

    Ok(split_targets(&String::from_utf8_lossy(&bytes)))
}

impl Lookup {
    /// Looks up every target listed in `source` and delivers each row set to
    /// `sink` in source order.
    ///
    /// At most `max_concurrency` lookups are in flight at once (at least one).
    /// Resolution failures become error rows and never stop the batch.
    ///
    /// # Errors
    ///
    /// - `LookupError::InvalidRecordType` before the source is touched.
    /// - `LookupError::SourceUnavailable` / `LookupError::SourceRead` if the
    ///   targets cannot be read; nothing is looked up.
    /// - `LookupError::Output` if the sink fails; remaining lookups are dropped.
    pub async fn lookup_from_file(
        &self,
        source: &Path,
        requested: Option<&str>,
        sink: &mut dyn RowSink,
        max_concurrency: usize,
    ) -> Result<BatchSummary, LookupError> {
        let requested = parse_record_type(requested)?;
        let targets = read_targets(source).await?;
        debug!(
            "Looking up {} targets from {} as {requested}",
            targets.len(),
            source.display()
        );

        let mut results = stream::iter(targets)
            .map(|target| async move { self.query(&target, requested).await })
            .buffered(max_concurrency.max(1));

        let mut summary = BatchSummary::new();
        while let Some(rows) = results.next().await {
            summary.record(&rows);
            sink.accept(rows)?;
        }

        summary.log_summary();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_targets_mixed_separators() {
        assert_eq!(
            split_targets("a.example;b.example\nbad"),
            vec!["a.example", "b.example", "bad"]
        );
    }

    #[test]
    fn test_split_targets_skips_blank_segments() {
        assert_eq!(
            split_targets("\n;;  a.example  ;\r\n\n"),
            vec!["a.example"]
        );
        assert!(split_targets("").is_empty());
        assert!(split_targets(" ;\n ").is_empty());
    }

    #[test]
    fn test_split_targets_keeps_inner_text() {
        // Only separators split; spaces inside a segment are kept.
        assert_eq!(split_targets("a b;c"), vec!["a b", "c"]);
    }

    #[tokio::test]
    async fn test_read_targets_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = read_targets(&missing).await.unwrap_err();
        assert!(matches!(err, LookupError::SourceUnavailable(ref p) if p == &missing));
    }

    #[tokio::test]
    async fn test_read_targets_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.txt");
        std::fs::write(&path, "a.example\r\nb.example;8.8.8.8\n").unwrap();
        let targets = read_targets(&path).await.unwrap();
        assert_eq!(targets, vec!["a.example", "b.example", "8.8.8.8"]);
    }

    #[tokio::test]
    async fn test_read_targets_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.txt");
        std::fs::write(&path, b"a.example\n\xffcaf\xe9.example;b.example").unwrap();
        let targets = read_targets(&path).await.unwrap();
        assert_eq!(
            targets,
            vec!["a.example", "\u{fffd}caf\u{fffd}.example", "b.example"]
        );
    }

    #[tokio::test]
    async fn test_read_targets_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_targets(dir.path()).await.unwrap_err();
        assert!(matches!(err, LookupError::SourceRead { .. }));
    }
}
