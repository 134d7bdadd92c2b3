//! CSV output for the collected corpus.

use std::path::Path;

use crate::error::CollectError;

/// Writes review texts to `path` as a single-column CSV.
///
/// Emits a `review_text` header row followed by one row per review. The
/// CSV writer quotes texts containing commas, quotes, or newlines, so
/// multi-line reviews round-trip through the engine's reader intact.
///
/// Returns the number of rows written (excluding the header).
///
/// # Errors
///
/// Returns [`CollectError::Csv`] or [`CollectError::Io`] if the file
/// cannot be created or written.
pub fn write_corpus<P: AsRef<Path>>(path: P, texts: &[String]) -> Result<usize, CollectError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(["review_text"])?;
    for text in texts {
        writer.write_record([text.as_str()])?;
    }
    writer.flush()?;
    Ok(texts.len())
}
