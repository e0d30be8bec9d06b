//! Input format resolution.

use std::path::Path;

use crate::PipelineError;

/// Determines the format identifier for an input.
///
/// - A non-empty `explicit_override` wins, lowercased, whatever the source
///   is called. `Some("")` counts as no override.
/// - Otherwise the extension of `source_name` is used: the text after the
///   last `.` of the final path segment, lowercased. A name without an
///   extension gives `""`, which is not an error here; the registry reports
///   it as an unknown format when parsing.
/// - With neither, the input is an unnamed stream whose format cannot be
///   guessed, and resolution fails with
///   [`PipelineError::FormatRequiredForUnnamedInput`].
///
/// # Example
///
/// ```rust
/// use goat::resolve_format;
///
/// assert_eq!(resolve_format(None, Some("data/report.CSV")).unwrap(), "csv");
/// assert_eq!(resolve_format(Some("Json"), Some("report.csv")).unwrap(), "json");
/// assert_eq!(resolve_format(None, Some("report")).unwrap(), "");
/// assert!(resolve_format(None, None).is_err());
/// ```
pub fn resolve_format(
    explicit_override: Option<&str>,
    source_name: Option<&str>,
) -> Result<String, PipelineError> {
    if let Some(format) = explicit_override.filter(|f| !f.is_empty()) {
        return Ok(format.to_lowercase());
    }

    match source_name {
        Some(name) => Ok(extension_of(name).to_lowercase()),
        None => Err(PipelineError::FormatRequiredForUnnamedInput),
    }
}

fn extension_of(name: &str) -> &str {
    let segment = Path::new(name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    segment.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}
