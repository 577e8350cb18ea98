//! Report tokenizer

/// Split a report into tokens
///
/// Leading and trailing whitespace is ignored, and runs of
/// whitespace (including newlines) separate tokens. Tokens are
/// borrowed from the `report` verbatim. Empty or all-whitespace
/// input yields no tokens.
///
/// ```
/// use metartext::tokenize;
///
/// assert_eq!(vec!["LFPG", "071450Z", "9999"], tokenize("  LFPG 071450Z\n\t9999 "));
/// assert!(tokenize(" \t ").is_empty());
/// ```
pub fn tokenize(report: &str) -> Vec<&str> {
    report.split_whitespace().collect()
}
