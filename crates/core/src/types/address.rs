//! Address string helpers.

use std::collections::HashSet;

/// Collapse repeated segments in a comma-separated address string.
///
/// Splits on `,`, trims surrounding whitespace from each segment and rejoins
/// the survivors with `", "`. A segment survives only if its lower-cased
/// trimmed form has not appeared earlier in the string; the first occurrence
/// keeps its original casing and position. Empty input yields an empty
/// string.
///
/// Segments are compared case-insensitively but not otherwise normalized, so
/// `"Av. Paulista"` and `"Avenida Paulista"` are distinct.
///
/// ## Examples
///
/// ```
/// use obraplan_core::dedupe_address;
///
/// assert_eq!(
///     dedupe_address("Rua das Flores, rua das flores, Centro"),
///     "Rua das Flores, Centro"
/// );
/// ```
#[must_use]
pub fn dedupe_address(input: &str) -> String {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for segment in input.split(',') {
        let segment = segment.trim();
        if seen.insert(segment.to_lowercase()) {
            kept.push(segment);
        }
    }

    kept.join(", ")
}
