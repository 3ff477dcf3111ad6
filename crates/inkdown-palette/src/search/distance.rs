//! Edit-distance similarity for fuzzy matching.

/// Normalized Levenshtein similarity in `[0, 1]`.
///
/// `1 - distance / max(len)`, with distance and lengths measured over
/// Unicode code points. Two empty strings are identical (similarity 1).
pub fn similarity(a: &str, b: &str) -> f64 {
    let len = a.chars().count().max(b.chars().count());
    if len == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(a, b);
    1.0 - distance as f64 / len as f64
}
