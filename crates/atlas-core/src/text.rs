// crates/atlas-core/src/text.rs

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// All name matching in the crate (exact lookup, substring search) goes
/// through this, so `"côte d"` matches "Côte d'Ivoire" and `"turkiye"`
/// matches "Türkiye".
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// Case-insensitive and accent-insensitive: both sides are transliterated
/// to ASCII and lowercased before comparison.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
