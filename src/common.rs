//! Shared constants and Turkish-aware casing helpers.
//!
//! Used across the lexicon parser (state names, root casing) and the
//! generator (analysis label casing before surface-form extraction).

/// Distinguished morphotactics FST state from which every lexicon rule
/// originates.
pub const START_STATE: &str = "START";

/// Distinguished morphotactics FST state that terminal rules transition to.
pub const ACCEPT_STATE: &str = "ACCEPT";

/// The zero-length symbol; index 0 in the symbol table.
pub const EPSILON: &str = "<eps>";

/// Properly lowercase-transforms a Turkish string ("İ" -> "i", "I" -> "ı").
pub fn lower(s: &str) -> String {
    s.replace('İ', "i").replace('I', "ı").to_lowercase()
}

/// Properly uppercase-transforms a Turkish string ("i" -> "İ").
pub fn upper(s: &str) -> String {
    s.replace('i', "İ").to_uppercase()
}

/// Properly capitalizes a Turkish string (string-initial "i" -> "İ").
///
/// Mirrors the source's `string.replace("I", "ı").capitalize()`: after the
/// leading-"i"/"I" substitutions, the rest of the string is lowercased by
/// ordinary (non-Turkish-aware) casing and only the first character is
/// uppercased, matching Python's `str.capitalize()`.
pub fn capitalize(s: &str) -> String {
    let replaced = if let Some(rest) = s.strip_prefix('i') {
        format!("İ{rest}")
    } else {
        s.to_string()
    };
    let replaced = replaced.replace('I', "ı");

    let mut chars = replaced.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => replaced,
    }
}
