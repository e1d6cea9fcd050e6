// crates/country-flag-core/src/text.rs

/// Convert a string into a folded key suitable for name comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Japón` -> `Japon`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use country_flag_core::text::fold_key;
///
/// assert_eq!(fold_key("Japón"), "japon");
/// assert_eq!(fold_key("Túnez"), "tunez");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// ```rust
/// use country_flag_core::text::equals_folded;
///
/// assert!(equals_folded("Bélgica", "BELGICA"));
/// assert!(!equals_folded("Peru", "Paraguay"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("Sudáfrica"), "sudafrica");
        assert_eq!(fold_key("RÍO"), "rio");
        assert_eq!(fold_key(""), "");
    }

    #[test]
    fn equals_folded_ignores_diacritics() {
        assert!(equals_folded("Perú", "peru"));
        assert!(equals_folded("Camerún", "CAMERUN"));
        assert!(!equals_folded("Niger", "Nigeria"));
    }
}
