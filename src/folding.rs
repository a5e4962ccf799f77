//! Locale-parameterized lowercasing.
//!
//! Removal accepts a word in any casing and falls back to a lowercased
//! lookup, and that lowercasing is locale-sensitive: under Turkic casing
//! rules "MOULDY" folds to "mouldy" just like the invariant rules, but
//! "MILDEW" folds to "mıldew" (dotless ı) and will not match an
//! ASCII-keyed entry. That miss is part of the contract; the dictionary
//! never retries with an invariant fold.

/// Identifies the casing rules used to lowercase a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Rust's default Unicode lowercasing (`str::to_lowercase`).
    #[default]
    Invariant,
    /// Turkic dotted/dotless-i rules: 'I' folds to 'ı' and 'İ' to 'i'.
    Turkic,
}

impl Locale {
    /// Lowercase `word` under this locale's casing rules.
    pub fn lowercase(&self, word: &str) -> String {
        match self {
            Locale::Invariant => word.to_lowercase(),
            Locale::Turkic => {
                let mut out = String::with_capacity(word.len());
                for c in word.chars() {
                    match c {
                        'I' => out.push('\u{0131}'),
                        '\u{0130}' => out.push('i'),
                        _ => out.extend(c.to_lowercase()),
                    }
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_fold() {
        assert_eq!(Locale::Invariant.lowercase("MOULDY"), "mouldy");
        assert_eq!(Locale::Invariant.lowercase("Tyre"), "tyre");
    }

    #[test]
    fn test_turkic_fold_diverges_on_i() {
        assert_eq!(Locale::Turkic.lowercase("MOULDY"), "mouldy");
        assert_eq!(Locale::Turkic.lowercase("TIRE"), "t\u{0131}re");
        assert_eq!(Locale::Turkic.lowercase("\u{0130}stanbul"), "istanbul");
    }
}
