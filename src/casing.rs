//! Case-pattern mirroring.
//!
//! Translating a word swaps its spelling but should not swallow how the
//! caller wrote it: "COLOUR" should become "COLOR", "Colour" should become
//! "Color". [`mirror_case`] re-cases a candidate word to follow the casing
//! style of a pattern word, even when the two differ in spelling and length.

/// The casing style of a pattern word.
///
/// Classification is checked in declaration order, and the order is
/// observable: a single-character pattern like "A" satisfies both the
/// titlecase and all-uppercase shapes, and classifies as `Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// First character uppercase, remainder entirely lowercase.
    Title,
    /// Every character equal to its own uppercase form.
    Upper,
    /// Every character equal to its own lowercase form.
    Lower,
    /// None of the above; case is transferred character by character.
    Mixed,
}

impl CasePattern {
    /// Classify the casing style of `pattern`.
    pub fn of(pattern: &str) -> CasePattern {
        let mut chars = pattern.chars();
        if let Some(first) = chars.next()
            && first.is_uppercase()
            && is_lowercase_str(chars.as_str())
        {
            return CasePattern::Title;
        }
        if is_uppercase_str(pattern) {
            return CasePattern::Upper;
        }
        if is_lowercase_str(pattern) {
            return CasePattern::Lower;
        }
        CasePattern::Mixed
    }
}

/// Re-case `candidate` to follow the casing style of `pattern`.
///
/// Returns `candidate` unchanged if either input is empty. For the three
/// uniform styles the whole candidate is recased; for mixed patterns case
/// is transferred per character position where the two words spell the
/// same letter, and any surplus of `candidate` beyond `pattern`'s length
/// is appended verbatim.
///
/// # Examples
///
/// ```
/// use orthovar::casing::mirror_case;
///
/// assert_eq!(mirror_case("color", "COLOUR"), "COLOR");
/// assert_eq!(mirror_case("color", "Colour"), "Color");
/// assert_eq!(mirror_case("color", "coLour"), "coLor");
/// ```
pub fn mirror_case(candidate: &str, pattern: &str) -> String {
    if candidate.is_empty() || pattern.is_empty() {
        return candidate.to_string();
    }

    match CasePattern::of(pattern) {
        CasePattern::Title => {
            let mut out = String::with_capacity(candidate.len());
            let mut chars = candidate.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                for c in chars {
                    out.extend(c.to_lowercase());
                }
            }
            out
        }
        CasePattern::Upper => candidate.to_uppercase(),
        CasePattern::Lower => candidate.to_lowercase(),
        CasePattern::Mixed => {
            let mut out = String::with_capacity(candidate.len());
            let mut cand = candidate.chars();
            let mut pat = pattern.chars();
            while let Some(c) = cand.next() {
                match pat.next() {
                    Some(p) if same_letter(c, p) => {
                        if p.is_uppercase() {
                            out.extend(c.to_uppercase());
                        } else {
                            out.extend(c.to_lowercase());
                        }
                    }
                    Some(_) => out.push(c),
                    None => {
                        // Surplus suffix keeps its own casing.
                        out.push(c);
                        out.push_str(cand.as_str());
                        break;
                    }
                }
            }
            out
        }
    }
}

/// Case-insensitive comparison of two characters.
fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

fn is_lowercase_str(s: &str) -> bool {
    s.chars().all(|c| c.to_lowercase().eq(std::iter::once(c)))
}

fn is_uppercase_str(s: &str) -> bool {
    s.chars().all(|c| c.to_uppercase().eq(std::iter::once(c)))
}
