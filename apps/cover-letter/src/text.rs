//! Small string helpers shared by intake, layout and the file-name builder.

/// Title-cases `s`: the first letter of every run of letters is uppercased and
/// the remaining letters of the run are lowercased.
///
/// Non-letters (spaces, digits, apostrophes, hyphens) end a run, so
/// `"o'neil-smith"` becomes `"O'Neil-Smith"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Returns `true` when `s` has no visible content.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_simple_words() {
        assert_eq!(title_case("acme corp"), "Acme Corp");
        assert_eq!(title_case("ACME CORP"), "Acme Corp");
    }

    #[test]
    fn test_title_case_apostrophes_and_hyphens_start_new_runs() {
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
    }

    #[test]
    fn test_title_case_digits_break_runs() {
        assert_eq!(title_case("12 main st"), "12 Main St");
        assert_eq!(title_case("3rd floor"), "3Rd Floor");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank("   \t"));
        assert!(!is_blank(" x "));
    }
}
