use tracing::warn;

use crate::domain::Tld;

/// Turns the raw newline-delimited TLD list into domain entries.
///
/// Each line is trimmed and lowercased; blank lines and `#` comments are
/// skipped. ASCII-compatible (`xn--`) labels are decoded to their Unicode
/// form. A label that fails decoding is kept as-is rather than dropped.
#[derive(Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Encounter order is preserved and duplicates are not removed here;
    /// deduplication happens at the store.
    pub fn parse(&self, body: &str) -> Vec<Tld> {
        let mut tlds = Vec::new();

        for raw in body.lines() {
            let line = raw.trim().to_lowercase();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (unicode, result) = idna::domain_to_unicode(&line);
            match result {
                Ok(()) => tlds.push(Tld::new(unicode)),
                Err(e) => {
                    warn!(line = %line, error = %e, "failed to puny decode label");
                    tlds.push(Tld::new(line));
                }
            }
        }

        tlds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let normalizer = Normalizer::new();
        let tlds = normalizer.parse("# Version 2025082500\n\nCOM\n   \nORG\n");

        assert_eq!(tlds, vec![Tld::from("com"), Tld::from("org")]);
    }

    #[test]
    fn test_lowercases_entries() {
        let normalizer = Normalizer::new();
        let tlds = normalizer.parse("  MUSEUM  ");

        assert_eq!(tlds, vec![Tld::from("museum")]);
    }

    #[test]
    fn test_decodes_punycode_to_unicode() {
        let normalizer = Normalizer::new();
        let tlds = normalizer.parse("# comment\n\nCOM\nXN--P1AI\n");

        assert_eq!(tlds, vec![Tld::from("com"), Tld::from("рф")]);
    }

    #[test]
    fn test_keeps_original_line_on_decode_failure() {
        let normalizer = Normalizer::new();
        let tlds = normalizer.parse("xn--\ncom\n");

        assert_eq!(tlds, vec![Tld::from("xn--"), Tld::from("com")]);
    }

    #[test]
    fn test_empty_body_yields_no_entries() {
        let normalizer = Normalizer::new();
        assert!(normalizer.parse("").is_empty());
    }

    #[test]
    fn test_preserves_duplicates_and_order() {
        let normalizer = Normalizer::new();
        let tlds = normalizer.parse("net\ncom\nnet\n");

        assert_eq!(
            tlds,
            vec![Tld::from("net"), Tld::from("com"), Tld::from("net")]
        );
    }
}
