use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once; the pattern set is fixed so construction cannot fail at runtime.
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for element text and attribute values.
///
/// # Examples
///
/// ```
/// use launchpad_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_non_ascii_is_untouched() {
        let line = "• 60 seconds: topic, city, date → full conference page";
        assert_eq!(escape_xml(line), line);
        assert_eq!(escape_xml("Launchpad — AI Event Generation"), "Launchpad — AI Event Generation");
    }

    #[test]
    fn test_all_entities() {
        assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
    }

    proptest! {
        #[test]
        fn escaped_text_has_no_markup(s in ".*") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }

        #[test]
        fn plain_text_is_unchanged(s in "[a-zA-Z0-9 .,:;$%|•→—–-]*") {
            prop_assert_eq!(escape_xml(&s), s);
        }
    }
}
