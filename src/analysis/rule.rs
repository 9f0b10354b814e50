//! The ordered rule table shared by segmentation and classification.
//!
//! Each [`PatternRule`] pairs a [`TokenCategory`] with the regex source that
//! recognizes it. The table order is the precedence order: the segmentation
//! alternation tries branches in this order, and classification returns the
//! first rule whose pattern matches at the start of a token.

use crate::analysis::token::TokenCategory;

/// A named category paired with the pattern recognizing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternRule {
    /// Category assigned to tokens this rule recognizes.
    pub category: TokenCategory,
    /// Capture group name used in the segmentation alternation.
    pub group: &'static str,
    /// Regex source, without anchors or groups.
    pub pattern: &'static str,
}

/// Group name of the whitespace branch. Its captures are discarded.
pub const WHITESPACE_GROUP: &str = "whitespace";

/// Whitespace branch of the segmentation alternation.
pub const WHITESPACE_PATTERN: &str = r"\s+";

/// Group name of the optional catch-all branch.
pub const UNMATCHED_GROUP: &str = "other";

/// Catch-all branch: one character that no rule covers.
pub const UNMATCHED_PATTERN: &str = r"[^\s]";

/// Gujarati Unicode block, U+0A80..=U+0AFF (letters, matras and signs).
pub const GUJARATI_BLOCK: std::ops::RangeInclusive<char> = '\u{0A80}'..='\u{0AFF}';

/// Category rules in precedence order.
pub const RULES: [PatternRule; 8] = [
    PatternRule {
        category: TokenCategory::Email,
        group: "email",
        pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    },
    PatternRule {
        category: TokenCategory::Url,
        group: "url",
        pattern: r"https?://\S+|www\.\S+|\b[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\S*",
    },
    PatternRule {
        category: TokenCategory::DecimalNumber,
        group: "decimal_number",
        pattern: r"\d+\.\d+",
    },
    PatternRule {
        category: TokenCategory::Date,
        group: "date",
        pattern: r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}[/-]\d{1,2}[/-]\d{1,2}",
    },
    PatternRule {
        category: TokenCategory::Integer,
        group: "integer",
        pattern: r"\d+",
    },
    PatternRule {
        category: TokenCategory::Punctuation,
        group: "punctuation",
        pattern: r#"[\x{0964}\x{0965}.,!?;:"'()\[\]{}\-\x{2013}\x{2014}_/\\@#$%^&*+=<>|`~]"#,
    },
    PatternRule {
        category: TokenCategory::GujaratiWord,
        group: "gujarati_word",
        pattern: r"[\x{0A80}-\x{0AFF}]+",
    },
    PatternRule {
        category: TokenCategory::EnglishWord,
        group: "english_word",
        pattern: r"[A-Za-z]+",
    },
];

/// Build the unified segmentation pattern.
///
/// Every rule becomes a named group, followed by the whitespace branch and,
/// when `keep_unmatched` is set, the single-character catch-all.
pub fn segmentation_pattern(keep_unmatched: bool) -> String {
    let mut branches: Vec<String> = RULES
        .iter()
        .map(|rule| format!("(?P<{}>{})", rule.group, rule.pattern))
        .collect();
    branches.push(format!("(?P<{WHITESPACE_GROUP}>{WHITESPACE_PATTERN})"));
    if keep_unmatched {
        branches.push(format!("(?P<{UNMATCHED_GROUP}>{UNMATCHED_PATTERN})"));
    }
    branches.join("|")
}

/// Build the anchored prefix pattern used to classify with a single rule.
pub fn prefix_pattern(rule: &PatternRule) -> String {
    format!("^(?:{})", rule.pattern)
}

/// Whether `c` lies in the Gujarati block.
pub fn is_gujarati(c: char) -> bool {
    GUJARATI_BLOCK.contains(&c)
}
