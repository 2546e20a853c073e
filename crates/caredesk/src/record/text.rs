//! Bounded-length text values
//!
//! Every text field of a record has a fixed byte budget inherited from the
//! on-disk format. Values are clipped when the [`BoundedText`] is built, so two
//! inputs that differ only past the budget become equal once stored.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A single line of text holding at most `MAX` bytes.
///
/// Construction never fails. The input is cut at its first line break, then
/// shortened to the longest prefix that fits in `MAX` bytes and ends on a
/// UTF-8 character boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BoundedText<const MAX: usize>(String);

impl<const MAX: usize> BoundedText<MAX> {
    /// Byte budget of this text type
    pub const MAX_BYTES: usize = MAX;

    /// Build a bounded value, truncating silently if needed
    pub fn new(value: &str) -> Self {
        let line = value.split(['\r', '\n']).next().unwrap_or_default();
        Self(clip(line, MAX).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Longest prefix of `s` within `max` bytes that ends on a char boundary.
fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

impl<const MAX: usize> Deref for BoundedText<MAX> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> AsRef<str> for BoundedText<MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> fmt::Display for BoundedText<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MAX: usize> From<&str> for BoundedText<MAX> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<const MAX: usize> From<String> for BoundedText<MAX> {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl<const MAX: usize> From<BoundedText<MAX>> for String {
    fn from(value: BoundedText<MAX>) -> Self {
        value.0
    }
}

impl<const MAX: usize> PartialEq<str> for BoundedText<MAX> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<const MAX: usize> PartialEq<&str> for BoundedText<MAX> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_is_kept() {
        let text = BoundedText::<15>::new("P0028");
        assert_eq!(text, "P0028");
        assert_eq!(text.len(), 5);
    }

    #[test]
    fn test_value_at_budget_is_kept() {
        let text = BoundedText::<5>::new("abcde");
        assert_eq!(text, "abcde");
    }

    #[test]
    fn test_long_value_is_truncated_to_budget() {
        let text = BoundedText::<15>::new("AMB-0001-NORTH-WING");
        assert_eq!(text, "AMB-0001-NORTH-");
        assert_eq!(text.len(), BoundedText::<15>::MAX_BYTES);
    }

    #[test]
    fn test_values_differing_past_budget_compare_equal() {
        let a = BoundedText::<4>::new("abcdXYZ");
        let b = BoundedText::<4>::new("abcd123");
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // "é" is two bytes; a 4-byte budget cannot end halfway through it
        let text = BoundedText::<4>::new("abcé");
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_value_is_cut_at_line_break() {
        assert_eq!(BoundedText::<30>::new("Gauze\nrolls"), "Gauze");
        assert_eq!(BoundedText::<30>::new("Gauze\r\n"), "Gauze");
        assert!(BoundedText::<30>::new("\nrest").is_empty());
    }

    #[test]
    fn test_serde_truncates_on_deserialize() {
        let text: BoundedText<3> = serde_json::from_str("\"abcdef\"").unwrap();
        assert_eq!(text, "abc");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"abc\"");
    }
}
