//! Text units - the counting unit for lengths and cursor positions
//!
//! Scores are defined over user-perceived characters. A string is split into
//! units once per call; every length and position the scorer uses is an index
//! into that unit sequence, never a byte offset.

use std::borrow::Cow;

use caseless::{default_case_fold_str, Caseless};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// What counts as one character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextUnit {
    /// Extended grapheme clusters ("e" + combining acute is one unit)
    #[default]
    Grapheme,
    /// Unicode scalar values (`char`)
    Scalar,
}

/// A string split into units, with a case-folded copy aligned one-to-one.
#[derive(Debug)]
pub(crate) struct Units<'a> {
    original: Vec<&'a str>,
    folded: Vec<Cow<'a, str>>,
}

impl<'a> Units<'a> {
    pub(crate) fn split(text: &'a str, unit: TextUnit) -> Self {
        let original: Vec<&'a str> = match unit {
            TextUnit::Grapheme => text.graphemes(true).collect(),
            TextUnit::Scalar => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
        };
        let folded = original.iter().map(|&u| fold(u)).collect();
        Self { original, folded }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.original.len()
    }

    #[inline]
    pub(crate) fn original(&self, idx: usize) -> &str {
        self.original[idx]
    }

    #[inline]
    pub(crate) fn folded(&self, idx: usize) -> &str {
        &self.folded[idx]
    }

    /// First folded unit equal to `needle` at or after `from`
    pub(crate) fn find_folded(&self, needle: &str, from: usize) -> Option<usize> {
        self.folded
            .get(from..)?
            .iter()
            .position(|u| u.as_ref() == needle)
            .map(|offset| from + offset)
    }
}

/// Case-fold a single unit without context.
///
/// Uses Unicode default case folding, so ς, σ and Σ fold together, as do
/// µ/μ and ſ/s. Folding per unit (rather than the whole string) keeps the
/// folded sequence the same length as the original, so an index found in one
/// is valid in the other.
fn fold(unit: &str) -> Cow<'_, str> {
    if unit.chars().default_case_fold().eq(unit.chars()) {
        Cow::Borrowed(unit)
    } else {
        Cow::Owned(default_case_fold_str(unit))
    }
}

/// Number of units in `text`
pub(crate) fn count(text: &str, unit: TextUnit) -> usize {
    match unit {
        TextUnit::Grapheme => text.graphemes(true).count(),
        TextUnit::Scalar => text.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grapheme_split_counts_combining_marks_once() {
        let units = Units::split("Cafe\u{301}", TextUnit::Grapheme);
        assert_eq!(units.len(), 4);
        assert_eq!(units.original(3), "e\u{301}");
    }

    #[test]
    fn test_scalar_split_counts_code_points() {
        let units = Units::split("Cafe\u{301}", TextUnit::Scalar);
        assert_eq!(units.len(), 5);
        assert_eq!(units.original(4), "\u{301}");
    }

    #[test]
    fn test_multibyte_is_one_unit() {
        let units = Units::split("Ærø", TextUnit::Grapheme);
        assert_eq!(units.len(), 3);
        assert_eq!(units.folded(0), "æ");
        assert_eq!(units.original(0), "Æ");
    }

    #[test]
    fn test_fold_keeps_alignment() {
        // İ folds to two scalars; still a single unit
        let units = Units::split("İstanbul", TextUnit::Scalar);
        assert_eq!(units.len(), 8);
        assert_eq!(units.folded(1), "s");
    }

    #[test]
    fn test_fold_sigma_forms() {
        let upper = Units::split("ΟΔΟΣ", TextUnit::Grapheme);
        let lower = Units::split("οδος", TextUnit::Grapheme);
        assert_eq!(upper.folded(3), "σ");
        assert_eq!(lower.folded(3), "σ");
        assert_eq!(lower.find_folded(upper.folded(3), 0), Some(3));
    }

    #[test]
    fn test_fold_compatibility_letters() {
        // micro sign and Greek mu, long s and s
        let units = Units::split("\u{b5}ſ", TextUnit::Scalar);
        assert_eq!(units.folded(0), "\u{3bc}");
        assert_eq!(units.folded(1), "s");
        assert_eq!(units.original(1), "ſ");
    }

    #[test]
    fn test_count_matches_split() {
        for text in ["", "Hello World", "Cafe\u{301}", "ΟΔΟΣ"] {
            for unit in [TextUnit::Grapheme, TextUnit::Scalar] {
                assert_eq!(count(text, unit), Units::split(text, unit).len());
            }
        }
    }

    #[test]
    fn test_find_folded_respects_start() {
        let units = Units::split("abcabc", TextUnit::Grapheme);
        assert_eq!(units.find_folded("a", 0), Some(0));
        assert_eq!(units.find_folded("a", 1), Some(3));
        assert_eq!(units.find_folded("a", 4), None);
        assert_eq!(units.find_folded("a", 10), None);
    }

    #[test]
    fn test_text_unit_serde_names() {
        let unit: TextUnit = serde_json::from_str("\"scalar\"").unwrap();
        assert_eq!(unit, TextUnit::Scalar);
        assert_eq!(serde_json::to_string(&TextUnit::Grapheme).unwrap(), "\"grapheme\"");
    }
}
