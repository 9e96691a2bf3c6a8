//! Sentence segmentation.
//!
//! Splits raw notes into trimmed, whitespace-normalized sentences. A run of
//! `.`, `!` or `?` counts as a single boundary.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref TERMINATORS: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// One sentence of the input, in original reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position in the segmented sequence (zero-based, contiguous)
    pub index: usize,
    /// Trimmed text without its terminator
    pub text: String,
}

impl Sentence {
    /// Lowercased copy of the text, used for tokenizing and substring matches
    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Split text into sentences.
///
/// Never fails: blank input gives an empty sequence, and text without any
/// terminator comes back as one sentence.
pub fn segment(text: &str) -> Vec<Sentence> {
    let normalized = normalize_whitespace(text);

    TERMINATORS
        .split(&normalized)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| Sentence {
            index,
            text: fragment.to_string(),
        })
        .collect()
}

/// Re-assemble sentences the way the extractive summary does.
pub fn join_sentences<'a, I>(sentences: I) -> String
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let joined = sentences
        .into_iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    format!("{}.", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_each_terminator() {
        let sentences = segment("A. B! C?");
        assert_eq!(texts(&sentences), vec!["A", "B", "C"]);
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
        assert!(segment("...!?").is_empty());
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        let sentences = segment("  no terminator here  ");
        assert_eq!(texts(&sentences), vec!["no terminator here"]);
    }

    #[test]
    fn test_terminator_runs_are_one_boundary() {
        let sentences = segment("Wait... what?! Really.");
        assert_eq!(texts(&sentences), vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let sentences = segment("First\n\n line   here.\tSecond\r\nline.");
        assert_eq!(texts(&sentences), vec!["First line here", "Second line"]);
        assert_eq!(normalize_whitespace("  a \n b\t\tc "), "a b c");
    }

    #[test]
    fn test_resegmenting_joined_output_is_stable() {
        let original = segment("Cells divide!  Mitosis has phases? Prophase comes first.");
        let rejoined = join_sentences(&original);
        assert_eq!(rejoined, "Cells divide. Mitosis has phases. Prophase comes first.");
        assert_eq!(segment(&rejoined), original);
    }
}
