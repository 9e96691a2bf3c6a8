//! Word frequency counting and stopword filtering.

use crate::segment::Sentence;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static! {
    // letters, decimal digits and underscore; combining marks end a token
    static ref WORD: Regex = Regex::new(r"[\p{Alphabetic}\p{Nd}_]+").unwrap();
    static ref ENGLISH: HashSet<&'static str> = ENGLISH_STOPWORDS.iter().copied().collect();
}

/// Closed list of English function words excluded from key terms.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "this", "that", "these", "those", "i", "you", "he",
    "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its",
    "our", "their",
];

/// Tokens at or below this many characters are dropped by a populated filter.
const MIN_TERM_CHARS: usize = 3;

/// Lowercase word tokens of `text`, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Decides which tokens are counted.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Accept every token
    pub fn none() -> Self {
        Self::default()
    }

    /// The built-in English list
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOPWORDS)
    }

    /// A filter from a custom word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Whether `token` should be counted.
    ///
    /// An empty filter accepts everything; a populated one also rejects
    /// short tokens.
    pub fn accepts(&self, token: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        !self.stopwords.contains(token) && token.chars().count() >= MIN_TERM_CHARS
    }
}

/// Whether `word` is in the built-in English stopword list.
pub fn is_english_stopword(word: &str) -> bool {
    ENGLISH.contains(word)
}

/// Token counts for one summarization request.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    /// Tokens in first-encounter order
    order: Vec<String>,
}

impl FrequencyTable {
    /// Count the tokens of every sentence.
    pub fn build(sentences: &[Sentence], filter: &StopwordFilter) -> Self {
        let mut table = Self::default();
        for sentence in sentences {
            table.extend(tokenize(&sentence.text), filter);
        }
        table
    }

    /// Count the tokens of a whole text, ignoring sentence boundaries.
    pub fn from_text(text: &str, filter: &StopwordFilter) -> Self {
        let mut table = Self::default();
        table.extend(tokenize(text), filter);
        table
    }

    fn extend<I>(&mut self, tokens: I, filter: &StopwordFilter)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            if !filter.accepts(&token) {
                continue;
            }
            match self.counts.get_mut(&token) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(token.clone(), 1);
                    self.order.push(token);
                }
            }
        }
    }

    /// Occurrences of `token`, zero when unseen.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent tokens, count descending, ties by first encounter.
    pub fn most_common(&self, n: usize) -> Vec<KeyTerm> {
        let mut terms: Vec<KeyTerm> = self
            .order
            .iter()
            .map(|term| KeyTerm {
                term: term.clone(),
                frequency: self.counts[term],
            })
            .collect();
        // sort_by is stable, so equal counts keep encounter order
        terms.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        terms.truncate(n);
        terms
    }
}

/// A ranked term and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTerm {
    pub term: String,
    pub frequency: usize,
}

impl KeyTerm {
    /// The term with its first character upper-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.term.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    #[test]
    fn test_counts_every_token_without_filter() {
        let table = FrequencyTable::build(&segment("cat dog cat"), &StopwordFilter::none());
        assert_eq!(table.get("cat"), 2);
        assert_eq!(table.get("dog"), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("bird"), 0);
    }

    #[test]
    fn test_tokens_are_case_folded() {
        assert_eq!(tokenize("The Cell's DNA_strand"), vec!["the", "cell", "s", "dna_strand"]);
    }

    #[test]
    fn test_combining_marks_split_tokens() {
        assert_eq!(tokenize("cafe\u{301} latte"), vec!["cafe", "latte"]);
        assert_eq!(tokenize("café x2_y"), vec!["café", "x2_y"]);
    }

    #[test]
    fn test_english_filter_drops_stopwords_and_short_tokens() {
        let table = FrequencyTable::from_text(
            "The enzyme is in an ox. Enzymes bind to the substrate.",
            &StopwordFilter::english(),
        );
        assert_eq!(table.get("the"), 0);
        assert_eq!(table.get("is"), 0);
        assert_eq!(table.get("ox"), 0);
        assert_eq!(table.get("enzyme"), 1);
        assert_eq!(table.get("substrate"), 1);
    }

    #[test]
    fn test_empty_filter_keeps_short_tokens() {
        let filter = StopwordFilter::none();
        assert!(filter.accepts("a"));
        assert!(filter.accepts("the"));
    }

    #[test]
    fn test_most_common_ties_keep_encounter_order() {
        let table = FrequencyTable::from_text(
            "zeta alpha zeta beta alpha gamma",
            &StopwordFilter::none(),
        );
        let top: Vec<(String, usize)> = table
            .most_common(3)
            .into_iter()
            .map(|t| (t.term, t.frequency))
            .collect();
        assert_eq!(
            top,
            vec![
                ("zeta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("beta".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_display_name_capitalizes() {
        let term = KeyTerm {
            term: "photosynthesis".to_string(),
            frequency: 3,
        };
        assert_eq!(term.display_name(), "Photosynthesis");
        assert!(is_english_stopword("their"));
        assert!(!is_english_stopword("energy"));
    }
}
