//! The three summarization strategies.
//!
//! Every call segments, counts and scores from scratch; nothing is cached
//! between requests.

use crate::frequency::{FrequencyTable, KeyTerm, StopwordFilter};
use crate::scoring::score;
use crate::segment::{join_sentences, normalize_whitespace, segment, Sentence};
use crate::summary::{Length, Method, Summary, SummaryError};
use serde::{Deserialize, Serialize};
use tracing::debug;

const BULLET: &str = "• ";
const ELLIPSIS: &str = "...";

/// Narrowest bullet that still keeps a character in front of the ellipsis.
pub const MIN_BULLET_WIDTH: usize = 4;

/// Size limits for the list-style strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Sentences in a bullet-point summary
    pub bullet_points: usize,
    /// Longest bullet text before it is cut with an ellipsis
    pub bullet_width: usize,
    /// Terms listed under KEY TERMS AND CONCEPTS
    pub key_terms: usize,
    /// Leading terms that get a context sentence
    pub context_terms: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            bullet_points: 8,
            bullet_width: 80,
            key_terms: 15,
            context_terms: 5,
        }
    }
}

/// Summarize `text` with the default limits.
///
/// Total: blank input gives an empty (or header-only) summary.
pub fn summarize(text: &str, method: Method, length: Length) -> String {
    Summarizer::default().summarize(text, method, length)
}

#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    limits: Limits,
}

impl Summarizer {
    /// Bullet widths below [`MIN_BULLET_WIDTH`] are raised to it.
    pub fn new(limits: Limits) -> Self {
        Self {
            limits: Limits {
                bullet_width: limits.bullet_width.max(MIN_BULLET_WIDTH),
                ..limits
            },
        }
    }

    pub fn summarize(&self, text: &str, method: Method, length: Length) -> String {
        let sentences = segment(text);
        self.render(text, &sentences, method, length)
    }

    /// Like [`Summarizer::summarize`], but rejects blank notes and returns
    /// the result with its settings.
    pub fn try_summarize(
        &self,
        text: &str,
        method: Method,
        length: Length,
    ) -> Result<Summary, SummaryError> {
        if text.trim().is_empty() {
            return Err(SummaryError::EmptyInput);
        }
        let sentences = segment(text);
        let body = self.render(text, &sentences, method, length);
        Ok(Summary {
            method,
            length,
            sentence_count: sentences.len(),
            text: body,
        })
    }

    fn render(
        &self,
        text: &str,
        sentences: &[Sentence],
        method: Method,
        length: Length,
    ) -> String {
        debug!(%method, %length, sentences = sentences.len(), "summarizing");
        match method {
            Method::Extractive => {
                extractive(text, sentences, length.target_sentences(sentences.len()))
            }
            Method::BulletPoints => self.bullet_points(sentences),
            Method::KeyTerms => self.key_terms(text, sentences),
        }
    }

    /// Top sentences by score, most important first, one bullet per line.
    pub fn bullet_points(&self, sentences: &[Sentence]) -> String {
        let frequency = FrequencyTable::build(sentences, &StopwordFilter::none());
        let scores = score(sentences, &frequency);

        scores
            .top(self.limits.bullet_points)
            .into_iter()
            .map(|i| {
                let text = shorten(&sentences[i].text, self.limits.bullet_width);
                format!("{}{}", BULLET, text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Frequent terms and the first sentence mentioning each leading term.
    pub fn key_terms(&self, text: &str, sentences: &[Sentence]) -> String {
        let frequency = FrequencyTable::from_text(text, &StopwordFilter::english());
        let terms = frequency.most_common(self.limits.key_terms);
        debug!(distinct = frequency.len(), listed = terms.len(), "ranked key terms");

        let mut summary = String::from("KEY TERMS AND CONCEPTS:\n\n");
        for term in &terms {
            summary.push_str(&format!(
                "{}{} (mentioned {} times)\n",
                BULLET,
                term.display_name(),
                term.frequency
            ));
        }

        summary.push_str("\nKEY CONCEPTS IN CONTEXT:\n\n");
        for sentence in terms
            .iter()
            .take(self.limits.context_terms)
            .filter_map(|term| first_mention(term, sentences))
        {
            summary.push_str(&format!("{}{}\n", BULLET, sentence.text));
        }

        summary
    }
}

/// Best `target` sentences restored to reading order.
///
/// Notes that already fit the target come back whitespace-normalized but
/// otherwise untouched.
pub fn extractive(text: &str, sentences: &[Sentence], target: usize) -> String {
    if sentences.len() <= target {
        debug!(target, "notes already fit the target");
        return normalize_whitespace(text);
    }

    let frequency = FrequencyTable::build(sentences, &StopwordFilter::none());
    let mut selected = score(sentences, &frequency).top(target);
    selected.sort_unstable();
    debug!(?selected, "extractive selection");

    join_sentences(selected.iter().map(|&i| &sentences[i]))
}

/// First sentence whose lowercase text contains the term.
fn first_mention<'a>(term: &KeyTerm, sentences: &'a [Sentence]) -> Option<&'a Sentence> {
    sentences
        .iter()
        .find(|sentence| sentence.lowercase().contains(&term.term))
}

/// Cut `text` to `width` characters, ending in an ellipsis when cut.
fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}
