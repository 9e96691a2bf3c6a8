//! Sentence importance scoring.
//!
//! A sentence scores the sum of its tokens' frequencies, scaled down
//! linearly with position (1.0 for the first sentence towards 0.7 for the
//! last) and by 0.8 when it is very short or very long.

use crate::frequency::{tokenize, FrequencyTable};
use crate::segment::Sentence;
use std::collections::BTreeMap;

/// How much of the score the last sentence loses to position.
const POSITION_DECAY: f64 = 0.3;
/// Word counts inside this range get the full length factor.
const PREFERRED_WORDS: std::ops::RangeInclusive<usize> = 10..=25;
const OFF_LENGTH_FACTOR: f64 = 0.8;

/// Scores keyed by sentence index.
#[derive(Debug, Clone, Default)]
pub struct SentenceScores {
    scores: BTreeMap<usize, f64>,
}

impl SentenceScores {
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(&index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// `(index, score)` pairs, best first; equal scores keep ascending index.
    pub fn ranked(&self) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.scores.iter().map(|(&i, &s)| (i, s)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Indices of the `n` best sentences, best first.
    pub fn top(&self, n: usize) -> Vec<usize> {
        self.ranked().into_iter().take(n).map(|(i, _)| i).collect()
    }
}

/// Factor applied for the sentence at `index` out of `total`.
pub fn position_factor(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    1.0 - (index as f64 / total as f64) * POSITION_DECAY
}

/// Factor applied for a sentence with `words` tokens.
pub fn length_factor(words: usize) -> f64 {
    if PREFERRED_WORDS.contains(&words) {
        1.0
    } else {
        OFF_LENGTH_FACTOR
    }
}

/// Score every sentence against `frequency`.
pub fn score(sentences: &[Sentence], frequency: &FrequencyTable) -> SentenceScores {
    let total = sentences.len();
    let scores = sentences
        .iter()
        .map(|sentence| {
            let words = tokenize(&sentence.text);
            let base: usize = words.iter().map(|w| frequency.get(w)).sum();
            let value = base as f64
                * position_factor(sentence.index, total)
                * length_factor(words.len());
            (sentence.index, value)
        })
        .collect();

    SentenceScores { scores }
}
