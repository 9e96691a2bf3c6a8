//! Summary struct - the structured result handed back to the shell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("no notes to summarize")]
    EmptyInput,
    #[error("unknown summary method: {0} (expected extractive, bullet_points or key_terms)")]
    UnknownMethod(String),
    #[error("unknown summary length: {0} (expected short, medium or long)")]
    UnknownLength(String),
}

/// Summarization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Best sentences, verbatim, in reading order
    #[default]
    Extractive,
    /// Best sentences as a bulleted list, most important first
    BulletPoints,
    /// Most frequent terms plus a sentence of context for the leading ones
    KeyTerms,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Extractive, Method::BulletPoints, Method::KeyTerms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Extractive => "extractive",
            Method::BulletPoints => "bullet_points",
            Method::KeyTerms => "key_terms",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "extractive" => Ok(Method::Extractive),
            "bullet_points" => Ok(Method::BulletPoints),
            "key_terms" => Ok(Method::KeyTerms),
            _ => Err(SummaryError::UnknownMethod(s.to_string())),
        }
    }
}

/// How long an extractive summary should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }

    /// Number of sentences to keep out of `total`.
    pub fn target_sentences(&self, total: usize) -> usize {
        match self {
            Length::Short => (total / 4).max(2),
            Length::Medium => (total / 3).max(3),
            Length::Long => (total / 2).max(4),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Length {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Length::Short),
            "medium" => Ok(Length::Medium),
            "long" => Ok(Length::Long),
            _ => Err(SummaryError::UnknownLength(s.to_string())),
        }
    }
}

/// A finished summary with the settings that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub method: Method,
    pub length: Length,
    /// Sentences found in the input
    pub sentence_count: usize,
    /// The rendered summary text
    pub text: String,
}

impl Summary {
    /// True when the rendered text is blank, e.g. bullets for notes with no sentences
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
