//! # notesum
//!
//! Condenses lecture notes with simple statistical heuristics.
//!
//! ## Features
//!
//! - **Extractive**: the highest-scoring sentences, kept in reading order
//! - **Bullet points**: the leading sentences as a list, most important first
//! - **Key terms**: the most frequent content words with a sentence of context
//!
//! Sentences are scored by the frequency of their words across the notes,
//! with a mild preference for early and moderate-length sentences.

pub mod config;
pub mod frequency;
pub mod loader;
pub mod scoring;
pub mod segment;
pub mod summarizer;
pub mod summary;

pub use config::Config;
pub use segment::{segment, Sentence};
pub use summarizer::{summarize, Limits, Summarizer};
pub use summary::{Length, Method, Summary, SummaryError};
