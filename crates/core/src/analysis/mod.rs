//! Text analysis engine: sentiment, entities, key phrases, and
//! part-of-speech statistics over transcript text.
//!
//! [`TextAnalyzer`] is the seam callers depend on; [`LexiconAnalyzer`] is
//! the built-in implementation, which needs no model files.

mod entities;
mod lexicon;
mod lexicon_analyzer;
mod pos;
mod sentiment;
mod tokenize;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

pub use lexicon_analyzer::LexiconAnalyzer;
pub use pos::PosTag;

/// Key under which per-segment analysis is attached.
pub const NLP_ANALYSIS_KEY: &str = "nlp_analysis";

/// Sentiment scores. `positive + negative + neutral` is 1 for non-empty text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Normalised valence in `[-1, 1]`.
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// A named entity span. `start`/`end` are character offsets into the
/// analysed text, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Full analysis of one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub sentiment: SentimentScores,
    pub entities: Vec<Entity>,
    /// Noun phrases in document order.
    pub key_phrases: Vec<String>,
    /// Occurrences per universal POS tag (`NOUN`, `VERB`, ...).
    pub pos_distribution: BTreeMap<String, usize>,
    pub sentence_count: usize,
    /// Tokens that are not punctuation.
    pub word_count: usize,
}

/// Anything that can analyse text.
pub trait TextAnalyzer: Send + Sync {
    fn analyze_text(&self, text: &str) -> TextAnalysis;

    /// Analyse each segment's `text` and return the segment with the result
    /// added under [`NLP_ANALYSIS_KEY`]. Every other field is copied
    /// through unchanged.
    fn analyze_segments(&self, segments: &[Value]) -> Result<Vec<Value>, CoreError> {
        segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let fields = segment.as_object().ok_or_else(|| {
                    CoreError::Validation(format!("Segment {index} is not an object"))
                })?;
                let text = fields.get("text").and_then(Value::as_str).ok_or_else(|| {
                    CoreError::Validation(format!("Segment {index} has no 'text' string"))
                })?;

                let analysis = serde_json::to_value(self.analyze_text(text))
                    .map_err(|e| CoreError::Internal(e.to_string()))?;

                let mut out = fields.clone();
                out.insert(NLP_ANALYSIS_KEY.to_string(), analysis);
                Ok(Value::Object(out))
            })
            .collect()
    }
}
