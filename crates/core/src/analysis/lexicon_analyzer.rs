use std::collections::BTreeMap;

use super::tokenize::{sentence_count, tokenize};
use super::{entities, pos, sentiment, TextAnalysis, TextAnalyzer};

/// Rule- and lexicon-based analyser. Stateless; cheap to construct and
/// share.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl TextAnalyzer for LexiconAnalyzer {
    fn analyze_text(&self, text: &str) -> TextAnalysis {
        let tokens = tokenize(text);
        let tags = pos::tag(&tokens);

        let mut pos_distribution: BTreeMap<String, usize> = BTreeMap::new();
        for tag in &tags {
            *pos_distribution.entry(tag.as_str().to_string()).or_default() += 1;
        }

        TextAnalysis {
            sentiment: sentiment::score(text),
            entities: entities::extract(text, &tokens, &tags),
            key_phrases: pos::noun_chunks(text, &tokens, &tags),
            pos_distribution,
            sentence_count: sentence_count(&tokens),
            word_count: tokens.iter().filter(|t| !t.is_punct()).count(),
        }
    }
}
