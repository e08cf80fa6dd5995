//! Sentiment scoring backed by the VADER lexicon and rules
//! (`vader_sentiment`).

use vader_sentiment::SentimentIntensityAnalyzer;

use super::SentimentScores;

pub(crate) fn score(text: &str) -> SentimentScores {
    if !text.chars().any(char::is_alphanumeric) {
        return SentimentScores::default();
    }

    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

    SentimentScores {
        compound: get("compound"),
        positive: get("pos"),
        negative: get("neg"),
        neutral: get("neu"),
    }
}
