//! Transcript shapes: the raw engine output and the structured artifact
//! persisted in `videos.transcription_details`.
//!
//! Persisted structure:
//!
//! ```json
//! {
//!   "text": "full transcription",
//!   "segments": [
//!     {
//!       "start": 0.0, "end": 2.4, "text": "segment text", "confidence": 0.98,
//!       "words": [ {"word": "example", "start": 0.0, "end": 0.4, "confidence": 0.99} ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A single word with its time span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    pub word: String,
    pub start: f64,
    pub end: f64,
    /// Whisper servers report this as `probability`.
    #[serde(default, alias = "probability")]
    pub confidence: f64,
}

/// A time-bounded span of transcript text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub words: Vec<WordTiming>,
}

/// The structured transcript stored alongside the plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionDetails {
    pub text: String,
    pub segments: Vec<TranscriptSegment>,
}

/// A segment as reported by the transcription engine; every optional
/// field may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub words: Option<Vec<WordTiming>>,
}

/// Engine output before it is normalised into [`TranscriptionDetails`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTranscript {
    pub text: String,
    #[serde(default)]
    pub segments: Vec<RawSegment>,
    /// Word timings reported at the top level instead of per segment.
    #[serde(default)]
    pub words: Vec<WordTiming>,
}

impl From<RawTranscript> for TranscriptionDetails {
    /// Missing segment confidence becomes `0.0` and missing word lists
    /// become empty. Top-level words are attached to the segment whose
    /// span contains the word's start; words outside every segment are
    /// dropped.
    fn from(raw: RawTranscript) -> Self {
        let mut segments: Vec<TranscriptSegment> = raw
            .segments
            .into_iter()
            .map(|s| TranscriptSegment {
                start: s.start,
                end: s.end,
                text: s.text,
                confidence: s.confidence.unwrap_or(0.0),
                words: s.words.unwrap_or_default(),
            })
            .collect();

        if segments.iter().all(|s| s.words.is_empty()) {
            for word in raw.words {
                if let Some(seg) = segments
                    .iter_mut()
                    .find(|s| word.start >= s.start && word.start < s.end)
                {
                    seg.words.push(word);
                }
            }
        }

        Self {
            text: raw.text,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawTranscript {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_confidence_and_words_default() {
        let details = TranscriptionDetails::from(raw(json!({
            "text": "hello world",
            "segments": [{"start": 0.0, "end": 1.0, "text": "hello world"}]
        })));

        assert_eq!(details.text, "hello world");
        assert_eq!(details.segments.len(), 1);
        assert_eq!(details.segments[0].confidence, 0.0);
        assert!(details.segments[0].words.is_empty());
    }

    #[test]
    fn per_segment_fields_are_kept() {
        let details = TranscriptionDetails::from(raw(json!({
            "text": "hello world",
            "segments": [{
                "start": 0.0, "end": 1.0, "text": "hello world", "confidence": 0.9,
                "words": [{"word": "hello", "start": 0.0, "end": 0.4, "probability": 0.8}]
            }]
        })));

        let seg = &details.segments[0];
        assert_eq!(seg.confidence, 0.9);
        assert_eq!(seg.words.len(), 1);
        assert_eq!(seg.words[0].confidence, 0.8);
    }

    #[test]
    fn top_level_words_are_attached_by_start_time() {
        let details = TranscriptionDetails::from(raw(json!({
            "text": "one two",
            "segments": [
                {"start": 0.0, "end": 1.0, "text": "one"},
                {"start": 1.0, "end": 2.0, "text": "two"}
            ],
            "words": [
                {"word": "one", "start": 0.1, "end": 0.5},
                {"word": "two", "start": 1.2, "end": 1.6},
                {"word": "stray", "start": 5.0, "end": 5.5}
            ]
        })));

        assert_eq!(details.segments[0].words[0].word, "one");
        assert_eq!(details.segments[1].words[0].word, "two");
        assert_eq!(details.segments[1].words.len(), 1);
    }

    #[test]
    fn persisted_shape_serializes_confidence_key() {
        let details = TranscriptionDetails {
            text: "hi".into(),
            segments: vec![TranscriptSegment {
                start: 0.0,
                end: 0.5,
                text: "hi".into(),
                confidence: 0.0,
                words: vec![WordTiming {
                    word: "hi".into(),
                    start: 0.0,
                    end: 0.5,
                    confidence: 0.7,
                }],
            }],
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["segments"][0]["words"][0]["confidence"], 0.7);
        assert_eq!(value["text"], "hi");
    }
}
