use grammar::GrammarSummary;
use serde::{Deserialize, Serialize};

/// Completed transcription as returned by the speech-to-text service
///
/// `confidence`, `text` and `words` are `null` until the upstream job
/// completes, so they are optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub id: String,
    pub status: String,
    pub audio_url: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub words: Option<Vec<TranscribedWord>>,
}

/// A single recognized word
///
/// Only the text feeds the statistics. Timing, confidence, and speaker
/// fields vary between speech-to-text services and are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribedWord {
    pub text: String,
}

impl TranscribedWord {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Speech report for one answered question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub status: String,
    pub audio_url: String,
    /// Confidence as a percentage with two decimals, e.g. `"87.65"`
    pub overall_confidence: String,
    pub question: String,
    pub transcript: String,
    pub word_details: WordDetails,
    pub grammar_syntax_issues: GrammarSummary,
}

/// Filler and vocabulary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDetails {
    pub filler_words_count: usize,
    pub unique_vocabulary: usize,
    pub total_words: usize,
    /// Distinct non-filler words, lowercased, in first-seen order
    pub different_words: Vec<String>,
}
