#![allow(dead_code)]

pub mod config;
pub mod mock_languagetool;

use parley_report::{TranscribedWord, TranscriptionResult};

/// Completed transcription whose text is the words joined by spaces
pub fn transcription(id: &str, words: &[&str], confidence: f64) -> TranscriptionResult {
    TranscriptionResult {
        id: id.to_owned(),
        status: "completed".to_owned(),
        audio_url: format!("https://cdn.example.com/{id}.mp3"),
        confidence: Some(confidence),
        text: Some(words.join(" ")),
        words: Some(words.iter().map(|w| TranscribedWord::new(*w)).collect()),
    }
}
