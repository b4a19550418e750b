use indexmap::IndexSet;

use crate::types::WordDetails;

/// Words treated as verbal noise, matched case-insensitively
pub const FILLER_WORDS: [&str; 12] = [
    "um",
    "uh",
    "like",
    "basically",
    "actually",
    "literally",
    "so",
    "well",
    "yeah",
    "right",
    "ok",
    "hmm",
];

/// Whether an already lowercased word is a filler
pub fn is_filler(lowercase: &str) -> bool {
    FILLER_WORDS.contains(&lowercase)
}

/// Running filler and vocabulary tallies for a transcript
///
/// A word is either a filler or vocabulary, never both. Only the first
/// case-insensitive occurrence of a non-filler word counts.
#[derive(Debug, Default)]
pub struct WordStats {
    total: usize,
    fillers: usize,
    vocabulary: IndexSet<String>,
}

impl WordStats {
    /// Tally a sequence of words in one pass
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut stats = Self::default();
        for word in words {
            stats.push(word);
        }
        stats
    }

    /// Add one word
    pub fn push(&mut self, word: &str) {
        self.total += 1;

        let lowercase = word.to_lowercase();

        if is_filler(&lowercase) {
            self.fillers += 1;
        } else {
            self.vocabulary.insert(lowercase);
        }
    }

    pub fn into_details(self) -> WordDetails {
        WordDetails {
            filler_words_count: self.fillers,
            unique_vocabulary: self.vocabulary.len(),
            total_words: self.total,
            different_words: self.vocabulary.into_iter().collect(),
        }
    }
}
