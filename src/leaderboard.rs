/// Leaderboard keeps the fastest winning times, at most 20 per
/// (word length, language) partition. Scores that don't beat the worst kept
/// time of a full partition are discarded. The table persists to a single
/// JSON file.
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};

use crate::language::Language;

/// How many scores are retained per (word length, language) partition.
pub const MAX_SCORES: usize = 20;

/// One recorded winning time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub time: f64,
    pub word_length: usize,
    pub language: Language,
}

/// The full score table across all partitions.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Leaderboard {
        Leaderboard::default()
    }

    /// `rank` is the position a time would take in its partition: 1 plus the
    /// number of kept scores strictly faster than it.
    pub fn rank(&self, time: f64, word_length: usize, language: Language) -> u32 {
        1 + self
            .entries
            .iter()
            .filter(|e| e.word_length == word_length && e.language == language && e.time < time)
            .count() as u32
    }

    /// `scores_for` returns one partition's kept scores, fastest first.
    pub fn scores_for(&self, word_length: usize, language: Language) -> Vec<&ScoreEntry> {
        let mut scores: Vec<&ScoreEntry> = self
            .entries
            .iter()
            .filter(|e| e.word_length == word_length && e.language == language)
            .collect();
        scores.sort_by(|a, b| a.time.total_cmp(&b.time));
        scores
    }

    /// `record` inserts a score if it qualifies: the partition holds fewer
    /// than MAX_SCORES entries, or the new time beats the worst kept one.
    /// Insertion prunes everything beyond rank MAX_SCORES in that partition.
    /// Returns the rank the score took, or None if it didn't qualify.
    pub fn record(&mut self, entry: ScoreEntry) -> Option<u32> {
        let current = self.scores_for(entry.word_length, entry.language);
        let qualifies = match current.last() {
            Some(worst) if current.len() >= MAX_SCORES => entry.time < worst.time,
            _ => true,
        };
        if !qualifies {
            return None;
        }

        let rank = self.rank(entry.time, entry.word_length, entry.language);
        let (word_length, language) = (entry.word_length, entry.language);
        self.entries.push(entry);
        self.prune(word_length, language);
        Some(rank)
    }

    // prune drops every entry past rank MAX_SCORES in one partition. The
    // sort is stable, so ties keep the earliest-recorded entries.
    fn prune(&mut self, word_length: usize, language: Language) {
        let (mut partition, rest): (Vec<ScoreEntry>, Vec<ScoreEntry>) =
            std::mem::take(&mut self.entries)
                .into_iter()
                .partition(|e| e.word_length == word_length && e.language == language);
        partition.sort_by(|a, b| a.time.total_cmp(&b.time));
        partition.truncate(MAX_SCORES);
        self.entries = rest;
        self.entries.extend(partition);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Save the table as JSON.
    pub async fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)
            .await
            .with_context(|| format!("Error creating file {}", path.display()))?;

        file.write_all(
            serde_json::to_vec(self)
                .context("Error serializing leaderboard")?
                .as_ref(),
        )
        .await
        .with_context(|| format!("Error writing file {}", path.display()))
    }

    /// Load a table previously written by `save`.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Leaderboard> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .await
            .with_context(|| format!("Error opening file {}", path.display()))?;

        let mut contents = vec![];
        file.read_to_end(&mut contents)
            .await
            .with_context(|| format!("Error reading file {}", path.display()))?;

        serde_json::from_slice(&contents)
            .with_context(|| format!("Error deserializing leaderboard from {}", path.display()))
    }
}
