/// Word lists, partitioned by language, word length, and difficulty mode.
/// Lists load from a directory of plain text files named
/// `<lang>_<length>_<mode>.txt` (e.g. `en_5_normal.txt`), one word per line;
/// blank lines and lines starting with '#' are skipped.
use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use log::*;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::language::{self, Language, DEFAULT_LANGUAGE};

/// Difficulty mode selecting the word pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Normal,
    Advanced,
}

impl Mode {
    pub fn from_code(code: &str) -> Option<Mode> {
        match code {
            "normal" => Some(Mode::Normal),
            "advanced" => Some(Mode::Advanced),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Advanced => "advanced",
        }
    }
}

/// What to do when no secret exists for a requested combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Retry the default language for the same length and mode before
    /// giving up. Unknown language codes also fall back rather than fail.
    #[default]
    Fallback,
    /// Fail immediately.
    Strict,
}

/// WordList holds every loaded word partition.
#[derive(Debug, Default)]
pub struct WordList {
    partitions: HashMap<(Language, usize, Mode), Vec<String>>,
}

// read_words parses one word-list file: one word per line, filtering out
// empty lines and lines that start with a '#'.
fn read_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(String::from)
        .filter(|s| !s.starts_with('#'))
        .filter(|s| !s.trim().is_empty())
        .collect()
}

impl WordList {
    pub fn new() -> WordList {
        WordList::default()
    }

    /// `add_partition` registers candidate secrets for one
    /// (language, length, mode) combination. Words are normalized here;
    /// entries whose folded length disagrees with `length` are dropped with
    /// a warning rather than poisoning the pool.
    pub fn add_partition(
        &mut self,
        language: Language,
        length: usize,
        mode: Mode,
        words: impl IntoIterator<Item = String>,
    ) {
        let entry = self.partitions.entry((language, length, mode)).or_default();
        for word in words {
            let normalized = language::normalize(&word, language);
            if normalized.chars().count() != length {
                warn!(
                    "Skipping '{}' in {}/{}/{}: not {} letters",
                    word,
                    language.code(),
                    length,
                    mode.code(),
                    length
                );
                continue;
            }
            entry.push(normalized);
        }
    }

    /// `load_dir` reads every `<lang>_<length>_<mode>.txt` file in a
    /// directory. Files that don't match the naming scheme are ignored.
    pub fn load_dir(dir: impl AsRef<Path>) -> anyhow::Result<WordList> {
        let dir = dir.as_ref();
        let mut list = WordList::new();

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Error reading word directory {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) if path.extension().and_then(|e| e.to_str()) == Some("txt") => s,
                _ => continue,
            };

            let mut parts = stem.splitn(3, '_');
            let key = (
                parts.next().and_then(Language::from_code),
                parts.next().and_then(|l| l.parse::<usize>().ok()),
                parts.next().and_then(Mode::from_code),
            );
            let (language, length, mode) = match key {
                (Some(l), Some(n), Some(m)) => (l, n, m),
                _ => {
                    debug!("Ignoring word file {}", path.display());
                    continue;
                }
            };

            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Error reading word file {}", path.display()))?;
            list.add_partition(language, length, mode, read_words(&contents));
            info!(
                "Loaded {} {}-letter {} words for {}",
                list.words_for(language, length, mode).len(),
                length,
                mode.code(),
                language.code()
            );
        }

        Ok(list)
    }

    /// `words_for` returns the candidate secrets for one combination, empty
    /// if nothing is loaded for it.
    pub fn words_for(&self, language: Language, length: usize, mode: Mode) -> &[String] {
        self.partitions
            .get(&(language, length, mode))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `pick` selects a secret uniformly at random. With the fallback policy
    /// an empty partition retries the default language before failing.
    pub fn pick(
        &self,
        language: Language,
        length: usize,
        mode: Mode,
        policy: FallbackPolicy,
    ) -> Result<String, GameError> {
        let mut candidates = self.words_for(language, length, mode);

        if candidates.is_empty() && policy == FallbackPolicy::Fallback && language != DEFAULT_LANGUAGE
        {
            warn!(
                "No {}-letter {} words for {}, falling back to {}",
                length,
                mode.code(),
                language.code(),
                DEFAULT_LANGUAGE.code()
            );
            candidates = self.words_for(DEFAULT_LANGUAGE, length, mode);
        }

        candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| {
                GameError::InvalidArgument(format!(
                    "no {}-letter {} words for {}",
                    length,
                    mode.code(),
                    language.code()
                ))
            })
    }
}
