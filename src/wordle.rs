/// Letter classification for a single guess against the secret word. This is
/// the heart of the game: given a guess and a secret of equal length, each
/// guessed letter is marked correct (right letter, right position), present
/// (in the secret, elsewhere), or absent.
///
/// This module is pure. It holds no state and never looks at the session.
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// How one guessed letter fared against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

/// One entry per position in a guess. Produced fresh for every guess and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback {
    pub letter: char,
    pub status: LetterStatus,
}

/// `evaluate` compares a guess to the secret and returns positional feedback,
/// one entry per guessed letter. Both inputs must already be normalized
/// (lowercased, diacritics folded); see `language::normalize`.
///
/// Duplicates follow the usual Wordle rules: exact positions are credited
/// first, then each remaining guess letter may claim at most one unconsumed
/// occurrence in the secret, scanning left to right. A letter guessed more
/// times than the secret holds it comes back absent for the excess.
pub fn evaluate(guess: &str, secret: &str) -> Result<Vec<LetterFeedback>, GameError> {
    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();

    if guess.is_empty() {
        return Err(GameError::InvalidArgument("empty guess".into()));
    }
    if guess.len() != secret.len() {
        return Err(GameError::InvalidArgument(format!(
            "guess must be {} letters long, got {}",
            secret.len(),
            guess.len()
        )));
    }

    let n = guess.len();
    let mut feedback: Vec<LetterFeedback> = guess
        .iter()
        .map(|&letter| LetterFeedback {
            letter,
            status: LetterStatus::Absent,
        })
        .collect();

    // Consumption flags instead of deleting from the sequences: a consumed
    // position can never match again.
    let mut secret_consumed = vec![false; n];
    let mut guess_consumed = vec![false; n];

    // First pass: exact positions. These must all be resolved before any
    // present/absent decision so duplicates are credited correctly.
    for i in 0..n {
        if guess[i] == secret[i] {
            feedback[i].status = LetterStatus::Correct;
            secret_consumed[i] = true;
            guess_consumed[i] = true;
        }
    }

    // Second pass: displaced letters. Each one claims the first unconsumed
    // occurrence in the secret, if any remains.
    for i in 0..n {
        if guess_consumed[i] {
            continue;
        }
        let found = (0..n).find(|&j| !secret_consumed[j] && secret[j] == guess[i]);
        if let Some(j) = found {
            feedback[i].status = LetterStatus::Present;
            secret_consumed[j] = true;
        }
    }

    Ok(feedback)
}
