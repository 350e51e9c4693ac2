/// GameSession tracks one player's game: the secret word, the guesses made so
/// far with their feedback, and whether the game is still on. The session is
/// a plain value; whoever serves multiple players owns the map from session
/// identifier to GameSession and hands the right one in with each guess.
use std::time::Instant;

use serde::Serialize;

use crate::error::GameError;
use crate::language::{self, Language};
use crate::wordle::{self, LetterFeedback};

/// Maximum number of guesses before the game is lost.
pub const MAX_GUESSES: usize = 6;

/// State represents the current player state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Active,
    Won,
    Lost,
}

/// One guess and its feedback, appended to the session history in order and
/// never removed or reordered.
#[derive(Debug, Clone, Serialize)]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: Vec<LetterFeedback>,
}

/// A single game in progress (or finished).
#[derive(Debug)]
pub struct GameSession {
    secret: String,
    language: Language,
    history: Vec<GuessRecord>,
    started_at: Instant,
    state: State,
    time_taken: Option<f64>,
}

impl GameSession {
    /// `new` starts a game with the given secret word. The secret is
    /// normalized here, so callers can pass word-list entries as-is.
    pub fn new(secret: &str, language: Language) -> Result<GameSession, GameError> {
        let secret = language::normalize(secret, language);
        if secret.is_empty() {
            return Err(GameError::InvalidArgument("empty secret word".into()));
        }

        Ok(GameSession {
            secret,
            language,
            history: Vec::new(),
            started_at: Instant::now(),
            state: State::Active,
            time_taken: None,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != State::Active
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Seconds from game start to the winning guess. None unless won.
    pub fn time_taken(&self) -> Option<f64> {
        self.time_taken
    }

    /// `submit_guess` plays one turn: normalize the raw guess, evaluate it
    /// against the secret, append the record, and move the state machine.
    /// Returns the feedback for this guess.
    ///
    /// A rejected guess (finished game, empty or wrong-length word) leaves
    /// the history untouched.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<Vec<LetterFeedback>, GameError> {
        if self.state != State::Active {
            return Err(GameError::NoActiveGame);
        }

        let guess = language::normalize(raw_guess, self.language);
        let feedback = wordle::evaluate(&guess, &self.secret)?;

        let correct = guess == self.secret;
        self.history.push(GuessRecord {
            guess,
            feedback: feedback.clone(),
        });

        if correct {
            self.state = State::Won;
            self.time_taken = Some(self.started_at.elapsed().as_secs_f64());
        } else if self.history.len() >= MAX_GUESSES {
            self.state = State::Lost;
        }

        Ok(feedback)
    }

    /// `used_letters` returns a sorted deduplicated list of every letter
    /// guessed so far, for rendering a keyboard or alphabet strip.
    pub fn used_letters(&self) -> Vec<char> {
        let mut letters = self
            .history
            .iter()
            .flat_map(|r| r.feedback.iter())
            .map(|f| f.letter)
            .collect::<Vec<_>>();
        letters.sort();
        letters.dedup();
        letters
    }
}
