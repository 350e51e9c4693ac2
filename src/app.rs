/// App is the outer application. It composes the word lists, the score
/// table, and the definition provider, and drives a GameSession through one
/// request at a time. Sessions themselves are values owned by the caller:
/// whoever fronts this (an HTTP server, a bot, the terminal loop in main)
/// keeps the map from its own session identifiers to GameSessions and is
/// responsible for not racing two guesses against the same session.
use std::sync::Arc;

use log::*;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::dictionary::{self, DefinitionProvider};
use crate::error::GameError;
use crate::language::{Language, DEFAULT_LANGUAGE};
use crate::leaderboard::{Leaderboard, ScoreEntry};
use crate::session::{GameSession, GuessRecord, State};
use crate::wordle::LetterFeedback;
use crate::words::{FallbackPolicy, Mode, WordList};

/// Everything the caller gets back from one guess. Mirrors what a front-end
/// needs to render the board and, once the game ends, the outcome panel.
#[derive(Debug, Serialize)]
pub struct GuessReply {
    pub feedback: Vec<LetterFeedback>,
    pub guesses: Vec<GuessRecord>,
    pub game_over: bool,
    pub correct: bool,
    /// The secret word, revealed only once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
    /// Seconds from start to the winning guess. Wins only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// The rank this time would take on the leaderboard. Wins only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

#[derive(Clone)]
pub struct App {
    words: Arc<WordList>,
    leaderboard: Arc<RwLock<Leaderboard>>,
    dictionary: Arc<dyn DefinitionProvider + Send + Sync>,
    save_path: Option<String>,
    policy: FallbackPolicy,
}

impl App {
    pub fn new(words: WordList, dictionary: impl DefinitionProvider + Send + Sync + 'static) -> App {
        App {
            words: Arc::new(words),
            leaderboard: Arc::new(RwLock::new(Leaderboard::new())),
            dictionary: Arc::new(dictionary),
            save_path: None,
            policy: FallbackPolicy::default(),
        }
    }

    /// Set the file where the score table is saved.
    pub fn set_save_path(&mut self, path: impl Into<String>) {
        self.save_path = Some(path.into());
    }

    /// Set what happens when a language or word pool is missing.
    pub fn set_fallback_policy(&mut self, policy: FallbackPolicy) {
        self.policy = policy;
    }

    // resolve_language maps a request's language code to a Language,
    // falling back to the default unless the policy is strict.
    fn resolve_language(&self, code: &str) -> Result<Language, GameError> {
        match Language::from_code(code) {
            Some(language) => Ok(language),
            None if self.policy == FallbackPolicy::Fallback => {
                warn!(
                    "Unsupported language '{}', falling back to {}",
                    code,
                    DEFAULT_LANGUAGE.code()
                );
                Ok(DEFAULT_LANGUAGE)
            }
            None => Err(GameError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// `start_game` picks a secret for the requested pool and returns a
    /// fresh Active session.
    pub fn start_game(
        &self,
        language_code: &str,
        length: usize,
        mode: Mode,
    ) -> Result<GameSession, GameError> {
        let language = self.resolve_language(language_code)?;
        let secret = self.words.pick(language, length, mode, self.policy)?;
        info!(
            "Starting {}-letter {} game in {}, target word: {}",
            length,
            mode.code(),
            language,
            secret
        );
        GameSession::new(&secret, language)
    }

    /// `submit_guess` plays one turn of the given session and assembles the
    /// full reply. Definition lookup and rank computation only happen once
    /// the game is over, and neither can fail the reply.
    pub async fn submit_guess(
        &self,
        session: &mut GameSession,
        raw_guess: &str,
    ) -> Result<GuessReply, GameError> {
        let feedback = session.submit_guess(raw_guess)?;
        let state = session.state();
        let game_over = session.is_over();

        let (definition, rank) = if game_over {
            let definition = dictionary::best_effort(self.dictionary.as_ref(), session.secret());
            let rank = match (state, session.time_taken()) {
                (State::Won, Some(time)) => Some(self.leaderboard.read().await.rank(
                    time,
                    session.secret().chars().count(),
                    session.language(),
                )),
                _ => None,
            };
            (Some(definition), rank)
        } else {
            (None, None)
        };

        Ok(GuessReply {
            feedback,
            guesses: session.history().to_vec(),
            game_over,
            correct: state == State::Won,
            target_word: game_over.then(|| session.secret().to_string()),
            time_taken: session.time_taken(),
            definition,
            rank,
        })
    }

    /// `submit_score` records a winning time under the player's name and
    /// returns the rank it took, or None if it didn't make the top table.
    /// A failed save is logged, not surfaced: the recorded rank stands.
    pub async fn submit_score(
        &self,
        name: &str,
        time: f64,
        word_length: usize,
        language_code: &str,
    ) -> Result<Option<u32>, GameError> {
        if name.trim().is_empty() {
            return Err(GameError::InvalidArgument("empty player name".into()));
        }
        let language = self.resolve_language(language_code)?;

        let rank = self.leaderboard.write().await.record(ScoreEntry {
            name: name.to_string(),
            time,
            word_length,
            language,
        });

        if rank.is_some() {
            if let Err(e) = self.save().await {
                error!("Error saving leaderboard: {}", e);
            }
        }

        Ok(rank)
    }

    /// `scores` returns the current top table for one partition, fastest
    /// time first.
    pub async fn scores(
        &self,
        word_length: usize,
        language_code: &str,
    ) -> Result<Vec<ScoreEntry>, GameError> {
        let language = self.resolve_language(language_code)?;
        Ok(self
            .leaderboard
            .read()
            .await
            .scores_for(word_length, language)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Save the score table, if a save path is configured.
    pub async fn save(&self) -> anyhow::Result<()> {
        let Some(path) = &self.save_path else {
            return Ok(());
        };
        self.leaderboard.read().await.save(path).await
    }

    /// Load a previously saved score table. Missing files are not fatal.
    pub async fn load(&self) -> anyhow::Result<()> {
        let Some(path) = &self.save_path else {
            return Ok(());
        };
        match Leaderboard::load(path).await {
            Ok(board) => {
                info!("Loaded {} saved scores from {}", board.len(), path);
                *self.leaderboard.write().await = board;
                Ok(())
            }
            Err(e) => {
                warn!("No saved leaderboard: {}", e);
                Ok(())
            }
        }
    }
}
