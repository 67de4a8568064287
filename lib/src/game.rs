use crate::data::WordStore;
use crate::letters::LetterStatuses;
use crate::results::*;
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::result::Result;
use std::sync::Arc;

/// The number of letters in each word of a classic game.
pub const DEFAULT_WORD_LENGTH: usize = 5;
/// The number of guesses allowed in a classic game.
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The number of letters in the objective word, and so in every guess.
    pub word_length: usize,
    /// The number of guesses allowed before the game is lost.
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl GameConfig {
    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

/// Whether the game is still being played, or has been won or lost by the guesser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// More guesses may be made.
    InProgress,
    /// The objective word was guessed.
    Won,
    /// Every guess was used without finding the objective word.
    Lost,
}

impl GameState {
    /// Returns `true` if no more guesses can be made.
    pub fn is_over(self) -> bool {
        self != GameState::InProgress
    }
}

/// A single game, where the player tries to find the objective word within a limited number of
/// guesses.
///
/// The game checks each guess against the word store, evaluates it, records it in the next row
/// of its progress, and keeps track of what is known about every letter.
///
/// ```
/// use rs_wordle_game::{Game, GameConfig, GameState, LetterResult, WordBank};
///
/// let bank = WordBank::from_iterator(vec!["crane", "trace", "cloud"])?;
/// let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;
///
/// let result = game.guess("trace").unwrap();
/// assert!(!result.is_correct());
/// assert_eq!(game.letter_statuses().get('t'), Some(LetterResult::Incorrect));
///
/// game.guess("crane").unwrap();
/// assert_eq!(game.state(), GameState::Won);
/// assert_eq!(game.guesses().len(), 2);
/// # Ok::<(), rs_wordle_game::WordleError>(())
/// ```
#[derive(Debug)]
pub struct Game<'a, S: WordStore + ?Sized> {
    store: &'a S,
    secret: Arc<str>,
    progress: Vec<GuessResult>,
    row: usize,
    letter_statuses: LetterStatuses,
    state: GameState,
}

impl<'a, S: WordStore + ?Sized> Game<'a, S> {
    /// Starts a new game with an objective word chosen at random from the given store.
    pub fn new(store: &'a S, config: GameConfig) -> Result<Self, WordleError> {
        let secret = store.pick_random().ok_or(WordleError::EmptyWordBank)?;
        Game::with_secret(store, &secret, config)
    }

    /// Starts a new game with the given objective word.
    ///
    /// The objective is converted to upper case. It must be in the store, since only words in the
    /// store may be guessed.
    pub fn with_secret(
        store: &'a S,
        secret: &str,
        config: GameConfig,
    ) -> Result<Self, WordleError> {
        if config.max_guesses == 0 {
            return Err(WordleError::InvalidMaxGuesses(config.max_guesses));
        }
        if secret.is_empty() {
            return Err(WordleError::EmptyWord);
        }
        if let Some(unsupported) = secret.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordleError::UnsupportedCharacter(unsupported));
        }
        if secret.len() != config.word_length {
            return Err(WordleError::WordLength(config.word_length));
        }
        let secret: Arc<str> = Arc::from(secret.to_ascii_uppercase());
        if !store.contains(&secret) {
            return Err(WordleError::NotFound);
        }
        debug!(
            "Starting a game with {} letters and {} guesses",
            config.word_length, config.max_guesses
        );
        Ok(Game {
            store,
            secret,
            progress: vec![GuessResult::placeholder(config.word_length); config.max_guesses],
            row: 0,
            letter_statuses: LetterStatuses::new(),
            state: GameState::InProgress,
        })
    }

    /// Submits a guess.
    ///
    /// If the guess is valid, it is evaluated against the objective and recorded in the next
    /// row, and the result is returned. Invalid guesses are rejected without changing the game.
    pub fn guess(&mut self, guess: &str) -> Result<&GuessResult, InvalidGuess> {
        let guess = guess.to_ascii_uppercase();
        if let Err(error) = self.validate(&guess) {
            debug!("Rejected guess {:?}: {}", guess, error);
            return Err(error);
        }

        let result = get_result_for_guess(&self.secret, &guess);
        debug!("Guess {} scored {:?}", guess, result.results());
        self.letter_statuses.update(&result);
        let is_correct = result.is_correct();
        let row = self.row;
        self.progress[row] = result;
        self.row += 1;

        if is_correct {
            self.state = GameState::Won;
            info!("Won after {} guesses", self.row);
        } else if self.row == self.progress.len() {
            self.state = GameState::Lost;
            info!("Lost after {} guesses", self.row);
        }
        Ok(&self.progress[row])
    }

    fn validate(&self, guess: &str) -> Result<(), InvalidGuess> {
        if self.state.is_over() {
            return Err(InvalidGuess::new(
                InvalidGuessReason::GameOver,
                "The game is already over",
            ));
        }
        if guess.chars().count() != self.word_length() {
            return Err(InvalidGuess::new(
                InvalidGuessReason::WrongLength,
                format!("Guess must be {} letters long", self.word_length()),
            ));
        }
        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidGuess::new(
                InvalidGuessReason::NonAlphabetic,
                "Guesses must only contain letters",
            ));
        }
        if !self.store.contains(guess) {
            return Err(InvalidGuess::new(
                InvalidGuessReason::NotInDictionary,
                format!("{} is not in the word list", guess),
            ));
        }
        Ok(())
    }

    /// Every row of the game, including rows that haven't been guessed yet. Unguessed rows are
    /// placeholders (see [`GuessResult::placeholder`]).
    pub fn progress(&self) -> &[GuessResult] {
        &self.progress
    }

    /// The rows that have been guessed so far, in order.
    pub fn guesses(&self) -> &[GuessResult] {
        &self.progress[..self.row]
    }

    /// The best known result for each letter, across all guesses so far.
    pub fn letter_statuses(&self) -> &LetterStatuses {
        &self.letter_statuses
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The objective word, in upper case.
    ///
    /// Front ends shouldn't reveal this until the game is over.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The index of the next row to fill, which is also the number of guesses made so far.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn max_guesses(&self) -> usize {
        self.progress.len()
    }

    pub fn remaining_guesses(&self) -> usize {
        self.progress.len() - self.row
    }

    pub fn word_length(&self) -> usize {
        self.secret.len()
    }
}
