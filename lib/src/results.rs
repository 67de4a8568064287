use crate::letters::letter_index;
use crate::letters::ALPHABET_SIZE;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::iter::zip;
use thiserror::Error;

/// The character used to fill the letters of a row that has not been guessed yet.
pub const PLACEHOLDER_LETTER: char = '-';

/// An RGB colour, used by graphical front ends to paint letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }
}

/// The result of a given letter at a specific location.
///
/// Results are ordered by how much they reveal about the objective word, so combining what is
/// known about a letter is a matter of taking the maximum:
///
/// ```
/// use rs_wordle_game::LetterResult;
///
/// assert!(LetterResult::Unguessed < LetterResult::Incorrect);
/// assert!(LetterResult::Incorrect < LetterResult::PresentWrongPosition);
/// assert!(LetterResult::PresentWrongPosition < LetterResult::Correct);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// Nothing is known about this letter yet.
    #[default]
    Unguessed,
    /// The letter is not in the word, or every occurrence has already been accounted for.
    Incorrect,
    /// The letter is in the word, but not at this location.
    PresentWrongPosition,
    /// The letter is at this location.
    Correct,
}

impl LetterResult {
    /// All results, from least to most informative.
    pub const ALL: [LetterResult; 4] = [
        LetterResult::Unguessed,
        LetterResult::Incorrect,
        LetterResult::PresentWrongPosition,
        LetterResult::Correct,
    ];

    /// The position of this result in the aggregation order, from 0 (`Unguessed`) to 3
    /// (`Correct`).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// A short description suitable for showing to players.
    pub fn label(self) -> &'static str {
        match self {
            LetterResult::Unguessed => "???",
            LetterResult::Incorrect => "Incorrect!",
            LetterResult::PresentWrongPosition => "Correct but wrong location",
            LetterResult::Correct => "Correct!",
        }
    }

    /// The ANSI escape sequence that terminal front ends print before a letter with this result.
    pub fn terminal_color(self) -> &'static str {
        match self {
            LetterResult::Unguessed => "\u{1b}[0m",
            LetterResult::Incorrect => "\u{1b}[31m",
            LetterResult::PresentWrongPosition => "\u{1b}[34m",
            LetterResult::Correct => "\u{1b}[32m",
        }
    }

    /// The colour that graphical front ends use for a letter with this result.
    pub fn ui_color(self) -> Rgb {
        match self {
            LetterResult::Unguessed => Rgb::new(255, 255, 255),
            LetterResult::Incorrect => Rgb::new(50, 50, 50),
            LetterResult::PresentWrongPosition => Rgb::new(255, 255, 0),
            LetterResult::Correct => Rgb::new(0, 128, 0),
        }
    }
}

/// The result of a single word guess.
///
/// A `GuessResult` is immutable once created. The guess is always stored in upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResult {
    guess: Box<str>,
    results: Vec<LetterResult>,
}

impl GuessResult {
    pub(crate) fn new(guess: Box<str>, results: Vec<LetterResult>) -> GuessResult {
        debug_assert_eq!(guess.chars().count(), results.len());
        GuessResult { guess, results }
    }

    /// Creates an empty row for words of the given length. Every letter is
    /// [`PLACEHOLDER_LETTER`] and every result is [`LetterResult::Unguessed`].
    pub fn placeholder(word_length: usize) -> GuessResult {
        GuessResult {
            guess: std::iter::repeat(PLACEHOLDER_LETTER)
                .take(word_length)
                .collect::<String>()
                .into_boxed_str(),
            results: vec![LetterResult::Unguessed; word_length],
        }
    }

    /// The guessed word, in upper case.
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// The result of each letter, provided in the same letter order as in the guess.
    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    /// Iterates over each letter of the guess along with its result.
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        zip(self.guess.chars(), self.results.iter().copied())
    }

    /// Returns `true` iff every letter is [`LetterResult::Correct`], i.e. the guess was the
    /// objective word.
    ///
    /// This full-match flag is derived from the results rather than stored, so it can never
    /// disagree with them.
    pub fn is_correct(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|result| *result == LetterResult::Correct)
    }

    /// Returns `true` if this row has not been guessed yet.
    pub fn is_placeholder(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Unguessed)
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Letters are compared without regard to ASCII case. Repeated letters are credited at most as
/// many times as they appear in the objective: exact matches are credited first, then the
/// remaining occurrences are credited to misplaced letters from left to right.
///
/// ```
/// use rs_wordle_game::{get_result_for_guess, LetterResult};
///
/// let result = get_result_for_guess("alloy", "lolly");
///
/// assert_eq!(result.guess(), "LOLLY");
/// assert_eq!(
///     result.results(),
///     &[
///         LetterResult::PresentWrongPosition,
///         LetterResult::PresentWrongPosition,
///         LetterResult::Correct,
///         LetterResult::Incorrect,
///         LetterResult::Correct,
///     ]
/// );
/// ```
///
/// # Panics
///
/// Panics if `objective` and `guess` have different lengths. Callers are expected to validate
/// guesses before evaluating them.
pub fn get_result_for_guess(objective: &str, guess: &str) -> GuessResult {
    let objective: Vec<char> = objective.chars().map(|c| c.to_ascii_uppercase()).collect();
    let guess = guess.to_ascii_uppercase();
    let guess_letters: Vec<char> = guess.chars().collect();
    assert_eq!(
        objective.len(),
        guess_letters.len(),
        "Objective ({}) must have the same length as the guess ({})",
        objective.iter().collect::<String>(),
        guess
    );

    let mut results = vec![LetterResult::Incorrect; guess_letters.len()];
    // Occurrences of each objective letter that haven't been matched to a guessed letter.
    let mut unclaimed_counts = [0u32; ALPHABET_SIZE];
    for (index, (letter, objective_letter)) in zip(&guess_letters, &objective).enumerate() {
        if letter == objective_letter {
            results[index] = LetterResult::Correct;
        } else if let Some(objective_index) = letter_index(*objective_letter) {
            unclaimed_counts[objective_index] += 1;
        }
    }

    for (result, letter) in zip(results.iter_mut(), &guess_letters) {
        if *result == LetterResult::Correct {
            continue;
        }
        if let Some(index) = letter_index(*letter) {
            if unclaimed_counts[index] > 0 {
                unclaimed_counts[index] -= 1;
                *result = LetterResult::PresentWrongPosition;
            }
        }
    }

    GuessResult::new(guess.into_boxed_str(), results)
}

/// Why a guess was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidGuessReason {
    /// The guess doesn't have the same number of letters as the objective word.
    WrongLength,
    /// The guess contains something other than the letters A-Z.
    NonAlphabetic,
    /// The guess isn't a recognized word.
    NotInDictionary,
    /// The game has already been won or lost.
    GameOver,
}

/// Indicates that a guess was rejected without being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidGuess {
    reason: InvalidGuessReason,
    message: String,
}

impl InvalidGuess {
    pub fn new(reason: InvalidGuessReason, message: impl Into<String>) -> InvalidGuess {
        InvalidGuess {
            reason,
            message: message.into(),
        }
    }

    pub fn reason(&self) -> InvalidGuessReason {
        self.reason
    }

    /// A description of the problem that can be shown to the player.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Indicates that an error occurred while setting up words or a game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The words could not be read.
    #[error("failed to read words: {0}")]
    Io(#[from] std::io::Error),
    /// Indicates that a word doesn't have the same length as the others. Provides the expected
    /// length.
    #[error("all words must have {0} letters")]
    WordLength(usize),
    /// Indicates that a word contains something other than the letters A-Z.
    #[error("unsupported character {0:?}; words may only contain the letters A-Z")]
    UnsupportedCharacter(char),
    /// Indicates that an empty word was given.
    #[error("words must not be empty")]
    EmptyWord,
    /// Indicates that the objective word is not in the word store, so it could never be guessed.
    #[error("the objective word is not in the word store")]
    NotFound,
    /// Indicates that there are no words to choose an objective from.
    #[error("the word bank is empty")]
    EmptyWordBank,
    /// Indicates that a game was configured to allow no guesses.
    #[error("a game must allow at least one guess, but {0} were configured")]
    InvalidMaxGuesses(usize),
}
