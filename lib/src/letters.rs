use crate::results::GuessResult;
use crate::results::LetterResult;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::iter::zip;

/// The number of letters in the supported alphabet, A-Z.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the zero-based position of the given letter in the alphabet, ignoring ASCII case.
///
/// Returns `None` for anything other than the letters A-Z.
pub(crate) fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Tracks the most informative result seen so far for every letter of the alphabet.
///
/// Updates never lose information: a letter's result only ever moves up the
/// [`LetterResult`] order, so the final statuses depend only on which guesses were made, not
/// on the order they were made in.
///
/// ```
/// use rs_wordle_game::{get_result_for_guess, LetterResult, LetterStatuses};
///
/// let statuses = LetterStatuses::new()
///     .fold(&get_result_for_guess("crane", "cloud"))
///     .fold(&get_result_for_guess("crane", "trace"));
///
/// assert_eq!(statuses.get('c'), Some(LetterResult::Correct));
/// assert_eq!(statuses.get('l'), Some(LetterResult::Incorrect));
/// assert_eq!(statuses.get('a'), Some(LetterResult::Correct));
/// assert_eq!(statuses.get('z'), Some(LetterResult::Unguessed));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterStatuses {
    statuses: [LetterResult; ALPHABET_SIZE],
}

impl LetterStatuses {
    /// Creates statuses where every letter is [`LetterResult::Unguessed`].
    pub fn new() -> LetterStatuses {
        LetterStatuses::default()
    }

    /// Returns the status of the given letter, or `None` if it isn't one of the letters A-Z.
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        letter_index(letter).map(|index| self.statuses[index])
    }

    /// Merges the results of a guess into these statuses.
    ///
    /// If a letter appears more than once in the guess, its best result wins.
    pub fn update(&mut self, guess_result: &GuessResult) {
        self.update_letters(guess_result.guess(), guess_result.results());
    }

    /// Merges the given letters and their results, position by position.
    pub fn update_letters(&mut self, letters: &str, results: &[LetterResult]) {
        for (letter, result) in zip(letters.chars(), results) {
            if let Some(index) = letter_index(letter) {
                self.statuses[index] = self.statuses[index].max(*result);
            }
        }
    }

    /// Returns these statuses with the results of the given guess merged in.
    pub fn fold(mut self, guess_result: &GuessResult) -> LetterStatuses {
        self.update(guess_result);
        self
    }

    /// Iterates over every letter from A to Z, along with its status.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        zip('A'..='Z', self.statuses.iter().copied())
    }
}
