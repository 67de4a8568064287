//! Building blocks for Wordle-style games.
//!
//! [`get_result_for_guess`] scores a guess against an objective word, [`LetterStatuses`]
//! collects what is known about each letter, and [`Game`] ties these together into a game with
//! a limited number of guesses, drawing its words from a [`WordStore`] such as [`WordBank`].

mod data;
mod game;
mod letters;
mod results;

pub use data::WordBank;
pub use data::WordStore;
pub use game::*;
pub use letters::LetterStatuses;
pub use letters::ALPHABET_SIZE;
pub use results::*;
