use crate::results::WordleError;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// A source of recognized words that games draw their objective from and check guesses
/// against.
pub trait WordStore {
    /// Returns `true` iff the given word is recognized. Implementations should ignore ASCII case.
    fn contains(&self, word: &str) -> bool;

    /// Chooses a word at random, or returns `None` if there are no words.
    fn pick_random(&self) -> Option<Arc<str>>;
}

/// Contains all the recognized words for a game.
///
/// Words are stored in upper case, without duplicates, in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_set: HashSet<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Surrounding whitespace is trimmed, blank
    /// lines are skipped, and each word is converted to upper case. All words must have the
    /// same length and only contain the letters A-Z.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        WordBank::from_iterator(lines)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Words are normalized the same way as in [`WordBank::from_reader`].
    ///
    /// ```
    /// use rs_wordle_game::{WordBank, WordStore};
    ///
    /// let bank = WordBank::from_iterator(vec!["crane", " Trace", "", "CRANE"])?;
    ///
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(bank.word_length(), 5);
    /// assert!(bank.contains("trace"));
    /// # Ok::<(), rs_wordle_game::WordleError>(())
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut bank = WordBank::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            bank.insert(word)?;
        }
        debug!(
            "Loaded {} words of length {}",
            bank.len(),
            bank.word_length
        );
        Ok(bank)
    }

    fn insert(&mut self, word: &str) -> Result<(), WordleError> {
        if let Some(unsupported) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordleError::UnsupportedCharacter(unsupported));
        }
        if self.word_length == 0 {
            self.word_length = word.len();
        } else if word.len() != self.word_length {
            return Err(WordleError::WordLength(self.word_length));
        }
        let word: Arc<str> = Arc::from(word.to_ascii_uppercase());
        if self.word_set.insert(Arc::clone(&word)) {
            self.all_words.push(word);
        }
        Ok(())
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the bank, or 0 if the bank is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Chooses a word using the given random number generator.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Arc<str>> {
        self.all_words.choose(rng).map(Arc::clone)
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

impl WordStore for WordBank {
    fn contains(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_ascii_lowercase()) {
            return self.word_set.contains(word.to_ascii_uppercase().as_str());
        }
        self.word_set.contains(word)
    }

    fn pick_random(&self) -> Option<Arc<str>> {
        self.pick_random_with(&mut rand::thread_rng())
    }
}
