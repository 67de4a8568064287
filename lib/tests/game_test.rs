#[macro_use]
extern crate assert_matches;

use rs_wordle_game::*;
use std::result::Result;
use std::sync::Arc;

fn create_word_bank() -> WordBank {
    WordBank::from_iterator(vec![
        "crane", "trace", "rance", "nacre", "cloud", "alloy", "lolly", "built",
    ])
    .unwrap()
}

fn assert_rejected(game: &mut Game<'_, WordBank>, guess: &str, reason: InvalidGuessReason) {
    let progress_before = game.progress().to_vec();
    let statuses_before = *game.letter_statuses();
    let row_before = game.row();
    let state_before = game.state();

    assert_matches!(game.guess(guess), Err(error) if error.reason() == reason);

    assert_eq!(game.progress(), &progress_before[..]);
    assert_eq!(*game.letter_statuses(), statuses_before);
    assert_eq!(game.row(), row_before);
    assert_eq!(game.state(), state_before);
}

#[test]
fn new_game_has_placeholder_progress() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let game = Game::with_secret(&bank, "crane", GameConfig::default())?;

    assert_eq!(game.progress().len(), DEFAULT_MAX_GUESSES);
    assert!(game.progress().iter().all(|row| row.is_placeholder()));
    assert!(game
        .progress()
        .iter()
        .flat_map(|row| row.results())
        .all(|result| *result == LetterResult::Unguessed));
    assert_eq!(game.progress()[0].guess(), "-----");
    assert!(game.guesses().is_empty());
    assert_eq!(game.row(), 0);
    assert_eq!(game.remaining_guesses(), 6);
    assert_eq!(game.state(), GameState::InProgress);
    assert!(!game.is_over());
    assert_eq!(*game.letter_statuses(), LetterStatuses::new());
    assert_eq!(game.secret(), "CRANE");
    assert_eq!(game.word_length(), 5);
    Ok(())
}

#[test]
fn guess_records_result_in_next_row() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;

    let result = game.guess("trace").unwrap().clone();

    assert_eq!(result, get_result_for_guess("CRANE", "TRACE"));
    assert_eq!(game.progress()[0], result);
    assert!(game.progress()[1..].iter().all(|row| row.is_placeholder()));
    assert_eq!(game.row(), 1);
    assert_eq!(game.remaining_guesses(), 5);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.letter_statuses().get('t'), Some(LetterResult::Incorrect));
    assert_eq!(game.letter_statuses().get('r'), Some(LetterResult::Correct));
    assert_eq!(
        game.letter_statuses().get('c'),
        Some(LetterResult::PresentWrongPosition)
    );
    Ok(())
}

#[test]
fn guess_normalizes_case() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "CrAnE", GameConfig::default())?;

    let result = game.guess("cRaNe").unwrap();

    assert_eq!(result.guess(), "CRANE");
    assert!(result.is_correct());
    assert_eq!(game.secret(), "CRANE");
    assert_eq!(game.state(), GameState::Won);
    Ok(())
}

#[test]
fn correct_guess_wins_game() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;

    game.guess("cloud").unwrap();
    game.guess("rance").unwrap();
    let result = game.guess("crane").unwrap();
    assert!(result.is_correct());

    assert_eq!(game.state(), GameState::Won);
    assert!(game.is_over());
    assert_eq!(game.row(), 3);
    assert_eq!(game.guesses().len(), 3);
    assert!(game.progress()[3..].iter().all(|row| row.is_placeholder()));
    assert!(game
        .secret()
        .chars()
        .all(|letter| game.letter_statuses().get(letter) == Some(LetterResult::Correct)));
    Ok(())
}

#[test]
fn win_on_last_guess_is_not_a_loss() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default().with_max_guesses(2))?;

    game.guess("trace").unwrap();
    game.guess("crane").unwrap();

    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.remaining_guesses(), 0);
    Ok(())
}

#[test]
fn using_every_guess_loses_game() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;

    for guess in ["trace", "rance", "nacre", "cloud", "alloy"] {
        game.guess(guess).unwrap();
        assert_eq!(game.state(), GameState::InProgress);
    }
    game.guess("built").unwrap();

    assert_eq!(game.state(), GameState::Lost);
    assert!(game.is_over());
    assert_eq!(game.row(), DEFAULT_MAX_GUESSES);
    assert!(game.progress().iter().all(|row| !row.is_placeholder()));
    assert_eq!(game.guesses(), game.progress());
    Ok(())
}

#[test]
fn single_guess_game_is_lost_after_one_miss() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default().with_max_guesses(1))?;

    game.guess("lolly").unwrap();

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.progress().len(), 1);
    Ok(())
}

#[test]
fn repeated_guess_uses_another_row() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;

    game.guess("trace").unwrap();
    game.guess("TRACE").unwrap();

    assert_eq!(game.row(), 2);
    assert_eq!(game.progress()[0], game.progress()[1]);
    Ok(())
}

#[test]
fn invalid_guesses_are_rejected_without_changes() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;
    game.guess("cloud").unwrap();

    assert_rejected(&mut game, "", InvalidGuessReason::WrongLength);
    assert_rejected(&mut game, "cran", InvalidGuessReason::WrongLength);
    assert_rejected(&mut game, "cranes", InvalidGuessReason::WrongLength);
    assert_rejected(&mut game, "cr4ne", InvalidGuessReason::NonAlphabetic);
    assert_rejected(&mut game, "cra e", InvalidGuessReason::NonAlphabetic);
    assert_rejected(&mut game, "crané", InvalidGuessReason::NonAlphabetic);
    assert_rejected(&mut game, "zzzzz", InvalidGuessReason::NotInDictionary);

    assert_eq!(game.row(), 1);
    Ok(())
}

#[test]
fn invalid_guess_has_message() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;

    assert_matches!(
        game.guess("cran"),
        Err(error) if error.message() == "Guess must be 5 letters long"
    );
    assert_matches!(
        game.guess("zzzzz"),
        Err(error) if error.to_string() == "ZZZZZ is not in the word list"
    );
    Ok(())
}

#[test]
fn guess_after_game_over_is_rejected() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_secret(&bank, "crane", GameConfig::default())?;
    game.guess("crane").unwrap();

    assert_rejected(&mut game, "trace", InvalidGuessReason::GameOver);
    assert_eq!(game.state(), GameState::Won);
    Ok(())
}

#[test]
fn new_picks_secret_from_store() -> Result<(), WordleError> {
    let bank = create_word_bank();

    let game = Game::new(&bank, GameConfig::default())?;

    assert!(bank.contains(game.secret()));
    assert_eq!(game.state(), GameState::InProgress);
    Ok(())
}

#[test]
fn new_with_empty_store_fails() {
    let bank = WordBank::default();

    assert_matches!(
        Game::new(&bank, GameConfig::default()),
        Err(WordleError::EmptyWordBank)
    );
}

#[test]
fn with_secret_invalid_setup_fails() {
    let bank = create_word_bank();

    assert_matches!(
        Game::with_secret(&bank, "crane", GameConfig::default().with_max_guesses(0)),
        Err(WordleError::InvalidMaxGuesses(0))
    );
    assert_matches!(
        Game::with_secret(&bank, "", GameConfig::default()),
        Err(WordleError::EmptyWord)
    );
    assert_matches!(
        Game::with_secret(&bank, "cr4ne", GameConfig::default()),
        Err(WordleError::UnsupportedCharacter('4'))
    );
    assert_matches!(
        Game::with_secret(&bank, "crane", GameConfig::default().with_word_length(4)),
        Err(WordleError::WordLength(4))
    );
}

#[test]
fn with_secret_outside_store_fails() {
    let bank = create_word_bank();

    assert_matches!(
        Game::with_secret(&bank, "zebra", GameConfig::default()),
        Err(WordleError::NotFound)
    );
}

struct FixedStore {
    words: Vec<&'static str>,
}

impl WordStore for FixedStore {
    fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    fn pick_random(&self) -> Option<Arc<str>> {
        self.words.first().map(|word| Arc::from(*word))
    }
}

#[test]
fn game_works_with_any_word_store() -> Result<(), WordleError> {
    let store = FixedStore {
        words: vec!["moat", "boat"],
    };
    let mut game = Game::new(&store, GameConfig::default().with_word_length(4))?;
    assert_eq!(game.secret(), "MOAT");

    let result = game.guess("boat").unwrap();
    assert_eq!(
        result.results(),
        &[
            LetterResult::Incorrect,
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::Correct
        ]
    );
    game.guess("moat").unwrap();

    assert_eq!(game.state(), GameState::Won);
    Ok(())
}
