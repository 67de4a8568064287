use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_game::*;
use std::fs::File;
use std::io;
use std::io::{BufRead, Write};

const ANSI_RESET: &str = "\u{1b}[0m";

/// Simple program to play a Wordle game in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of valid words, with one word on each line. All words
    /// must have the same length.
    #[arg(short = 'f', long)]
    words_file: String,

    /// The number of guesses allowed in each game.
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed used to choose the objective words, so that games can be repeated.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play games against a random word from the words file, until you choose to stop.
    Play,
    /// Show how a guess scores against the given objective word.
    Check { objective: String, guess: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("Failed to open words file {}", args.words_file))?,
    );
    let word_bank = WordBank::from_reader(&mut words_reader)?;
    if word_bank.is_empty() {
        bail!("The words file {} has no words.", args.words_file);
    }
    info!(
        "Loaded {} words with {} letters from {}",
        word_bank.len(),
        word_bank.word_length(),
        args.words_file
    );

    match args.command {
        Command::Play => {
            let config = GameConfig::default()
                .with_word_length(word_bank.word_length())
                .with_max_guesses(args.max_guesses);
            let rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            play_games(&word_bank, config, rng)
        }
        Command::Check { objective, guess } => check_guess(&word_bank, &objective, &guess),
    }
}

fn play_games(word_bank: &WordBank, config: GameConfig, mut rng: StdRng) -> Result<()> {
    print_legend();
    let mut lines = io::stdin().lock().lines();

    loop {
        let secret = word_bank
            .pick_random_with(&mut rng)
            .context("No words to choose from")?;
        let mut game = Game::with_secret(word_bank, &secret, config)?;

        if !play_game(&mut game, &mut lines)? {
            println!();
            return Ok(());
        }
        println!("Good game! The word was {}.", game.secret());

        print!("Would you like to play again? yes/no ");
        io::stdout().flush()?;
        let answer = match lines.next() {
            Some(answer) => answer?,
            None => return Ok(()),
        };
        let answer = answer.trim();
        if !answer.eq_ignore_ascii_case("yes") && !answer.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

/// Reads guesses until the game is over. Returns `false` if the input ran out first.
fn play_game<I>(game: &mut Game<'_, WordBank>, lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print_progress(game);
    while !game.is_over() {
        print!(
            "Enter a guess ({} remaining): ",
            game.remaining_guesses()
        );
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(false),
        };

        match game.guess(line.trim()) {
            Ok(_) => print_progress(game),
            Err(error) => println!("{}", error),
        }
    }
    Ok(true)
}

fn check_guess(word_bank: &WordBank, objective: &str, guess: &str) -> Result<()> {
    if objective.chars().count() != guess.chars().count() {
        bail!(
            "The guess ({}) must have the same length as the objective ({}).",
            guess,
            objective
        );
    }
    if !word_bank.contains(guess) {
        println!("Note: {} is not in the word list.", guess.to_ascii_uppercase());
    }

    let result = get_result_for_guess(objective, guess);
    println!("{}", colorize(result.letters()));
    for (letter, letter_result) in result.letters() {
        println!("\t{}: {}", letter, letter_result.label());
    }
    Ok(())
}

fn print_legend() {
    for result in [
        LetterResult::Incorrect,
        LetterResult::Correct,
        LetterResult::PresentWrongPosition,
    ] {
        println!("{}{}{}", result.terminal_color(), result.label(), ANSI_RESET);
    }
    println!();
}

fn print_progress(game: &Game<'_, WordBank>) {
    for row in game.progress() {
        println!("{}", colorize(row.letters()));
    }
    println!();
    println!("{}", colorize(game.letter_statuses().iter()));
    println!();
}

fn colorize(letters: impl Iterator<Item = (char, LetterResult)>) -> String {
    letters
        .map(|(letter, result)| format!("{}{} {}", result.terminal_color(), letter, ANSI_RESET))
        .collect()
}
