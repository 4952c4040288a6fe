use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::dictionary::Dictionary;
use crate::distance::format_transforms;
use crate::error::Result;
use crate::game_state::{Feedback, GameInterface, UserAction};
use crate::solver::DistlePlayer;

pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Distle: guess the secret word from edit-distance hints
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<PathBuf>,

    /// Seed for secret selection and the automated player
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
    pub max_guesses: usize,

    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    pub games: usize,

    /// Let the automated player guess instead of reading from stdin
    #[arg(long)]
    pub ai: bool,

    /// Play against this secret word instead of a random one
    #[arg(short = 'w', long)]
    pub secret: Option<String>,

    /// Print every turn (always on for human play)
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn display_welcome() {
    println!("=================================");
    println!("=       Welcome to Distle       =");
    println!("=================================");
}

pub fn display_turn(attempt: usize, max_guesses: usize) {
    println!("[G] Guess {attempt} / {max_guesses}");
}

pub fn display_ai_guess(guess: &str) {
    println!("  > {guess}");
}

pub fn display_not_in_dictionary(guess: &str) {
    println!("  [X] '{guess}' is not in the dictionary, turn lost");
}

pub fn display_hints(feedback: &Feedback) {
    println!("  [~] Not quite, here are some hints:");
    println!("    [!] Edit Distance: {}", feedback.distance);
    println!(
        "    [!] Transforms (top-down): {}",
        format_transforms(&feedback.transforms)
    );
}

pub fn display_win(guesses_used: usize) {
    println!("[W] You guessed correctly in {guesses_used}, congratulations!");
}

pub fn display_loss(secret: &str) {
    println!("[L] Out of guesses. The correct answer: {secret}");
}

pub fn display_summary(won: usize, played: usize) {
    println!("Won {won} / {played} games");
}

/// Human player reading one guess per line.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn start_new_game(&mut self, dictionary: &Dictionary, max_guesses: usize) {
        println!(
            "Loaded {} words. You have {max_guesses} guesses ('exit' to give up).",
            dictionary.len()
        );
    }

    fn read_guess(&mut self) -> Result<UserAction> {
        print!("  > ");
        io::stdout().flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(UserAction::Exit);
        }
        let input = input.trim().to_lowercase();
        if input == "exit" {
            return Ok(UserAction::Exit);
        }
        Ok(UserAction::Guess(input))
    }

    fn receive_feedback(&mut self, _feedback: &Feedback) -> Result<()> {
        Ok(())
    }

    fn display_welcome(&mut self) {
        display_welcome();
    }

    fn display_turn(&mut self, attempt: usize, max_guesses: usize) {
        display_turn(attempt, max_guesses);
    }

    fn display_not_in_dictionary(&mut self, guess: &str) {
        display_not_in_dictionary(guess);
    }

    fn display_hints(&mut self, feedback: &Feedback) {
        display_hints(feedback);
    }

    fn display_win(&mut self, _guess: &str, guesses_used: usize) {
        display_win(guesses_used);
    }

    fn display_loss(&mut self, secret: &str) {
        display_loss(secret);
    }
}

/// Automated player; prints only when verbose.
pub struct AiInterface<R: Rng> {
    player: DistlePlayer<R>,
    verbose: bool,
}

impl<R: Rng> AiInterface<R> {
    pub fn new(player: DistlePlayer<R>, verbose: bool) -> Self {
        Self { player, verbose }
    }

    pub fn player(&self) -> &DistlePlayer<R> {
        &self.player
    }
}

impl<R: Rng> GameInterface for AiInterface<R> {
    fn start_new_game(&mut self, dictionary: &Dictionary, max_guesses: usize) {
        self.player.start_new_game(dictionary, max_guesses);
    }

    fn read_guess(&mut self) -> Result<UserAction> {
        let guess = self.player.make_guess()?;
        if self.verbose {
            display_ai_guess(&guess);
        }
        Ok(UserAction::Guess(guess))
    }

    fn receive_feedback(&mut self, feedback: &Feedback) -> Result<()> {
        self.player
            .apply_feedback(&feedback.guess, feedback.distance, &feedback.transforms)?;
        Ok(())
    }

    fn display_welcome(&mut self) {
        if self.verbose {
            display_welcome();
        }
    }

    fn display_turn(&mut self, attempt: usize, max_guesses: usize) {
        if self.verbose {
            display_turn(attempt, max_guesses);
        }
    }

    fn display_not_in_dictionary(&mut self, guess: &str) {
        if self.verbose {
            display_not_in_dictionary(guess);
        }
    }

    fn display_hints(&mut self, feedback: &Feedback) {
        if self.verbose {
            display_hints(feedback);
        }
    }

    fn display_win(&mut self, _guess: &str, guesses_used: usize) {
        if self.verbose {
            display_win(guesses_used);
        }
    }

    fn display_loss(&mut self, secret: &str) {
        if self.verbose {
            display_loss(secret);
        }
    }
}
