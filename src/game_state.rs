use rand::Rng;

use crate::dictionary::Dictionary;
use crate::distance::{Transform, compute_table, reconstruct_transforms};
use crate::error::{GameError, Result};
use crate::{debug_log, info_log};

/// What a participant does on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
}

/// Hints handed back after a wrong dictionary guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub guess: String,
    pub distance: usize,
    pub transforms: Vec<Transform>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
    Abandoned,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: String,
    pub guesses_used: usize,
    pub result: GameResult,
}

impl GameOutcome {
    pub fn won(&self) -> bool {
        self.result == GameResult::Won
    }
}

/// Seam between the game loop and whoever is playing: a person at the
/// console or the automated player.
pub trait GameInterface {
    /// Called once per game before the first guess.
    fn start_new_game(&mut self, dictionary: &Dictionary, max_guesses: usize);

    fn read_guess(&mut self) -> Result<UserAction>;

    /// Only called for wrong guesses that are dictionary words.
    fn receive_feedback(&mut self, feedback: &Feedback) -> Result<()>;

    fn display_welcome(&mut self);
    fn display_turn(&mut self, attempt: usize, max_guesses: usize);
    fn display_not_in_dictionary(&mut self, guess: &str);
    fn display_hints(&mut self, feedback: &Feedback);
    fn display_win(&mut self, guess: &str, guesses_used: usize);
    fn display_loss(&mut self, secret: &str);
}

/// Plays one game against `secret` until a win, an exit, or the guess budget
/// runs out.
pub fn play_game<I: GameInterface + ?Sized>(
    dictionary: &Dictionary,
    secret: &str,
    max_guesses: usize,
    interface: &mut I,
) -> Result<GameOutcome> {
    if max_guesses == 0 {
        return Err(GameError::InvalidGuessBudget);
    }
    if !dictionary.contains(secret) {
        return Err(GameError::SecretNotInDictionary(secret.to_string()));
    }

    interface.start_new_game(dictionary, max_guesses);
    interface.display_welcome();

    let mut guesses = 0;
    while guesses < max_guesses {
        interface.display_turn(guesses + 1, max_guesses);
        let guess = match interface.read_guess()? {
            UserAction::Guess(guess) => guess.trim().to_lowercase(),
            UserAction::Exit => {
                info_log!("play_game() - player left after {} guesses", guesses);
                return Ok(GameOutcome {
                    secret: secret.to_string(),
                    guesses_used: guesses,
                    result: GameResult::Abandoned,
                });
            }
        };
        guesses += 1;

        if !dictionary.contains(&guess) {
            interface.display_not_in_dictionary(&guess);
            continue;
        }

        let table = compute_table(&guess, secret);
        let distance = table.distance();
        if distance == 0 {
            interface.display_win(&guess, guesses);
            info_log!("play_game() - won in {} guesses", guesses);
            return Ok(GameOutcome {
                secret: secret.to_string(),
                guesses_used: guesses,
                result: GameResult::Won,
            });
        }

        let feedback = Feedback {
            transforms: reconstruct_transforms(&guess, secret, &table),
            guess,
            distance,
        };
        debug_log!("play_game() - feedback {:?}", feedback);
        interface.receive_feedback(&feedback)?;
        interface.display_hints(&feedback);
    }

    interface.display_loss(secret);
    info_log!("play_game() - lost, secret was '{}'", secret);
    Ok(GameOutcome {
        secret: secret.to_string(),
        guesses_used: guesses,
        result: GameResult::Lost,
    })
}

/// Owns the dictionary and the random source used to pick secrets.
pub struct DistleGame<R: Rng> {
    dictionary: Dictionary,
    rng: R,
}

impl<R: Rng> DistleGame<R> {
    pub fn new(dictionary: Dictionary, rng: R) -> Result<Self> {
        if dictionary.is_empty() {
            return Err(GameError::EmptyDictionary);
        }
        Ok(Self { dictionary, rng })
    }

    /// Starts a game with `secret`, or a random dictionary word when `None`.
    pub fn new_game<I: GameInterface + ?Sized>(
        &mut self,
        secret: Option<&str>,
        max_guesses: usize,
        interface: &mut I,
    ) -> Result<GameOutcome> {
        let secret = match secret {
            Some(word) => word.trim().to_lowercase(),
            None => self
                .dictionary
                .random_word(&mut self.rng)
                .ok_or(GameError::EmptyDictionary)?
                .to_string(),
        };
        debug_log!("DistleGame::new_game() - secret '{}'", secret);
        play_game(&self.dictionary, &secret, max_guesses, interface)
    }
}
