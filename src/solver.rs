use rand::Rng;
use rand::seq::SliceRandom;

use crate::dictionary::Dictionary;
use crate::distance::{Transform, compute_table, reconstruct_transforms};
use crate::error::SolverError;
use crate::{debug_log, info_log};

/// Keeps the candidates that would have produced exactly `transforms` had
/// they been the secret behind `guess`.
pub fn filter_candidates(
    candidates: &[String],
    guess: &str,
    distance: usize,
    transforms: &[Transform],
) -> Vec<String> {
    candidates
        .iter()
        .filter(|word| {
            let table = compute_table(guess, word);
            // One tag per unit of cost, so a distance mismatch can never match.
            table.distance() == distance
                && reconstruct_transforms(guess, word, &table) == transforms
        })
        .cloned()
        .collect()
}

#[derive(Debug)]
enum PlayerState {
    Uninitialized,
    Active {
        candidates: Vec<String>,
        previous_guess: Option<String>,
        max_guesses: usize,
    },
}

/// Automated player that narrows a private copy of the dictionary using the
/// transform lists it receives as feedback.
///
/// Every guess is a uniform draw from the remaining candidates using the
/// injected random source; seed it for reproducible games.
#[derive(Debug)]
pub struct DistlePlayer<R: Rng> {
    rng: R,
    state: PlayerState,
}

impl<R: Rng> DistlePlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            state: PlayerState::Uninitialized,
        }
    }

    pub fn start_new_game(&mut self, dictionary: &Dictionary, max_guesses: usize) {
        info_log!(
            "DistlePlayer::start_new_game() - {} words, {} guesses",
            dictionary.len(),
            max_guesses
        );
        self.state = PlayerState::Active {
            candidates: dictionary.to_vec(),
            previous_guess: None,
            max_guesses,
        };
    }

    pub fn make_guess(&mut self) -> Result<String, SolverError> {
        let PlayerState::Active { candidates, .. } = &self.state else {
            return Err(SolverError::NotStarted);
        };
        let guess = candidates
            .choose(&mut self.rng)
            .ok_or(SolverError::NoCandidatesRemaining)?;
        debug_log!(
            "DistlePlayer::make_guess() - picked '{}' from {} candidates",
            guess,
            candidates.len()
        );
        Ok(guess.clone())
    }

    pub fn apply_feedback(
        &mut self,
        guess: &str,
        distance: usize,
        transforms: &[Transform],
    ) -> Result<(), SolverError> {
        let PlayerState::Active {
            candidates,
            previous_guess,
            ..
        } = &mut self.state
        else {
            return Err(SolverError::NotStarted);
        };

        let retained = filter_candidates(candidates, guess, distance, transforms);
        debug_log!(
            "DistlePlayer::apply_feedback() - '{}' kept {} of {} candidates",
            guess,
            retained.len(),
            candidates.len()
        );
        *candidates = retained;
        *previous_guess = Some(guess.to_string());
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PlayerState::Active { .. })
    }

    /// Remaining candidates; empty before the first game.
    pub fn candidates(&self) -> &[String] {
        match &self.state {
            PlayerState::Active { candidates, .. } => candidates,
            PlayerState::Uninitialized => &[],
        }
    }

    pub fn previous_guess(&self) -> Option<&str> {
        match &self.state {
            PlayerState::Active { previous_guess, .. } => previous_guess.as_deref(),
            PlayerState::Uninitialized => None,
        }
    }

    pub fn max_guesses(&self) -> Option<usize> {
        match self.state {
            PlayerState::Active { max_guesses, .. } => Some(max_guesses),
            PlayerState::Uninitialized => None,
        }
    }
}
