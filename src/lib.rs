// Library interface for distle
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod solver;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, resolve_dictionary};
pub use distance::{
    DistanceTable, Transform, compute_table, edit_distance, reconstruct_transforms,
    transformation_list,
};
pub use error::{GameError, SolverError};
pub use game_state::{DistleGame, Feedback, GameInterface, GameOutcome, GameResult, play_game};
pub use solver::{DistlePlayer, filter_candidates};
