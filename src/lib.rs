pub mod game;
pub mod models;
pub mod moves;
pub mod utils;

pub use models::model::Model;
pub use models::ppm::Predictor;
pub use models::trie::ContextTrie;
pub use moves::{Move, MoveSet, NUM_MOVES};

/// A probability for each move, indexed by 'Move::index'.
pub type Distribution = [f64; NUM_MOVES];
