//! This module contains models that predict the next move in a sequence of
//! moves.

pub mod model;
pub mod ppm;
pub mod trie;
pub mod uniform;
