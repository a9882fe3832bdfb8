//! A memoryless model that picks every move with the same probability.

use super::model::Model;
use crate::moves::{Move, NUM_MOVES};
use crate::Distribution;

#[derive(Default, Debug)]
pub struct UniformModel;

impl UniformModel {
    pub fn new() -> Self {
        Self
    }
}

impl Model for UniformModel {
    fn distribution(&self) -> Distribution {
        [1. / NUM_MOVES as f64; NUM_MOVES]
    }

    fn update(&mut self, _mv: Move) {}

    fn reset(&mut self) {}
}

#[test]
fn test_uniform_model() {
    let mut model = UniformModel::new();
    model.update(Move::Rock);
    model.update(Move::Rock);
    assert_eq!(model.distribution(), [1. / 3.; 3]);
    model.reset();
    assert_eq!(model.distribution(), [1. / 3.; 3]);
}
