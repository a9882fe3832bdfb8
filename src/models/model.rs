use crate::moves::Move;
use crate::utils::sampling;
use crate::Distribution;
use rand::Rng;

/// A trait that defines the interface for making predictions.
pub trait Model {
    /// Return the probability of each possible next move, using the internal
    /// state.
    #[must_use]
    fn distribution(&self) -> Distribution;

    /// Update the internal state with the observed move 'mv'.
    fn update(&mut self, mv: Move);

    /// Forget everything that was observed.
    fn reset(&mut self);

    /// Sample the next move from the distribution, using the random source
    /// 'rng'.
    fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        sampling::draw(&self.distribution(), rng)
    }
}
