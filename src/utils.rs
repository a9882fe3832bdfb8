//! A collection of utilities for handling probability distributions over
//! moves.

/// Helpers for inspecting distributions.
pub mod distribution {
    use crate::moves::Move;
    use crate::Distribution;

    /// The tolerance used when checking that probabilities sum to one.
    pub const EPSILON: f64 = 1e-9;

    /// Returns the sum of all of the probabilities in 'dist'.
    pub fn total(dist: &Distribution) -> f64 {
        dist.iter().sum()
    }

    /// Returns true if 'dist' has no negative entries and sums to one.
    pub fn is_normalized(dist: &Distribution) -> bool {
        dist.iter().all(|p| *p >= 0.) && (total(dist) - 1.).abs() < EPSILON
    }

    /// Returns the move with the highest probability. Ties are broken by the
    /// canonical order.
    pub fn most_likely(dist: &Distribution) -> Move {
        let mut best = 0;
        for (i, p) in dist.iter().enumerate() {
            if *p > dist[best] {
                best = i;
            }
        }
        Move::from_index(best).unwrap_or(Move::ALL[0])
    }
}

/// Selects moves by partitioning the unit interval.
pub mod sampling {
    use crate::moves::Move;
    use crate::Distribution;
    use rand::Rng;
    use rand_distr::{Distribution as _, Uniform};

    /// Partition [0, 1) into consecutive intervals, one per move in canonical
    /// order and sized by the move probability, and return the move whose
    /// interval contains 'r'.
    pub fn select(dist: &Distribution, r: f64) -> Move {
        debug_assert!((0. ..1.).contains(&r), "Value out of range");
        let mut bound = 0.;
        for mv in Move::ALL {
            bound += dist[mv.index()];
            if r < bound {
                return mv;
            }
        }

        // Rounding may leave a gap at the top of the interval. Assign it to
        // the last move that can be selected.
        Move::ALL
            .into_iter()
            .rev()
            .find(|mv| dist[mv.index()] > 0.)
            .unwrap_or(Move::ALL[Move::ALL.len() - 1])
    }

    /// Draw a single value from 'rng' and select a move from 'dist'.
    pub fn draw<R: Rng + ?Sized>(dist: &Distribution, rng: &mut R) -> Move {
        let r = Uniform::new(0., 1.).sample(rng);
        select(dist, r)
    }
}
