//! Implementation of the Prediction by Partial Matching (PPM) model.
//! Counts of recent contexts are kept in a 'ContextTrie'. The longest
//! context is consulted first, and moves that never followed it escape to
//! successively shorter contexts, down to the uniform distribution.
//! For details see <https://arxiv.org/pdf/1107.0051.pdf>, section 3.2.

use super::model::Model;
use super::trie::ContextTrie;
use crate::moves::{Move, MoveSet, NUM_MOVES};
use crate::utils::{distribution, sampling};
use crate::Distribution;
use rand::Rng;

/// The default length of the longest context.
pub const DEFAULT_ORDER: usize = 3;

pub struct Predictor {
    /// The length of the longest window that is recorded.
    order: usize,
    /// Every move that was observed, oldest first.
    history: Vec<Move>,
    /// Counts of the recent windows of the history.
    trie: ContextTrie,
}

impl Predictor {
    pub fn new(order: usize) -> Self {
        assert!(order > 0, "The order must be positive");
        Self {
            order,
            history: Vec::new(),
            trie: ContextTrie::new(),
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn trie(&self) -> &ContextTrie {
        &self.trie
    }

    /// Append 'mv' to the history and record the last 'order' moves.
    pub fn observe(&mut self, mv: Move) {
        self.history.push(mv);
        let len = self.history.len();
        let window = &self.history[len - len.min(self.order)..];
        self.trie.insert(window);
    }

    /// Wipe the history and the learned counts.
    pub fn reset(&mut self) {
        log::debug!("Resetting after {} moves", self.history.len());
        self.history.clear();
        self.trie = ContextTrie::new();
    }

    /// Returns the probability of each of the moves in 'candidates' to follow
    /// 'context' (most recent move last). Moves outside of 'candidates' get
    /// zero probability.
    pub fn probability(
        &self,
        context: &[Move],
        candidates: MoveSet,
    ) -> Distribution {
        // No window longer than 'order' is recorded, so a context of 'order'
        // moves or more has no recorded extension and escapes with mass one.
        let skip = context.len().saturating_sub(self.order);
        let mut probs = [0.; NUM_MOVES];
        self.probability_part(&context[skip..], candidates, 1., &mut probs);
        probs
    }

    /// Distribute 'mass' over 'candidates' given 'context', and write the
    /// result into 'probs'.
    fn probability_part(
        &self,
        context: &[Move],
        candidates: MoveSet,
        mass: f64,
        probs: &mut Distribution,
    ) {
        assert!(!candidates.is_empty(), "No candidates to predict");

        if context.is_empty() {
            let share = mass / candidates.len() as f64;
            for mv in candidates.iter() {
                probs[mv.index()] = share;
            }
            return;
        }

        // Split the candidates into moves that followed the context and moves
        // that did not. Each unseen move adds one to the total as its escape
        // weight.
        let mut counts = self.trie.extension_counts(context);
        let mut seen = MoveSet::EMPTY;
        for mv in Move::ALL {
            if candidates.contains(mv) && counts[mv.index()] > 0 {
                seen.insert(mv);
            } else {
                counts[mv.index()] = 0;
            }
        }
        let unseen = candidates.difference(seen);

        let total = counts.iter().sum::<u64>() + unseen.len() as u64;
        assert!(total > 0, "Empty total weight");
        let total = total as f64;

        for mv in seen.iter() {
            probs[mv.index()] = mass * counts[mv.index()] as f64 / total;
        }

        if unseen.is_empty() {
            return;
        }

        // Escape to the context without its oldest move.
        let escape = unseen.len() as f64 / total;
        self.probability_part(&context[1..], unseen, mass * escape, probs);
    }

    /// Returns the distribution of the next move, using at most the last
    /// 'max_order' moves of the history as context.
    pub fn distribution_at(&self, max_order: usize) -> Distribution {
        let len = self.history.len();
        let context = &self.history[len - len.min(max_order)..];
        let dist = self.probability(context, MoveSet::FULL);
        debug_assert!(distribution::is_normalized(&dist));
        dist
    }

    /// Sample the next move from the context of the last 'max_order' moves,
    /// using the random source 'rng'. This does not modify the model.
    pub fn predict_with<R: Rng + ?Sized>(
        &self,
        max_order: usize,
        rng: &mut R,
    ) -> Move {
        let dist = self.distribution_at(max_order);
        let mv = sampling::draw(&dist, rng);
        log::trace!("Distribution {:?} selected {}", dist, mv);
        mv
    }

    /// Sample the next move at the full order, using the thread-local random
    /// number generator.
    pub fn predict(&self) -> Move {
        self.predict_with(self.order, &mut rand::thread_rng())
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}

impl Model for Predictor {
    fn distribution(&self) -> Distribution {
        self.distribution_at(self.order)
    }

    fn update(&mut self, mv: Move) {
        self.observe(mv);
    }

    fn reset(&mut self) {
        Predictor::reset(self);
    }
}

#[test]
fn test_long_context_is_clamped() {
    let mut predictor = Predictor::new(3);
    for _ in 0..100_000 {
        for mv in Move::ALL {
            predictor.observe(mv);
        }
    }
    let full = predictor.distribution_at(3);
    assert_eq!(predictor.distribution_at(usize::MAX), full);
    assert_eq!(predictor.distribution_at(1_000), full);
    assert_eq!(
        predictor.probability(predictor.history(), MoveSet::FULL),
        full
    );
    let mv = predictor.predict_with(usize::MAX, &mut rand::thread_rng());
    assert!(Move::ALL.contains(&mv));
}

#[test]
fn test_escape_to_uniform() {
    let mut predictor = Predictor::new(3);
    predictor.observe(Move::Rock);
    predictor.observe(Move::Rock);
    predictor.observe(Move::Rock);
    predictor.observe(Move::Rock);

    // Only rock was ever observed: the order-1 context gives rock 3/5, and
    // the remaining 2/5 escape to the uniform split of the other two moves.
    let probs = predictor.probability(&[Move::Rock], MoveSet::FULL);
    assert!((probs[0] - 3. / 5.).abs() < 1e-12);
    assert!((probs[1] - 1. / 5.).abs() < 1e-12);
    assert!((probs[2] - 1. / 5.).abs() < 1e-12);
}
