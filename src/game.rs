//! The rules of the game and the score keeping of a session.

use crate::moves::Move;

/// The result of a single round, from the point of view of the first hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// Decide the round between the hand 'mine' and the hand 'theirs'.
pub fn judge(mine: Move, theirs: Move) -> Outcome {
    if mine == theirs {
        Outcome::Draw
    } else if mine.beats(theirs) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Counts the outcomes of the rounds that were played.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Returns the number of rounds that were played.
    pub fn matches(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    /// Returns the fraction of the rounds that were won, or None if no round
    /// was played.
    pub fn win_rate(&self) -> Option<f64> {
        let matches = self.matches();
        if matches == 0 {
            return None;
        }
        Some(self.wins as f64 / matches as f64)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
