//! The three-symbol alphabet of the game and a small set type over it.

use std::fmt;

/// The number of symbols in the alphabet.
pub const NUM_MOVES: usize = 3;

/// A single hand in the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Scissors,
    Paper,
}

impl Move {
    /// All of the moves, in canonical order.
    pub const ALL: [Move; NUM_MOVES] =
        [Move::Rock, Move::Scissors, Move::Paper];

    /// Returns the position of the move in the canonical order.
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Scissors => 1,
            Move::Paper => 2,
        }
    }

    /// Returns the move at position 'idx' in the canonical order.
    pub fn from_index(idx: usize) -> Option<Move> {
        Move::ALL.get(idx).copied()
    }

    /// Decode the single-letter name of a move. Both the 'g/c/p' letters and
    /// the 'r/s/p' letters are accepted.
    pub fn from_char(c: char) -> Option<Move> {
        match c.to_ascii_lowercase() {
            'g' | 'r' => Some(Move::Rock),
            'c' | 's' => Some(Move::Scissors),
            'p' => Some(Move::Paper),
            _ => None,
        }
    }

    /// Parse a single letter or the full name of a move.
    pub fn parse(text: &str) -> Option<Move> {
        let text = text.trim();
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Move::from_char(c);
        }
        match text.to_ascii_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "scissors" => Some(Move::Scissors),
            "paper" => Some(Move::Paper),
            _ => None,
        }
    }

    /// Returns the canonical letter of the move.
    pub fn to_char(self) -> char {
        match self {
            Move::Rock => 'g',
            Move::Scissors => 'c',
            Move::Paper => 'p',
        }
    }

    /// Returns true if 'self' wins against 'other'.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// Returns the move that wins against 'self'.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Scissors => Move::Rock,
            Move::Paper => Move::Scissors,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Scissors => "scissors",
            Move::Paper => "paper",
        };
        f.write_str(name)
    }
}

/// A set of moves, stored as a bitmask indexed by 'Move::index'.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct MoveSet {
    bits: u8,
}

impl MoveSet {
    pub const EMPTY: MoveSet = MoveSet { bits: 0 };
    pub const FULL: MoveSet = MoveSet {
        bits: (1 << NUM_MOVES) - 1,
    };

    pub fn insert(&mut self, mv: Move) {
        self.bits |= 1 << mv.index();
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.bits & (1 << mv.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the moves in 'self' that are not in 'other'.
    pub fn difference(&self, other: MoveSet) -> MoveSet {
        MoveSet {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the moves that are in both sets.
    pub fn intersection(&self, other: MoveSet) -> MoveSet {
        MoveSet {
            bits: self.bits & other.bits,
        }
    }

    /// Iterate over the members of the set in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Move> {
        let set = *self;
        Move::ALL.into_iter().filter(move |mv| set.contains(*mv))
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = MoveSet::EMPTY;
        for mv in iter {
            set.insert(mv);
        }
        set
    }
}

/// Parse a string of move letters, such as "gcpgc". Returns None if any of
/// the letters is not a move.
pub fn parse_sequence(text: &str) -> Option<Vec<Move>> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(Move::from_char)
        .collect()
}

#[test]
fn test_move_rules() {
    for mv in Move::ALL {
        assert!(mv.counter().beats(mv));
        assert!(!mv.beats(mv));
        assert!(!mv.beats(mv.counter()));
        assert_eq!(Move::from_index(mv.index()), Some(mv));
        assert_eq!(Move::from_char(mv.to_char()), Some(mv));
    }
    assert_eq!(Move::from_index(3), None);
}

#[test]
fn test_move_set() {
    let mut set = MoveSet::EMPTY;
    assert!(set.is_empty());
    set.insert(Move::Paper);
    set.insert(Move::Rock);
    set.insert(Move::Rock);
    assert_eq!(set.len(), 2);
    let items: Vec<Move> = set.iter().collect();
    assert_eq!(items, vec![Move::Rock, Move::Paper]);

    let rest = MoveSet::FULL.difference(set);
    assert_eq!(rest.iter().collect::<Vec<_>>(), vec![Move::Scissors]);
    assert!(rest.intersection(set).is_empty());
    assert_eq!(MoveSet::FULL.len(), NUM_MOVES);
}
