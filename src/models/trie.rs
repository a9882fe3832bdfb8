//! A context tree that counts every suffix of the move history.
//! Paths are keyed by the suffix read backwards, so the first edge from the
//! root is the most recent move and deeper edges reach further into the past.

use crate::moves::{Move, MoveSet, NUM_MOVES};

/// A node in the context tree. The count records how many times the path
/// that leads to this node occurred in the history.
#[derive(Default, Debug)]
struct Node {
    count: u64,
    children: [Option<Box<Node>>; NUM_MOVES],
}

impl Node {
    /// Increment this node and every node along the path described by
    /// 'window', consuming the window from its end.
    fn insert(&mut self, window: &[Move]) {
        self.count += 1;
        if let Some((last, rest)) = window.split_last() {
            let slot = &mut self.children[last.index()];
            slot.get_or_insert_with(Default::default).insert(rest);
        }
    }

    fn child(&self, mv: Move) -> Option<&Node> {
        self.children[mv.index()].as_deref()
    }

    /// Returns the count of the node reached by following 'context' from
    /// its end, or zero if the path does not exist.
    fn lookup(&self, context: &[Move]) -> u64 {
        let mut node = self;
        for mv in context.iter().rev() {
            match node.child(*mv) {
                Some(next) => node = next,
                None => return 0,
            }
        }
        node.count
    }

    /// Returns the number of nodes in the subtree, including this one.
    fn size(&self) -> usize {
        let children = self.children.iter().flatten();
        1 + children.map(|c| c.size()).sum::<usize>()
    }

    /// Returns the length of the longest path below this node.
    fn depth(&self) -> usize {
        let below = self.children.iter().flatten().map(|c| c.depth() + 1);
        below.max().unwrap_or(0)
    }
}

/// Stores the occurrence counts of every contiguous window of the history
/// that was inserted.
#[derive(Default, Debug)]
pub struct ContextTrie {
    root: Node,
}

impl ContextTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the window 'window' (most recent move last). Every trailing
    /// sub-window of 'window' is recorded as well, because each node along
    /// the path is incremented.
    pub fn insert(&mut self, window: &[Move]) {
        self.root.insert(window);
    }

    /// Returns the number of times 'context' (most recent move last) was
    /// recorded. The empty context returns the number of insertions.
    pub fn count(&self, context: &[Move]) -> u64 {
        self.root.lookup(context)
    }

    /// Returns the count of 'context' followed by each of the moves, indexed
    /// by 'Move::index'. The extending move is the first edge from the root.
    pub(crate) fn extension_counts(
        &self,
        context: &[Move],
    ) -> [u64; NUM_MOVES] {
        let mut counts = [0; NUM_MOVES];
        for mv in Move::ALL {
            if let Some(node) = self.root.child(mv) {
                counts[mv.index()] = node.lookup(context);
            }
        }
        counts
    }

    /// Returns the moves that were observed immediately after 'context'.
    pub fn followers(&self, context: &[Move]) -> MoveSet {
        let counts = self.extension_counts(context);
        Move::ALL
            .into_iter()
            .filter(|mv| counts[mv.index()] > 0)
            .collect()
    }

    /// Returns the number of nodes in the tree, including the root.
    pub fn num_nodes(&self) -> usize {
        self.root.size()
    }

    /// Returns the length of the longest context stored in the tree.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

#[test]
fn test_trie_paths() {
    use Move::*;
    let mut trie = ContextTrie::new();
    assert_eq!(trie.count(&[]), 0);
    assert_eq!(trie.num_nodes(), 1);

    trie.insert(&[Rock, Paper]);
    // The root, 'paper', and 'rock' before 'paper'.
    assert_eq!(trie.num_nodes(), 3);
    assert_eq!(trie.depth(), 2);
    assert_eq!(trie.count(&[]), 1);
    assert_eq!(trie.count(&[Paper]), 1);
    assert_eq!(trie.count(&[Rock]), 0);
    assert_eq!(trie.count(&[Rock, Paper]), 1);
    assert_eq!(trie.count(&[Scissors, Rock, Paper]), 0);

    trie.insert(&[]);
    assert_eq!(trie.count(&[]), 2);
    assert_eq!(trie.num_nodes(), 3);
}

#[test]
fn test_extension_counts() {
    use Move::*;
    let mut trie = ContextTrie::new();
    let windows: [&[Move]; 3] = [&[Rock], &[Rock, Paper], &[Rock, Paper, Rock]];
    for window in windows {
        trie.insert(window);
    }

    // Each entry equals the count of the context extended by that move.
    let contexts: [&[Move]; 5] =
        [&[], &[Rock], &[Paper], &[Rock, Paper], &[Scissors]];
    for context in contexts {
        let counts = trie.extension_counts(context);
        for mv in Move::ALL {
            let mut extended = context.to_vec();
            extended.push(mv);
            assert_eq!(counts[mv.index()], trie.count(&extended));
        }
    }
    assert_eq!(trie.extension_counts(&[Rock]), [0, 0, 1]);
    assert_eq!(trie.extension_counts(&[Paper]), [1, 0, 0]);
}
