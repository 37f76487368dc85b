/*
 * emolib - trie module
 *
 * This file is part of emolib.
 *
 * emolib is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * emolib is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with emolib. If not, see <http://www.gnu.org/licenses/>.
 */

/*!
 * A prefix trie over the scalars of every known emoji sequence.
 *
 * Nodes live in one arena [`Vec`] and point at each other by index, so the
 * whole structure is a pair of flat allocations instead of a box per node.
 * Scans drive a [`TrieWalker`] one scalar at a time and keep the last
 * complete match they saw, which is what makes a joined family sequence win
 * over the single person emoji it starts with.
 */

use smallvec::SmallVec;

/// Outcome of matching a scalar sequence against the trie.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Matches {
    /// The sequence is a complete emoji.
    Exactly,
    /// The sequence is a proper prefix of at least one emoji.
    Possibly,
    /// No emoji starts with the sequence.
    Impossible,
}

impl Matches {
    #[inline]
    pub fn is_exact(&self) -> bool {
        *self == Matches::Exactly
    }

    #[inline]
    pub fn is_impossible(&self) -> bool {
        *self == Matches::Impossible
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    /// Outgoing edges, sorted by scalar. Most nodes have one or two.
    children: SmallVec<[(char, u32); 2]>,
    /// Record id if the path from the root to this node is a complete emoji.
    emoji: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct EmojiTrie {
    nodes: Vec<Node>,
}

impl Default for EmojiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiTrie {
    pub fn new() -> Self {
        EmojiTrie {
            nodes: vec![Node::default()],
        }
    }

    /// Inserts `unicode` mapping to record id `emoji`. A duplicate sequence
    /// overwrites the previous id, last insertion wins.
    pub fn insert(&mut self, unicode: &str, emoji: u32) {
        let mut cur = 0usize;
        for c in unicode.chars() {
            cur = match self.nodes[cur]
                .children
                .binary_search_by_key(&c, |&(ch, _)| ch)
            {
                Ok(i) => self.nodes[cur].children[i].1 as usize,
                Err(i) => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    self.nodes[cur].children.insert(i, (c, next));
                    next as usize
                }
            };
        }
        if let Some(prev) = self.nodes[cur].emoji.replace(emoji) {
            if prev != emoji {
                log::debug!(
                    "trie: sequence {:?} redefined, record {} replaces {}",
                    unicode,
                    emoji,
                    prev
                );
            }
        }
    }

    /// Matches a whole sequence. The empty sequence counts as a prefix.
    pub fn matches(&self, sequence: &str) -> Matches {
        let mut walker = self.walker();
        let mut last = Matches::Possibly;
        for c in sequence.chars() {
            last = walker.step(c);
            if last.is_impossible() {
                break;
            }
        }
        last
    }

    /// Exact lookup. `Some(id)` only when `unicode` is a complete entry,
    /// never for a prefix.
    pub fn lookup(&self, unicode: &str) -> Option<u32> {
        let mut walker = self.walker();
        for c in unicode.chars() {
            if walker.step(c).is_impossible() {
                return None;
            }
        }
        walker.emoji()
    }

    /// Number of nodes in the arena, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn walker(&self) -> TrieWalker<'_> {
        TrieWalker {
            trie: self,
            node: Some(0),
        }
    }
}

/// A resumable cursor into an [`EmojiTrie`].
///
/// Feeding it scalars one by one costs one edge lookup each, so rescanning
/// a candidate from every start position is avoided. Once a step reports
/// [`Matches::Impossible`] the walker stays dead.
#[derive(Debug, Clone)]
pub struct TrieWalker<'a> {
    trie: &'a EmojiTrie,
    node: Option<u32>,
}

impl TrieWalker<'_> {
    pub fn step(&mut self, c: char) -> Matches {
        let cur = match self.node {
            Some(cur) => cur as usize,
            None => return Matches::Impossible,
        };
        match self.trie.nodes[cur]
            .children
            .binary_search_by_key(&c, |&(ch, _)| ch)
        {
            Ok(i) => {
                let next = self.trie.nodes[cur].children[i].1;
                self.node = Some(next);
                if self.trie.nodes[next as usize].emoji.is_some() {
                    Matches::Exactly
                } else {
                    Matches::Possibly
                }
            }
            Err(_) => {
                self.node = None;
                Matches::Impossible
            }
        }
    }

    /// Record id at the current position, if the scalars walked so far form
    /// a complete emoji.
    pub fn emoji(&self) -> Option<u32> {
        self.node
            .and_then(|n| self.trie.nodes[n as usize].emoji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmojiTrie {
        let mut trie = EmojiTrie::new();
        trie.insert("\u{1F600}", 0);
        trie.insert("\u{1F468}", 1);
        trie.insert("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}", 2);
        trie.insert("\u{2764}\u{FE0F}", 3);
        trie
    }

    #[test]
    fn test_matches() {
        let trie = sample();
        assert_eq!(trie.matches("\u{1F600}"), Matches::Exactly);
        assert_eq!(trie.matches("\u{1F468}"), Matches::Exactly);
        assert_eq!(trie.matches("\u{1F468}\u{200D}"), Matches::Possibly);
        assert_eq!(
            trie.matches("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}"),
            Matches::Exactly
        );
        assert_eq!(trie.matches("\u{2764}"), Matches::Possibly);
        assert_eq!(trie.matches("\u{2764}\u{FE0F}"), Matches::Exactly);
        assert_eq!(trie.matches("a"), Matches::Impossible);
        assert_eq!(trie.matches("\u{1F600}x"), Matches::Impossible);
        assert_eq!(trie.matches(""), Matches::Possibly);
        // Shared prefixes share nodes: the family sequence reuses the man
        // node, so four entries need eight nodes plus the root.
        assert_eq!(trie.node_count(), 9);
        assert_eq!(EmojiTrie::new().node_count(), 1);
    }

    #[test]
    fn test_walker_longest_match() {
        let trie = sample();
        let mut walker = trie.walker();
        // The single man emoji is a complete match that a longer family
        // sequence extends.
        assert_eq!(walker.step('\u{1F468}'), Matches::Exactly);
        assert_eq!(walker.emoji(), Some(1));
        assert_eq!(walker.step('\u{200D}'), Matches::Possibly);
        assert_eq!(walker.emoji(), None);
        assert_eq!(walker.step('\u{1F469}'), Matches::Possibly);
        assert_eq!(walker.step('\u{200D}'), Matches::Possibly);
        assert_eq!(walker.step('\u{1F466}'), Matches::Exactly);
        assert_eq!(walker.emoji(), Some(2));
    }

    #[test]
    fn test_lookup() {
        let trie = sample();
        assert_eq!(trie.lookup("\u{1F600}"), Some(0));
        assert_eq!(
            trie.lookup("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}"),
            Some(2)
        );
        // Prefixes and extensions are not exact entries.
        assert_eq!(trie.lookup("\u{2764}"), None);
        assert_eq!(trie.lookup("\u{1F600}\u{1F600}"), None);
        assert_eq!(trie.lookup(""), None);
    }

    #[test]
    fn test_walker_stays_dead() {
        let trie = sample();
        let mut walker = trie.walker();
        assert_eq!(walker.step('x'), Matches::Impossible);
        // A scalar that would match from the root does not revive it.
        assert_eq!(walker.step('\u{1F600}'), Matches::Impossible);
        assert_eq!(walker.emoji(), None);
    }

    #[test]
    fn test_duplicate_insert_overwrites() {
        let mut trie = EmojiTrie::new();
        trie.insert("\u{1F600}", 7);
        trie.insert("\u{1F600}", 9);
        let mut walker = trie.walker();
        walker.step('\u{1F600}');
        assert_eq!(walker.emoji(), Some(9));
    }
}
