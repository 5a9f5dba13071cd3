//! Depth-first composition of the trie and the Levenshtein automaton.
//!
//! This is where the two halves of the system meet: the trie supplies
//! edges to walk, the automaton decides which edges are still worth
//! walking, and a stack-based DFS threads one state per open branch
//! until the result cap or the stack is exhausted.

use crate::levenshtein::State;
use crate::trie::{NodeId, Trie};

/// What happens once an accepting node has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Report the match, then keep descending from this frame under
    /// automaton guidance like any other open branch — only an
    /// invalid transition prunes a child, not the match itself.
    Stop,
    /// Report the match, then unconditionally sweep every stored
    /// descendant into the results, without further automaton
    /// guidance — the "suffix expansion" semantics.
    DescendAll,
}

/// Runs the fuzzy search driver from `start`, matching `tail` within
/// edit distance `d`, collecting up to `n` `(key, value)` pairs in
/// traversal order.
pub fn fuzzy_search<'a, V>(
    trie: &'a Trie<V>,
    start: NodeId,
    tail: &str,
    d: usize,
    n: usize,
    policy: Policy,
) -> Vec<(String, &'a V)> {
    let query: Vec<char> = tail.chars().collect();
    let mut results: Vec<(String, &V)> = Vec::new();

    if n == 0 {
        return results;
    }

    let mut stack = vec![(start, State::initial(d))];

    while let Some((node, state)) = stack.pop() {
        if results.len() >= n {
            break;
        }

        let accepted = trie
            .entry_at(node)
            .filter(|_| state.accepts(query.len(), d))
            .map(|(key, value)| (key.to_string(), value));

        if let Some((key, value)) = accepted {
            results.push((key, value));
            if results.len() >= n {
                break;
            }
            if policy == Policy::DescendAll {
                subtree_sweep(trie, node, n, &mut results);
                continue;
            }
        }

        for (c, child) in trie.children(node) {
            if let Some(next) = state.transition(&query, c, d) {
                stack.push((child, next));
            }
        }
    }

    results
}

/// Unconditionally collects every stored entry beneath `node`'s
/// children (not `node` itself, whose entry the caller has already
/// appended), stopping once `results` reaches `n`.
fn subtree_sweep<'a, V>(
    trie: &'a Trie<V>,
    node: NodeId,
    n: usize,
    results: &mut Vec<(String, &'a V)>,
) {
    let mut stack: Vec<NodeId> = trie.children(node).map(|(_, child)| child).collect();

    while let Some(current) = stack.pop() {
        if results.len() >= n {
            return;
        }
        if let Some((key, value)) = trie.entry_at(current) {
            results.push((key.to_string(), value));
            if results.len() >= n {
                return;
            }
        }
        stack.extend(trie.children(current).map(|(_, child)| child));
    }
}
