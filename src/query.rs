//! The public facade: a trie plus the four fuzzy query variants.
//!
//! Each variant is a thin adapter over [`crate::search::fuzzy_search`]:
//! it picks a starting node (root, or the end of an exact prefix walk)
//! and a post-match [`Policy`], nothing more.

use crate::error::TrieError;
use crate::key;
use crate::levenshtein::MAX_D;
use crate::search::{fuzzy_search, Policy};
use crate::trie::Trie;

/// An associative index supporting exact and Levenshtein-bounded fuzzy
/// lookup over string keys.
pub struct FuzzyIndex<V> {
    trie: Trie<V>,
}

impl<V> Default for FuzzyIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FuzzyIndex<V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        FuzzyIndex { trie: Trie::new() }
    }

    /// Inserts or overwrites the value stored for `key`.
    pub fn insert(&mut self, key: &str, value: V) {
        self.trie.insert(key, value);
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.trie.get(key)
    }

    /// Removes and returns the value stored for `key`, if any.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.trie.remove(key)
    }

    /// Number of keys currently carrying a value.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Up to `n` `(key, value)` pairs within edit distance `d` of `q`,
    /// searched from the root. Descent continues past an accepted key
    /// under ordinary automaton guidance, so matches nested beneath
    /// another match (e.g. `foo` and `fooa` both within distance 1 of
    /// `foo`) are both returned.
    pub fn fuzzy(&self, q: &str, d: usize, n: usize) -> Result<Vec<(String, &V)>, TrieError> {
        check_distance(d)?;
        Ok(fuzzy_search(&self.trie, self.trie.root(), q, d, n, Policy::Stop))
    }

    /// As [`Self::fuzzy`], but once a key is accepted, every stored
    /// descendant of it is also collected, unconditionally.
    pub fn fuzzy_and_descend(
        &self,
        q: &str,
        d: usize,
        n: usize,
    ) -> Result<Vec<(String, &V)>, TrieError> {
        check_distance(d)?;
        Ok(fuzzy_search(
            &self.trie,
            self.trie.root(),
            q,
            d,
            n,
            Policy::DescendAll,
        ))
    }

    /// As [`Self::fuzzy`], but the search starts after walking the
    /// first `np` codepoints of `q` exactly; the fuzzy match then runs
    /// over the remaining suffix. If the exact prefix walk cannot be
    /// completed (a missing edge, or `np` exceeding `q`'s codepoint
    /// length), the result is an empty list, not an error.
    pub fn fuzzy_after_prefix(
        &self,
        q: &str,
        np: usize,
        d: usize,
        n: usize,
    ) -> Result<Vec<(String, &V)>, TrieError> {
        check_distance(d)?;
        Ok(self.after_prefix(q, np, d, n, Policy::Stop))
    }

    /// As [`Self::fuzzy_and_descend`], starting after an exact prefix
    /// walk, with the same prefix-walk-failure semantics as
    /// [`Self::fuzzy_after_prefix`].
    pub fn fuzzy_after_prefix_and_descend(
        &self,
        q: &str,
        np: usize,
        d: usize,
        n: usize,
    ) -> Result<Vec<(String, &V)>, TrieError> {
        check_distance(d)?;
        Ok(self.after_prefix(q, np, d, n, Policy::DescendAll))
    }

    fn after_prefix(
        &self,
        q: &str,
        np: usize,
        d: usize,
        n: usize,
        policy: Policy,
    ) -> Vec<(String, &V)> {
        let (prefix, suffix) = key::split(q, np);
        if prefix.len() < np {
            // Ran out of codepoints before covering `np` positions.
            return Vec::new();
        }
        let prefix_key: String = prefix.into_iter().collect();
        match self.trie.walk(&prefix_key) {
            Some(start) => fuzzy_search(&self.trie, start, suffix, d, n, policy),
            None => Vec::new(),
        }
    }
}

fn check_distance(d: usize) -> Result<(), TrieError> {
    if d > MAX_D {
        Err(TrieError::TooWide { d, max: MAX_D })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_s2() -> FuzzyIndex<String> {
        let mut idx = FuzzyIndex::new();
        for k in [
            "a", "aa", "aaafoo", "aaf", "aafo", "aafoo", "aafoox", "aafooxx", "aafooxxx", "aafox",
            "aafx", "aafxx", "abfoo", "abfooxx", "b", "bbfoo", "foo",
        ] {
            idx.insert(k, k.to_string());
        }
        idx
    }

    fn keys(results: Vec<(String, &String)>) -> std::collections::BTreeSet<String> {
        results.into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn e6_prefix_exact_match() {
        let idx = dataset_s2();
        let got = idx.fuzzy_after_prefix("aafoo", 2, 0, usize::MAX).unwrap();
        assert_eq!(keys(got), ["aafoo"].map(String::from).into_iter().collect());
    }

    #[test]
    fn e7_prefix_distance_one() {
        let idx = dataset_s2();
        let got = idx.fuzzy_after_prefix("aafoo", 2, 1, usize::MAX).unwrap();
        let expected: std::collections::BTreeSet<String> =
            ["aaafoo", "aafo", "aafoo", "aafoox", "aafox"]
                .map(String::from)
                .into_iter()
                .collect();
        assert_eq!(keys(got), expected);
    }

    #[test]
    fn prefix_walk_failure_is_empty_not_error() {
        let idx = dataset_s2();
        let got = idx.fuzzy_after_prefix("zzzzz", 2, 1, usize::MAX).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn np_exceeding_query_length_is_empty_not_error() {
        let idx = dataset_s2();
        let got = idx.fuzzy_after_prefix("a", 5, 1, usize::MAX).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn distance_over_the_maximum_is_an_error() {
        let idx: FuzzyIndex<String> = FuzzyIndex::new();
        let err = idx.fuzzy("foo", MAX_D + 1, 10).unwrap_err();
        assert_eq!(
            err,
            TrieError::TooWide {
                d: MAX_D + 1,
                max: MAX_D
            }
        );
    }

    #[test]
    fn exact_api_round_trips() {
        let mut idx = FuzzyIndex::new();
        idx.insert("foo", 1);
        assert_eq!(idx.get("foo"), Some(&1));
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.remove("foo"), Some(1));
        assert!(idx.is_empty());
    }

    #[test]
    fn empty_key_is_queryable() {
        let mut idx = FuzzyIndex::new();
        idx.insert("", "root".to_string());
        let got = idx.fuzzy("", 0, usize::MAX).unwrap();
        assert_eq!(keys(got), ["".to_string()].into_iter().collect());
    }
}
