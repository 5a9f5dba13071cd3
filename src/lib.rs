//! An in-memory trie with Levenshtein-bounded fuzzy lookup.
//!
//! Given a query `q`, a maximum edit distance `d`, and a result cap `n`,
//! [`FuzzyIndex`] returns up to `n` stored key/value pairs whose keys
//! lie within edit distance `d` of `q`. It also supports restricting
//! the search to the subtree beneath an exact prefix, and a "descend"
//! mode that, once a match is found, also returns every stored key
//! beneath it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   key.rs    │────▶│   trie.rs    │────▶│  levenshtein.rs   │
//! │  (codepoint │     │ (arena-backed│     │ (diagonal-strip   │
//! │   split)    │     │  Trie<V>)    │     │  automaton state) │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │                      │
//!        ▼                   ▼                      ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                        search.rs                           │
//! │     (DFS driver: threads states over trie edges, applies    │
//! │      Stop / DescendAll post-match policy, honors n)         │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                        query.rs                             │
//! │   (FuzzyIndex: fuzzy / fuzzy_and_descend / fuzzy_after_     │
//! │    prefix / fuzzy_after_prefix_and_descend, plus the        │
//! │    plain insert/get/remove surface)                         │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The trie and the automaton are each usable on their own
//! (`trie::Trie`, `levenshtein::State`); `FuzzyIndex` is the intended
//! entry point for most callers.

mod contracts;
pub mod error;
pub mod key;
pub mod levenshtein;
pub mod query;
pub mod search;
pub mod trie;

pub use error::TrieError;
pub use query::FuzzyIndex;
pub use search::Policy;
