// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Codepoint-level splitting of query strings.
//!
//! The trie and the Levenshtein automaton both operate on codepoints, not
//! bytes: a single non-ASCII character must count as one edit, not two or
//! three. `&str` in Rust is already guaranteed well-formed UTF-8, so unlike
//! a codec built over raw bytes, this module has no invalid-input case to
//! reject — it is a pure `char`-boundary walk.

/// Splits `s` into its first `min(k, codepoint_count)` codepoints and the
/// remaining byte-suffix of `s`, starting at the next codepoint boundary.
///
/// The second element is always the unconsumed tail of `s`; it is empty
/// once every codepoint has been taken.
pub fn split(s: &str, k: usize) -> (Vec<char>, &str) {
    let mut taken = Vec::with_capacity(k.min(s.len()));
    let mut rest = s;
    for _ in 0..k {
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => {
                taken.push(c);
                rest = chars.as_str();
            }
            None => break,
        }
    }
    (taken, rest)
}

/// Decodes `s` into its codepoint sequence.
pub fn codepoints(s: &str) -> Vec<char> {
    s.chars().collect()
}
