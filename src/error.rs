// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-level error type.
//!
//! `n` and `np` are modeled as `usize`, so "negative" caller errors are
//! not representable and need no runtime check. The one remaining
//! caller-error class is a distance bound too large for the fixed-width
//! cell encoding this crate uses internally.

use std::fmt;

/// Errors surfaced to callers of the fuzzy query API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// The requested distance bound would require a state vector wider
    /// than this crate's fixed cell width supports.
    TooWide { d: usize, max: usize },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::TooWide { d, max } => write!(
                f,
                "distance bound {d} exceeds the maximum supported value {max}"
            ),
        }
    }
}

impl std::error::Error for TrieError {}
