//! Debug-only runtime contracts.
//!
//! These check invariants that are this crate's own responsibility to
//! uphold, not caller errors — if one fires, it is a bug in this crate.
//! They compile to nothing in release builds.

use crate::levenshtein::{State, MAX_D};

/// `d` must fit the fixed `u8` cell encoding: the sentinel `d + 1` has
/// to be representable.
pub(crate) fn check_distance_supported(d: usize) {
    debug_assert!(
        d <= MAX_D,
        "distance bound {d} exceeds the maximum supported value {MAX_D}"
    );
}

/// `vec` must be exactly `2d + 1` cells wide, each in `[0, d + 1]`.
pub(crate) fn check_state_width(state: &State, d: usize) {
    debug_assert_eq!(
        state.width(),
        2 * d + 1,
        "state vector width must equal 2d+1"
    );
    debug_assert!(
        state.cells().iter().all(|&c| c as usize <= d + 1),
        "every cell must lie in [0, d+1]"
    );
}

/// The offset must advance by exactly one per transition.
pub(crate) fn check_offset_advanced(prev_offset: isize, next_offset: isize) {
    debug_assert_eq!(
        next_offset,
        prev_offset + 1,
        "offset must increment by exactly 1 per transition"
    );
}
