//! Toroidal axis arithmetic shared by the grid and the activity tracker.
//!
//! On a torus every cell has exactly 8 neighbours; the helpers here
//! resolve wrapped coordinates with O(1) modular arithmetic rather than
//! branching, so callers never special-case border cells.

use smallvec::{smallvec, SmallVec};

/// Previous index along an axis of length `len`, wrapping `0` to `len - 1`.
///
/// `i` must already be in `[0, len)`.
#[inline]
pub fn wrap_dec(i: u32, len: u32) -> u32 {
    (i + len - 1) % len
}

/// Next index along an axis of length `len`, wrapping `len - 1` to `0`.
///
/// `i` must already be in `[0, len)`.
#[inline]
pub fn wrap_inc(i: u32, len: u32) -> u32 {
    (i + 1) % len
}

/// The 8 Moore neighbours of `(x, y)` on a `width x height` torus.
///
/// Coordinates are returned wrapped; on small grids (dimension 1 or 2)
/// the same cell can appear more than once, which is exactly the
/// multiplicity neighbour counting needs.
#[inline]
pub fn moore_neighbours(x: u32, y: u32, width: u32, height: u32) -> SmallVec<[(u32, u32); 8]> {
    let left = wrap_dec(x, width);
    let right = wrap_inc(x, width);
    let up = wrap_dec(y, height);
    let down = wrap_inc(y, height);
    smallvec![
        (left, up),
        (x, up),
        (right, up),
        (left, y),
        (right, y),
        (left, down),
        (x, down),
        (right, down),
    ]
}
