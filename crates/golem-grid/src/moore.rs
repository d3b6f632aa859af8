//! 8-connected (Moore) neighbourhood with absorbing edges.
//!
//! Neighbours that would fall outside `[0, size)` are omitted rather than
//! wrapped or clamped: corner cells have 3 neighbours, other edge cells 5,
//! interior cells 8, and the single cell of a 1×1 grid has none.

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Resolve a single axis value. Returns `None` when it leaves `[0, len)`.
#[inline]
pub(crate) fn resolve_axis(val: i32, len: usize) -> Option<usize> {
    if val < 0 {
        return None;
    }
    let v = val as usize;
    (v < len).then_some(v)
}

/// Number of in-bounds Moore neighbours of `(r, c)` on a `len × len` grid.
pub fn degree(r: usize, c: usize, len: usize) -> usize {
    let span = |v: usize| 1 + usize::from(v > 0) + usize::from(v + 1 < len);
    span(r) * span(c) - 1
}
