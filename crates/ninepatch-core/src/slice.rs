//! Slice boundary derivation
//!
//! Scale-mark runs are converted into the cut coordinates the grid is
//! sliced along. Each run contributes its start and the first pixel past
//! its end, so the marked span itself becomes one tile and the marker
//! border row or column never ends up inside a tile.

use crate::marks::Run;

/// Cut coordinates for one axis.
///
/// The sequence starts at 1 (past the scale-mark border line) and ends at
/// `len - 1` (before the fill-mark border line); taken pairwise it defines
/// the tile spans, so the tile count is `cuts.len() - 1`.
///
/// With no runs at all the result is `[1, len - 1]`: a single fixed tile
/// covering the whole interior.
///
/// # Examples
///
/// ```
/// use ninepatch_core::{Run, cut_points};
///
/// let runs = [Run { start: 11, end: 14 }];
/// assert_eq!(cut_points(&runs, 26), vec![1, 11, 15, 25]);
/// assert_eq!(cut_points(&[], 26), vec![1, 25]);
/// ```
pub fn cut_points(runs: &[Run], len: u32) -> Vec<u32> {
    let mut cuts = Vec::with_capacity(runs.len() * 2 + 2);
    cuts.push(1);
    for run in runs {
        cuts.push(run.start);
        cuts.push(run.end + 1);
    }
    cuts.push(len - 1);
    cuts
}
