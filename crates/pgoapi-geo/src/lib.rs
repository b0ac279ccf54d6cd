//! S2 cell windows for pgoapi map queries.
//!
//! A map query names the cells it wants objects for. When the caller does
//! not supply them, the batch asks for a fixed window of leaf cells around
//! the player: the leaf containing the player's position plus the ten
//! cells on either side of it along the Hilbert curve.
//!
//! ```
//! use pgoapi_geo::{WINDOW_LEN, compute_window};
//!
//! let window = compute_window(37.7749, -122.4194);
//! assert_eq!(window.len(), WINDOW_LEN);
//! assert_eq!(window.as_slice()[10], window.center());
//! ```

use s2::latlng::LatLng;

pub use s2::cellid::{CellID, MAX_LEVEL};

/// Cells taken on each side of the origin cell.
pub const WINDOW_RADIUS: usize = 10;

/// Total cells in a window: the origin plus `WINDOW_RADIUS` on each side.
pub const WINDOW_LEN: usize = 2 * WINDOW_RADIUS + 1;

/// Identifier of the leaf cell containing `latitude`, `longitude`.
pub fn leaf_cell(latitude: f64, longitude: f64) -> u64 {
    CellID::from(LatLng::from_degrees(latitude, longitude)).0
}

/// Builds the window of [`WINDOW_LEN`] leaf cells centred on the leaf
/// containing the given point.
///
/// Ids are in ascending curve order and the origin sits at index
/// [`WINDOW_RADIUS`]. Inputs are expected to be finite and in range.
/// The window is not wrapped at the two ends of the curve, so an origin
/// within ten leaves of the first or last leaf yields ids past that end.
pub fn compute_window(latitude: f64, longitude: f64) -> CellWindow {
    let origin = CellID::from(LatLng::from_degrees(latitude, longitude));
    let mut cells = [0u64; WINDOW_LEN];
    cells[WINDOW_RADIUS] = origin.0;

    let mut before = origin;
    let mut after = origin;
    for step in 1..=WINDOW_RADIUS {
        before = before.prev();
        after = after.next();
        cells[WINDOW_RADIUS - step] = before.0;
        cells[WINDOW_RADIUS + step] = after.0;
    }

    CellWindow { cells }
}

/// Fixed-length, ascending run of leaf cell ids around an origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellWindow {
    cells: [u64; WINDOW_LEN],
}

impl CellWindow {
    /// The origin cell (the one containing the queried point).
    pub fn center(&self) -> u64 {
        self.cells[WINDOW_RADIUS]
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        WINDOW_LEN
    }

    /// Always false; a window is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.cells.iter()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.cells.to_vec()
    }
}

impl IntoIterator for CellWindow {
    type Item = u64;
    type IntoIter = std::array::IntoIter<u64, WINDOW_LEN>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellWindow {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl From<CellWindow> for Vec<u64> {
    fn from(window: CellWindow) -> Self {
        window.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_len_constant() {
        assert_eq!(WINDOW_LEN, 21);
    }

    #[test]
    fn test_compute_window_center_is_leaf_cell() {
        let window = compute_window(40.7128, -74.0060);
        assert_eq!(window.center(), leaf_cell(40.7128, -74.0060));
        assert_eq!(window.as_slice()[WINDOW_RADIUS], window.center());
    }

    #[test]
    fn test_compute_window_neighbours_differ_by_two() {
        let window = compute_window(-33.8688, 151.2093);
        for pair in window.as_slice().windows(2) {
            assert_eq!(pair[1] - pair[0], 2);
        }
    }

    #[test]
    fn test_compute_window_at_origin() {
        let window = compute_window(0.0, 0.0);
        assert_eq!(window.center(), 0x1000_0000_0000_0001);
        assert_eq!(window.as_slice()[0], 0x1000_0000_0000_0001 - 20);
        assert_eq!(window.as_slice()[WINDOW_LEN - 1], 0x1000_0000_0000_0001 + 20);
    }

    #[test]
    fn test_into_vec_preserves_order() {
        let window = compute_window(51.5074, -0.1278);
        let cells = window.into_vec();
        assert_eq!(cells.len(), WINDOW_LEN);
        assert_eq!(cells.as_slice(), window.as_slice());
    }

    #[test]
    fn test_compute_window_ends_are_leaf_neighbours() {
        let window = compute_window(64.1466, -21.9426);
        let first = CellID(window.as_slice()[0]);
        let last = CellID(window.as_slice()[WINDOW_LEN - 1]);
        assert!(first.is_leaf() && last.is_leaf());
        assert_eq!(first.next().0, window.as_slice()[1]);
        assert_eq!(last.prev().0, window.as_slice()[WINDOW_LEN - 2]);
    }

    #[test]
    fn test_iterators_agree() {
        let window = compute_window(35.6762, 139.6503);
        let by_ref: Vec<u64> = window.iter().copied().collect();
        let by_value: Vec<u64> = window.into_iter().collect();
        assert_eq!(by_ref, by_value);
    }
}
