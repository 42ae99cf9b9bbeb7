use gridwalk_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent on a 4-connected grid with unit step costs.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
