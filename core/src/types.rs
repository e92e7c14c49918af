/// Stable identifier of a category, unique across the source data pool.
pub type CategoryId = u32;

/// Stable identifier of a clue, unique within the active board.
pub type ClueId = u32;

/// Count type for the categories of a board or pool.
pub type CategoryCount = u8;

/// Count type for the clues in one category.
pub type ClueCount = u8;

/// Count type for whole-board clue totals.
pub type CellCount = u16;

pub const fn mult(a: CategoryCount, b: ClueCount) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
