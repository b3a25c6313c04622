/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = usize;

/// Count type used for card, pair, and match counts.
pub type CellCount = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// A card face. Every symbol dealt onto a board appears on exactly two cards per pair slot.
pub type Symbol = char;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    a.saturating_mul(b)
}

/// Card count of a `rows` x `cols` board, `None` when the board could not be allocated.
pub(crate) fn checked_cells(rows: Coord, cols: Coord) -> Option<CellCount> {
    let cells = rows.checked_mul(cols)?;
    let bytes = cells.checked_mul(core::mem::size_of::<crate::Card>())?;
    (bytes <= isize::MAX as usize).then_some(cells)
}

/// Converts a signed shell-side position into board coordinates, rejecting negatives.
pub(crate) fn coords_from_signed(row: isize, col: isize) -> Option<Coord2> {
    let row = Coord::try_from(row).ok()?;
    let col = Coord::try_from(col).ok()?;
    Some((row, col))
}
