use core::ops::RangeInclusive;

/// Linear board dimension, used for row and column indices.
pub type Coord = u8;

/// Area dimension, used for cell counts.
pub type CellCount = u16;

/// Cell address as `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Number of rows on a board.
pub const ROWS: Coord = 3;

/// Number of columns on a board, one per tens range.
pub const COLS: Coord = 10;

/// Active cells per row.
pub const ACTIVE_PER_ROW: usize = 5;

/// Total callable numbers; the pool holds `0..NUMBERS`.
pub const NUMBERS: u8 = 100;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// The fixed tens interval backing a column: `0..=9`, `10..=19`, ... `90..=99`.
pub fn column_range(col: Coord) -> RangeInclusive<u8> {
    let low = col * 10;
    low..=low + 9
}

/// The column a number belongs to.
pub const fn column_of(number: u8) -> Coord {
    number / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_ranges_partition_all_numbers() {
        for number in 0..NUMBERS {
            let col = column_of(number);
            assert!(col < COLS);
            assert!(column_range(col).contains(&number));
        }
    }

    #[test]
    fn column_range_endpoints() {
        assert_eq!(column_range(0), 0..=9);
        assert_eq!(column_range(9), 90..=99);
    }
}
