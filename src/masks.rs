use bit_set::BitSet;

use crate::cells::Cartesian2DCoordinate;

/// Cells switched off from a flat grid.
#[derive(Debug, Clone)]
pub struct BinaryMask2D {
    mask: BitSet,
    pub width: u32,
    pub height: u32,
}

impl BinaryMask2D {
    /// Reads a mask from text, one line per row. `X` or `#` switches a cell off, any other
    /// character leaves it on. Short lines are padded with cells that are on.
    pub fn from_text(pattern: &str) -> BinaryMask2D {
        let rows: Vec<&str> = pattern.lines().collect();
        let w = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as u32;
        let h = rows.len() as u32;
        let mut mask = BitSet::with_capacity((w * h) as usize);

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let off = glyph == 'X' || glyph == '#';
                if off {
                    mask.insert(y * w as usize + x);
                }
            }
        }

        BinaryMask2D {
            mask,
            width: w,
            height: h,
        }
    }

    /// Is the given coordinate masked out / turned off?
    ///
    /// A coordinate is not masked if it is outside the bounds of the mask's 2d space.
    pub fn is_masked(&self, coord: Cartesian2DCoordinate) -> bool {
        if coord.x < 0 || coord.y < 0 {
            return false;
        }
        let (x, y) = (coord.x as u32, coord.y as u32);
        if x < self.width && y < self.height {
            let bit_index = (y * self.width + x) as usize;
            self.mask.contains(bit_index)
        } else {
            false
        }
    }
}
