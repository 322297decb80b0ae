//! Fixed two-row tile layout.

/// Logical pixel size of every tile surface (square).
pub const TILE_SIZE: u32 = 128;

/// The gallery always lays tiles out in this many rows.
pub const GRID_ROWS: usize = 2;

/// Column count and visible tile count for a catalogue of a given size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridLayout {
    /// Tiles per row.
    pub columns: usize,
    /// Tiles that fit in the grid.
    pub visible: usize,
}

impl GridLayout {
    /// Aim for two equal rows: `columns = ceil(total / 2)`, and show at most
    /// `columns * 2` tiles.
    pub fn for_count(total: usize) -> Self {
        let columns = total.div_ceil(GRID_ROWS);
        Self {
            columns,
            visible: total.min(columns * GRID_ROWS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }

    /// `(row, column)` of the tile at `index`, filling row by row.
    pub fn cell(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.visible {
            return None;
        }
        Some((index / self.columns, index % self.columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_patterns_fill_grid() {
        let layout = GridLayout::for_count(40);
        assert_eq!(layout.columns, 20);
        assert_eq!(layout.visible, 40);
        assert_eq!(layout.cell(39), Some((1, 19)));
    }

    #[test]
    fn test_odd_count_leaves_one_gap() {
        let layout = GridLayout::for_count(47);
        assert_eq!(layout.columns, 24);
        assert_eq!(layout.visible, 47);
        assert_eq!(layout.cell(46), Some((1, 22)));
        assert_eq!(layout.cell(47), None);
    }

    #[test]
    fn test_empty_catalogue() {
        let layout = GridLayout::for_count(0);
        assert!(layout.is_empty());
        assert_eq!(layout.columns, 0);
        assert_eq!(layout.cell(0), None);
    }

    #[test]
    fn test_cells_fill_row_major() {
        let layout = GridLayout::for_count(6);
        assert_eq!(layout.cell(0), Some((0, 0)));
        assert_eq!(layout.cell(2), Some((0, 2)));
        assert_eq!(layout.cell(3), Some((1, 0)));
    }
}
