/// Row-major grid of non-negative heights, one per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    cols: usize,
    rows: usize,
    heights: Vec<f64>,
    /// Pixel size of the image the field was sampled from.
    source_size: (u32, u32),
}

/// A single cell of a height field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    pub height: f64,
}

impl HeightField {
    /// Build a field by evaluating `f(col, row)` for every cell.
    /// Negative and non-finite values are stored as 0.
    pub fn from_fn(
        cols: usize,
        rows: usize,
        source_size: (u32, u32),
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Self {
        let mut heights = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let h = f(col, row);
                heights.push(if h.is_finite() && h > 0.0 { h } else { 0.0 });
            }
        }
        Self {
            cols,
            rows,
            heights,
            source_size,
        }
    }

    /// Build a field from row-major heights. Returns `None` on a size mismatch.
    pub fn from_heights(cols: usize, rows: usize, heights: Vec<f64>) -> Option<Self> {
        if heights.len() != cols * rows {
            return None;
        }
        Some(Self::from_fn(cols, rows, (cols as u32, rows as u32), |c, r| {
            heights[r * cols + c]
        }))
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn source_size(&self) -> (u32, u32) {
        self.source_size
    }

    /// Height at `(col, row)`, or 0 outside the grid.
    pub fn get(&self, col: usize, row: usize) -> f64 {
        if col >= self.cols || row >= self.rows {
            return 0.0;
        }
        self.heights[row * self.cols + col]
    }

    /// Row-major height values.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.heights.iter().enumerate().map(move |(i, &height)| Cell {
            col: i % self.cols,
            row: i / self.cols,
            height,
        })
    }

    /// Number of cells that produce geometry.
    pub fn non_zero_count(&self) -> usize {
        self.heights.iter().filter(|h| **h > 0.0).count()
    }

    pub fn max_height(&self) -> f64 {
        self.heights.iter().copied().fold(0.0, f64::max)
    }
}
