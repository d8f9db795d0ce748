//! Masonry gallery layout.
//!
//! Photos arrive with unknown dimensions and report an aspect ratio as each
//! image loads (or fails). Placement is greedy and online: a photo goes to
//! the currently-shortest column the moment its ratio is known, and is never
//! moved afterwards, so the final balance is an approximation rather than an
//! optimal partition. After the last report the columns are clamped to the
//! shortest column's height (overflow is trimmed, not reflowed).

/// Vertical gap between items in a column, in logical pixels.
pub const ITEM_GAP: f64 = 12.0;

/// Aspect ratio (width / height) assumed for an image that failed to load.
/// Keeps the layout moving instead of stalling on a broken asset.
pub const FALLBACK_ASPECT: f64 = 1.0;

/// Column count for a viewport width.
pub fn columns_for_width(width: f64) -> usize {
    if width >= 1024.0 {
        4
    } else if width >= 768.0 {
        3
    } else {
        2
    }
}

/// Accumulated state of one gallery build.
#[derive(Debug, Clone)]
pub struct MasonryLayout {
    column_width: f64,
    gap: f64,
    heights: Vec<f64>,
}

impl MasonryLayout {
    pub fn new(columns: usize, column_width: f64, gap: f64) -> Self {
        MasonryLayout {
            column_width: column_width.max(1.0),
            gap,
            heights: vec![0.0; columns.max(1)],
        }
    }

    pub fn column_count(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Place one photo: pick the shortest column (lowest index on ties),
    /// grow it by the photo's estimated rendered height plus the gap, and
    /// return the chosen column.
    ///
    /// `aspect` is width / height; a non-positive or non-finite value falls
    /// back to [`FALLBACK_ASPECT`], the same path an errored image takes.
    pub fn place(&mut self, aspect: f64) -> usize {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            FALLBACK_ASPECT
        };
        let column = self.shortest_column();
        self.heights[column] += self.column_width / aspect + self.gap;
        column
    }

    fn shortest_column(&self) -> usize {
        let mut best = 0;
        for (i, height) in self.heights.iter().enumerate().skip(1) {
            if *height < self.heights[best] {
                best = i;
            }
        }
        best
    }

    /// Height every column is clamped to once all photos have reported:
    /// the shortest column wins and the rest are visually trimmed.
    pub fn clamp_height(&self) -> f64 {
        self.heights.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(columns_for_width(1920.0), 4);
        assert_eq!(columns_for_width(1024.0), 4);
        assert_eq!(columns_for_width(1023.0), 3);
        assert_eq!(columns_for_width(768.0), 3);
        assert_eq!(columns_for_width(767.0), 2);
        assert_eq!(columns_for_width(320.0), 2);
    }

    #[test]
    fn test_first_photo_goes_to_first_column() {
        let mut layout = MasonryLayout::new(3, 300.0, ITEM_GAP);
        assert_eq!(layout.place(1.5), 0);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        let mut layout = MasonryLayout::new(2, 300.0, 0.0);
        // Identical aspects alternate 0, 1, 0, 1
        assert_eq!(layout.place(1.0), 0);
        assert_eq!(layout.place(1.0), 1);
        assert_eq!(layout.place(1.0), 0);
        assert_eq!(layout.place(1.0), 1);
    }

    #[test]
    fn test_tall_photo_steers_followers_away() {
        let mut layout = MasonryLayout::new(2, 300.0, ITEM_GAP);
        // A very tall portrait in column 0 ...
        assert_eq!(layout.place(0.2), 0);
        // ... pushes the next few photos into column 1
        assert_eq!(layout.place(1.0), 1);
        assert_eq!(layout.place(1.0), 1);
    }

    #[test]
    fn test_height_accounting() {
        let mut layout = MasonryLayout::new(2, 300.0, 12.0);
        layout.place(1.5); // 300 / 1.5 = 200 + 12
        assert_eq!(layout.heights()[0], 212.0);
        assert_eq!(layout.heights()[1], 0.0);
    }

    #[test]
    fn test_bad_aspect_uses_square_fallback() {
        let mut layout = MasonryLayout::new(2, 300.0, 0.0);
        layout.place(f64::NAN);
        layout.place(0.0);
        layout.place(-2.0);
        let total: f64 = layout.heights().iter().sum();
        // Three squares at the 300px column width
        assert_eq!(total, 900.0);
    }

    #[test]
    fn test_clamp_is_minimum_column_height() {
        let mut layout = MasonryLayout::new(3, 300.0, 0.0);
        layout.place(1.0); // col 0: 300
        layout.place(2.0); // col 1: 150
        layout.place(3.0); // col 2: 100
        assert_eq!(layout.clamp_height(), 100.0);
    }

    #[test]
    fn test_zero_columns_is_coerced_to_one() {
        let mut layout = MasonryLayout::new(0, 300.0, 0.0);
        assert_eq!(layout.column_count(), 1);
        assert_eq!(layout.place(1.0), 0);
    }
}
