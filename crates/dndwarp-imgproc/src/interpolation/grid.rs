use dndwarp_image::ImageSize;

use crate::error::WarpError;

/// Ascending pixel-centre coordinates along one image dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis(Vec<f32>);

impl Axis {
    /// The axis `0, 1, ..., len - 1`.
    pub fn range(len: usize) -> Self {
        Self((0..len).map(|i| i as f32).collect())
    }

    /// A copy of the axis with `offset` subtracted from every coordinate.
    pub fn shifted(&self, offset: f32) -> Self {
        Self(self.0.iter().map(|v| v - offset).collect())
    }

    /// Number of coordinates on the axis.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the axis has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The coordinates of the axis.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// A 2D array of shape (rows, cols) holding one coordinate per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateGrid {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl CoordinateGrid {
    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Combine two grids of the same shape cell by cell.
    ///
    /// Returns `None` if the shapes differ.
    pub fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Option<Self> {
        if self.shape() != other.shape() {
            return None;
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Some(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// The shape of the grid as `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The value at `(row, col)`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// The values of the grid in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Create a meshgrid of x and y coordinates
///
/// # Arguments
///
/// * `rows` - The number of rows indicating the height of the grid
/// * `cols` - The number of columns indicating the width of the grid
///
/// # Returns
///
/// A tuple of 2D arrays of shape (rows, cols) containing the x and y coordinates
pub fn meshgrid(rows: usize, cols: usize) -> (CoordinateGrid, CoordinateGrid) {
    let map_x = CoordinateGrid::from_fn(rows, cols, |_, c| c as f32);
    let map_y = CoordinateGrid::from_fn(rows, cols, |r, _| r as f32);
    (map_x, map_y)
}

/// The coordinate axes and per-pixel coordinate grids of an image.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionGrid {
    /// Column axis `0..W-1`.
    pub x: Axis,
    /// Row axis `0..H-1`.
    pub y: Axis,
    /// Column coordinate of every pixel, shape (H, W).
    pub map_x: CoordinateGrid,
    /// Row coordinate of every pixel, shape (H, W).
    pub map_y: CoordinateGrid,
}

impl PositionGrid {
    /// Build the axes and coordinate grids for an image of the given size.
    ///
    /// # Errors
    ///
    /// [`WarpError::InvalidDimensions`] if the width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dndwarp_image::ImageSize;
    /// use dndwarp_imgproc::interpolation::grid::PositionGrid;
    ///
    /// let grid = PositionGrid::new(ImageSize { width: 3, height: 2 }).unwrap();
    /// assert_eq!(grid.x.as_slice(), &[0.0, 1.0, 2.0]);
    /// assert_eq!(grid.map_y.get(1, 2), Some(1.0));
    /// ```
    pub fn new(size: ImageSize) -> Result<Self, WarpError> {
        if size.width == 0 || size.height == 0 {
            return Err(WarpError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }

        let (map_x, map_y) = meshgrid(size.height, size.width);

        Ok(Self {
            x: Axis::range(size.width),
            y: Axis::range(size.height),
            map_x,
            map_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meshgrid_smoke() {
        let (map_x, map_y) = meshgrid(2, 3);
        assert_eq!(map_x.shape(), [2, 3]);
        assert_eq!(map_x.as_slice(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        assert_eq!(map_y.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn position_grid_shapes() -> Result<(), WarpError> {
        let grid = PositionGrid::new(ImageSize {
            width: 4,
            height: 2,
        })?;
        assert_eq!(grid.x.len(), 4);
        assert_eq!(grid.y.len(), 2);
        assert_eq!(grid.map_x.shape(), [2, 4]);
        assert_eq!(grid.map_y.shape(), [2, 4]);

        for r in 0..2 {
            for c in 0..4 {
                assert_eq!(grid.map_x.get(r, c), Some(c as f32));
                assert_eq!(grid.map_y.get(r, c), Some(r as f32));
            }
        }
        assert_eq!(grid.map_x.get(2, 0), None);

        Ok(())
    }

    #[test]
    fn position_grid_rejects_empty() {
        for (width, height) in [(0, 3), (3, 0), (0, 0)] {
            assert_eq!(
                PositionGrid::new(ImageSize { width, height }),
                Err(WarpError::InvalidDimensions { width, height })
            );
        }
    }

    #[test]
    fn axis_shifted() {
        let axis = Axis::range(3).shifted(1.0);
        assert_eq!(axis.as_slice(), &[-1.0, 0.0, 1.0]);
        assert!(!axis.is_empty());
    }

    #[test]
    fn zip_map_shape_mismatch() {
        let (a, _) = meshgrid(2, 2);
        let (b, _) = meshgrid(2, 3);
        assert!(a.zip_map(&b, |x, y| x + y).is_none());
        assert_eq!(
            a.zip_map(&a, |x, y| x + y).map(|g| g.as_slice().to_vec()),
            Some(vec![0.0, 2.0, 0.0, 2.0])
        );
    }
}
