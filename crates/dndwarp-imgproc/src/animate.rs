//! Animate an observer moving along a path.
//!
//! Every point of a [`Path`] produces one warped frame. Frames only read the
//! shared source image, so they are computed independently and, by default, in
//! parallel.

use dndwarp_image::Image;

use crate::error::WarpError;
use crate::field::ReferencePoint;
use crate::parallel::{self, ExecutionStrategy};
use crate::warp::WarpEngine;

/// An ordered, non-empty list of observer positions given as `(fx, fy)` image
/// fractions.
#[derive(Clone, Debug, PartialEq)]
pub struct Path(Vec<[f64; 2]>);

impl Path {
    /// Create a path from `(fx, fy)` fractions.
    ///
    /// # Errors
    ///
    /// [`WarpError::EmptyPath`] if `points` is empty.
    pub fn new(points: Vec<[f64; 2]>) -> Result<Self, WarpError> {
        if points.is_empty() {
            return Err(WarpError::EmptyPath);
        }
        Ok(Self(points))
    }

    /// Create a path from separate lists of horizontal and vertical fractions.
    ///
    /// The lists are paired up in order; extra entries of the longer list are
    /// ignored.
    pub fn from_axes(xs: &[f64], ys: &[f64]) -> Result<Self, WarpError> {
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect())
    }

    /// A path with a single point, producing a still frame.
    pub fn still(fx: f64, fy: f64) -> Self {
        Self(vec![[fx, fy]])
    }

    /// Number of points on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a path holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `(fx, fy)` fractions of the path.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.0
    }
}

/// Produces one warped frame per point of a [`Path`].
#[derive(Debug)]
pub struct PathAnimator {
    engine: WarpEngine,
    strategy: ExecutionStrategy,
}

impl PathAnimator {
    /// Create an animator running frames with [`ExecutionStrategy::default`].
    pub fn new(engine: WarpEngine) -> Self {
        Self {
            engine,
            strategy: ExecutionStrategy::default(),
        }
    }

    /// Set how the frames are scheduled.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Warp `src` once per point of `path`.
    ///
    /// # Returns
    ///
    /// The frames in path order, one per point.
    ///
    /// # Errors
    ///
    /// The first failing frame aborts the animation and is reported as
    /// [`WarpError::Frame`] with its index in the path. No frames are returned
    /// in that case.
    pub fn animate(
        &self,
        src: &Image<f32, 3>,
        path: &Path,
    ) -> Result<Vec<Image<f32, 3>>, WarpError> {
        log::info!(
            "animating {} frame(s) of {} with the {:?} field",
            path.len(),
            src.size(),
            self.engine.kind()
        );

        let points = path.points();
        parallel::try_map_indexed(self.strategy, points.len(), |index| {
            let [fx, fy] = points[index];
            ReferencePoint::from_fractions(src.size(), fx, fy)
                .and_then(|reference| self.engine.warp(src, reference))
                .map_err(|e| WarpError::Frame {
                    index,
                    source: Box::new(e),
                })
        })
    }
}

/// Warp `src` along `path` with the field registered as `kind`.
///
/// # Example
///
/// ```
/// use dndwarp_image::{Image, ImageSize};
/// use dndwarp_imgproc::animate::{animate_path, Path};
///
/// let src = Image::<f32, 3>::from_size_val(ImageSize { width: 6, height: 6 }, 0.5).unwrap();
/// let path = Path::new(vec![[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]).unwrap();
///
/// let frames = animate_path(&src, &path, "dnd").unwrap();
/// assert_eq!(frames.len(), 3);
/// ```
pub fn animate_path(
    src: &Image<f32, 3>,
    path: &Path,
    kind: &str,
) -> Result<Vec<Image<f32, 3>>, WarpError> {
    PathAnimator::new(WarpEngine::new(kind)?).animate(src, path)
}
