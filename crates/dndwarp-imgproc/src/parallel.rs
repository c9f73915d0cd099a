use rayon::prelude::*;
use thiserror::Error;

use dndwarp_image::Image;

use crate::interpolation::grid::CoordinateGrid;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how independent jobs (e.g. the frames of a path) are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to run every job in parallel.
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small inputs, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply a function to each pixel for grid sampling in parallel.
///
/// The closure receives the query coordinates of the destination pixel and the
/// destination pixel itself.
pub fn par_iter_rows_resample<const C: usize>(
    dst: &mut Image<f32, C>,
    map_x: &CoordinateGrid,
    map_y: &CoordinateGrid,
    f: impl Fn(&f32, &f32, &mut [f32]) + Send + Sync,
) {
    let cols = dst.cols();
    let dst_slice = dst.as_slice_mut();
    let map_x_slice = map_x.as_slice();
    let map_y_slice = map_y.as_slice();

    dst_slice
        .par_chunks_exact_mut(C * cols)
        .zip(map_x_slice.par_chunks_exact(cols))
        .zip(map_y_slice.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}

/// Run `op` for every index in `0..len` with the given strategy and collect the
/// results in index order.
///
/// The first error stops the collection and is returned; no partial output is
/// produced.
pub fn try_map_indexed<T, E, F>(
    strategy: ExecutionStrategy,
    len: usize,
    op: F,
) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send + From<ParallelError>,
    F: Fn(usize) -> Result<T, E> + Sync + Send,
{
    match strategy {
        ExecutionStrategy::Serial => (0..len).map(op).collect(),
        ExecutionStrategy::Parallel => (0..len).into_par_iter().map(op).collect(),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n).into());
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| (0..len).into_par_iter().map(op).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::grid::meshgrid;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Odd(usize),
        Parallel(ParallelError),
    }

    impl From<ParallelError> for TestError {
        fn from(e: ParallelError) -> Self {
            TestError::Parallel(e)
        }
    }

    fn double(i: usize) -> Result<usize, TestError> {
        Ok(i * 2)
    }

    #[test]
    fn test_map_serial() {
        let out = try_map_indexed(ExecutionStrategy::Serial, 4, double);
        assert_eq!(out, Ok(vec![0, 2, 4, 6]));
    }

    #[test]
    fn test_map_parallel_keeps_order() {
        let out = try_map_indexed(ExecutionStrategy::Parallel, 64, double);
        assert_eq!(out, Ok((0..64).map(|i| i * 2).collect::<Vec<_>>()));
    }

    #[test]
    fn test_map_fixed_success() {
        let out = try_map_indexed(ExecutionStrategy::Fixed(2), 4, double);
        assert_eq!(out, Ok(vec![0, 2, 4, 6]));
    }

    #[test]
    fn test_map_fixed_error() {
        let out = try_map_indexed(ExecutionStrategy::Fixed(0), 4, double);
        assert_eq!(
            out,
            Err(TestError::Parallel(ParallelError::InvalidThreadCount(0)))
        );
    }

    #[test]
    fn test_map_fails_without_partial_output() {
        for strategy in [ExecutionStrategy::Serial, ExecutionStrategy::Parallel] {
            let out = try_map_indexed(strategy, 3, |i| {
                if i == 1 {
                    Err(TestError::Odd(i))
                } else {
                    Ok(i)
                }
            });
            assert_eq!(out, Err(TestError::Odd(1)));
        }
    }

    #[test]
    fn test_resample_rows_visits_every_pixel() {
        let (map_x, map_y) = meshgrid(2, 3);
        let mut dst = Image::<f32, 2>::from_size_val([3, 2].into(), 0.0).unwrap();

        par_iter_rows_resample(&mut dst, &map_x, &map_y, |&x, &y, pixel| {
            pixel[0] = x;
            pixel[1] = y;
        });

        assert_eq!(
            dst.as_slice(),
            &[0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0]
        );
    }
}
