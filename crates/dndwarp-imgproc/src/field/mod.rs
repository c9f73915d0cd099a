//! Scale fields anchored at an observer position.
//!
//! A [`TransformationField`] maps a pixel position, relative to a
//! [`ReferencePoint`], to a non-negative scale factor. The warp divides the
//! offset of every output pixel from the reference point by that factor to find
//! where to sample the source image.
//!
//! Fields are looked up by name in a [`FieldRegistry`]. The default registry
//! ships a single kind, `"dnd"` ([`ChebyshevField`]); more can be added with
//! [`FieldRegistry::register`].
//!
//! # Example
//!
//! ```
//! use dndwarp_imgproc::field::{FieldRegistry, ReferencePoint};
//!
//! let registry = FieldRegistry::default();
//! let scale = registry.scale_fn("dnd", ReferencePoint { x: 0, y: 0 }).unwrap();
//!
//! assert!((scale(5.0, 0.0) - 1.0).abs() < 1e-6);
//! assert!((scale(5.0, 5.0) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
//! ```

mod chebyshev;

use std::collections::HashMap;

use dndwarp_image::ImageSize;

use crate::error::WarpError;

pub use chebyshev::ChebyshevField;

/// The pixel position of the observer that anchors a warp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReferencePoint {
    /// Column of the observer.
    pub x: i64,
    /// Row of the observer.
    pub y: i64,
}

impl ReferencePoint {
    /// Derive the observer pixel from fractions of the image.
    ///
    /// `fx` is measured from the left edge, `fy` from the bottom edge:
    ///
    /// * `x = floor(W * fx)`
    /// * `y = floor(W * (1 - fy))`
    ///
    /// NOTE: the vertical fraction is scaled by the image *width*, not its height.
    /// This reproduces the established behaviour of the tool and only centres the
    /// observer vertically on square images.
    ///
    /// # Errors
    ///
    /// [`WarpError::NonFiniteFraction`] if either fraction is NaN or infinite.
    pub fn from_fractions(size: ImageSize, fx: f64, fy: f64) -> Result<Self, WarpError> {
        for f in [fx, fy] {
            if !f.is_finite() {
                return Err(WarpError::NonFiniteFraction(f));
            }
        }

        let width = size.width as f64;

        Ok(Self {
            x: (width * fx).floor() as i64,
            y: (width * (1.0 - fy)).floor() as i64,
        })
    }
}

/// A scale field relative to a reference point.
pub trait TransformationField: Send + Sync {
    /// The registry key of the field.
    fn name(&self) -> &'static str;

    /// The scale factor at `position = [x, y]` for an observer at `reference`.
    ///
    /// Implementations must return a finite, strictly positive value for every
    /// finite position, including the reference point itself.
    fn evaluate(&self, position: [f32; 2], reference: ReferencePoint) -> f32;
}

/// Constructor stored in a [`FieldRegistry`].
pub type FieldConstructor = fn() -> Box<dyn TransformationField>;

/// Name to constructor map of the available transformation fields.
#[derive(Clone)]
pub struct FieldRegistry {
    constructors: HashMap<String, FieldConstructor>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(ChebyshevField::NAME, || Box::new(ChebyshevField));
        registry
    }
}

impl FieldRegistry {
    /// A registry without any field.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a field under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, constructor: FieldConstructor) {
        self.constructors.insert(name.into(), constructor);
    }

    /// Instantiate the field registered under `name`.
    ///
    /// # Errors
    ///
    /// [`WarpError::UnknownTransformKind`] if nothing is registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn TransformationField>, WarpError> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| WarpError::UnknownTransformKind(name.to_string()))
    }

    /// The registered names, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds = self
            .constructors
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        kinds.sort_unstable();
        kinds
    }

    /// The field `name` bound to `reference`, as a plain `(x, y) -> scale` function.
    pub fn scale_fn(
        &self,
        name: &str,
        reference: ReferencePoint,
    ) -> Result<Box<dyn Fn(f32, f32) -> f32 + Send + Sync>, WarpError> {
        let field = self.create(name)?;
        Ok(Box::new(move |x, y| field.evaluate([x, y], reference)))
    }
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnitField;

    impl TransformationField for UnitField {
        fn name(&self) -> &'static str {
            "unit"
        }

        fn evaluate(&self, _position: [f32; 2], _reference: ReferencePoint) -> f32 {
            1.0
        }
    }

    #[test]
    fn default_registry_has_dnd() -> Result<(), WarpError> {
        let registry = FieldRegistry::default();
        assert_eq!(registry.kinds(), vec!["dnd"]);
        assert_eq!(registry.create("dnd")?.name(), "dnd");
        Ok(())
    }

    #[test]
    fn unknown_kind() {
        let registry = FieldRegistry::default();
        assert!(matches!(
            registry.create("fisheye"),
            Err(WarpError::UnknownTransformKind(kind)) if kind == "fisheye"
        ));
        assert!(FieldRegistry::empty().create("dnd").is_err());
    }

    #[test]
    fn register_custom_kind() -> Result<(), WarpError> {
        let mut registry = FieldRegistry::default();
        registry.register("unit", || Box::new(UnitField));
        assert_eq!(registry.kinds(), vec!["dnd", "unit"]);

        let scale = registry.scale_fn("unit", ReferencePoint { x: 3, y: 3 })?;
        assert_eq!(scale(0.0, 7.0), 1.0);
        Ok(())
    }

    #[test]
    fn reference_point_from_fractions() -> Result<(), WarpError> {
        let size = ImageSize {
            width: 4,
            height: 4,
        };
        assert_eq!(
            ReferencePoint::from_fractions(size, 0.5, 0.5)?,
            ReferencePoint { x: 2, y: 2 }
        );
        assert_eq!(
            ReferencePoint::from_fractions(size, 0.0, 0.0)?,
            ReferencePoint { x: 0, y: 4 }
        );
        assert_eq!(
            ReferencePoint::from_fractions(size, -0.1, 1.2)?,
            ReferencePoint { x: -1, y: -1 }
        );
        Ok(())
    }

    #[test]
    fn reference_point_uses_width_for_rows() -> Result<(), WarpError> {
        let size = ImageSize {
            width: 10,
            height: 4,
        };
        assert_eq!(
            ReferencePoint::from_fractions(size, 0.25, 0.5)?,
            ReferencePoint { x: 2, y: 5 }
        );
        Ok(())
    }

    #[test]
    fn reference_point_rejects_nan() {
        let size = ImageSize {
            width: 4,
            height: 4,
        };
        assert!(matches!(
            ReferencePoint::from_fractions(size, f64::NAN, 0.5),
            Err(WarpError::NonFiniteFraction(_))
        ));
        assert_eq!(
            ReferencePoint::from_fractions(size, 0.5, f64::INFINITY),
            Err(WarpError::NonFiniteFraction(f64::INFINITY))
        );
    }
}
