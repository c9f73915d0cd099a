use super::{ReferencePoint, TransformationField};

/// The `"dnd"` field: ratio of the Chebyshev (L∞) distance to the Euclidean
/// distance from the observer.
///
/// With `φ = atan2(x - x0, y - y0)` the scale is `max(|cos φ|, |sin φ|)`. It is 1
/// along the four axis directions and `√2/2` along the diagonals, so the level
/// sets of the warp are axis-aligned squares instead of circles.
///
/// `atan2(0, 0)` is 0, so the scale at the observer itself is 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChebyshevField;

impl ChebyshevField {
    /// Registry key of the field.
    pub const NAME: &'static str = "dnd";
}

impl TransformationField for ChebyshevField {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, position: [f32; 2], reference: ReferencePoint) -> f32 {
        let dx = position[0] - reference.x as f32;
        let dy = position[1] - reference.y as f32;
        let phi = dx.atan2(dy);
        phi.cos().abs().max(phi.sin().abs())
    }
}
