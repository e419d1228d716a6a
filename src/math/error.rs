use std::error::Error;
use std::fmt;

/// Degenerate-geometry failures from basis construction.
///
/// The math library never lets these paths produce NaN silently; callers get
/// a typed error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A direction that must be normalized had (near-)zero length,
    /// e.g. a look-at target coincident with the eye position.
    ZeroLengthVector,
    /// Two axes that must span a plane were (near-)parallel,
    /// e.g. an up vector aligned with the view direction.
    ParallelAxes,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ZeroLengthVector => {
                write!(f, "cannot normalize a zero-length vector")
            }
            GeometryError::ParallelAxes => {
                write!(f, "axes are parallel and do not span a plane")
            }
        }
    }
}

impl Error for GeometryError {}

/// Invalid perspective-projection parameters, rejected before a corrupt
/// matrix can be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// Vertical field of view must lie strictly between 0 and pi radians.
    FieldOfView(f32),
    /// Aspect ratio must be positive.
    Aspect(f32),
    /// Clip planes must satisfy `0 < near < far`.
    Planes { near: f32, far: f32 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::FieldOfView(fov) => {
                write!(f, "field of view {fov} rad is outside (0, pi)")
            }
            ProjectionError::Aspect(aspect) => {
                write!(f, "aspect ratio {aspect} is not positive")
            }
            ProjectionError::Planes { near, far } => {
                write!(f, "clip planes near={near} far={far} violate 0 < near < far")
            }
        }
    }
}

impl Error for ProjectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let msg = GeometryError::ZeroLengthVector.to_string();
        assert!(msg.contains("zero-length"));

        let msg = ProjectionError::Planes { near: 5.0, far: 1.0 }.to_string();
        assert!(msg.contains("near=5"));
        assert!(msg.contains("far=1"));
    }
}
