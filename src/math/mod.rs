//! Fixed-size vector and matrix math.
//!
//! Pure value types, no allocation. Matrices are row-major; see [`Mat4`] for
//! the OpenGL upload caveat.

mod error;
mod mat2;
mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub use error::{GeometryError, ProjectionError};
pub use mat2::Mat2;
pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Squared length below which a vector is considered degenerate for
/// normalization.
pub(crate) const MIN_NORM_LENGTH_SQUARED: f32 = 1e-12;
