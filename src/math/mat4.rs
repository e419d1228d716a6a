use std::ops::{Index, IndexMut, Mul};

use super::{GeometryError, ProjectionError, Vec3, Vec4};

/// 4x4 float matrix, row-major.
///
/// Rows are indexed first: `m[(1, 3)]` is row 1, column 3, i.e. the y
/// translation of an affine transform. OpenGL expects column-major data, so
/// [`transpose`](Mat4::transpose) (or pass `GL_TRUE` for the transpose flag)
/// before uploading [`to_rows_array`](Mat4::to_rows_array) as a uniform.
///
/// Multiplication is associative but not commutative; vectors multiply on the
/// right as columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn row(&self, i: usize) -> Vec4 {
        let r = self.rows[i];
        Vec4::new(r[0], r[1], r[2], r[3])
    }

    pub fn col(&self, j: usize) -> Vec4 {
        Vec4::new(
            self.rows[0][j],
            self.rows[1][j],
            self.rows[2][j],
            self.rows[3][j],
        )
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::IDENTITY;
        for i in 0..4 {
            for j in 0..4 {
                out.rows[i][j] = self.rows[j][i];
            }
        }
        out
    }

    /// Elements flattened in row-major order (see the type-level note about
    /// OpenGL uploads).
    pub fn to_rows_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for i in 0..4 {
            out[i * 4..i * 4 + 4].copy_from_slice(&self.rows[i]);
        }
        out
    }

    /// Rotation about the x axis by `angle_deg` degrees, right-hand rule.
    pub fn from_rotation_x(angle_deg: f32) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the y axis by `angle_deg` degrees, right-hand rule.
    pub fn from_rotation_y(angle_deg: f32) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::from_rows([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the z axis by `angle_deg` degrees, right-hand rule.
    pub fn from_rotation_z(angle_deg: f32) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::from_rows([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about an arbitrary axis by `angle_deg` degrees.
    ///
    /// `axis` must be unit length.
    pub fn from_axis_angle(axis: Vec3, angle_deg: f32) -> Self {
        debug_assert!(
            (axis.length_squared() - 1.0).abs() < 1e-4,
            "rotation axis must be unit length"
        );
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let k = 1.0 - cos;
        let Vec3 { x, y, z } = axis;
        Self::from_rows([
            [
                cos + x * x * k,
                x * y * k - z * sin,
                x * z * k + y * sin,
                0.0,
            ],
            [
                y * x * k + z * sin,
                cos + y * y * k,
                y * z * k - x * sin,
                0.0,
            ],
            [
                z * x * k - y * sin,
                z * y * k + x * sin,
                cos + z * z * k,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_translation(t: Vec3) -> Self {
        let mut out = Self::IDENTITY;
        out.rows[0][3] = t.x;
        out.rows[1][3] = t.y;
        out.rows[2][3] = t.z;
        out
    }

    pub fn from_scale(sx: f32, sy: f32, sz: f32) -> Self {
        let mut out = Self::IDENTITY;
        out.rows[0][0] = sx;
        out.rows[1][1] = sy;
        out.rows[2][2] = sz;
        out
    }

    /// Symmetric-frustum perspective projection, OpenGL depth convention
    /// (clip z in [-1, 1] after the perspective divide).
    ///
    /// `fov_rad` is the vertical field of view in radians. Parameters are
    /// validated so a non-invertible or depth-inverted matrix cannot escape.
    pub fn perspective(
        fov_rad: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, ProjectionError> {
        if !(fov_rad > 0.0 && fov_rad < std::f32::consts::PI) {
            return Err(ProjectionError::FieldOfView(fov_rad));
        }
        if !(aspect > 0.0) {
            return Err(ProjectionError::Aspect(aspect));
        }
        if !(near > 0.0 && far > near) {
            return Err(ProjectionError::Planes { near, far });
        }
        Ok(Self::perspective_unchecked(fov_rad, aspect, near, far))
    }

    pub(crate) fn perspective_unchecked(fov_rad: f32, aspect: f32, near: f32, far: f32) -> Self {
        let focal = 1.0 / (0.5 * fov_rad).tan();
        let depth = far - near;
        Self::from_rows([
            [focal / aspect, 0.0, 0.0, 0.0],
            [0.0, focal, 0.0, 0.0],
            [0.0, 0.0, -(far + near) / depth, -2.0 * far * near / depth],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Orthographic projection, OpenGL depth convention.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut out = Self::IDENTITY;
        out.rows[0][0] = 2.0 / (right - left);
        out.rows[1][1] = 2.0 / (top - bottom);
        out.rows[2][2] = -2.0 / (far - near);
        out.rows[0][3] = -(right + left) / (right - left);
        out.rows[1][3] = -(top + bottom) / (top - bottom);
        out.rows[2][3] = -(far + near) / (far - near);
        out
    }

    /// Right-handed view matrix looking from `eye` toward `center`.
    ///
    /// Fails when `center` coincides with `eye` or when `up` is parallel to
    /// the view direction; both would degenerate the basis.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Result<Self, GeometryError> {
        let forward = (center - eye)
            .try_normalize()
            .ok_or(GeometryError::ZeroLengthVector)?;
        let side = forward
            .cross(up)
            .try_normalize()
            .ok_or(GeometryError::ParallelAxes)?;
        let true_up = side.cross(forward);

        Ok(Self::from_rows([
            [side.x, side.y, side.z, -side.dot(eye)],
            [true_up.x, true_up.y, true_up.z, -true_up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Apply to a direction (w = 0): rotation and scale, no translation.
    pub fn transform_vector3(&self, v: Vec3) -> Vec3 {
        (*self * v.extend(0.0)).truncate()
    }

    /// Apply to a point (w = 1) assuming an affine matrix.
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        (*self * p.extend(1.0)).truncate()
    }

    /// Apply to a point and perform the perspective divide.
    pub fn project_point3(&self, p: Vec3) -> Vec3 {
        let h = *self * p.extend(1.0);
        h.truncate() / h.w
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.rows[i][j]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        &mut self.rows[i][j]
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut out = Self::IDENTITY;
        for i in 0..4 {
            for j in 0..4 {
                out.rows[i][j] = self.row(i).dot(other.col(j));
            }
        }
        out
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}
