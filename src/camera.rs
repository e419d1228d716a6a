//! First-person fly camera: coordinate frame, view/projection matrices,
//! planar-reflection view matrix.
//!
//! Per-frame protocol: call any number of mutators (`walk`, `strafe`,
//! `raise`, `yaw`, `pitch`, `set_eye`, `set_center`), then
//! [`Camera::update_view_matrix`] exactly once, then read the matrices.
//! Reading [`Camera::view_matrix`] while the camera is dirty returns the
//! previous frame's matrix; that ordering is the caller's contract, not
//! enforced here.

use crate::math::{GeometryError, Mat4, ProjectionError, Vec3};

/// Movement rate in world units per second, matching the walk speed the
/// interactive viewer ships with.
pub const DEFAULT_SPEED: f32 = 6.0;

const DEFAULT_FOV_DEG: f32 = 60.0;
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 100.0;

/// Yaw always rotates about this axis, not the camera's own up, so the
/// horizon stays level while turning.
const WORLD_UP: Vec3 = Vec3::Y;

/// Validity of the cached view matrix. The only `Dirty -> Clean` transition
/// is [`Camera::update_view_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewCache {
    Clean,
    Dirty,
}

/// A camera frame (eye, look-at center, orthonormal basis) with a lazily
/// recomputed view matrix and an eagerly recomputed projection matrix.
///
/// The asymmetry is deliberate: the view changes every frame, so it is
/// dirty-flagged and recomputed once per frame; the projection changes only
/// on resize, so [`Camera::perspective`] rebuilds it immediately and there is
/// no projection dirty flag.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    speed: f32,
    fov_deg: f32,
    aspect: f32,
    near: f32,
    far: f32,
    view: Mat4,
    projection: Mat4,
    reflection_view: Mat4,
    cache: ViewCache,
}

impl Camera {
    /// Build a camera at `eye` looking toward `center`.
    ///
    /// The basis is derived immediately and the view matrix computed once, so
    /// a freshly constructed camera is clean and readable. Fails when the two
    /// points coincide or the view direction is vertical (parallel to world
    /// up).
    pub fn new(eye: Vec3, center: Vec3) -> Result<Self, GeometryError> {
        let forward = (center - eye)
            .try_normalize()
            .ok_or(GeometryError::ZeroLengthVector)?;
        let right = forward
            .cross(WORLD_UP)
            .try_normalize()
            .ok_or(GeometryError::ParallelAxes)?;
        let up = right.cross(forward);

        let mut camera = Self {
            eye,
            center,
            forward,
            right,
            up,
            speed: DEFAULT_SPEED,
            fov_deg: DEFAULT_FOV_DEG,
            aspect: DEFAULT_ASPECT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            view: Mat4::IDENTITY,
            projection: Mat4::perspective_unchecked(
                DEFAULT_FOV_DEG.to_radians(),
                DEFAULT_ASPECT,
                DEFAULT_NEAR,
                DEFAULT_FAR,
            ),
            reflection_view: Mat4::IDENTITY,
            cache: ViewCache::Dirty,
        };
        camera.update_view_matrix()?;
        Ok(camera)
    }

    /// Move eye and center along the forward axis.
    pub fn walk(&mut self, delta: f32) {
        self.translate(self.forward, delta);
    }

    /// Move eye and center along the right axis.
    pub fn strafe(&mut self, delta: f32) {
        self.translate(self.right, delta);
    }

    /// Move eye and center along the up axis.
    pub fn raise(&mut self, delta: f32) {
        self.translate(self.up, delta);
    }

    fn translate(&mut self, axis: Vec3, delta: f32) {
        let step = axis * (self.speed * delta);
        self.eye += step;
        self.center += step;
        self.cache = ViewCache::Dirty;
    }

    /// Turn the look direction by `delta_deg` degrees about world up.
    ///
    /// Rotates the whole basis around the eye (not an orbit around the
    /// center) and re-aims `center` one unit down the new forward axis.
    pub fn yaw(&mut self, delta_deg: f32) {
        let rotation = Mat4::from_rotation_y(delta_deg);
        self.right = rotation.transform_vector3(self.right).normalize_or_zero();
        self.up = rotation.transform_vector3(self.up).normalize_or_zero();
        self.forward = rotation.transform_vector3(self.forward).normalize_or_zero();
        self.center = self.eye + self.forward;
        self.cache = ViewCache::Dirty;
    }

    /// Tilt the look direction by `delta_deg` degrees about the current
    /// right axis.
    pub fn pitch(&mut self, delta_deg: f32) {
        let rotation = Mat4::from_axis_angle(self.right, delta_deg);
        self.forward = rotation.transform_vector3(self.forward).normalize_or_zero();
        self.up = rotation.transform_vector3(self.up).normalize_or_zero();
        self.center = self.eye + self.forward;
        self.cache = ViewCache::Dirty;
    }

    /// Place the eye directly. The basis is not re-derived until the next
    /// [`Camera::update_view_matrix`].
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
        self.cache = ViewCache::Dirty;
    }

    /// Aim at a point directly. The basis is not re-derived until the next
    /// [`Camera::update_view_matrix`].
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.cache = ViewCache::Dirty;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Recompute the cached view matrix if any mutator ran since the last
    /// call; a no-op on a clean camera.
    ///
    /// The orthonormal basis is read back from the rows of the freshly built
    /// matrix instead of trusting the incrementally rotated vectors, which
    /// squashes drift accumulated over many small yaw/pitch steps. On error
    /// (eye/center coincident, up parallel to the view direction) the camera
    /// stays dirty and the previous matrix is kept.
    pub fn update_view_matrix(&mut self) -> Result<(), GeometryError> {
        if self.cache == ViewCache::Clean {
            return Ok(());
        }
        let view = Mat4::look_at(self.eye, self.center, self.up)?;
        self.right = Vec3::new(view[(0, 0)], view[(0, 1)], view[(0, 2)]);
        self.up = Vec3::new(view[(1, 0)], view[(1, 1)], view[(1, 2)]);
        self.forward = -Vec3::new(view[(2, 0)], view[(2, 1)], view[(2, 2)]);
        self.view = view;
        self.cache = ViewCache::Clean;
        Ok(())
    }

    /// Set a perspective projection. `fov_deg` is the vertical field of view
    /// in degrees. Takes effect immediately; call again whenever the aspect
    /// ratio changes.
    pub fn perspective(
        &mut self,
        fov_deg: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<(), ProjectionError> {
        let projection = Mat4::perspective(fov_deg.to_radians(), aspect, near, far)?;
        self.fov_deg = fov_deg;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        self.projection = projection;
        Ok(())
    }

    /// Rebuild the perspective projection with a new aspect ratio, keeping
    /// the stored field of view and clip planes. For window-resize handlers.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<(), ProjectionError> {
        self.perspective(self.fov_deg, aspect, self.near, self.far)
    }

    /// Overwrite the projection with an orthographic one, depth range fixed
    /// to [-1, 1]. No mode flag is kept; the last projection call wins.
    pub fn orthographic(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.projection = Mat4::orthographic(left, right, bottom, top, -1.0, 1.0);
    }

    /// Build the view matrix for rendering content mirrored across the
    /// horizontal plane at `height` (water, polished floors).
    ///
    /// Mirrors the eye height across the plane, aims at the look target at
    /// that mirrored height, and keeps the current up vector. Pure with
    /// respect to the camera frame: does not dirty the view matrix.
    pub fn build_reflection_matrix(&mut self, height: f32) -> Result<(), GeometryError> {
        let position = Vec3::new(self.eye.x, -self.eye.y + 2.0 * height, self.eye.z);
        let target = Vec3::new(self.center.x, position.y, self.center.z);
        self.reflection_view = Mat4::look_at(position, target, self.up)?;
        Ok(())
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn reflection_view_matrix(&self) -> Mat4 {
        self.reflection_view
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// True when a mutator ran since the last [`Camera::update_view_matrix`].
    pub fn needs_update(&self) -> bool {
        self.cache == ViewCache::Dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 1.0, 4.5), Vec3::new(0.0, 1.0, 0.0)).unwrap()
    }

    #[test]
    fn test_construction_is_clean_with_valid_view() {
        let camera = test_camera();
        assert!(!camera.needs_update());
        assert_ne!(camera.view_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_construction_rejects_coincident_points() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            Camera::new(p, p),
            Err(GeometryError::ZeroLengthVector)
        ));
    }

    #[test]
    fn test_construction_rejects_vertical_view() {
        let eye = Vec3::ZERO;
        let center = Vec3::new(0.0, 5.0, 0.0);
        assert!(matches!(
            Camera::new(eye, center),
            Err(GeometryError::ParallelAxes)
        ));
    }

    #[test]
    fn test_mutators_mark_dirty() {
        let mut camera = test_camera();
        camera.walk(0.1);
        assert!(camera.needs_update());
        camera.update_view_matrix().unwrap();
        assert!(!camera.needs_update());

        camera.set_eye(Vec3::new(1.0, 1.0, 1.0));
        assert!(camera.needs_update());
    }

    #[test]
    fn test_failed_update_keeps_camera_dirty() {
        let mut camera = test_camera();
        let stale = camera.view_matrix();
        camera.set_center(camera.eye());
        assert_eq!(
            camera.update_view_matrix(),
            Err(GeometryError::ZeroLengthVector)
        );
        assert!(camera.needs_update());
        assert_eq!(camera.view_matrix(), stale);
    }

    #[test]
    fn test_default_projection_is_perspective() {
        let camera = test_camera();
        let projection = camera.projection_matrix();
        assert_eq!(projection[(3, 2)], -1.0);
        assert_eq!(projection[(3, 3)], 0.0);
    }

    #[test]
    fn test_set_aspect_keeps_fov_and_planes() {
        let mut camera = test_camera();
        camera.perspective(45.0, 1.0, 0.5, 200.0).unwrap();
        camera.set_aspect(2.0).unwrap();

        let expected = Mat4::perspective(45.0_f32.to_radians(), 2.0, 0.5, 200.0).unwrap();
        assert_eq!(camera.projection_matrix(), expected);
    }

    #[test]
    fn test_orthographic_overwrites_projection() {
        let mut camera = test_camera();
        camera.orthographic(0.0, 800.0, 0.0, 600.0);
        let projection = camera.projection_matrix();
        assert_eq!(projection[(3, 2)], 0.0);
        assert_eq!(projection[(3, 3)], 1.0);
    }
}
