//! Backend-agnostic input for driving the camera.
//!
//! The windowing layer (GLFW, winit, a test harness) implements [`Controller`]
//! and the frame loop turns the held buttons into camera mutator calls via
//! [`MovementState::apply`]. No event plumbing lives here.

use crate::camera::{Camera, DEFAULT_SPEED};

/// Turn rate for held rotation buttons, in degrees per second.
pub const ROTATION_RATE: f32 = 45.0;
/// Walk speed while the fast modifier is held.
pub const FAST_SPEED: f32 = 12.0;
/// Walk speed while the slow modifier is held.
pub const SLOW_SPEED: f32 = 2.5;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyE,
    KeyQ,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Shift,
    Ctrl,
}

/// Controller - reports which buttons are currently held
pub trait Controller {
    fn is_down(&self, button: Button) -> bool;
}

/// Snapshot of the movement-relevant buttons for one frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub rise: bool,
    pub descend: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub tilt_up: bool,
    pub tilt_down: bool,
    pub fast: bool,
    pub slow: bool,
}

impl MovementState {
    pub fn from_controller(controller: &impl Controller) -> Self {
        Self {
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
            rise: controller.is_down(Button::KeyE),
            descend: controller.is_down(Button::KeyQ),
            turn_left: controller.is_down(Button::ArrowLeft),
            turn_right: controller.is_down(Button::ArrowRight),
            tilt_up: controller.is_down(Button::ArrowUp),
            tilt_down: controller.is_down(Button::ArrowDown),
            fast: controller.is_down(Button::Shift),
            slow: controller.is_down(Button::Ctrl),
        }
    }

    const fn axis(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Issue camera mutators for the held buttons.
    ///
    /// Only nonzero axes call into the camera, so a frame with nothing held
    /// leaves a clean camera clean. Speed modifiers are applied before the
    /// translation so they affect the same frame they are pressed in.
    pub fn apply(&self, camera: &mut Camera, dt: f32) {
        if self.fast {
            camera.set_speed(FAST_SPEED);
        } else if self.slow {
            camera.set_speed(SLOW_SPEED);
        } else {
            camera.set_speed(DEFAULT_SPEED);
        }

        let walk = Self::axis(self.forward, self.backward);
        if walk != 0.0 {
            camera.walk(walk * dt);
        }
        let strafe = Self::axis(self.right, self.left);
        if strafe != 0.0 {
            camera.strafe(strafe * dt);
        }
        let raise = Self::axis(self.rise, self.descend);
        if raise != 0.0 {
            camera.raise(raise * dt);
        }
        let turn = Self::axis(self.turn_left, self.turn_right);
        if turn != 0.0 {
            camera.yaw(turn * ROTATION_RATE * dt);
        }
        let tilt = Self::axis(self.tilt_up, self.tilt_down);
        if tilt != 0.0 {
            camera.pitch(tilt * ROTATION_RATE * dt);
        }
    }
}
