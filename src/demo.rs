//! Headless flythrough: a scripted tour that drives the camera through the
//! same per-frame protocol the interactive viewer uses (mutators, one view
//! update, reflection rebuild, matrix reads) without a window or GPU.

use anyhow::Context;
use log::info;

use crate::camera::Camera;
use crate::cli::Cli;
use crate::controller::MovementState;
use crate::frame::FrameClock;
use crate::math::Vec3;

#[derive(Debug, Clone)]
pub struct FlythroughConfig {
    pub frames: u32,
    pub step: f32,
    pub fov: f32,
    pub aspect: f32,
    pub water_height: f32,
}

impl Default for FlythroughConfig {
    fn default() -> Self {
        Self {
            frames: 360,
            step: 1.0 / 60.0,
            fov: 60.0,
            aspect: 16.0 / 9.0,
            water_height: 0.0,
        }
    }
}

impl From<Cli> for FlythroughConfig {
    fn from(cli: Cli) -> Self {
        Self {
            frames: cli.frames,
            step: cli.step,
            fov: cli.fov,
            aspect: cli.aspect,
            water_height: cli.water_height,
        }
    }
}

/// Held buttons for one frame of the tour: walk in, sweep right while
/// walking, tilt down over the water, then climb away turning back.
fn script(frame: u32, total: u32) -> MovementState {
    let phase = frame as f32 / total as f32;
    let mut state = MovementState::default();
    if phase < 0.25 {
        state.forward = true;
    } else if phase < 0.5 {
        state.forward = true;
        state.turn_right = true;
    } else if phase < 0.75 {
        state.left = true;
        state.tilt_down = true;
    } else {
        state.backward = true;
        state.rise = true;
        state.turn_left = true;
    }
    state
}

/// Run the scripted tour and return the final camera.
pub fn run_flythrough(config: &FlythroughConfig) -> anyhow::Result<Camera> {
    let mut camera = Camera::new(Vec3::new(0.0, 1.0, 4.5), Vec3::new(0.0, 1.0, 0.0))
        .context("initial camera pose is degenerate")?;
    camera
        .perspective(config.fov, config.aspect, 0.1, 100.0)
        .context("invalid projection parameters")?;

    let mut clock = FrameClock::fixed(config.step);
    for frame in 0..config.frames {
        let tick = clock.tick();

        script(frame, config.frames).apply(&mut camera, tick.delta);
        camera
            .update_view_matrix()
            .with_context(|| format!("view update failed on frame {}", tick.number))?;
        camera
            .build_reflection_matrix(config.water_height)
            .with_context(|| format!("reflection update failed on frame {}", tick.number))?;

        if tick.number % 60 == 0 {
            let eye = camera.eye();
            let forward = camera.forward();
            info!(
                "t={:.2}s eye=({:.2}, {:.2}, {:.2}) forward=({:.2}, {:.2}, {:.2})",
                tick.time, eye.x, eye.y, eye.z, forward.x, forward.y, forward.z
            );
        }
    }

    Ok(camera)
}
