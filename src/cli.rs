// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycam")]
#[command(about = "Headless camera flythrough demo", long_about = None)]
pub struct Cli {
    /// Number of simulated frames
    #[arg(long, default_value_t = 360)]
    pub frames: u32,

    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub step: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Viewport aspect ratio
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect: f32,

    /// Height of the reflective water plane
    #[arg(long = "water-height", default_value_t = 0.0)]
    pub water_height: f32,
}
