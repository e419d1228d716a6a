use anyhow::Result;
use clap::Parser;

use flycam::cli::Cli;
use flycam::demo::{self, FlythroughConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = FlythroughConfig::from(cli);

    println!(
        "flycam - headless flythrough, {} frames at {:.1} fps (set RUST_LOG=info for per-second poses)",
        config.frames,
        1.0 / config.step
    );

    let camera = demo::run_flythrough(&config)?;

    let eye = camera.eye();
    let forward = camera.forward();
    println!(
        "final pose: eye=({:.3}, {:.3}, {:.3}) forward=({:.3}, {:.3}, {:.3})",
        eye.x, eye.y, eye.z, forward.x, forward.y, forward.z
    );

    Ok(())
}
