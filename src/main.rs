//! Demo driver: drops a capsule body onto a voxel slab and logs each frame.

use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{IVec3, Vec3};
use log::{info, warn};
use voxel_body::{init_logging, Body, BodyConfig, FrameClock, SparseVoxelWorld, VoxelWorld};

/// Drops a capsule onto a slab of voxels and logs its motion
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 180)]
    steps: u32,

    /// Seconds per frame when not running in real time
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Drive frames from the wall clock instead of a fixed step
    #[arg(long)]
    realtime: bool,

    /// Starting height of the capsule centre
    #[arg(long, default_value_t = 5.0)]
    drop_height: f32,

    /// Grid cell edge length
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// JSON file with a body configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<BodyConfig> {
    let Some(file) = path else {
        return Ok(BodyConfig::capsule(2.0, 0.5));
    };
    let json = fs::read_to_string(file)
        .with_context(|| format!("reading body config {}", file.display()))?;
    BodyConfig::from_json_str(&json)
        .with_context(|| format!("parsing body config {}", file.display()))
}

fn build_slab(scale: f32) -> Result<SparseVoxelWorld> {
    let mut world = SparseVoxelWorld::new(scale)?;
    world.fill(IVec3::new(-4, 0, -4), IVec3::new(3, 0, 3), 1);
    Ok(world)
}

fn simulate<W: VoxelWorld + ?Sized>(body: &mut Body<'_, W>, args: &Args) -> Result<()> {
    let mut frame = 0_u32;
    let mut advance = |dt: f32| -> Result<()> {
        let report = body.step(dt)?;
        frame += 1;
        if !report.resolution.converged {
            warn!("frame {frame}: resolver left residual penetration");
        }
        info!(
            "frame {frame}: position {:?} velocity {:?}",
            body.position(),
            body.velocity()
        );
        Ok(())
    };

    if args.realtime {
        let interval = Duration::try_from_secs_f32(args.dt).context("invalid frame interval")?;
        let mut clock = FrameClock::new();
        let mut failure = None;
        let mut remaining = args.steps;
        clock.run(interval, |_, dt| {
            if remaining == 0 {
                return ControlFlow::Break(());
            }
            remaining -= 1;
            match advance(dt) {
                Ok(()) => ControlFlow::Continue(()),
                Err(e) => {
                    failure = Some(e);
                    ControlFlow::Break(())
                }
            }
        });
        info!("simulated {:.3}s of wall-clock time", clock.elapsed());
        return failure.map_or(Ok(()), Err);
    }

    for _ in 0..args.steps {
        advance(args.dt)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let world = build_slab(args.scale)?;
    let mut body = Body::new(&world, config)?;
    body.set_position(Vec3::new(0.0, args.drop_height, 0.0));
    body.set_acceleration(Vec3::new(0.0, -9.8, 0.0));

    simulate(&mut body, &args)?;
    info!("resting at {:?}", body.position());
    Ok(())
}
