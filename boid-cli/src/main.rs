use anyhow::{Context, Result};
use boid_cli::{settings, Runner};
use boid_core::{Behavior, Vector2D};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boid steering simulation", long_about = None)]
struct Args {
    /// JSON settings file (defaults are used for anything it leaves out)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// RNG seed; overrides the settings file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Behaviors to switch on, e.g. `bounds,flock,avoid` (added to the settings file's toggles)
    #[arg(short, long, value_delimiter = ',')]
    enable: Vec<String>,

    /// Seek target as `x,y`
    #[arg(long, value_delimiter = ',', num_args = 2)]
    target: Option<Vec<f32>>,

    /// Write a frame every N ticks (0 = final frame only)
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Output file for JSON-lines frames (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_target(values: &[f32]) -> Result<Vector2D> {
    match values {
        [x, y] if x.is_finite() && y.is_finite() => Ok(Vector2D::new(*x, *y)),
        [x, y] => anyhow::bail!("--target must be finite, got {},{}", x, y),
        _ => anyhow::bail!("--target expects exactly two numbers, got {}", values.len()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Boid simulation starting...");

    let settings = settings::load(args.config.as_deref())?;
    let mut runner = Runner::new(&settings, args.seed).context("Failed to initialize simulation")?;

    for name in &args.enable {
        let behavior: Behavior = name
            .parse()
            .with_context(|| format!("Invalid --enable value `{}`", name))?;
        runner.toggles_mut().set(behavior, true);
    }

    if let Some(values) = &args.target {
        runner.set_target(Some(parse_target(values)?));
    }

    if runner.toggles().seek && args.target.is_none() && settings.target.is_none() {
        log::warn!("Seek is enabled but no target was given; it will have no effect");
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            log::info!("Writing frames to {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = runner
        .run(args.ticks, args.every, &mut out)
        .context("Simulation error")?;

    log::info!(
        "Done: {} ticks, {} frames, {} boids in {:.3}s",
        summary.ticks,
        summary.frames_written,
        summary.boids,
        summary.elapsed_secs
    );

    Ok(())
}
