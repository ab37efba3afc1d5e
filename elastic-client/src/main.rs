use anyhow::{Context, Result};
use clap::Parser;
use elastic_client::{demo_script, Replay};
use elastic_shared::{FollowerSettings, Script};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replays pointer paths through the elastic cursor", long_about = None)]
struct Args {
    /// Pointer script (JSON). Runs the built-in demo sweep when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Follower settings (JSON) overriding the script's own
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Frame cadence used to drive the follower
    #[arg(short, long, default_value_t = 60.0)]
    fps: f32,

    /// Frames rendered after each pointer sample
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    frames_per_sample: u32,

    /// Extra frames rendered after the last sample
    #[arg(long, default_value_t = 30)]
    settle_frames: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn load_script(args: &Args) -> Result<Script> {
    let mut script = match &args.script {
        Some(path) => {
            log::info!("Loading script from {}", path.display());
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            Script::from_json(&json).context("Failed to parse script")?
        }
        None => {
            log::info!("No script given, using the demo sweep");
            demo_script()
        }
    };

    if let Some(path) = &args.settings {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        let settings: FollowerSettings =
            serde_json::from_str(&json).context("Failed to parse follower settings")?;
        script.settings = settings;
    }

    Ok(script)
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

    let script = load_script(&args)?;
    log::info!(
        "{} samples, {} regions at {} fps",
        script.samples.len(),
        script.regions.len(),
        args.fps
    );

    let mut replay = Replay::new(&script, args.fps, args.frames_per_sample)
        .context("Failed to initialize replay")?;
    let trace = replay
        .run(&script.samples, args.settle_frames)
        .context("Replay error")?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in &trace {
        serde_json::to_writer(&mut out, frame)?;
        writeln!(out)?;
    }
    out.flush()?;

    let stuck_frames = trace.iter().filter(|f| f.pose.stuck).count();
    log::info!(
        "Rendered {} frames ({} stuck to a region)",
        replay.frames_rendered(),
        stuck_frames
    );

    Ok(())
}
