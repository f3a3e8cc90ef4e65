//! wheel_visualizer — windowed entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use calibration_wheel::WheelConfig;
use wheel_visualizer::app::{run, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "wheel_visualizer", about = "Drag a range calibration wheel around")]
struct Args {
    /// TOML file with the wheel's starting values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with the drive marker shown.
    #[arg(long)]
    drive: bool,

    /// Full rotations that sweep the whole range.
    #[arg(long)]
    turns: Option<f64>,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    print_config: bool,

    #[arg(long, default_value_t = 480)]
    width: usize,

    #[arg(long, default_value_t = 480)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut wheel = match &args.config {
        Some(path) => WheelConfig::load(path)
            .with_context(|| format!("loading wheel config {}", path.display()))?,
        None => WheelConfig::default(),
    };
    if args.drive {
        wheel.drive_visible = true;
    }
    if let Some(turns) = args.turns {
        wheel.turns = turns;
    }
    wheel.validate().context("command line overrides")?;

    if args.print_config {
        print!("{}", WheelConfig::from_model(&wheel.build_model()).to_toml_string()?);
        return Ok(());
    }

    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║           Range Calibration Wheel — Viewer           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Drag the handles around the ring.  V = drive marker, Q = quit.");
    println!();

    let cfg = AppConfig { wheel, width: args.width.max(64), height: args.height.max(64) };
    log::info!("opening {}×{} window", cfg.width, cfg.height);
    run(cfg).context("visualizer")
}
