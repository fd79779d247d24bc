use apexsim_trackgen::{
    config::AppConfig,
    export::{self, TrackFormat},
    procgen::TrackGenerator,
    progress::WaypointProgress,
    RemovalStrategy, SeededRng,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a procedural ApexSim race track", long_about = None)]
struct Args {
    /// Path to trackgen.toml configuration file
    #[arg(short, long, default_value = "./trackgen.toml")]
    config: String,

    /// RNG seed; derived from the clock when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the generated track to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: json, yaml or msgpack (auto-detected from extension if not specified)
    #[arg(short, long)]
    format: Option<String>,

    /// Override the number of sampled points
    #[arg(long)]
    points: Option<usize>,

    /// Use order-independent boundary repair
    #[arg(long)]
    snapshot_removal: bool,

    /// Override log level (trace|debug|info|warn|error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_logging(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn resolve_format(explicit: Option<&str>, path: &Path) -> Result<TrackFormat, Box<dyn std::error::Error>> {
    if let Some(name) = explicit {
        return Ok(name.parse()?);
    }
    Ok(TrackFormat::from_path(path).unwrap_or(TrackFormat::Json))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = if Path::new(&args.config).exists() {
        AppConfig::load(&args.config)?
    } else {
        AppConfig::default()
    };

    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(&log_level, args.json_logs || config.logging.json);

    info!("Starting ApexSim track generator v{}", env!("CARGO_PKG_VERSION"));
    if !Path::new(&args.config).exists() {
        warn!("Config file {} not found, using defaults", args.config);
    }

    if let Some(points) = args.points {
        config.generator.point_count = points;
    }
    if args.snapshot_removal {
        config.generator.removal = RemovalStrategy::Snapshot;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("Generating track with seed {}", seed);

    let generator = TrackGenerator::new(config.generator.clone())?;
    let track = generator.generate(&mut SeededRng::new(seed))?;

    let output = args
        .output
        .clone()
        .or_else(|| config.output.path.as_ref().map(PathBuf::from));

    match output {
        Some(path) => {
            let format_name = args.format.as_deref().or(config.output.format.as_deref());
            let format = resolve_format(format_name, &path)?;
            export::save(&track, &path, format)?;
            info!("Track written to {} ({:?})", path.display(), format);
        }
        None => {
            println!("Seed: {}", seed);
            println!("  Centerline points: {}", track.centerline.len());
            println!("  Inner boundary points: {}", track.inner.len());
            println!("  Outer boundary points: {}", track.outer.len());
            println!("  Lap length: {:.1}", track.lap_length());

            if let Some(bounds) = track.bounds() {
                println!(
                    "  Bounds: ({:.1}, {:.1}) - ({:.1}, {:.1}), {:.1} x {:.1}",
                    bounds.min_x,
                    bounds.min_y,
                    bounds.max_x,
                    bounds.max_y,
                    bounds.width(),
                    bounds.height()
                );
            }
            if let Some(centroid) = track.centerline.centroid() {
                println!("  Centroid: ({:.1}, {:.1})", centroid.x, centroid.y);
            }

            let progress = WaypointProgress::new(&track, config.generator.track_width);
            println!(
                "  Waypoints: {} (reach radius {:.0})",
                progress.total(),
                progress.radius()
            );
            println!("  {}", track.centerline);
        }
    }

    Ok(())
}
