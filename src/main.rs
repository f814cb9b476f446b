use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cansat_dashboard::store::{FolderStore, LaunchSource};
use cansat_dashboard::telemetry::time::format_launch_date;
use cansat_dashboard::telemetry::{
    build_trajectory, classify, extract_series, Channel, TrajectoryStats,
};
use cansat_dashboard::web::{run_server, Config};

#[derive(Parser)]
#[command(name = "cansat-dashboard")]
#[command(about = "CanSat launch telemetry dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard API
    Serve {
        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },
    /// List the launches stored in a folder
    Launches { folder: PathBuf },
    /// Print status, trajectory statistics and optionally a series of one launch file
    Inspect {
        launch: PathBuf,
        #[arg(short, long, value_enum)]
        channel: Option<Channel>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config),
        Commands::Launches { folder } => launches(folder),
        Commands::Inspect { launch, channel } => inspect(&launch, channel),
    }
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn launches(folder: PathBuf) -> ExitCode {
    let store = FolderStore::new(folder);
    let launches = match store.list_launches() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error listing launches: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{} launches", launches.len());
    for launch in launches {
        let status = classify(Some(&launch));
        println!(
            "  {:>4}  {:<22} {:<22} {:<22} {}",
            launch.launch_id,
            format_launch_date(launch.start_date.as_deref()),
            format_launch_date(launch.end_date.as_deref()),
            status.status,
            status.duration
        );
    }
    ExitCode::SUCCESS
}

fn inspect(path: &Path, channel: Option<Channel>) -> ExitCode {
    let launch = match FolderStore::read_launch_file(path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error reading launch: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let status = classify(Some(&launch));
    println!("Launch {}", launch.launch_id);
    println!("  start:    {}", format_launch_date(launch.start_date.as_deref()));
    println!("  end:      {}", format_launch_date(launch.end_date.as_deref()));
    println!("  samples:  {}", launch.samples.len());
    println!("  status:   {} ({})", status.status, status.duration);

    let trajectory = build_trajectory(&launch.samples);
    let stats = TrajectoryStats::from_points(&trajectory);
    println!("  gps:      {} points", stats.point_count);
    println!("  altitude: {:.2}m .. {:.2}m", stats.min_altitude, stats.max_altitude);
    println!("  distance: {:.2}km", stats.total_distance_km);

    if let Some(channel) = channel {
        let series = extract_series(&launch.samples, channel);
        println!("{} ({} points)", channel.display_name(), series.len());
        println!("  {:<32} {}", "", channel.axis_label());
        for point in &series {
            println!("  {:<32} {:.2}", point.display_time(), point.value());
        }
    }

    ExitCode::SUCCESS
}
