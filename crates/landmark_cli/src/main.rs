use std::path::PathBuf;

use clap::{Parser, Subcommand};
use landmark_bearing::{bearing_with_subtract, heading_from_bearing, line_heading, yaw_rotation};
use landmark_config::PlacementConfig;
use landmark_place::{PlaceError, load_landmark_csv, place_all, polyline};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "landmark", about = "Landmark bearing and anchor placement CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Signed heading from a compass bearing
    Heading {
        /// Compass bearing in degrees [0, 360]
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
    },
    /// Subtract one bearing from another on the 360 degree circle
    Subtract {
        /// Compass bearing in degrees [0, 360]
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
        /// Bearing to subtract, degrees [0, 360]
        #[arg(allow_hyphen_values = true)]
        subtract: f64,
    },
    /// Heading of a line model surveyed along a bearing
    LineHeading {
        /// Survey bearing in degrees [0, 360]
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
    },
    /// Yaw quaternion for a signed heading
    Rotation {
        /// Signed heading in degrees
        #[arg(allow_hyphen_values = true)]
        heading: f64,
    },
    /// Place anchors for every line in a landmark CSV
    Place {
        /// Landmark CSV file
        #[arg(long)]
        csv: PathBuf,
        /// Camera altitude in meters
        #[arg(long, allow_hyphen_values = true)]
        camera_altitude: f64,
        /// Placement settings (TOML); defaults if omitted or missing
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(err: impl std::fmt::Display) -> ! {
    debug!(error = %err, "command failed");
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn run_place(
    csv: PathBuf,
    camera_altitude: f64,
    config: Option<PathBuf>,
) -> Result<(), PlaceError> {
    let config = match config {
        Some(path) => PlacementConfig::load_from(&path)?,
        None => PlacementConfig::default(),
    };
    let lines = load_landmark_csv(&csv)?;
    let anchors = place_all(&lines, camera_altitude, &config)?;

    for (i, (line, anchor)) in lines.iter().zip(&anchors).enumerate() {
        let [start, end] = polyline(line);
        let q = anchor.rotation;
        println!(
            "#{i}: ({:.7}, {:.7}) alt {:.2} m heading {:.3} deg",
            anchor.position.latitude_deg,
            anchor.position.longitude_deg,
            anchor.altitude_m,
            anchor.heading_deg
        );
        println!(
            "    q = ({:.6}, {:.6}, {:.6}, {:.6}) scale = ({:.3}, {:.3}, {:.3})",
            q.qx, q.qy, q.qz, q.qw, anchor.scale[0], anchor.scale[1], anchor.scale[2]
        );
        println!(
            "    line ({:.7}, {:.7}) -> ({:.7}, {:.7})",
            start.latitude_deg, start.longitude_deg, end.latitude_deg, end.longitude_deg
        );
    }
    println!("{} anchors placed", anchors.len());
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Heading { bearing } => match heading_from_bearing(bearing) {
            Ok(h) => println!("Heading: {h:.6} deg"),
            Err(e) => fail(e),
        },

        Commands::Subtract { bearing, subtract } => {
            match bearing_with_subtract(bearing, subtract) {
                Ok(b) => println!("Bearing: {b:.6} deg"),
                Err(e) => fail(e),
            }
        }

        Commands::LineHeading { bearing } => match line_heading(bearing) {
            Ok(h) => {
                let q = yaw_rotation(h);
                println!("Heading: {h:.6} deg");
                println!("Rotation: ({:.6}, {:.6}, {:.6}, {:.6})", q.qx, q.qy, q.qz, q.qw);
            }
            Err(e) => fail(e),
        },

        Commands::Rotation { heading } => {
            let q = yaw_rotation(heading);
            println!("Rotation: ({:.6}, {:.6}, {:.6}, {:.6})", q.qx, q.qy, q.qz, q.qw);
        }

        Commands::Place {
            csv,
            camera_altitude,
            config,
        } => {
            if let Err(e) = run_place(csv, camera_altitude, config) {
                fail(e);
            }
        }
    }
}
