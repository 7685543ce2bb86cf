use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coord-convert")]
#[command(about = "Convert coordinates between decimal degrees, DMS and reference systems")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format decimal degrees as DMS with hemisphere letters
    #[command(allow_negative_numbers = true)]
    #[command(group(
        ArgGroup::new("coordinate")
            .required(true)
            .multiple(true)
            .args(["latitude", "longitude"])
    ))]
    ToDms {
        #[arg(long, help = "Latitude in decimal degrees [-90, 90]")]
        latitude: Option<f64>,

        #[arg(long, help = "Longitude in decimal degrees [-180, 180]")]
        longitude: Option<f64>,
    },

    /// Convert a DMS (or plain decimal) coordinate to decimal degrees
    ToDd {
        #[arg(help = "Coordinate such as 33°41'12.2\"S")]
        coordinate: String,
    },

    /// Reproject a single x,y(,z) position between reference systems
    #[command(allow_negative_numbers = true)]
    Transform {
        #[arg(long, help = "Source CRS (e.g. EPSG:4326) [default: from settings]")]
        from: Option<String>,

        #[arg(long, help = "Target CRS (e.g. EPSG:3857) [default: from settings]")]
        to: Option<String>,

        #[arg(short, long, help = "Settings file with source_crs/target_crs")]
        config: Option<PathBuf>,

        #[arg(long, help = "Format the result as longitude/latitude DMS")]
        dms: bool,

        x: f64,

        y: f64,

        z: Option<f64>,
    },
}
