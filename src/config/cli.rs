use crate::constants::{DEFAULT_POLL_MS, DEFAULT_SETTLE_MS, DEFAULT_TIMEOUT_MS};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deorbit")]
#[command(about = "Sweeps NASA DAS orbit lifetimes over altitude and area-to-mass ratio")]
pub struct Args {
    /// First year of the propagation, typed into DAS "Start Year"
    pub start_year: i32,

    /// Coordinate map written by deorbit-capture (default: ./dict.json,
    /// then <config dir>/deorbit/dict.json)
    #[arg(short, long)]
    pub coords: Option<PathBuf>,

    /// Directory the start_year_<year>.csv table is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Pause after every simulated input action (ms)
    #[arg(long, default_value_t = DEFAULT_SETTLE_MS)]
    pub settle_ms: u64,

    /// Interval between attempts to copy an output field (ms)
    #[arg(long, default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,

    /// Give up on an output field after this long (ms)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Do not read typed values back from their fields
    #[arg(long)]
    pub no_verify: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(name = "deorbit-capture")]
#[command(about = "Records the screen positions of the DAS controls used by deorbit")]
pub struct CaptureArgs {
    /// Where to write the coordinate map
    #[arg(short, long, default_value = crate::constants::COORDINATE_FILE)]
    pub output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}
