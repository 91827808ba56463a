use super::cli::Args;
use crate::automation::session::Polling;
use crate::constants::{APP_DIR, COORDINATE_FILE};
use crate::models::grid::SweepGrid;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything a sweep run needs besides the coordinate map itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub start_year: i32,
    pub grid: SweepGrid,
    pub coordinates_path: PathBuf,
    pub output_dir: PathBuf,
    pub settle: Duration,
    pub polling: Polling,
    pub verify_inputs: bool,
}

impl SweepConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            start_year: args.start_year,
            grid: SweepGrid::default(),
            coordinates_path: resolve_coordinates_path(args.coords.as_deref()),
            output_dir: args.output_dir.clone(),
            settle: Duration::from_millis(args.settle_ms),
            polling: Polling {
                interval: Duration::from_millis(args.poll_ms),
                timeout: Duration::from_millis(args.timeout_ms),
            },
            verify_inputs: !args.no_verify,
        }
    }
}

/// An explicit path wins; otherwise `./dict.json` if present, falling back to
/// the per-user config directory.
pub fn resolve_coordinates_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let local = PathBuf::from(COORDINATE_FILE);
    if local.is_file() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(COORDINATE_FILE))
        .filter(|path| path.is_file())
        .unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_coordinates_path_wins() {
        let path = resolve_coordinates_path(Some(Path::new("/tmp/elsewhere.json")));
        assert_eq!(path, PathBuf::from("/tmp/elsewhere.json"));
    }

    #[test]
    fn config_from_args() {
        let args = Args::try_parse_from([
            "deorbit",
            "2029",
            "--coords",
            "pos.json",
            "--timeout-ms",
            "500",
            "--no-verify",
        ])
        .unwrap();
        let config = SweepConfig::from_args(&args);
        assert_eq!(config.start_year, 2029);
        assert_eq!(config.coordinates_path, PathBuf::from("pos.json"));
        assert_eq!(config.polling.timeout, Duration::from_millis(500));
        assert!(!config.verify_inputs);
        assert_eq!(config.grid.cell_count(), 30);
    }
}
