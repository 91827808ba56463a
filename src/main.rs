use clap::Parser;
use deorbit::automation::desktop::DesktopDevice;
use deorbit::automation::device::SystemClock;
use deorbit::automation::session::DasSession;
use deorbit::config::{Args, SweepConfig};
use deorbit::errors::SweepError;
use deorbit::models::CoordinateMap;
use deorbit::sweep::{SweepDriver, SweepReport};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Wrong arity exits here with the usage message
    let args = Args::parse();
    deorbit::init_logging(&args.log_level);

    match run(&args) {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(report) => {
            eprintln!(
                "{} of the cells could not be computed and were written as NaN:",
                report.failed_cells.len()
            );
            for cell in &report.failed_cells {
                eprintln!(
                    "  h = {} km, ratio = {}: {}",
                    cell.altitude_km, cell.ratio, cell.fault
                );
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<SweepReport, SweepError> {
    let config = SweepConfig::from_args(args);

    // Coordinate map problems are reported before any input is simulated
    let coordinates = CoordinateMap::load(&config.coordinates_path)?;
    let device = DesktopDevice::new(config.settle)?;
    let session = DasSession::new(device, SystemClock, coordinates, config.polling)?
        .with_verification(config.verify_inputs);

    let outcome = SweepDriver::new(session, config.grid.clone(), config.start_year).run()?;

    let path = outcome.table.export(&config.output_dir, config.start_year)?;
    println!("Sweep results have been written to {}", path.display());

    Ok(outcome.report)
}
