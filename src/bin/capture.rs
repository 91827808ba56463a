use clap::Parser;
use deorbit::automation::capture::{capture_coordinates, CaptureError};
use deorbit::automation::desktop::DesktopDevice;
use deorbit::config::CaptureArgs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let args = CaptureArgs::parse();
    deorbit::init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CaptureArgs) -> Result<(), CaptureError> {
    let mut device = DesktopDevice::new(Duration::ZERO)?;
    let stdin = io::stdin();
    let mut line = String::new();

    println!("Hover over each DAS control when asked (never click!) and press Enter.");
    let map = capture_coordinates(&mut device, |control| {
        print!("{}: ", control.prompt());
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all controls were recorded",
            ));
        }
        Ok(())
    })?;

    map.save(&args.output)?;
    println!("Positions have been written to {}", args.output.display());
    Ok(())
}
