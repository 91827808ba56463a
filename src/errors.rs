use crate::models::controls::Control;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Problems detected before any interaction with the target application.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("coordinate file {} could not be read: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("coordinate file {} is malformed: {source}", .path.display())]
    MalformedCoordinates {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("coordinate map has no position for \"{0}\"")]
    MissingControl(Control),
    #[error("perigee and apogee altitude fields share the same row, field spacing is zero")]
    ZeroFieldSpacing,
    #[error("sweep grid has no {0}")]
    EmptyAxis(&'static str),
    #[error("sweep grid contains a non-finite {axis} value: {value}")]
    NonFiniteValue { axis: &'static str, value: f64 },
    #[error("no sun-synchronous inclination exists at {0} km")]
    NoSunSynchronousOrbit(f64),
}

/// Failure of the input device itself (pointer, keyboard or clipboard).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeviceError {
    #[error("could not connect to the input system: {0}")]
    Connection(String),
    #[error("input simulation failed: {0}")]
    Input(String),
    #[error("clipboard access failed: {0}")]
    Clipboard(String),
}

/// The target application did not respond as expected. Recorded against a
/// single cell (or a whole altitude row), the sweep carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellFault {
    #[error("no text could be copied from the field at ({x}, {y}) within {waited:?}")]
    Timeout { x: i32, y: i32, waited: Duration },
    #[error("field at ({x}, {y}) reads back {actual:?} instead of {expected:?}")]
    EchoMismatch {
        x: i32,
        y: i32,
        expected: String,
        actual: String,
    },
    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Text copied from a DAS output field that cannot be turned into a lifetime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResultTextError {
    #[error("orbit lifetime text {raw:?} is not a number")]
    NotANumber { raw: String },
    #[error("orbit lifetime text {raw:?} starts like \"Greater\" but is not the propagation sentinel")]
    AmbiguousSentinel { raw: String },
    #[error("last year of propagation text {raw:?} is not a number")]
    LastYearNotANumber { raw: String },
}

/// Result Interpreter failure before it is tied to a sweep cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretError {
    #[error(transparent)]
    Text(#[from] ResultTextError),
    #[error(transparent)]
    Read(#[from] CellFault),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("cell h = {altitude_km} km, ratio = {ratio}: {source}")]
pub struct ParseFault {
    pub altitude_km: f64,
    pub ratio: f64,
    #[source]
    pub source: ResultTextError,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("{}: file not found", .path.display())]
    MissingFile { path: PathBuf },
    #[error("{}: I/O error: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: CSV error: {source}", .path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}: column {column:?} not found", .path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("{}: row {row}, column {column:?}: {raw:?} is not a number", .path.display())]
    ParseFloatError {
        path: PathBuf,
        row: usize,
        column: String,
        raw: String,
    },
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not prepare the DAS form: {0}")]
    Precondition(CellFault),
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error(transparent)]
    Parse(#[from] ParseFault),
    #[error(transparent)]
    Table(#[from] TableError),
}
