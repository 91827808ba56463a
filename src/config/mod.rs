pub mod cli;
pub mod sweep;

pub use cli::{Args, CaptureArgs};
pub use sweep::SweepConfig;
