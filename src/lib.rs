pub mod automation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod interpreter;
pub mod logging;
pub mod models;
pub mod physics;
pub mod sweep;

pub use logging::init_logging;
