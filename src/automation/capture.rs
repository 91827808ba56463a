use super::device::InputDevice;
use crate::errors::DeviceError;
use crate::models::controls::{Control, CoordinateMap};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("waiting for the operator failed: {0}")]
    Prompt(#[from] io::Error),
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error(transparent)]
    Config(#[from] crate::errors::ConfigError),
}

/// Records the pointer position of every control in capture order.
///
/// `wait_for` is called with each control and returns once the operator has
/// placed the pointer over it.
pub fn capture_coordinates<D, F>(
    device: &mut D,
    mut wait_for: F,
) -> Result<CoordinateMap, CaptureError>
where
    D: InputDevice,
    F: FnMut(Control) -> io::Result<()>,
{
    let mut positions = Vec::with_capacity(Control::ALL.len());
    for control in Control::ALL {
        wait_for(control)?;
        let point = device.pointer_position()?;
        tracing::info!(control = %control, x = point.x, y = point.y, "Position recorded");
        positions.push((control, point));
    }
    Ok(CoordinateMap::from_positions(positions)?)
}
