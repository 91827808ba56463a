use super::device::{Clock, InputDevice, SystemClock};
use crate::constants::{DEFAULT_POLL_MS, DEFAULT_TIMEOUT_MS};
use crate::errors::{CellFault, ConfigError, DeviceError};
use crate::models::controls::{Control, CoordinateMap, ScreenPoint};
use crate::models::layout::FieldLayout;
use std::time::Duration;

// Primed into the clipboard before every copy so a copy that did not happen
// cannot be mistaken for field content.
const CLIPBOARD_MARKER: &str = "<deorbit: waiting for field copy>";

// Relative tolerance when a field echoes a number in a different notation
const ECHO_TOLERANCE: f64 = 1e-9;

/// Bounded polling of a copied field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polling {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for Polling {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_MS),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// The position-based protocol spoken with the DAS window: which control to
/// click, how a field is overwritten and how an output field is read.
pub struct DasSession<D: InputDevice, C: Clock = SystemClock> {
    device: D,
    clock: C,
    coordinates: CoordinateMap,
    layout: FieldLayout,
    polling: Polling,
    verify_inputs: bool,
}

impl<D: InputDevice, C: Clock> DasSession<D, C> {
    pub fn new(
        device: D,
        clock: C,
        coordinates: CoordinateMap,
        polling: Polling,
    ) -> Result<Self, ConfigError> {
        let layout = FieldLayout::from_coordinates(&coordinates)?;
        Ok(Self {
            device,
            clock,
            coordinates,
            layout,
            polling,
            verify_inputs: true,
        })
    }

    /// Enables or disables reading every typed value back from its field.
    pub fn with_verification(mut self, verify_inputs: bool) -> Self {
        self.verify_inputs = verify_inputs;
        self
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn control(&self, control: Control) -> ScreenPoint {
        self.coordinates.position(control)
    }

    pub fn move_to(&mut self, point: ScreenPoint) -> Result<(), DeviceError> {
        self.device.move_to(point)
    }

    pub fn click_control(&mut self, control: Control) -> Result<(), DeviceError> {
        self.device.move_to(self.coordinates.position(control))?;
        self.device.click()
    }

    pub fn reset(&mut self) -> Result<(), DeviceError> {
        tracing::debug!("Resetting DAS form");
        self.click_control(Control::ResetButton)
    }

    /// Selects the field content with a double click and types over it.
    pub fn set_field(&mut self, point: ScreenPoint, value: &str) -> Result<(), CellFault> {
        self.device.move_to(point)?;
        self.device.double_click()?;
        self.device.type_text(value)?;

        if self.verify_inputs {
            let echoed = self.read_field(point)?;
            if !echo_matches(value, &echoed) {
                return Err(CellFault::EchoMismatch {
                    x: point.x,
                    y: point.y,
                    expected: value.to_string(),
                    actual: echoed.trim().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn trigger_computation(&mut self) -> Result<(), DeviceError> {
        self.click_control(Control::RunButton)
    }

    /// Copies the content of the field at `point` through the clipboard.
    ///
    /// The copy is repeated every `polling.interval` until the clipboard holds
    /// something other than the marker, or `polling.timeout` has elapsed.
    ///
    /// Any non-marker text ends the wait, so a stale value is only caught if
    /// the field is blank until DAS has written the new one. DAS clears its
    /// output fields on Run; a field that keeps the previous cell's value
    /// would be read back as this cell's result.
    pub fn read_field(&mut self, point: ScreenPoint) -> Result<String, CellFault> {
        self.device.set_clipboard_text(CLIPBOARD_MARKER)?;
        let started = self.clock.now();

        loop {
            self.device.move_to(point)?;
            self.device.double_click()?;
            self.device.copy_selection()?;

            let text = self.device.clipboard_text()?;
            if text != CLIPBOARD_MARKER && !text.trim().is_empty() {
                return Ok(text);
            }

            let waited = self.clock.now().duration_since(started);
            if waited >= self.polling.timeout {
                return Err(CellFault::Timeout {
                    x: point.x,
                    y: point.y,
                    waited,
                });
            }
            tracing::trace!(x = point.x, y = point.y, "Field not copied yet, polling");
            self.clock.sleep(self.polling.interval);
        }
    }

    pub fn into_device(self) -> D {
        self.device
    }
}

fn echo_matches(expected: &str, actual: &str) -> bool {
    let (expected, actual) = (expected.trim(), actual.trim());
    if expected == actual {
        return true;
    }
    match (expected.parse::<f64>(), actual.parse::<f64>()) {
        (Ok(e), Ok(a)) => (e - a).abs() <= ECHO_TOLERANCE * e.abs().max(a.abs()).max(1.0),
        _ => false,
    }
}
