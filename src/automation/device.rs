use crate::errors::DeviceError;
use crate::models::controls::ScreenPoint;
use std::time::{Duration, Instant};

/// Raw pointer, keyboard and clipboard capabilities of the desktop session
/// the target application runs in. Every call blocks until the action has
/// been issued.
pub trait InputDevice {
    fn move_to(&mut self, point: ScreenPoint) -> Result<(), DeviceError>;
    fn click(&mut self) -> Result<(), DeviceError>;
    fn double_click(&mut self) -> Result<(), DeviceError>;
    fn type_text(&mut self, text: &str) -> Result<(), DeviceError>;
    /// Ctrl+C on whatever is currently selected.
    fn copy_selection(&mut self) -> Result<(), DeviceError>;
    fn clipboard_text(&mut self) -> Result<String, DeviceError>;
    fn set_clipboard_text(&mut self, text: &str) -> Result<(), DeviceError>;
    fn pointer_position(&mut self) -> Result<ScreenPoint, DeviceError>;
}

/// Time source for polling.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration)
    }
}
