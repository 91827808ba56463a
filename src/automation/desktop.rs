use super::device::InputDevice;
use crate::errors::DeviceError;
use crate::models::controls::ScreenPoint;
use arboard::Clipboard;
use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use std::thread;
use std::time::Duration;

/// Real pointer/keyboard (enigo) and system clipboard (arboard).
///
/// Every action is followed by a `settle` pause so the target window has
/// processed it before the next one arrives.
pub struct DesktopDevice {
    enigo: Enigo,
    clipboard: Clipboard,
    settle: Duration,
}

impl DesktopDevice {
    pub fn new(settle: Duration) -> Result<Self, DeviceError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| DeviceError::Connection(e.to_string()))?;
        let clipboard = Clipboard::new().map_err(|e| DeviceError::Clipboard(e.to_string()))?;
        Ok(Self {
            enigo,
            clipboard,
            settle,
        })
    }

    fn pause(&self) {
        if !self.settle.is_zero() {
            thread::sleep(self.settle);
        }
    }

    fn input<T>(&mut self, result: Result<T, enigo::InputError>) -> Result<T, DeviceError> {
        let value = result.map_err(|e| DeviceError::Input(e.to_string()))?;
        self.pause();
        Ok(value)
    }
}

impl InputDevice for DesktopDevice {
    fn move_to(&mut self, point: ScreenPoint) -> Result<(), DeviceError> {
        let result = self.enigo.move_mouse(point.x, point.y, Coordinate::Abs);
        self.input(result)
    }

    fn click(&mut self) -> Result<(), DeviceError> {
        let result = self.enigo.button(Button::Left, Direction::Click);
        self.input(result)
    }

    fn double_click(&mut self) -> Result<(), DeviceError> {
        // No pause between the two clicks or they are not seen as a double click
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| DeviceError::Input(e.to_string()))?;
        let result = self.enigo.button(Button::Left, Direction::Click);
        self.input(result)
    }

    fn type_text(&mut self, text: &str) -> Result<(), DeviceError> {
        let result = self.enigo.text(text);
        self.input(result)
    }

    fn copy_selection(&mut self) -> Result<(), DeviceError> {
        let copied = self
            .enigo
            .key(Key::Control, Direction::Press)
            .and_then(|_| self.enigo.key(Key::Unicode('c'), Direction::Click));
        // Always release Ctrl
        let released = self.enigo.key(Key::Control, Direction::Release);
        self.input(copied.and(released))
    }

    fn clipboard_text(&mut self) -> Result<String, DeviceError> {
        self.clipboard
            .get_text()
            .map_err(|e| DeviceError::Clipboard(e.to_string()))
    }

    fn set_clipboard_text(&mut self, text: &str) -> Result<(), DeviceError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| DeviceError::Clipboard(e.to_string()))
    }

    fn pointer_position(&mut self) -> Result<ScreenPoint, DeviceError> {
        let (x, y) = self
            .enigo
            .location()
            .map_err(|e| DeviceError::Input(e.to_string()))?;
        Ok(ScreenPoint::new(x, y))
    }
}
