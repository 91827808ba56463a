#![allow(dead_code)]

use deorbit::automation::device::{Clock, InputDevice};
use deorbit::automation::session::{DasSession, Polling};
use deorbit::errors::DeviceError;
use deorbit::models::layout::{FieldLayout, FormField};
use deorbit::models::{Control, CoordinateMap, ScreenPoint};
use deorbit::physics::orbital::OrbitalMechanics;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const COORDINATES_JSON: &str = r#"{
    "Reset Button": [100, 40],
    "Run Button": [160, 40],
    "Start Year": [300, 120],
    "Perigee Altitude": [300, 200],
    "Apogee Altitude": [300, 225],
    "Orbit Lifetime": [620, 400],
    "Last Year": [620, 430]
}"#;

pub fn coordinates() -> CoordinateMap {
    CoordinateMap::from_json_str(COORDINATES_JSON, Path::new("dict.json")).unwrap()
}

/// What DAS shows after Run for one (altitude, ratio) input.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Lifetime(String),
    /// "Greater than ..." with the last propagated year `years` after the start year.
    BeyondPropagation { years: f64 },
    /// Output fields stay blank.
    Hang,
}

pub type Responder = Box<dyn Fn(f64, f64) -> Response>;

/// Lifetimes grow with altitude and shrink with the area-to-mass ratio; the
/// highest, heaviest cells outlive the propagation window.
pub fn nominal_response(altitude_km: f64, ratio: f64) -> Response {
    if altitude_km >= 600.0 && ratio < 0.025 {
        Response::BeyondPropagation { years: 126.0 }
    } else {
        Response::Lifetime(format!("{:.2}", (altitude_km - 400.0) / (ratio * 100.0)))
    }
}

pub fn expected_years(altitude_km: f64, ratio: f64) -> f64 {
    match nominal_response(altitude_km, ratio) {
        Response::Lifetime(text) => text.parse().unwrap(),
        Response::BeyondPropagation { years } => years,
        Response::Hang => unreachable!(),
    }
}

pub struct FakeState {
    pointer: ScreenPoint,
    selected: Option<(i32, i32)>,
    fields: HashMap<(i32, i32), String>,
    clipboard: String,
    coordinates: CoordinateMap,
    layout: FieldLayout,
    responder: Responder,
    /// Rewrites typed text before it lands in the field at a position.
    typing_filter: Option<Box<dyn Fn((i32, i32), &str) -> String>>,
    pub actions: usize,
    pub runs: usize,
}

/// A simulated DAS window: fields addressed by screen position, a Run button
/// that fills the output fields from the typed inputs, and a clipboard.
#[derive(Clone)]
pub struct FakeDas {
    state: Rc<RefCell<FakeState>>,
}

fn key(point: ScreenPoint) -> (i32, i32) {
    (point.x, point.y)
}

impl FakeDas {
    pub fn new(responder: Responder) -> Self {
        let coordinates = coordinates();
        let layout = FieldLayout::from_coordinates(&coordinates).unwrap();
        Self {
            state: Rc::new(RefCell::new(FakeState {
                pointer: ScreenPoint::origin(),
                selected: None,
                fields: HashMap::new(),
                clipboard: String::new(),
                coordinates,
                layout,
                responder,
                typing_filter: None,
                actions: 0,
                runs: 0,
            })),
        }
    }

    pub fn nominal() -> Self {
        Self::new(Box::new(nominal_response))
    }

    pub fn with_typing_filter(self, filter: impl Fn((i32, i32), &str) -> String + 'static) -> Self {
        self.state.borrow_mut().typing_filter = Some(Box::new(filter));
        self
    }

    pub fn actions(&self) -> usize {
        self.state.borrow().actions
    }

    pub fn runs(&self) -> usize {
        self.state.borrow().runs
    }

    pub fn field_text(&self, point: ScreenPoint) -> Option<String> {
        self.state.borrow().fields.get(&key(point)).cloned()
    }
}

impl FakeState {
    fn text(&self, point: ScreenPoint) -> Option<&str> {
        self.fields.get(&key(point)).map(String::as_str)
    }

    fn number(&self, point: ScreenPoint) -> Option<f64> {
        self.text(point)?.trim().parse().ok()
    }

    /// DAS "Run": validates the inputs and fills the two output fields.
    fn run(&mut self) {
        self.runs += 1;
        let lifetime = key(self.coordinates.position(Control::OrbitLifetime));
        let last_year = key(self.coordinates.position(Control::LastYear));
        self.fields.remove(&lifetime);
        self.fields.remove(&last_year);

        let (lifetime_text, last_year_text) = match self.evaluate() {
            Some(Response::Lifetime(text)) => (text, None),
            Some(Response::BeyondPropagation { years }) => {
                let start = self
                    .number(self.coordinates.position(Control::StartYear))
                    .unwrap_or(f64::NAN);
                (
                    "Greater than 100 years".to_string(),
                    Some(format!("{:.1}", start + years)),
                )
            }
            Some(Response::Hang) => return,
            None => ("N/A".to_string(), None),
        };

        self.fields.insert(lifetime, lifetime_text);
        if let Some(text) = last_year_text {
            self.fields.insert(last_year, text);
        }
    }

    fn evaluate(&self) -> Option<Response> {
        let perigee = self.number(self.layout.field(FormField::PerigeeAltitude))?;
        let apogee = self.number(self.layout.field(FormField::ApogeeAltitude))?;
        let inclination = self.number(self.layout.field(FormField::Inclination))?;
        let raan = self.number(self.layout.field(FormField::Raan))?;
        let argument = self.number(self.layout.field(FormField::ArgumentOfPerigee))?;
        let ratio = self.number(self.layout.field(FormField::AreaToMassRatio))?;

        let expected_inclination = OrbitalMechanics::sso_inclination(apogee)?;
        if perigee != apogee
            || (inclination - expected_inclination).abs() > 1e-9
            || raan != 0.0
            || argument != 0.0
        {
            return None;
        }
        Some((self.responder)(apogee, ratio))
    }
}

impl InputDevice for FakeDas {
    fn move_to(&mut self, point: ScreenPoint) -> Result<(), DeviceError> {
        let mut state = self.state.borrow_mut();
        state.actions += 1;
        state.pointer = point;
        Ok(())
    }

    fn click(&mut self) -> Result<(), DeviceError> {
        let mut state = self.state.borrow_mut();
        state.actions += 1;
        state.selected = None;
        let pointer = state.pointer;
        if pointer == state.coordinates.position(Control::ResetButton) {
            state.fields.clear();
        } else if pointer == state.coordinates.position(Control::RunButton) {
            state.run();
        }
        Ok(())
    }

    fn double_click(&mut self) -> Result<(), DeviceError> {
        let mut state = self.state.borrow_mut();
        state.actions += 1;
        state.selected = Some(key(state.pointer));
        Ok(())
    }

    fn type_text(&mut self, text: &str) -> Result<(), DeviceError> {
        let mut state = self.state.borrow_mut();
        state.actions += 1;
        if let Some(position) = state.selected.take() {
            let landed = match &state.typing_filter {
                Some(filter) => filter(position, text),
                None => text.to_string(),
            };
            state.fields.insert(position, landed);
        }
        Ok(())
    }

    fn copy_selection(&mut self) -> Result<(), DeviceError> {
        let mut state = self.state.borrow_mut();
        state.actions += 1;
        // Copying an empty selection leaves the clipboard alone
        let copied = state
            .selected
            .and_then(|position| state.fields.get(&position))
            .map(|text| first_word(text).to_string())
            .filter(|word| !word.is_empty());
        if let Some(text) = copied {
            state.clipboard = text;
        }
        Ok(())
    }

    fn clipboard_text(&mut self) -> Result<String, DeviceError> {
        Ok(self.state.borrow().clipboard.clone())
    }

    fn set_clipboard_text(&mut self, text: &str) -> Result<(), DeviceError> {
        self.state.borrow_mut().clipboard = text.to_string();
        Ok(())
    }

    fn pointer_position(&mut self) -> Result<ScreenPoint, DeviceError> {
        Ok(self.state.borrow().pointer)
    }
}

/// What a double-click near the left edge of a field selects: the first word
/// together with the whitespace that follows it.
pub fn first_word(text: &str) -> &str {
    let word_end = text.find(char::is_whitespace).unwrap_or(text.len());
    let rest = &text[word_end..];
    let gap = rest.len() - rest.trim_start().len();
    &text[..word_end + gap]
}

/// Clock that only advances when slept on, so timeouts cost no real time.
pub struct StepClock {
    now: Cell<Instant>,
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

pub fn session(das: &FakeDas) -> DasSession<FakeDas, StepClock> {
    DasSession::new(das.clone(), StepClock::new(), coordinates(), Polling::default()).unwrap()
}
