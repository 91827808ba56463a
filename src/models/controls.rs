use crate::errors::ConfigError;
use nalgebra as na;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Absolute screen position in pixels.
pub type ScreenPoint = na::Point2<i32>;

/// The DAS controls whose screen positions are recorded by the capture step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    ResetButton,
    RunButton,
    StartYear,
    PerigeeAltitude,
    ApogeeAltitude,
    OrbitLifetime,
    LastYear,
}

impl Control {
    /// Capture order, also the order of the persisted map.
    pub const ALL: [Control; 7] = [
        Control::ResetButton,
        Control::RunButton,
        Control::StartYear,
        Control::PerigeeAltitude,
        Control::ApogeeAltitude,
        Control::OrbitLifetime,
        Control::LastYear,
    ];

    /// Key used in the coordinate file.
    pub fn label(self) -> &'static str {
        match self {
            Control::ResetButton => "Reset Button",
            Control::RunButton => "Run Button",
            Control::StartYear => "Start Year",
            Control::PerigeeAltitude => "Perigee Altitude",
            Control::ApogeeAltitude => "Apogee Altitude",
            Control::OrbitLifetime => "Orbit Lifetime",
            Control::LastYear => "Last Year",
        }
    }

    /// Instruction shown while capturing this control.
    pub fn prompt(self) -> &'static str {
        match self {
            Control::ResetButton => "Reset button",
            Control::RunButton => "Run button",
            Control::StartYear => "Start Year input",
            Control::PerigeeAltitude => "Perigee Altitude input",
            Control::ApogeeAltitude => "Apogee Altitude input",
            Control::OrbitLifetime => {
                "Calculated Orbit Lifetime (close to left side of the input area)"
            }
            Control::LastYear => "Last year of propagation",
        }
    }

    pub fn from_label(label: &str) -> Option<Control> {
        Control::ALL.into_iter().find(|c| c.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Validated screen positions of every [`Control`].
///
/// A map can only be built with all seven controls present, so a sweep never
/// discovers a missing position halfway through.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMap {
    positions: [ScreenPoint; 7],
}

impl CoordinateMap {
    pub fn from_positions<I>(positions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Control, ScreenPoint)>,
    {
        let mut slots: [Option<ScreenPoint>; 7] = [None; 7];
        for (control, point) in positions {
            slots[control.index()] = Some(point);
        }

        let mut resolved = [ScreenPoint::origin(); 7];
        for control in Control::ALL {
            resolved[control.index()] =
                slots[control.index()].ok_or(ConfigError::MissingControl(control))?;
        }

        Ok(Self {
            positions: resolved,
        })
    }

    /// Parses the persisted JSON form: `{"Reset Button": [x, y], ...}`.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, (i32, i32)> =
            serde_json::from_str(json).map_err(|source| ConfigError::MalformedCoordinates {
                path: origin.to_path_buf(),
                source,
            })?;

        let mut positions = Vec::with_capacity(raw.len());
        for (label, (x, y)) in raw {
            match Control::from_label(&label) {
                Some(control) => positions.push((control, ScreenPoint::new(x, y))),
                None => tracing::warn!(key = %label, "Ignoring unknown control in coordinate map"),
            }
        }

        Self::from_positions(positions)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_json_str(&json, path)?;
        tracing::info!(path = %path.display(), "Coordinate map loaded");
        Ok(map)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let raw: BTreeMap<&str, (i32, i32)> = Control::ALL
            .iter()
            .map(|&c| {
                let p = self.position(c);
                (c.label(), (p.x, p.y))
            })
            .collect();
        serde_json::to_string_pretty(&raw)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = self
            .to_json_string()
            .map_err(|source| ConfigError::MalformedCoordinates {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, json).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn position(&self, control: Control) -> ScreenPoint {
        self.positions[control.index()]
    }
}
