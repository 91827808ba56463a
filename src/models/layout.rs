use super::controls::{Control, CoordinateMap, ScreenPoint};
use crate::errors::ConfigError;
use nalgebra as na;
use std::fmt;

/// Inputs of the DAS "orbit" form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PerigeeAltitude,
    ApogeeAltitude,
    Inclination,
    Raan,
    ArgumentOfPerigee,
    AreaToMassRatio,
}

impl FormField {
    /// Row offset below the apogee altitude input.
    fn rows_below_apogee(self) -> i32 {
        match self {
            FormField::PerigeeAltitude => -1,
            FormField::ApogeeAltitude => 0,
            FormField::Inclination => 1,
            FormField::Raan => 2,
            FormField::ArgumentOfPerigee => 3,
            FormField::AreaToMassRatio => 4,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormField::PerigeeAltitude => write!(f, "Perigee Altitude"),
            FormField::ApogeeAltitude => write!(f, "Apogee Altitude"),
            FormField::Inclination => write!(f, "Inclination"),
            FormField::Raan => write!(f, "RAAN"),
            FormField::ArgumentOfPerigee => write!(f, "Argument of Perigee"),
            FormField::AreaToMassRatio => write!(f, "Area-to-Mass Ratio"),
        }
    }
}

/// Evenly spaced vertical form layout.
///
/// Only the perigee and apogee inputs are recorded; every other input sits a
/// whole number of rows below the apogee input:
/// `position(rows) = anchor + rows * delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    perigee: ScreenPoint,
    anchor: ScreenPoint,
    delta: na::Vector2<i32>,
}

impl FieldLayout {
    pub fn new(perigee: ScreenPoint, apogee: ScreenPoint) -> Result<Self, ConfigError> {
        let spacing = apogee.y - perigee.y;
        if spacing == 0 {
            return Err(ConfigError::ZeroFieldSpacing);
        }

        Ok(Self {
            perigee,
            anchor: apogee,
            delta: na::Vector2::new(0, spacing),
        })
    }

    pub fn from_coordinates(map: &CoordinateMap) -> Result<Self, ConfigError> {
        Self::new(
            map.position(Control::PerigeeAltitude),
            map.position(Control::ApogeeAltitude),
        )
    }

    pub fn position(&self, rows: i32) -> ScreenPoint {
        self.anchor + self.delta * rows
    }

    pub fn field(&self, field: FormField) -> ScreenPoint {
        match field {
            // Recorded directly, not derived
            FormField::PerigeeAltitude => self.perigee,
            other => self.position(other.rows_below_apogee()),
        }
    }
}
