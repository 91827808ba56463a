use crate::constants::{
    DEFAULT_ALTITUDES_KM, DEFAULT_RATIO_COUNT, DEFAULT_RATIO_MAX, DEFAULT_RATIO_MIN,
};
use crate::errors::ConfigError;
use crate::physics::orbital::OrbitalMechanics;

/// `count` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Altitudes [km] crossed with area-to-mass ratios [m²/kg], in sweep order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    altitudes_km: Vec<f64>,
    ratios: Vec<f64>,
}

impl SweepGrid {
    pub fn new(altitudes_km: Vec<f64>, ratios: Vec<f64>) -> Result<Self, ConfigError> {
        if altitudes_km.is_empty() {
            return Err(ConfigError::EmptyAxis("altitudes"));
        }
        if ratios.is_empty() {
            return Err(ConfigError::EmptyAxis("area-to-mass ratios"));
        }
        if let Some(&value) = altitudes_km.iter().find(|h| !h.is_finite()) {
            return Err(ConfigError::NonFiniteValue {
                axis: "altitude",
                value,
            });
        }
        if let Some(&value) = ratios.iter().find(|r| !r.is_finite()) {
            return Err(ConfigError::NonFiniteValue {
                axis: "area-to-mass ratio",
                value,
            });
        }
        if let Some(&h) = altitudes_km
            .iter()
            .find(|&&h| OrbitalMechanics::sso_inclination(h).is_none())
        {
            return Err(ConfigError::NoSunSynchronousOrbit(h));
        }

        Ok(Self {
            altitudes_km,
            ratios,
        })
    }

    pub fn altitudes_km(&self) -> &[f64] {
        &self.altitudes_km
    }

    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    pub fn cell_count(&self) -> usize {
        self.altitudes_km.len() * self.ratios.len()
    }
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            altitudes_km: DEFAULT_ALTITUDES_KM.to_vec(),
            ratios: linspace(DEFAULT_RATIO_MIN, DEFAULT_RATIO_MAX, DEFAULT_RATIO_COUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linspace_hits_both_ends() {
        let values = linspace(0.020, 0.044, 10);
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], 0.020);
        assert_eq!(values[9], 0.044);
        for pair in values.windows(2) {
            assert_abs_diff_eq!(pair[1] - pair[0], 0.024 / 9.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn default_grid_has_thirty_cells() {
        let grid = SweepGrid::default();
        assert_eq!(grid.altitudes_km(), &[600.0, 550.0, 500.0]);
        assert_eq!(grid.cell_count(), 30);
    }

    #[test]
    fn empty_axis_is_rejected() {
        assert!(matches!(
            SweepGrid::new(vec![], vec![0.02]),
            Err(ConfigError::EmptyAxis("altitudes"))
        ));
    }

    #[test]
    fn unreachable_altitude_is_rejected() {
        assert!(matches!(
            SweepGrid::new(vec![600.0, 9000.0], vec![0.02]),
            Err(ConfigError::NoSunSynchronousOrbit(h)) if h == 9000.0
        ));
    }
}
