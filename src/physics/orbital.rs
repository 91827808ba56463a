use crate::constants::{R_EARTH_KM, SSO_EXPONENT, SSO_REFERENCE_RADIUS_KM};

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    /// Inclination [deg] of a circular sun-synchronous orbit at `altitude_km`.
    ///
    /// Returns `None` above the altitude where the relation has no solution
    /// (cos(i) below -1).
    pub fn sso_inclination(altitude_km: f64) -> Option<f64> {
        let cos_i = -((R_EARTH_KM + altitude_km) / SSO_REFERENCE_RADIUS_KM).powf(SSO_EXPONENT);
        if !(-1.0..=1.0).contains(&cos_i) {
            return None;
        }
        Some(cos_i.acos().to_degrees())
    }
}
