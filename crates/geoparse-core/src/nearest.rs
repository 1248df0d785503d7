// crates/geoparse-core/src/nearest.rs
use crate::error::{GeoError, Result};
use crate::index::Gazetteer;
use crate::model::City;
use crate::traits::GeoBackend;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Mean earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Result of a nearest-city query.
#[derive(Debug, Clone)]
pub struct NearestCity<'a, B: GeoBackend> {
    pub city: &'a City<B>,
    pub distance_km: f64,
}

impl<B: GeoBackend> Gazetteer<B> {
    /// Closest city to `(lat, lon)`, by a full scan over every city with
    /// coordinates.
    ///
    /// `Ok(None)` when no city has coordinates. Among cities at exactly the
    /// same distance the first in dataset order wins.
    pub fn nearest_city(&self, lat: f64, lon: f64) -> Result<Option<NearestCity<'_, B>>> {
        check_point(lat, lon)?;

        let mut best: Option<NearestCity<'_, B>> = None;
        for (city, _, _) in self.cities() {
            let Some((c_lat, c_lon)) = city.lat_lng() else {
                continue;
            };
            let distance_km = haversine_km(lat, lon, c_lat, c_lon);
            if best.as_ref().map_or(true, |b| distance_km < b.distance_km) {
                best = Some(NearestCity { city, distance_km });
            }
        }
        Ok(best)
    }

    /// [`Gazetteer::nearest_city`] for decimal coordinates.
    pub fn nearest_city_decimal(
        &self,
        lat: Decimal,
        lon: Decimal,
    ) -> Result<Option<NearestCity<'_, B>>> {
        match (lat.to_f64(), lon.to_f64()) {
            (Some(lat), Some(lon)) => self.nearest_city(lat, lon),
            _ => Err(GeoError::invalid_argument(format!(
                "coordinates not representable: {lat}, {lon}"
            ))),
        }
    }

    /// [`Gazetteer::nearest_city`] for decimal strings such as `"30.4380"`.
    pub fn nearest_city_str(&self, lat: &str, lon: &str) -> Result<Option<NearestCity<'_, B>>> {
        self.nearest_city_decimal(parse_decimal(lat)?, parse_decimal(lon)?)
    }
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| GeoError::invalid_argument(format!("not a decimal coordinate {s:?}: {e}")))
}

fn check_point(lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(GeoError::invalid_argument(format!(
            "coordinates out of range: {lat}, {lon}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_same_point() {
        assert_eq!(haversine_km(30.4383, -84.2807, 30.4383, -84.2807), 0.0);
    }

    #[test]
    fn known_distance_london_paris() {
        // ~343.5 km between central London and central Paris.
        let d = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((d - 343.5).abs() < 1.0, "got {d}");
    }

    #[test]
    fn quarter_meridian() {
        let d = haversine_km(0.0, 0.0, 90.0, 0.0);
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_and_nan_rejected() {
        assert!(check_point(91.0, 0.0).is_err());
        assert!(check_point(0.0, -180.5).is_err());
        assert!(check_point(f64::NAN, 0.0).is_err());
        assert!(check_point(-90.0, 180.0).is_ok());
    }

    #[test]
    fn decimal_strings_parse() {
        assert_eq!(parse_decimal(" 30.438 ").unwrap(), Decimal::new(30438, 3));
        assert!(parse_decimal("north").unwrap_err().is_invalid_argument());
    }
}
