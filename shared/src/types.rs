//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Absolute latitude, used by the latitude-band tables
    pub fn abs_latitude(&self) -> Decimal {
        self.latitude.abs()
    }
}

impl std::fmt::Display for GpsCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude.is_sign_negative() { 'S' } else { 'N' };
        let ew = if self.longitude.is_sign_negative() { 'W' } else { 'E' };
        write!(
            f,
            "{:.2}°{}, {:.2}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Inclusive numeric range, `min <= value <= max`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValueRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ValueRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance from the nearest endpoint, zero when inside the range
    pub fn distance_outside(&self, value: Decimal) -> Decimal {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            Decimal::ZERO
        }
    }

    pub fn width(&self) -> Decimal {
        self.max - self.min
    }

    /// Whether this range lies entirely inside `outer`
    pub fn is_within(&self, outer: &ValueRange) -> bool {
        self.min >= outer.min && self.max <= outer.max
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min.normalize(), self.max.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_range_contains_endpoints() {
        let range = ValueRange::new(dec!(20), dec!(35));
        assert!(range.contains(dec!(20)));
        assert!(range.contains(dec!(35)));
        assert!(!range.contains(dec!(19.99)));
        assert!(!range.contains(dec!(35.01)));
    }

    #[test]
    fn test_distance_outside() {
        let range = ValueRange::new(dec!(10), dec!(20));
        assert_eq!(range.distance_outside(dec!(15)), Decimal::ZERO);
        assert_eq!(range.distance_outside(dec!(5)), dec!(5));
        assert_eq!(range.distance_outside(dec!(25)), dec!(5));
    }

    #[test]
    fn test_coordinates_display() {
        let coords = GpsCoordinates::new(dec!(18.5196), dec!(-73.8553));
        assert_eq!(coords.to_string(), "18.52°N, 73.86°W");
    }
}
