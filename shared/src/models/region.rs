//! Geocoded regions

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A region resolved by geocoding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// Display name, e.g. "Pune, Maharashtra, India"
    pub name: String,
    /// The free text the user searched for
    pub query: String,
    pub coordinates: GpsCoordinates,
}

impl Region {
    pub fn new(name: impl Into<String>, query: impl Into<String>, coordinates: GpsCoordinates) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            coordinates,
        }
    }

    /// Whether `key` names this region, either by display name, by the
    /// leading place name, or by the search text (case-insensitive)
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        let place = self.name.split(',').next().unwrap_or_default().trim();
        self.name.to_lowercase() == key
            || place.to_lowercase() == key
            || self.query.trim().to_lowercase() == key
    }
}

/// Build a display name from geocoder parts: "name[, admin1][, country]"
pub fn format_region_name(name: &str, admin1: Option<&str>, country: Option<&str>) -> String {
    let mut full_name = name.to_string();
    for part in [admin1, country].into_iter().flatten() {
        if !part.is_empty() {
            full_name.push_str(", ");
            full_name.push_str(part);
        }
    }
    full_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pune() -> Region {
        Region::new(
            "Pune, Maharashtra, India",
            "pune",
            GpsCoordinates::new(dec!(18.52), dec!(73.86)),
        )
    }

    #[test]
    fn test_format_region_name() {
        assert_eq!(
            format_region_name("Pune", Some("Maharashtra"), Some("India")),
            "Pune, Maharashtra, India"
        );
        assert_eq!(format_region_name("London", None, Some("United Kingdom")), "London, United Kingdom");
        assert_eq!(format_region_name("Nowhere", Some(""), None), "Nowhere");
    }

    #[test]
    fn test_region_matches() {
        let region = pune();
        assert!(region.matches("Pune"));
        assert!(region.matches("pune, maharashtra, india"));
        assert!(region.matches("  PUNE "));
        assert!(!region.matches("Mumbai"));
        assert!(!region.matches(""));
    }
}
