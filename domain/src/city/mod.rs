//! Monitored city catalog

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monitored city (Value Object)
///
/// Cities come from a fixed catalog; build one with [`City::find`] or by
/// parsing its name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

const CATALOG: [City; 10] = [
    City::new("Delhi", 28.6139, 77.2090),
    City::new("Mumbai", 19.0760, 72.8777),
    City::new("Bangalore", 12.9716, 77.5946),
    City::new("Kolkata", 22.5726, 88.3639),
    City::new("Chennai", 13.0827, 80.2707),
    City::new("Hyderabad", 17.3850, 78.4867),
    City::new("Pune", 18.5204, 73.8567),
    City::new("Ahmedabad", 23.0225, 72.5714),
    City::new("Jaipur", 26.9124, 75.7873),
    City::new("Lucknow", 26.8467, 80.9462),
];

impl City {
    const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    /// Every city in the catalog, in display order.
    pub fn all() -> &'static [City] {
        &CATALOG
    }

    /// Look up a city by name (case-insensitive).
    pub fn find(name: &str) -> Option<City> {
        let name = name.trim();
        CATALOG
            .iter()
            .find(|city| city.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Position of this city in the catalog.
    pub fn index(&self) -> usize {
        CATALOG
            .iter()
            .position(|city| city.name == self.name)
            .unwrap_or_default()
    }

    /// The default dashboard city.
    pub fn default_city() -> City {
        CATALOG[0]
    }
}

impl Default for City {
    fn default() -> Self {
        Self::default_city()
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for City {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::find(s).ok_or_else(|| DomainError::UnknownCity(s.trim().to_string()))
    }
}

impl Serialize for City {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_cities() {
        assert_eq!(City::all().len(), 10);
        assert_eq!(City::all()[0].name, "Delhi");
    }

    #[test]
    fn test_find_case_insensitive() {
        let city = City::find("  mumbai ").unwrap();
        assert_eq!(city.name, "Mumbai");
        assert_eq!(city.lat, 19.0760);
        assert_eq!(city.lon, 72.8777);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Gotham".parse::<City>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCity("Gotham".to_string()));
    }

    #[test]
    fn test_index() {
        assert_eq!(City::find("Delhi").unwrap().index(), 0);
        assert_eq!(City::find("Lucknow").unwrap().index(), 9);
    }

    #[test]
    fn test_serde_by_name() {
        let city = City::find("Pune").unwrap();
        let json = serde_json::to_string(&city).unwrap();
        assert_eq!(json, "\"Pune\"");
        let parsed: City = serde_json::from_str("\"pune\"").unwrap();
        assert_eq!(parsed, city);
        assert!(serde_json::from_str::<City>("\"Springfield\"").is_err());
    }
}
