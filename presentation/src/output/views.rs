//! Output-only views that have no use case behind them

use aqi_application::DashboardState;
use aqi_domain::{AqiValue, City, Recommendation, RiskAssessment, compute_aqi, recommendations_for};
use serde::Serialize;

/// A bare PM2.5 to AQI conversion
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub pm2_5: f64,
    pub aqi: AqiValue,
    pub risk: RiskAssessment,
    pub recommendation: &'static Recommendation,
}

impl Conversion {
    pub fn of(pm2_5: f64) -> Self {
        let aqi = compute_aqi(pm2_5);
        let risk = aqi.risk();
        Self {
            pm2_5,
            aqi,
            risk,
            recommendation: recommendations_for(risk.category),
        }
    }
}

/// One row of the city catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct CityListing {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub selected: bool,
    pub favorite: bool,
}

/// The supported cities, marked against the dashboard state
#[derive(Debug, Clone, Serialize)]
pub struct CityCatalog {
    pub cities: Vec<CityListing>,
}

impl CityCatalog {
    pub fn from_state(state: &DashboardState) -> Self {
        let cities = City::all()
            .iter()
            .map(|city| CityListing {
                name: city.name,
                lat: city.lat,
                lon: city.lon,
                selected: state.selected_city == *city,
                favorite: state.is_favorite(city),
            })
            .collect();
        Self { cities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_domain::RiskCategory;

    #[test]
    fn test_conversion_pipeline() {
        let conversion = Conversion::of(75.0);
        assert_eq!(conversion.aqi.value(), 150);
        assert_eq!(conversion.risk.category, RiskCategory::UnhealthyForSensitive);
        assert_eq!(conversion.recommendation.category, RiskCategory::UnhealthyForSensitive);
    }

    #[test]
    fn test_conversion_negative_clamps() {
        assert_eq!(Conversion::of(-5.0).aqi.value(), 0);
    }

    #[test]
    fn test_conversion_infinite_is_hazardous() {
        let conversion = Conversion::of(f64::INFINITY);
        assert_eq!(conversion.aqi.value(), 500);
        assert_eq!(conversion.risk.category, RiskCategory::Hazardous);
    }

    #[test]
    fn test_catalog_marks_state() {
        let catalog = CityCatalog::from_state(&DashboardState::default());
        assert_eq!(catalog.cities.len(), 10);

        let delhi = &catalog.cities[0];
        assert!(delhi.selected);
        assert!(delhi.favorite);

        let mumbai = catalog.cities.iter().find(|c| c.name == "Mumbai").unwrap();
        assert!(!mumbai.selected);
        assert!(mumbai.favorite);

        let pune = catalog.cities.iter().find(|c| c.name == "Pune").unwrap();
        assert!(!pune.favorite);
    }
}
