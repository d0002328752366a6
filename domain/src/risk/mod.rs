//! Health risk classification
//!
//! Maps an AQI value onto one of six categories using a single canonical
//! table (inclusive upper bounds, evaluated in ascending order):
//!
//! | AQI ≤ | Category                       | Tier      |
//! |-------|--------------------------------|-----------|
//! | 50    | Good                           | low       |
//! | 100   | Moderate                       | low       |
//! | 150   | Unhealthy for Sensitive Groups | medium    |
//! | 200   | Unhealthy                      | high      |
//! | 300   | Very Unhealthy                 | very-high |
//! | else  | Hazardous                      | very-high |

mod category;
mod tier;

pub use category::RiskCategory;
pub use tier::SeverityTier;

use serde::Serialize;

/// Result of classifying an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub category: RiskCategory,
    pub color: &'static str,
    pub tier: SeverityTier,
}

impl RiskAssessment {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// `(label, color, tier)` in the shape renderers expect.
    pub fn as_tuple(&self) -> (&'static str, &'static str, SeverityTier) {
        (self.category.label(), self.color, self.tier)
    }
}

impl From<RiskCategory> for RiskAssessment {
    fn from(category: RiskCategory) -> Self {
        Self {
            category,
            color: category.color(),
            tier: category.tier(),
        }
    }
}

/// Classify an AQI value.
///
/// Values above 500 classify as [`RiskCategory::Hazardous`].
///
/// # Example
///
/// ```
/// use aqi_domain::{RiskCategory, classify_risk};
///
/// assert_eq!(classify_risk(50).category, RiskCategory::Good);
/// assert_eq!(classify_risk(51).category, RiskCategory::Moderate);
/// assert_eq!(classify_risk(900).category, RiskCategory::Hazardous);
/// ```
pub fn classify_risk(aqi: u32) -> RiskAssessment {
    let category = RiskCategory::ALL
        .into_iter()
        .find(|category| category.upper_bound().is_some_and(|upper| aqi <= upper))
        .unwrap_or(RiskCategory::Hazardous);

    category.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_labels() {
        assert_eq!(classify_risk(50).label(), "Good");
        assert_eq!(classify_risk(51).label(), "Moderate");
        assert_eq!(classify_risk(150).label(), "Unhealthy for Sensitive Groups");
        assert_eq!(classify_risk(201).label(), "Very Unhealthy");
        assert_eq!(classify_risk(301).label(), "Hazardous");
    }

    #[test]
    fn test_every_value_has_exactly_one_category() {
        for aqi in 0..=500 {
            let matching: Vec<_> = RiskCategory::ALL
                .iter()
                .filter(|category| category.contains(aqi))
                .collect();
            assert_eq!(matching.len(), 1, "aqi {} matched {:?}", aqi, matching);
            assert_eq!(*matching[0], classify_risk(aqi).category);
        }
    }

    #[test]
    fn test_above_scale_is_hazardous() {
        assert_eq!(classify_risk(501).category, RiskCategory::Hazardous);
        assert_eq!(classify_risk(u32::MAX).category, RiskCategory::Hazardous);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for aqi in [0, 50, 51, 100, 150, 151, 200, 300, 301, 500] {
            assert_eq!(classify_risk(aqi), classify_risk(aqi));
        }
    }

    #[test]
    fn test_tuple_shape() {
        let (label, color, tier) = classify_risk(175).as_tuple();
        assert_eq!(label, "Unhealthy");
        assert_eq!(color, "#eb3349");
        assert_eq!(tier, SeverityTier::High);
    }
}
