//! Health recommendations per risk category
//!
//! A static advice table keyed by [`RiskCategory`]. Lookups by label never
//! fail: anything unrecognised gets the "Good" bundle.

use crate::risk::RiskCategory;
use serde::Serialize;

/// Advice bundle shown alongside an AQI reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: RiskCategory,
    /// Emoji icon for the advisory banner
    pub icon: &'static str,
    /// One-line advisory message
    pub message: &'static str,
    /// Recommended actions, most important first
    pub actions: &'static [&'static str],
}

impl Recommendation {
    /// The action to surface when there is room for only one.
    pub fn primary_action(&self) -> &'static str {
        self.actions.first().copied().unwrap_or(self.message)
    }
}

static RECOMMENDATIONS: [Recommendation; 6] = [
    Recommendation {
        category: RiskCategory::Good,
        icon: "😊",
        message: "Air quality is great! Perfect for outdoor activities.",
        actions: &[
            "Enjoy outdoor activities",
            "Open windows for fresh air",
            "Exercise outside",
        ],
    },
    Recommendation {
        category: RiskCategory::Moderate,
        icon: "🙂",
        message: "Air quality is acceptable for most people.",
        actions: &[
            "Unusually sensitive people should consider reducing prolonged outdoor exertion",
            "General public can enjoy outdoor activities",
            "Check air quality updates before long outdoor plans",
        ],
    },
    Recommendation {
        category: RiskCategory::UnhealthyForSensitive,
        icon: "😐",
        message: "Sensitive groups may experience health effects.",
        actions: &[
            "Children, elderly, and people with respiratory issues should limit outdoor activities",
            "Wear masks if going outside",
            "Keep windows closed",
        ],
    },
    Recommendation {
        category: RiskCategory::Unhealthy,
        icon: "😷",
        message: "Everyone may begin to experience health effects.",
        actions: &[
            "Limit prolonged outdoor exertion",
            "Keep windows closed",
            "Use air purifiers indoors",
            "Wear N95 masks outside",
        ],
    },
    Recommendation {
        category: RiskCategory::VeryUnhealthy,
        icon: "😨",
        message: "Health alert: everyone may experience serious effects.",
        actions: &[
            "Avoid outdoor activities",
            "Stay indoors with air purifiers",
            "Keep all windows closed",
            "Seek medical attention if feeling unwell",
        ],
    },
    Recommendation {
        category: RiskCategory::Hazardous,
        icon: "☠️",
        message: "Health emergency: entire population affected.",
        actions: &[
            "Stay indoors at all times",
            "Use high-quality air purifiers",
            "Seal windows and doors",
            "Seek immediate medical attention if experiencing symptoms",
        ],
    },
];

/// Recommendations for a category.
pub fn recommendations_for(category: RiskCategory) -> &'static Recommendation {
    // Table order matches RiskCategory::ALL.
    &RECOMMENDATIONS[category as usize]
}

/// Recommendations for a category label, falling back to "Good" for
/// anything unrecognised.
///
/// # Example
///
/// ```
/// use aqi_domain::{RiskCategory, recommendations_for_label};
///
/// let advice = recommendations_for_label("Hazardous");
/// assert_eq!(advice.category, RiskCategory::Hazardous);
///
/// let fallback = recommendations_for_label("Smoggy");
/// assert_eq!(fallback.category, RiskCategory::Good);
/// ```
pub fn recommendations_for_label(label: &str) -> &'static Recommendation {
    let category = label.parse().unwrap_or(RiskCategory::Good);
    recommendations_for(category)
}
