//! Personal health profile

use serde::{Deserialize, Serialize};

/// Age and conditions that scale an individual's exposure risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthProfile {
    pub age: u32,
    #[serde(default)]
    pub respiratory_condition: bool,
    #[serde(default)]
    pub heart_disease: bool,
    #[serde(default)]
    pub pregnant: bool,
}

impl HealthProfile {
    pub fn new(age: u32) -> Self {
        Self {
            age,
            ..Default::default()
        }
    }

    pub fn with_respiratory_condition(mut self, value: bool) -> Self {
        self.respiratory_condition = value;
        self
    }

    pub fn with_heart_disease(mut self, value: bool) -> Self {
        self.heart_disease = value;
        self
    }

    pub fn with_pregnant(mut self, value: bool) -> Self {
        self.pregnant = value;
        self
    }

    /// Young children and the elderly weigh most, then minors and over-50s.
    pub fn age_factor(&self) -> f64 {
        match self.age {
            a if a < 5 || a > 65 => 1.5,
            a if a < 18 || a > 50 => 1.2,
            _ => 1.0,
        }
    }

    pub fn health_factor(&self) -> f64 {
        let mut factor = 1.0;
        if self.respiratory_condition {
            factor += 0.5;
        }
        if self.heart_disease {
            factor += 0.3;
        }
        if self.pregnant {
            factor += 0.4;
        }
        factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_factor_bands() {
        assert_eq!(HealthProfile::new(3).age_factor(), 1.5);
        assert_eq!(HealthProfile::new(70).age_factor(), 1.5);
        assert_eq!(HealthProfile::new(12).age_factor(), 1.2);
        assert_eq!(HealthProfile::new(55).age_factor(), 1.2);
        assert_eq!(HealthProfile::new(30).age_factor(), 1.0);
        assert_eq!(HealthProfile::new(18).age_factor(), 1.0);
        assert_eq!(HealthProfile::new(50).age_factor(), 1.0);
        assert_eq!(HealthProfile::new(65).age_factor(), 1.2);
    }

    #[test]
    fn test_health_factor_accumulates() {
        let profile = HealthProfile::new(30)
            .with_respiratory_condition(true)
            .with_heart_disease(true)
            .with_pregnant(true);
        assert!((profile.health_factor() - 2.2).abs() < 1e-9);
        assert_eq!(HealthProfile::new(30).health_factor(), 1.0);
    }
}
