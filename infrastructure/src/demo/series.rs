//! Synthetic daily series
//!
//! A seasonal curve around AQI 150 with Gaussian noise, from which PM2.5
//! and PM10 are derived:
//!
//! ```text
//! aqi[i]  = clip(150 + 30·sin(4π·i/(n−1)) + N(0, 15), 0, 500)
//! pm25[i] = max(aqi[i]·0.4 + N(0, 10), 0)
//! pm10[i] = max(aqi[i]·0.6 + N(0, 15), 0)
//! ```

use aqi_domain::PollutantReading;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::PI;

const BASE_AQI: f64 = 150.0;
const SEASONAL_AMPLITUDE: f64 = 30.0;
const AQI_NOISE: f64 = 15.0;
const PM25_RATIO: f64 = 0.4;
const PM25_NOISE: f64 = 10.0;
const PM10_RATIO: f64 = 0.6;
const PM10_NOISE: f64 = 15.0;

fn normal(rng: &mut StdRng, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    z * std_dev
}

/// `points` daily readings, the last one stamped `end`.
pub fn generate_series(seed: u64, points: usize, end: DateTime<Utc>) -> Vec<PollutantReading> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Draw order is fixed: the whole AQI curve, then PM2.5, then PM10.
    let span = points.saturating_sub(1).max(1) as f64;
    let aqi: Vec<f64> = (0..points)
        .map(|i| {
            let seasonal = SEASONAL_AMPLITUDE * (4.0 * PI * i as f64 / span).sin();
            (BASE_AQI + seasonal + normal(&mut rng, AQI_NOISE)).clamp(0.0, 500.0)
        })
        .collect();
    let pm25: Vec<f64> = aqi
        .iter()
        .map(|a| (a * PM25_RATIO + normal(&mut rng, PM25_NOISE)).max(0.0))
        .collect();
    let pm10: Vec<f64> = aqi
        .iter()
        .map(|a| (a * PM10_RATIO + normal(&mut rng, PM10_NOISE)).max(0.0))
        .collect();

    (0..points)
        .map(|i| {
            let days_before_end = (points - 1 - i) as i64;
            PollutantReading::new(end - Duration::days(days_before_end), pm25[i])
                .with_pm10(pm10[i])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_length_and_dates() {
        let series = generate_series(42, 90, end());
        assert_eq!(series.len(), 90);
        assert_eq!(series.last().unwrap().timestamp, end());
        assert_eq!(series[0].timestamp, end() - Duration::days(89));
        assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_same_seed_same_series() {
        assert_eq!(generate_series(42, 30, end()), generate_series(42, 30, end()));
        assert_ne!(generate_series(42, 30, end()), generate_series(43, 30, end()));
    }

    #[test]
    fn test_concentrations_non_negative_and_plausible() {
        let series = generate_series(7, 365, end());
        assert!(series.iter().all(|r| r.pm2_5 >= 0.0));
        assert!(series.iter().all(|r| r.pm10.unwrap() >= 0.0));

        // PM2.5 centres on 150 × 0.4
        let mean = series.iter().map(|r| r.pm2_5).sum::<f64>() / series.len() as f64;
        assert!((50.0..70.0).contains(&mean), "mean pm2.5 was {}", mean);
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(generate_series(42, 0, end()).is_empty());
        let single = generate_series(42, 1, end());
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].timestamp, end());
    }

    #[test]
    fn test_noise_scales_with_std_dev() {
        let mut rng = StdRng::seed_from_u64(1);
        let draws: Vec<f64> = (0..20_000).map(|_| normal(&mut rng, PM25_NOISE)).collect();
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let var = draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.5, "mean was {}", mean);
        assert!((var.sqrt() - PM25_NOISE).abs() < 0.5, "std was {}", var.sqrt());
    }
}
