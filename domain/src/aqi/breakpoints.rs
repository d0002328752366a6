//! PM2.5 breakpoint table for the national AQI scale

/// One linear interpolation interval of the AQI scale.
///
/// A concentration inside `pm25_low..=pm25_high` maps linearly onto
/// `aqi_low..=aqi_high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub pm25_low: f64,
    pub pm25_high: f64,
    pub aqi_low: u32,
    pub aqi_high: u32,
}

impl Breakpoint {
    const fn new(pm25_low: f64, pm25_high: f64, aqi_low: u32, aqi_high: u32) -> Self {
        Self {
            pm25_low,
            pm25_high,
            aqi_low,
            aqi_high,
        }
    }

    /// Whether `pm25` falls in this segment (inclusive upper bound).
    pub fn contains(&self, pm25: f64) -> bool {
        pm25 <= self.pm25_high
    }

    /// Interpolate `pm25` onto this segment's AQI range.
    pub fn interpolate(&self, pm25: f64) -> f64 {
        let fraction = (pm25 - self.pm25_low) / (self.pm25_high - self.pm25_low);
        self.aqi_low as f64 + fraction * (self.aqi_high - self.aqi_low) as f64
    }
}

/// Bounded segments, in ascending order.
///
/// Lookup must walk this table front to back: a value sitting exactly on a
/// boundary belongs to the lower segment.
pub const BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 30.0, 0, 50),
    Breakpoint::new(30.0, 60.0, 50, 100),
    Breakpoint::new(60.0, 90.0, 100, 200),
    Breakpoint::new(90.0, 120.0, 200, 300),
    Breakpoint::new(120.0, 250.0, 300, 400),
];

/// Concentration above which the open-ended severe segment applies.
pub const SEVERE_PM25_FLOOR: f64 = 250.0;

/// AQI at the start of the severe segment.
pub const SEVERE_AQI_FLOOR: u32 = 400;

/// Every 2 µg/m³ above [`SEVERE_PM25_FLOOR`] adds one AQI point.
pub const SEVERE_PM25_PER_POINT: f64 = 2.0;

/// Top of the scale.
pub const AQI_MAX: u32 = 500;
