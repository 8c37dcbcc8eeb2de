use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// June through September, zero-based
pub const MONSOON_MONTHS: std::ops::RangeInclusive<usize> = 5..=8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "Increasing",
            Trend::Decreasing => "Decreasing",
            Trend::Stable => "Stable",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Increasing => "↑",
            Trend::Decreasing => "↓",
            Trend::Stable => "→",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallPrediction {
    pub next_year: f64,
    pub trend: Trend,
    /// Percent, 0-100
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallProfile {
    /// Millimetres per year; always the sum of `monthly_rainfall`
    pub annual_rainfall: f64,
    /// Millimetres per month, January first
    pub monthly_rainfall: [f64; 12],
    pub prediction: RainfallPrediction,
    pub source: String,
    pub last_updated: NaiveDate,
}

impl RainfallProfile {
    /// Mean rainfall across the monsoon months
    pub fn monsoon_average(&self) -> f64 {
        monsoon_average(&self.monthly_rainfall)
    }

    /// Wettest month as (index, mm). The earliest month wins a tie.
    pub fn peak_month(&self) -> (usize, f64) {
        self.monthly_rainfall
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::MIN), |best, (i, mm)| if mm > best.1 { (i, mm) } else { best })
    }
}

pub fn monsoon_average(monthly: &[f64; 12]) -> f64 {
    let months = &monthly[MONSOON_MONTHS];
    months.iter().sum::<f64>() / months.len() as f64
}

pub fn month_name(index: usize) -> &'static str {
    MONTH_NAMES.get(index).copied().unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(monthly: [f64; 12]) -> RainfallProfile {
        RainfallProfile {
            annual_rainfall: monthly.iter().sum(),
            monthly_rainfall: monthly,
            prediction: RainfallPrediction {
                next_year: 0.0,
                trend: Trend::Stable,
                confidence: 90.0,
            },
            source: "test".into(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn monsoon_average_uses_june_to_september() {
        let mut monthly = [0.0; 12];
        monthly[5] = 100.0;
        monthly[6] = 200.0;
        monthly[7] = 300.0;
        monthly[8] = 400.0;
        // Outside the window, must be ignored
        monthly[4] = 10_000.0;
        monthly[9] = 10_000.0;
        assert!((monsoon_average(&monthly) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn peak_month_prefers_earliest_tie() {
        let mut monthly = [1.0; 12];
        monthly[6] = 50.0;
        monthly[7] = 50.0;
        assert_eq!(profile(monthly).peak_month(), (6, 50.0));
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(0), "Jan");
        assert_eq!(month_name(11), "Dec");
        assert_eq!(month_name(12), "?");
    }

    #[test]
    fn trend_serializes_lowercase() {
        let json = serde_json::to_string(&Trend::Increasing).unwrap();
        assert_eq!(json, "\"increasing\"");
    }
}
