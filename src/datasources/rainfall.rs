use crate::models::{monsoon_average, RainfallPrediction, RainfallProfile, Trend};
use chrono::{Local, NaiveDate};
use rand::Rng;

/// Long-term monthly normals (mm) for an IMD reference station
pub struct ReferenceCity {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub monthly_mm: [f64; 12],
}

impl ReferenceCity {
    fn distance_to(&self, lat: f64, lon: f64) -> f64 {
        ((lat - self.latitude).powi(2) + (lon - self.longitude).powi(2)).sqrt()
    }

    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Reference stations. Order matters: the first one wins a distance tie.
pub static REFERENCE_CITIES: [ReferenceCity; 10] = [
    ReferenceCity {
        name: "mumbai",
        latitude: 19.076,
        longitude: 72.8777,
        monthly_mm: [
            16.0, 6.0, 13.0, 18.0, 38.0, 585.0, 840.0, 534.0, 315.0, 125.0, 35.0, 18.0,
        ],
    },
    ReferenceCity {
        name: "delhi",
        latitude: 28.7041,
        longitude: 77.1025,
        monthly_mm: [
            25.0, 30.0, 15.0, 9.0, 13.0, 65.0, 180.0, 185.0, 125.0, 10.0, 5.0, 10.0,
        ],
    },
    ReferenceCity {
        name: "bangalore",
        latitude: 12.9716,
        longitude: 77.5946,
        monthly_mm: [
            5.0, 8.0, 25.0, 85.0, 125.0, 95.0, 85.0, 115.0, 155.0, 185.0, 65.0, 15.0,
        ],
    },
    ReferenceCity {
        name: "chennai",
        latitude: 13.0827,
        longitude: 80.2707,
        monthly_mm: [
            25.0, 35.0, 20.0, 45.0, 55.0, 45.0, 85.0, 125.0, 115.0, 265.0, 315.0, 145.0,
        ],
    },
    ReferenceCity {
        name: "kolkata",
        latitude: 22.5726,
        longitude: 88.3639,
        monthly_mm: [
            15.0, 35.0, 45.0, 55.0, 125.0, 185.0, 315.0, 325.0, 255.0, 125.0, 25.0, 5.0,
        ],
    },
    ReferenceCity {
        name: "hyderabad",
        latitude: 17.3850,
        longitude: 78.4867,
        monthly_mm: [
            5.0, 15.0, 25.0, 35.0, 45.0, 95.0, 155.0, 145.0, 135.0, 65.0, 25.0, 5.0,
        ],
    },
    ReferenceCity {
        name: "pune",
        latitude: 18.5204,
        longitude: 73.8567,
        monthly_mm: [
            5.0, 8.0, 15.0, 25.0, 35.0, 165.0, 185.0, 125.0, 95.0, 65.0, 15.0, 5.0,
        ],
    },
    ReferenceCity {
        name: "ahmedabad",
        latitude: 23.0225,
        longitude: 72.5714,
        monthly_mm: [
            5.0, 8.0, 15.0, 8.0, 15.0, 85.0, 255.0, 185.0, 115.0, 25.0, 5.0, 5.0,
        ],
    },
    ReferenceCity {
        name: "jaipur",
        latitude: 26.9124,
        longitude: 75.7873,
        monthly_mm: [
            8.0, 12.0, 15.0, 5.0, 15.0, 45.0, 185.0, 165.0, 95.0, 15.0, 5.0, 5.0,
        ],
    },
    ReferenceCity {
        name: "lucknow",
        latitude: 26.8467,
        longitude: 80.9462,
        monthly_mm: [
            15.0, 25.0, 12.0, 8.0, 15.0, 95.0, 265.0, 285.0, 155.0, 25.0, 8.0, 5.0,
        ],
    },
];

/// Next-year prediction stays within ±5% of the annual total, bounds included.
const PREDICTION_LOW: f64 = 0.95;
const PREDICTION_HIGH: f64 = 1.05;

fn prediction_factor<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(PREDICTION_LOW..=PREDICTION_HIGH)
}

/// Classify the rainfall trend from the monsoon-month mean.
///
/// - above 200mm: increasing
/// - below 100mm: decreasing
/// - otherwise stable
pub fn classify_trend(monthly: &[f64; 12]) -> Trend {
    let avg = monsoon_average(monthly);
    if avg > 200.0 {
        Trend::Increasing
    } else if avg < 100.0 {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Nearest reference station by straight-line distance in degrees
pub fn nearest_city(lat: f64, lon: f64) -> &'static ReferenceCity {
    nearest_in(&REFERENCE_CITIES, lat, lon)
}

/// Ties keep the earlier entry. `cities` must not be empty.
fn nearest_in(cities: &[ReferenceCity], lat: f64, lon: f64) -> &ReferenceCity {
    let mut closest = &cities[0];
    let mut min_distance = f64::INFINITY;
    for city in cities {
        let distance = city.distance_to(lat, lon);
        if distance < min_distance {
            min_distance = distance;
            closest = city;
        }
    }
    closest
}

/// Offline rainfall estimator backed by IMD monthly normals.
#[derive(Debug, Default, Clone, Copy)]
pub struct RainfallEstimator;

impl RainfallEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate<R: Rng + ?Sized>(&self, lat: f64, lon: f64, rng: &mut R) -> RainfallProfile {
        self.estimate_on(lat, lon, Local::now().date_naive(), rng)
    }

    pub fn estimate_on<R: Rng + ?Sized>(
        &self,
        lat: f64,
        lon: f64,
        today: NaiveDate,
        rng: &mut R,
    ) -> RainfallProfile {
        let city = nearest_city(lat, lon);
        let monthly = city.monthly_mm;
        let annual: f64 = monthly.iter().sum();
        let trend = classify_trend(&monthly);

        let next_year = (annual * prediction_factor(rng)).round();
        let confidence = (80.0 + rng.gen::<f64>() * 15.0).round();

        tracing::debug!(
            "Rainfall for {:.4}, {:.4}: nearest station {}, {}mm/yr, trend {}",
            lat,
            lon,
            city.name,
            annual,
            trend
        );

        RainfallProfile {
            annual_rainfall: annual,
            monthly_rainfall: monthly,
            prediction: RainfallPrediction {
                next_year,
                trend,
                confidence,
            },
            source: format!(
                "India Meteorological Department (IMD) - {} Region",
                city.display_name()
            ),
            last_updated: today,
        }
    }
}
