use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub district: String,
}

impl Location {
    pub fn new(
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
        district: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
            district: district.into(),
        }
    }

    /// Coordinates formatted the way the report prints them
    pub fn coordinates_label(&self) -> String {
        format!("{:.4}°N, {:.4}°E", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_label_uses_four_decimals() {
        let loc = Location::new("Mumbai", 19.076, 72.8777, "Mumbai");
        assert_eq!(loc.coordinates_label(), "19.0760°N, 72.8777°E");
    }
}
