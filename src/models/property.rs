use crate::error::{RaincatchError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofType {
    Concrete,
    Tile,
    Metal,
    Asbestos,
    Thatched,
    /// Any roof material not in the table; collected at the default coefficient
    #[serde(other)]
    Unknown,
}

impl RoofType {
    pub const KNOWN: [RoofType; 5] = [
        RoofType::Concrete,
        RoofType::Tile,
        RoofType::Metal,
        RoofType::Asbestos,
        RoofType::Thatched,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoofType::Concrete => "Concrete",
            RoofType::Tile => "Tile",
            RoofType::Metal => "Metal",
            RoofType::Asbestos => "Asbestos",
            RoofType::Thatched => "Thatched",
            RoofType::Unknown => "Unknown",
        }
    }

    /// Fraction of rainfall on the roof that becomes collectible runoff
    pub fn runoff_coefficient(&self) -> f64 {
        match self {
            RoofType::Concrete => 0.85,
            RoofType::Tile => 0.75,
            RoofType::Metal => 0.90,
            RoofType::Asbestos => 0.80,
            RoofType::Thatched => 0.20,
            RoofType::Unknown => 0.75,
        }
    }

    /// Never fails: unrecognized materials map to `Unknown`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "concrete" | "rcc" => RoofType::Concrete,
            "tile" | "tiles" | "tiled" => RoofType::Tile,
            "metal" | "metal sheet" | "gi sheet" => RoofType::Metal,
            "asbestos" => RoofType::Asbestos,
            "thatched" | "thatch" => RoofType::Thatched,
            _ => RoofType::Unknown,
        }
    }
}

impl std::fmt::Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    Rocky,
    Mixed,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Clay,
        SoilType::Rocky,
        SoilType::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::Rocky => "Rocky",
            SoilType::Mixed => "Mixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sandy" | "sand" => Some(SoilType::Sandy),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "clay" => Some(SoilType::Clay),
            "rocky" | "rock" => Some(SoilType::Rocky),
            "mixed" => Some(SoilType::Mixed),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Residential,
    Apartment,
    Commercial,
    Institutional,
}

impl BuildingType {
    pub const ALL: [BuildingType; 4] = [
        BuildingType::Residential,
        BuildingType::Apartment,
        BuildingType::Commercial,
        BuildingType::Institutional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingType::Residential => "Residential",
            BuildingType::Apartment => "Apartment",
            BuildingType::Commercial => "Commercial",
            BuildingType::Institutional => "Institutional",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "residential" | "house" => Some(BuildingType::Residential),
            "apartment" | "flat" => Some(BuildingType::Apartment),
            "commercial" => Some(BuildingType::Commercial),
            "institutional" => Some(BuildingType::Institutional),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAttributes {
    pub name: String,
    pub dwellers: u32,
    /// Square metres
    pub roof_area: f64,
    pub roof_type: RoofType,
    pub soil_type: SoilType,
    /// Square metres
    pub land_area: f64,
    pub building_type: BuildingType,
    #[serde(default)]
    pub additional_info: String,
}

impl PropertyAttributes {
    pub fn validate(&self) -> Result<()> {
        if self.dwellers == 0 {
            return Err(RaincatchError::InvalidInput(
                "number of dwellers must be at least 1".into(),
            ));
        }
        if !self.roof_area.is_finite() || self.roof_area <= 0.0 {
            return Err(RaincatchError::InvalidInput(format!(
                "roof area must be a positive number of square meters (got {})",
                self.roof_area
            )));
        }
        if !self.land_area.is_finite() || self.land_area <= 0.0 {
            return Err(RaincatchError::InvalidInput(format!(
                "land area must be a positive number of square meters (got {})",
                self.land_area
            )));
        }
        Ok(())
    }
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        Self {
            name: String::new(),
            dwellers: 4,
            roof_area: 100.0,
            roof_type: RoofType::Concrete,
            soil_type: SoilType::Loamy,
            land_area: 200.0,
            building_type: BuildingType::Residential,
            additional_info: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runoff_coefficients() {
        assert_eq!(RoofType::Concrete.runoff_coefficient(), 0.85);
        assert_eq!(RoofType::Tile.runoff_coefficient(), 0.75);
        assert_eq!(RoofType::Metal.runoff_coefficient(), 0.90);
        assert_eq!(RoofType::Asbestos.runoff_coefficient(), 0.80);
        assert_eq!(RoofType::Thatched.runoff_coefficient(), 0.20);
        assert_eq!(RoofType::Unknown.runoff_coefficient(), 0.75);
    }

    #[test]
    fn roof_type_from_str() {
        assert_eq!(RoofType::from_str("Concrete"), RoofType::Concrete);
        assert_eq!(RoofType::from_str(" METAL "), RoofType::Metal);
        assert_eq!(RoofType::from_str("slate"), RoofType::Unknown);
        assert_eq!(RoofType::from_str(""), RoofType::Unknown);
    }

    #[test]
    fn roof_type_unknown_tag_deserializes() {
        let roof: RoofType = serde_json::from_str("\"slate\"").unwrap();
        assert_eq!(roof, RoofType::Unknown);
        let roof: RoofType = serde_json::from_str("\"thatched\"").unwrap();
        assert_eq!(roof, RoofType::Thatched);
    }

    #[test]
    fn soil_type_from_str() {
        assert_eq!(SoilType::from_str("clay"), Some(SoilType::Clay));
        assert_eq!(SoilType::from_str("Loamy"), Some(SoilType::Loamy));
        assert_eq!(SoilType::from_str("peat"), None);
    }

    #[test]
    fn soil_type_round_trip() {
        for soil in SoilType::ALL {
            let debug_str = format!("{:?}", soil);
            assert_eq!(SoilType::from_str(&debug_str), Some(soil));
        }
    }

    #[test]
    fn building_type_from_str() {
        assert_eq!(
            BuildingType::from_str("apartment"),
            Some(BuildingType::Apartment)
        );
        assert_eq!(BuildingType::from_str("warehouse"), None);
    }

    #[test]
    fn default_property_is_valid() {
        assert!(PropertyAttributes::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut p = PropertyAttributes::default();
        p.dwellers = 0;
        assert!(matches!(p.validate(), Err(RaincatchError::InvalidInput(_))));

        let mut p = PropertyAttributes::default();
        p.roof_area = 0.0;
        assert!(p.validate().is_err());

        let mut p = PropertyAttributes::default();
        p.land_area = f64::NAN;
        assert!(p.validate().is_err());
    }
}
