use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AquiferType {
    Confined,
    Unconfined,
    #[serde(rename = "Semi-confined")]
    SemiConfined,
}

impl AquiferType {
    pub const ALL: [AquiferType; 3] = [
        AquiferType::Confined,
        AquiferType::Unconfined,
        AquiferType::SemiConfined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AquiferType::Confined => "Confined",
            AquiferType::Unconfined => "Unconfined",
            AquiferType::SemiConfined => "Semi-confined",
        }
    }
}

impl std::fmt::Display for AquiferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permeability {
    High,
    Medium,
    Low,
}

impl Permeability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permeability::High => "High",
            Permeability::Medium => "Medium",
            Permeability::Low => "Low",
        }
    }
}

impl std::fmt::Display for Permeability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterQuality {
    Good,
    Fair,
    Poor,
}

impl WaterQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterQuality::Good => "Good",
            WaterQuality::Fair => "Fair",
            WaterQuality::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for WaterQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rainwater harvesting suitability tier, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suitability {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Suitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Poor => "Poor",
            Suitability::Fair => "Fair",
            Suitability::Good => "Good",
            Suitability::Excellent => "Excellent",
        }
    }

    /// Recharge methods suited to this tier, most preferred first
    pub fn recharge_methods(&self) -> &'static [&'static str] {
        match self {
            Suitability::Excellent => &["Recharge Pit", "Percolation Tank", "Check Dam"],
            Suitability::Good => &["Recharge Well", "Infiltration Trench"],
            Suitability::Fair | Suitability::Poor => &["Storage Tank", "Rooftop Collection"],
        }
    }
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

impl DepthRange {
    pub fn meters(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            unit: "meters".to_string(),
        }
    }
}

impl std::fmt::Display for DepthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {}", self.min, self.max, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestingSuitability {
    pub rainwater_harvesting: Suitability,
    pub recharge_method: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquiferProfile {
    pub aquifer_name: String,
    pub aquifer_type: AquiferType,
    pub depth_to_water: DepthRange,
    pub permeability: Permeability,
    pub quality: WaterQuality,
    pub suitability: HarvestingSuitability,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AquiferProfile {
    pub fn suitability_tier(&self) -> Suitability {
        self.suitability.rainwater_harvesting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suitability_ordering() {
        assert!(Suitability::Poor < Suitability::Fair);
        assert!(Suitability::Fair < Suitability::Good);
        assert!(Suitability::Good < Suitability::Excellent);
    }

    #[test]
    fn recharge_methods_per_tier() {
        assert_eq!(
            Suitability::Excellent.recharge_methods(),
            &["Recharge Pit", "Percolation Tank", "Check Dam"]
        );
        assert_eq!(
            Suitability::Good.recharge_methods(),
            &["Recharge Well", "Infiltration Trench"]
        );
        assert_eq!(
            Suitability::Fair.recharge_methods(),
            Suitability::Poor.recharge_methods()
        );
    }

    #[test]
    fn semi_confined_serializes_with_hyphen() {
        let json = serde_json::to_string(&AquiferType::SemiConfined).unwrap();
        assert_eq!(json, "\"Semi-confined\"");
    }

    #[test]
    fn depth_range_display() {
        assert_eq!(DepthRange::meters(15.0, 45.0).to_string(), "15-45 meters");
    }
}
