use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityStatus {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl FeasibilityStatus {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            FeasibilityStatus::Excellent
        } else if score >= 65 {
            FeasibilityStatus::Good
        } else if score >= 50 {
            FeasibilityStatus::Fair
        } else {
            FeasibilityStatus::Poor
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            FeasibilityStatus::Excellent | FeasibilityStatus::Good => StatusTone::Positive,
            FeasibilityStatus::Fair => StatusTone::Caution,
            FeasibilityStatus::Poor => StatusTone::Negative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeasibilityStatus::Excellent => "Excellent",
            FeasibilityStatus::Good => "Good",
            FeasibilityStatus::Fair => "Fair",
            FeasibilityStatus::Poor => "Poor",
        }
    }
}

/// How a status should be presented, shared by the terminal and dashboard palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Caution,
    Negative,
}

impl std::fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureType {
    #[serde(rename = "Recharge Pit")]
    RechargePit,
    #[serde(rename = "Recharge Well")]
    RechargeWell,
    #[serde(rename = "Storage Tank")]
    StorageTank,
}

impl StructureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::RechargePit => "Recharge Pit",
            StructureType::RechargeWell => "Recharge Well",
            StructureType::StorageTank => "Storage Tank",
        }
    }

    /// Working depth in meters
    pub fn depth_m(&self) -> u32 {
        match self {
            StructureType::StorageTank => 2,
            _ => 3,
        }
    }
}

impl std::fmt::Display for StructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const SECONDARY_STRUCTURES: [&str; 3] =
    ["First Flush Diverter", "Filter System", "Distribution Network"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feasibility {
    pub status: FeasibilityStatus,
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestPotential {
    /// Liters per year
    pub annual_harvest: u64,
    pub monthly_average: u64,
    pub daily_average: u64,
    /// Runoff coefficient as a whole percentage
    pub efficiency: u32,
    /// Zero-based month index of the wettest month
    pub peak_month: usize,
    pub peak_month_harvest: u64,
    pub monthly_harvest: [u64; 12],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Meters
    pub length: u32,
    pub width: u32,
    pub depth: u32,
    /// Liters
    pub capacity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRecommendation {
    pub primary_structure: StructureType,
    pub secondary_structures: Vec<String>,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    /// Years, one decimal place
    Years(f64),
    /// Harvest saves nothing, so the cost is never recovered
    NotRecoverable,
}

impl Payback {
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years(y) => Some(*y),
            Payback::NotRecoverable => None,
        }
    }
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payback::Years(y) => write!(f, "{:.1} years", y),
            Payback::NotRecoverable => write!(f, "not recoverable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    /// Rupees
    pub total_cost: u64,
    /// Rupees per year
    pub annual_savings: u64,
    pub payback_period: Payback,
    /// Percent per year
    pub roi: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// kg CO2 per year
    pub carbon_reduction: u64,
    /// Liters per year
    pub groundwater_recharge: u64,
    /// Percent
    pub flood_reduction: u32,
}

/// Degenerate numeric cases the calculator resolved with a fallback value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationNotice {
    DegenerateEconomics,
    DegenerateSizing,
}

impl CalculationNotice {
    pub fn describe(&self) -> &'static str {
        match self {
            CalculationNotice::DegenerateEconomics => {
                "No annual savings: the installation cost cannot be recovered"
            }
            CalculationNotice::DegenerateSizing => {
                "No harvestable volume: structure sized at the 1m x 1m minimum"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestingResult {
    pub feasibility: Feasibility,
    pub potential: HarvestPotential,
    pub recommendation: StructureRecommendation,
    pub economics: Economics,
    pub environmental: EnvironmentalImpact,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<CalculationNotice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tones() {
        assert_eq!(FeasibilityStatus::Excellent.tone(), StatusTone::Positive);
        assert_eq!(FeasibilityStatus::Good.tone(), StatusTone::Positive);
        assert_eq!(FeasibilityStatus::Fair.tone(), StatusTone::Caution);
        assert_eq!(FeasibilityStatus::Poor.tone(), StatusTone::Negative);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(FeasibilityStatus::from_score(95), FeasibilityStatus::Excellent);
        assert_eq!(FeasibilityStatus::from_score(80), FeasibilityStatus::Excellent);
        assert_eq!(FeasibilityStatus::from_score(79), FeasibilityStatus::Good);
        assert_eq!(FeasibilityStatus::from_score(65), FeasibilityStatus::Good);
        assert_eq!(FeasibilityStatus::from_score(64), FeasibilityStatus::Fair);
        assert_eq!(FeasibilityStatus::from_score(50), FeasibilityStatus::Fair);
        assert_eq!(FeasibilityStatus::from_score(49), FeasibilityStatus::Poor);
    }

    #[test]
    fn structure_depths() {
        assert_eq!(StructureType::StorageTank.depth_m(), 2);
        assert_eq!(StructureType::RechargePit.depth_m(), 3);
        assert_eq!(StructureType::RechargeWell.depth_m(), 3);
    }

    #[test]
    fn payback_serialization() {
        assert_eq!(
            serde_json::to_string(&Payback::NotRecoverable).unwrap(),
            "\"not_recoverable\""
        );
        assert_eq!(
            serde_json::to_string(&Payback::Years(8.8)).unwrap(),
            "{\"years\":8.8}"
        );
        assert_eq!(Payback::Years(8.8).to_string(), "8.8 years");
        assert_eq!(Payback::NotRecoverable.years(), None);
    }

    #[test]
    fn structure_type_serializes_display_name() {
        assert_eq!(
            serde_json::to_string(&StructureType::StorageTank).unwrap(),
            "\"Storage Tank\""
        );
    }
}
