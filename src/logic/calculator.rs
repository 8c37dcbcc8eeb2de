use super::calculations::{
    feasibility_score, flood_reduction, harvest_liters, payback_years, roi_percent,
    round_to_u64, select_structure, size_structure, CARBON_PER_LITER, COST_OVERHEAD,
    COST_PER_SQM, RECHARGE_FRACTION, STORAGE_FRACTION, WATER_COST_PER_LITER,
};
use crate::models::{
    AquiferProfile, CalculationNotice, Economics, EnvironmentalImpact, Feasibility,
    FeasibilityStatus, HarvestPotential, HarvestingResult, Payback, PropertyAttributes,
    RainfallProfile, SoilType, StructureRecommendation, SECONDARY_STRUCTURES,
};

/// Turns a property and its site profiles into a harvesting assessment.
///
/// Pure and deterministic: the same inputs always give the same result.
#[derive(Debug, Default, Clone, Copy)]
pub struct HarvestingCalculator;

impl HarvestingCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(
        &self,
        property: &PropertyAttributes,
        rainfall: &RainfallProfile,
        aquifer: &AquiferProfile,
    ) -> HarvestingResult {
        let mut notices = Vec::new();
        let coefficient = property.roof_type.runoff_coefficient();
        let suitability = aquifer.suitability_tier();

        let potential = self.potential(property, rainfall, coefficient);
        let annual_harvest = potential.annual_harvest;

        let score = feasibility_score(rainfall.annual_rainfall, suitability, property.roof_area);
        let feasibility = Feasibility {
            status: FeasibilityStatus::from_score(score),
            score,
            reasons: vec![
                format!("Annual rainfall: {}mm", rainfall.annual_rainfall),
                format!("Roof area: {} sq meters", property.roof_area),
                format!("Hydrogeology suitability: {}", suitability),
                format!(
                    "Estimated collection efficiency: {}%",
                    potential.efficiency
                ),
            ],
        };

        let total_cost = round_to_u64(property.roof_area * COST_PER_SQM * COST_OVERHEAD);
        let annual_savings = round_to_u64(annual_harvest as f64 * WATER_COST_PER_LITER);
        let payback_period = match payback_years(total_cost, annual_savings) {
            Some(years) => Payback::Years(years),
            None => {
                tracing::warn!(
                    "Annual savings are zero for '{}'; payback is not recoverable",
                    property.name
                );
                notices.push(CalculationNotice::DegenerateEconomics);
                Payback::NotRecoverable
            }
        };
        let economics = Economics {
            total_cost,
            annual_savings,
            payback_period,
            roi: roi_percent(annual_savings, total_cost),
        };

        let structure = select_structure(
            suitability,
            property.soil_type == SoilType::Clay,
            property.land_area,
        );
        let volume = round_to_u64(annual_harvest as f64 * STORAGE_FRACTION);
        let (dimensions, degenerate) = size_structure(structure, volume);
        if degenerate {
            tracing::warn!("No storage volume to size; using minimum 1m x 1m footprint");
            notices.push(CalculationNotice::DegenerateSizing);
        }

        let environmental = EnvironmentalImpact {
            carbon_reduction: round_to_u64(annual_harvest as f64 * CARBON_PER_LITER),
            groundwater_recharge: round_to_u64(annual_harvest as f64 * RECHARGE_FRACTION),
            flood_reduction: flood_reduction(property.roof_area, property.land_area),
        };

        tracing::debug!(
            "Calculated {} L/yr, score {} ({}), {}",
            annual_harvest,
            score,
            feasibility.status,
            structure
        );

        HarvestingResult {
            feasibility,
            potential,
            recommendation: StructureRecommendation {
                primary_structure: structure,
                secondary_structures: SECONDARY_STRUCTURES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                dimensions,
            },
            economics,
            environmental,
            notices,
        }
    }

    fn potential(
        &self,
        property: &PropertyAttributes,
        rainfall: &RainfallProfile,
        coefficient: f64,
    ) -> HarvestPotential {
        let annual_harvest = harvest_liters(rainfall.annual_rainfall, property.roof_area, coefficient);
        let monthly_harvest = rainfall
            .monthly_rainfall
            .map(|mm| harvest_liters(mm, property.roof_area, coefficient));
        let (peak_month, _) = rainfall.peak_month();

        HarvestPotential {
            annual_harvest,
            monthly_average: round_to_u64(annual_harvest as f64 / 12.0),
            daily_average: round_to_u64(annual_harvest as f64 / 365.0),
            efficiency: round_to_u64(coefficient * 100.0) as u32,
            peak_month,
            peak_month_harvest: monthly_harvest[peak_month],
            monthly_harvest,
        }
    }
}
