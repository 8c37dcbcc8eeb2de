use crate::models::{Dimensions, StructureType, Suitability};

/// Installed cost per square meter of roof, rupees
pub const COST_PER_SQM: f64 = 150.0;
/// Labour and fittings overhead applied on top of the base cost
pub const COST_OVERHEAD: f64 = 1.2;
/// Municipal water tariff, rupees per liter
pub const WATER_COST_PER_LITER: f64 = 0.02;
/// Share of the annual harvest held in temporary storage
pub const STORAGE_FRACTION: f64 = 0.1;
/// kg CO2 avoided per liter not pumped from the municipal supply
pub const CARBON_PER_LITER: f64 = 0.0005;
/// Share of harvested water that reaches the aquifer
pub const RECHARGE_FRACTION: f64 = 0.8;
pub const MAX_FEASIBILITY_SCORE: u32 = 95;
pub const MAX_FLOOD_REDUCTION: u32 = 45;

/// Round half away from zero, clamped at zero.
pub fn round_to_u64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Harvestable liters: V = P × A × Cr
pub fn harvest_liters(rainfall_mm: f64, roof_area_sqm: f64, coefficient: f64) -> u64 {
    round_to_u64((rainfall_mm / 1000.0) * roof_area_sqm * coefficient * 1000.0)
}

/// Heuristic 0-95 score for how worthwhile harvesting is at a site
pub fn feasibility_score(annual_rainfall_mm: f64, suitability: Suitability, roof_area_sqm: f64) -> u32 {
    let mut score = 60;

    if annual_rainfall_mm > 1200.0 {
        score += 20;
    } else if annual_rainfall_mm > 800.0 {
        score += 10;
    }

    score += match suitability {
        Suitability::Excellent => 15,
        Suitability::Good => 10,
        Suitability::Fair => 5,
        Suitability::Poor => 0,
    };

    if roof_area_sqm > 200.0 {
        score += 5;
    }

    score.min(MAX_FEASIBILITY_SCORE)
}

pub fn select_structure(suitability: Suitability, soil_is_clay: bool, land_area_sqm: f64) -> StructureType {
    if suitability == Suitability::Poor || soil_is_clay {
        StructureType::StorageTank
    } else if land_area_sqm < 100.0 {
        StructureType::RechargeWell
    } else {
        StructureType::RechargePit
    }
}

/// Size a structure to hold `volume_liters`.
///
/// Returns the dimensions and whether the footprint was degenerate, in
/// which case the structure is reported at the 1m x 1m minimum.
pub fn size_structure(structure: StructureType, volume_liters: u64) -> (Dimensions, bool) {
    let depth = structure.depth_m();
    let area = volume_liters as f64 / (depth as f64 * 1000.0);

    if !area.is_finite() || area <= 0.0 {
        return (
            Dimensions {
                length: 1,
                width: 1,
                depth,
                capacity: volume_liters,
            },
            true,
        );
    }

    let length = area.sqrt().ceil();
    let width = (area / length).ceil();

    (
        Dimensions {
            length: length as u32,
            width: width as u32,
            depth,
            capacity: volume_liters,
        },
        false,
    )
}

/// Share of site runoff intercepted by the roof, percent, capped at 45
pub fn flood_reduction(roof_area_sqm: f64, land_area_sqm: f64) -> u32 {
    if land_area_sqm <= 0.0 {
        return MAX_FLOOD_REDUCTION;
    }
    let pct = round_to_u64((roof_area_sqm / land_area_sqm) * 30.0);
    pct.min(MAX_FLOOD_REDUCTION as u64) as u32
}

/// Years to recover the cost, one decimal. None when nothing is saved.
pub fn payback_years(total_cost: u64, annual_savings: u64) -> Option<f64> {
    if annual_savings == 0 {
        return None;
    }
    let years = total_cost as f64 / annual_savings as f64;
    Some((years * 10.0).round() / 10.0)
}

/// Simple annual return on the installation cost, percent
pub fn roi_percent(annual_savings: u64, total_cost: u64) -> u64 {
    if total_cost == 0 {
        return 0;
    }
    round_to_u64((annual_savings as f64 / total_cost as f64) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_u64(2.5), 3);
        assert_eq!(round_to_u64(2.4999), 2);
        assert_eq!(round_to_u64(-3.0), 0);
        assert_eq!(round_to_u64(f64::NAN), 0);
    }

    #[test]
    fn harvest_example() {
        assert_eq!(harvest_liters(1000.0, 100.0, 0.85), 85000);
        assert_eq!(harvest_liters(1200.0, 100.0, 0.85), 102000);
        assert_eq!(harvest_liters(0.0, 100.0, 0.85), 0);
    }

    #[test]
    fn harvest_is_linear_in_roof_area() {
        let single = harvest_liters(1000.0, 100.0, 0.9);
        let double = harvest_liters(1000.0, 200.0, 0.9);
        assert_eq!(double, single * 2);
    }

    #[test]
    fn score_branches() {
        assert_eq!(feasibility_score(1200.0, Suitability::Good, 100.0), 80);
        assert_eq!(feasibility_score(1201.0, Suitability::Good, 100.0), 90);
        assert_eq!(feasibility_score(800.0, Suitability::Poor, 100.0), 60);
        assert_eq!(feasibility_score(801.0, Suitability::Fair, 100.0), 75);
        assert_eq!(feasibility_score(2000.0, Suitability::Excellent, 300.0), 95);
        assert_eq!(feasibility_score(500.0, Suitability::Poor, 201.0), 65);
    }

    #[test]
    fn structure_selection() {
        assert_eq!(
            select_structure(Suitability::Excellent, true, 500.0),
            StructureType::StorageTank
        );
        assert_eq!(
            select_structure(Suitability::Poor, false, 500.0),
            StructureType::StorageTank
        );
        assert_eq!(
            select_structure(Suitability::Good, false, 99.0),
            StructureType::RechargeWell
        );
        assert_eq!(
            select_structure(Suitability::Good, false, 100.0),
            StructureType::RechargePit
        );
    }

    #[test]
    fn sizing() {
        let (dims, degenerate) = size_structure(StructureType::RechargePit, 10200);
        assert!(!degenerate);
        assert_eq!((dims.length, dims.width, dims.depth, dims.capacity), (2, 2, 3, 10200));

        // 50,000 L tank at 2m deep: 25 m² -> 5 x 5
        let (dims, _) = size_structure(StructureType::StorageTank, 50000);
        assert_eq!((dims.length, dims.width, dims.depth), (5, 5, 2));
    }

    #[test]
    fn sizing_zero_volume_is_minimum() {
        let (dims, degenerate) = size_structure(StructureType::StorageTank, 0);
        assert!(degenerate);
        assert_eq!((dims.length, dims.width, dims.depth, dims.capacity), (1, 1, 2, 0));
    }

    #[test]
    fn flood_reduction_caps_at_45() {
        assert_eq!(flood_reduction(100.0, 200.0), 15);
        assert_eq!(flood_reduction(300.0, 100.0), 45);
        assert_eq!(flood_reduction(150.0, 100.0), 45);
    }

    #[test]
    fn payback_and_roi() {
        assert_eq!(payback_years(18000, 2040), Some(8.8));
        assert_eq!(payback_years(18000, 0), None);
        assert_eq!(roi_percent(2040, 18000), 11);
        assert_eq!(roi_percent(100, 0), 0);
    }
}
