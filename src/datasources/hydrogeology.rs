use crate::models::{
    AquiferProfile, AquiferType, DepthRange, HarvestingSuitability, Permeability, Suitability,
    WaterQuality,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Aquifer names used when a point falls outside every named zone
const GENERIC_AQUIFERS: [&str; 5] = [
    "Alluvial",
    "Hard Rock",
    "Coastal",
    "Semi-consolidated",
    "Volcanic",
];

const FAIR_QUALITY_PROBABILITY: f64 = 0.3;

/// Bounding-box zones the rules key off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones {
    pub coastal: bool,
    pub hard_rock: bool,
}

impl Zones {
    pub fn classify(lat: f64, lon: f64) -> Self {
        Self {
            coastal: lon > 72.0 && lon < 88.0 && lat > 8.0 && lat < 25.0,
            hard_rock: lat > 15.0 && lat < 25.0 && lon > 74.0 && lon < 85.0,
        }
    }
}

/// Offline hydrogeology estimator modelled on CGWB aquifer mapping zones.
///
/// Hard rock outranks coastal when naming the aquifer, while coastal
/// outranks hard rock when choosing the warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct HydrogeologyEstimator;

impl HydrogeologyEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate<R: Rng + ?Sized>(&self, lat: f64, lon: f64, rng: &mut R) -> AquiferProfile {
        let zones = Zones::classify(lat, lon);

        let aquifer_name = if zones.hard_rock {
            "Deccan Trap Hard Rock".to_string()
        } else if zones.coastal {
            "Coastal Alluvial".to_string()
        } else {
            GENERIC_AQUIFERS
                .choose(rng)
                .copied()
                .unwrap_or(GENERIC_AQUIFERS[0])
                .to_string()
        };

        let depth = if zones.hard_rock {
            DepthRange::meters(15.0, 45.0)
        } else {
            DepthRange::meters(5.0, 25.0)
        };

        let permeability = if zones.hard_rock {
            Permeability::Medium
        } else {
            Permeability::High
        };

        let quality = if rng.gen_bool(FAIR_QUALITY_PROBABILITY) {
            WaterQuality::Fair
        } else {
            WaterQuality::Good
        };

        let suitability = classify_suitability(zones, &depth);

        let aquifer_type = *AquiferType::ALL
            .choose(rng)
            .unwrap_or(&AquiferType::Unconfined);

        tracing::debug!(
            "Aquifer for {:.4}, {:.4}: {} ({:?}), suitability {}",
            lat,
            lon,
            aquifer_name,
            zones,
            suitability
        );

        AquiferProfile {
            aquifer_name,
            aquifer_type,
            depth_to_water: depth,
            permeability,
            quality,
            suitability: HarvestingSuitability {
                rainwater_harvesting: suitability,
                recharge_method: suitability
                    .recharge_methods()
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            },
            warnings: warnings_for(zones),
            recommendations: recommendations_for(suitability),
        }
    }
}

fn classify_suitability(zones: Zones, depth: &DepthRange) -> Suitability {
    if zones.hard_rock && depth.min > 20.0 {
        Suitability::Fair
    } else if zones.coastal {
        Suitability::Good
    } else {
        Suitability::Excellent
    }
}

fn warnings_for(zones: Zones) -> Vec<String> {
    if zones.coastal {
        vec!["Saltwater intrusion risk in coastal areas".to_string()]
    } else if zones.hard_rock {
        vec!["Limited groundwater potential in hard rock areas".to_string()]
    } else {
        Vec::new()
    }
}

fn recommendations_for(suitability: Suitability) -> Vec<String> {
    let tier_specific = if suitability == Suitability::Excellent {
        "Consider multiple recharge structures"
    } else {
        "Focus on storage-based systems"
    };
    vec![
        "Install first flush diverter for water quality".to_string(),
        "Regular maintenance of collection system required".to_string(),
        tier_specific.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::EstimatorRng;

    fn estimate(lat: f64, lon: f64) -> AquiferProfile {
        HydrogeologyEstimator::new().estimate(lat, lon, &mut EstimatorRng::from_seed_u64(17))
    }

    #[test]
    fn zone_classification() {
        // Chennai: coastal only (lon 80.27 inside hard rock box, lat 13.08 below 15)
        assert_eq!(
            Zones::classify(13.0827, 80.2707),
            Zones { coastal: true, hard_rock: false }
        );
        // Hyderabad: both
        assert_eq!(
            Zones::classify(17.385, 78.4867),
            Zones { coastal: true, hard_rock: true }
        );
        // Delhi: neither
        assert_eq!(
            Zones::classify(28.6139, 77.209),
            Zones { coastal: false, hard_rock: false }
        );
    }

    #[test]
    fn zone_bounds_are_exclusive() {
        assert!(!Zones::classify(25.0, 80.0).coastal);
        assert!(!Zones::classify(25.0, 80.0).hard_rock);
        assert!(!Zones::classify(20.0, 72.0).coastal);
        assert!(!Zones::classify(15.0, 80.0).hard_rock);
    }

    #[test]
    fn overlap_names_hard_rock_but_warns_coastal() {
        let profile = estimate(17.385, 78.4867);
        assert_eq!(profile.aquifer_name, "Deccan Trap Hard Rock");
        assert_eq!(
            profile.warnings,
            vec!["Saltwater intrusion risk in coastal areas".to_string()]
        );
        assert_eq!(profile.depth_to_water, DepthRange::meters(15.0, 45.0));
        assert_eq!(profile.permeability, Permeability::Medium);
        // min depth 15 is not > 20, so coastal decides the tier
        assert_eq!(profile.suitability_tier(), Suitability::Good);
        assert_eq!(
            profile.suitability.recharge_method,
            vec!["Recharge Well".to_string(), "Infiltration Trench".to_string()]
        );
    }

    #[test]
    fn coastal_only_profile() {
        let profile = estimate(13.0827, 80.2707);
        assert_eq!(profile.aquifer_name, "Coastal Alluvial");
        assert_eq!(profile.depth_to_water, DepthRange::meters(5.0, 25.0));
        assert_eq!(profile.permeability, Permeability::High);
        assert_eq!(profile.suitability_tier(), Suitability::Good);
        assert_eq!(
            profile.recommendations[2],
            "Focus on storage-based systems".to_string()
        );
    }

    #[test]
    fn hard_rock_only_warns_limited_potential() {
        // The hard rock box sits inside the coastal box, so this combination
        // only arises if the boxes change.
        let zones = Zones::classify(20.0, 84.9);
        assert!(zones.hard_rock && zones.coastal);
        assert_eq!(
            warnings_for(Zones { coastal: false, hard_rock: true }),
            vec!["Limited groundwater potential in hard rock areas".to_string()]
        );
    }

    #[test]
    fn inland_profile_is_excellent() {
        let profile = estimate(28.6139, 77.209);
        assert!(GENERIC_AQUIFERS.contains(&profile.aquifer_name.as_str()));
        assert_eq!(profile.suitability_tier(), Suitability::Excellent);
        assert_eq!(profile.suitability.recharge_method.len(), 3);
        assert!(profile.warnings.is_empty());
        assert_eq!(
            profile.recommendations[2],
            "Consider multiple recharge structures".to_string()
        );
    }

    #[test]
    fn deep_hard_rock_would_be_fair() {
        let zones = Zones { coastal: true, hard_rock: true };
        assert_eq!(
            classify_suitability(zones, &DepthRange::meters(21.0, 45.0)),
            Suitability::Fair
        );
        assert_eq!(
            classify_suitability(zones, &DepthRange::meters(15.0, 45.0)),
            Suitability::Good
        );
    }

    #[test]
    fn depth_invariant_holds() {
        let mut rng = EstimatorRng::from_seed_u64(23);
        let estimator = HydrogeologyEstimator::new();
        for (lat, lon) in [(19.0, 72.8), (28.6, 77.2), (17.4, 78.5), (5.0, 95.0)] {
            let p = estimator.estimate(lat, lon, &mut rng);
            assert!(p.depth_to_water.min <= p.depth_to_water.max);
        }
    }

    #[test]
    fn quality_draw_is_roughly_thirty_percent_fair() {
        let mut rng = EstimatorRng::from_seed_u64(2024);
        let estimator = HydrogeologyEstimator::new();
        let fair = (0..2000)
            .filter(|_| estimator.estimate(28.6, 77.2, &mut rng).quality == WaterQuality::Fair)
            .count();
        assert!((450..750).contains(&fair), "fair count {}", fair);
    }

    #[test]
    fn aquifer_type_draw_covers_every_variant() {
        let mut rng = EstimatorRng::from_seed_u64(2025);
        let estimator = HydrogeologyEstimator::new();
        let mut counts = [0usize; 3];
        for _ in 0..300 {
            let drawn = estimator.estimate(28.6, 77.2, &mut rng).aquifer_type;
            let idx = AquiferType::ALL
                .iter()
                .position(|t| *t == drawn)
                .unwrap();
            counts[idx] += 1;
        }
        for (variant, count) in AquiferType::ALL.iter().zip(counts) {
            assert!(count > 50, "{} drawn {} times", variant, count);
        }
    }
}
