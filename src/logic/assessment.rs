use super::HarvestingCalculator;
use crate::datasources::{Geocoder, HydrogeologyEstimator, RainfallEstimator};
use crate::error::Result;
use crate::models::{AquiferProfile, HarvestingResult, Location, PropertyAttributes, RainfallProfile};
use crate::rng::EstimatorRng;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Everything one run of the pipeline produced, in the order it was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub location: Location,
    pub property: PropertyAttributes,
    pub rainfall: RainfallProfile,
    pub aquifer: AquiferProfile,
    pub result: HarvestingResult,
    pub generated_at: DateTime<Local>,
}

/// Runs geocoding, site estimation and the harvesting calculation in order.
pub struct AssessmentService {
    geocoder: Geocoder,
    rainfall: RainfallEstimator,
    hydrogeology: HydrogeologyEstimator,
    calculator: HarvestingCalculator,
    rng: EstimatorRng,
}

impl AssessmentService {
    pub fn new(rng: EstimatorRng) -> Self {
        match rng.seed() {
            Some(seed) => tracing::info!("Estimators seeded with {}", seed),
            None => tracing::info!("Estimators seeded from OS entropy"),
        }

        Self {
            geocoder: Geocoder::new(),
            rainfall: RainfallEstimator::new(),
            hydrogeology: HydrogeologyEstimator::new(),
            calculator: HarvestingCalculator::new(),
            rng,
        }
    }

    pub fn assess(&mut self, address: &str, property: PropertyAttributes) -> Result<Assessment> {
        property.validate()?;
        let location = self.geocoder.geocode(address, &mut self.rng)?;
        self.assess_location(location, property)
    }

    /// Re-estimate the site data for an already-resolved location.
    pub fn assess_location(
        &mut self,
        location: Location,
        property: PropertyAttributes,
    ) -> Result<Assessment> {
        property.validate()?;

        let rainfall = self
            .rainfall
            .estimate(location.latitude, location.longitude, &mut self.rng);
        let aquifer = self
            .hydrogeology
            .estimate(location.latitude, location.longitude, &mut self.rng);
        let result = self.calculator.calculate(&property, &rainfall, &aquifer);

        tracing::info!(
            "Assessed {} ({}): {} L/yr, feasibility {} ({})",
            location.address,
            location.district,
            result.potential.annual_harvest,
            result.feasibility.score,
            result.feasibility.status
        );

        Ok(Assessment {
            location,
            property,
            rainfall,
            aquifer,
            result,
            generated_at: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RaincatchError;

    #[test]
    fn same_seed_same_assessment() {
        let mut a = AssessmentService::new(EstimatorRng::from_seed_u64(42));
        let mut b = AssessmentService::new(EstimatorRng::from_seed_u64(42));
        let x = a.assess("Shillong", PropertyAttributes::default()).unwrap();
        let y = b.assess("Shillong", PropertyAttributes::default()).unwrap();
        assert_eq!(x.location, y.location);
        assert_eq!(x.rainfall.prediction, y.rainfall.prediction);
        assert_eq!(x.aquifer, y.aquifer);
        assert_eq!(x.result, y.result);
    }

    #[test]
    fn known_city_pipeline() {
        let mut service = AssessmentService::new(EstimatorRng::from_seed_u64(1));
        let assessment = service
            .assess("Mumbai", PropertyAttributes::default())
            .unwrap();

        assert_eq!(assessment.location.district, "Mumbai");
        assert_eq!(assessment.rainfall.annual_rainfall, 2543.0);
        // Mumbai is in the coastal box but not the hard rock box
        assert_eq!(assessment.aquifer.aquifer_name, "Coastal Alluvial");
        // 2543mm * 100m² * 0.85
        assert_eq!(assessment.result.potential.annual_harvest, 216155);
        // 60 + 20 (rain) + 10 (Good)
        assert_eq!(assessment.result.feasibility.score, 90);
    }

    #[test]
    fn blank_address_rejected() {
        let mut service = AssessmentService::new(EstimatorRng::from_seed_u64(1));
        assert!(matches!(
            service.assess("  ", PropertyAttributes::default()),
            Err(RaincatchError::InvalidInput(_))
        ));
    }

    #[test]
    fn invalid_property_rejected_before_geocoding() {
        let mut service = AssessmentService::new(EstimatorRng::from_seed_u64(1));
        let property = PropertyAttributes {
            roof_area: -5.0,
            ..PropertyAttributes::default()
        };
        assert!(matches!(
            service.assess("Pune", property),
            Err(RaincatchError::InvalidInput(_))
        ));
    }
}
