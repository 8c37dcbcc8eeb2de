pub mod geocoder;
pub mod hydrogeology;
pub mod rainfall;

pub use geocoder::Geocoder;
pub use hydrogeology::HydrogeologyEstimator;
pub use rainfall::RainfallEstimator;
