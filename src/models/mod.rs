pub mod aquifer;
pub mod location;
pub mod property;
pub mod rainfall;
pub mod result;

pub use aquifer::*;
pub use location::*;
pub use property::*;
pub use rainfall::*;
pub use result::*;
