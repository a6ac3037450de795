pub mod radiation;
pub mod unimplemented;

pub use radiation::Radiation;
pub use unimplemented::{EnergyBalance, SoilCarbonMineralAssociation};
