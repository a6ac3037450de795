//! Radiation balance
//!
//! Shortwave and longwave radiation from the top of the canopy down to the
//! forest floor:
//!
//! - [`transmissivity`]: atmospheric transmissivity from elevation and sunshine
//! - [`ppfd`]: photosynthetic photon flux density at the canopy top
//! - [`topofcanopy`]: net shortwave radiation at the canopy top
//! - [`longwave`]: longwave emission from canopy layers and soil
//! - [`net_surface`]: net radiation reaching the forest floor
//! - [`state`]: per-cell aggregate computing all of the above in order
//! - [`grid`]: evaluation over many independent cells
//! - [`component`]: the radiation balance as a model component

pub mod component;
pub mod grid;
pub mod longwave;
pub mod net_surface;
pub mod parameters;
pub mod ppfd;
pub mod state;
pub mod topofcanopy;
pub mod transmissivity;

pub use component::Radiation;
pub use grid::{evaluate_grid, evaluate_provider};
pub use longwave::{calculate_longwave_radiation, LongwaveRadiation};
pub use net_surface::calculate_netradiation_surface;
pub use parameters::RadiationParameters;
pub use ppfd::{calculate_ppfd, calculate_ppfd_array};
pub use state::{RadiationOutputs, RadiationState, RadiationStatus};
pub use topofcanopy::{calculate_topofcanopy_radiation, calculate_topofcanopy_radiation_array};
pub use transmissivity::{
    calculate_atmospheric_transmissivity, calculate_atmospheric_transmissivity_array,
};
