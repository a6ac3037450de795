//! Standard variable definitions for the Virtual Rainforest.
//!
//! Variables are grouped by the module that produces them. The driving
//! variables are supplied by the forcing data and by the plant module.
//!
//! # Usage
//!
//! ```rust
//! use vr_core::standard_variables::{find_variable, VAR_PPFD};
//!
//! assert_eq!(VAR_PPFD.name, "ppfd");
//! assert_eq!(find_variable("ppfd").unwrap().unit, "mol m-2");
//! ```

use crate::variable::{VariableDefinition, VerticalStructure};

// ============================================================================
// Driving variables
// ============================================================================

pub const VAR_ELEVATION: VariableDefinition = VariableDefinition::new(
    "elevation",
    "m",
    VerticalStructure::Scalar,
    "Elevation above sea level",
);

pub const VAR_SHORTWAVE_IN: VariableDefinition = VariableDefinition::new(
    "shortwave_in",
    "J m-2",
    VerticalStructure::Scalar,
    "Daily downward shortwave radiation",
);

pub const VAR_SUNSHINE_FRACTION: VariableDefinition = VariableDefinition::new(
    "sunshine_fraction",
    "1",
    VerticalStructure::Scalar,
    "Fraction of daylight hours with direct sunshine",
);

pub const VAR_CANOPY_TEMPERATURE: VariableDefinition = VariableDefinition::new(
    "canopy_temperature",
    "degC",
    VerticalStructure::CanopyLayers,
    "Air temperature in each canopy layer",
);

pub const VAR_SURFACE_TEMPERATURE: VariableDefinition = VariableDefinition::new(
    "surface_temperature",
    "degC",
    VerticalStructure::Scalar,
    "Soil surface temperature",
);

pub const VAR_CANOPY_ABSORPTION: VariableDefinition = VariableDefinition::new(
    "canopy_absorption",
    "J m-2",
    VerticalStructure::Scalar,
    "Shortwave radiation absorbed by the canopy",
);

// ============================================================================
// Radiation outputs
// ============================================================================

pub const VAR_PPFD: VariableDefinition = VariableDefinition::new(
    "ppfd",
    "mol m-2",
    VerticalStructure::Scalar,
    "Photosynthetic photon flux density at the top of the canopy",
);

pub const VAR_TOPOFCANOPY_RADIATION: VariableDefinition = VariableDefinition::new(
    "topofcanopy_radiation",
    "J m-2",
    VerticalStructure::Scalar,
    "Net shortwave radiation at the top of the canopy",
);

pub const VAR_LONGWAVE_CANOPY: VariableDefinition = VariableDefinition::new(
    "longwave_canopy",
    "J m-2",
    VerticalStructure::CanopyLayers,
    "Longwave radiation emitted by each canopy layer",
);

pub const VAR_LONGWAVE_SOIL: VariableDefinition = VariableDefinition::new(
    "longwave_soil",
    "J m-2",
    VerticalStructure::Scalar,
    "Longwave radiation emitted by the soil surface",
);

pub const VAR_NETRADIATION_SURFACE: VariableDefinition = VariableDefinition::new(
    "netradiation_surface",
    "J m-2",
    VerticalStructure::Scalar,
    "Net radiation at the forest floor",
);

// ============================================================================
// Energy balance and soil outputs
// ============================================================================

pub const VAR_SOIL_TEMPERATURE: VariableDefinition = VariableDefinition::new(
    "soil_temperature",
    "degC",
    VerticalStructure::Scalar,
    "Soil temperature below the surface",
);

pub const VAR_SENSIBLE_HEAT_FLUX: VariableDefinition = VariableDefinition::new(
    "sensible_heat_flux",
    "J m-2",
    VerticalStructure::CanopyLayers,
    "Sensible heat flux from each canopy layer",
);

pub const VAR_MINERAL_ASSOCIATED_CARBON: VariableDefinition = VariableDefinition::new(
    "mineral_associated_carbon",
    "kg C m-3",
    VerticalStructure::Scalar,
    "Soil carbon pool associated with minerals",
);

pub const VAR_SOIL_MOISTURE: VariableDefinition = VariableDefinition::new(
    "soil_moisture",
    "1",
    VerticalStructure::Scalar,
    "Volumetric soil moisture",
);

/// All standard variables.
pub const STANDARD_VARIABLES: &[VariableDefinition] = &[
    VAR_ELEVATION,
    VAR_SHORTWAVE_IN,
    VAR_SUNSHINE_FRACTION,
    VAR_CANOPY_TEMPERATURE,
    VAR_SURFACE_TEMPERATURE,
    VAR_CANOPY_ABSORPTION,
    VAR_PPFD,
    VAR_TOPOFCANOPY_RADIATION,
    VAR_LONGWAVE_CANOPY,
    VAR_LONGWAVE_SOIL,
    VAR_NETRADIATION_SURFACE,
    VAR_SOIL_TEMPERATURE,
    VAR_SENSIBLE_HEAT_FLUX,
    VAR_MINERAL_ASSOCIATED_CARBON,
    VAR_SOIL_MOISTURE,
];

/// Look up a standard variable by name.
pub fn find_variable(name: &str) -> Option<&'static VariableDefinition> {
    STANDARD_VARIABLES.iter().find(|v| v.name == name)
}
