//! Modules that are declared but not yet built
//!
//! These components publish the variables they will eventually exchange so
//! that model wiring can be checked, but solving them always fails with
//! [`VRError::Unimplemented`].

use serde::{Deserialize, Serialize};
use vr_core::component::{Component, RequirementDefinition, RequirementType};
use vr_core::errors::{VRError, VRResult};
use vr_core::standard_variables::{
    VAR_CANOPY_TEMPERATURE, VAR_LONGWAVE_SOIL, VAR_MINERAL_ASSOCIATED_CARBON,
    VAR_NETRADIATION_SURFACE, VAR_SENSIBLE_HEAT_FLUX, VAR_SOIL_MOISTURE, VAR_SOIL_TEMPERATURE,
};
use vr_core::state::{InputState, OutputState};

/// Vertical energy balance of the canopy and soil.
///
/// Will solve the layered heat balance with a tridiagonal (Thomas) solver
/// once the microclimate module is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyBalance {}

#[typetag::serde]
impl Component for EnergyBalance {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::from_variable(&VAR_NETRADIATION_SURFACE, RequirementType::Input),
            RequirementDefinition::from_variable(&VAR_LONGWAVE_SOIL, RequirementType::Input),
            RequirementDefinition::from_variable(&VAR_CANOPY_TEMPERATURE, RequirementType::Input),
            RequirementDefinition::from_variable(&VAR_SOIL_TEMPERATURE, RequirementType::Output),
            RequirementDefinition::from_variable(&VAR_SENSIBLE_HEAT_FLUX, RequirementType::Output),
        ]
    }

    fn solve(&self, _input_state: &InputState) -> VRResult<OutputState> {
        Err(VRError::Unimplemented("Energy balance".to_string()))
    }
}

/// Mineral association of soil carbon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilCarbonMineralAssociation {}

#[typetag::serde]
impl Component for SoilCarbonMineralAssociation {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::from_variable(&VAR_SOIL_TEMPERATURE, RequirementType::Input),
            RequirementDefinition::from_variable(&VAR_SOIL_MOISTURE, RequirementType::Input),
            RequirementDefinition::from_variable(
                &VAR_MINERAL_ASSOCIATED_CARBON,
                RequirementType::Output,
            ),
        ]
    }

    fn solve(&self, _input_state: &InputState) -> VRResult<OutputState> {
        Err(VRError::Unimplemented(
            "Soil carbon mineral association".to_string(),
        ))
    }
}
