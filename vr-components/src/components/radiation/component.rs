//! Radiation balance component
//!
//! Wraps [`RadiationOutputs::calculate`] behind the [`Component`] interface so
//! that the radiation balance can be plugged in next to the other model
//! modules. It reads the forcing variables and the canopy absorption from the
//! input state and writes the five radiation variables.

use serde::{Deserialize, Serialize};
use vr_core::component::{Component, RequirementDefinition, RequirementType};
use vr_core::config::Config;
use vr_core::errors::{VRError, VRResult};
use vr_core::standard_variables::{
    VAR_CANOPY_ABSORPTION, VAR_CANOPY_TEMPERATURE, VAR_ELEVATION, VAR_LONGWAVE_CANOPY,
    VAR_LONGWAVE_SOIL, VAR_NETRADIATION_SURFACE, VAR_PPFD, VAR_SHORTWAVE_IN,
    VAR_SUNSHINE_FRACTION, VAR_SURFACE_TEMPERATURE, VAR_TOPOFCANOPY_RADIATION,
};
use vr_core::state::{InputState, OutputState, StateValue};

use super::parameters::RadiationParameters;
use super::state::RadiationOutputs;
use crate::driving_data::DrivingData;

/// Name of the configuration table holding [`RadiationParameters`].
pub const CONFIG_SECTION: &str = "radiation";

/// Radiation balance component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Radiation {
    parameters: RadiationParameters,
    /// Expected number of canopy layers, unchecked when `None`
    canopy_layers: Option<usize>,
}

impl Radiation {
    /// Create a new component from validated parameters.
    pub fn from_parameters(parameters: RadiationParameters) -> VRResult<Self> {
        parameters.validate()?;
        Ok(Self {
            parameters,
            canopy_layers: None,
        })
    }

    /// Create a component from the `[radiation]` and `[core]` tables.
    pub fn from_config(config: &Config) -> VRResult<Self> {
        let parameters: RadiationParameters = config.section(CONFIG_SECTION)?;
        let core = config.core()?;
        Ok(Self::from_parameters(parameters)?.with_canopy_layers(core.layers.canopy_layers))
    }

    /// Require every canopy temperature column to have `canopy_layers` entries.
    pub fn with_canopy_layers(mut self, canopy_layers: usize) -> Self {
        self.canopy_layers = Some(canopy_layers);
        self
    }

    pub fn parameters(&self) -> &RadiationParameters {
        &self.parameters
    }

    /// Evaluate a snapshot, checking the canopy column height first.
    pub fn calculate(&self, data: &DrivingData) -> VRResult<RadiationOutputs> {
        if let Some(expected) = self.canopy_layers {
            let actual = data.canopy_temperature.len();
            if actual != expected {
                return Err(VRError::ShapeMismatch {
                    name: VAR_CANOPY_TEMPERATURE.name.to_string(),
                    expected,
                    actual,
                });
            }
        }
        RadiationOutputs::calculate(&self.parameters, data)
    }
}

impl From<RadiationOutputs> for OutputState {
    fn from(outputs: RadiationOutputs) -> Self {
        OutputState::from([
            (VAR_PPFD.name.to_string(), StateValue::Scalar(outputs.ppfd)),
            (
                VAR_TOPOFCANOPY_RADIATION.name.to_string(),
                StateValue::Scalar(outputs.topofcanopy_radiation),
            ),
            (
                VAR_LONGWAVE_CANOPY.name.to_string(),
                StateValue::Layered(outputs.longwave_canopy),
            ),
            (
                VAR_LONGWAVE_SOIL.name.to_string(),
                StateValue::Scalar(outputs.longwave_soil),
            ),
            (
                VAR_NETRADIATION_SURFACE.name.to_string(),
                StateValue::Scalar(outputs.netradiation_surface),
            ),
        ])
    }
}

#[typetag::serde]
impl Component for Radiation {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        let inputs = [
            VAR_ELEVATION,
            VAR_SHORTWAVE_IN,
            VAR_SUNSHINE_FRACTION,
            VAR_CANOPY_TEMPERATURE,
            VAR_SURFACE_TEMPERATURE,
            VAR_CANOPY_ABSORPTION,
        ];
        let outputs = [
            VAR_PPFD,
            VAR_TOPOFCANOPY_RADIATION,
            VAR_LONGWAVE_CANOPY,
            VAR_LONGWAVE_SOIL,
            VAR_NETRADIATION_SURFACE,
        ];

        inputs
            .iter()
            .map(|v| RequirementDefinition::from_variable(v, RequirementType::Input))
            .chain(
                outputs
                    .iter()
                    .map(|v| RequirementDefinition::from_variable(v, RequirementType::Output)),
            )
            .collect()
    }

    fn solve(&self, input_state: &InputState) -> VRResult<OutputState> {
        let data = DrivingData::from_input_state(input_state)?;
        Ok(self.calculate(&data)?.into())
    }
}
