//! Radiation state for a single cell
//!
//! [`RadiationState`] owns the five radiation quantities derived from one
//! [`DrivingData`] snapshot. It is built in two phases: construct it with the
//! parameters, then call [`RadiationState::evaluate`]. The results are only
//! installed once every quantity has been computed, so a failed evaluation
//! never exposes a partially updated state.

use log::debug;
use serde::{Deserialize, Serialize};
use vr_core::errors::VRResult;
use vr_core::layers::LayeredValues;
use vr_core::FloatValue;

use super::longwave::LongwaveRadiation;
use super::net_surface::calculate_netradiation_surface;
use super::parameters::RadiationParameters;
use super::ppfd::calculate_ppfd;
use super::topofcanopy::calculate_topofcanopy_radiation;
use crate::driving_data::DrivingData;

/// The derived radiation quantities for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiationOutputs {
    /// Photosynthetic photon flux density (mol m-2)
    pub ppfd: FloatValue,
    /// Net shortwave radiation at the top of the canopy (J m-2)
    pub topofcanopy_radiation: FloatValue,
    /// Longwave emission per canopy layer (J m-2)
    pub longwave_canopy: LayeredValues,
    /// Longwave emission from the soil (J m-2)
    pub longwave_soil: FloatValue,
    /// Net radiation at the forest floor (J m-2), negative for a net loss
    pub netradiation_surface: FloatValue,
}

impl RadiationOutputs {
    /// Compute every radiation quantity from a snapshot.
    ///
    /// Order matters only for the net radiation, which needs the other four.
    pub fn calculate(parameters: &RadiationParameters, data: &DrivingData) -> VRResult<Self> {
        let parameters = parameters.with_albedo_overrides(data.albedo_vis, data.albedo_shortwave);

        // Transmissivity dependent
        let ppfd = calculate_ppfd(
            data.shortwave_in,
            data.elevation,
            data.sunshine_fraction,
            parameters.albedo_vis,
            parameters.flux_to_energy,
            &parameters,
        )?;
        let topofcanopy_radiation = calculate_topofcanopy_radiation(
            data.shortwave_in,
            data.elevation,
            data.sunshine_fraction,
            parameters.albedo_shortwave,
            &parameters,
        )?;

        // Temperature dependent
        let longwave = LongwaveRadiation::from_parameters(
            &data.canopy_temperature,
            data.surface_temperature,
            &parameters,
        )?;

        let netradiation_surface = calculate_netradiation_surface(
            topofcanopy_radiation,
            data.canopy_absorption,
            &longwave.canopy,
            longwave.soil,
        )?;

        debug!(
            "Radiation evaluated: ppfd={:.4}, toc={:.1}, lw_soil={:.2}, net={:.1}, layers={}/{}",
            ppfd,
            topofcanopy_radiation,
            longwave.soil,
            netradiation_surface,
            longwave.canopy.n_defined(),
            longwave.canopy.len()
        );

        Ok(Self {
            ppfd,
            topofcanopy_radiation,
            longwave_canopy: longwave.canopy,
            longwave_soil: longwave.soil,
            netradiation_surface,
        })
    }
}

/// Lifecycle of a [`RadiationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiationStatus {
    Uninitialized,
    Computed,
}

/// Radiation balance for a single cell.
///
/// # Examples
///
/// ```rust
/// use vr_components::components::radiation::{RadiationParameters, RadiationState};
/// use vr_components::driving_data::DrivingData;
/// use vr_core::layers::LayeredValues;
///
/// let data = DrivingData {
///     elevation: 0.0,
///     shortwave_in: 0.0,
///     sunshine_fraction: 0.5,
///     canopy_temperature: LayeredValues::padded(&[25.0], 3),
///     surface_temperature: 20.0,
///     canopy_absorption: 0.0,
///     albedo_vis: None,
///     albedo_shortwave: None,
/// };
///
/// let mut state = RadiationState::new(RadiationParameters::default());
/// assert!(!state.is_computed());
///
/// state.evaluate(&data).unwrap();
/// assert_eq!(state.ppfd(), Some(0.0));
/// assert_eq!(state.longwave_canopy().unwrap().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RadiationState {
    parameters: RadiationParameters,
    outputs: Option<RadiationOutputs>,
}

impl RadiationState {
    pub fn new(parameters: RadiationParameters) -> Self {
        Self {
            parameters,
            outputs: None,
        }
    }

    /// Create a state and evaluate it against a snapshot in one step.
    pub fn from_driving_data(parameters: RadiationParameters, data: &DrivingData) -> VRResult<Self> {
        let mut state = Self::new(parameters);
        state.evaluate(data)?;
        Ok(state)
    }

    /// Recompute every derived quantity from `data`.
    ///
    /// On error the previous status is kept unchanged.
    pub fn evaluate(&mut self, data: &DrivingData) -> VRResult<&RadiationOutputs> {
        let outputs = RadiationOutputs::calculate(&self.parameters, data)?;
        let outputs: &RadiationOutputs = self.outputs.insert(outputs);
        Ok(outputs)
    }

    pub fn parameters(&self) -> &RadiationParameters {
        &self.parameters
    }

    pub fn status(&self) -> RadiationStatus {
        match self.outputs {
            Some(_) => RadiationStatus::Computed,
            None => RadiationStatus::Uninitialized,
        }
    }

    pub fn is_computed(&self) -> bool {
        self.status() == RadiationStatus::Computed
    }

    pub fn outputs(&self) -> Option<&RadiationOutputs> {
        self.outputs.as_ref()
    }

    pub fn ppfd(&self) -> Option<FloatValue> {
        self.outputs().map(|o| o.ppfd)
    }

    pub fn topofcanopy_radiation(&self) -> Option<FloatValue> {
        self.outputs().map(|o| o.topofcanopy_radiation)
    }

    pub fn longwave_canopy(&self) -> Option<&LayeredValues> {
        self.outputs().map(|o| &o.longwave_canopy)
    }

    pub fn longwave_soil(&self) -> Option<FloatValue> {
        self.outputs().map(|o| o.longwave_soil)
    }

    pub fn netradiation_surface(&self) -> Option<FloatValue> {
        self.outputs().map(|o| o.netradiation_surface)
    }
}
