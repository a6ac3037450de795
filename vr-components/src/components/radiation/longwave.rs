//! Longwave emission from the canopy and the soil surface
//!
//! Each emitting surface follows the Stefan-Boltzmann law:
//!
//! $$ L = \epsilon \sigma (T + 273.15)^4 $$
//!
//! Canopy layers above the actual canopy height carry no temperature and
//! therefore emit nothing; they remain undefined in the output rather than
//! becoming zero.

use log::warn;
use vr_core::errors::{check_bounds, VRError, VRResult};
use vr_core::layers::LayeredValues;
use vr_core::standard_variables::{VAR_CANOPY_TEMPERATURE, VAR_SURFACE_TEMPERATURE};
use vr_core::FloatValue;

use super::parameters::RadiationParameters;

/// Longwave emission for each canopy layer and for the soil.
#[derive(Debug, Clone, PartialEq)]
pub struct LongwaveRadiation {
    /// Emission per canopy layer (J m-2), undefined above the canopy
    pub canopy: LayeredValues,
    /// Emission from the soil surface (J m-2)
    pub soil: FloatValue,
}

fn check_temperature(name: &str, temperature: FloatValue, celsius_to_kelvin: FloatValue) -> VRResult<()> {
    if !temperature.is_finite() {
        return Err(VRError::Computation {
            name: name.to_string(),
            reason: format!("expected a finite temperature, got {}", temperature),
        });
    }
    if temperature + celsius_to_kelvin < 0.0 {
        return Err(VRError::Computation {
            name: name.to_string(),
            reason: format!("{} degC is below absolute zero", temperature),
        });
    }
    Ok(())
}

#[inline]
fn emission(
    temperature: FloatValue,
    emissivity: FloatValue,
    stefan_boltzmann: FloatValue,
    celsius_to_kelvin: FloatValue,
) -> FloatValue {
    emissivity * stefan_boltzmann * (celsius_to_kelvin + temperature).powi(4)
}

/// Calculate longwave emission from the canopy layers and the soil.
///
/// # Arguments
///
/// * `canopy_temperature` - Temperature of each canopy layer (degC)
/// * `surface_temperature` - Soil surface temperature (degC)
/// * `canopy_emissivity` - Emissivity of the canopy
/// * `soil_emissivity` - Emissivity of the soil
/// * `stefan_boltzmann` - Stefan-Boltzmann constant
/// * `celsius_to_kelvin` - Offset from degC to K
///
/// # Returns
///
/// `(longwave_canopy, longwave_soil)`, with one canopy entry per input layer.
pub fn calculate_longwave_radiation(
    canopy_temperature: &LayeredValues,
    surface_temperature: FloatValue,
    canopy_emissivity: FloatValue,
    soil_emissivity: FloatValue,
    stefan_boltzmann: FloatValue,
    celsius_to_kelvin: FloatValue,
) -> VRResult<(LayeredValues, FloatValue)> {
    check_bounds("canopy_emissivity", canopy_emissivity, 0.0, 1.0)?;
    check_bounds("soil_emissivity", soil_emissivity, 0.0, 1.0)?;
    check_temperature(VAR_SURFACE_TEMPERATURE.name, surface_temperature, celsius_to_kelvin)?;

    if !canopy_temperature.is_empty() && canopy_temperature.n_defined() == 0 {
        warn!(
            "No defined canopy layers in a column of {}; canopy emission is undefined",
            canopy_temperature.len()
        );
    }

    let longwave_canopy = canopy_temperature.try_map_defined(|t| {
        check_temperature(VAR_CANOPY_TEMPERATURE.name, t, celsius_to_kelvin)?;
        Ok(emission(t, canopy_emissivity, stefan_boltzmann, celsius_to_kelvin))
    })?;
    let longwave_soil = emission(
        surface_temperature,
        soil_emissivity,
        stefan_boltzmann,
        celsius_to_kelvin,
    );

    Ok((longwave_canopy, longwave_soil))
}

impl LongwaveRadiation {
    /// Calculate longwave emission with the constants from a parameter set.
    pub fn from_parameters(
        canopy_temperature: &LayeredValues,
        surface_temperature: FloatValue,
        parameters: &RadiationParameters,
    ) -> VRResult<Self> {
        let (canopy, soil) = calculate_longwave_radiation(
            canopy_temperature,
            surface_temperature,
            parameters.canopy_emissivity,
            parameters.soil_emissivity,
            parameters.stefan_boltzmann,
            parameters.celsius_to_kelvin,
        )?;
        Ok(Self { canopy, soil })
    }
}
