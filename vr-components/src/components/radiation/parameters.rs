//! Radiation Parameters
//!
//! Physical constants and empirical coefficients used by the radiation
//! balance calculations.

use serde::{Deserialize, Serialize};
use vr_core::errors::{check_bounds, VRError, VRResult};
use vr_core::FloatValue;

/// Parameters for the radiation balance.
///
/// The transmissivity coefficients follow the Beer-Lambert style regression of
/// transmissivity against elevation used by the SPLASH model.
///
/// # Default Values
///
/// Albedo and emissivity defaults are typical for a closed tropical forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationParameters {
    // Atmospheric transmissivity
    /// Transmissivity under fully overcast conditions (dimensionless).
    /// Default: 0.25
    pub cloudy_transmissivity: FloatValue,

    /// Increase in transmissivity per unit sunshine fraction (dimensionless).
    /// Default: 0.50
    pub transmissivity_coefficient: FloatValue,

    /// Elevation correction of transmissivity (1/m).
    /// Default: 2.67e-5
    pub beer_regression: FloatValue,

    // Shortwave
    /// Conversion from shortwave energy to photosynthetic photon flux ($\mu\text{mol J}^{-1}$).
    /// Default: 2.04
    pub flux_to_energy: FloatValue,

    /// Albedo for visible light (dimensionless).
    /// Default: 0.03
    pub albedo_vis: FloatValue,

    /// Albedo for shortwave radiation (dimensionless).
    /// Default: 0.17
    pub albedo_shortwave: FloatValue,

    // Longwave
    /// Emissivity of the canopy (dimensionless).
    /// Default: 0.95
    pub canopy_emissivity: FloatValue,

    /// Emissivity of the soil surface (dimensionless).
    /// Default: 0.95
    pub soil_emissivity: FloatValue,

    /// Stefan-Boltzmann constant ($\text{W m}^{-2}\text{ K}^{-4}$).
    /// Default: 5.67e-8
    pub stefan_boltzmann: FloatValue,

    /// Offset from degrees Celsius to Kelvin.
    /// Default: 273.15
    pub celsius_to_kelvin: FloatValue,
}

impl Default for RadiationParameters {
    fn default() -> Self {
        Self {
            cloudy_transmissivity: 0.25,
            transmissivity_coefficient: 0.50,
            beer_regression: 2.67e-5,

            flux_to_energy: 2.04,
            albedo_vis: 0.03,
            albedo_shortwave: 0.17,

            canopy_emissivity: 0.95,
            soil_emissivity: 0.95,
            stefan_boltzmann: 5.67e-8,
            celsius_to_kelvin: 273.15,
        }
    }
}

impl RadiationParameters {
    /// Check that fractions lie in [0, 1] and constants are positive.
    pub fn validate(&self) -> VRResult<()> {
        check_bounds("cloudy_transmissivity", self.cloudy_transmissivity, 0.0, 1.0)?;
        check_bounds(
            "transmissivity_coefficient",
            self.transmissivity_coefficient,
            0.0,
            1.0,
        )?;
        check_bounds("albedo_vis", self.albedo_vis, 0.0, 1.0)?;
        check_bounds("albedo_shortwave", self.albedo_shortwave, 0.0, 1.0)?;
        check_bounds("canopy_emissivity", self.canopy_emissivity, 0.0, 1.0)?;
        check_bounds("soil_emissivity", self.soil_emissivity, 0.0, 1.0)?;

        for (name, value) in [
            ("beer_regression", self.beer_regression),
            ("flux_to_energy", self.flux_to_energy),
            ("stefan_boltzmann", self.stefan_boltzmann),
            ("celsius_to_kelvin", self.celsius_to_kelvin),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(VRError::Computation {
                    name: name.to_string(),
                    reason: format!("expected a positive finite constant, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Copy of the parameters with per-evaluation albedo overrides applied.
    pub fn with_albedo_overrides(
        &self,
        albedo_vis: Option<FloatValue>,
        albedo_shortwave: Option<FloatValue>,
    ) -> Self {
        Self {
            albedo_vis: albedo_vis.unwrap_or(self.albedo_vis),
            albedo_shortwave: albedo_shortwave.unwrap_or(self.albedo_shortwave),
            ..self.clone()
        }
    }
}
