//! Photosynthetic photon flux density at the top of the canopy
//!
//! $$ PPFD = 10^{-6} \cdot k_{fe} \cdot (1 - \alpha_{vis}) \cdot \tau \cdot S_{in} $$
//!
//! where $k_{fe}$ converts shortwave energy to photon flux and $\tau$ is the
//! atmospheric transmissivity.

use ndarray::{Array1, ArrayView1, Zip};
use vr_core::errors::{check_bounds, check_non_negative, VRResult};
use vr_core::standard_variables::VAR_SHORTWAVE_IN;
use vr_core::FloatValue;

use super::parameters::RadiationParameters;
use super::transmissivity::{
    calculate_atmospheric_transmissivity, calculate_atmospheric_transmissivity_array,
    check_same_length,
};

/// Calculate PPFD (mol m-2) at the top of the canopy.
///
/// # Arguments
///
/// * `shortwave_in` - Daily downward shortwave radiation (J m-2)
/// * `elevation` - Elevation above sea level (m)
/// * `sunshine_fraction` - Fraction of daylight with direct sun, within [0, 1]
/// * `albedo_vis` - Visible light albedo
/// * `flux_to_energy` - Photon flux per unit energy (umol J-1)
/// * `parameters` - Supplies the transmissivity coefficients
pub fn calculate_ppfd(
    shortwave_in: FloatValue,
    elevation: FloatValue,
    sunshine_fraction: FloatValue,
    albedo_vis: FloatValue,
    flux_to_energy: FloatValue,
    parameters: &RadiationParameters,
) -> VRResult<FloatValue> {
    check_non_negative(VAR_SHORTWAVE_IN.name, shortwave_in)?;
    check_bounds("albedo_vis", albedo_vis, 0.0, 1.0)?;
    let tau = calculate_atmospheric_transmissivity(
        elevation,
        sunshine_fraction,
        parameters.cloudy_transmissivity,
        parameters.transmissivity_coefficient,
        parameters.beer_regression,
    )?;

    Ok(ppfd_from_transmissivity(
        shortwave_in,
        tau,
        albedo_vis,
        flux_to_energy,
    ))
}

#[inline]
pub(crate) fn ppfd_from_transmissivity(
    shortwave_in: FloatValue,
    tau: FloatValue,
    albedo_vis: FloatValue,
    flux_to_energy: FloatValue,
) -> FloatValue {
    1e-6 * flux_to_energy * (1.0 - albedo_vis) * tau * shortwave_in
}

/// Calculate PPFD elementwise over a set of cells using the parameter albedo.
pub fn calculate_ppfd_array(
    shortwave_in: ArrayView1<FloatValue>,
    elevation: ArrayView1<FloatValue>,
    sunshine_fraction: ArrayView1<FloatValue>,
    parameters: &RadiationParameters,
) -> VRResult<Array1<FloatValue>> {
    check_same_length(VAR_SHORTWAVE_IN.name, elevation.len(), shortwave_in.len())?;
    shortwave_in
        .iter()
        .try_for_each(|&sw| check_non_negative(VAR_SHORTWAVE_IN.name, sw))?;
    check_bounds("albedo_vis", parameters.albedo_vis, 0.0, 1.0)?;
    let tau = calculate_atmospheric_transmissivity_array(elevation, sunshine_fraction, parameters)?;

    Ok(Zip::from(shortwave_in).and(&tau).map_collect(|&sw, &t| {
        ppfd_from_transmissivity(sw, t, parameters.albedo_vis, parameters.flux_to_energy)
    }))
}
