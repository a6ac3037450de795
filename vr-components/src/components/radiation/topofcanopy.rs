//! Net shortwave radiation at the top of the canopy
//!
//! $$ R_{toc} = (1 - \alpha_{sw}) \cdot \tau \cdot S_{in} $$

use ndarray::{Array1, ArrayView1, Zip};
use vr_core::errors::{check_bounds, check_non_negative, VRResult};
use vr_core::standard_variables::VAR_SHORTWAVE_IN;
use vr_core::FloatValue;

use super::parameters::RadiationParameters;
use super::transmissivity::{
    calculate_atmospheric_transmissivity_array, check_same_length, transmissivity_from_parameters,
};

/// Calculate net shortwave radiation (J m-2) at the top of the canopy.
///
/// `parameters` supplies the transmissivity coefficients; the albedo is passed
/// separately so that per-cell overrides can be applied.
pub fn calculate_topofcanopy_radiation(
    shortwave_in: FloatValue,
    elevation: FloatValue,
    sunshine_fraction: FloatValue,
    albedo_shortwave: FloatValue,
    parameters: &RadiationParameters,
) -> VRResult<FloatValue> {
    check_non_negative(VAR_SHORTWAVE_IN.name, shortwave_in)?;
    check_bounds("albedo_shortwave", albedo_shortwave, 0.0, 1.0)?;
    let tau = transmissivity_from_parameters(elevation, sunshine_fraction, parameters)?;
    Ok((1.0 - albedo_shortwave) * tau * shortwave_in)
}

/// Calculate top of canopy radiation elementwise using the parameter albedo.
pub fn calculate_topofcanopy_radiation_array(
    shortwave_in: ArrayView1<FloatValue>,
    elevation: ArrayView1<FloatValue>,
    sunshine_fraction: ArrayView1<FloatValue>,
    parameters: &RadiationParameters,
) -> VRResult<Array1<FloatValue>> {
    check_same_length(VAR_SHORTWAVE_IN.name, elevation.len(), shortwave_in.len())?;
    shortwave_in
        .iter()
        .try_for_each(|&sw| check_non_negative(VAR_SHORTWAVE_IN.name, sw))?;
    check_bounds("albedo_shortwave", parameters.albedo_shortwave, 0.0, 1.0)?;
    let tau = calculate_atmospheric_transmissivity_array(elevation, sunshine_fraction, parameters)?;

    let albedo = parameters.albedo_shortwave;
    Ok(Zip::from(shortwave_in)
        .and(&tau)
        .map_collect(|&sw, &t| (1.0 - albedo) * t * sw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_known_value() {
        let params = RadiationParameters::default();
        let result =
            calculate_topofcanopy_radiation(1.0e7, 0.0, 1.0, params.albedo_shortwave, &params)
                .unwrap();
        assert_relative_eq!(result, 0.83 * 0.75 * 1.0e7, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_shortwave() {
        let params = RadiationParameters::default();
        let result =
            calculate_topofcanopy_radiation(0.0, 0.0, 0.5, params.albedo_shortwave, &params)
                .unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_full_albedo_reflects_everything() {
        let params = RadiationParameters::default();
        let result = calculate_topofcanopy_radiation(2.0e7, 300.0, 0.6, 1.0, &params).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_array_matches_scalar() {
        let params = RadiationParameters::default();
        let shortwave = array![1.0e7, 2.5e7];
        let elevation = array![10.0, 900.0];
        let sunshine = array![0.0, 0.8];
        let result = calculate_topofcanopy_radiation_array(
            shortwave.view(),
            elevation.view(),
            sunshine.view(),
            &params,
        )
        .unwrap();

        for i in 0..2 {
            let expected = calculate_topofcanopy_radiation(
                shortwave[i],
                elevation[i],
                sunshine[i],
                params.albedo_shortwave,
                &params,
            )
            .unwrap();
            assert_relative_eq!(result[i], expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_array_rejects_negative_shortwave() {
        let params = RadiationParameters::default();
        let err = calculate_topofcanopy_radiation_array(
            array![1.0, -1.0].view(),
            array![0.0, 0.0].view(),
            array![0.5, 0.5].view(),
            &params,
        )
        .unwrap_err();
        assert!(!err.is_validation());
    }
}
