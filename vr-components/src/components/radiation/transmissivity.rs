//! Atmospheric transmissivity
//!
//! Fraction of extraterrestrial shortwave radiation that reaches the top of
//! the canopy. Transmissivity rises linearly with the sunshine fraction and
//! with elevation:
//!
//! $$ \tau_0 = \tau_{cloudy} + c \cdot f_{sun} $$
//! $$ \tau = \tau_0 (1 + k_{beer} \cdot z) $$

use ndarray::{Array1, ArrayView1, Zip};
use vr_core::errors::{check_bounds, VRError, VRResult};
use vr_core::standard_variables::{VAR_ELEVATION, VAR_SUNSHINE_FRACTION};
use vr_core::FloatValue;

use super::parameters::RadiationParameters;

/// Check a sunshine fraction lies in the closed interval [0, 1].
pub fn check_sunshine_fraction(sunshine_fraction: FloatValue) -> VRResult<()> {
    check_bounds(VAR_SUNSHINE_FRACTION.name, sunshine_fraction, 0.0, 1.0)
}

/// Check an elevation is finite and keeps the elevation correction non-negative.
pub fn check_elevation(elevation: FloatValue, beer_regression: FloatValue) -> VRResult<()> {
    if !elevation.is_finite() {
        return Err(VRError::Computation {
            name: VAR_ELEVATION.name.to_string(),
            reason: format!("expected a finite elevation, got {}", elevation),
        });
    }
    let correction = 1.0 + beer_regression * elevation;
    if correction < 0.0 {
        return Err(VRError::Computation {
            name: VAR_ELEVATION.name.to_string(),
            reason: format!(
                "{} m gives a negative elevation correction ({})",
                elevation, correction
            ),
        });
    }
    Ok(())
}

/// Calculate atmospheric transmissivity.
///
/// # Arguments
///
/// * `elevation` - Elevation above sea level (m)
/// * `sunshine_fraction` - Fraction of daylight with direct sun, within [0, 1]
/// * `cloudy_transmissivity` - Transmissivity under full cloud
/// * `transmissivity_coefficient` - Gain in transmissivity per unit sunshine fraction
/// * `beer_regression` - Elevation correction (1/m)
///
/// # Errors
///
/// `OutOfBounds` if the sunshine fraction is outside [0, 1] or NaN.
/// `Computation` if the elevation is non-finite or would make the
/// transmissivity negative.
pub fn calculate_atmospheric_transmissivity(
    elevation: FloatValue,
    sunshine_fraction: FloatValue,
    cloudy_transmissivity: FloatValue,
    transmissivity_coefficient: FloatValue,
    beer_regression: FloatValue,
) -> VRResult<FloatValue> {
    check_sunshine_fraction(sunshine_fraction)?;
    check_elevation(elevation, beer_regression)?;
    Ok(transmissivity_unchecked(
        elevation,
        sunshine_fraction,
        cloudy_transmissivity,
        transmissivity_coefficient,
        beer_regression,
    ))
}

#[inline]
fn transmissivity_unchecked(
    elevation: FloatValue,
    sunshine_fraction: FloatValue,
    cloudy_transmissivity: FloatValue,
    transmissivity_coefficient: FloatValue,
    beer_regression: FloatValue,
) -> FloatValue {
    let tau_0 = cloudy_transmissivity + transmissivity_coefficient * sunshine_fraction;
    tau_0 * (1.0 + beer_regression * elevation)
}

/// Calculate transmissivity using the coefficients from a parameter set.
pub fn transmissivity_from_parameters(
    elevation: FloatValue,
    sunshine_fraction: FloatValue,
    parameters: &RadiationParameters,
) -> VRResult<FloatValue> {
    calculate_atmospheric_transmissivity(
        elevation,
        sunshine_fraction,
        parameters.cloudy_transmissivity,
        parameters.transmissivity_coefficient,
        parameters.beer_regression,
    )
}

/// Check two per-cell arrays have the same number of cells.
pub(crate) fn check_same_length(
    name: &str,
    expected: usize,
    actual: usize,
) -> VRResult<()> {
    if expected != actual {
        return Err(VRError::ShapeMismatch {
            name: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Calculate transmissivity elementwise over a set of cells.
///
/// Every sunshine fraction and elevation is checked before any value is
/// computed, so an invalid cell produces an error and no partial output.
pub fn calculate_atmospheric_transmissivity_array(
    elevation: ArrayView1<FloatValue>,
    sunshine_fraction: ArrayView1<FloatValue>,
    parameters: &RadiationParameters,
) -> VRResult<Array1<FloatValue>> {
    check_same_length(
        VAR_SUNSHINE_FRACTION.name,
        elevation.len(),
        sunshine_fraction.len(),
    )?;
    sunshine_fraction
        .iter()
        .try_for_each(|&sf| check_sunshine_fraction(sf))?;
    elevation
        .iter()
        .try_for_each(|&z| check_elevation(z, parameters.beer_regression))?;

    Ok(Zip::from(elevation)
        .and(sunshine_fraction)
        .map_collect(|&z, &sf| {
            transmissivity_unchecked(
                z,
                sf,
                parameters.cloudy_transmissivity,
                parameters.transmissivity_coefficient,
                parameters.beer_regression,
            )
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use ndarray::array;

    fn tau(elevation: FloatValue, sunshine_fraction: FloatValue) -> VRResult<FloatValue> {
        transmissivity_from_parameters(
            elevation,
            sunshine_fraction,
            &RadiationParameters::default(),
        )
    }

    #[test]
    fn test_sea_level_full_sun() {
        assert!(is_close!(tau(0.0, 1.0).unwrap(), 0.75));
    }

    #[test]
    fn test_sea_level_overcast() {
        assert!(is_close!(tau(0.0, 0.0).unwrap(), 0.25));
    }

    #[test]
    fn test_elevation_correction() {
        assert!(is_close!(tau(100.0, 1.0).unwrap(), 0.7520025));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(tau(0.0, 0.0).is_ok());
        assert!(tau(0.0, 1.0).is_ok());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        for sf in [-0.1, 1.1, FloatValue::NAN] {
            let err = tau(0.0, sf).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", sf);
        }
    }

    #[test]
    fn test_non_finite_elevation_rejected() {
        for z in [FloatValue::NAN, FloatValue::INFINITY] {
            let err = tau(z, 0.5).unwrap_err();
            assert!(
                matches!(err, VRError::Computation { ref name, .. } if name == "elevation"),
                "{} should be rejected",
                z
            );
        }
    }

    #[test]
    fn test_negative_transmissivity_rejected() {
        // 1 + 2.67e-5 * -50000 < 0
        let err = tau(-50_000.0, 0.5).unwrap_err();
        assert!(matches!(err, VRError::Computation { ref name, .. } if name == "elevation"));

        // Dead Sea shore is still fine
        assert!(tau(-430.0, 0.5).unwrap() > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = tau(523.0, 0.37).unwrap();
        let b = tau(523.0, 0.37).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_array_matches_scalar() {
        let params = RadiationParameters::default();
        let elevation = array![0.0, 100.0, 1500.0];
        let sunshine = array![1.0, 0.5, 0.0];
        let result =
            calculate_atmospheric_transmissivity_array(elevation.view(), sunshine.view(), &params)
                .unwrap();

        for i in 0..3 {
            assert_eq!(result[i], tau(elevation[i], sunshine[i]).unwrap());
        }
    }

    #[test]
    fn test_array_rejects_any_invalid_cell() {
        let params = RadiationParameters::default();
        let err = calculate_atmospheric_transmissivity_array(
            array![0.0, 0.0].view(),
            array![0.5, 1.5].view(),
            &params,
        )
        .unwrap_err();
        assert!(matches!(err, VRError::OutOfBounds { value, .. } if value == 1.5));
    }

    #[test]
    fn test_array_rejects_nan_elevation() {
        let params = RadiationParameters::default();
        let err = calculate_atmospheric_transmissivity_array(
            array![0.0, FloatValue::NAN].view(),
            array![0.5, 0.5].view(),
            &params,
        )
        .unwrap_err();
        assert!(matches!(err, VRError::Computation { ref name, .. } if name == "elevation"));
    }

    #[test]
    fn test_array_shape_mismatch() {
        let params = RadiationParameters::default();
        let err = calculate_atmospheric_transmissivity_array(
            array![0.0, 0.0].view(),
            array![0.5].view(),
            &params,
        )
        .unwrap_err();
        assert!(matches!(err, VRError::ShapeMismatch { expected: 2, actual: 1, .. }));
    }
}
