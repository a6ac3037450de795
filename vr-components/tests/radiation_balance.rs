//! End-to-end checks of the radiation balance.
//!
//! These tests exercise the public API the way the plant and soil modules
//! consume it: build a snapshot, evaluate a state, read the outputs.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::{array, Array2};
use vr_components::components::radiation::{
    calculate_atmospheric_transmissivity, calculate_longwave_radiation,
    calculate_netradiation_surface, calculate_ppfd, evaluate_grid, RadiationParameters,
    RadiationState,
};
use vr_components::components::{EnergyBalance, Radiation};
use vr_components::driving_data::{DrivingData, GridDrivingData};
use vr_core::component::Component;
use vr_core::errors::{ErrorKind, VRError};
use vr_core::layers::LayeredValues;

fn forest_cell() -> DrivingData {
    DrivingData {
        elevation: 100.0,
        shortwave_in: 30_000_000.0,
        sunshine_fraction: 1.0,
        canopy_temperature: LayeredValues::padded(&[27.0, 26.0, 25.5, 25.0], 10),
        surface_temperature: 20.0,
        canopy_absorption: 1.5e7,
        albedo_vis: None,
        albedo_shortwave: None,
    }
}

mod known_values {
    use super::*;

    #[test]
    fn test_transmissivity_at_sea_level() {
        let tau = calculate_atmospheric_transmissivity(0.0, 1.0, 0.25, 0.50, 2.67e-5).unwrap();
        assert_relative_eq!(tau, 0.75);
    }

    #[test]
    fn test_ppfd() {
        let params = RadiationParameters::default();
        let ppfd = calculate_ppfd(30_000_000.0, 100.0, 1.0, 0.03, 2.04, &params).unwrap();
        let closed_form = 1e-6 * 2.04 * (1.0 - 0.03) * (0.75 * (1.0 + 2.67e-5 * 100.0)) * 3.0e7;
        assert_abs_diff_eq!(ppfd, closed_form, epsilon = 1e-3);
    }

    #[test]
    fn test_longwave_soil() {
        let (_, soil) = calculate_longwave_radiation(
            &LayeredValues::default(),
            20.0,
            0.95,
            0.95,
            5.67e-8,
            273.15,
        )
        .unwrap();
        let closed_form = 0.95 * 5.67e-8 * (273.15_f64 + 20.0).powi(4);
        assert_abs_diff_eq!(soil, closed_form, epsilon = 1e-1);
    }
}

mod sunshine_fraction_bounds {
    use super::*;

    #[test]
    fn test_inclusive_bounds_accepted() {
        for sf in [0.0, 1.0] {
            let data = DrivingData {
                sunshine_fraction: sf,
                ..forest_cell()
            };
            assert!(RadiationState::from_driving_data(RadiationParameters::default(), &data).is_ok());
        }
    }

    #[test]
    fn test_outside_bounds_rejected() {
        for sf in [-0.1, 1.1] {
            let data = DrivingData {
                sunshine_fraction: sf,
                ..forest_cell()
            };
            let err = RadiationState::from_driving_data(RadiationParameters::default(), &data)
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert!(matches!(err, VRError::OutOfBounds { ref name, .. } if name == "sunshine_fraction"));
        }
    }
}

mod net_radiation {
    use super::*;

    #[test]
    fn test_net_loss_is_negative_not_clamped() {
        let data = DrivingData {
            shortwave_in: 1.0e3,
            canopy_absorption: 500.0,
            ..forest_cell()
        };
        let state = RadiationState::from_driving_data(RadiationParameters::default(), &data).unwrap();
        let outputs = state.outputs().unwrap();
        let losses =
            data.canopy_absorption + outputs.longwave_soil + outputs.longwave_canopy.sum_defined();
        assert!(losses > outputs.topofcanopy_radiation);
        assert!(outputs.netradiation_surface < 0.0);
    }

    #[test]
    fn test_padding_excluded_from_sum() {
        let params = RadiationParameters::default();
        let padded = LayeredValues::new(vec![Some(25.0), None, Some(24.0)]);
        let (longwave_canopy, longwave_soil) =
            calculate_longwave_radiation(&padded, 20.0, 0.95, 0.95, 5.67e-8, 273.15).unwrap();
        assert_eq!(longwave_canopy[1], None);

        let net =
            calculate_netradiation_surface(1.0e4, 0.0, &longwave_canopy, longwave_soil).unwrap();
        let expected = 1.0e4
            - longwave_soil
            - longwave_canopy.get(0).unwrap()
            - longwave_canopy.get(2).unwrap();
        assert_relative_eq!(net, expected, max_relative = 1e-12);
        assert!(params.validate().is_ok());
    }
}

#[test]
fn test_zero_shortwave_gives_zero_shortwave_outputs() {
    let data = DrivingData {
        elevation: 0.0,
        shortwave_in: 0.0,
        sunshine_fraction: 0.5,
        ..forest_cell()
    };
    let state = RadiationState::from_driving_data(RadiationParameters::default(), &data).unwrap();
    assert_eq!(state.ppfd(), Some(0.0));
    assert_eq!(state.topofcanopy_radiation(), Some(0.0));
}

#[test]
fn test_repeated_evaluation_is_bit_identical() {
    let mut state = RadiationState::new(RadiationParameters::default());
    let first = state.evaluate(&forest_cell()).unwrap().clone();
    let second = state.evaluate(&forest_cell()).unwrap();
    assert_eq!(first.ppfd.to_bits(), second.ppfd.to_bits());
    assert_eq!(
        first.netradiation_surface.to_bits(),
        second.netradiation_surface.to_bits()
    );
}

#[test]
fn test_grid_from_nan_padded_temperatures() {
    // Four layers, two cells; the second cell has a two layer canopy
    let temps = Array2::from_shape_vec(
        (4, 2),
        vec![27.0, 26.0, 26.5, 25.0, 26.0, f64::NAN, 25.5, f64::NAN],
    )
    .unwrap();
    let grid = GridDrivingData::new(
        array![100.0, 100.0],
        array![3.0e7, 3.0e7],
        array![1.0, 1.0],
        GridDrivingData::canopy_columns_from_array(&temps),
        array![20.0, 20.0],
        array![1.5e7, 1.5e7],
    )
    .unwrap();

    let results = evaluate_grid(&RadiationParameters::default(), &grid).unwrap();
    assert_eq!(results[0].longwave_canopy.n_defined(), 4);
    assert_eq!(results[1].longwave_canopy.n_defined(), 2);
    assert_eq!(results[1].longwave_canopy.len(), 4);
    // Fewer emitting layers leaves more energy at the surface
    assert!(results[1].netradiation_surface > results[0].netradiation_surface);
    assert_eq!(results[0].ppfd, results[1].ppfd);
}

#[test]
fn test_component_feeds_stub_energy_balance() {
    let radiation = Radiation::from_parameters(RadiationParameters::default()).unwrap();
    let outputs = radiation.solve(&forest_cell().to_input_state()).unwrap();

    let energy_balance = EnergyBalance::default();
    for name in energy_balance.input_names() {
        if name != "canopy_temperature" {
            assert!(outputs.contains_key(&name), "{} should be produced", name);
        }
    }
    let err = energy_balance
        .solve(&forest_cell().to_input_state())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unimplemented);
}
