//! Radiation over many cells
//!
//! Cells are independent: each gets its own snapshot and its own outputs, and
//! nothing is shared between them.

use log::error;
use vr_core::errors::VRResult;

use super::parameters::RadiationParameters;
use super::state::RadiationOutputs;
use crate::driving_data::{DrivingDataProvider, GridDrivingData};

/// Evaluate the radiation balance for every cell of a provider.
///
/// The first failing cell aborts the evaluation and its error is returned.
pub fn evaluate_provider<P: DrivingDataProvider + ?Sized>(
    parameters: &RadiationParameters,
    provider: &P,
) -> VRResult<Vec<RadiationOutputs>> {
    (0..provider.n_cells())
        .map(|cell| {
            provider
                .driving_data(cell)
                .and_then(|data| RadiationOutputs::calculate(parameters, &data))
                .inspect_err(|e| error!("Radiation failed for cell {}: {}", cell, e))
        })
        .collect()
}

/// Evaluate the radiation balance for every cell of a grid.
pub fn evaluate_grid(
    parameters: &RadiationParameters,
    grid: &GridDrivingData,
) -> VRResult<Vec<RadiationOutputs>> {
    evaluate_provider(parameters, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driving_data::{DrivingData, StaticDrivingData};
    use ndarray::{array, Array1};
    use vr_core::layers::LayeredValues;

    fn grid() -> GridDrivingData {
        GridDrivingData::new(
            array![0.0, 250.0, 1200.0],
            array![2.0e7, 1.5e7, 0.0],
            array![0.8, 0.3, 0.5],
            vec![
                LayeredValues::from_values(&[27.0, 26.0]),
                LayeredValues::padded(&[25.0], 2),
                LayeredValues::undefined(2),
            ],
            array![24.0, 22.0, 15.0],
            array![5.0e6, 2.0e6, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_grid_matches_cell_by_cell() {
        let params = RadiationParameters::default();
        let grid = grid();
        let results = evaluate_grid(&params, &grid).unwrap();
        assert_eq!(results.len(), 3);
        for (cell, result) in results.iter().enumerate() {
            let expected =
                RadiationOutputs::calculate(&params, &grid.cell(cell).unwrap()).unwrap();
            assert_eq!(result, &expected);
        }
    }

    #[test]
    fn test_grid_fails_on_invalid_cell() {
        let mut grid = grid();
        grid.sunshine_fraction[1] = -0.1;
        let err = evaluate_grid(&RadiationParameters::default(), &grid).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_grid_with_shortened_array_errors() {
        let mut grid = grid();
        grid.surface_temperature = array![24.0];
        let err = evaluate_grid(&RadiationParameters::default(), &grid).unwrap_err();
        assert!(matches!(
            err,
            vr_core::errors::VRError::ShapeMismatch { expected: 3, actual: 1, .. }
        ));
    }

    #[test]
    fn test_static_provider() {
        let data = DrivingData {
            elevation: 0.0,
            shortwave_in: 1.0e7,
            sunshine_fraction: 1.0,
            canopy_temperature: LayeredValues::from_values(&[20.0]),
            surface_temperature: 20.0,
            canopy_absorption: 0.0,
            albedo_vis: None,
            albedo_shortwave: None,
        };
        let provider = StaticDrivingData::new(data, 4);
        let results = evaluate_provider(&RadiationParameters::default(), &provider).unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_empty_provider() {
        let provider = GridDrivingData::new(
            Array1::zeros(0),
            Array1::zeros(0),
            Array1::zeros(0),
            vec![],
            Array1::zeros(0),
            Array1::zeros(0),
        )
        .unwrap();
        let results = evaluate_provider(&RadiationParameters::default(), &provider).unwrap();
        assert!(results.is_empty());
    }
}
