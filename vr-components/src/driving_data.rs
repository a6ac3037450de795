//! Forcing data consumed by the radiation balance.
//!
//! The radiation calculations never read files or grids themselves. Whatever
//! owns the spatial and temporal indexing implements [`DrivingDataProvider`]
//! and hands out one [`DrivingData`] snapshot per cell.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use vr_core::errors::{VRError, VRResult};
use vr_core::layers::LayeredValues;
use vr_core::standard_variables::{
    VAR_CANOPY_ABSORPTION, VAR_CANOPY_TEMPERATURE, VAR_ELEVATION, VAR_SHORTWAVE_IN,
    VAR_SUNSHINE_FRACTION, VAR_SURFACE_TEMPERATURE,
};
use vr_core::state::InputState;
use vr_core::FloatValue;

/// Input names for the optional per-evaluation albedo overrides.
pub const ALBEDO_VIS_OVERRIDE: &str = "albedo_vis";
pub const ALBEDO_SHORTWAVE_OVERRIDE: &str = "albedo_shortwave";

/// A read-only snapshot of forcing data for one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivingData {
    /// Elevation above sea level (m)
    pub elevation: FloatValue,
    /// Daily downward shortwave radiation (J m-2)
    pub shortwave_in: FloatValue,
    /// Fraction of daylight with direct sun
    pub sunshine_fraction: FloatValue,
    /// Temperature per canopy layer (degC), undefined above the canopy
    pub canopy_temperature: LayeredValues,
    /// Soil surface temperature (degC)
    pub surface_temperature: FloatValue,
    /// Radiation absorbed by the canopy (J m-2)
    pub canopy_absorption: FloatValue,
    /// Overrides the visible albedo parameter when set
    #[serde(default)]
    pub albedo_vis: Option<FloatValue>,
    /// Overrides the shortwave albedo parameter when set
    #[serde(default)]
    pub albedo_shortwave: Option<FloatValue>,
}

impl DrivingData {
    /// Read a snapshot from a component input state.
    pub fn from_input_state(input_state: &InputState) -> VRResult<Self> {
        Ok(Self {
            elevation: input_state.get_scalar(VAR_ELEVATION.name)?,
            shortwave_in: input_state.get_scalar(VAR_SHORTWAVE_IN.name)?,
            sunshine_fraction: input_state.get_scalar(VAR_SUNSHINE_FRACTION.name)?,
            canopy_temperature: input_state.get_layered(VAR_CANOPY_TEMPERATURE.name)?,
            surface_temperature: input_state.get_scalar(VAR_SURFACE_TEMPERATURE.name)?,
            canopy_absorption: input_state.get_scalar(VAR_CANOPY_ABSORPTION.name)?,
            albedo_vis: input_state.get_optional_scalar(ALBEDO_VIS_OVERRIDE)?,
            albedo_shortwave: input_state.get_optional_scalar(ALBEDO_SHORTWAVE_OVERRIDE)?,
        })
    }

    /// Write the snapshot into a component input state.
    pub fn to_input_state(&self) -> InputState {
        let mut state = InputState::empty()
            .with(VAR_ELEVATION.name, self.elevation)
            .with(VAR_SHORTWAVE_IN.name, self.shortwave_in)
            .with(VAR_SUNSHINE_FRACTION.name, self.sunshine_fraction)
            .with(VAR_CANOPY_TEMPERATURE.name, self.canopy_temperature.clone())
            .with(VAR_SURFACE_TEMPERATURE.name, self.surface_temperature)
            .with(VAR_CANOPY_ABSORPTION.name, self.canopy_absorption);
        if let Some(albedo) = self.albedo_vis {
            state.insert(ALBEDO_VIS_OVERRIDE, albedo);
        }
        if let Some(albedo) = self.albedo_shortwave {
            state.insert(ALBEDO_SHORTWAVE_OVERRIDE, albedo);
        }
        state
    }
}

/// Source of per-cell forcing data.
pub trait DrivingDataProvider {
    /// Number of cells the provider covers
    fn n_cells(&self) -> usize;

    /// Snapshot for a single cell
    fn driving_data(&self, cell: usize) -> VRResult<DrivingData>;
}

fn check_cell(cell: usize, n_cells: usize) -> VRResult<()> {
    if cell >= n_cells {
        return Err(VRError::Error(format!(
            "Cell index {} out of range for {} cells",
            cell, n_cells
        )));
    }
    Ok(())
}

fn shape_mismatch(name: &str, expected: usize, actual: usize) -> VRError {
    VRError::ShapeMismatch {
        name: name.to_string(),
        expected,
        actual,
    }
}

/// The same snapshot repeated over a number of cells.
#[derive(Debug, Clone)]
pub struct StaticDrivingData {
    data: DrivingData,
    n_cells: usize,
}

impl StaticDrivingData {
    pub fn new(data: DrivingData, n_cells: usize) -> Self {
        Self { data, n_cells }
    }
}

impl DrivingDataProvider for StaticDrivingData {
    fn n_cells(&self) -> usize {
        self.n_cells
    }

    fn driving_data(&self, cell: usize) -> VRResult<DrivingData> {
        check_cell(cell, self.n_cells)?;
        Ok(self.data.clone())
    }
}

/// Forcing data for a set of cells, one array entry per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDrivingData {
    pub elevation: Array1<FloatValue>,
    pub shortwave_in: Array1<FloatValue>,
    pub sunshine_fraction: Array1<FloatValue>,
    /// One canopy column per cell
    pub canopy_temperature: Vec<LayeredValues>,
    pub surface_temperature: Array1<FloatValue>,
    pub canopy_absorption: Array1<FloatValue>,
    /// Applied to every cell when set
    pub albedo_vis: Option<FloatValue>,
    /// Applied to every cell when set
    pub albedo_shortwave: Option<FloatValue>,
}

impl GridDrivingData {
    /// Create grid forcing data, checking every field covers the same cells.
    pub fn new(
        elevation: Array1<FloatValue>,
        shortwave_in: Array1<FloatValue>,
        sunshine_fraction: Array1<FloatValue>,
        canopy_temperature: Vec<LayeredValues>,
        surface_temperature: Array1<FloatValue>,
        canopy_absorption: Array1<FloatValue>,
    ) -> VRResult<Self> {
        let n_cells = elevation.len();
        for (name, len) in [
            (VAR_SHORTWAVE_IN.name, shortwave_in.len()),
            (VAR_SUNSHINE_FRACTION.name, sunshine_fraction.len()),
            (VAR_CANOPY_TEMPERATURE.name, canopy_temperature.len()),
            (VAR_SURFACE_TEMPERATURE.name, surface_temperature.len()),
            (VAR_CANOPY_ABSORPTION.name, canopy_absorption.len()),
        ] {
            if len != n_cells {
                return Err(shape_mismatch(name, n_cells, len));
            }
        }

        Ok(Self {
            elevation,
            shortwave_in,
            sunshine_fraction,
            canopy_temperature,
            surface_temperature,
            canopy_absorption,
            albedo_vis: None,
            albedo_shortwave: None,
        })
    }

    /// Convert a `(layers, cells)` temperature array with NaN padding into canopy columns.
    pub fn canopy_columns_from_array(canopy_temperature: &Array2<FloatValue>) -> Vec<LayeredValues> {
        canopy_temperature
            .axis_iter(Axis(1))
            .map(|column| column.iter().map(|t| (!t.is_nan()).then_some(*t)).collect())
            .collect()
    }

    pub fn with_albedo_overrides(
        mut self,
        albedo_vis: Option<FloatValue>,
        albedo_shortwave: Option<FloatValue>,
    ) -> Self {
        self.albedo_vis = albedo_vis;
        self.albedo_shortwave = albedo_shortwave;
        self
    }

    /// Snapshot for a single cell.
    ///
    /// The fields are public, so every array is re-checked here in case one
    /// was replaced after construction.
    pub fn cell(&self, cell: usize) -> VRResult<DrivingData> {
        let n_cells = self.elevation.len();
        check_cell(cell, n_cells)?;

        let value_at = |name: &str, values: &Array1<FloatValue>| {
            values
                .get(cell)
                .copied()
                .ok_or_else(|| shape_mismatch(name, n_cells, values.len()))
        };
        let canopy_temperature = self
            .canopy_temperature
            .get(cell)
            .cloned()
            .ok_or_else(|| {
                shape_mismatch(
                    VAR_CANOPY_TEMPERATURE.name,
                    n_cells,
                    self.canopy_temperature.len(),
                )
            })?;

        Ok(DrivingData {
            elevation: self.elevation[cell],
            shortwave_in: value_at(VAR_SHORTWAVE_IN.name, &self.shortwave_in)?,
            sunshine_fraction: value_at(VAR_SUNSHINE_FRACTION.name, &self.sunshine_fraction)?,
            canopy_temperature,
            surface_temperature: value_at(VAR_SURFACE_TEMPERATURE.name, &self.surface_temperature)?,
            canopy_absorption: value_at(VAR_CANOPY_ABSORPTION.name, &self.canopy_absorption)?,
            albedo_vis: self.albedo_vis,
            albedo_shortwave: self.albedo_shortwave,
        })
    }
}

impl DrivingDataProvider for GridDrivingData {
    fn n_cells(&self) -> usize {
        self.elevation.len()
    }

    fn driving_data(&self, cell: usize) -> VRResult<DrivingData> {
        self.cell(cell)
    }
}
