//! Python bindings for the radiation balance.

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use vr_components::components::radiation::{
    calculate_atmospheric_transmissivity_array, calculate_ppfd_array,
    calculate_topofcanopy_radiation_array, RadiationOutputs, RadiationParameters,
};
use vr_components::driving_data::DrivingData;
use vr_core::errors::{ErrorKind, VRError};
use vr_core::layers::LayeredValues;

fn to_py_err(err: VRError) -> PyErr {
    match err.kind() {
        ErrorKind::Unimplemented => PyNotImplementedError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Builds radiation calculations from a parameter dict.
///
/// Example:
///     builder = RadiationBuilder({"albedo_vis": 0.05})
///     ppfd = builder.ppfd(shortwave_in, elevation, sunshine_fraction)
#[pyclass]
pub struct RadiationBuilder {
    parameters: RadiationParameters,
}

#[pymethods]
impl RadiationBuilder {
    #[new]
    #[pyo3(signature = (parameters=None))]
    fn new(parameters: Option<Bound<'_, PyAny>>) -> PyResult<Self> {
        let parameters = match parameters {
            Some(parameters) => pythonize::depythonize_bound::<RadiationParameters>(parameters)
                .map_err(|e| PyValueError::new_err(format!("{}", e)))?,
            None => RadiationParameters::default(),
        };
        parameters.validate().map_err(to_py_err)?;
        Ok(Self { parameters })
    }

    /// Atmospheric transmissivity per cell
    fn transmissivity<'py>(
        &self,
        py: Python<'py>,
        elevation: PyReadonlyArray1<'py, f64>,
        sunshine_fraction: PyReadonlyArray1<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let result = calculate_atmospheric_transmissivity_array(
            elevation.as_array(),
            sunshine_fraction.as_array(),
            &self.parameters,
        )
        .map_err(to_py_err)?;
        Ok(result.into_pyarray_bound(py))
    }

    /// Photosynthetic photon flux density per cell (mol m-2)
    fn ppfd<'py>(
        &self,
        py: Python<'py>,
        shortwave_in: PyReadonlyArray1<'py, f64>,
        elevation: PyReadonlyArray1<'py, f64>,
        sunshine_fraction: PyReadonlyArray1<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let result = calculate_ppfd_array(
            shortwave_in.as_array(),
            elevation.as_array(),
            sunshine_fraction.as_array(),
            &self.parameters,
        )
        .map_err(to_py_err)?;
        Ok(result.into_pyarray_bound(py))
    }

    /// Net shortwave radiation at the top of the canopy per cell (J m-2)
    fn topofcanopy_radiation<'py>(
        &self,
        py: Python<'py>,
        shortwave_in: PyReadonlyArray1<'py, f64>,
        elevation: PyReadonlyArray1<'py, f64>,
        sunshine_fraction: PyReadonlyArray1<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let result = calculate_topofcanopy_radiation_array(
            shortwave_in.as_array(),
            elevation.as_array(),
            sunshine_fraction.as_array(),
            &self.parameters,
        )
        .map_err(to_py_err)?;
        Ok(result.into_pyarray_bound(py))
    }

    /// Full radiation balance for one cell.
    ///
    /// Canopy layers above the canopy are passed and returned as None.
    #[pyo3(signature = (
        elevation,
        shortwave_in,
        sunshine_fraction,
        canopy_temperature,
        surface_temperature,
        canopy_absorption,
        albedo_vis=None,
        albedo_shortwave=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn radiation_state<'py>(
        &self,
        py: Python<'py>,
        elevation: f64,
        shortwave_in: f64,
        sunshine_fraction: f64,
        canopy_temperature: Vec<Option<f64>>,
        surface_temperature: f64,
        canopy_absorption: f64,
        albedo_vis: Option<f64>,
        albedo_shortwave: Option<f64>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let data = DrivingData {
            elevation,
            shortwave_in,
            sunshine_fraction,
            canopy_temperature: LayeredValues::new(canopy_temperature),
            surface_temperature,
            canopy_absorption,
            albedo_vis,
            albedo_shortwave,
        };
        let outputs = RadiationOutputs::calculate(&self.parameters, &data).map_err(to_py_err)?;

        let dict = PyDict::new_bound(py);
        dict.set_item("ppfd", outputs.ppfd)?;
        dict.set_item("topofcanopy_radiation", outputs.topofcanopy_radiation)?;
        dict.set_item(
            "longwave_canopy",
            Vec::<Option<f64>>::from(outputs.longwave_canopy),
        )?;
        dict.set_item("longwave_soil", outputs.longwave_soil)?;
        dict.set_item("netradiation_surface", outputs.netradiation_surface)?;
        Ok(dict)
    }
}

#[pymodule]
#[pyo3(name = "_lib")]
fn virtual_rainforest(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_class::<RadiationBuilder>()?;
    Ok(())
}
