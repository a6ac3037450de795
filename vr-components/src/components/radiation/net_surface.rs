//! Net radiation at the forest floor
//!
//! $$ R_{net} = R_{toc} - A_{canopy} - L_{soil} - \sum_i L_{canopy,i} $$
//!
//! The sum runs over defined canopy layers only. A negative result means the
//! surface is losing energy and is returned as is.

use log::debug;
use vr_core::errors::{check_non_negative, VRResult};
use vr_core::layers::LayeredValues;
use vr_core::standard_variables::{VAR_CANOPY_ABSORPTION, VAR_TOPOFCANOPY_RADIATION};
use vr_core::FloatValue;

/// Calculate net radiation (J m-2) reaching the forest floor.
///
/// # Arguments
///
/// * `topofcanopy_radiation` - Net shortwave radiation at the top of the canopy
/// * `canopy_absorption` - Radiation absorbed by the canopy
/// * `longwave_canopy` - Longwave emission per canopy layer
/// * `longwave_soil` - Longwave emission from the soil
pub fn calculate_netradiation_surface(
    topofcanopy_radiation: FloatValue,
    canopy_absorption: FloatValue,
    longwave_canopy: &LayeredValues,
    longwave_soil: FloatValue,
) -> VRResult<FloatValue> {
    check_non_negative(VAR_TOPOFCANOPY_RADIATION.name, topofcanopy_radiation)?;
    check_non_negative(VAR_CANOPY_ABSORPTION.name, canopy_absorption)?;

    let net = topofcanopy_radiation
        - canopy_absorption
        - longwave_soil
        - longwave_canopy.sum_defined();

    if net < 0.0 {
        debug!("Net surface radiation is negative ({:.3} J m-2)", net);
    }
    Ok(net)
}
