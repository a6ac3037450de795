//! Virtual Rainforest radiation balance
//!
//! Re-exports the core types and the model components. Python bindings are
//! available with the `python` feature.

pub use vr_components::components;
pub use vr_components::driving_data;
pub use vr_core::{component, config, errors, layers, standard_variables, state, variable};

#[cfg(feature = "python")]
mod python;
