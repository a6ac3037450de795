pub mod component;
pub mod config;
pub mod layers;
pub mod standard_variables;
pub mod state;
pub mod variable;

pub mod errors;

/// Floating point type used for all physical quantities.
pub type FloatValue = f64;
