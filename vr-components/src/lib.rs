//! Model components for the Virtual Rainforest
//!
//! The radiation balance is the only physical process implemented so far.
//! Other modules are registered as components that report themselves as
//! unimplemented.

pub mod components;
pub mod driving_data;
