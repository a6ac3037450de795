//! Variable metadata shared between model modules.
//!
//! Modules exchange data through named variables. A [`VariableDefinition`]
//! carries the canonical unit and description for a name so that producers
//! and consumers agree on what a value means. The standard definitions live in
//! [`crate::standard_variables`].

use serde::Serialize;

/// Vertical structure of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VerticalStructure {
    /// A single value per cell.
    Scalar,
    /// One value per canopy layer.
    CanopyLayers,
}

impl std::fmt::Display for VerticalStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerticalStructure::Scalar => write!(f, "Scalar"),
            VerticalStructure::CanopyLayers => write!(f, "CanopyLayers"),
        }
    }
}

/// Definition of a variable with its metadata.
///
/// # Example
///
/// ```rust
/// use vr_core::variable::{VariableDefinition, VerticalStructure};
///
/// const PPFD: VariableDefinition = VariableDefinition::new(
///     "ppfd",
///     "mol m-2",
///     VerticalStructure::Scalar,
///     "Photosynthetic photon flux density at the top of the canopy",
/// );
///
/// assert_eq!(PPFD.name, "ppfd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariableDefinition {
    /// Unique identifier for the variable
    pub name: &'static str,
    /// Canonical unit for the variable
    pub unit: &'static str,
    /// Whether the variable is resolved over canopy layers
    pub structure: VerticalStructure,
    /// Human-readable description
    pub description: &'static str,
}

impl VariableDefinition {
    pub const fn new(
        name: &'static str,
        unit: &'static str,
        structure: VerticalStructure,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            unit,
            structure,
            description,
        }
    }

    pub fn is_layered(&self) -> bool {
        self.structure == VerticalStructure::CanopyLayers
    }
}

impl std::fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.unit)
    }
}
