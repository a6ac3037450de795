//! The interface between model modules.
//!
//! Each physical process is a [`Component`]. A component declares the variables
//! it reads and writes and maps an [`InputState`] snapshot to an [`OutputState`].
//! Components are serialisable through `typetag` so that a configured set of
//! modules can be stored alongside the model configuration.

use crate::errors::VRResult;
use crate::state::{InputState, OutputState};
use crate::variable::{VariableDefinition, VerticalStructure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum RequirementType {
    Input,
    Output,
}

/// A single variable read or written by a component.
#[derive(Debug, Eq, PartialEq, Clone, Hash, Serialize, Deserialize)]
pub struct RequirementDefinition {
    pub name: String,
    pub unit: String,
    pub requirement_type: RequirementType,
    /// Whether one value per canopy layer is expected
    pub layered: bool,
}

impl RequirementDefinition {
    pub fn new(name: &str, unit: &str, requirement_type: RequirementType, layered: bool) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            requirement_type,
            layered,
        }
    }

    pub fn scalar_input(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Input, false)
    }

    pub fn scalar_output(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Output, false)
    }

    pub fn layered_input(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Input, true)
    }

    pub fn layered_output(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Output, true)
    }

    /// Build a requirement from a standard variable definition.
    pub fn from_variable(variable: &VariableDefinition, requirement_type: RequirementType) -> Self {
        Self::new(
            variable.name,
            variable.unit,
            requirement_type,
            variable.structure == VerticalStructure::CanopyLayers,
        )
    }
}

/// Component of a model.
///
/// Components are pure with respect to their inputs: `solve` must not keep
/// state between calls, so that cells can be evaluated independently.
#[typetag::serde(tag = "type")]
pub trait Component: Debug + Send + Sync {
    /// Variables required and produced by the component
    fn definitions(&self) -> Vec<RequirementDefinition>;

    /// Variables that are required to solve this component
    fn inputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Input)
            .collect()
    }

    fn input_names(&self) -> Vec<String> {
        self.inputs().into_iter().map(|d| d.name).collect()
    }

    /// Variables that are solved by this component
    fn outputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Output)
            .collect()
    }

    fn output_names(&self) -> Vec<String> {
        self.outputs().into_iter().map(|d| d.name).collect()
    }

    /// Solve the component for a single snapshot of inputs
    fn solve(&self, input_state: &InputState) -> VRResult<OutputState>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_variables::{VAR_CANOPY_TEMPERATURE, VAR_PPFD};
    use crate::state::StateValue;

    #[derive(Debug, Serialize, Deserialize)]
    struct ScaleElevation {
        factor: f64,
    }

    #[typetag::serde]
    impl Component for ScaleElevation {
        fn definitions(&self) -> Vec<RequirementDefinition> {
            vec![
                RequirementDefinition::scalar_input("elevation", "m"),
                RequirementDefinition::scalar_output("scaled_elevation", "m"),
            ]
        }

        fn solve(&self, input_state: &InputState) -> VRResult<OutputState> {
            let elevation = input_state.get_scalar("elevation")?;
            Ok(OutputState::from([(
                "scaled_elevation".to_string(),
                StateValue::Scalar(self.factor * elevation),
            )]))
        }
    }

    #[test]
    fn test_requirement_from_variable() {
        let req = RequirementDefinition::from_variable(&VAR_CANOPY_TEMPERATURE, RequirementType::Input);
        assert!(req.layered);
        assert_eq!(req.unit, "degC");

        let req = RequirementDefinition::from_variable(&VAR_PPFD, RequirementType::Output);
        assert!(!req.layered);
        assert_eq!(req.requirement_type, RequirementType::Output);
    }

    #[test]
    fn test_input_and_output_names() {
        let component = ScaleElevation { factor: 2.0 };
        assert_eq!(component.input_names(), vec!["elevation".to_string()]);
        assert_eq!(component.output_names(), vec!["scaled_elevation".to_string()]);
    }

    #[test]
    fn test_solve_and_missing_input() {
        let component = ScaleElevation { factor: 2.0 };
        let output = component
            .solve(&InputState::empty().with("elevation", 10.0))
            .unwrap();
        assert_eq!(output["scaled_elevation"], StateValue::Scalar(20.0));
        assert!(component.solve(&InputState::empty()).is_err());
    }

    #[test]
    fn test_component_serialises_with_type_tag() {
        let component: Box<dyn Component> = Box::new(ScaleElevation { factor: 2.0 });
        let json = serde_json::to_string(&component).unwrap();
        assert_eq!(json, r#"{"type":"ScaleElevation","factor":2.0}"#);
        let restored: Box<dyn Component> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.output_names(), vec!["scaled_elevation".to_string()]);
    }
}
