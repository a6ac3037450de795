use crate::errors::{VRError, VRResult};
use crate::layers::LayeredValues;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a value that can be either a single value or resolved over canopy layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateValue {
    /// A single value for the cell
    Scalar(FloatValue),
    /// One value per canopy layer, undefined above the canopy
    Layered(LayeredValues),
}

impl StateValue {
    /// Check if this is a scalar value
    pub fn is_scalar(&self) -> bool {
        matches!(self, StateValue::Scalar(_))
    }

    /// Check if this is a layered value
    pub fn is_layered(&self) -> bool {
        matches!(self, StateValue::Layered(_))
    }

    /// Get the scalar value if this is a Scalar variant
    pub fn as_scalar(&self) -> Option<FloatValue> {
        match self {
            StateValue::Scalar(v) => Some(*v),
            StateValue::Layered(_) => None,
        }
    }

    /// Get the layer values if this is a Layered variant
    pub fn as_layered(&self) -> Option<&LayeredValues> {
        match self {
            StateValue::Scalar(_) => None,
            StateValue::Layered(values) => Some(values),
        }
    }
}

impl From<FloatValue> for StateValue {
    fn from(value: FloatValue) -> Self {
        StateValue::Scalar(value)
    }
}

impl From<LayeredValues> for StateValue {
    fn from(values: LayeredValues) -> Self {
        StateValue::Layered(values)
    }
}

/// Input state for a component
///
/// A snapshot of named values for a single cell at a single evaluation.
/// Components read from it but never modify it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    state: HashMap<String, StateValue>,
}

impl InputState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn build(values: impl IntoIterator<Item = (String, StateValue)>) -> Self {
        Self {
            state: values.into_iter().collect(),
        }
    }

    /// Builder method to add a value.
    pub fn with(mut self, name: &str, value: impl Into<StateValue>) -> Self {
        self.state.insert(name.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<StateValue>) {
        self.state.insert(name.to_string(), value.into());
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&StateValue> {
        self.state.get(name)
    }

    /// Get a scalar value
    ///
    /// Returns `MissingInput` if the variable is absent and `ShapeMismatch`
    /// if it holds layered data.
    pub fn get_scalar(&self, name: &str) -> VRResult<FloatValue> {
        match self.get(name) {
            Some(StateValue::Scalar(v)) => Ok(*v),
            Some(StateValue::Layered(values)) => Err(VRError::ShapeMismatch {
                name: name.to_string(),
                expected: 1,
                actual: values.len(),
            }),
            None => Err(VRError::MissingInput(name.to_string())),
        }
    }

    /// Get a scalar value if present
    ///
    /// Layered data under this name is still an error.
    pub fn get_optional_scalar(&self, name: &str) -> VRResult<Option<FloatValue>> {
        if self.has(name) {
            self.get_scalar(name).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get a layered value
    ///
    /// A scalar is accepted as a single layer column.
    pub fn get_layered(&self, name: &str) -> VRResult<LayeredValues> {
        match self.get(name) {
            Some(StateValue::Layered(values)) => Ok(values.clone()),
            Some(StateValue::Scalar(v)) => Ok(LayeredValues::from_values(&[*v])),
            None => Err(VRError::MissingInput(name.to_string())),
        }
    }

    /// Test if the state contains a value with the given name
    pub fn has(&self, name: &str) -> bool {
        self.state.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StateValue)> {
        self.state.iter()
    }
}

/// Output state from a component
pub type OutputState = HashMap<String, StateValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_value_scalar() {
        let sv = StateValue::Scalar(42.0);
        assert!(sv.is_scalar());
        assert!(!sv.is_layered());
        assert_eq!(sv.as_scalar(), Some(42.0));
        assert_eq!(sv.as_layered(), None);
    }

    #[test]
    fn test_state_value_layered() {
        let sv = StateValue::from(LayeredValues::new(vec![Some(1.0), None]));
        assert!(sv.is_layered());
        assert_eq!(sv.as_scalar(), None);
        assert_eq!(sv.as_layered().map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_input_state_get_scalar() {
        let state = InputState::empty().with("elevation", 120.0);
        assert_eq!(state.get_scalar("elevation"), Ok(120.0));
        assert_eq!(
            state.get_scalar("shortwave_in"),
            Err(VRError::MissingInput("shortwave_in".to_string()))
        );
    }

    #[test]
    fn test_input_state_scalar_from_layered_is_error() {
        let state = InputState::empty().with(
            "canopy_temperature",
            LayeredValues::from_values(&[20.0, 19.0]),
        );
        let err = state.get_scalar("canopy_temperature").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_input_state_scalar_as_single_layer() {
        let state = InputState::empty().with("canopy_temperature", 21.0);
        let column = state.get_layered("canopy_temperature").unwrap();
        assert_eq!(column.as_slice(), &[Some(21.0)]);
    }

    #[test]
    fn test_optional_scalar() {
        let state = InputState::empty().with("albedo_vis", 0.1);
        assert_eq!(state.get_optional_scalar("albedo_vis"), Ok(Some(0.1)));
        assert_eq!(state.get_optional_scalar("albedo_shortwave"), Ok(None));
    }
}
