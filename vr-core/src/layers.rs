//! Per-layer values for vertically resolved canopy quantities.
//!
//! The canopy is discretised into a fixed number of layers, but the actual
//! canopy height varies between cells. Layers above the canopy are padding and
//! carry no value. [`LayeredValues`] marks those entries explicitly with `None`
//! so that they can never be mistaken for a numeric zero when summing.

use crate::errors::VRResult;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// A column of per-layer values where undefined layers are `None`.
///
/// Layer 0 is the top of the canopy.
///
/// # Examples
///
/// ```rust
/// use vr_core::layers::LayeredValues;
///
/// // Three defined layers in a five layer column
/// let temps = LayeredValues::padded(&[25.0, 24.0, 23.0], 5);
/// assert_eq!(temps.len(), 5);
/// assert_eq!(temps.n_defined(), 3);
/// assert_eq!(temps.get(4), None);
/// assert_eq!(temps.sum_defined(), 72.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayeredValues(Vec<Option<FloatValue>>);

impl LayeredValues {
    pub fn new(values: Vec<Option<FloatValue>>) -> Self {
        Self(values)
    }

    /// Create a column where every layer is defined.
    pub fn from_values(values: &[FloatValue]) -> Self {
        Self(values.iter().copied().map(Some).collect())
    }

    /// Create a column of `n_layers` where only the first `values.len()` layers are defined.
    ///
    /// If more values than layers are supplied the column is extended to hold them all.
    pub fn padded(values: &[FloatValue], n_layers: usize) -> Self {
        let mut column: Vec<Option<FloatValue>> = values.iter().copied().map(Some).collect();
        if column.len() < n_layers {
            column.resize(n_layers, None);
        }
        Self(column)
    }

    /// Create a column where NaN entries mark undefined layers.
    ///
    /// Gridded forcing data usually pads missing layers with NaN.
    pub fn from_nan_padded(values: &[FloatValue]) -> Self {
        Self(
            values
                .iter()
                .map(|v| if v.is_nan() { None } else { Some(*v) })
                .collect(),
        )
    }

    /// A column with `n_layers` undefined entries.
    pub fn undefined(n_layers: usize) -> Self {
        Self(vec![None; n_layers])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a layer's value, `None` if the layer is undefined or out of range.
    pub fn get(&self, layer: usize) -> Option<FloatValue> {
        self.0.get(layer).copied().flatten()
    }

    /// Number of layers holding a value.
    pub fn n_defined(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    /// Sum over the defined layers only.
    pub fn sum_defined(&self) -> FloatValue {
        self.0.iter().flatten().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Option<FloatValue>> {
        self.0.iter()
    }

    /// Iterate over the defined layers as `(layer index, value)` pairs.
    pub fn iter_defined(&self) -> impl Iterator<Item = (usize, FloatValue)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
    }

    /// Apply `f` to each defined layer, leaving undefined layers undefined.
    pub fn map_defined<F>(&self, f: F) -> Self
    where
        F: Fn(FloatValue) -> FloatValue,
    {
        Self(self.0.iter().map(|v| v.map(&f)).collect())
    }

    /// Fallible version of [`LayeredValues::map_defined`].
    ///
    /// Stops at the first error.
    pub fn try_map_defined<F>(&self, f: F) -> VRResult<Self>
    where
        F: Fn(FloatValue) -> VRResult<FloatValue>,
    {
        let values = self
            .0
            .iter()
            .map(|v| v.map(&f).transpose())
            .collect::<VRResult<Vec<_>>>()?;
        Ok(Self(values))
    }

    /// Convert to a plain vector with NaN in the undefined layers.
    pub fn to_nan_padded(&self) -> Vec<FloatValue> {
        self.0
            .iter()
            .map(|v| v.unwrap_or(FloatValue::NAN))
            .collect()
    }

    pub fn as_slice(&self) -> &[Option<FloatValue>] {
        &self.0
    }
}

impl From<Vec<Option<FloatValue>>> for LayeredValues {
    fn from(values: Vec<Option<FloatValue>>) -> Self {
        Self(values)
    }
}

impl From<LayeredValues> for Vec<Option<FloatValue>> {
    fn from(values: LayeredValues) -> Self {
        values.0
    }
}

impl FromIterator<Option<FloatValue>> for LayeredValues {
    fn from_iter<I: IntoIterator<Item = Option<FloatValue>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for LayeredValues {
    type Output = Option<FloatValue>;

    fn index(&self, layer: usize) -> &Self::Output {
        &self.0[layer]
    }
}
