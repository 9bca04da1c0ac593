//! Uniform node wrapper over the nested personality tree.
//!
//! The analysis service returns a tree of traits where every level is a JSON
//! object (`id`, `name`, `category`, `percentage`, `children`, ...). An
//! [`InsightNode`] wraps one such level so the whole hierarchy can be queried
//! through the same interface.
//!
//! Normalization happens in two strengths:
//!
//! - [`InsightNode::from_value`] wraps one level and leaves nested containers
//!   as [`FieldValue::Raw`].
//! - [`collect_all`] walks the node and replaces every nested container, at
//!   any depth, with a [`FieldValue::Node`] or [`FieldValue::Sequence`].

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A single value stored under a node key.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A string, number, bool or null.
    Scalar(Value),
    /// A nested object or array that has not been normalized yet.
    Raw(Value),
    /// A normalized nested mapping.
    Node(InsightNode),
    /// A normalized nested array. Array-like items are `Node`, the rest `Scalar`.
    Sequence(Vec<FieldValue>),
}

impl FieldValue {
    /// Wrap a raw value without descending into it.
    #[must_use]
    pub fn from_raw(value: Value) -> Self {
        if is_array_like(&value) {
            Self::Raw(value)
        } else {
            Self::Scalar(value)
        }
    }

    /// Fully normalize a raw value: containers become nodes at every depth.
    #[must_use]
    pub fn normalize(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::normalize).collect())
            }
            Value::Object(_) => {
                Self::Node(collect_all(InsightNode::from_value(value).unwrap_or_default()))
            }
            scalar => Self::Scalar(scalar),
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&InsightNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Value::as_f64)
    }

    /// `true` for `Raw`, `Node` and `Sequence`.
    #[must_use]
    pub fn is_array_like(&self) -> bool {
        !matches!(self, Self::Scalar(_))
    }

    /// Render back to plain JSON.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Scalar(v) | Self::Raw(v) => v.clone(),
            Self::Node(n) => n.to_value(),
            Self::Sequence(items) => Value::Array(items.iter().map(Self::to_value).collect()),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(v) | Self::Raw(v) => v.serialize(serializer),
            Self::Node(n) => n.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// One level of the personality tree.
///
/// Fields keep the order of the source document, so iteration is
/// left-to-right in the same order the service emitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightNode {
    fields: Vec<(String, FieldValue)>,
}

impl InsightNode {
    /// Wrap one level of raw data (`transform_to_node`).
    ///
    /// Objects become nodes keyed by field name, arrays become nodes keyed
    /// by position (`"0"`, `"1"`, ...). Scalars are not array-like and
    /// yield `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        let fields = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from_raw(v)))
                .collect(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), FieldValue::from_raw(v)))
                .collect(),
            _ => return None,
        };
        Some(Self { fields })
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a new node by applying `f` to every value (`transform`).
    #[must_use]
    pub fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(FieldValue) -> FieldValue,
    {
        Self {
            fields: self.fields.into_iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }

    /// Child nodes under `children`, in order.
    ///
    /// Empty when `children` is missing, a scalar, or still raw data that has
    /// not gone through [`collect_all`].
    pub fn children(&self) -> impl Iterator<Item = &InsightNode> {
        let items: Box<dyn Iterator<Item = &FieldValue> + '_> = match self.get("children") {
            Some(FieldValue::Node(container)) => Box::new(container.values()),
            Some(FieldValue::Sequence(items)) => Box::new(items.iter()),
            _ => Box::new(std::iter::empty()),
        };
        items.filter_map(FieldValue::as_node)
    }

    /// Raw `id` value, if it is a scalar.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.get("id").and_then(FieldValue::as_scalar)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(FieldValue::as_str)
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.get("category").and_then(FieldValue::as_str)
    }

    /// Raw percentile in `[0.0, 1.0]`.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        self.get("percentage").and_then(FieldValue::as_f64)
    }

    #[must_use]
    pub fn sampling_error(&self) -> Option<f64> {
        self.get("sampling_error").and_then(FieldValue::as_f64)
    }

    /// `percentage` as a value out of 100, rounded to `precision` decimals.
    ///
    /// `precision` is capped at 15 decimals.
    #[must_use]
    pub fn calculate_percentage(&self, precision: u32) -> Option<f64> {
        self.percentage().map(|p| to_percent(p, precision))
    }

    /// `sampling_error` as a value out of 100, rounded to `precision` decimals.
    #[must_use]
    pub fn calculate_error_percentage(&self, precision: u32) -> Option<f64> {
        self.sampling_error().map(|p| to_percent(p, precision))
    }

    /// Render back to plain JSON.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

impl Serialize for InsightNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Deep-normalize a node (`collectAll`).
///
/// Every raw container below `node` is replaced by a `Node` (objects) or a
/// `Sequence` (arrays), transitively. Already-normalized values are visited
/// again, so applying this twice yields the same structure.
#[must_use]
pub fn collect_all(node: InsightNode) -> InsightNode {
    node.map_values(collect_value)
}

fn collect_value(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Scalar(_) => value,
        FieldValue::Raw(raw) => FieldValue::normalize(raw),
        FieldValue::Node(child) => FieldValue::Node(collect_all(child)),
        FieldValue::Sequence(items) => {
            FieldValue::Sequence(items.into_iter().map(collect_value).collect())
        }
    }
}

/// Objects and arrays are array-like; everything else is a scalar.
#[must_use]
pub fn is_array_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Decimal places beyond this are past `f64` precision for percent values.
const MAX_PERCENT_PRECISION: u32 = 15;

fn to_percent(fraction: f64, precision: u32) -> f64 {
    let precision = precision.min(MAX_PERCENT_PRECISION);
    let factor = 10_f64.powi(i32::try_from(precision).unwrap_or(15));
    (fraction * 100.0 * factor).round() / factor
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
