//! Finalized, dense node-property storage produced by
//! [`super::node_property_builder::NodePropertyBuilder::build`].

use crate::types::id_map::MappedNodeId;
use crate::types::value_type::ValueType;

/// A single node-property value, tagged by the type inferred at build time.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Long(i64),
    Double(f64),
    LongArray(Vec<i64>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
}

impl PropertyValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            PropertyValue::Long(_) => ValueType::Long,
            PropertyValue::Double(_) => ValueType::Double,
            PropertyValue::LongArray(_) => ValueType::LongArray,
            PropertyValue::FloatArray(_) => ValueType::FloatArray,
            PropertyValue::DoubleArray(_) => ValueType::DoubleArray,
        }
    }
}

/// Dense, mapped-id-indexed node property storage, one variant per inferred
/// [`ValueType`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodePropertyValues {
    Long(Vec<i64>),
    Double(Vec<f64>),
    LongArray(Vec<Vec<i64>>),
    FloatArray(Vec<Vec<f32>>),
    DoubleArray(Vec<Vec<f64>>),
}

impl NodePropertyValues {
    pub fn value_type(&self) -> ValueType {
        match self {
            NodePropertyValues::Long(_) => ValueType::Long,
            NodePropertyValues::Double(_) => ValueType::Double,
            NodePropertyValues::LongArray(_) => ValueType::LongArray,
            NodePropertyValues::FloatArray(_) => ValueType::FloatArray,
            NodePropertyValues::DoubleArray(_) => ValueType::DoubleArray,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            NodePropertyValues::Long(values) => values.len(),
            NodePropertyValues::Double(values) => values.len(),
            NodePropertyValues::LongArray(values) => values.len(),
            NodePropertyValues::FloatArray(values) => values.len(),
            NodePropertyValues::DoubleArray(values) => values.len(),
        }
    }

    pub fn long_value(&self, node_id: MappedNodeId) -> Option<i64> {
        match self {
            NodePropertyValues::Long(values) => values.get(node_id as usize).copied(),
            _ => None,
        }
    }

    pub fn double_value(&self, node_id: MappedNodeId) -> Option<f64> {
        match self {
            NodePropertyValues::Double(values) => values.get(node_id as usize).copied(),
            NodePropertyValues::Long(values) => values.get(node_id as usize).map(|&v| v as f64),
            _ => None,
        }
    }
}
