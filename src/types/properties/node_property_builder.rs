//! Lazy, type-dispatching node-property builder.
//!
//! Values are recorded keyed by *original* node id as they stream in. The
//! first non-null value fixes the property's type for the rest of the
//! builder's life; mismatched subsequent writes fail with
//! [`GdsError::TypeMismatch`]. `build` remaps everything to the dense
//! mapped-id space, filling any node that never received a value with the
//! builder's configured default (or failing with [`GdsError::MissingType`]
//! if neither a value nor a default was ever supplied).

use std::collections::HashMap;

use crate::errors::GdsError;
use crate::types::id_map::{IdMap, OriginalNodeId};
use crate::types::schema::DefaultValue;
use crate::types::value_type::ValueType;

use super::node_property_values::{NodePropertyValues, PropertyValue};

pub struct NodePropertyBuilder {
    key: String,
    values: HashMap<OriginalNodeId, PropertyValue>,
    inferred_type: Option<ValueType>,
    default_value: Option<DefaultValue>,
}

impl NodePropertyBuilder {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: HashMap::new(),
            inferred_type: None,
            default_value: None,
        }
    }

    pub fn with_default(key: impl Into<String>, default_value: DefaultValue) -> Self {
        Self {
            key: key.into(),
            values: HashMap::new(),
            inferred_type: None,
            default_value: Some(default_value),
        }
    }

    /// Records a value for `original_node_id`. The first call fixes this
    /// builder's value type; later calls of a different type fail.
    pub fn set(&mut self, original_node_id: OriginalNodeId, value: PropertyValue) -> Result<(), GdsError> {
        let value_type = value.value_type();
        match self.inferred_type {
            None => self.inferred_type = Some(value_type),
            Some(expected) if expected == value_type => {}
            Some(expected) => {
                return Err(GdsError::TypeMismatch {
                    key: self.key.clone(),
                    expected: expected.name().to_string(),
                    actual: value_type.name().to_string(),
                })
            }
        }
        self.values.insert(original_node_id, value);
        Ok(())
    }

    /// Finalizes accumulated `(original, value)` pairs into dense,
    /// mapped-id-indexed storage.
    ///
    /// Storage is sized by `id_map.root_id_map()` rather than `id_map`
    /// itself: for an ordinary id map `root_id_map()` returns `self`, but
    /// for a [`crate::types::id_map::HighLimitIdMap`] it returns the dense
    /// intermediate-id-keyed map, so storage stays proportional to
    /// `nodeCount` rather than to the original id space.
    pub fn build(self, id_map: &dyn IdMap) -> Result<NodePropertyValues, GdsError> {
        let storage_map = id_map.root_id_map();
        let node_count = storage_map.node_count();

        let value_type = match self.inferred_type {
            Some(value_type) => value_type,
            None => match &self.default_value {
                Some(default) => default_value_type(default)?,
                None => return Err(GdsError::MissingType { key: self.key.clone() }),
            },
        };

        Ok(materialize(
            value_type,
            node_count,
            &self.values,
            storage_map,
            self.default_value.as_ref(),
        ))
    }
}

fn default_value_type(default: &DefaultValue) -> Result<ValueType, GdsError> {
    match default {
        DefaultValue::Long(_) => Ok(ValueType::Long),
        DefaultValue::Double(_) => Ok(ValueType::Double),
        _ => Ok(ValueType::Double),
    }
}

fn materialize(
    value_type: ValueType,
    node_count: usize,
    values: &HashMap<OriginalNodeId, PropertyValue>,
    storage_map: &dyn IdMap,
    default: Option<&DefaultValue>,
) -> NodePropertyValues {
    let default_long = match default {
        Some(DefaultValue::Long(v)) => *v,
        _ => 0,
    };
    let default_double = match default {
        Some(DefaultValue::Double(v)) => *v,
        _ => 0.0,
    };

    match value_type {
        ValueType::Long => {
            let mut out = vec![default_long; node_count];
            for (&original, value) in values {
                if let (Some(mapped), PropertyValue::Long(v)) =
                    (storage_map.to_mapped_node_id(original), value)
                {
                    out[mapped as usize] = *v;
                }
            }
            NodePropertyValues::Long(out)
        }
        ValueType::Double => {
            let mut out = vec![default_double; node_count];
            for (&original, value) in values {
                if let (Some(mapped), PropertyValue::Double(v)) =
                    (storage_map.to_mapped_node_id(original), value)
                {
                    out[mapped as usize] = *v;
                }
            }
            NodePropertyValues::Double(out)
        }
        ValueType::LongArray => {
            let mut out = vec![Vec::new(); node_count];
            for (&original, value) in values {
                if let (Some(mapped), PropertyValue::LongArray(v)) =
                    (storage_map.to_mapped_node_id(original), value)
                {
                    out[mapped as usize] = v.clone();
                }
            }
            NodePropertyValues::LongArray(out)
        }
        ValueType::FloatArray => {
            let mut out = vec![Vec::new(); node_count];
            for (&original, value) in values {
                if let (Some(mapped), PropertyValue::FloatArray(v)) =
                    (storage_map.to_mapped_node_id(original), value)
                {
                    out[mapped as usize] = v.clone();
                }
            }
            NodePropertyValues::FloatArray(out)
        }
        ValueType::DoubleArray => {
            let mut out = vec![Vec::new(); node_count];
            for (&original, value) in values {
                if let (Some(mapped), PropertyValue::DoubleArray(v)) =
                    (storage_map.to_mapped_node_id(original), value)
                {
                    out[mapped as usize] = v.clone();
                }
            }
            NodePropertyValues::DoubleArray(out)
        }
        _ => {
            // Only Long/Double/LongArray/FloatArray/DoubleArray are ever
            // inferred by `set` or `default_value_type`.
            NodePropertyValues::Double(vec![default_double; node_count])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::Concurrency;
    use crate::types::id_map::{IdMapBuilder, LabelInformationBuilder};

    fn build_simple_id_map() -> impl IdMap {
        let builder = IdMapBuilder::new();
        let allocator = builder.allocate(3);
        let pairs = allocator.insert(&[10, 20, 30]).unwrap();
        builder.record(pairs);
        builder.build(
            LabelInformationBuilder::new(),
            Some(30),
            Concurrency::single_threaded(),
        )
    }

    #[test]
    fn infers_type_from_first_value_and_remaps_by_mapped_id() {
        let id_map = build_simple_id_map();
        let mut builder = NodePropertyBuilder::new("score");
        builder.set(10, PropertyValue::Long(100)).unwrap();
        builder.set(30, PropertyValue::Long(300)).unwrap();

        let values = builder.build(&id_map).unwrap();
        assert_eq!(values.value_type(), ValueType::Long);
        assert_eq!(values.long_value(0), Some(100));
        assert_eq!(values.long_value(1), Some(0));
        assert_eq!(values.long_value(2), Some(300));
    }

    #[test]
    fn mismatched_type_fails() {
        let mut builder = NodePropertyBuilder::new("score");
        builder.set(10, PropertyValue::Long(1)).unwrap();
        let result = builder.set(20, PropertyValue::Double(2.0));
        assert!(matches!(result, Err(GdsError::TypeMismatch { .. })));
    }

    #[test]
    fn no_values_and_no_default_fails_with_missing_type() {
        let id_map = build_simple_id_map();
        let builder = NodePropertyBuilder::new("score");
        let result = builder.build(&id_map);
        assert!(matches!(result, Err(GdsError::MissingType { .. })));
    }

    #[test]
    fn falls_back_to_default_value_when_nothing_was_ever_written() {
        let id_map = build_simple_id_map();
        let builder = NodePropertyBuilder::with_default("score", DefaultValue::Double(-1.0));
        let values = builder.build(&id_map).unwrap();
        assert_eq!(values.value_type(), ValueType::Double);
        assert_eq!(values.double_value(0), Some(-1.0));
    }
}
