//! Node-property storage: a lazy type-dispatching builder plus the dense,
//! mapped-id-indexed values it produces, and the value codecs backing
//! compressed/columnar storage.

pub mod codec;
pub mod node_property_builder;
pub mod node_property_values;

pub use codec::{DoubleCodec, NoOpDoubleCodec};
pub use node_property_builder::NodePropertyBuilder;
pub use node_property_values::{NodePropertyValues, PropertyValue};
