//! Core infrastructure: catalog, memory estimation plumbing, and general utilities
//! that sit above the paged collection primitives.

pub mod catalog;
pub mod graph_dimensions;
pub mod loader;
pub mod utils;

pub use graph_dimensions::{ConcreteGraphDimensions, GraphDimensions};
pub use loader::{
    null_context, GraphLoaderContext, GraphStoreFactorySupplier, GraphStoreFactorySupplierProvider,
    TaskRegistryFactory, UserLogRegistryFactory,
};
