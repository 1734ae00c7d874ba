//! The catalog-facing graph store: a built [`huge_graph::HugeGraph`] paired
//! with its database identity so it can be registered as a
//! [`crate::core::catalog::GraphStoreHandle`].

pub mod csr_graph_store;

pub use csr_graph_store::CsrGraphStore;
