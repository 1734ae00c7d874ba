//! Combinator DSL for building a [`MemoryEstimation`] out of data instead of
//! one hand-written struct per component.
//!
//! `fixed`/`per_node`/`per_thread`/`per_graph_dimension` build leaf nodes;
//! `add`/`max` combine a list of nodes; `and_then` and `setup` let a node's
//! shape depend on the dimensions/concurrency it's estimated against. Every
//! variant below holds only plain data and function pointers (never a
//! capturing closure), so a `MemoryEstimations` value can be built once,
//! cloned, and reused across estimation runs the way a description of memory
//! usage should be - an inert value, not a running computation.

use super::memory_estimation::MemoryEstimation;
use super::memory_range::MemoryRange;
use super::memory_tree::MemoryTree;
use crate::core::graph_dimensions::GraphDimensions;

/// A node in a memory-estimation tree, expressed as data.
#[derive(Clone)]
pub enum MemoryEstimations {
    /// A constant amount of memory, independent of dimensions or concurrency.
    Fixed(String, MemoryRange),
    /// Memory proportional to node count.
    PerNode(String, fn(u64) -> usize),
    /// Memory proportional to concurrency (thread count).
    PerThread(String, fn(usize) -> usize),
    /// Memory derived from the full dimensions and concurrency, for
    /// estimates that don't reduce to a single linear factor.
    PerGraphDimension(String, fn(&dyn GraphDimensions, usize) -> MemoryRange),
    /// Sum of component estimates.
    Add(String, Vec<MemoryEstimations>),
    /// Worst-case (component-wise maximum) of alternative estimates, for
    /// code paths where only one of several strategies is taken at runtime.
    Max(String, Vec<MemoryEstimations>),
    /// Estimates `base`, then lets `next` pick a follow-up estimation from
    /// the resulting tree - for a component whose size depends on another
    /// component's resolved estimate.
    AndThen(Box<MemoryEstimations>, fn(&MemoryTree) -> MemoryEstimations),
    /// Defers the whole node shape until dimensions/concurrency are known.
    Setup(String, fn(&dyn GraphDimensions, usize) -> MemoryEstimations),
}

impl MemoryEstimations {
    pub fn fixed(description: impl Into<String>, bytes: usize) -> Self {
        Self::Fixed(description.into(), MemoryRange::of(bytes))
    }

    pub fn fixed_range(description: impl Into<String>, range: MemoryRange) -> Self {
        Self::Fixed(description.into(), range)
    }

    pub fn per_node(description: impl Into<String>, bytes_per_node: fn(u64) -> usize) -> Self {
        Self::PerNode(description.into(), bytes_per_node)
    }

    pub fn per_thread(description: impl Into<String>, bytes_per_thread: fn(usize) -> usize) -> Self {
        Self::PerThread(description.into(), bytes_per_thread)
    }

    pub fn per_graph_dimension(
        description: impl Into<String>,
        f: fn(&dyn GraphDimensions, usize) -> MemoryRange,
    ) -> Self {
        Self::PerGraphDimension(description.into(), f)
    }

    pub fn add(description: impl Into<String>, components: Vec<MemoryEstimations>) -> Self {
        Self::Add(description.into(), components)
    }

    pub fn max(description: impl Into<String>, components: Vec<MemoryEstimations>) -> Self {
        Self::Max(description.into(), components)
    }

    pub fn and_then(base: MemoryEstimations, next: fn(&MemoryTree) -> MemoryEstimations) -> Self {
        Self::AndThen(Box::new(base), next)
    }

    pub fn setup(
        description: impl Into<String>,
        f: fn(&dyn GraphDimensions, usize) -> MemoryEstimations,
    ) -> Self {
        Self::Setup(description.into(), f)
    }

    /// Resolves this node into a concrete [`MemoryTree`] for the given
    /// dimensions and concurrency.
    pub fn resolve(&self, dimensions: &dyn GraphDimensions, concurrency: usize) -> MemoryTree {
        match self {
            Self::Fixed(description, range) => MemoryTree::leaf(description.clone(), *range),
            Self::PerNode(description, f) => {
                let per_node = f(dimensions.node_count());
                MemoryTree::leaf(description.clone(), MemoryRange::of(per_node))
            }
            Self::PerThread(description, f) => {
                let per_thread = f(concurrency);
                MemoryTree::leaf(description.clone(), MemoryRange::of(per_thread))
            }
            Self::PerGraphDimension(description, f) => {
                MemoryTree::leaf(description.clone(), f(dimensions, concurrency))
            }
            Self::Add(description, components) => {
                let trees: Vec<MemoryTree> = components
                    .iter()
                    .map(|c| c.resolve(dimensions, concurrency))
                    .collect();
                let total = trees
                    .iter()
                    .fold(MemoryRange::empty(), |acc, t| acc.add(t.memory_usage()));
                MemoryTree::new(description.clone(), total, trees)
            }
            Self::Max(description, components) => {
                let trees: Vec<MemoryTree> = components
                    .iter()
                    .map(|c| c.resolve(dimensions, concurrency))
                    .collect();
                let worst = trees.iter().skip(1).fold(
                    trees
                        .first()
                        .map(|t| *t.memory_usage())
                        .unwrap_or_else(MemoryRange::empty),
                    |acc, t| MemoryRange::maximum(&acc, t.memory_usage()),
                );
                MemoryTree::new(description.clone(), worst, trees)
            }
            Self::AndThen(base, next) => {
                let base_tree = base.resolve(dimensions, concurrency);
                let follow_up = next(&base_tree).resolve(dimensions, concurrency);
                MemoryTree::new(
                    base_tree.description().to_string(),
                    *follow_up.memory_usage(),
                    vec![base_tree, follow_up],
                )
            }
            Self::Setup(_, f) => f(dimensions, concurrency).resolve(dimensions, concurrency),
        }
    }

    fn description_str(&self) -> &str {
        match self {
            Self::Fixed(d, _)
            | Self::PerNode(d, _)
            | Self::PerThread(d, _)
            | Self::PerGraphDimension(d, _)
            | Self::Add(d, _)
            | Self::Max(d, _)
            | Self::Setup(d, _) => d,
            Self::AndThen(base, _) => base.description_str(),
        }
    }
}

impl MemoryEstimation for MemoryEstimations {
    fn description(&self) -> String {
        self.description_str().to_string()
    }

    fn estimate(&self, dimensions: &dyn GraphDimensions, concurrency: usize) -> MemoryTree {
        self.resolve(dimensions, concurrency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph_dimensions::ConcreteGraphDimensions;

    fn dims() -> ConcreteGraphDimensions {
        ConcreteGraphDimensions::of(1_000, 5_000)
    }

    #[test]
    fn fixed_ignores_dimensions_and_concurrency() {
        let node = MemoryEstimations::fixed("header", 128);
        let tree = node.resolve(&dims(), 8);
        assert_eq!(tree.memory_usage().min(), 128);
        assert_eq!(tree.memory_usage().max(), 128);
    }

    #[test]
    fn per_node_scales_with_node_count() {
        let node = MemoryEstimations::per_node("node array", |n| n as usize * 8);
        let tree = node.resolve(&dims(), 1);
        assert_eq!(tree.memory_usage().min(), 8_000);
    }

    #[test]
    fn per_thread_scales_with_concurrency() {
        let node = MemoryEstimations::per_thread("worker buffers", |c| c * 4096);
        let tree = node.resolve(&dims(), 4);
        assert_eq!(tree.memory_usage().min(), 16_384);
    }

    #[test]
    fn add_sums_component_ranges() {
        let node = MemoryEstimations::add(
            "total",
            vec![
                MemoryEstimations::fixed("a", 100),
                MemoryEstimations::fixed("b", 200),
            ],
        );
        let tree = node.resolve(&dims(), 1);
        assert_eq!(tree.memory_usage().min(), 300);
        assert_eq!(tree.components().len(), 2);
    }

    #[test]
    fn max_picks_the_worst_alternative() {
        let node = MemoryEstimations::max(
            "strategy",
            vec![
                MemoryEstimations::fixed("sparse", 100),
                MemoryEstimations::fixed("dense", 900),
            ],
        );
        let tree = node.resolve(&dims(), 1);
        assert_eq!(tree.memory_usage().min(), 900);
        assert_eq!(tree.memory_usage().max(), 900);
    }

    #[test]
    fn setup_defers_shape_until_dimensions_are_known() {
        let node = MemoryEstimations::setup("adaptive", |dimensions, _concurrency| {
            if dimensions.node_count() > 500 {
                MemoryEstimations::fixed("large", 1_000)
            } else {
                MemoryEstimations::fixed("small", 10)
            }
        });
        let tree = node.resolve(&dims(), 1);
        assert_eq!(tree.memory_usage().min(), 1_000);
    }

    #[test]
    fn and_then_chains_a_follow_up_estimation() {
        let node = MemoryEstimations::and_then(MemoryEstimations::fixed("base", 100), |base| {
            MemoryEstimations::fixed("doubled", base.memory_usage().min() * 2)
        });
        let tree = node.resolve(&dims(), 1);
        assert_eq!(tree.memory_usage().min(), 200);
        assert_eq!(tree.components().len(), 2);
    }

    #[test]
    fn implements_the_memory_estimation_trait_for_interop() {
        let node: Box<dyn MemoryEstimation> = Box::new(MemoryEstimations::fixed("leaf", 64));
        assert_eq!(node.description(), "leaf");
        assert_eq!(node.estimate(&dims(), 1).memory_usage().min(), 64);
    }
}
