//! Label-information representations selected at id-map build time.
//!
//! Three variants share a read contract: `is_empty`, `has`, `labels_of`,
//! `labels_available`, `count_for`, `iterate_nodes`, `union_bit_set`,
//! `to_multi_label`. Which variant backs a given id map is chosen once, at
//! build time, from the labels actually recorded during population (see
//! [`LabelInformationBuilder::build`]).

use std::collections::{HashMap, HashSet};

use crate::collections::{HugeAtomicBitSet, HugeAtomicGrowingBitSet};
use crate::types::schema::NodeLabel;

use super::MappedNodeId;

/// Read-only contract shared by every label-information representation.
pub trait LabelInformation: Send + Sync {
    fn is_empty(&self) -> bool;
    fn has(&self, node: MappedNodeId, label: &NodeLabel) -> bool;
    fn labels_of(&self, node: MappedNodeId) -> HashSet<NodeLabel>;
    fn labels_available(&self) -> HashSet<NodeLabel>;
    fn count_for(&self, label: &NodeLabel) -> usize;
    fn iterate_nodes(&self, labels: &HashSet<NodeLabel>) -> Vec<MappedNodeId>;
    fn union_bit_set(&self, labels: &HashSet<NodeLabel>, node_count: usize) -> HugeAtomicBitSet;
}

/// Every node carries exactly the synthetic `NodeLabel::all_nodes()` label.
pub struct AllNodesLabelInformation {
    node_count: usize,
}

impl AllNodesLabelInformation {
    pub fn new(node_count: usize) -> Self {
        Self { node_count }
    }
}

impl LabelInformation for AllNodesLabelInformation {
    fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    fn has(&self, node: MappedNodeId, label: &NodeLabel) -> bool {
        (node as usize) < self.node_count && label.is_all_nodes()
    }

    fn labels_of(&self, node: MappedNodeId) -> HashSet<NodeLabel> {
        if (node as usize) < self.node_count {
            HashSet::from([NodeLabel::all_nodes()])
        } else {
            HashSet::new()
        }
    }

    fn labels_available(&self) -> HashSet<NodeLabel> {
        HashSet::from([NodeLabel::all_nodes()])
    }

    fn count_for(&self, label: &NodeLabel) -> usize {
        if label.is_all_nodes() {
            self.node_count
        } else {
            0
        }
    }

    fn iterate_nodes(&self, labels: &HashSet<NodeLabel>) -> Vec<MappedNodeId> {
        if labels.iter().any(|l| l.is_all_nodes()) || labels.is_empty() {
            (0..self.node_count as MappedNodeId).collect()
        } else {
            Vec::new()
        }
    }

    fn union_bit_set(&self, labels: &HashSet<NodeLabel>, node_count: usize) -> HugeAtomicBitSet {
        let bitset = HugeAtomicBitSet::new(node_count);
        if labels.iter().any(|l| l.is_all_nodes()) {
            bitset.set_range(0, node_count);
        }
        bitset
    }
}

/// One real label plus the implicit `ALL_NODES` label, for every node.
pub struct SingleLabelInformation {
    label: NodeLabel,
    node_count: usize,
}

impl SingleLabelInformation {
    pub fn new(label: NodeLabel, node_count: usize) -> Self {
        Self { label, node_count }
    }
}

impl LabelInformation for SingleLabelInformation {
    fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    fn has(&self, node: MappedNodeId, label: &NodeLabel) -> bool {
        (node as usize) < self.node_count && (label.is_all_nodes() || label.equals(&self.label))
    }

    fn labels_of(&self, node: MappedNodeId) -> HashSet<NodeLabel> {
        if (node as usize) < self.node_count {
            HashSet::from([self.label.clone(), NodeLabel::all_nodes()])
        } else {
            HashSet::new()
        }
    }

    fn labels_available(&self) -> HashSet<NodeLabel> {
        HashSet::from([self.label.clone(), NodeLabel::all_nodes()])
    }

    fn count_for(&self, label: &NodeLabel) -> usize {
        if label.is_all_nodes() || label.equals(&self.label) {
            self.node_count
        } else {
            0
        }
    }

    fn iterate_nodes(&self, labels: &HashSet<NodeLabel>) -> Vec<MappedNodeId> {
        let matches = labels.is_empty()
            || labels
                .iter()
                .any(|l| l.is_all_nodes() || l.equals(&self.label));
        if matches {
            (0..self.node_count as MappedNodeId).collect()
        } else {
            Vec::new()
        }
    }

    fn union_bit_set(&self, labels: &HashSet<NodeLabel>, node_count: usize) -> HugeAtomicBitSet {
        let bitset = HugeAtomicBitSet::new(node_count);
        if labels
            .iter()
            .any(|l| l.is_all_nodes() || l.equals(&self.label))
        {
            bitset.set_range(0, node_count);
        }
        bitset
    }
}

/// Backed by `{label -> bitset}`; labels may overlap arbitrarily.
pub struct MultiLabelInformation {
    by_label: HashMap<NodeLabel, HugeAtomicBitSet>,
    node_count: usize,
}

impl MultiLabelInformation {
    pub fn new(by_label: HashMap<NodeLabel, HugeAtomicBitSet>, node_count: usize) -> Self {
        Self {
            by_label,
            node_count,
        }
    }
}

impl LabelInformation for MultiLabelInformation {
    fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    fn has(&self, node: MappedNodeId, label: &NodeLabel) -> bool {
        self.by_label
            .get(label)
            .map(|bitset| bitset.get(node as usize))
            .unwrap_or(false)
    }

    fn labels_of(&self, node: MappedNodeId) -> HashSet<NodeLabel> {
        self.by_label
            .iter()
            .filter(|(_, bitset)| bitset.get(node as usize))
            .map(|(label, _)| label.clone())
            .collect()
    }

    fn labels_available(&self) -> HashSet<NodeLabel> {
        self.by_label.keys().cloned().collect()
    }

    fn count_for(&self, label: &NodeLabel) -> usize {
        self.by_label
            .get(label)
            .map(|bitset| bitset.cardinality())
            .unwrap_or(0)
    }

    fn iterate_nodes(&self, labels: &HashSet<NodeLabel>) -> Vec<MappedNodeId> {
        let union = self.union_bit_set(labels, self.node_count);
        let mut nodes = Vec::new();
        union.for_each_set_bit(|node| nodes.push(node as MappedNodeId));
        nodes
    }

    fn union_bit_set(&self, labels: &HashSet<NodeLabel>, node_count: usize) -> HugeAtomicBitSet {
        let result = HugeAtomicBitSet::new(node_count);
        let wanted: Vec<&NodeLabel> = if labels.is_empty() {
            self.by_label.keys().collect()
        } else {
            labels.iter().collect()
        };
        for label in wanted {
            if let Some(bitset) = self.by_label.get(label) {
                bitset.for_each_set_bit(|node| result.set(node));
            }
        }
        result
    }
}

impl MultiLabelInformation {
    /// Intersection of the given labels' bitsets; empty if any label is unknown.
    pub fn intersection(&self, labels: &HashSet<NodeLabel>, node_count: usize) -> HugeAtomicBitSet {
        let result = HugeAtomicBitSet::new(node_count);
        if labels.is_empty() {
            return result;
        }
        let bitsets: Option<Vec<&HugeAtomicBitSet>> =
            labels.iter().map(|label| self.by_label.get(label)).collect();
        let Some(bitsets) = bitsets else {
            return result;
        };
        for node in 0..node_count {
            if bitsets.iter().all(|bitset| bitset.get(node)) {
                result.set(node);
            }
        }
        result
    }
}

/// Accumulates `(label, node)` pairs during id-map construction, then picks
/// the most specific representation once the final node count is known.
///
/// Selection rule: zero real labels and no star labels -> `AllNodes`. One
/// real label and no stars -> `SingleLabel`. Otherwise -> `MultiLabel`, with
/// any star labels saturated to every node.
#[derive(Default)]
pub struct LabelInformationBuilder {
    growing: HashMap<NodeLabel, HugeAtomicGrowingBitSet>,
    star_labels: HashSet<NodeLabel>,
}

impl LabelInformationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a label known to the mapping without assigning it yet.
    pub fn add_label(&mut self, label: NodeLabel) {
        self.growing
            .entry(label)
            .or_insert_with(|| HugeAtomicGrowingBitSet::create(0));
    }

    /// Declares `label` as a "star" label: every node carries it, regardless
    /// of whether it was ever explicitly assigned.
    pub fn add_star_label(&mut self, label: NodeLabel) {
        self.star_labels.insert(label.clone());
        self.add_label(label);
    }

    pub fn add_node_id_to_label(&mut self, node: MappedNodeId, label: NodeLabel) {
        self.growing
            .entry(label)
            .or_insert_with(|| HugeAtomicGrowingBitSet::create(0))
            .set(node as usize);
    }

    pub fn build(self, node_count: usize) -> Box<dyn LabelInformation> {
        let real_labels: Vec<&NodeLabel> = self
            .growing
            .keys()
            .filter(|label| !self.star_labels.contains(label))
            .collect();

        if real_labels.is_empty() && self.star_labels.is_empty() {
            return Box::new(AllNodesLabelInformation::new(node_count));
        }

        if real_labels.len() == 1 && self.star_labels.is_empty() {
            return Box::new(SingleLabelInformation::new(
                real_labels[0].clone(),
                node_count,
            ));
        }

        let mut by_label = HashMap::new();
        for (label, growing) in self.growing {
            let fixed = HugeAtomicBitSet::new(node_count);
            if self.star_labels.contains(&label) {
                fixed.set_range(0, node_count);
            } else {
                for node in 0..node_count {
                    if growing.get(node) {
                        fixed.set(node);
                    }
                }
            }
            by_label.insert(label, fixed);
        }
        Box::new(MultiLabelInformation::new(by_label, node_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_labels_selects_all_nodes() {
        let builder = LabelInformationBuilder::new();
        let info = builder.build(5);
        assert!(info.has(0, &NodeLabel::all_nodes()));
        assert_eq!(info.count_for(&NodeLabel::all_nodes()), 5);
    }

    #[test]
    fn single_real_label_selects_single_label_representation() {
        let mut builder = LabelInformationBuilder::new();
        let person = NodeLabel::new("Person");
        builder.add_node_id_to_label(0, person.clone());
        builder.add_node_id_to_label(1, person.clone());
        let info = builder.build(3);

        assert!(info.has(0, &person));
        assert!(info.has(1, &person));
        assert!(!info.has(2, &person));
        assert!(info.has(0, &NodeLabel::all_nodes()));
        assert_eq!(info.count_for(&person), 3);
    }

    #[test]
    fn two_real_labels_select_multi_label_representation() {
        let mut builder = LabelInformationBuilder::new();
        let person = NodeLabel::new("Person");
        let company = NodeLabel::new("Company");
        builder.add_node_id_to_label(0, person.clone());
        builder.add_node_id_to_label(1, company.clone());
        let info = builder.build(2);

        assert!(info.has(0, &person));
        assert!(!info.has(0, &company));
        assert!(info.has(1, &company));
        assert_eq!(info.count_for(&person), 1);
        assert_eq!(info.count_for(&company), 1);

        let union = info.union_bit_set(&HashSet::from([person, company]), 2);
        assert!(union.get(0));
        assert!(union.get(1));
    }

    #[test]
    fn star_label_is_saturated_to_every_node() {
        let mut builder = LabelInformationBuilder::new();
        builder.add_node_id_to_label(0, NodeLabel::new("Person"));
        builder.add_star_label(NodeLabel::new("Entity"));
        let info = builder.build(4);

        let entity = NodeLabel::new("Entity");
        for node in 0..4 {
            assert!(info.has(node, &entity));
        }
    }

    #[test]
    fn multi_label_iterate_nodes_with_no_filter_returns_union_of_all() {
        let mut builder = LabelInformationBuilder::new();
        let person = NodeLabel::new("Person");
        let company = NodeLabel::new("Company");
        builder.add_node_id_to_label(0, person);
        builder.add_node_id_to_label(1, company);
        let info = builder.build(2);

        let mut nodes = info.iterate_nodes(&HashSet::new());
        nodes.sort_unstable();
        assert_eq!(nodes, vec![0, 1]);
    }
}
