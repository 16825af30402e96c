//! Value-summed view of a dataset tree.
//!
//! Every node's value is its own leaf value or the sum over its descendants,
//! and siblings are ordered by descending value. Ties keep dataset order.

use std::cmp::Ordering;

use super::layout::LayoutRect;
use super::types::Node;

/// A dataset node annotated with its aggregated value and layout bounds.
#[derive(Clone, Debug)]
pub struct HierarchyNode<'a> {
	/// The dataset node this entry wraps.
	pub data: &'a Node,
	/// Own leaf value, or the sum over all descendant leaves.
	pub value: f64,
	/// Distance from the root (root = 0).
	pub depth: usize,
	/// Bounds assigned by [`Treemap::layout`](super::layout::Treemap::layout).
	pub rect: LayoutRect,
	/// Children sorted by descending value.
	pub children: Vec<HierarchyNode<'a>>,
}

impl<'a> HierarchyNode<'a> {
	/// Builds the summed and sorted hierarchy rooted at `root`.
	pub fn build(root: &'a Node) -> Self {
		Self::build_at(root, 0)
	}

	fn build_at(node: &'a Node, depth: usize) -> Self {
		let mut children: Vec<HierarchyNode<'a>> = node
			.children
			.iter()
			.map(|child| Self::build_at(child, depth + 1))
			.collect();

		let value = if children.is_empty() {
			node.leaf_value()
		} else {
			children.iter().map(|c| c.value).sum()
		};

		// `sort_by` is stable, so equal values keep dataset order.
		children.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

		Self {
			data: node,
			value,
			depth,
			rect: LayoutRect::default(),
			children,
		}
	}

	/// Whether this entry has no children.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Leaves in pre-order, i.e. following the sorted sibling order.
	pub fn leaves(&self) -> Vec<&HierarchyNode<'a>> {
		let mut out = Vec::new();
		self.collect_leaves(&mut out);
		out
	}

	fn collect_leaves<'s>(&'s self, out: &mut Vec<&'s HierarchyNode<'a>>) {
		if self.is_leaf() {
			out.push(self);
		} else {
			for child in &self.children {
				child.collect_leaves(out);
			}
		}
	}
}
