//! Squarified treemap tiling.
//!
//! Children are packed into rows that keep their aspect ratio as close as
//! possible to the golden ratio (Bruls, Huizing & van Wijk). Each row takes a
//! strip of the remaining area proportional to its summed value, oriented
//! along the shorter side.
//!
//! Inner padding `p` grows each parent's content box by `p / 2` and shrinks
//! every child by `p / 2`, so siblings end up `p` apart while the outermost
//! children stay flush with their parent's edges.

use super::hierarchy::HierarchyNode;

/// Target aspect ratio for squarified rows.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Pixel bounds of a laid-out node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutRect {
	/// Left edge.
	pub x0: f64,
	/// Top edge.
	pub y0: f64,
	/// Right edge.
	pub x1: f64,
	/// Bottom edge.
	pub y1: f64,
}

impl LayoutRect {
	/// Rectangle spanning `(x0, y0)` to `(x1, y1)`.
	pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
		Self { x0, y0, x1, y1 }
	}

	/// Horizontal extent.
	pub fn width(&self) -> f64 {
		self.x1 - self.x0
	}

	/// Vertical extent.
	pub fn height(&self) -> f64 {
		self.y1 - self.y0
	}

	/// Width times height.
	pub fn area(&self) -> f64 {
		self.width() * self.height()
	}

	/// Midpoint as `(x, y)`.
	pub fn center(&self) -> (f64, f64) {
		((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
	}

	/// Moves every edge inward by `amount` (outward when negative), collapsing
	/// to the midline if the edges would cross.
	fn inset(self, amount: f64) -> Self {
		let (mut x0, mut y0, mut x1, mut y1) = (
			self.x0 + amount,
			self.y0 + amount,
			self.x1 - amount,
			self.y1 - amount,
		);
		if x1 < x0 {
			x0 = (x0 + x1) / 2.0;
			x1 = x0;
		}
		if y1 < y0 {
			y0 = (y0 + y1) / 2.0;
			y1 = y0;
		}
		Self { x0, y0, x1, y1 }
	}
}

/// Treemap layout parameters.
#[derive(Clone, Debug)]
pub struct Treemap {
	/// Width of the root rectangle.
	pub width: f64,
	/// Height of the root rectangle.
	pub height: f64,
	/// Gap in pixels between adjacent siblings.
	pub padding_inner: f64,
	/// Target row aspect ratio.
	pub ratio: f64,
}

impl Treemap {
	/// Unpadded golden-ratio layout of a `width × height` area.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			padding_inner: 0.0,
			ratio: GOLDEN_RATIO,
		}
	}

	/// Sets the sibling gap; negative values clamp to zero.
	pub fn padding_inner(mut self, padding: f64) -> Self {
		self.padding_inner = padding.max(0.0);
		self
	}

	/// Assigns `rect` on every node of the hierarchy. The root covers the
	/// whole `width × height` area.
	pub fn layout(&self, root: &mut HierarchyNode<'_>) {
		root.rect = LayoutRect::new(0.0, 0.0, self.width, self.height);
		self.position(root, 0.0);
	}

	fn position(&self, node: &mut HierarchyNode<'_>, padding: f64) {
		node.rect = node.rect.inset(padding);
		if node.children.is_empty() {
			return;
		}

		let child_padding = self.padding_inner / 2.0;
		let content = node.rect.inset(-child_padding);
		squarify(self.ratio, node.value, &mut node.children, content);

		for child in &mut node.children {
			self.position(child, child_padding);
		}
	}
}

fn squarify(ratio: f64, total: f64, nodes: &mut [HierarchyNode<'_>], area: LayoutRect) {
	let LayoutRect {
		mut x0,
		mut y0,
		x1,
		y1,
	} = area;
	let n = nodes.len();
	let mut value = total;
	let (mut i0, mut i1) = (0, 0);

	while i0 < n {
		if value <= 0.0 {
			// Nothing left to distribute: park the remaining nodes at the corner.
			for node in &mut nodes[i0..] {
				node.rect = LayoutRect::new(x0, y0, x0, y0);
			}
			return;
		}

		let (dx, dy) = (x1 - x0, y1 - y0);

		// Seed the row with the next non-empty node.
		let mut sum_value;
		loop {
			sum_value = nodes[i1].value;
			i1 += 1;
			if sum_value != 0.0 || i1 >= n {
				break;
			}
		}
		let (mut min_value, mut max_value) = (sum_value, sum_value);
		let alpha = (dy / dx).max(dx / dy) / (value * ratio);
		let mut beta = sum_value * sum_value * alpha;
		let mut min_ratio = (max_value / beta).max(beta / min_value);

		// Grow the row while its worst aspect ratio does not degrade.
		while i1 < n {
			let node_value = nodes[i1].value;
			sum_value += node_value;
			min_value = min_value.min(node_value);
			max_value = max_value.max(node_value);
			beta = sum_value * sum_value * alpha;
			let new_ratio = (max_value / beta).max(beta / min_value);
			if new_ratio > min_ratio {
				sum_value -= node_value;
				break;
			}
			min_ratio = new_ratio;
			i1 += 1;
		}

		let row = &mut nodes[i0..i1];
		if dx < dy {
			let row_y1 = if dy != 0.0 { y0 + dy * sum_value / value } else { y1 };
			dice(row, sum_value, LayoutRect::new(x0, y0, x1, row_y1));
			y0 = row_y1;
		} else {
			let row_x1 = if dx != 0.0 { x0 + dx * sum_value / value } else { x1 };
			slice(row, sum_value, LayoutRect::new(x0, y0, row_x1, y1));
			x0 = row_x1;
		}
		value -= sum_value;
		i0 = i1;
	}
}

/// Splits `area` left to right.
fn dice(nodes: &mut [HierarchyNode<'_>], total: f64, area: LayoutRect) {
	let k = if total > 0.0 { area.width() / total } else { 0.0 };
	let mut x = area.x0;
	for node in nodes {
		let x1 = x + node.value * k;
		node.rect = LayoutRect::new(x, area.y0, x1, area.y1);
		x = x1;
	}
}

/// Splits `area` top to bottom.
fn slice(nodes: &mut [HierarchyNode<'_>], total: f64, area: LayoutRect) {
	let k = if total > 0.0 { area.height() / total } else { 0.0 };
	let mut y = area.y0;
	for node in nodes {
		let y1 = y + node.value * k;
		node.rect = LayoutRect::new(area.x0, y, area.x1, y1);
		y = y1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::treemap::types::Node;

	const EPS: f64 = 1e-9;

	fn rects(root: &HierarchyNode<'_>) -> Vec<(String, LayoutRect)> {
		root.leaves()
			.into_iter()
			.map(|n| (n.data.name.clone(), n.rect))
			.collect()
	}

	fn overlap(a: &LayoutRect, b: &LayoutRect) -> f64 {
		let w = (a.x1.min(b.x1) - a.x0.max(b.x0)).max(0.0);
		let h = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
		w * h
	}

	fn sample() -> Node {
		Node::branch(
			"root",
			vec![
				Node::branch(
					"g1",
					vec![
						Node::leaf("a", "A", 40.0),
						Node::leaf("b", "A", 25.0),
						Node::leaf("c", "A", 10.0),
					],
				),
				Node::branch(
					"g2",
					vec![
						Node::leaf("d", "B", 30.0),
						Node::leaf("e", "B", 12.0),
						Node::leaf("f", "B", 3.0),
					],
				),
				Node::leaf("g", "C", 20.0),
			],
		)
	}

	#[test]
	fn root_covers_canvas() {
		let data = sample();
		let mut root = HierarchyNode::build(&data);
		Treemap::new(1100.0, 580.0).padding_inner(1.0).layout(&mut root);
		assert_eq!(root.rect, LayoutRect::new(0.0, 0.0, 1100.0, 580.0));
	}

	#[test]
	fn unpadded_areas_are_proportional_to_values() {
		let data = sample();
		let mut root = HierarchyNode::build(&data);
		Treemap::new(800.0, 500.0).layout(&mut root);

		let canvas = 800.0 * 500.0;
		let mut covered = 0.0;
		for leaf in root.leaves() {
			let expected = canvas * leaf.value / root.value;
			assert!(
				(leaf.rect.area() - expected).abs() < 1e-6,
				"{}: area {} expected {}",
				leaf.data.name,
				leaf.rect.area(),
				expected
			);
			covered += leaf.rect.area();
		}
		assert!((covered - canvas).abs() < 1e-6);
	}

	#[test]
	fn padded_leaves_stay_inside_and_do_not_overlap() {
		let data = sample();
		let mut root = HierarchyNode::build(&data);
		Treemap::new(1100.0, 580.0).padding_inner(1.0).layout(&mut root);

		let leaves = rects(&root);
		for (name, r) in &leaves {
			assert!(r.x0 >= -EPS && r.y0 >= -EPS, "{name} leaks out top-left");
			assert!(r.x1 <= 1100.0 + EPS && r.y1 <= 580.0 + EPS, "{name} leaks out bottom-right");
			assert!(r.width() >= 0.0 && r.height() >= 0.0);
		}
		for (i, (na, a)) in leaves.iter().enumerate() {
			for (nb, b) in &leaves[i + 1..] {
				assert!(overlap(a, b) < EPS, "{na} overlaps {nb}");
			}
		}
	}

	#[test]
	fn padded_areas_stay_roughly_proportional() {
		let data = sample();
		let mut root = HierarchyNode::build(&data);
		Treemap::new(1100.0, 580.0).padding_inner(1.0).layout(&mut root);

		let leaves = root.leaves();
		let a = leaves.iter().find(|n| n.data.name == "a").unwrap();
		let d = leaves.iter().find(|n| n.data.name == "d").unwrap();
		let ratio = a.rect.area() / d.rect.area();
		assert!((ratio - 40.0 / 30.0).abs() < 0.05, "ratio {ratio}");
	}

	#[test]
	fn siblings_are_separated_by_inner_padding() {
		let data = Node::branch(
			"root",
			vec![Node::leaf("left", "X", 1.0), Node::leaf("right", "X", 1.0)],
		);
		let mut root = HierarchyNode::build(&data);
		Treemap::new(100.0, 50.0).padding_inner(2.0).layout(&mut root);

		let leaves = rects(&root);
		assert_eq!(leaves[0].1, LayoutRect::new(0.0, 0.0, 49.0, 50.0));
		assert_eq!(leaves[1].1, LayoutRect::new(51.0, 0.0, 100.0, 50.0));
	}

	#[test]
	fn tall_area_stacks_rows_vertically() {
		let data = Node::branch(
			"root",
			vec![Node::leaf("top", "X", 1.0), Node::leaf("bottom", "X", 1.0)],
		);
		let mut root = HierarchyNode::build(&data);
		Treemap::new(50.0, 100.0).layout(&mut root);

		let leaves = rects(&root);
		assert_eq!(leaves[0].1, LayoutRect::new(0.0, 0.0, 50.0, 50.0));
		assert_eq!(leaves[1].1, LayoutRect::new(0.0, 50.0, 50.0, 100.0));
	}

	#[test]
	fn zero_values_collapse_without_nan() {
		let data = Node::branch(
			"root",
			vec![
				Node::leaf("some", "X", 5.0),
				Node::leaf("zero-1", "X", 0.0),
				Node::leaf("zero-2", "X", 0.0),
			],
		);
		let mut root = HierarchyNode::build(&data);
		Treemap::new(200.0, 100.0).padding_inner(1.0).layout(&mut root);

		for (name, r) in rects(&root) {
			assert!(
				[r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()),
				"{name} has non-finite bounds"
			);
		}
		let leaves = root.leaves();
		assert!(leaves[1].rect.area().abs() < EPS);
		assert!(leaves[2].rect.area().abs() < EPS);
	}

	#[test]
	fn all_zero_tree_yields_degenerate_rects() {
		let data = Node::branch(
			"root",
			vec![Node::leaf("a", "X", 0.0), Node::leaf("b", "X", 0.0)],
		);
		let mut root = HierarchyNode::build(&data);
		Treemap::new(200.0, 100.0).layout(&mut root);
		for (_, r) in rects(&root) {
			assert_eq!(r.area(), 0.0);
			assert!(r.x0.is_finite() && r.y0.is_finite());
		}
	}
}
