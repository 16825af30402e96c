//! Browser-independent render model of one dataset.
//!
//! [`Scene::build`] runs the whole pipeline: value summing and sorting,
//! squarified tiling, category colors, and label wrapping. The component only
//! turns the result into SVG.

use log::debug;

use super::config::ChartConfig;
use super::hierarchy::HierarchyNode;
use super::layout::{LayoutRect, Treemap};
use super::theme::{CategoryColorMap, Color, Palette};
use super::types::Node;
use super::wrap::{PlacedLine, TextMetrics, WrappedLabel, wrap_label};

/// Fallback fill for a category the color map does not know.
const UNCOLORED: Color = Color::rgb(0xcc, 0xcc, 0xcc);

/// One leaf, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
	/// Leaf name.
	pub name: String,
	/// Leaf category, empty when the dataset has none.
	pub category: String,
	/// Leaf value as used for the area.
	pub value: f64,
	/// Tile bounds in drawing coordinates.
	pub rect: LayoutRect,
	/// Fill of the tile's category.
	pub color: Color,
	/// Wrapped name.
	pub label: WrappedLabel,
	/// `label` positioned inside `rect`.
	pub lines: Vec<PlacedLine>,
}

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	/// Category label.
	pub category: String,
	/// Swatch fill.
	pub color: Color,
}

/// Tiles and legend of a rendered dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// SVG width.
	pub width: f64,
	/// SVG height.
	pub height: f64,
	/// One tile per leaf, in layout order.
	pub tiles: Vec<Tile>,
	/// Categories in first-seen order.
	pub legend: Vec<LegendEntry>,
}

impl Scene {
	/// Lays out `root` and assembles tiles and legend.
	///
	/// A root without children produces an empty scene.
	pub fn build(
		root: &Node,
		config: &ChartConfig,
		palette: &Palette,
		metrics: &dyn TextMetrics,
	) -> Self {
		let mut scene = Scene {
			width: config.width,
			height: config.height,
			..Scene::default()
		};
		if root.is_leaf() {
			return scene;
		}

		let mut hierarchy = HierarchyNode::build(root);
		let (width, height) = config.tiling_area();
		Treemap::new(width, height)
			.padding_inner(config.padding_inner)
			.layout(&mut hierarchy);

		let leaves = hierarchy.leaves();
		let colors = CategoryColorMap::assign(
			leaves.iter().map(|leaf| leaf.data.category_or_default()),
			palette,
		);

		scene.tiles = leaves
			.iter()
			.map(|leaf| {
				let category = leaf.data.category_or_default();
				let rect = leaf.rect;
				let label = wrap_label(
					&leaf.data.name,
					rect.width(),
					rect.height(),
					metrics,
					&config.typography,
				);
				let lines = label.place(&rect, &config.typography);
				Tile {
					name: leaf.data.name.clone(),
					category: category.to_string(),
					value: leaf.value,
					rect,
					color: colors.get(category).unwrap_or(UNCOLORED),
					label,
					lines,
				}
			})
			.collect();

		scene.legend = colors
			.entries()
			.iter()
			.map(|(category, color)| LegendEntry {
				category: category.clone(),
				color: *color,
			})
			.collect();

		debug!(
			"treemap-chart: scene with {} tiles, {} categories",
			scene.tiles.len(),
			scene.legend.len()
		);
		scene
	}

	/// Whether the scene has no tiles.
	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}

	/// Category → color mapping as used by the tiles, in legend order.
	pub fn category_colors(&self) -> Vec<(&str, Color)> {
		self.legend
			.iter()
			.map(|e| (e.category.as_str(), e.color))
			.collect()
	}
}
