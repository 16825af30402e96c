//! Colors for the treemap: the category palette and the per-dataset
//! category → color assignment.

use std::collections::HashMap;

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Builds a color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// `#rrggbb` form, as used for SVG `fill` attributes.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// An ordered list of colors handed out to categories.
#[derive(Clone, Debug)]
pub struct Palette {
	/// Colors in hand-out order.
	pub colors: Vec<Color>,
}

impl Palette {
	/// The classic 20-color categorical palette: ten saturated hues followed
	/// by their light variants.
	pub fn category20() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x1f, 0x77, 0xb4), // Blue
				Color::rgb(0xff, 0x7f, 0x0e), // Orange
				Color::rgb(0x2c, 0xa0, 0x2c), // Green
				Color::rgb(0xd6, 0x27, 0x28), // Red
				Color::rgb(0x94, 0x67, 0xbd), // Purple
				Color::rgb(0x8c, 0x56, 0x4b), // Brown
				Color::rgb(0xe3, 0x77, 0xc2), // Pink
				Color::rgb(0x7f, 0x7f, 0x7f), // Gray
				Color::rgb(0xbc, 0xbd, 0x22), // Olive
				Color::rgb(0x17, 0xbe, 0xcf), // Cyan
				Color::rgb(0xae, 0xc7, 0xe8), // Light blue
				Color::rgb(0xff, 0xbb, 0x78), // Light orange
				Color::rgb(0x98, 0xdf, 0x8a), // Light green
				Color::rgb(0xff, 0x98, 0x96), // Light red
				Color::rgb(0xc5, 0xb0, 0xd5), // Light purple
				Color::rgb(0xc4, 0x9c, 0x94), // Light brown
				Color::rgb(0xf7, 0xb6, 0xd2), // Light pink
				Color::rgb(0xc7, 0xc7, 0xc7), // Light gray
				Color::rgb(0xdb, 0xdb, 0x8d), // Light olive
				Color::rgb(0x9e, 0xda, 0xe5), // Light cyan
			],
		}
	}

	/// Color at `index`, wrapping around the palette.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	/// Number of distinct colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Whether the palette has no colors at all.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::category20()
	}
}

/// Category → color assignment in first-seen order.
///
/// The Nth distinct category gets `palette.get(N)`, so the mapping is fully
/// determined by the order categories are offered in.
#[derive(Clone, Debug, Default)]
pub struct CategoryColorMap {
	entries: Vec<(String, Color)>,
	index: HashMap<String, usize>,
}

impl CategoryColorMap {
	/// Assigns colors to `categories` in iteration order.
	pub fn assign<'c>(categories: impl IntoIterator<Item = &'c str>, palette: &Palette) -> Self {
		let mut map = Self::default();
		if palette.is_empty() {
			return map;
		}
		for category in categories {
			if map.index.contains_key(category) {
				continue;
			}
			let slot = map.entries.len();
			let color = palette.get(slot);
			map.index.insert(category.to_string(), slot);
			map.entries.push((category.to_string(), color));
		}
		map
	}

	/// Color assigned to `category`, if it was offered.
	pub fn get(&self, category: &str) -> Option<Color> {
		self.index.get(category).map(|&i| self.entries[i].1)
	}

	/// Categories with their colors, in assignment order.
	pub fn entries(&self) -> &[(String, Color)] {
		&self.entries
	}

	/// Number of distinct categories.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no category was assigned.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
