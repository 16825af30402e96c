//! Greedy word wrapping of tile labels.
//!
//! Text width comes from a [`TextMetrics`] implementation, so wrapping works
//! the same against a browser canvas and against fixed-width test metrics.

use super::config::Typography;
use super::layout::LayoutRect;

/// Literal shown instead of a label that does not fit its tile.
pub const ELLIPSIS: &str = "...";

/// Measures rendered text width in pixels.
pub trait TextMetrics {
	/// Rendered width of `text` in pixels.
	fn text_width(&self, text: &str) -> f64;
}

/// Approximates every glyph with the same advance.
///
/// Used when no rendering surface is available, and in tests.
#[derive(Clone, Copy, Debug)]
pub struct AverageCharMetrics {
	/// Advance of every glyph, in pixels.
	pub char_width: f64,
}

impl AverageCharMetrics {
	/// Typical average advance of a proportional sans-serif font.
	pub fn for_font_size(font_size: f64) -> Self {
		Self {
			char_width: font_size * 0.6,
		}
	}
}

impl TextMetrics for AverageCharMetrics {
	fn text_width(&self, text: &str) -> f64 {
		text.chars().count() as f64 * self.char_width
	}
}

/// Outcome of fitting a label into a tile.
#[derive(Clone, Debug, PartialEq)]
pub enum WrappedLabel {
	/// Lines in top-to-bottom order, each no wider than the tile.
	Lines(Vec<String>),
	/// The label does not fit; render [`ELLIPSIS`] instead.
	Ellipsis,
}

/// A label line positioned in drawing coordinates.
///
/// `x`/`y` anchor the whole label at the tile center; `dy` is the line's own
/// downward offset from that anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
	/// Line text.
	pub text: String,
	/// Horizontal anchor.
	pub x: f64,
	/// Vertical anchor.
	pub y: f64,
	/// Offset below the anchor.
	pub dy: f64,
}

impl WrappedLabel {
	/// Text as it will be drawn, one entry per line.
	pub fn lines(&self) -> Vec<&str> {
		match self {
			WrappedLabel::Lines(lines) => lines.iter().map(String::as_str).collect(),
			WrappedLabel::Ellipsis => vec![ELLIPSIS],
		}
	}

	/// Anchors lines at the center of `rect`, the first line on the vertical
	/// center and each following line one line advance lower.
	pub fn place(&self, rect: &LayoutRect, typography: &Typography) -> Vec<PlacedLine> {
		let (x, y) = rect.center();
		let advance = typography.line_advance();
		self.lines()
			.into_iter()
			.enumerate()
			.map(|(i, text)| PlacedLine {
				text: text.to_string(),
				x,
				y,
				dy: i as f64 * advance,
			})
			.collect()
	}
}

/// Breaks `label` on whitespace so that no line is wider than `width`.
///
/// Words are appended to the current line until the next one would overflow,
/// which then starts a new line. If the lines would need more than `height`
/// (`lines × line_height × font_size`), or a single word is wider than the
/// tile, the whole label becomes [`WrappedLabel::Ellipsis`].
pub fn wrap_label(
	label: &str,
	width: f64,
	height: f64,
	metrics: &dyn TextMetrics,
	typography: &Typography,
) -> WrappedLabel {
	let advance = typography.line_advance();
	let mut lines: Vec<String> = Vec::new();
	let mut current = String::new();

	for word in label.split_whitespace() {
		if metrics.text_width(word) > width {
			return WrappedLabel::Ellipsis;
		}
		if current.is_empty() {
			if advance > height {
				return WrappedLabel::Ellipsis;
			}
			current.push_str(word);
			continue;
		}

		let candidate = format!("{current} {word}");
		if metrics.text_width(&candidate) > width {
			// Starting another line: stop as soon as the block outgrows the tile.
			if (lines.len() + 2) as f64 * advance > height {
				return WrappedLabel::Ellipsis;
			}
			lines.push(std::mem::replace(&mut current, word.to_string()));
		} else {
			current = candidate;
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	WrappedLabel::Lines(lines)
}
