//! Geometry and typography defaults for the chart.
//!
//! Everything visual that is tuned rather than derived from data lives here:
//! canvas size, the strip reserved above the tiles, tile padding, label
//! typography, legend metrics and tooltip placement.

/// Label typography shared by the measurer and the wrapper.
#[derive(Clone, Debug)]
pub struct Typography {
	/// CSS font family used for tile labels.
	pub font_family: String,
	/// Font size in pixels.
	pub font_size: f64,
	/// Line advance as a multiple of `font_size`.
	pub line_height: f64,
}

impl Typography {
	/// CSS `font` shorthand, e.g. `"11.2px sans-serif"`.
	pub fn css_font(&self) -> String {
		format!("{}px {}", self.font_size, self.font_family)
	}

	/// Vertical advance between consecutive lines, in pixels.
	pub fn line_advance(&self) -> f64 {
		self.line_height * self.font_size
	}
}

impl Default for Typography {
	fn default() -> Self {
		Self {
			font_family: "sans-serif".to_string(),
			// 0.7em of the 16px browser default
			font_size: 11.2,
			line_height: 1.1,
		}
	}
}

/// Legend swatch geometry.
#[derive(Clone, Debug)]
pub struct LegendConfig {
	/// Side of the square color swatch.
	pub swatch_size: f64,
	/// Vertical distance between consecutive entries.
	pub row_height: f64,
	/// Gap between swatch and label.
	pub label_gap: f64,
	/// Width of the legend drawing.
	pub width: f64,
}

impl Default for LegendConfig {
	fn default() -> Self {
		Self {
			swatch_size: 20.0,
			row_height: 30.0,
			label_gap: 8.0,
			width: 240.0,
		}
	}
}

/// Tooltip placement relative to the pointer's page coordinates.
#[derive(Clone, Debug)]
pub struct TooltipConfig {
	/// Horizontal distance from the pointer.
	pub offset_x: f64,
	/// Vertical distance from the pointer; negative is above.
	pub offset_y: f64,
	/// Opacity while shown.
	pub opacity: f64,
	/// Duration of the fade-in.
	pub fade_in_ms: u32,
	/// Duration of the fade-out.
	pub fade_out_ms: u32,
}

impl Default for TooltipConfig {
	fn default() -> Self {
		Self {
			offset_x: 10.0,
			offset_y: -28.0,
			opacity: 0.9,
			fade_in_ms: 200,
			fade_out_ms: 500,
		}
	}
}

/// Complete chart configuration.
#[derive(Clone, Debug)]
pub struct ChartConfig {
	/// Width of the SVG drawing.
	pub width: f64,
	/// Height of the SVG drawing.
	pub height: f64,
	/// Strip at the bottom of the drawing left free of tiles.
	pub header_offset: f64,
	/// Gap between sibling tiles.
	pub padding_inner: f64,
	/// Tile label font.
	pub typography: Typography,
	/// Legend geometry.
	pub legend: LegendConfig,
	/// Tooltip placement and fades.
	pub tooltip: TooltipConfig,
}

impl ChartConfig {
	/// The `(width, height)` area handed to the treemap layout.
	pub fn tiling_area(&self) -> (f64, f64) {
		(self.width, (self.height - self.header_offset).max(0.0))
	}
}

impl Default for ChartConfig {
	fn default() -> Self {
		Self {
			width: 1100.0,
			height: 600.0,
			header_offset: 20.0,
			padding_inner: 1.0,
			typography: Typography::default(),
			legend: LegendConfig::default(),
			tooltip: TooltipConfig::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_tiling_area_reserves_header_strip() {
		assert_eq!(ChartConfig::default().tiling_area(), (1100.0, 580.0));
	}

	#[test]
	fn tiling_area_never_goes_negative() {
		let config = ChartConfig {
			height: 10.0,
			..ChartConfig::default()
		};
		assert_eq!(config.tiling_area(), (1100.0, 0.0));
	}

	#[test]
	fn typography_helpers() {
		let t = Typography::default();
		assert_eq!(t.css_font(), "11.2px sans-serif");
		assert!((t.line_advance() - 12.32).abs() < 1e-9);
	}
}
