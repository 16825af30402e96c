//! Browser-backed text measurement.

use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use super::wrap::TextMetrics;

/// Measures text with an offscreen 2D canvas set to the label font.
pub struct CanvasTextMetrics {
	ctx: CanvasRenderingContext2d,
}

impl CanvasTextMetrics {
	/// Creates a detached canvas configured with the CSS `font`. Returns `None`
	/// outside a browser or when 2D contexts are unavailable.
	pub fn new(font: &str) -> Option<Self> {
		let document = web_sys::window()?.document()?;
		let canvas: web_sys::HtmlCanvasElement =
			document.create_element("canvas").ok()?.dyn_into().ok()?;
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		ctx.set_font(font);
		Some(Self { ctx })
	}
}

impl TextMetrics for CanvasTextMetrics {
	fn text_width(&self, text: &str) -> f64 {
		self.ctx
			.measure_text(text)
			.map(|m| m.width())
			.unwrap_or_default()
	}
}
