//! Chart lifecycle and hover state.
//!
//! [`ChartState`] is owned by each chart instance. Every render attempt takes
//! a [`RenderTicket`] from [`ChartState::begin`]; only the ticket of the most
//! recent attempt may publish its result, so a slow response for a dataset
//! the user already switched away from is dropped instead of overwriting the
//! newer chart.

use log::debug;

use super::config::TooltipConfig;
use super::loader::LoadError;
use super::scene::{Scene, Tile};

/// What the chart area currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChartStatus {
	/// Nothing requested yet.
	#[default]
	Idle,
	/// A dataset is being fetched; the previous chart is already cleared.
	Loading {
		/// Dataset being fetched.
		url: String,
	},
	/// A dataset was laid out successfully.
	Ready {
		/// Dataset on display.
		url: String,
		/// Its laid-out scene.
		scene: Scene,
	},
	/// The last request failed; the message is shown to the user.
	Failed {
		/// Dataset that failed.
		url: String,
		/// Human-readable reason.
		message: String,
	},
}

/// Proof of which render attempt a result belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderTicket {
	generation: u64,
	url: String,
}

impl RenderTicket {
	/// Dataset this attempt renders.
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Sequence number of the attempt.
	pub fn generation(&self) -> u64 {
		self.generation
	}
}

/// Per-instance chart state.
#[derive(Clone, Debug, Default)]
pub struct ChartState {
	generation: u64,
	status: ChartStatus,
}

impl ChartState {
	/// Idle state with no render issued.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a render of `url`: clears the current chart and supersedes every
	/// earlier ticket.
	pub fn begin(&mut self, url: &str) -> RenderTicket {
		self.generation += 1;
		self.status = ChartStatus::Loading {
			url: url.to_string(),
		};
		RenderTicket {
			generation: self.generation,
			url: url.to_string(),
		}
	}

	/// Whether `ticket` belongs to the latest render attempt.
	pub fn is_current(&self, ticket: &RenderTicket) -> bool {
		ticket.generation == self.generation
	}

	/// Publishes the outcome of the render `ticket` was issued for. Returns
	/// `false`, leaving the state untouched, when a newer render has started.
	pub fn complete(&mut self, ticket: RenderTicket, result: Result<Scene, LoadError>) -> bool {
		if !self.is_current(&ticket) {
			debug!(
				"treemap-chart: discarding stale render #{} of {}",
				ticket.generation, ticket.url
			);
			return false;
		}
		let RenderTicket { url, .. } = ticket;
		self.status = match result {
			Ok(scene) => ChartStatus::Ready { url, scene },
			Err(e) => ChartStatus::Failed {
				url,
				message: e.to_string(),
			},
		};
		true
	}

	/// What the chart area shows now.
	pub fn status(&self) -> &ChartStatus {
		&self.status
	}

	/// Number of renders started so far.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// The scene on display, if any.
	pub fn scene(&self) -> Option<&Scene> {
		match &self.status {
			ChartStatus::Ready { scene, .. } => Some(scene),
			_ => None,
		}
	}
}

/// What the tooltip says about a tile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
	/// Leaf name.
	pub name: String,
	/// Leaf category.
	pub category: String,
	/// Leaf value.
	pub value: f64,
}

impl TooltipContent {
	/// Describes `tile`.
	pub fn from_tile(tile: &Tile) -> Self {
		Self {
			name: tile.name.clone(),
			category: tile.category.clone(),
			value: tile.value,
		}
	}

	/// Name, category and value rows, in display order.
	pub fn lines(&self) -> [String; 3] {
		[
			format!("Name: {}", self.name),
			format!("Category: {}", self.category),
			format!("Value: {}", self.value),
		]
	}
}

/// Floating tooltip: visible while the pointer is over a tile.
///
/// Hiding keeps the last content and position so the panel can fade out in
/// place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
	/// Whether the pointer is over a tile.
	pub visible: bool,
	/// Last tile described, kept while fading out.
	pub content: Option<TooltipContent>,
	/// Page x of the panel's left edge.
	pub left: f64,
	/// Page y of the panel's top edge.
	pub top: f64,
}

impl TooltipState {
	/// Shows `tile` next to the pointer at page coordinates `(page_x, page_y)`.
	pub fn show(&mut self, tile: &Tile, page_x: f64, page_y: f64, config: &TooltipConfig) {
		self.visible = true;
		self.content = Some(TooltipContent::from_tile(tile));
		self.left = page_x + config.offset_x;
		self.top = page_y + config.offset_y;
	}

	/// Starts the fade-out.
	pub fn hide(&mut self) {
		self.visible = false;
	}

	/// Target opacity for the current visibility.
	pub fn opacity(&self, config: &TooltipConfig) -> f64 {
		if self.visible { config.opacity } else { 0.0 }
	}

	/// CSS transition for the current direction of the fade.
	pub fn transition(&self, config: &TooltipConfig) -> String {
		let ms = if self.visible {
			config.fade_in_ms
		} else {
			config.fade_out_ms
		};
		format!("opacity {ms}ms")
	}
}
