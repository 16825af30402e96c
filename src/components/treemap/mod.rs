//! Treemap visualization component.
//!
//! Renders a hierarchical dataset as nested rectangles whose areas are
//! proportional to leaf values:
//! - Values summed bottom-up, siblings ordered by descending value
//! - Squarified tiling with a fixed gap between siblings
//! - One color per category, assigned in first-seen order
//! - Labels wrapped to their tile, or elided when they cannot fit
//! - Legend of categories and a hover tooltip
//!
//! Everything except [`TreemapChart`], [`CanvasTextMetrics`] and
//! [`load_dataset`] is independent of the browser.
//!
//! # Example
//!
//! ```ignore
//! use treemap_chart::TreemapChart;
//!
//! let (url, _) = signal("data/video-game-sales-data.json".to_string());
//! view! { <TreemapChart url=url /> }
//! ```

mod component;
pub mod config;
pub mod datasets;
pub mod hierarchy;
pub mod layout;
pub mod loader;
mod measure;
pub mod scene;
pub mod state;
pub mod theme;
mod types;
pub mod wrap;

pub use component::TreemapChart;
pub use config::ChartConfig;
pub use loader::{LoadError, load_dataset};
pub use measure::CanvasTextMetrics;
pub use scene::{LegendEntry, Scene, Tile};
pub use state::{ChartState, ChartStatus, RenderTicket};
pub use theme::{CategoryColorMap, Color, Palette};
pub use types::Node;
pub use wrap::{TextMetrics, WrappedLabel, wrap_label};
