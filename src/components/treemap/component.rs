//! Leptos component rendering the treemap as SVG.
//!
//! Whenever the dataset URL changes the component clears the chart, fetches
//! the new dataset on the local task queue and, if that request is still the
//! latest one when it resolves, draws the resulting [`Scene`]: one tile and
//! label per leaf, a legend, and a tooltip that follows the pointer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};
use web_sys::MouseEvent;

use super::config::{ChartConfig, Typography};
use super::loader::load_dataset;
use super::measure::CanvasTextMetrics;
use super::scene::{LegendEntry, Scene, Tile};
use super::state::{ChartState, ChartStatus, TooltipState};
use super::theme::Palette;
use super::wrap::{AverageCharMetrics, TextMetrics};

/// Renders the treemap of the dataset at `url`.
///
/// The chart follows the `url` signal: each change starts a new render and
/// supersedes any that is still loading. Pass `config` to override the
/// default geometry and typography.
#[component]
pub fn TreemapChart(
	/// Dataset location.
	#[prop(into)]
	url: Signal<String>,
	/// Geometry and typography overrides.
	#[prop(optional)]
	config: Option<ChartConfig>,
) -> impl IntoView {
	let config = StoredValue::new(config.unwrap_or_default());
	let palette = StoredValue::new(Palette::default());
	let state = RwSignal::new(ChartState::new());
	let tooltip = RwSignal::new(TooltipState::default());

	Effect::new(move |_| {
		let url = url.get();
		let Some(ticket) = state.try_update(|s| s.begin(&url)) else {
			return;
		};
		tooltip.set(TooltipState::default());

		spawn_local(async move {
			let loaded = load_dataset(ticket.url()).await;
			if !state.with_untracked(|s| s.is_current(&ticket)) {
				debug!("treemap-chart: {} superseded before it resolved", ticket.url());
				return;
			}

			let result = loaded.map(|root| {
				config.with_value(|config| {
					let metrics = label_metrics(&config.typography);
					palette.with_value(|palette| {
						Scene::build(&root, config, palette, metrics.as_ref())
					})
				})
			});
			match &result {
				Ok(scene) => info!(
					"treemap-chart: rendering {} tiles in {} categories",
					scene.tiles.len(),
					scene.legend.len()
				),
				Err(e) => warn!("treemap-chart: {}", e),
			}
			state.update(|s| {
				s.complete(ticket, result);
			});
		});
	});

	let chart = move || {
		state.with(|s| match s.status() {
			ChartStatus::Idle => ().into_any(),
			ChartStatus::Loading { .. } => {
				view! { <p class="chart-status">"Loading dataset..."</p> }.into_any()
			}
			ChartStatus::Ready { scene, .. } => {
				chart_view(scene.clone(), tooltip, config).into_any()
			}
			ChartStatus::Failed { message, .. } => view! {
				<p class="chart-status chart-error" role="alert">
					{format!("Failed to load dataset: {message}")}
				</p>
			}
			.into_any(),
		})
	};

	view! {
		<div id="container" class="treemap-chart">
			{chart}
			<TooltipPanel tooltip=tooltip config=config />
		</div>
	}
}

fn label_metrics(typography: &Typography) -> Box<dyn TextMetrics> {
	match CanvasTextMetrics::new(&typography.css_font()) {
		Some(metrics) => Box::new(metrics),
		None => {
			warn!("treemap-chart: no canvas for text measurement, estimating label widths");
			Box::new(AverageCharMetrics::for_font_size(typography.font_size))
		}
	}
}

fn chart_view(
	scene: Scene,
	tooltip: RwSignal<TooltipState>,
	config: StoredValue<ChartConfig>,
) -> impl IntoView {
	let Scene {
		width,
		height,
		tiles,
		legend,
	} = scene;

	view! {
		<svg id="treemap" width=width height=height>
			{tiles.into_iter().map(|tile| tile_view(tile, tooltip, config)).collect_view()}
		</svg>
		{legend_view(legend, config)}
	}
}

fn tile_view(
	tile: Tile,
	tooltip: RwSignal<TooltipState>,
	config: StoredValue<ChartConfig>,
) -> impl IntoView {
	let hovered = tile.clone();
	let show = move |ev: MouseEvent| {
		config.with_value(|c| {
			tooltip.update(|t| {
				t.show(&hovered, ev.page_x() as f64, ev.page_y() as f64, &c.tooltip)
			})
		});
	};
	let hide = move |_: MouseEvent| tooltip.update(TooltipState::hide);
	let font_size = config.with_value(|c| c.typography.font_size);

	let Tile {
		name,
		category,
		value,
		rect,
		color,
		lines,
		..
	} = tile;
	let (x, y) = rect.center();
	let lines = lines
		.into_iter()
		.map(|line| {
			view! {
				<tspan x=line.x y=line.y dy=line.dy>
					{line.text}
				</tspan>
			}
		})
		.collect_view();

	view! {
		<g>
			<rect
				class="tile"
				x=rect.x0
				y=rect.y0
				width=rect.width()
				height=rect.height()
				fill=color.to_css()
				data-name=name
				data-category=category
				data-value=value
				on:mouseenter=show.clone()
				on:mousemove=show
				on:mouseleave=hide
			/>
			<text
				x=x
				y=y
				text-anchor="middle"
				alignment-baseline="middle"
				font-size=font_size
				fill="black"
				pointer-events="none"
			>
				{lines}
			</text>
		</g>
	}
}

fn legend_view(entries: Vec<LegendEntry>, config: StoredValue<ChartConfig>) -> impl IntoView {
	let legend = config.with_value(|c| c.legend.clone());
	let height = entries.len() as f64 * legend.row_height;
	let items = entries
		.into_iter()
		.enumerate()
		.map(|(i, entry)| {
			let fill = entry.color.to_css();
			view! {
				<g
					class="legend-item-group"
					transform=format!("translate(0, {})", i as f64 * legend.row_height)
				>
					<rect
						class="legend-item"
						width=legend.swatch_size
						height=legend.swatch_size
						fill=fill
					/>
					<text
						class="legend-label"
						x=legend.swatch_size + legend.label_gap
						y=legend.swatch_size / 2.0
						text-anchor="start"
						alignment-baseline="middle"
					>
						{entry.category}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<svg id="legend" width=legend.width height=height>
			{items}
		</svg>
	}
}

/// Floating panel describing the hovered tile.
#[component]
fn TooltipPanel(tooltip: RwSignal<TooltipState>, config: StoredValue<ChartConfig>) -> impl IntoView {
	let data_value = move || {
		tooltip.with(|t| {
			t.content
				.as_ref()
				.map(|c| c.value.to_string())
				.unwrap_or_default()
		})
	};
	let opacity = move || config.with_value(|c| tooltip.with(|t| t.opacity(&c.tooltip)).to_string());
	let transition = move || config.with_value(|c| tooltip.with(|t| t.transition(&c.tooltip)));
	let lines = move || {
		tooltip.with(|t| {
			t.content.as_ref().map(|c| {
				c.lines()
					.into_iter()
					.map(|line| view! { <div>{line}</div> })
					.collect_view()
			})
		})
	};

	view! {
		<div
			id="tooltip"
			class="tooltip"
			data-value=data_value
			style:position="absolute"
			style:pointer-events="none"
			style:left=move || format!("{}px", tooltip.with(|t| t.left))
			style:top=move || format!("{}px", tooltip.with(|t| t.top))
			style:opacity=opacity
			style:transition=transition
		>
			{lines}
		</div>
	}
}
