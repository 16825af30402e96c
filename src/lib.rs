//! treemap-chart: Interactive treemap visualization of hierarchical datasets.
//!
//! This crate provides a WASM-based treemap component that fetches a JSON
//! tree, tiles it into value-proportional rectangles colored by category, and
//! shows a legend and hover tooltip. A dropdown switches between datasets.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::treemap::datasets::{Caption, DATASETS, DEFAULT_DATASET, Dataset, caption_for};
pub use components::treemap::{ChartConfig, Node, Scene, TreemapChart};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("treemap-chart: logging initialized");
}

/// Main application component.
/// Hosts the dataset dropdown, the caption, and the treemap of the selected dataset.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let (dataset_url, set_dataset_url) = signal(DEFAULT_DATASET.url.to_string());
	let caption = Memo::new(move |_| caption_for(&dataset_url.get()));

	let options = DATASETS
		.iter()
		.map(|dataset| {
			view! {
				<option value=dataset.url selected=dataset.url == DEFAULT_DATASET.url>
					{dataset.label}
				</option>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=move || caption.get().title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="treemap-page">
			<header class="chart-header">
				<h1 id="title">{move || caption.get().title}</h1>
				<p id="description">{move || caption.get().description}</p>
				<label for="dataset-select">"Dataset: "</label>
				<select
					id="dataset-select"
					prop:value=move || dataset_url.get()
					on:change=move |ev| {
						let url = event_target_value(&ev);
						info!("treemap-chart: dataset changed to {}", url);
						set_dataset_url.set(url);
					}
				>
					{options}
				</select>
			</header>
			<TreemapChart url=dataset_url />
		</main>
	}
}
