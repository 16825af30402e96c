//! The selectable datasets and the caption shown above the chart.

/// A dataset offered in the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dataset {
	/// Dropdown label.
	pub label: &'static str,
	/// JSON location.
	pub url: &'static str,
}

/// Datasets in dropdown order.
pub const DATASETS: [Dataset; 3] = [
	Dataset {
		label: "Kickstarter Pledges",
		url: "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/kickstarter-funding-data.json",
	},
	Dataset {
		label: "Movie Sales",
		url: "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/movie-data.json",
	},
	Dataset {
		label: "Video Game Sales",
		url: "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json",
	},
];

/// Dataset selected when the page loads.
pub const DEFAULT_DATASET: Dataset = DATASETS[2];

/// Title and description for a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caption {
	/// Heading text, also the document title.
	pub title: &'static str,
	/// Subheading text.
	pub description: &'static str,
}

const CAPTIONS: [(&str, Caption); 3] = [
	(
		"video-game-sales-data",
		Caption {
			title: "Video Game Sales Tree Map",
			description: "Best-selling video games grouped by platform",
		},
	),
	(
		"movie-data",
		Caption {
			title: "Tree Map Movie Box Office",
			description: "Film box office revenue grouped by genre",
		},
	),
	(
		"kickstarter-funding-data",
		Caption {
			title: "Tree Map Pledge Kickstarter",
			description: "Kickstarter Pledges Grouped by Category",
		},
	),
];

const FALLBACK_CAPTION: Caption = Caption {
	title: "Tree Map",
	description: "Select a dataset from the drop-down menu",
};

/// Picks the caption whose marker substring occurs in `url`, checking the
/// markers in a fixed order; unknown URLs get a generic caption.
pub fn caption_for(url: &str) -> Caption {
	CAPTIONS
		.iter()
		.find(|(marker, _)| url.contains(marker))
		.map(|(_, caption)| *caption)
		.unwrap_or(FALLBACK_CAPTION)
}
