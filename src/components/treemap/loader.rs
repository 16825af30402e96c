//! Dataset download and decoding.

use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use super::types::Node;

/// Why a dataset could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The request never produced a readable response.
	#[error("request to {url} failed: {reason}")]
	Fetch {
		/// Requested dataset URL.
		url: String,
		/// Transport error text.
		reason: String,
	},

	/// The server answered with a non-success status.
	#[error("{url} answered HTTP {status}")]
	Status {
		/// Requested dataset URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The body is not a dataset tree.
	#[error("malformed dataset: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Fetches `url` and decodes it as a dataset tree.
pub async fn load_dataset(url: &str) -> Result<Node, LoadError> {
	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| LoadError::Fetch {
			url: url.to_string(),
			reason: e.to_string(),
		})?;

	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = response.text().await.map_err(|e| LoadError::Fetch {
		url: url.to_string(),
		reason: e.to_string(),
	})?;

	let root = parse_dataset(&body)?;
	info!(
		"treemap-chart: loaded {} ({} top-level groups)",
		url,
		root.children.len()
	);
	Ok(root)
}

/// Decodes a dataset from JSON text.
pub fn parse_dataset(json: &str) -> Result<Node, LoadError> {
	Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_a_two_level_dataset() {
		let root = parse_dataset(
			r#"{"name":"Movies","children":[
				{"name":"Action","children":[
					{"name":"Avatar","category":"Action","value":"760505847"}
				]}
			]}"#,
		)
		.unwrap();
		assert_eq!(root.name, "Movies");
		assert_eq!(root.children[0].children[0].value, Some(760505847.0));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = parse_dataset("{\"name\": ").unwrap_err();
		assert!(matches!(err, LoadError::Parse(_)));
		assert!(err.to_string().starts_with("malformed dataset"));
	}

	#[test]
	fn wrong_shape_is_a_parse_error() {
		assert!(matches!(parse_dataset("[1, 2, 3]"), Err(LoadError::Parse(_))));
	}

	#[test]
	fn status_error_message_names_the_url() {
		let err = LoadError::Status {
			url: "https://example.com/data.json".to_string(),
			status: 404,
		};
		assert_eq!(err.to_string(), "https://example.com/data.json answered HTTP 404");
	}

	#[test]
	fn tolerates_null_children_and_numeric_categories() {
		let root = parse_dataset(
			r#"{"name":"r","children":[
				{"name":"a","category":"A","value":3,"children":null},
				{"name":"b","category":7,"value":2}
			]}"#,
		)
		.unwrap();
		assert_eq!(root.children.len(), 2);
		assert!(root.children[0].is_leaf());
		assert_eq!(root.children[1].category_or_default(), "7");
	}
}
