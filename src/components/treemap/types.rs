//! Dataset structures fetched as JSON and fed to the treemap.

use serde::{Deserialize, Deserializer};

/// A node of a hierarchical dataset.
///
/// Internal nodes carry `children`; leaves carry a `value`. Both carry a
/// `name`, and leaves are grouped for coloring by `category`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Node {
	/// Display name, used as the tile label. Numbers are kept as their
	/// decimal text; other non-string names read as empty.
	#[serde(default, deserialize_with = "lenient_name")]
	pub name: String,
	/// Grouping label for leaves. Internal nodes usually omit it. Numeric
	/// categories are kept as text; other non-string values are absent.
	#[serde(default, deserialize_with = "lenient_text")]
	pub category: Option<String>,
	/// Leaf magnitude. Published datasets encode it either as a number or as
	/// a numeric string (`"82.53"`); anything unparseable is treated as absent.
	#[serde(default, deserialize_with = "lenient_value")]
	pub value: Option<f64>,
	/// Ordered child nodes. Missing, `null` and empty all mean "leaf".
	#[serde(default, deserialize_with = "default_on_null")]
	pub children: Vec<Node>,
}

impl Node {
	/// Creates a leaf node.
	pub fn leaf(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
		Self {
			name: name.into(),
			category: Some(category.into()),
			value: Some(value),
			children: Vec::new(),
		}
	}

	/// Creates an internal node with the given children.
	pub fn branch(name: impl Into<String>, children: Vec<Node>) -> Self {
		Self {
			name: name.into(),
			category: None,
			value: None,
			children,
		}
	}

	/// Whether this node has no children.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// The value this node contributes as a leaf. Missing, negative and
	/// non-finite values contribute nothing.
	pub fn leaf_value(&self) -> f64 {
		match self.value {
			Some(v) if v.is_finite() && v > 0.0 => v,
			_ => 0.0,
		}
	}

	/// The category label, or the empty string when absent.
	pub fn category_or_default(&self) -> &str {
		self.category.as_deref().unwrap_or("")
	}
}

fn lenient_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Number(f64),
		Text(String),
		Other(serde::de::IgnoredAny),
	}

	Ok(match Option::<Raw>::deserialize(deserializer)? {
		Some(Raw::Number(n)) => Some(n),
		Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
		Some(Raw::Other(_)) | None => None,
	})
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Text(String),
		Number(serde_json::Number),
		Other(serde::de::IgnoredAny),
	}

	Ok(match Option::<Raw>::deserialize(deserializer)? {
		Some(Raw::Text(s)) => Some(s),
		Some(Raw::Number(n)) => Some(n.to_string()),
		Some(Raw::Other(_)) | None => None,
	})
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_numeric_and_string_values() {
		let json = r#"{
			"name": "root",
			"children": [
				{ "name": "a", "category": "X", "value": 4 },
				{ "name": "b", "category": "X", "value": "82.53" },
				{ "name": "c", "category": "Y", "value": "n/a" },
				{ "name": "d", "category": "Y" }
			]
		}"#;
		let root: Node = serde_json::from_str(json).unwrap();
		assert_eq!(root.children.len(), 4);
		assert_eq!(root.children[0].value, Some(4.0));
		assert_eq!(root.children[1].value, Some(82.53));
		assert_eq!(root.children[2].value, None);
		assert_eq!(root.children[3].value, None);
		assert!(root.children.iter().all(Node::is_leaf));
	}

	#[test]
	fn null_and_structured_values_are_absent() {
		let json = r#"{ "name": "x", "value": null, "children": [
			{ "name": "y", "value": { "nested": 1 } }
		] }"#;
		let root: Node = serde_json::from_str(json).unwrap();
		assert_eq!(root.value, None);
		assert_eq!(root.children[0].value, None);
		assert_eq!(root.children[0].category_or_default(), "");
	}

	#[test]
	fn leaf_value_ignores_negative_and_non_finite() {
		assert_eq!(Node::leaf("a", "c", -3.0).leaf_value(), 0.0);
		assert_eq!(Node::leaf("a", "c", f64::NAN).leaf_value(), 0.0);
		assert_eq!(Node::leaf("a", "c", 2.5).leaf_value(), 2.5);
	}

	#[test]
	fn empty_children_array_is_a_leaf() {
		let root: Node = serde_json::from_str(r#"{ "name": "r", "children": [] }"#).unwrap();
		assert!(root.is_leaf());
	}

	#[test]
	fn null_children_mean_leaf() {
		let json = r#"{"name":"r","children":[{"name":"a","category":"A","value":3,"children":null}]}"#;
		let root: Node = serde_json::from_str(json).unwrap();
		assert_eq!(root.children.len(), 1);
		assert!(root.children[0].is_leaf());
		assert_eq!(root.children[0].leaf_value(), 3.0);
	}

	#[test]
	fn numeric_category_and_name_become_text() {
		let json = r#"{"name":"r","children":[
			{"name":2024,"category":7,"value":3},
			{"name":"b","category":1.5,"value":1}
		]}"#;
		let root: Node = serde_json::from_str(json).unwrap();
		assert_eq!(root.children[0].name, "2024");
		assert_eq!(root.children[0].category.as_deref(), Some("7"));
		assert_eq!(root.children[1].category.as_deref(), Some("1.5"));
	}

	#[test]
	fn structured_name_and_category_read_as_absent() {
		let json = r#"{"name":"r","children":[
			{"name":{"first":"x"},"category":true,"value":3},
			{"name":null,"category":["A"],"value":1},
			{"name":"c","category":null,"value":2}
		]}"#;
		let root: Node = serde_json::from_str(json).unwrap();
		assert_eq!(root.children[0].name, "");
		assert_eq!(root.children[0].category, None);
		assert_eq!(root.children[1].name, "");
		assert_eq!(root.children[1].category, None);
		assert_eq!(root.children[2].category_or_default(), "");
	}
}
