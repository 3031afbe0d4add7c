//! Graph input as read from the page.

use serde::Deserialize;

use super::config::SceneConfig;

/// Adjacency matrix plus optional scene overrides.
///
/// Expected JSON shape: `{ "matrix": [[0, 1], [1, 0]], "config": { .. } }`.
/// Both keys are optional; a missing matrix means the reference scene.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphData {
	/// Square matrix; any non-zero entry above the diagonal is an edge.
	#[serde(default = "reference_matrix")]
	pub matrix: Vec<Vec<i64>>,
	#[serde(default)]
	pub config: SceneConfig,
}

impl Default for GraphData {
	fn default() -> Self {
		Self {
			matrix: reference_matrix(),
			config: SceneConfig::default(),
		}
	}
}

/// The six-vertex reference scene.
pub fn reference_matrix() -> Vec<Vec<i64>> {
	vec![
		vec![0, 1, 0, 1, 0, 0],
		vec![1, 0, 1, 0, 0, 0],
		vec![0, 1, 0, 0, 0, 0],
		vec![1, 0, 0, 0, 1, 1],
		vec![0, 0, 1, 0, 0, 0],
		vec![0, 0, 1, 0, 0, 0],
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matrix_only_uses_default_config() {
		let data: GraphData = serde_json::from_str(r#"{"matrix": [[0, 1], [1, 0]]}"#).unwrap();
		assert_eq!(data.matrix, vec![vec![0, 1], vec![1, 0]]);
		assert_eq!(data.config, SceneConfig::default());
	}

	#[test]
	fn empty_object_is_reference_scene() {
		let data: GraphData = serde_json::from_str("{}").unwrap();
		assert_eq!(data, GraphData::default());
	}

	#[test]
	fn empty_matrix_is_kept() {
		let data: GraphData = serde_json::from_str(r#"{"matrix": []}"#).unwrap();
		assert!(data.matrix.is_empty());
	}
}
