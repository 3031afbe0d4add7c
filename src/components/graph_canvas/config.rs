//! Scene-wide configuration.
//!
//! One immutable record carries every process-wide default: canvas size,
//! initial layout, vertex radius and theme. It is handed to the canvas at
//! construction; any field may be overridden from the page's graph data.

use serde::Deserialize;

use super::graph::GraphError;
use super::layout::CircularLayout;
use super::theme::Theme;

/// Complete scene configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Initial circular embedding.
	pub layout: CircularLayout,
	/// Radius shared by every vertex disk, used for both drawing and hit-testing.
	pub vertex_radius: f64,
	pub theme: Theme,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 600.0,
			layout: CircularLayout::default(),
			vertex_radius: 25.0,
			theme: Theme::default(),
		}
	}
}

impl SceneConfig {
	/// Rejects sizes and radii that are not finite positive numbers.
	pub fn validate(&self) -> Result<(), GraphError> {
		[
			("width", self.width),
			("height", self.height),
			("layout.radius", self.layout.radius),
			("vertex_radius", self.vertex_radius),
		]
		.into_iter()
		.find(|&(_, value)| !(value.is_finite() && value > 0.0))
		.map_or(Ok(()), |(field, value)| {
			Err(GraphError::InvalidConfig { field, value })
		})
	}
}
