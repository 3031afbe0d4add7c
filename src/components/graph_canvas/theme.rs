//! Visual theming for the graph canvas.
//!
//! Colors, stroke widths and the label font. The defaults reproduce the
//! reference rendering: white background, gray edges, light blue vertices with
//! a black outline and bold labels.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	pub const GRAY: Color = Color::rgb(128, 128, 128);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Edge visual style.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
	pub color: Color,
	/// Stroke width in pixels.
	pub width: f64,
}

/// Vertex visual style.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
	pub fill: Color,
	pub border_color: Color,
	/// Perimeter stroke width in pixels.
	pub border_width: f64,
	pub label_color: Color,
	/// CSS font shorthand used for labels.
	pub label_font: String,
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
	pub background: Color,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	/// Smooth geometric primitives.
	pub antialias: bool,
}

impl Default for EdgeStyle {
	fn default() -> Self {
		Self {
			color: Color::GRAY,
			width: 2.0,
		}
	}
}

impl Default for NodeStyle {
	fn default() -> Self {
		Self {
			fill: Color::rgb(100, 150, 255),
			border_color: Color::BLACK,
			border_width: 2.0,
			label_color: Color::BLACK,
			label_font: "bold 16px Arial, sans-serif".into(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::WHITE,
			edge: EdgeStyle::default(),
			node: NodeStyle::default(),
			antialias: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(100, 150, 255).to_css(), "#6496ff");
		assert_eq!(Color::WHITE.to_css(), "#ffffff");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(Color::rgba(0, 0, 0, 0.5).to_css(), "rgba(0, 0, 0, 0.5)");
	}

	#[test]
	fn partial_theme_overrides_keep_defaults() {
		let theme: Theme = serde_json::from_str(r#"{"edge": {"width": 3.0}}"#).unwrap();
		assert_eq!(theme.edge.width, 3.0);
		assert_eq!(theme.edge.color, Color::GRAY);
		assert_eq!(theme.node, NodeStyle::default());
		assert!(theme.antialias);
	}
}
