//! Canvas rendering for the graph.
//!
//! Drawing goes through the [`Surface`] trait so the frame is a pure function
//! of the graph state. Passes, in order:
//! 1. Background clear
//! 2. Edges, in insertion order
//! 3. Vertices in id order: fill, outline, then the centered label
//!
//! Vertices are drawn after edges so each disk caps the edge ends under it.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geometry::{Disk, Point, Segment};
use super::state::CanvasState;
use super::theme::Color;

/// Horizontal advance of a piece of text and the ascent of its font.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
	pub width: f64,
	/// Font ascent, independent of the glyphs measured, so every label in one
	/// font shares the same baseline offset.
	pub ascent: f64,
}

/// A drawing target lent to the renderer for the duration of one frame.
pub trait Surface {
	/// Clears a `width` x `height` region to `color` and resets smoothing.
	fn clear(&mut self, width: f64, height: f64, color: Color, antialias: bool);
	fn stroke_segment(&mut self, segment: Segment, color: Color, width: f64);
	fn fill_disk(&mut self, disk: Disk, color: Color);
	fn stroke_disk(&mut self, disk: Disk, color: Color, width: f64);
	fn measure_text(&mut self, text: &str, font: &str) -> TextExtent;
	/// Draws `text` with its alphabetic baseline starting at `origin`.
	fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: Color);
}

/// Renders the complete scene.
pub fn render<S: Surface + ?Sized>(state: &CanvasState, surface: &mut S) {
	let config = state.config();
	let theme = &config.theme;
	surface.clear(config.width, config.height, theme.background, theme.antialias);
	draw_edges(state, surface);
	draw_vertices(state, surface);
}

fn draw_edges<S: Surface + ?Sized>(state: &CanvasState, surface: &mut S) {
	let graph = state.graph();
	let style = &state.config().theme.edge;
	for segment in graph.edges().iter().filter_map(|e| graph.segment(e)) {
		surface.stroke_segment(segment, style.color, style.width);
	}
}

fn draw_vertices<S: Surface + ?Sized>(state: &CanvasState, surface: &mut S) {
	let config = state.config();
	let style = &config.theme.node;
	for vertex in state.graph().vertices() {
		let disk = Disk::new(vertex.position(), config.vertex_radius);
		surface.fill_disk(disk, style.fill);
		surface.stroke_disk(disk, style.border_color, style.border_width);

		let extent = surface.measure_text(vertex.label(), &style.label_font);
		surface.fill_text(
			vertex.label(),
			label_origin(vertex.position(), extent),
			&style.label_font,
			style.label_color,
		);
	}
}

/// Baseline origin that centers text on `center`: the full advance width
/// horizontally, the ascent (not line height) vertically.
pub fn label_origin(center: Point, extent: TextExtent) -> Point {
	Point::new(center.x - extent.width / 2.0, center.y + extent.ascent / 2.0)
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64, color: Color, antialias: bool) {
		self.set_image_smoothing_enabled(antialias);
		self.set_fill_style_str(&color.to_css());
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn stroke_segment(&mut self, segment: Segment, color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(segment.from.x, segment.from.y);
		self.line_to(segment.to.x, segment.to.y);
		self.stroke();
	}

	fn fill_disk(&mut self, disk: Disk, color: Color) {
		self.begin_path();
		let _ = self.arc(
			disk.center.x,
			disk.center.y,
			disk.radius,
			0.0,
			std::f64::consts::TAU,
		);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_disk(&mut self, disk: Disk, color: Color, width: f64) {
		self.begin_path();
		let _ = self.arc(
			disk.center.x,
			disk.center.y,
			disk.radius,
			0.0,
			std::f64::consts::TAU,
		);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}

	fn measure_text(&mut self, text: &str, font: &str) -> TextExtent {
		self.set_font(font);
		CanvasRenderingContext2d::measure_text(self, text)
			.map(|m| TextExtent {
				width: m.width(),
				ascent: m.font_bounding_box_ascent(),
			})
			.unwrap_or_else(|e: JsValue| {
				log::warn!("adjacency-canvas: measureText failed: {:?}", e);
				TextExtent::default()
			})
	}

	fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: Color) {
		self.set_font(font);
		self.set_text_baseline("alphabetic");
		self.set_fill_style_str(&color.to_css());
		let _ = CanvasRenderingContext2d::fill_text(self, text, origin.x, origin.y);
	}
}

#[cfg(test)]
pub(crate) mod recording {
	//! In-memory surface that records draw calls, for tests.

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Clear { width: f64, height: f64, color: Color, antialias: bool },
		Segment { segment: Segment, color: Color, width: f64 },
		FillDisk { disk: Disk, color: Color },
		StrokeDisk { disk: Disk, color: Color, width: f64 },
		Text { text: String, origin: Point, color: Color },
	}

	/// Fixed-width glyphs: 10px advance per character, 12px ascent.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: Vec<DrawOp>,
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64, color: Color, antialias: bool) {
			self.ops.push(DrawOp::Clear {
				width,
				height,
				color,
				antialias,
			});
		}

		fn stroke_segment(&mut self, segment: Segment, color: Color, width: f64) {
			self.ops.push(DrawOp::Segment {
				segment,
				color,
				width,
			});
		}

		fn fill_disk(&mut self, disk: Disk, color: Color) {
			self.ops.push(DrawOp::FillDisk { disk, color });
		}

		fn stroke_disk(&mut self, disk: Disk, color: Color, width: f64) {
			self.ops.push(DrawOp::StrokeDisk { disk, color, width });
		}

		fn measure_text(&mut self, text: &str, _font: &str) -> TextExtent {
			TextExtent {
				width: 10.0 * text.chars().count() as f64,
				ascent: 12.0,
			}
		}

		fn fill_text(&mut self, text: &str, origin: Point, _font: &str, color: Color) {
			self.ops.push(DrawOp::Text {
				text: text.to_string(),
				origin,
				color,
			});
		}
	}
}
