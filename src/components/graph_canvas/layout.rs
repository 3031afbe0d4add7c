//! Initial circular embedding.

use std::f64::consts::PI;

use serde::Deserialize;

use super::geometry::Point;
use super::graph::Graph;

/// Places vertices evenly on a circle, vertex 0 at angle zero (to the right of
/// the center), proceeding clockwise on screen.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CircularLayout {
	pub center: Point,
	pub radius: f64,
}

impl Default for CircularLayout {
	fn default() -> Self {
		Self {
			center: Point::new(400.0, 300.0),
			radius: 200.0,
		}
	}
}

impl CircularLayout {
	/// Position of vertex `i` out of `n`. With `n == 0` there is no vertex to
	/// place and the center is returned.
	pub fn position(&self, i: usize, n: usize) -> Point {
		if n == 0 {
			return self.center;
		}
		let angle = 2.0 * PI * i as f64 / n as f64;
		Point::new(
			self.center.x + self.radius * angle.cos(),
			self.center.y + self.radius * angle.sin(),
		)
	}

	/// Overwrites every vertex position. A graph without vertices is left untouched.
	pub fn apply(&self, graph: &mut Graph) {
		let n = graph.vertex_count();
		for i in 0..n {
			graph.set_position(i, self.position(i, n));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn vertices_lie_on_the_circle() {
		let layout = CircularLayout::default();
		let mut graph = Graph::from_vertices(vec![Point::default(); 7]);
		layout.apply(&mut graph);
		for v in graph.vertices() {
			let p = v.position();
			let d2 = (p.x - 400.0).powi(2) + (p.y - 300.0).powi(2);
			assert!((d2 - 200.0_f64.powi(2)).abs() < 1e-6, "vertex {} off circle", v.id());
		}
	}

	#[test]
	fn single_vertex_sits_right_of_center() {
		let layout = CircularLayout::default();
		let mut graph = Graph::from_vertices([Point::default()]);
		layout.apply(&mut graph);
		let p = graph.vertices()[0].position();
		assert!((p.x - 600.0).abs() < EPS);
		assert!((p.y - 300.0).abs() < EPS);
	}

	#[test]
	fn empty_graph_is_a_no_op() {
		let mut graph = Graph::default();
		CircularLayout::default().apply(&mut graph);
		assert_eq!(graph.vertex_count(), 0);
	}

	#[test]
	fn custom_center_and_radius() {
		let layout = CircularLayout {
			center: Point::new(0.0, 0.0),
			radius: 10.0,
		};
		let p = layout.position(1, 4);
		assert!(p.x.abs() < EPS);
		assert!((p.y - 10.0).abs() < EPS);
	}

	#[test]
	fn position_without_vertices_is_the_center() {
		let layout = CircularLayout::default();
		let p = layout.position(0, 0);
		assert_eq!(p, Point::new(400.0, 300.0));
		assert!(p.x.is_finite() && p.y.is_finite());
	}
}
