//! Graph model built once from an adjacency matrix.
//!
//! Vertices own their positions; edges only refer to vertices by index, so the
//! [`Graph`] is the single owner of both collections.

use thiserror::Error;

use super::geometry::{Point, Segment};

/// Errors raised while building a scene from an adjacency matrix and its configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
	/// A row's length differs from the number of rows.
	#[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
	NotSquare {
		row: usize,
		len: usize,
		expected: usize,
	},

	/// A scene size or radius is zero, negative or not finite.
	#[error("invalid scene config: {field} must be a finite positive number, got {value}")]
	InvalidConfig { field: &'static str, value: f64 },
}

/// A graph vertex with a stable id, a display label and a mutable position.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	id: usize,
	label: String,
	position: Point,
}

impl Vertex {
	pub fn new(id: usize, position: Point) -> Self {
		Self {
			id,
			label: vertex_label(id),
			position,
		}
	}

	pub fn id(&self) -> usize {
		self.id
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn position(&self) -> Point {
		self.position
	}
}

/// An undirected edge between two distinct vertices, stored as indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	a: usize,
	b: usize,
}

impl Edge {
	pub fn a(&self) -> usize {
		self.a
	}

	pub fn b(&self) -> usize {
		self.b
	}
}

/// Vertices in id order plus edges in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
}

/// Builds a graph from a square adjacency matrix.
///
/// Only the strict upper triangle is read: entry `(i, j)` with `i < j` and a
/// non-zero value yields edge `{i, j}`. The diagonal and lower triangle are
/// ignored, so asymmetric input is accepted. All vertices start at the origin
/// until a layout is applied.
pub fn build_graph(matrix: &[Vec<i64>]) -> Result<Graph, GraphError> {
	let n = matrix.len();
	if let Some((row, entries)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
		return Err(GraphError::NotSquare {
			row,
			len: entries.len(),
			expected: n,
		});
	}

	let vertices = (0..n).map(|id| Vertex::new(id, Point::default())).collect();
	let edges = matrix
		.iter()
		.enumerate()
		.flat_map(|(i, row)| {
			row.iter()
				.enumerate()
				.skip(i + 1)
				.filter(|&(_, &value)| value != 0)
				.map(move |(j, _)| Edge { a: i, b: j })
		})
		.collect();

	Ok(Graph { vertices, edges })
}

impl Graph {
	/// Builds an edgeless graph with vertices at the given positions, ids in order.
	pub fn from_vertices(positions: impl IntoIterator<Item = Point>) -> Self {
		let mut graph = Self::default();
		for position in positions {
			graph.push_vertex(position);
		}
		graph
	}

	/// Appends a vertex with the next free id and returns that id.
	pub fn push_vertex(&mut self, position: Point) -> usize {
		let id = self.vertices.len();
		self.vertices.push(Vertex::new(id, position));
		id
	}

	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn vertex(&self, id: usize) -> Option<&Vertex> {
		self.vertices.get(id)
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Resolves an edge to a segment between its endpoints' current positions.
	pub fn segment(&self, edge: &Edge) -> Option<Segment> {
		let from = self.vertex(edge.a)?.position;
		let to = self.vertex(edge.b)?.position;
		Some(Segment::new(from, to))
	}

	/// Moves a vertex. Unknown ids are ignored.
	pub(crate) fn set_position(&mut self, id: usize, position: Point) {
		if let Some(vertex) = self.vertices.get_mut(id) {
			vertex.position = position;
		}
	}
}

/// Display label for a vertex id: `A`..`Z`, then `AA`, `AB`, .. (bijective base-26).
pub fn vertex_label(id: usize) -> String {
	let mut letters = Vec::new();
	let mut n = id + 1;
	while n > 0 {
		let rem = (n - 1) % 26;
		letters.push(char::from(b'A' + rem as u8));
		n = (n - 1) / 26;
	}
	letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reference_matrix() -> Vec<Vec<i64>> {
		vec![
			vec![0, 1, 0, 1, 0, 0],
			vec![1, 0, 1, 0, 0, 0],
			vec![0, 1, 0, 0, 0, 0],
			vec![1, 0, 0, 0, 1, 1],
			vec![0, 0, 1, 0, 0, 0],
			vec![0, 0, 1, 0, 0, 0],
		]
	}

	#[test]
	fn counts_follow_upper_triangle() {
		let graph = build_graph(&reference_matrix()).unwrap();
		assert_eq!(graph.vertex_count(), 6);
		assert_eq!(graph.edge_count(), 5);
	}

	#[test]
	fn edges_are_in_row_major_order() {
		let graph = build_graph(&reference_matrix()).unwrap();
		let pairs: Vec<_> = graph.edges().iter().map(|e| (e.a(), e.b())).collect();
		assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 2), (3, 4), (3, 5)]);
	}

	#[test]
	fn edge_endpoints_are_distinct_vertices() {
		let graph = build_graph(&reference_matrix()).unwrap();
		for edge in graph.edges() {
			assert_ne!(edge.a(), edge.b());
			assert!(graph.vertex(edge.a()).is_some());
			assert!(graph.vertex(edge.b()).is_some());
		}
	}

	#[test]
	fn diagonal_is_ignored() {
		let graph = build_graph(&[vec![1, 0], vec![0, 7]]).unwrap();
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn any_non_zero_value_is_an_edge() {
		let graph = build_graph(&[vec![0, -3], vec![0, 0]]).unwrap();
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn ragged_matrix_is_rejected() {
		let err = build_graph(&[vec![0, 1], vec![1]]).unwrap_err();
		assert_eq!(
			err,
			GraphError::NotSquare {
				row: 1,
				len: 1,
				expected: 2
			}
		);
	}

	#[test]
	fn wide_matrix_is_rejected() {
		let err = build_graph(&[vec![0, 1, 0]]).unwrap_err();
		assert!(matches!(err, GraphError::NotSquare { row: 0, .. }));
	}

	#[test]
	fn empty_matrix_builds_empty_graph() {
		let graph = build_graph(&[]).unwrap();
		assert_eq!(graph.vertex_count(), 0);
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn labels_extend_past_z() {
		assert_eq!(vertex_label(0), "A");
		assert_eq!(vertex_label(5), "F");
		assert_eq!(vertex_label(25), "Z");
		assert_eq!(vertex_label(26), "AA");
		assert_eq!(vertex_label(27), "AB");
		assert_eq!(vertex_label(51), "AZ");
		assert_eq!(vertex_label(52), "BA");
		assert_eq!(vertex_label(701), "ZZ");
		assert_eq!(vertex_label(702), "AAA");
	}

	#[test]
	fn segment_tracks_current_positions() {
		let mut graph = build_graph(&[vec![0, 1], vec![1, 0]]).unwrap();
		graph.set_position(1, Point::new(10.0, 20.0));
		let edge = graph.edges()[0];
		let segment = graph.segment(&edge).unwrap();
		assert_eq!(segment.from, Point::new(0.0, 0.0));
		assert_eq!(segment.to, Point::new(10.0, 20.0));
	}
}
