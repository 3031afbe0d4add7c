//! Canvas state and pointer interaction tracking.
//!
//! Owns the graph and the drag slot. Pointer events arrive as `press`,
//! `move_to` and `release`; each returns whether it changed something the
//! caller has to react to (a repaint for moves, logging for press/release).

use log::debug;

use super::config::SceneConfig;
use super::geometry::{Point, in_disk};
use super::graph::{Graph, GraphError, build_graph};

/// The drag slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
	#[default]
	Idle,
	/// `offset` is the pointer position minus the vertex center at press time,
	/// held constant for the whole drag.
	Dragging { vertex: usize, offset: Point },
}

/// Graph plus interaction state, created once when the canvas mounts.
#[derive(Clone, Debug)]
pub struct CanvasState {
	graph: Graph,
	config: SceneConfig,
	drag: DragState,
}

impl CanvasState {
	/// Wraps a graph whose positions are already set.
	pub fn new(graph: Graph, config: SceneConfig) -> Self {
		Self {
			graph,
			config,
			drag: DragState::Idle,
		}
	}

	/// Builds the graph from an adjacency matrix and applies the configured
	/// circular layout. The configuration is validated first.
	pub fn from_matrix(matrix: &[Vec<i64>], config: SceneConfig) -> Result<Self, GraphError> {
		config.validate()?;
		let mut graph = build_graph(matrix)?;
		config.layout.apply(&mut graph);
		Ok(Self::new(graph, config))
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	pub fn config(&self) -> &SceneConfig {
		&self.config
	}

	pub fn drag(&self) -> DragState {
		self.drag
	}

	pub fn is_dragging(&self) -> bool {
		matches!(self.drag, DragState::Dragging { .. })
	}

	/// Id of the vertex being dragged, if any.
	pub fn dragged(&self) -> Option<usize> {
		match self.drag {
			DragState::Dragging { vertex, .. } => Some(vertex),
			DragState::Idle => None,
		}
	}

	/// First vertex in id order whose disk contains `p`.
	///
	/// Vertices are painted in the same order, so under overlap this picks the
	/// bottom-most disk rather than the visible one.
	pub fn hit_test(&self, p: Point) -> Option<usize> {
		let radius = self.config.vertex_radius;
		self.graph
			.vertices()
			.iter()
			.find(|v| in_disk(p, v.position(), radius))
			.map(|v| v.id())
	}

	/// Starts a drag if `p` hits a vertex. Returns true when a drag began.
	pub fn press(&mut self, p: Point) -> bool {
		if self.is_dragging() {
			return false;
		}
		let Some(vertex) = self.hit_test(p) else {
			return false;
		};
		let Some(center) = self.graph.vertex(vertex).map(|v| v.position()) else {
			return false;
		};
		self.drag = DragState::Dragging {
			vertex,
			offset: p - center,
		};
		debug!("adjacency-canvas: drag start on vertex {}", vertex);
		true
	}

	/// Moves the dragged vertex so the pointer keeps its press-time offset.
	/// Returns true when a repaint is needed.
	pub fn move_to(&mut self, p: Point) -> bool {
		match self.drag {
			DragState::Dragging { vertex, offset } => {
				self.graph.set_position(vertex, p - offset);
				true
			}
			DragState::Idle => false,
		}
	}

	/// Ends the current drag. Returns true when a drag was in progress.
	pub fn release(&mut self) -> bool {
		match std::mem::take(&mut self.drag) {
			DragState::Dragging { vertex, .. } => {
				debug!("adjacency-canvas: drag end on vertex {}", vertex);
				true
			}
			DragState::Idle => false,
		}
	}

	/// Text for the status strip below the canvas.
	pub fn status_line(&self) -> String {
		format!(
			"Nodes: {} | Edges: {} | Drag nodes to reposition",
			self.graph.vertex_count(),
			self.graph.edge_count()
		)
	}
}
