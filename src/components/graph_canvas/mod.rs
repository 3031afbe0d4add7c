//! Interactive graph canvas component.
//!
//! Renders an undirected graph, given as an adjacency matrix, on an HTML
//! canvas with:
//! - A circular initial layout
//! - Press-drag-release repositioning of single vertices
//! - Edges that track their endpoints while a vertex moves
//! - Configurable theme and scene geometry
//!
//! # Example
//!
//! ```ignore
//! use adjacency_canvas::{CanvasState, GraphCanvas, SceneConfig};
//!
//! let matrix = vec![vec![0, 1], vec![1, 0]];
//! let state = CanvasState::from_matrix(&matrix, SceneConfig::default())?;
//!
//! view! { <GraphCanvas state=state /> }
//! ```

mod component;
pub mod config;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod render;
mod state;
pub mod theme;
mod types;

pub use component::GraphCanvas;
pub use config::SceneConfig;
pub use state::{CanvasState, DragState};
pub use theme::Theme;
pub use types::{GraphData, reference_matrix};
