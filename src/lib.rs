//! adjacency-canvas: interactive visualization of a graph given as an adjacency matrix.
//!
//! This crate provides a WASM-based canvas component that lays a small
//! undirected graph out on a circle and lets the user drag vertices around,
//! with edges following their endpoints.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::graph_canvas::geometry::Point;
pub use components::graph_canvas::graph::{Graph, GraphError, build_graph, vertex_label};
pub use components::graph_canvas::layout::CircularLayout;
pub use components::graph_canvas::render::{Surface, TextExtent, render};
pub use components::graph_canvas::{
	CanvasState, DragState, GraphCanvas, GraphData, SceneConfig, Theme, reference_matrix,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("adjacency-canvas: logging initialized");
}

/// Load graph data from a script element with id="graph-data".
/// Expected format: JSON with { matrix: [[...], ...], config: {...} }
fn load_graph_data() -> Option<GraphData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let Some(element) = document.get_element_by_id("graph-data") else {
		info!("adjacency-canvas: no graph-data element, using reference scene");
		return None;
	};
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<GraphData>(&json_text) {
		Ok(data) => {
			info!(
				"adjacency-canvas: loaded {}x{} adjacency matrix",
				data.matrix.len(),
				data.matrix.first().map_or(0, Vec::len)
			);
			Some(data)
		}
		Err(e) => {
			warn!("adjacency-canvas: failed to parse graph data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the adjacency matrix from the DOM and renders the canvas with a status strip.
/// A malformed matrix or scene config replaces the canvas with the error.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_graph_data().unwrap_or_default();
	let scene = match CanvasState::from_matrix(&data.matrix, data.config) {
		Ok(state) => {
			let status = state.status_line();
			info!("adjacency-canvas: {}", status);
			Either::Left(view! {
				<div class="graph-scene">
					<GraphCanvas state=state />
					<div class="graph-status">{status}</div>
				</div>
			})
		}
		Err(e) => {
			error!("adjacency-canvas: {}", e);
			Either::Right(view! {
				<div class="graph-error">
					<h1>"Could not load graph"</h1>
					<p>{e.to_string()}</p>
				</div>
			})
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Graph Visualization" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{scene}
	}
}
