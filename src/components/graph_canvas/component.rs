//! Leptos component wrapping the graph canvas.
//!
//! The component creates an HTML canvas element and wires pointer handlers to
//! the drag state machine. Repaints are requested through
//! `requestAnimationFrame` and coalesced: while a frame is pending, further
//! moves only mutate state and the frame draws whatever is current.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent};

use super::geometry::Point;
use super::render;
use super::state::CanvasState;

/// `MouseEvent.button` value of the primary button.
const PRIMARY_BUTTON: i16 = 0;

/// Canvas state plus the repaint bookkeeping shared with the frame callback.
struct CanvasContext {
	state: CanvasState,
	frame_pending: bool,
}

impl CanvasContext {
	fn new(state: CanvasState) -> Self {
		Self {
			state,
			frame_pending: false,
		}
	}

	/// Marks a frame as pending. Returns false when one already is, in which
	/// case that frame will draw the latest state.
	fn request_repaint(&mut self) -> bool {
		!std::mem::replace(&mut self.frame_pending, true)
	}

	fn frame_drawn(&mut self) {
		self.frame_pending = false;
	}

	/// Returns true when a drag began and the pointer should be captured.
	fn pointer_down(&mut self, p: Point, button: i16) -> bool {
		button == PRIMARY_BUTTON && self.state.press(p)
	}

	/// Returns true when an animation frame has to be requested.
	fn pointer_move(&mut self, p: Point) -> bool {
		self.state.move_to(p) && self.request_repaint()
	}

	/// Ends the drag whatever button went up: with chorded buttons the final
	/// `pointerup` reports the last button released, not the primary one.
	/// Cancelled gestures and lost capture end it the same way.
	fn pointer_up(&mut self) -> bool {
		self.state.release()
	}
}

type SharedContext = Rc<RefCell<CanvasContext>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Renders an interactive graph on a canvas element.
///
/// The component takes ownership of `state`; the canvas is sized from its
/// scene configuration. Vertices can be dragged with the primary button.
#[component]
pub fn GraphCanvas(state: CanvasState) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (width, height) = (state.config().width, state.config().height);
	let context: SharedContext = Rc::new(RefCell::new(CanvasContext::new(state)));
	let frame: FrameCallback = Rc::new(RefCell::new(None));
	let (context_init, frame_init) = (context.clone(), frame.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if frame_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		// The 2D context is looked up per frame rather than held between paints.
		let context_frame = context_init.clone();
		*frame_init.borrow_mut() = Some(Closure::new(move || {
			let mut c = context_frame.borrow_mut();
			c.frame_drawn();
			match context_2d(&canvas) {
				Some(mut ctx) => render::render(&c.state, &mut ctx),
				None => error!("adjacency-canvas: canvas has no 2d context"),
			}
		}));

		info!(
			"adjacency-canvas: canvas mounted at {}x{}",
			width as u32, height as u32
		);
		schedule_frame(&context_init, &frame_init);
	});

	let context_down = context.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		let Some(p) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let started = context_down.borrow_mut().pointer_down(p, ev.button());
		if started {
			// Keep receiving moves when the pointer leaves the canvas mid-drag.
			if let Some(canvas) = canvas_ref.get() {
				let _ = canvas.set_pointer_capture(ev.pointer_id());
			}
		}
	};

	let (context_move, frame_move) = (context.clone(), frame.clone());
	let on_pointermove = move |ev: PointerEvent| {
		let Some(p) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let repaint = context_move.borrow_mut().pointer_move(p);
		if repaint {
			request_frame(&context_move, &frame_move);
		}
	};

	let context_up = context.clone();
	let on_pointerup = move |ev: PointerEvent| {
		let released = context_up.borrow_mut().pointer_up();
		if released {
			if let Some(canvas) = canvas_ref.get() {
				let _ = canvas.release_pointer_capture(ev.pointer_id());
			}
		}
	};

	let context_cancel = context.clone();
	let on_pointercancel = move |_: PointerEvent| {
		context_cancel.borrow_mut().pointer_up();
	};

	let context_lost = context.clone();
	let on_lostpointercapture = move |_: PointerEvent| {
		context_lost.borrow_mut().pointer_up();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:pointerdown=on_pointerdown
			on:pointermove=on_pointermove
			on:pointerup=on_pointerup
			on:pointercancel=on_pointercancel
			on:lostpointercapture=on_lostpointercapture
			style="display: block; cursor: grab; touch-action: none;"
		/>
	}
}

/// Requests one animation frame unless one is already pending.
fn schedule_frame(context: &SharedContext, frame: &FrameCallback) {
	if context.borrow_mut().request_repaint() {
		request_frame(context, frame);
	}
}

/// Hands the frame callback to the browser. The caller has already marked the
/// frame as pending; a refused request clears the mark again.
fn request_frame(context: &SharedContext, frame: &FrameCallback) {
	let requested = match (web_sys::window(), frame.borrow().as_ref()) {
		(Some(window), Some(cb)) => window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.is_ok(),
		_ => false,
	};
	if !requested {
		context.borrow_mut().frame_drawn();
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Pointer position relative to the canvas' top-left corner.
fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
