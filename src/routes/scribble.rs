//! Pointer-drawn scribble board on the home route.

use crate::dom::{self, EventListener};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, MouseEvent};

const STROKE_COLOR: &str = "#4338ca";
const STROKE_WIDTH: f64 = 3.0;

pub(super) fn install() -> Vec<EventListener> {
	let canvas: HtmlCanvasElement = dom::by_id("scribble-canvas")
		.dyn_into()
		.expect_throw("hashdeck: #scribble-canvas is not a canvas");
	let context: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.expect_throw("hashdeck: failed to request a 2d context")
		.expect_throw("hashdeck: canvas has no 2d context")
		.dyn_into()
		.expect_throw("hashdeck: unexpected 2d context type");

	context.set_fill_style_str("#ffffff");
	context.fill_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
	context.set_stroke_style_str(STROKE_COLOR);
	context.set_line_width(STROKE_WIDTH);
	context.set_line_cap("round");
	context.set_line_join("round");

	let drawing = Rc::new(Cell::new(false));

	let mut listeners = Vec::new();

	listeners.push(EventListener::new(canvas.as_ref(), "pointerdown", {
		let canvas = canvas.clone();
		let context = context.clone();
		let drawing = Rc::clone(&drawing);
		move |event| {
			let Some(event) = event.dyn_ref::<MouseEvent>() else {
				return;
			};
			drawing.set(true);
			let (x, y) = canvas_point(&canvas, event);
			context.begin_path();
			context.move_to(x, y);
		}
	}));

	listeners.push(EventListener::new(canvas.as_ref(), "pointermove", {
		let canvas = canvas.clone();
		let context = context.clone();
		let drawing = Rc::clone(&drawing);
		move |event| {
			if !drawing.get() {
				return;
			}
			let Some(event) = event.dyn_ref::<MouseEvent>() else {
				return;
			};
			let (x, y) = canvas_point(&canvas, event);
			context.line_to(x, y);
			context.stroke();
		}
	}));

	for event in ["pointerup", "pointerleave"] {
		let context = context.clone();
		let drawing = Rc::clone(&drawing);
		listeners.push(EventListener::new(canvas.as_ref(), event, move |_| {
			if drawing.get() {
				drawing.set(false);
				context.close_path();
			}
		}));
	}

	let download = dom::by_id("scribble-download");
	listeners.push(EventListener::new(download.as_ref(), "click", {
		let canvas = canvas.clone();
		move |_| export_png(&canvas)
	}));

	listeners
}

fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f64, f64) {
	let bounds = canvas.get_bounding_client_rect();
	(
		f64::from(event.client_x()) - bounds.left(),
		f64::from(event.client_y()) - bounds.top(),
	)
}

/// Saves the current sketch through a temporary anchor element.
fn export_png(canvas: &HtmlCanvasElement) {
	let url = canvas
		.to_data_url()
		.expect_throw("hashdeck: failed to encode the sketch");
	let anchor: HtmlAnchorElement = dom::document()
		.create_element("a")
		.expect_throw("hashdeck: failed to create download anchor")
		.dyn_into()
		.expect_throw("hashdeck: download anchor is not an anchor");
	anchor.set_href(&url);
	anchor.set_download("hashdeck-scribble.png");
	anchor.click();
}
