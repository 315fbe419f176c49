//! Small `web-sys` access layer shared by the router and the route handlers.
//!
//! The guards in here ([`EventListener`], [`Interval`]) own their
//! [`Closure`]s, so detaching a handler is dropping its guard. Route teardown
//! callbacks are mostly just `drop`s of these.

use tracing::warn;
use wasm_bindgen::{closure::Closure, throw_str, JsCast, UnwrapThrowExt};
use web_sys::{Document, Element, EventTarget, HtmlInputElement, Window};

#[must_use]
pub fn window() -> Window {
	web_sys::window().expect_throw("hashdeck: no global `window`")
}

#[must_use]
pub fn document() -> Document {
	window().document().expect_throw("hashdeck: no `document` on window")
}

/// Looks up an element the current markup is known to contain.
///
/// Throws into JavaScript when the element is missing, since that means the
/// page markup is broken beyond what any handler could recover from.
#[must_use]
pub fn by_id(id: &str) -> Element {
	match document().get_element_by_id(id) {
		Some(element) => element,
		None => throw_str(&format!("hashdeck: required element #{id} is missing")),
	}
}

#[must_use]
pub fn try_by_id(id: &str) -> Option<Element> {
	document().get_element_by_id(id)
}

/// Reads `#{id}` as a number, treating anything non-finite as `0.0`.
#[must_use]
pub fn numeric_value(id: &str) -> f64 {
	let value = try_by_id(id)
		.and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
		.map(|input| input.value())
		.unwrap_or_default();
	match value.trim().parse::<f64>() {
		Ok(number) if number.is_finite() => number,
		_ => 0.0,
	}
}

#[must_use]
pub fn escape_html(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for ch in value.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// A DOM event subscription that detaches itself when dropped.
pub struct EventListener {
	target: EventTarget,
	event: &'static str,
	closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
	pub fn new(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(web_sys::Event) + 'static,
	) -> Self {
		let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
		let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
		target
			.add_event_listener_with_callback(event, callback)
			.expect_throw("hashdeck: failed to attach event listener");
		Self {
			target: target.clone(),
			event,
			closure,
		}
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		if self
			.target
			.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
			.is_err()
		{
			warn!(event = self.event, "listener did not detach cleanly");
		}
	}
}

/// A recurring timer that is cancelled when dropped.
pub struct Interval {
	id: i32,
	_closure: Closure<dyn FnMut()>,
}

impl Interval {
	pub fn new(millis: i32, tick: impl FnMut() + 'static) -> Self {
		let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
		let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
		let id = window()
			.set_interval_with_callback_and_timeout_and_arguments_0(callback, millis)
			.expect_throw("hashdeck: failed to schedule interval");
		Self {
			id,
			_closure: closure,
		}
	}
}

impl Drop for Interval {
	fn drop(&mut self) {
		window().clear_interval_with_handle(self.id);
	}
}

#[cfg(test)]
mod tests {
	use super::escape_html;

	#[test]
	fn escapes_markup_significant_characters() {
		assert_eq!(
			escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
			"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
		);
	}

	#[test]
	fn passes_plain_text_through() {
		assert_eq!(escape_html("plain text 123"), "plain text 123");
	}
}
