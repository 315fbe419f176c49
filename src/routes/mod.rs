//! The built-in screens of the deck.
//!
//! [`Route`] is the closed set of views the app ships; the router itself
//! stays string-keyed (exact fragment match), while this enum is the single
//! source of truth the shell builds its table and menu from.

use crate::dom::{self, EventListener};
use crate::router::{RouteTable, Teardown};
use crate::shows;
use std::rc::Rc;
use web_sys::Element;

pub mod botany;
pub mod camera;
pub mod hex;
pub mod home;
pub mod scribble;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
	Home,
	Shows,
	ShowsCrud,
	Botany,
	Camera,
}

impl Route {
	pub const ALL: [Self; 5] = [
		Self::Home,
		Self::Shows,
		Self::ShowsCrud,
		Self::Botany,
		Self::Camera,
	];

	#[must_use]
	pub const fn path(self) -> &'static str {
		match self {
			Self::Home => "/",
			Self::Shows => "/shows",
			Self::ShowsCrud => "/shows-crud",
			Self::Botany => "/botany",
			Self::Camera => "/camera",
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Home => "Home",
			Self::Shows => "Shows",
			Self::ShowsCrud => "Shows CRUD",
			Self::Botany => "Botany",
			Self::Camera => "Camera",
		}
	}

	#[must_use]
	pub fn from_path(path: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|route| route.path() == path)
	}

	fn render(self, content: &Element) -> Option<Teardown> {
		match self {
			Self::Home => home::render(content),
			Self::Shows => shows::render_summary(content),
			Self::ShowsCrud => shows::render_crud(content),
			Self::Botany => botany::render(content),
			Self::Camera => camera::render(content),
		}
	}

	/// A route table holding every built-in screen.
	#[must_use]
	pub fn table() -> RouteTable {
		let mut table = RouteTable::new();
		for route in Self::ALL {
			table.register(route.path(), move |content: &Element| route.render(content));
		}
		table
	}
}

/// Recomputes a calculator form on every `input` event and swallows submits.
/// Missing forms are skipped so a partially rendered screen stays inert.
fn wire_form(form_id: &str, update: Rc<dyn Fn()>) -> Vec<EventListener> {
	let Some(form) = dom::try_by_id(form_id) else {
		return Vec::new();
	};
	let mut listeners = Vec::with_capacity(2);
	listeners.push(EventListener::new(form.as_ref(), "input", {
		let update = Rc::clone(&update);
		move |_| update()
	}));
	listeners.push(EventListener::new(form.as_ref(), "submit", |event| {
		event.prevent_default();
	}));
	update();
	listeners
}

fn set_result(id: &str, html: &str) {
	if let Some(node) = dom::try_by_id(id) {
		node.set_inner_html(html);
	}
}

#[cfg(test)]
mod tests {
	use super::Route;

	#[test]
	fn paths_round_trip() {
		for route in Route::ALL {
			assert_eq!(Route::from_path(route.path()), Some(route));
		}
	}

	#[test]
	fn unknown_path_has_no_route() {
		assert_eq!(Route::from_path("/unknown-garbage"), None);
		assert_eq!(Route::from_path("shows"), None);
	}

	#[test]
	fn paths_are_rooted_and_unique() {
		for (index, route) in Route::ALL.into_iter().enumerate() {
			assert!(route.path().starts_with('/'));
			for other in &Route::ALL[index + 1..] {
				assert_ne!(route.path(), other.path());
			}
		}
	}
}
