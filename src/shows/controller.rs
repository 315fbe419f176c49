//! Route handlers for the shows screens.
//!
//! The CRUD screen delegates all clicks and submits to two listeners on a
//! stable root element, so re-rendering the list only swaps markup and never
//! re-attaches handlers.

use super::store::{ShowDraft, ShowsStore, Status};
use super::view::{self, CrudViewModel};
use crate::dom::{self, EventListener};
use crate::router::Teardown;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

/// Read-only overview for `/shows`. Nothing to tear down.
pub fn render_summary(content: &Element) -> Option<Teardown> {
	let store = ShowsStore::open();
	let shows = store.seed_if_empty().unwrap_or_else(|error| {
		warn!(%error, "seeding failed, listing what is readable");
		store.list()
	});
	content.set_inner_html(&view::summary_html(&shows));
	None
}

/// Full editor for `/shows-crud`.
pub fn render_crud(content: &Element) -> Option<Teardown> {
	content.set_inner_html(r#"<div id="shows-crud-root"></div>"#);
	let root = dom::by_id("shows-crud-root");

	let store = ShowsStore::open();
	if let Err(error) = store.seed_if_empty() {
		warn!(%error, "seeding failed");
	}

	let screen = Rc::new(CrudScreen {
		store,
		root: root.clone(),
		selected: RefCell::new(None),
	});
	screen.render();

	let mut listeners = Vec::with_capacity(2);
	listeners.push(EventListener::new(root.as_ref(), "click", {
		let screen = Rc::clone(&screen);
		move |event| screen.on_click(&event)
	}));
	listeners.push(EventListener::new(root.as_ref(), "submit", {
		let screen = Rc::clone(&screen);
		move |event| screen.on_submit(&event)
	}));

	Some(Box::new(move || drop(listeners)))
}

struct CrudScreen {
	store: ShowsStore,
	root: Element,
	selected: RefCell<Option<String>>,
}

impl CrudScreen {
	fn render(&self) {
		// A selection whose show was deleted elsewhere resolves to nothing.
		let selected_show = self
			.selected
			.borrow()
			.as_deref()
			.and_then(|id| self.store.get(id));
		if selected_show.is_none() {
			*self.selected.borrow_mut() = None;
		}

		let shows = self.store.list();
		self.root.set_inner_html(&view::crud_html(&CrudViewModel {
			shows: &shows,
			selected: selected_show.as_ref(),
		}));
	}

	fn on_click(&self, event: &Event) {
		let Some(button) = action_button(event) else {
			return;
		};
		let action = button.get_attribute("data-action").unwrap_or_default();
		let id = button.get_attribute("data-id");

		match (action.as_str(), id) {
			("select", Some(id)) => {
				*self.selected.borrow_mut() = Some(id);
				self.render();
			}
			("delete", Some(id)) => {
				match self.store.delete(&id) {
					Ok(_removed) => {}
					Err(error) => warn!(%error, "delete failed"),
				}
				let mut selected = self.selected.borrow_mut();
				if selected.as_deref() == Some(id.as_str()) {
					*selected = None;
				}
				drop(selected);
				self.render();
			}
			("clear-selection", _) => {
				*self.selected.borrow_mut() = None;
				self.render();
			}
			_ => {}
		}
	}

	fn on_submit(&self, event: &Event) {
		event.prevent_default();
		let draft = self.read_draft();

		let selected = self.selected.borrow().clone();
		let result = match selected {
			Some(id) => self.store.update(&id, draft).map(|_| None),
			None => self.store.create(draft).map(|show| Some(show.id)),
		};
		match result {
			Ok(Some(created_id)) => *self.selected.borrow_mut() = Some(created_id),
			Ok(None) => {}
			Err(error) => warn!(%error, "saving failed"),
		}
		self.render();
	}

	fn read_draft(&self) -> ShowDraft {
		let link = self.input_value("link");
		ShowDraft {
			title: self.input_value("title"),
			genre: self.input_value("genre"),
			seasons: self.input_value("seasons").parse().unwrap_or(1),
			status: Status::from_label(&self.select_value("status")),
			link: if link.trim().is_empty() { None } else { Some(link) },
		}
	}

	fn input_value(&self, name: &str) -> String {
		self.root
			.query_selector(&format!(r#"[data-shows-form] input[name="{name}"]"#))
			.ok()
			.flatten()
			.and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
			.map(|input| input.value())
			.unwrap_or_default()
	}

	fn select_value(&self, name: &str) -> String {
		self.root
			.query_selector(&format!(r#"[data-shows-form] select[name="{name}"]"#))
			.ok()
			.flatten()
			.and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
			.map(|select| select.value())
			.unwrap_or_default()
	}
}

/// The `button[data-action]` a click landed on or in, if any.
fn action_button(event: &Event) -> Option<Element> {
	event
		.target()?
		.dyn_into::<Element>()
		.ok()?
		.closest("button[data-action]")
		.ok()
		.flatten()
}
