//! Fragment router with per-route lifecycle management.
//!
//! A [`Router`] owns a content [`web_sys::Element`], a navigation-menu
//! element, and a [`RouteTable`]. Each navigation resolves the current
//! [***location.hash***](https://developer.mozilla.org/en-US/docs/Web/API/Location/hash)
//! to exactly one mounted view, tearing the previous view down first.
//!
//! Routers hold all of their state themselves, so any number of instances can
//! coexist (the tests rely on this); the only shared collaborator is the
//! browser location.

use crate::dom;
use hashbrown::HashMap;
use tracing::{info, instrument, trace, warn};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::Element;

/// The path every unknown or malformed fragment resolves to.
pub const DEFAULT_PATH: &str = "/";

/// Releases whatever a mounted view acquired (timers, listeners, contexts).
///
/// `FnOnce` makes the lifecycle invariant structural: a teardown handle that
/// ran cannot run again for the same mount.
pub type Teardown = Box<dyn FnOnce()>;

/// Renders one view into the content element.
///
/// A handler with nothing to release returns `None`; the router treats that
/// the same as a teardown that does nothing.
pub type RenderFn = Box<dyn Fn(&Element) -> Option<Teardown>>;

/// Mapping from exact path strings (`"/"`, `"/shows"`, …) to render
/// functions. Fixed once handed to [`Router::new`]; keys are unique and
/// matched verbatim, with no nesting, parameters, or query strings.
#[derive(Default)]
pub struct RouteTable {
	entries: HashMap<String, RenderFn>,
}

impl RouteTable {
	#[must_use]
	pub fn new() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	pub fn register<F>(&mut self, path: impl Into<String>, render: F)
	where
		F: Fn(&Element) -> Option<Teardown> + 'static,
	{
		let path = path.into();
		if self.entries.insert(path.clone(), Box::new(render)).is_some() {
			warn!(%path, "route registered twice; keeping the later handler");
		}
	}

	#[must_use]
	pub fn contains(&self, path: &str) -> bool {
		self.entries.contains_key(path)
	}

	fn get(&self, path: &str) -> Option<&RenderFn> {
		self.entries.get(path)
	}
}

struct ActiveRoute {
	path: String,
	teardown: Option<Teardown>,
}

/// Translates navigation events into exactly one mounted view.
pub struct Router {
	routes: RouteTable,
	content: Element,
	menu: Element,
	active: Option<ActiveRoute>,
}

impl Router {
	/// `content` is the container views render into; `menu` is the element
	/// whose `.menu-link[data-route]` descendants mirror the active route.
	///
	/// The table must have a handler registered for [`DEFAULT_PATH`].
	#[must_use]
	pub fn new(routes: RouteTable, content: Element, menu: Element) -> Self {
		Self {
			routes,
			content,
			menu,
			active: None,
		}
	}

	/// The path of the currently mounted view, if any.
	#[must_use]
	pub fn active_path(&self) -> Option<&str> {
		self.active.as_ref().map(|active| active.path.as_str())
	}

	/// Reads the current location fragment and normalizes it to a path.
	///
	/// An absent fragment, or one that does not begin with `#/`, resolves to
	/// [`DEFAULT_PATH`]. Never fails.
	#[must_use]
	pub fn resolve_current_path(&self) -> String {
		let hash = dom::window().location().hash().unwrap_or_default();
		normalize_fragment(&hash)
	}

	/// Tears the active view down, then mounts the view for the current
	/// fragment and syncs the menu.
	///
	/// Unknown paths are not errors; they mount the [`DEFAULT_PATH`] handler.
	/// Re-rendering while the fragment is unchanged re-mounts: the active
	/// view is torn down once and its handler runs again.
	///
	/// The outgoing teardown completes before the incoming render starts, so
	/// a freshly mounted view never races a stale view's timers or
	/// listeners. A panicking render function propagates to the caller with
	/// the outgoing view already torn down and nothing mounted in its place.
	///
	/// # Panics
	///
	/// Throws if the table has no handler for [`DEFAULT_PATH`].
	#[instrument(skip(self))]
	pub fn render_route(&mut self) {
		let requested = self.resolve_current_path();
		let resolved = if self.routes.contains(&requested) {
			requested
		} else {
			trace!(path = %requested, "path not in route table, using default");
			DEFAULT_PATH.to_owned()
		};

		if let Some(previous) = self.active.take() {
			if let Some(teardown) = previous.teardown {
				trace!(path = %previous.path, "tearing down");
				teardown();
			}
		}

		let render = self
			.routes
			.get(&resolved)
			.expect_throw("hashdeck: no handler registered for the default path");
		let teardown = render(&self.content);

		self.active = Some(ActiveRoute {
			path: resolved.clone(),
			teardown,
		});
		self.sync_menu(&resolved);
		info!(path = %resolved, "mounted");
	}

	/// Marks exactly one menu entry active: the one whose `data-route`
	/// matches the resolved path.
	fn sync_menu(&self, resolved: &str) {
		let links = self
			.menu
			.query_selector_all(".menu-link[data-route]")
			.expect_throw("hashdeck: menu query failed");
		for index in 0..links.length() {
			let Some(node) = links.item(index) else {
				continue;
			};
			let Ok(link) = node.dyn_into::<Element>() else {
				continue;
			};
			let is_active = link.get_attribute("data-route").as_deref() == Some(resolved);
			link.class_list()
				.toggle_with_force("is-active", is_active)
				.expect_throw("hashdeck: failed to toggle menu class");
			link.set_attribute("aria-current", if is_active { "page" } else { "false" })
				.expect_throw("hashdeck: failed to set aria-current");
		}
	}
}

/// `""` and fragments without the `#/` prefix resolve to [`DEFAULT_PATH`];
/// everything else is the fragment with the leading `#` removed.
fn normalize_fragment(hash: &str) -> String {
	match hash.strip_prefix('#') {
		Some(path) if path.starts_with('/') => path.to_owned(),
		_ => DEFAULT_PATH.to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use super::normalize_fragment;

	#[test]
	fn absent_fragment_is_default() {
		assert_eq!(normalize_fragment(""), "/");
	}

	#[test]
	fn bare_hash_is_default() {
		assert_eq!(normalize_fragment("#"), "/");
	}

	#[test]
	fn fragment_without_routing_prefix_is_default() {
		assert_eq!(normalize_fragment("#shows"), "/");
		assert_eq!(normalize_fragment("#!legacy"), "/");
		assert_eq!(normalize_fragment("shows"), "/");
	}

	#[test]
	fn prefixed_fragment_keeps_its_path() {
		assert_eq!(normalize_fragment("#/"), "/");
		assert_eq!(normalize_fragment("#/shows"), "/shows");
		assert_eq!(normalize_fragment("#/unknown-garbage"), "/unknown-garbage");
	}
}
