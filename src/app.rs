//! Wasm entry point: builds the shell, wires the router to
//! [***hashchange***](https://developer.mozilla.org/en-US/docs/Web/API/Window/hashchange_event),
//! and performs the initial navigation.

use crate::dom;
use crate::router::Router;
use crate::routes::Route;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, UnwrapThrowExt};
use web_sys::Element;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fills the application root with the navigation shell and the (initially
/// empty) route content container.
pub fn mount_shell(app_root: &Element) {
	let menu_items: String = Route::ALL
		.into_iter()
		.map(|route| {
			format!(
				r##"<li><a class="menu-link" data-route="{path}" href="#{path}">{label}</a></li>"##,
				path = route.path(),
				label = route.label(),
			)
		})
		.collect();
	app_root.set_inner_html(&format!(
		r#"<main>
	<section class="hero" aria-live="polite" id="home-section">
		<nav class="menu" aria-label="Primary" id="primary-menu">
			<div class="brand-wrap">
				<span class="brand">Hashdeck</span>
				<span class="version" aria-label="Application version">v{APP_VERSION}</span>
			</div>
			<ul class="menu-list">{menu_items}</ul>
		</nav>
		<div id="route-content"></div>
	</section>
</main>"#
	));
}

#[wasm_bindgen(start)]
pub fn start() {
	tracing_wasm::set_as_global_default();
	info!(version = APP_VERSION, "booting");

	let app_root = dom::by_id("app");
	mount_shell(&app_root);

	let content = dom::by_id("route-content");
	let menu = dom::by_id("primary-menu");
	let router = Rc::new(RefCell::new(Router::new(Route::table(), content, menu)));

	let on_hashchange = Closure::wrap(Box::new({
		let router = Rc::clone(&router);
		move |_: web_sys::Event| router.borrow_mut().render_route()
	}) as Box<dyn FnMut(web_sys::Event)>);
	dom::window()
		.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref())
		.expect_throw("hashdeck: failed to subscribe to hashchange");
	// Page-lifetime subscription; the closure is never dropped.
	on_hashchange.forget();

	let location = dom::window().location();
	if location.hash().unwrap_or_default().is_empty() {
		// The fragment write fires hashchange, which performs the first render.
		location
			.set_hash("#/")
			.expect_throw("hashdeck: failed to set the initial fragment");
	} else {
		router.borrow_mut().render_route();
	}
}
