#![cfg(target_arch = "wasm32")]

use hashdeck::router::{RouteTable, Router, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

type Log = Rc<RefCell<Vec<String>>>;

fn fixture(paths: &[&str]) -> (Element, Element) {
	let document = web_sys::window().unwrap().document().unwrap();
	let body = document.body().unwrap();

	let content = document.create_element("div").unwrap();
	body.append_child(&content).unwrap();

	let menu = document.create_element("nav").unwrap();
	let links: String = paths
		.iter()
		.map(|path| {
			format!(r##"<a class="menu-link" data-route="{path}" href="#{path}">{path}</a>"##)
		})
		.collect();
	menu.set_inner_html(&links);
	body.append_child(&menu).unwrap();

	(content, menu)
}

fn set_hash(hash: &str) {
	web_sys::window()
		.unwrap()
		.location()
		.set_hash(hash)
		.unwrap();
}

fn recording(
	log: &Log,
	name: &'static str,
	with_teardown: bool,
) -> impl Fn(&Element) -> Option<Teardown> {
	let log = Rc::clone(log);
	move |content: &Element| {
		content.set_inner_html(&format!("<p>{name}</p>"));
		log.borrow_mut().push(format!("mount:{name}"));
		if with_teardown {
			let log = Rc::clone(&log);
			Some(Box::new(move || {
				log.borrow_mut().push(format!("teardown:{name}"));
			}) as Teardown)
		} else {
			None
		}
	}
}

fn two_route_router(log: &Log) -> (Router, Element) {
	let (content, menu) = fixture(&["/", "/shows"]);
	let mut table = RouteTable::new();
	table.register("/", recording(log, "home", true));
	table.register("/shows", recording(log, "shows", true));
	(Router::new(table, content, menu.clone()), menu)
}

fn active_routes(menu: &Element) -> Vec<String> {
	let links = menu.query_selector_all(".menu-link.is-active").unwrap();
	(0..links.length())
		.filter_map(|index| links.item(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.filter_map(|link| link.get_attribute("data-route"))
		.collect()
}

#[wasm_bindgen_test]
fn unknown_path_behaves_like_default() {
	let log: Log = Log::default();
	let (mut router, menu) = two_route_router(&log);

	set_hash("#/unknown-garbage");
	router.render_route();

	assert_eq!(*log.borrow(), ["mount:home"]);
	assert_eq!(router.active_path(), Some("/"));
	assert_eq!(active_routes(&menu), ["/"]);
}

#[wasm_bindgen_test]
fn malformed_fragments_resolve_to_default() {
	let log: Log = Log::default();
	let (router, _menu) = two_route_router(&log);

	set_hash("shows");
	assert_eq!(router.resolve_current_path(), "/");
	set_hash("");
	assert_eq!(router.resolve_current_path(), "/");
	set_hash("#/shows");
	assert_eq!(router.resolve_current_path(), "/shows");
}

#[wasm_bindgen_test]
fn teardown_runs_exactly_once_and_before_the_next_mount() {
	let log: Log = Log::default();
	let (mut router, _menu) = two_route_router(&log);

	set_hash("#/");
	router.render_route();
	set_hash("#/shows");
	router.render_route();

	assert_eq!(
		*log.borrow(),
		["mount:home", "teardown:home", "mount:shows"]
	);
}

#[wasm_bindgen_test]
fn exactly_one_menu_entry_is_active() {
	let log: Log = Log::default();
	let (mut router, menu) = two_route_router(&log);

	set_hash("#/shows");
	router.render_route();
	assert_eq!(active_routes(&menu), ["/shows"]);

	set_hash("#/");
	router.render_route();
	assert_eq!(active_routes(&menu), ["/"]);

	let links = menu.query_selector_all(".menu-link").unwrap();
	for index in 0..links.length() {
		let link: Element = links.item(index).unwrap().dyn_into().unwrap();
		let expected = if link.get_attribute("data-route").as_deref() == Some("/") {
			"page"
		} else {
			"false"
		};
		assert_eq!(link.get_attribute("aria-current").as_deref(), Some(expected));
	}
}

#[wasm_bindgen_test]
fn handlers_without_teardown_are_tolerated() {
	let log: Log = Log::default();
	let (content, menu) = fixture(&["/", "/shows"]);
	let mut table = RouteTable::new();
	table.register("/", recording(&log, "home", false));
	table.register("/shows", recording(&log, "shows", true));
	let mut router = Router::new(table, content, menu);

	set_hash("#/");
	router.render_route();
	set_hash("#/shows");
	router.render_route();
	set_hash("#/");
	router.render_route();

	assert_eq!(
		*log.borrow(),
		["mount:home", "mount:shows", "teardown:shows", "mount:home"]
	);
}

#[wasm_bindgen_test]
fn rerender_without_navigation_remounts_once() {
	let log: Log = Log::default();
	let (mut router, _menu) = two_route_router(&log);

	set_hash("#/shows");
	router.render_route();
	router.render_route();

	assert_eq!(
		*log.borrow(),
		["mount:shows", "teardown:shows", "mount:shows"]
	);
	assert_eq!(router.active_path(), Some("/shows"));
}

#[wasm_bindgen_test]
fn end_to_end_navigation_scenario() {
	let log: Log = Log::default();
	let (mut router, menu) = two_route_router(&log);

	// No fragment set: the default route mounts.
	set_hash("");
	router.render_route();
	assert_eq!(*log.borrow(), ["mount:home"]);
	assert_eq!(active_routes(&menu), ["/"]);

	set_hash("#/shows");
	router.render_route();
	assert_eq!(
		*log.borrow(),
		["mount:home", "teardown:home", "mount:shows"]
	);
	assert_eq!(active_routes(&menu), ["/shows"]);

	set_hash("#/unknown-garbage");
	router.render_route();
	assert_eq!(
		*log.borrow(),
		[
			"mount:home",
			"teardown:home",
			"mount:shows",
			"teardown:shows",
			"mount:home"
		]
	);
	assert_eq!(active_routes(&menu), ["/"]);
}
