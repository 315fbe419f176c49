//! The default route: hero slideshow, scribble board, and hex translator.

use super::{hex, scribble};
use crate::dom::{self, EventListener, Interval};
use crate::router::Teardown;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::Element;

struct Slide {
	kicker: &'static str,
	title: &'static str,
	subtitle: &'static str,
}

const SLIDES: [Slide; 3] = [
	Slide {
		kicker: "Hashdeck",
		title: "One deck of small browser toys",
		subtitle: "Scribble, encode, and tinker without leaving the page.",
	},
	Slide {
		kicker: "Local-first",
		title: "Your shows list stays in this browser",
		subtitle: "Everything persists to local storage; nothing leaves the tab.",
	},
	Slide {
		kicker: "Field notes",
		title: "Closed-form calculators for plants and lenses",
		subtitle: "Photosynthesis curves and depth-of-field limits, live as you type.",
	},
];

const SLIDE_INTERVAL_MILLIS: i32 = 4000;

const HOME_HTML: &str = r##"
<p class="hero-label" id="hero-kicker"></p>
<h1 class="hero-title" id="hero-title"></h1>
<p class="hero-subtitle" id="hero-subtitle"></p>
<div class="hero-controls" id="hero-controls"></div>
<section class="scribble-widget" aria-label="Scribble board">
	<div class="scribble-header">
		<p class="scribble-title">Quick Scribble Board</p>
		<button class="scribble-download" id="scribble-download" type="button">Download sketch</button>
	</div>
	<canvas id="scribble-canvas" class="scribble-canvas" width="480" height="220" aria-label="Scribble drawing area"></canvas>
</section>
<section class="hex-widget" aria-label="Hex converter">
	<p class="hex-title">Hex Translator</p>
	<label class="hex-label" for="hex-input">Type text</label>
	<textarea id="hex-input" class="hex-input" rows="4" placeholder="Type anything and watch the hex stream"></textarea>
	<p class="hex-label">Hex output</p>
	<output id="hex-output" class="hex-output" aria-live="polite">--</output>
</section>
<a class="action" href="#/shows" aria-label="Open shows">View shows</a>
"##;

pub fn render(content: &Element) -> Option<Teardown> {
	content.set_inner_html(HOME_HTML);

	let (interval, dot_listeners) = install_slideshow();
	let scribble_listeners = scribble::install();
	let hex_listeners = hex::install();

	Some(Box::new(move || {
		drop(interval);
		drop(dot_listeners);
		drop(scribble_listeners);
		drop(hex_listeners);
	}))
}

fn install_slideshow() -> (Interval, Vec<EventListener>) {
	let kicker = dom::by_id("hero-kicker");
	let title = dom::by_id("hero-title");
	let subtitle = dom::by_id("hero-subtitle");
	let controls = dom::by_id("hero-controls");
	let document = dom::document();

	let mut dots = Vec::with_capacity(SLIDES.len());
	for (index, slide) in SLIDES.iter().enumerate() {
		let dot = document
			.create_element("button")
			.expect_throw("hashdeck: failed to create slide dot");
		dot.set_attribute("class", "dot")
			.expect_throw("hashdeck: failed to set dot class");
		dot.set_attribute("type", "button")
			.expect_throw("hashdeck: failed to set dot type");
		dot.set_attribute(
			"aria-label",
			&format!("Show slide {}: {}", index + 1, slide.kicker),
		)
		.expect_throw("hashdeck: failed to set dot label");
		controls
			.append_child(&dot)
			.expect_throw("hashdeck: failed to append slide dot");
		dots.push(dot);
	}

	let meta = document
		.create_element("span")
		.expect_throw("hashdeck: failed to create slide meta");
	meta.set_attribute("class", "meta")
		.expect_throw("hashdeck: failed to set meta class");
	controls
		.append_child(&meta)
		.expect_throw("hashdeck: failed to append slide meta");

	let show_slide: Rc<dyn Fn(usize)> = Rc::new({
		let dots = dots.clone();
		move |index: usize| {
			let slide = &SLIDES[index];
			kicker.set_text_content(Some(slide.kicker));
			title.set_text_content(Some(slide.title));
			subtitle.set_text_content(Some(slide.subtitle));
			for (dot_index, dot) in dots.iter().enumerate() {
				dot.set_attribute(
					"aria-current",
					if dot_index == index { "true" } else { "false" },
				)
				.expect_throw("hashdeck: failed to mark slide dot");
			}
			meta.set_text_content(Some(&format!("Slide {} of {}", index + 1, SLIDES.len())));
		}
	});

	let current = Rc::new(Cell::new(0_usize));

	let mut listeners = Vec::with_capacity(SLIDES.len());
	for (index, dot) in dots.iter().enumerate() {
		let show_slide = Rc::clone(&show_slide);
		let current = Rc::clone(&current);
		listeners.push(EventListener::new(dot.as_ref(), "click", move |_| {
			current.set(index);
			show_slide(index);
		}));
	}

	show_slide(0);

	let interval = Interval::new(SLIDE_INTERVAL_MILLIS, {
		let show_slide = Rc::clone(&show_slide);
		let current = Rc::clone(&current);
		move || {
			let next = (current.get() + 1) % SLIDES.len();
			current.set(next);
			show_slide(next);
		}
	});

	(interval, listeners)
}
