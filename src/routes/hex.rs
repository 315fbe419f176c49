//! Per-word hex translator widget on the home route.
//!
//! Splits the textarea's text into whitespace-free words and renders each
//! word's UTF-8 bytes as two-digit hex groups, highlighting the group under
//! the caret.

use crate::dom::{self, EventListener};
use std::rc::Rc;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Element, HtmlTextAreaElement};

/// One word of the input, hex-encoded. Offsets are in characters; the caret
/// position reported by the browser is in UTF-16 code units, which agree
/// outside the astral planes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HexGroup {
	pub hex: String,
	pub start: usize,
	pub end: usize,
}

#[must_use]
pub fn hex_word_groups(text: &str) -> Vec<HexGroup> {
	let mut groups = Vec::new();
	let mut word = String::new();
	let mut word_start = 0;
	let mut offset = 0;

	for ch in text.chars() {
		if ch.is_whitespace() {
			if !word.is_empty() {
				groups.push(encode_word(&word, word_start, offset));
				word.clear();
			}
		} else {
			if word.is_empty() {
				word_start = offset;
			}
			word.push(ch);
		}
		offset += 1;
	}
	if !word.is_empty() {
		groups.push(encode_word(&word, word_start, offset));
	}
	groups
}

fn encode_word(word: &str, start: usize, end: usize) -> HexGroup {
	let hex = word
		.bytes()
		.map(|byte| format!("{byte:02x}"))
		.collect::<Vec<_>>()
		.join(" ");
	HexGroup { hex, start, end }
}

/// The group whose word the caret sits in or immediately after.
#[must_use]
pub fn active_group(groups: &[HexGroup], caret: usize) -> Option<usize> {
	groups
		.iter()
		.position(|group| caret >= group.start && caret <= group.end)
}

pub(super) fn install() -> Vec<EventListener> {
	let input: HtmlTextAreaElement = dom::by_id("hex-input")
		.dyn_into()
		.expect_throw("hashdeck: #hex-input is not a textarea");
	let output = dom::by_id("hex-output");

	let sync: Rc<dyn Fn()> = Rc::new({
		let input = input.clone();
		move || {
			let caret = input
				.selection_start()
				.ok()
				.flatten()
				.unwrap_or_default() as usize;
			render_groups(&output, &hex_word_groups(&input.value()), caret);
		}
	});

	let mut listeners = Vec::new();
	for event in ["input", "click", "keyup", "select"] {
		let sync = Rc::clone(&sync);
		listeners.push(EventListener::new(input.as_ref(), event, move |_| sync()));
	}
	sync();
	listeners
}

fn render_groups(output: &Element, groups: &[HexGroup], caret: usize) {
	output.set_inner_html("");
	if groups.is_empty() {
		output.set_text_content(Some("--"));
		return;
	}

	let active = active_group(groups, caret);
	let document = dom::document();
	for (index, group) in groups.iter().enumerate() {
		let span = document
			.create_element("span")
			.expect_throw("hashdeck: failed to create hex span");
		let parity = if index % 2 == 0 {
			"is-primary"
		} else {
			"is-secondary"
		};
		let mut class = format!("hex-group {parity}");
		if active == Some(index) {
			class.push_str(" is-active");
		}
		span.set_attribute("class", &class)
			.expect_throw("hashdeck: failed to set hex span class");
		span.set_text_content(Some(&group.hex));
		output
			.append_child(&span)
			.expect_throw("hashdeck: failed to append hex span");

		if index < groups.len() - 1 {
			let separator = document
				.create_element("span")
				.expect_throw("hashdeck: failed to create hex separator");
			separator
				.set_attribute("class", "hex-group-separator")
				.expect_throw("hashdeck: failed to set hex separator class");
			separator.set_text_content(Some(" | "));
			output
				.append_child(&separator)
				.expect_throw("hashdeck: failed to append hex separator");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{active_group, hex_word_groups, HexGroup};

	#[test]
	fn encodes_words_with_character_offsets() {
		assert_eq!(
			hex_word_groups("hi there"),
			vec![
				HexGroup {
					hex: "68 69".to_owned(),
					start: 0,
					end: 2,
				},
				HexGroup {
					hex: "74 68 65 72 65".to_owned(),
					start: 3,
					end: 8,
				},
			]
		);
	}

	#[test]
	fn whitespace_only_input_has_no_groups() {
		assert!(hex_word_groups("").is_empty());
		assert!(hex_word_groups("  \n\t ").is_empty());
	}

	#[test]
	fn multibyte_words_encode_all_utf8_bytes() {
		let groups = hex_word_groups("é");
		assert_eq!(groups.len(), 1);
		assert_eq!(groups[0].hex, "c3 a9");
		assert_eq!((groups[0].start, groups[0].end), (0, 1));
	}

	#[test]
	fn caret_selects_the_surrounding_group() {
		let groups = hex_word_groups("ab cd");
		assert_eq!(active_group(&groups, 0), Some(0));
		assert_eq!(active_group(&groups, 2), Some(0));
		assert_eq!(active_group(&groups, 3), Some(1));
		assert_eq!(active_group(&groups, 5), Some(1));
	}

	#[test]
	fn caret_between_words_matches_nothing_when_past_the_gap() {
		let groups = hex_word_groups("ab  cd");
		assert_eq!(active_group(&groups, 3), None);
	}
}
