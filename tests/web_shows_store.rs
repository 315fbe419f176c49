#![cfg(target_arch = "wasm32")]

use hashdeck::shows::{ShowDraft, ShowsStore, Status};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Storage;

wasm_bindgen_test_configure!(run_in_browser);

fn storage() -> Storage {
	web_sys::window()
		.unwrap()
		.local_storage()
		.unwrap()
		.unwrap()
}

fn fresh_store(key: &str) -> ShowsStore {
	storage().remove_item(key).unwrap();
	ShowsStore::with_key(storage(), key)
}

fn draft(title: &str) -> ShowDraft {
	ShowDraft {
		title: title.to_owned(),
		genre: "Drama".to_owned(),
		seasons: 2,
		status: Status::Watching,
		link: None,
	}
}

#[wasm_bindgen_test]
fn seeds_empty_storage_exactly_once() {
	let store = fresh_store("test.shows.seed");

	let first = store.seed_if_empty().unwrap();
	assert_eq!(first.len(), 1);

	let second = store.seed_if_empty().unwrap();
	assert_eq!(second, first);
}

#[wasm_bindgen_test]
fn create_assigns_unique_ids_and_sanitizes() {
	let store = fresh_store("test.shows.create");

	let a = store.create(draft("  Dark  ")).unwrap();
	let b = store.create(draft("Patriot")).unwrap();

	assert_ne!(a.id, b.id);
	assert_eq!(a.title, "Dark");
	assert_eq!(store.list().len(), 2);
	assert_eq!(store.get(&b.id).unwrap().title, "Patriot");
}

#[wasm_bindgen_test]
fn update_keeps_the_identifier() {
	let store = fresh_store("test.shows.update");
	let created = store.create(draft("Dark")).unwrap();

	let mut changes = draft("Dark, rewatched");
	changes.seasons = 0;
	let updated = store.update(&created.id, changes).unwrap().unwrap();

	assert_eq!(updated.id, created.id);
	assert_eq!(updated.title, "Dark, rewatched");
	assert_eq!(updated.seasons, 1);

	assert!(store.update("no-such-id", draft("x")).unwrap().is_none());
	assert_eq!(store.list().len(), 1);
}

#[wasm_bindgen_test]
fn delete_reports_whether_something_was_removed() {
	let store = fresh_store("test.shows.delete");
	let created = store.create(draft("Dark")).unwrap();

	assert!(store.delete(&created.id).unwrap());
	assert!(!store.delete(&created.id).unwrap());
	assert!(store.list().is_empty());
}

#[wasm_bindgen_test]
fn unparseable_storage_reads_as_empty() {
	let key = "test.shows.garbage";
	let store = fresh_store(key);

	storage().set_item(key, "not json at all").unwrap();
	assert!(store.list().is_empty());

	storage()
		.set_item(key, r#"{"an":"object, not an array"}"#)
		.unwrap();
	assert!(store.list().is_empty());
}

#[wasm_bindgen_test]
fn malformed_entries_are_skipped() {
	let key = "test.shows.mixed";
	let store = fresh_store(key);

	storage()
		.set_item(
			key,
			r#"[{"seasons": 2}, {"id": "good", "title": "Dark", "status": "Completed"}]"#,
		)
		.unwrap();

	let shows = store.list();
	assert_eq!(shows.len(), 1);
	assert_eq!(shows[0].id, "good");
	assert_eq!(shows[0].status, Status::Completed);
}
