//! Browser-storage-backed store for the shows list.
//!
//! The whole collection lives under one key as a flat JSON array. Reads are
//! forgiving: a missing or unparseable value is the empty list, and a
//! malformed entry is skipped without discarding its neighbours. Writes
//! surface as [`StoreError`] so callers decide how loudly to fail.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::Storage;

/// The well-known [***localStorage***](https://developer.mozilla.org/en-US/docs/Web/API/Window/localStorage) key.
pub const STORAGE_KEY: &str = "hashdeck.shows";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Status {
	#[default]
	Planned,
	Watching,
	Completed,
	Dropped,
}

impl Status {
	pub const ALL: [Self; 4] = [Self::Planned, Self::Watching, Self::Completed, Self::Dropped];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Planned => "Planned",
			Self::Watching => "Watching",
			Self::Completed => "Completed",
			Self::Dropped => "Dropped",
		}
	}

	/// Unknown labels fall back to [`Status::Planned`].
	#[must_use]
	pub fn from_label(label: &str) -> Self {
		Self::ALL
			.into_iter()
			.find(|status| status.label() == label.trim())
			.unwrap_or_default()
	}
}

impl<'de> Deserialize<'de> for Status {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let label = String::deserialize(deserializer)?;
		Ok(Self::from_label(&label))
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Show {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub genre: String,
	#[serde(default = "default_seasons")]
	pub seasons: u32,
	#[serde(default)]
	pub status: Status,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
}

/// Caller-supplied fields of a show; the store assigns the identifier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowDraft {
	pub title: String,
	pub genre: String,
	pub seasons: u32,
	pub status: Status,
	pub link: Option<String>,
}

fn default_seasons() -> u32 {
	1
}

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("shows could not be encoded: {0}")]
	Encode(#[from] serde_json::Error),
	#[error("browser storage rejected the write: {0}")]
	Write(String),
}

pub struct ShowsStore {
	storage: Storage,
	key: String,
}

impl ShowsStore {
	#[must_use]
	pub fn new(storage: Storage) -> Self {
		Self::with_key(storage, STORAGE_KEY)
	}

	/// A store over a caller-chosen key, so tests can isolate themselves.
	#[must_use]
	pub fn with_key(storage: Storage, key: impl Into<String>) -> Self {
		Self {
			storage,
			key: key.into(),
		}
	}

	/// The store over the window's local storage and [`STORAGE_KEY`].
	#[must_use]
	pub fn open() -> Self {
		let storage = crate::dom::window()
			.local_storage()
			.expect_throw("hashdeck: local storage is not accessible")
			.expect_throw("hashdeck: local storage is not available");
		Self::new(storage)
	}

	fn read(&self) -> Vec<Show> {
		self.storage
			.get_item(&self.key)
			.ok()
			.flatten()
			.map(|raw| parse_shows(&raw))
			.unwrap_or_default()
	}

	fn write(&self, shows: &[Show]) -> Result<(), StoreError> {
		let encoded = serde_json::to_string(shows)?;
		self.storage
			.set_item(&self.key, &encoded)
			.map_err(|error| StoreError::Write(format!("{error:?}")))
	}

	#[must_use]
	pub fn list(&self) -> Vec<Show> {
		self.read()
	}

	/// Writes one starter record into empty storage and returns the list.
	pub fn seed_if_empty(&self) -> Result<Vec<Show>, StoreError> {
		let shows = self.read();
		if !shows.is_empty() {
			return Ok(shows);
		}
		let seeded = vec![sanitize(Show {
			id: Uuid::new_v4().to_string(),
			title: "Severance".to_owned(),
			genre: "Science Fiction".to_owned(),
			seasons: 2,
			status: Status::Watching,
			link: None,
		})];
		self.write(&seeded)?;
		Ok(seeded)
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<Show> {
		self.read().into_iter().find(|show| show.id == id)
	}

	pub fn create(&self, draft: ShowDraft) -> Result<Show, StoreError> {
		let show = sanitize(from_draft(Uuid::new_v4().to_string(), draft));
		let mut shows = self.read();
		shows.push(show.clone());
		self.write(&shows)?;
		Ok(show)
	}

	/// Replaces the fields of the show with `id`, keeping its identifier.
	/// Returns `None` when no such show exists (nothing is written).
	pub fn update(&self, id: &str, draft: ShowDraft) -> Result<Option<Show>, StoreError> {
		let mut shows = self.read();
		let Some(position) = shows.iter().position(|show| show.id == id) else {
			return Ok(None);
		};
		let updated = sanitize(from_draft(shows[position].id.clone(), draft));
		shows[position] = updated.clone();
		self.write(&shows)?;
		Ok(Some(updated))
	}

	/// Returns whether a show was removed.
	pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
		let mut shows = self.read();
		let before = shows.len();
		shows.retain(|show| show.id != id);
		if shows.len() == before {
			return Ok(false);
		}
		self.write(&shows)?;
		Ok(true)
	}
}

fn from_draft(id: String, draft: ShowDraft) -> Show {
	Show {
		id,
		title: draft.title,
		genre: draft.genre,
		seasons: draft.seasons,
		status: draft.status,
		link: draft.link,
	}
}

pub(crate) fn parse_shows(raw: &str) -> Vec<Show> {
	let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
		return Vec::new();
	};
	let Some(items) = value.as_array() else {
		return Vec::new();
	};
	items
		.iter()
		.filter_map(|item| serde_json::from_value::<Show>(item.clone()).ok())
		.map(sanitize)
		.collect()
}

fn sanitize(show: Show) -> Show {
	let link = show
		.link
		.map(|link| link.trim().to_owned())
		.filter(|link| !link.is_empty());
	Show {
		id: show.id,
		title: show.title.trim().to_owned(),
		genre: show.genre.trim().to_owned(),
		seasons: show.seasons.max(1),
		status: show.status,
		link,
	}
}
