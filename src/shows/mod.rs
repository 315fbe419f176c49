//! The shows tracker: a browser-storage-backed CRUD list with a read-only
//! summary screen and a full editor screen.

mod controller;
pub mod store;
pub mod view;

pub use controller::{render_crud, render_summary};
pub use store::{Show, ShowDraft, ShowsStore, Status, StoreError, STORAGE_KEY};
