#![doc(html_root_url = "https://docs.rs/hashdeck/0.1.0")]
#![warn(clippy::pedantic)]

//! A hash-routed single-page widget deck.
//!
//! The interesting part lives in [`router`]: a fragment router that owns the
//! mapping from [***location.hash***](https://developer.mozilla.org/en-US/docs/Web/API/Location/hash)
//! to a render function and guarantees that an outgoing view's resources are
//! released before the next view mounts. Everything else is a route handler
//! conforming to that contract.

pub mod app;
pub mod dom;
pub mod router;
pub mod routes;
pub mod shows;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}
