//! Pure HTML builders for the shows screens. Everything user-entered passes
//! through [`escape_html`] on the way out.

use super::store::{Show, Status};
use crate::dom::escape_html;

pub struct CrudViewModel<'a> {
	pub shows: &'a [Show],
	pub selected: Option<&'a Show>,
}

#[must_use]
pub fn crud_html(model: &CrudViewModel<'_>) -> String {
	let selected_id = model.selected.map(|show| show.id.as_str());
	let heading = if model.selected.is_some() {
		"Edit show"
	} else {
		"Create show"
	};
	format!(
		r#"<section class="shows" aria-live="polite">
	<header><h2>Shows</h2></header>
	<div class="shows-grid">
		<section>
			<h3>All shows</h3>
			<ul class="shows-list">{list}</ul>
		</section>
		<section>
			<h3>{heading}</h3>
			{form}
		</section>
	</div>
</section>"#,
		list = list_html(model.shows, selected_id),
		form = form_html(model.selected),
	)
}

fn list_html(shows: &[Show], selected_id: Option<&str>) -> String {
	if shows.is_empty() {
		return r#"<li class="shows-empty">No shows yet. Create one to get started.</li>"#.to_owned();
	}
	shows
		.iter()
		.map(|show| {
			let selected = selected_id == Some(show.id.as_str());
			let id = escape_html(&show.id);
			format!(
				r#"<li class="show-row{selected_class}" data-show-id="{id}">
	<button class="show-select" type="button" data-action="select" data-id="{id}" aria-pressed="{selected}">
		<strong>{title}</strong>
		<span>{genre} &middot; {seasons} {season_word} &middot; {status}</span>
	</button>
	<button class="show-delete" type="button" data-action="delete" data-id="{id}">Delete</button>
</li>"#,
				selected_class = if selected { " is-selected" } else { "" },
				title = escape_html(&show.title),
				genre = escape_html(&show.genre),
				seasons = show.seasons,
				season_word = if show.seasons == 1 { "season" } else { "seasons" },
				status = show.status.label(),
			)
		})
		.collect()
}

fn form_html(selected: Option<&Show>) -> String {
	let title = selected.map(|show| escape_html(&show.title)).unwrap_or_default();
	let genre = selected.map(|show| escape_html(&show.genre)).unwrap_or_default();
	let seasons = selected.map_or(1, |show| show.seasons);
	let status = selected.map_or(Status::Planned, |show| show.status);
	let link = selected
		.and_then(|show| show.link.as_deref())
		.map(escape_html)
		.unwrap_or_default();
	let submit_label = if selected.is_some() {
		"Update show"
	} else {
		"Create show"
	};
	let cancel = if selected.is_some() {
		r#"<button type="button" data-action="clear-selection">Cancel editing</button>"#
	} else {
		""
	};
	format!(
		r#"<form class="show-form" data-shows-form novalidate>
	<label>Title * <input name="title" type="text" value="{title}" required></label>
	<label>Genre <input name="genre" type="text" value="{genre}"></label>
	<label>Seasons <input name="seasons" type="number" min="1" value="{seasons}"></label>
	<label>Status <select name="status">{options}</select></label>
	<label>Link <input name="link" type="url" value="{link}"></label>
	<button type="submit">{submit_label}</button>
	{cancel}
</form>"#,
		options = status_options(status),
	)
}

fn status_options(selected: Status) -> String {
	Status::ALL
		.into_iter()
		.map(|status| {
			format!(
				r#"<option value="{label}"{flag}>{label}</option>"#,
				label = status.label(),
				flag = if status == selected { " selected" } else { "" },
			)
		})
		.collect()
}

#[must_use]
pub fn summary_html(shows: &[Show]) -> String {
	let items: String = shows
		.iter()
		.map(|show| {
			let thumb = show.link.as_deref().map_or_else(
				|| "<span aria-hidden=\"true\">&#128250;</span>".to_owned(),
				|link| {
					format!(
						r#"<img src="{}" alt="" loading="lazy">"#,
						escape_html(link)
					)
				},
			);
			format!(
				r#"<li class="show-item">
	<span class="show-item-thumb">{thumb}</span>
	<span class="show-item-content">
		<strong>{title}</strong>
		<span>{genre} &middot; {seasons} {season_word} &middot; {status}</span>
	</span>
</li>"#,
				title = escape_html(&show.title),
				genre = escape_html(&show.genre),
				seasons = show.seasons,
				season_word = if show.seasons == 1 { "season" } else { "seasons" },
				status = show.status.label(),
			)
		})
		.collect();
	format!(
		r#"<p class="hero-label">Shows</p>
<h1 class="hero-title">Your shows list</h1>
<p class="hero-subtitle">A quick overview of your saved shows. Go to Shows CRUD to manage the full library.</p>
<ul class="show-list" aria-label="Saved shows">{items}</ul>"#
	)
}

#[cfg(test)]
mod tests {
	use super::super::store::{Show, Status};
	use super::{crud_html, summary_html, CrudViewModel};

	fn show(id: &str, title: &str) -> Show {
		Show {
			id: id.to_owned(),
			title: title.to_owned(),
			genre: "Drama".to_owned(),
			seasons: 2,
			status: Status::Watching,
			link: None,
		}
	}

	#[test]
	fn empty_list_renders_placeholder() {
		let html = crud_html(&CrudViewModel {
			shows: &[],
			selected: None,
		});
		assert!(html.contains("No shows yet"));
		assert!(html.contains("Create show"));
	}

	#[test]
	fn titles_are_escaped() {
		let shows = [show("a", "<script>alert('xss')</script>")];
		let html = crud_html(&CrudViewModel {
			shows: &shows,
			selected: None,
		});
		assert!(html.contains("&lt;script&gt;"));
		assert!(!html.contains("<script>"));
	}

	#[test]
	fn selected_show_switches_to_edit_mode() {
		let shows = [show("a", "Dark"), show("b", "Patriot")];
		let html = crud_html(&CrudViewModel {
			shows: &shows,
			selected: Some(&shows[1]),
		});
		assert!(html.contains("Edit show"));
		assert!(html.contains("Update show"));
		assert!(html.contains("clear-selection"));
		assert_eq!(html.matches(" is-selected").count(), 1);
		assert!(html.contains(r#"<option value="Watching" selected>"#));
	}

	#[test]
	fn summary_uses_a_placeholder_thumb_without_link() {
		let mut with_link = show("a", "Dark");
		with_link.link = Some("https://example.com/dark.jpg".to_owned());
		let html = summary_html(&[with_link, show("b", "Patriot")]);
		assert_eq!(html.matches("<img").count(), 1);
		assert!(html.contains("https://example.com/dark.jpg"));
	}
}
