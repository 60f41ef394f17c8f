//! HTML fragments for the card grid and chip row.

use std::fmt::Write as _;

use crate::clipboard::COPY_LABEL;
use crate::filter::FilterOutcome;
use crate::models::LinkRecord;
use crate::view::ChipView;

pub const MAX_CARD_TAGS: usize = 6;

pub const NO_MATCHES_HTML: &str = concat!(
    r#"<div class="notice notice-wide">"#,
    "<strong>No matches</strong>",
    "<p>Try clearing filters, changing your search, or toggling \u{201c}Show unlinked\u{201d}.</p>",
    "</div>",
);

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Grid body for a filter result, or the "no matches" notice.
#[must_use]
pub fn render_grid(outcome: &FilterOutcome<'_>) -> String {
    if outcome.is_empty() {
        return NO_MATCHES_HTML.to_string();
    }
    outcome
        .links
        .iter()
        .map(|link| render_card(link))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_card(link: &LinkRecord) -> String {
    let status = link.status_class();
    let mut card = String::new();
    card.push_str(r#"<div class="card">"#);
    let _ = write!(card, "<h3>{}</h3>", escape_html(&link.name));
    let _ = write!(
        card,
        "<p>{}</p>",
        escape_html(link.description.as_deref().unwrap_or_default())
    );
    if let Some(note) = link.note.as_deref().filter(|note| !note.is_empty()) {
        let _ = write!(card, r#"<div class="smallmuted">{}</div>"#, escape_html(note));
    }

    card.push_str(r#"<div class="meta">"#);
    let _ = write!(
        card,
        r#"<span class="badge {}">{}</span>"#,
        status.badge_class(),
        status.label()
    );
    let _ = write!(
        card,
        r#"<span class="badge">{}</span>"#,
        escape_html(link.category_or_default())
    );
    for tag in link.tags.iter().take(MAX_CARD_TAGS) {
        let _ = write!(card, r#"<span class="badge">{}</span>"#, escape_html(tag));
    }
    card.push_str("</div>");

    card.push_str(r#"<div class="actions">"#);
    match link.link() {
        Some(url) => {
            let url = escape_html(url);
            let _ = write!(
                card,
                r#"<a class="linkbtn" href="{url}" target="_blank" rel="noopener noreferrer">Open &#8599;</a>"#
            );
            let _ = write!(
                card,
                r#"<button class="btn small secondary" data-copy="{url}">{COPY_LABEL}</button>"#
            );
        }
        None => {
            card.push_str(r#"<span class="linkbtn disabled">No link</span>"#);
            let _ = write!(
                card,
                r#"<button class="btn small secondary" disabled>{COPY_LABEL}</button>"#
            );
        }
    }
    card.push_str("</div></div>");
    card
}

#[must_use]
pub fn render_chips(chips: &[ChipView]) -> String {
    chips
        .iter()
        .map(|chip| {
            let class = if chip.active { "chip active" } else { "chip" };
            format!(
                r#"<a class="{class}" href="{}" data-category="{}">{}</a>"#,
                escape_html(&chip.href),
                escape_html(&chip.label),
                escape_html(&chip.label)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}
