use wizardwebb_core::clipboard::{CopyOutcome, copy_feedback};
use wizardwebb_core::markdown::render_markdown_html;
use wizardwebb_core::render::{escape_html, render_chips, render_grid};
use wizardwebb_core::shortcut::SEARCH_SHORTCUT;
use wizardwebb_core::view::ALL_CATEGORY;
use wizardwebb_core::{Catalog, ViewEvent, ViewState};

pub const INDEX_CSS: &str = include_str!("../assets/index.css");
pub const INDEX_JS: &str = include_str!("../assets/index.js");

const ABOUT_MD: &str = include_str!("../assets/about.md");

pub fn render_index_page(app_name: &str, catalog: &Catalog, view: &ViewState) -> String {
    let outcome = catalog.filter(view);
    let chips = render_chips(&view.chips(&catalog.chip_labels()));
    let toggle_href = view.apply(ViewEvent::ToggleUnlinked).to_href();
    let clear_href = view.apply(ViewEvent::ClearFilters).to_href();
    let feedback = serde_json::json!({
        "copied": copy_feedback(CopyOutcome::Copied),
        "failed": copy_feedback(CopyOutcome::Failed),
    });

    let app = escape_html(app_name);
    let query = escape_html(&view.query);
    let category = escape_html(&view.category);
    let hidden_category = if view.category.is_empty() || view.category == ALL_CATEGORY {
        String::new()
    } else {
        format!(r#"<input type="hidden" name="category" value="{category}">"#)
    };
    let hidden_toggle = if view.show_unlinked {
        ""
    } else {
        r#"<input type="hidden" name="show_unlinked" value="false">"#
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{app}</title>
<link rel="stylesheet" href="/assets/index.css">
<script defer src="/assets/index.js"></script>
</head>
<body>
<header class="top">
  <div class="brand">
    <div class="logo"></div>
    <div>
      <div class="title">{app}</div>
      <div class="sub">Noir directory of web tools &bull; search &bull; filter &bull; save time</div>
    </div>
  </div>
  <nav class="pills"><a class="pill" href="/about">About</a><a class="pill" href="/api/links">JSON</a></nav>
</header>
<main id="app"
  data-query="{query}"
  data-category="{category}"
  data-show-unlinked="{show_unlinked}"
  data-copy-feedback="{copy_feedback}"
  data-search-shortcut="{search_shortcut}">
  <form class="controls" method="get" action="/" role="search">
    <input id="q" name="q" type="search" value="{query}" placeholder="Search (name, description, tags)..." autocomplete="off">
    {hidden_category}{hidden_toggle}
    <span class="hint">{hint}</span>
    <a id="toggleUnlinked" class="btn secondary" href="{toggle_href}">{toggle_label}</a>
    <a id="clear" class="btn" href="{clear_href}">Clear</a>
  </form>
  <div id="chips" class="chips">{chips}</div>
  <div id="count" class="smallmuted">{count}</div>
  <div id="grid" class="grid">
{grid}
  </div>
</main>
</body>
</html>
"#,
        show_unlinked = view.show_unlinked,
        copy_feedback = escape_html(&feedback.to_string()),
        search_shortcut = escape_html(&serde_json::json!(SEARCH_SHORTCUT).to_string()),
        hint = escape_html(&SEARCH_SHORTCUT.hint()),
        toggle_href = escape_html(&toggle_href),
        toggle_label = view.toggle_label(),
        clear_href = escape_html(&clear_href),
        count = outcome.count_label(),
        grid = render_grid(&outcome),
    )
}

pub fn render_about_page(app_name: &str) -> String {
    let app = escape_html(app_name);
    let body = render_markdown_html(&ABOUT_MD.replace("{app}", app_name));
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>About &middot; {app}</title>
<link rel="stylesheet" href="/assets/index.css">
</head>
<body>
<header class="top">
  <div class="brand"><div class="logo"></div><div class="title">{app}</div></div>
  <nav class="pills"><a class="pill" href="/">Directory</a></nav>
</header>
<main class="prose">
{body}
</main>
</body>
</html>
"#
    )
}
