use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use wizardwebb_core::{Catalog, FilterOutcome, StatusClass};

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// One tab-separated line per entry, followed by the count label.
pub(super) fn render_list_text(outcome: &FilterOutcome<'_>) -> String {
    let mut out = String::new();
    if outcome.is_empty() {
        out.push_str("No matches\n");
    }
    for link in &outcome.links {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            link.name,
            link.category_or_default(),
            link.status_class().label(),
            link.link().unwrap_or("-")
        );
    }
    let _ = writeln!(out, "{}", outcome.count_label());
    out
}

#[derive(Debug, Serialize)]
pub(super) struct CatalogSummary {
    pub(super) source: Option<String>,
    pub(super) count: usize,
    pub(super) categories: Vec<String>,
    pub(super) unlinked: usize,
    /// Raw status values other than "ok", with their counts.
    pub(super) flagged_statuses: BTreeMap<String, usize>,
}

pub(super) fn summarize_catalog(catalog: &Catalog) -> CatalogSummary {
    let mut flagged_statuses = BTreeMap::new();
    for link in catalog.links() {
        if link.status_class() == StatusClass::Linked {
            continue;
        }
        let raw = link
            .status
            .as_ref()
            .map_or_else(String::new, |status| status.as_str().to_string());
        *flagged_statuses.entry(raw).or_insert(0) += 1;
    }
    CatalogSummary {
        source: catalog.source().map(|path| path.display().to_string()),
        count: catalog.len(),
        categories: catalog.categories().to_vec(),
        unlinked: catalog.links().iter().filter(|link| !link.has_link()).count(),
        flagged_statuses,
    }
}
