use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_norway::Value;

use crate::error::{Result, WizardError};
use crate::filter::{FilterOutcome, filter_links};
use crate::models::{DEFAULT_CATEGORY, DEFAULT_STATUS, LinkRecord, LinkStatus, UNNAMED};
use crate::view::{ALL_CATEGORY, ViewState};

/// Categories that lead the chip row when present, in this order.
pub const PREFERRED_CATEGORIES: [&str; 7] = [
    "Search",
    "Research",
    "OSINT",
    "Security & Privacy",
    "Web Tools",
    "Freebies & Deals",
    "Other",
];

/// Read-only link catalog loaded once per process.
#[derive(Debug, Clone)]
pub struct Catalog {
    links: Vec<LinkRecord>,
    categories: Vec<String>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
    etag: String,
}

impl Catalog {
    #[must_use]
    pub fn from_links(links: Vec<LinkRecord>) -> Self {
        let categories = unique_categories(&links);
        let etag = catalog_etag(&links);
        Self {
            links,
            categories,
            source: None,
            loaded_at: Utc::now(),
            etag,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let links = load_links(path)?;
        let mut catalog = Self::from_links(links);
        catalog.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            count = catalog.len(),
            categories = catalog.categories.len(),
            "loaded link catalog"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Chip row labels: the implicit "All" followed by the catalog categories.
    #[must_use]
    pub fn chip_labels(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORY.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    #[must_use]
    pub fn etag(&self) -> &str {
        &self.etag
    }

    #[must_use]
    pub fn filter(&self, state: &ViewState) -> FilterOutcome<'_> {
        filter_links(&self.links, state)
    }
}

pub fn load_links(path: &Path) -> Result<Vec<LinkRecord>> {
    let raw = fs::read_to_string(path)?;
    parse_links(&raw)
}

/// Parse and normalize a YAML list of link items.
pub fn parse_links(raw: &str) -> Result<Vec<LinkRecord>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document: Value = serde_norway::from_str(raw)?;
    let items = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(items) => items,
        _ => {
            return Err(WizardError::InvalidCatalog(
                "links file must contain a YAML list of items".to_string(),
            ));
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_mapping() {
            tracing::debug!(index, "skipping non-mapping catalog item");
            continue;
        }
        out.push(normalize_item(index, item));
    }
    Ok(out)
}

fn normalize_item(index: usize, item: &Value) -> LinkRecord {
    let field = |key: &str| item.get(key).and_then(scalar_text);
    let trimmed = |key: &str| {
        field(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let present = |key: &str| item.get(key).filter(|value| !is_blank(value));

    LinkRecord {
        id: present("id")
            .and_then(scalar_text)
            .unwrap_or_else(|| format!("item_{}", index + 1)),
        name: trimmed("name").unwrap_or_else(|| UNNAMED.to_string()),
        description: trimmed("description"),
        category: Some(trimmed("category").unwrap_or_else(|| DEFAULT_CATEGORY.to_string())),
        tags: normalize_tags(present("tags")),
        url: present("url")
            .and_then(scalar_text)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty()),
        status: Some(LinkStatus::new(
            trimmed("status")
                .map(|status| status.to_lowercase())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        )),
        note: trimmed("note"),
    }
}

fn normalize_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
    }
}

/// Values that count as absent for `id`, `url` and `tags`: null, `false`,
/// zero and empty strings or collections.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_blank(&tagged.value),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Distinct categories with the preferred ones first, the rest sorted.
#[must_use]
pub fn unique_categories(links: &[LinkRecord]) -> Vec<String> {
    let present = links
        .iter()
        .map(|link| link.category_or_default().to_string())
        .collect::<BTreeSet<_>>();

    let mut ordered = PREFERRED_CATEGORIES
        .iter()
        .filter(|preferred| present.contains(**preferred))
        .map(|preferred| (*preferred).to_string())
        .collect::<Vec<_>>();
    for category in present {
        if !ordered.contains(&category) {
            ordered.push(category);
        }
    }
    ordered
}

fn catalog_etag(links: &[LinkRecord]) -> String {
    let mut hasher = blake3::Hasher::new();
    for link in links {
        hash_field(&mut hasher, Some(&link.id));
        hash_field(&mut hasher, Some(&link.name));
        hash_field(&mut hasher, link.description.as_deref());
        hash_field(&mut hasher, link.category.as_deref());
        hasher.update(&(link.tags.len() as u64).to_le_bytes());
        for tag in &link.tags {
            hash_field(&mut hasher, Some(tag));
        }
        hash_field(&mut hasher, link.url.as_deref());
        hash_field(&mut hasher, link.status.as_ref().map(LinkStatus::as_str));
        hash_field(&mut hasher, link.note.as_deref());
    }
    hasher.finalize().to_hex().to_string()
}

// Length-prefixed so adjacent fields cannot run into each other.
fn hash_field(hasher: &mut blake3::Hasher, value: Option<&str>) {
    match value {
        Some(text) => {
            hasher.update(&[1]);
            hasher.update(&(text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        }
        None => {
            hasher.update(&[0]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusClass;

    const SAMPLE: &str = r#"
- id: ddg
  name: "  DuckDuckGo "
  url: https://duckduckgo.com
  description: Private search
  category: Search
  tags: [search, privacy]
- name: ""
  category: "  "
  tags: single
  status: "  Omitted "
- "not a mapping"
- name: Shodan
  url: "   "
  category: OSINT
  status: paywalled
  note: needs an account
  tags:
    - 2024
    - true
- id: 0
  name: Falsy
  url: false
  tags: ""
- id: ""
  name: Zeroes
  url: 0
  tags: []
"#;

    #[test]
    fn parse_links_normalizes_every_field() {
        let links = parse_links(SAMPLE).expect("parse");
        assert_eq!(links.len(), 5);

        let ddg = &links[0];
        assert_eq!(ddg.id, "ddg");
        assert_eq!(ddg.name, "DuckDuckGo");
        assert_eq!(ddg.url.as_deref(), Some("https://duckduckgo.com"));
        assert_eq!(ddg.tags, vec!["search", "privacy"]);
        assert_eq!(ddg.status.as_ref().map(LinkStatus::as_str), Some("ok"));

        let unnamed = &links[1];
        assert_eq!(unnamed.id, "item_2");
        assert_eq!(unnamed.name, "(Unnamed)");
        assert_eq!(unnamed.category.as_deref(), Some("Other"));
        assert_eq!(unnamed.tags, vec!["single"]);
        assert_eq!(unnamed.status_class(), StatusClass::Omitted);
        assert_eq!(unnamed.url, None);

        let shodan = &links[2];
        assert_eq!(shodan.id, "item_4");
        assert_eq!(shodan.url, None);
        assert_eq!(shodan.note.as_deref(), Some("needs an account"));
        assert_eq!(shodan.tags, vec!["2024", "true"]);
        assert_eq!(shodan.status_class(), StatusClass::Caution);

        let falsy = &links[3];
        assert_eq!(falsy.id, "item_5");
        assert_eq!(falsy.url, None);
        assert!(falsy.tags.is_empty());

        let zeroes = &links[4];
        assert_eq!(zeroes.id, "item_6");
        assert_eq!(zeroes.url, None);
        assert!(zeroes.tags.is_empty());
    }

    #[test]
    fn falsy_url_entry_is_hidden_with_unlinked() {
        let catalog = Catalog::from_links(
            parse_links("- name: A\n  url: false\n- name: B\n  url: https://b\n").expect("parse"),
        );
        let state = ViewState {
            show_unlinked: false,
            ..ViewState::default()
        };
        let outcome = catalog.filter(&state);
        assert_eq!(outcome.shown(), 1);
        assert_eq!(outcome.links[0].name, "B");
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        assert!(parse_links("").expect("empty").is_empty());
        assert!(parse_links("~\n").expect("null").is_empty());
    }

    #[test]
    fn non_list_document_is_rejected() {
        let err = parse_links("name: solo\n").expect_err("mapping root");
        assert_eq!(err.code(), "INVALID_CATALOG");
        assert!(err.to_string().contains("YAML list"));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let err = parse_links("- name: [unterminated\n").expect_err("bad yaml");
        assert_eq!(err.code(), "YAML_ERROR");
    }

    #[test]
    fn unique_categories_prefers_known_order_then_sorts() {
        let links = vec![
            LinkRecord::new("1", "a").with_category("Zines"),
            LinkRecord::new("2", "b").with_category("Other"),
            LinkRecord::new("3", "c").with_category("Search"),
            LinkRecord::new("4", "d").with_category("Archives"),
            LinkRecord::new("5", "e").with_category("OSINT"),
            LinkRecord::new("6", "f"),
        ];
        assert_eq!(
            unique_categories(&links),
            vec!["Search", "OSINT", "Other", "Archives", "Zines"]
        );
    }

    #[test]
    fn chip_labels_start_with_all() {
        let catalog = Catalog::from_links(vec![
            LinkRecord::new("1", "a").with_category("Docs"),
            LinkRecord::new("2", "b").with_category("Tools"),
        ]);
        assert_eq!(catalog.chip_labels(), vec!["All", "Docs", "Tools"]);
    }

    #[test]
    fn load_reads_file_and_records_source() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("links.yml");
        fs::write(&path, SAMPLE).expect("write catalog");

        let catalog = Catalog::load(&path).expect("load");
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.source(), Some(path.as_path()));
        assert_eq!(catalog.categories(), ["Search", "OSINT", "Other"]);
        assert_eq!(catalog.etag().len(), 64);
    }

    #[test]
    fn etag_tracks_catalog_content() {
        let first = Catalog::from_links(vec![LinkRecord::new("1", "a")]);
        let same = Catalog::from_links(vec![LinkRecord::new("1", "a")]);
        let other = Catalog::from_links(vec![LinkRecord::new("1", "b")]);
        assert_eq!(first.etag(), same.etag());
        assert_ne!(first.etag(), other.etag());

        let split = Catalog::from_links(vec![LinkRecord::new("1", "a").with_tags(["ab"])]);
        let joined = Catalog::from_links(vec![LinkRecord::new("1", "a").with_tags(["a", "b"])]);
        assert_ne!(split.etag(), joined.etag());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = Catalog::load(&temp.path().join("absent.yml")).expect_err("missing");
        assert_eq!(err.code(), "IO_ERROR");
    }
}
