use crate::models::LinkRecord;
use crate::view::{ALL_CATEGORY, ViewState};

/// Visible subset of a link list for one view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub links: Vec<&'a LinkRecord>,
    pub total: usize,
}

impl FilterOutcome<'_> {
    #[must_use]
    pub fn shown(&self) -> usize {
        self.links.len()
    }

    /// Drives the "no matches" notice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn count_label(&self) -> String {
        count_label(self.shown(), self.total)
    }
}

#[must_use]
pub fn count_label(shown: usize, total: usize) -> String {
    format!("{shown} shown / {total} total")
}

/// Stable filter over `links`; source order is kept.
#[must_use]
pub fn filter_links<'a>(links: &'a [LinkRecord], state: &ViewState) -> FilterOutcome<'a> {
    let criteria = Criteria::from_state(state);
    FilterOutcome {
        links: links.iter().filter(|link| criteria.matches(link)).collect(),
        total: links.len(),
    }
}

#[must_use]
pub fn matches(link: &LinkRecord, state: &ViewState) -> bool {
    Criteria::from_state(state).matches(link)
}

/// Lowercased text searched by the query: name, description, category, tags.
#[must_use]
pub fn search_haystack(link: &LinkRecord) -> String {
    [
        link.name.as_str(),
        link.description.as_deref().unwrap_or_default(),
        link.category.as_deref().unwrap_or_default(),
    ]
    .into_iter()
    .chain(link.tags.iter().map(String::as_str))
    .map(str::to_lowercase)
    .collect::<Vec<_>>()
    .join(" ")
}

struct Criteria<'s> {
    needle: Option<String>,
    category: Option<&'s str>,
    require_link: bool,
}

impl<'s> Criteria<'s> {
    fn from_state(state: &'s ViewState) -> Self {
        Self {
            needle: (!state.query.is_empty()).then(|| state.query.to_lowercase()),
            category: Some(state.category.as_str())
                .filter(|category| !category.is_empty() && *category != ALL_CATEGORY),
            require_link: !state.show_unlinked,
        }
    }

    fn matches(&self, link: &LinkRecord) -> bool {
        if let Some(needle) = &self.needle {
            if !search_haystack(link).contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if link.category_or_default() != category {
                return false;
            }
        }
        !(self.require_link && !link.has_link())
    }
}
