use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};

pub const ALL_CATEGORY: &str = "All";
pub const HIDE_UNLINKED_LABEL: &str = "Hide unlinked";
pub const SHOW_UNLINKED_LABEL: &str = "Show unlinked";

/// Filter controls of the directory page.
///
/// Values are replaced as a whole by [`ViewState::apply`]; there is no
/// history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub query: String,
    pub category: String,
    pub show_unlinked: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORY.to_string(),
            show_unlinked: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    QueryChanged(String),
    CategorySelected(String),
    ToggleUnlinked,
    ClearFilters,
}

impl ViewState {
    #[must_use]
    pub fn apply(&self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::QueryChanged(query) => Self {
                query,
                ..self.clone()
            },
            ViewEvent::CategorySelected(category) => Self {
                category,
                ..self.clone()
            },
            ViewEvent::ToggleUnlinked => Self {
                show_unlinked: !self.show_unlinked,
                ..self.clone()
            },
            ViewEvent::ClearFilters => Self::default(),
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.show_unlinked {
            HIDE_UNLINKED_LABEL
        } else {
            SHOW_UNLINKED_LABEL
        }
    }

    #[must_use]
    pub fn is_active_chip(&self, label: &str) -> bool {
        self.category == label || (self.category.is_empty() && label == ALL_CATEGORY)
    }

    /// Chip row for `labels`, marking the selected one.
    #[must_use]
    pub fn chips(&self, labels: &[String]) -> Vec<ChipView> {
        labels
            .iter()
            .map(|label| ChipView {
                label: label.clone(),
                active: self.is_active_chip(label),
                href: self
                    .apply(ViewEvent::CategorySelected(label.clone()))
                    .to_href(),
            })
            .collect()
    }

    /// Build a state from optional request parameters, falling back to defaults.
    pub fn from_params(
        query: Option<String>,
        category: Option<String>,
        show_unlinked: Option<&str>,
    ) -> Result<Self> {
        let defaults = Self::default();
        let show_unlinked = match show_unlinked {
            None => defaults.show_unlinked,
            Some(raw) => parse_flag(raw)?,
        };
        Ok(Self {
            query: query.unwrap_or(defaults.query),
            category: category
                .filter(|category| !category.is_empty())
                .unwrap_or(defaults.category),
            show_unlinked,
        })
    }

    /// Query string carrying only the fields that differ from the defaults.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if !self.query.is_empty() {
            pairs.push(format!("q={}", encode_component(&self.query)));
        }
        if !self.category.is_empty() && self.category != ALL_CATEGORY {
            pairs.push(format!("category={}", encode_component(&self.category)));
        }
        if !self.show_unlinked {
            pairs.push("show_unlinked=false".to_string());
        }
        pairs.join("&")
    }

    #[must_use]
    pub fn to_href(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{query}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub label: String,
    pub active: bool,
    pub href: String,
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => Err(WizardError::Validation(format!(
            "show_unlinked must be a boolean flag, got: {other}"
        ))),
    }
}
