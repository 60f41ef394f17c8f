use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_CATEGORY: &str = "Other";
pub const DEFAULT_STATUS: &str = "ok";
pub const UNNAMED: &str = "(Unnamed)";

/// One directory entry. Immutable for the lifetime of a loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        serialize_with = "empty_when_missing",
        deserialize_with = "missing_when_empty"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
    #[serde(
        default,
        serialize_with = "empty_when_missing",
        deserialize_with = "missing_when_empty"
    )]
    pub note: Option<String>,
}

// Free-text fields are always present in JSON, as "" when missing.
fn empty_when_missing<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}

fn missing_when_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}

impl LinkRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            tags: Vec::new(),
            url: None,
            status: None,
            note: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(LinkStatus::new(status));
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Category used for chip matching; a missing category counts as "Other".
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// The destination URL, ignoring empty values.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn has_link(&self) -> bool {
        self.link().is_some()
    }

    #[must_use]
    pub fn status_class(&self) -> StatusClass {
        self.status
            .as_ref()
            .map_or(StatusClass::Linked, LinkStatus::class)
    }
}

/// Raw status value as written in the catalog.
///
/// The set of values is open: only `ok` and `omitted` have a dedicated
/// meaning, every other value is shown as a caution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkStatus(String);

impl LinkStatus {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn class(&self) -> StatusClass {
        StatusClass::classify(&self.0)
    }
}

impl Default for LinkStatus {
    fn default() -> Self {
        Self(DEFAULT_STATUS.to_string())
    }
}

impl Display for LinkStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Linked,
    Omitted,
    Caution,
}

impl StatusClass {
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "" | "ok" => Self::Linked,
            "omitted" => Self::Omitted,
            _ => Self::Caution,
        }
    }

    #[must_use]
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::Linked => "ok",
            Self::Omitted => "omitted",
            Self::Caution => "caution",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Linked => "Linked",
            Self::Omitted => "Unlinked by default",
            Self::Caution => "Caution",
        }
    }
}
