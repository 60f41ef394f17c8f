use serde::{Deserialize, Serialize};

/// A key press with its modifier state, as reported by a keydown event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// The search field already has focus.
    pub in_search_field: bool,
}

impl KeyChord {
    #[must_use]
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn meta(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meta: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn in_search_field(mut self) -> Self {
        self.in_search_field = true;
        self
    }
}

/// Keys that move focus to the search field.
///
/// Serialized into the page so the script matches chords with the same
/// definition the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchShortcut {
    /// Pressed together with Ctrl or Cmd, case-insensitive.
    pub command_key: &'static str,
    /// Pressed without Ctrl, Cmd or Alt. Typed as text while the search
    /// field has focus.
    pub bare_key: &'static str,
}

pub const SEARCH_SHORTCUT: SearchShortcut = SearchShortcut {
    command_key: "k",
    bare_key: "/",
};

impl SearchShortcut {
    #[must_use]
    pub fn matches(&self, chord: &KeyChord) -> bool {
        let command = (chord.ctrl || chord.meta) && chord.key.to_lowercase() == self.command_key;
        let bare = chord.key == self.bare_key
            && !chord.ctrl
            && !chord.meta
            && !chord.alt
            && !chord.in_search_field;
        command || bare
    }

    /// Human readable hint rendered next to the search field.
    #[must_use]
    pub fn hint(&self) -> String {
        format!(
            "Ctrl {} or {}",
            self.command_key.to_uppercase(),
            self.bare_key
        )
    }
}

/// Ctrl+K, Cmd+K or a bare `/` outside the search field.
#[must_use]
pub fn focuses_search(chord: &KeyChord) -> bool {
    SEARCH_SHORTCUT.matches(chord)
}
