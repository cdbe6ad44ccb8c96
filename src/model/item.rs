//! The interest item value type.

use serde::{Deserialize, Serialize};

/// Opaque reference to an icon asset.
///
/// The core never interprets this; the UI maps it to a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    /// Create a new icon reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the icon name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single interest entry.
///
/// Items are immutable for the lifetime of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestItem {
    /// Display name, assumed unique within the list.
    pub title: String,
    /// Icon reference.
    #[serde(default)]
    pub icon: IconRef,
    /// Whether the interest has been completed/acquired.
    #[serde(default, alias = "is_completed")]
    pub completed: bool,
    /// Free-form category label; empty means uncategorized.
    #[serde(default)]
    pub category: String,
    /// Whether to show the "new" badge.
    #[serde(default)]
    pub is_new: bool,
}

impl InterestItem {
    /// Create a new uncategorized, not-completed item.
    pub fn new(title: impl Into<String>, icon: impl Into<IconRef>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            completed: false,
            category: String::new(),
            is_new: false,
        }
    }

    /// Set the completion flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the "new" badge flag.
    pub fn new_badge(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    /// Whether the item has no category.
    pub fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }
}
