//! Semantic categories for resource-referencing attributes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What kind of resource an attribute points at.
///
/// Downstream filters pick their rewrite strategy from this: scripts get
/// minified, images may be inlined, hyperlinks are left to URL rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    /// A navigational link (`<a href>`, `<form action>`, ...)
    Hyperlink,
    /// External script (`<script src>`)
    Script,
    /// Image, including favicons and backgrounds
    Image,
    /// CSS stylesheet (`<link rel=stylesheet>`)
    Stylesheet,
    /// `<link rel=prefetch>` or `dns-prefetch` target
    Prefetch,
    /// Media, frames, manifests and everything else fetched by the page
    OtherResource,
    /// Not classified; never returned alongside an attribute
    #[default]
    Undefined,
}

impl Category {
    /// Every category, `Undefined` last.
    pub const ALL: [Category; 7] = [
        Category::Hyperlink,
        Category::Script,
        Category::Image,
        Category::Stylesheet,
        Category::Prefetch,
        Category::OtherResource,
        Category::Undefined,
    ];

    /// Returns the configuration spelling of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hyperlink => "hyperlink",
            Category::Script => "script",
            Category::Image => "image",
            Category::Stylesheet => "stylesheet",
            Category::Prefetch => "prefetch",
            Category::OtherResource => "other-resource",
            Category::Undefined => "undefined",
        }
    }

    /// Returns true unless this is [`Category::Undefined`].
    pub fn is_defined(self) -> bool {
        self != Category::Undefined
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Case-insensitive; `_` may be used in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}
