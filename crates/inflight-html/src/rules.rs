//! Custom (element, attribute) → category rules from configuration.
//!
//! Sites often keep resource URLs in attributes HTML does not define, e.g.
//! lazy-loading images in `<div data-src=...>`. These rules let the scanner
//! classify them. They are consulted only when the built-in table finds
//! nothing usable.

use crate::Category;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One configured rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributeRule {
    /// Tag name to match, ASCII case-insensitive
    pub element: String,
    /// Attribute name to match, ASCII case-insensitive
    pub attribute: String,
    /// Category reported on a match
    pub category: Category,
}

impl CustomAttributeRule {
    /// Creates a rule.
    pub fn new(
        element: impl Into<String>,
        attribute: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            element: element.into(),
            attribute: attribute.into(),
            category,
        }
    }
}

/// Read access to an ordered list of custom rules.
pub trait UrlValuedAttributes {
    /// Number of rules.
    fn rule_count(&self) -> usize;

    /// Returns `(element, attribute, category)` for rule `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= rule_count()`.
    fn rule_at(&self, index: usize) -> (&str, &str, Category);
}

impl UrlValuedAttributes for [CustomAttributeRule] {
    fn rule_count(&self) -> usize {
        self.len()
    }

    fn rule_at(&self, index: usize) -> (&str, &str, Category) {
        let rule = &self[index];
        (&rule.element, &rule.attribute, rule.category)
    }
}

impl UrlValuedAttributes for Vec<CustomAttributeRule> {
    fn rule_count(&self) -> usize {
        self.as_slice().rule_count()
    }

    fn rule_at(&self, index: usize) -> (&str, &str, Category) {
        self.as_slice().rule_at(index)
    }
}

impl<T: UrlValuedAttributes + ?Sized> UrlValuedAttributes for Arc<T> {
    fn rule_count(&self) -> usize {
        (**self).rule_count()
    }

    fn rule_at(&self, index: usize) -> (&str, &str, Category) {
        (**self).rule_at(index)
    }
}

/// An ordered rule list, built once at startup and read-only afterwards.
///
/// Deserializes from a sequence of tables:
///
/// ```toml
/// [[url_valued_attribute]]
/// element = "div"
/// attribute = "data-src"
/// category = "image"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<CustomAttributeRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Rules are tried in insertion order.
    pub fn push(&mut self, rule: CustomAttributeRule) {
        self.rules.push(rule);
    }

    /// Appends a rule, builder style.
    pub fn with_rule(
        mut self,
        element: impl Into<String>,
        attribute: impl Into<String>,
        category: Category,
    ) -> Self {
        self.push(CustomAttributeRule::new(element, attribute, category));
        self
    }

    /// Iterates the rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CustomAttributeRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<CustomAttributeRule>> for RuleSet {
    fn from(rules: Vec<CustomAttributeRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<CustomAttributeRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = CustomAttributeRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CustomAttributeRule;
    type IntoIter = std::slice::Iter<'a, CustomAttributeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl UrlValuedAttributes for RuleSet {
    fn rule_count(&self) -> usize {
        self.rules.rule_count()
    }

    fn rule_at(&self, index: usize) -> (&str, &str, Category) {
        self.rules.rule_at(index)
    }
}
