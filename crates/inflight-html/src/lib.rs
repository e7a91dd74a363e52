// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # inflight-html
//!
//! Resource tag scanning for HTML rewriting filters.
//!
//! Given one parsed element, [`scan_element`] picks the single attribute
//! that references an external resource and says what kind of resource it
//! is. Rewriters use the answer to decide whether to minify, inline, or
//! leave a URL alone.
//!
//! ## Example
//!
//! ```
//! use inflight_html::{scan_element, Category, Element, RuleSet};
//!
//! let link = Element::new("link")
//!     .with_attr("rel", "alternate stylesheet")
//!     .with_attr("href", "print.css");
//! let slot = scan_element(&link, None).unwrap();
//! assert_eq!(slot.attribute.name(), "href");
//! assert_eq!(slot.category, Category::Stylesheet);
//!
//! // Custom rules cover attributes HTML does not define.
//! let rules = RuleSet::new().with_rule("div", "data-src", Category::Image);
//! let lazy = Element::new("div").with_attr("data-src", "hero.jpg");
//! assert_eq!(scan_element(&lazy, Some(&rules)).unwrap().category, Category::Image);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod element;
pub mod rules;
pub mod scanner;

pub use category::{Category, ParseCategoryError};
pub use element::{Attribute, Element, HtmlKeyword};
pub use rules::{CustomAttributeRule, RuleSet, UrlValuedAttributes};
pub use scanner::{
    ResourceSlot, ResourceTagScanner, is_alternate_stylesheet, is_stylesheet_or_alternate,
    scan_element,
};
