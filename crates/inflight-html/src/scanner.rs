//! Finds the resource-referencing attribute of an element.
//!
//! Each element has at most one attribute that names an external resource.
//! The built-in table maps tag → attribute → category. When that attribute
//! is absent or failed to decode, configured custom rules get a chance.
//! Whatever is chosen must pass a final gate: the attribute decoded cleanly
//! and the category is defined. Otherwise the element is skipped.

use crate::element::{Attribute, Element, HtmlKeyword};
use crate::rules::UrlValuedAttributes;
use crate::Category;

/// `<link rel>` tokens naming an icon (including Apple touch icons).
const ICON_RELS: [&str; 4] = [
    "icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
    "apple-touch-startup-image",
];

/// `<link rel>` tokens for DNS or resource prefetching.
const PREFETCH_RELS: [&str; 2] = ["prefetch", "dns-prefetch"];

/// `<input type=image src=...>`
const INPUT_TYPE_IMAGE: &str = "image";

/// The attribute chosen for an element, and what it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSlot<'e> {
    /// The attribute holding the URL; never has a decoding error
    pub attribute: &'e Attribute,
    /// The resource category; never [`Category::Undefined`]
    pub category: Category,
}

/// Classifies `element`.
///
/// Returns `None` when no attribute references a resource, which callers
/// treat as "leave this element alone".
pub fn scan_element<'e>(
    element: &'e Element,
    rules: Option<&dyn UrlValuedAttributes>,
) -> Option<ResourceSlot<'e>> {
    if element.attributes().is_empty() {
        return None;
    }

    let (mut attribute, mut category) = builtin_attribute(element);

    if !is_usable(attribute) {
        if let Some((custom_attribute, custom_category)) =
            rules.and_then(|rules| match_custom_rule(element, rules))
        {
            attribute = Some(custom_attribute);
            category = custom_category;
        }
    }

    match attribute {
        Some(attribute) if !attribute.decoding_error() && category.is_defined() => {
            Some(ResourceSlot {
                attribute,
                category,
            })
        }
        Some(attribute) => {
            tracing::trace!(
                element = element.name(),
                attribute = attribute.name(),
                %category,
                "rejected resource attribute"
            );
            None
        }
        None => None,
    }
}

/// A scanner bound to an optional rule list, for repeated use.
#[derive(Clone, Copy, Default)]
pub struct ResourceTagScanner<'r> {
    rules: Option<&'r dyn UrlValuedAttributes>,
}

impl<'r> ResourceTagScanner<'r> {
    /// A scanner using only the built-in table.
    pub fn new() -> Self {
        Self { rules: None }
    }

    /// A scanner that falls back to `rules`.
    pub fn with_rules<R: UrlValuedAttributes>(rules: &'r R) -> Self {
        Self { rules: Some(rules) }
    }

    /// Classifies `element`; see [`scan_element`].
    pub fn scan<'e>(&self, element: &'e Element) -> Option<ResourceSlot<'e>> {
        scan_element(element, self.rules)
    }
}

impl std::fmt::Debug for ResourceTagScanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceTagScanner")
            .field("rules", &self.rules.map(|r| r.rule_count()))
            .finish()
    }
}

fn is_usable(attribute: Option<&Attribute>) -> bool {
    attribute.is_some_and(|attr| !attr.decoding_error())
}

fn builtin_attribute(element: &Element) -> (Option<&Attribute>, Category) {
    use HtmlKeyword::*;

    let found = |name: &str, category: Category| (element.find_attribute(name), category);

    match element.keyword() {
        // https://html.spec.whatwg.org/multipage/links.html#linktypes
        Link => found("href", link_category(element.attribute_value("rel"))),
        Script => found("src", Category::Script),
        Img => found("src", Category::Image),
        Body | Td | Th | Table | Tbody | Tfoot | Thead => found("background", Category::Image),
        Input => {
            let is_image = element
                .attribute_value("type")
                .is_some_and(|ty| ty.eq_ignore_ascii_case(INPUT_TYPE_IMAGE));
            if is_image {
                found("src", Category::Image)
            } else {
                (None, Category::Undefined)
            }
        }
        Command => found("icon", Category::Image),
        A | Area => found("href", Category::Hyperlink),
        Form => found("action", Category::Hyperlink),
        Audio | Video | Source | Track | Embed | Frame | Iframe => {
            found("src", Category::OtherResource)
        }
        Html => found("manifest", Category::OtherResource),
        Blockquote | Q | Ins | Del => found("cite", Category::Hyperlink),
        Button => found("formaction", Category::Hyperlink),
        NotAKeyword => (None, Category::Undefined),
    }
}

/// Refines a `<link>` from hyperlink by its `rel` tokens.
///
/// An icon token stops the scan, a prefetch token does not: in
/// `rel="prefetch icon"` the icon wins, and in `rel="icon prefetch"` the
/// prefetch is never reached.
fn link_category(rel: Option<&str>) -> Category {
    let Some(rel) = rel else {
        return Category::Hyperlink;
    };
    if is_stylesheet_or_alternate(rel) {
        return Category::Stylesheet;
    }

    let mut category = Category::Hyperlink;
    for token in rel_tokens(rel) {
        if ICON_RELS.iter().any(|icon| token.eq_ignore_ascii_case(icon)) {
            category = Category::Image;
            break;
        } else if PREFETCH_RELS.iter().any(|p| token.eq_ignore_ascii_case(p)) {
            category = Category::Prefetch;
        }
    }
    category
}

fn rel_tokens(rel: &str) -> impl Iterator<Item = &str> {
    rel.split(' ').filter(|token| !token.is_empty())
}

/// Returns true if a `rel` value names a stylesheet, alternate or not.
pub fn is_stylesheet_or_alternate(rel: &str) -> bool {
    rel_tokens(rel).any(|token| token.eq_ignore_ascii_case("stylesheet"))
}

/// Returns true if a `rel` value names an alternate stylesheet.
pub fn is_alternate_stylesheet(rel: &str) -> bool {
    is_stylesheet_or_alternate(rel)
        && rel_tokens(rel).any(|token| token.eq_ignore_ascii_case("alternate"))
}

/// The first (rule, attribute) pair that matches wins, rules in order and
/// attributes in declaration order.
fn match_custom_rule<'e>(
    element: &'e Element,
    rules: &dyn UrlValuedAttributes,
) -> Option<(&'e Attribute, Category)> {
    for index in 0..rules.rule_count() {
        let (rule_element, rule_attribute, category) = rules.rule_at(index);
        if !element.name().eq_ignore_ascii_case(rule_element) {
            continue;
        }
        let matched = element
            .attributes()
            .iter()
            .find(|attr| attr.has_name(rule_attribute) && !attr.decoding_error());
        if let Some(attribute) = matched {
            tracing::trace!(
                element = element.name(),
                attribute = attribute.name(),
                rule = index,
                %category,
                "custom attribute rule matched"
            );
            return Some((attribute, category));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    fn scan(element: &Element) -> Option<(&str, Category)> {
        scan_element(element, None).map(|slot| (slot.attribute.name(), slot.category))
    }

    #[test]
    fn test_no_attributes() {
        assert_eq!(scan(&Element::new("img")), None);
    }

    #[test]
    fn test_link_categories() {
        let link = |rel: &str| Element::new("link").with_attr("rel", rel).with_attr("href", "x");

        assert_eq!(scan(&link("stylesheet alternate")), Some(("href", Category::Stylesheet)));
        assert_eq!(scan(&link("Alternate StyleSheet")), Some(("href", Category::Stylesheet)));
        assert_eq!(scan(&link("icon")), Some(("href", Category::Image)));
        assert_eq!(scan(&link("shortcut icon")), Some(("href", Category::Image)));
        assert_eq!(scan(&link("apple-touch-icon-precomposed")), Some(("href", Category::Image)));
        assert_eq!(scan(&link("dns-prefetch")), Some(("href", Category::Prefetch)));
        assert_eq!(scan(&link("canonical")), Some(("href", Category::Hyperlink)));
        assert_eq!(scan(&link("  ")), Some(("href", Category::Hyperlink)));
    }

    #[test]
    fn test_link_rel_precedence_is_asymmetric() {
        assert_eq!(link_category(Some("prefetch icon")), Category::Image);
        assert_eq!(link_category(Some("icon prefetch")), Category::Image);
        assert_eq!(link_category(Some("prefetch  canonical")), Category::Prefetch);
        assert_eq!(link_category(Some("icon stylesheet")), Category::Stylesheet);
        assert_eq!(link_category(None), Category::Hyperlink);
    }

    #[test]
    fn test_link_without_href() {
        let element = Element::new("link").with_attr("rel", "stylesheet");
        assert_eq!(scan(&element), None);
    }

    #[test]
    fn test_input_requires_type_image() {
        let image = Element::new("input").with_attr("type", "IMAGE").with_attr("src", "b.png");
        assert_eq!(scan(&image), Some(("src", Category::Image)));

        let text = Element::new("input").with_attr("type", "text").with_attr("src", "b.png");
        assert_eq!(scan(&text), None);

        let untyped = Element::new("input").with_attr("src", "b.png");
        assert_eq!(scan(&untyped), None);
    }

    #[test]
    fn test_stylesheet_helpers() {
        assert!(is_stylesheet_or_alternate("stylesheet"));
        assert!(is_stylesheet_or_alternate("alternate stylesheet"));
        assert!(!is_stylesheet_or_alternate("stylesheets"));
        assert!(is_alternate_stylesheet("ALTERNATE stylesheet"));
        assert!(!is_alternate_stylesheet("stylesheet"));
        assert!(!is_alternate_stylesheet("alternate"));
    }

    #[test]
    fn test_builtin_decoding_error_falls_back_to_rule() {
        let element = Element::new("img")
            .with_attribute(Attribute::with_decoding_error("src", "%%"))
            .with_attr("data-src", "lazy.png");
        let rules = RuleSet::new().with_rule("IMG", "data-src", Category::Image);

        let slot = scan_element(&element, Some(&rules)).unwrap();
        assert_eq!(slot.attribute.name(), "data-src");
        assert_eq!(slot.category, Category::Image);

        assert_eq!(scan(&element), None);
    }

    #[test]
    fn test_rules_ignored_when_builtin_usable() {
        let element = Element::new("img").with_attr("src", "a.png").with_attr("data-src", "b.png");
        let rules = RuleSet::new().with_rule("img", "data-src", Category::Script);
        let slot = ResourceTagScanner::with_rules(&rules).scan(&element).unwrap();
        assert_eq!(slot.attribute.name(), "src");
        assert_eq!(slot.category, Category::Image);
    }

    #[test]
    fn test_custom_rule_with_undefined_category_is_rejected() {
        let element = Element::new("div").with_attr("data-src", "x.png");
        let rules = RuleSet::new().with_rule("div", "data-src", Category::Undefined);
        assert!(scan_element(&element, Some(&rules)).is_none());
    }
}
