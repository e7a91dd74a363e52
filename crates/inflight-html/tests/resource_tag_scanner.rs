//! End-to-end classification tests for the resource tag scanner.

use inflight_html::{
    Attribute, Category, CustomAttributeRule, Element, ResourceTagScanner, RuleSet,
    UrlValuedAttributes, scan_element,
};
use std::sync::Arc;
use std::thread;

fn classify(element: &Element) -> Option<(String, Category)> {
    scan_element(element, None).map(|slot| (slot.attribute.name().to_string(), slot.category))
}

fn expect(element: Element, attribute: &str, category: Category) {
    assert_eq!(
        classify(&element),
        Some((attribute.to_string(), category)),
        "classifying {element}"
    );
}

#[test]
fn test_builtin_table() {
    let cases: &[(&str, &str, Category)] = &[
        ("script", "src", Category::Script),
        ("img", "src", Category::Image),
        ("body", "background", Category::Image),
        ("td", "background", Category::Image),
        ("th", "background", Category::Image),
        ("table", "background", Category::Image),
        ("tbody", "background", Category::Image),
        ("tfoot", "background", Category::Image),
        ("thead", "background", Category::Image),
        ("command", "icon", Category::Image),
        ("a", "href", Category::Hyperlink),
        ("area", "href", Category::Hyperlink),
        ("form", "action", Category::Hyperlink),
        ("audio", "src", Category::OtherResource),
        ("video", "src", Category::OtherResource),
        ("source", "src", Category::OtherResource),
        ("track", "src", Category::OtherResource),
        ("embed", "src", Category::OtherResource),
        ("frame", "src", Category::OtherResource),
        ("iframe", "src", Category::OtherResource),
        ("html", "manifest", Category::OtherResource),
        ("blockquote", "cite", Category::Hyperlink),
        ("q", "cite", Category::Hyperlink),
        ("ins", "cite", Category::Hyperlink),
        ("del", "cite", Category::Hyperlink),
        ("button", "formaction", Category::Hyperlink),
        ("link", "href", Category::Hyperlink),
    ];

    for &(tag, attribute, category) in cases {
        expect(
            Element::new(tag).with_attr("id", "x").with_attr(attribute, "/r"),
            attribute,
            category,
        );
        expect(
            Element::new(tag.to_ascii_uppercase()).with_attr(attribute.to_ascii_uppercase(), "/r"),
            &attribute.to_ascii_uppercase(),
            category,
        );
    }
}

#[test]
fn test_unknown_tag_without_rules() {
    assert_eq!(classify(&Element::new("div").with_attr("src", "a.png")), None);
}

#[test]
fn test_wrong_attribute_for_tag() {
    assert_eq!(classify(&Element::new("img").with_attr("href", "a.png")), None);
    assert_eq!(classify(&Element::new("a").with_attr("src", "a.png")), None);
}

#[test]
fn test_valueless_attribute_is_accepted() {
    let element = Element::new("script").with_attribute(Attribute::valueless("src"));
    expect(element, "src", Category::Script);
}

#[test]
fn test_decoded_value_drives_rel() {
    let link = Element::new("link")
        .with_attribute(Attribute::decoded("rel", "style&#115;heet", "stylesheet"))
        .with_attr("href", "a.css");
    expect(link, "href", Category::Stylesheet);

    let broken_rel = Element::new("link")
        .with_attribute(Attribute::with_decoding_error("rel", "&#xZZ;"))
        .with_attr("href", "a.css");
    expect(broken_rel, "href", Category::Hyperlink);
}

#[test]
fn test_link_rel_variants() {
    let link = |rel: &str| Element::new("link").with_attr("rel", rel).with_attr("href", "r");
    expect(link("stylesheet"), "href", Category::Stylesheet);
    expect(link("alternate stylesheet"), "href", Category::Stylesheet);
    expect(link("apple-touch-startup-image"), "href", Category::Image);
    expect(link("prefetch"), "href", Category::Prefetch);
    expect(link("prefetch icon"), "href", Category::Image);
    expect(link("icon prefetch"), "href", Category::Image);
    expect(link("preconnect"), "href", Category::Hyperlink);
    // Only spaces separate rel tokens.
    expect(link("icon\tprefetch"), "href", Category::Hyperlink);
}

#[test]
fn test_decoding_error_without_rules_is_skipped() {
    let element = Element::new("a").with_attribute(Attribute::with_decoding_error("href", "%"));
    assert_eq!(classify(&element), None);
}

#[test]
fn test_custom_rules_first_match_wins() {
    let element = Element::new("div")
        .with_attr("data-bg", "bg.png")
        .with_attr("data-src", "a.js");
    let rules = RuleSet::new()
        .with_rule("span", "data-bg", Category::Image)
        .with_rule("div", "data-src", Category::Script)
        .with_rule("div", "data-bg", Category::Image);

    let slot = scan_element(&element, Some(&rules)).unwrap();
    assert_eq!(slot.attribute.name(), "data-src");
    assert_eq!(slot.category, Category::Script);
}

#[test]
fn test_custom_rule_skips_attribute_with_decoding_error() {
    let element = Element::new("div")
        .with_attribute(Attribute::with_decoding_error("data-src", "%"))
        .with_attr("DATA-SRC", "ok.png");
    let rules = vec![CustomAttributeRule::new("Div", "data-src", Category::Image)];

    let slot = scan_element(&element, Some(&rules)).unwrap();
    assert_eq!(slot.attribute.raw_value(), Some("ok.png"));
}

#[test]
fn test_custom_rule_applies_when_builtin_attribute_missing() {
    let element = Element::new("iframe").with_attr("data-src", "frame.html");
    let rules = RuleSet::new().with_rule("iframe", "data-src", Category::OtherResource);

    assert_eq!(classify(&element), None);
    let slot = ResourceTagScanner::with_rules(&rules).scan(&element).unwrap();
    assert_eq!(slot.category, Category::OtherResource);
}

#[test]
fn test_non_image_input_can_use_rules() {
    let element = Element::new("input")
        .with_attr("type", "text")
        .with_attr("data-src", "x.png");
    let rules = RuleSet::new().with_rule("input", "data-src", Category::Image);
    assert_eq!(
        scan_element(&element, Some(&rules)).map(|slot| slot.category),
        Some(Category::Image)
    );
}

#[test]
fn test_rules_shared_across_threads() {
    let rules: Arc<RuleSet> = Arc::new(
        RuleSet::new()
            .with_rule("div", "data-src", Category::Image)
            .with_rule("span", "data-href", Category::Hyperlink),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let element = if i % 2 == 0 {
                    Element::new("div").with_attr("data-src", format!("{i}.png"))
                } else {
                    Element::new("span").with_attr("data-href", format!("/{i}"))
                };
                assert_eq!(rules.rule_count(), 2);
                scan_element(&element, Some(&rules)).map(|slot| slot.category)
            })
        })
        .collect();

    let categories: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        categories,
        vec![
            Some(Category::Image),
            Some(Category::Hyperlink),
            Some(Category::Image),
            Some(Category::Hyperlink),
        ]
    );
}
