//! Subcommand implementations.

use inflight_html::{Attribute, Element, ResourceSlot, RuleSet, scan_element};
use inflight_js::{Token, TokenKind, Tokenized, tokenize};
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::{AttributeArg, ClassifyArgs, LexArgs};
use crate::error::{InflightError, Result};

/// `inflight lex`
pub fn lex(args: &LexArgs) -> Result<()> {
    let source = read_file(&args.file)?;
    let result = tokenize(&source);

    if args.summary {
        for (kind, count) in summarize(&result) {
            println!("{:>16} {}", kind.cyan(), count);
        }
    } else {
        for token in &result.tokens {
            println!("{}", render_token(token));
        }
    }

    match error_offset(&result) {
        Some(offset) => Err(InflightError::LexError {
            path: args.file.clone(),
            offset,
        }),
        None => Ok(()),
    }
}

/// `inflight classify`
pub fn classify(args: &ClassifyArgs, rules: &RuleSet) -> Result<()> {
    let element = build_element(&args.tag, &args.attributes, &args.tainted)?;
    let slot = scan_element(&element, Some(rules));
    tracing::debug!(%element, matched = slot.is_some(), "classified element");
    println!("{}", describe_slot(slot.as_ref()));
    Ok(())
}

/// `inflight rules`
pub fn rules(rules: &RuleSet) {
    if rules.is_empty() {
        println!("{}", "no custom attribute rules configured".dimmed());
        return;
    }
    for (index, rule) in rules.iter().enumerate() {
        println!(
            "{:>3}  {} {} {}",
            index.dimmed(),
            format!("<{} {}>", rule.element, rule.attribute).cyan(),
            "->".dimmed(),
            rule.category.green()
        );
    }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| InflightError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds an element from command line attributes. Attributes named in
/// `tainted` are marked as having failed to decode.
pub fn build_element(tag: &str, attributes: &[String], tainted: &[String]) -> Result<Element> {
    let mut element = Element::new(tag);
    for arg in attributes {
        let AttributeArg { name, value } = AttributeArg::parse(arg)?;
        let attribute = if tainted.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
            Attribute::with_decoding_error(name, value.unwrap_or_default())
        } else {
            match value {
                Some(value) => Attribute::new(name, value),
                None => Attribute::valueless(name),
            }
        };
        element.push_attribute(attribute);
    }
    Ok(element)
}

/// Offset of the malformed token, if the lexer stopped on one.
pub fn error_offset(result: &Tokenized<'_>) -> Option<usize> {
    if !result.error {
        return None;
    }
    Some(result.tokens.last().map_or(0, |token| token.span.start))
}

/// Token counts by kind name.
pub fn summarize(result: &Tokenized<'_>) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for token in &result.tokens {
        *counts.entry(token.kind.name()).or_insert(0) += 1;
    }
    counts
}

/// `offset kind "text"`, uncoloured.
pub fn render_token(token: &Token<'_>) -> String {
    format!(
        "{:>6} {:<20} \"{}\"",
        token.span.start,
        token.kind.to_string(),
        String::from_utf8_lossy(token.text).escape_debug()
    )
}

/// The token text coloured by kind.
pub fn paint_token(token: &Token<'_>) -> String {
    let text = String::from_utf8_lossy(token.text);
    match token.kind {
        TokenKind::Keyword(keyword) if keyword.is_value() => text.blue().to_string(),
        TokenKind::Keyword(keyword) if keyword.is_strict_reserved() => {
            text.magenta().italic().to_string()
        }
        TokenKind::Keyword(_) => text.magenta().bold().to_string(),
        TokenKind::Number => text.yellow().to_string(),
        TokenKind::StringLiteral => text.green().to_string(),
        TokenKind::Regex => text.red().to_string(),
        TokenKind::Comment => text.dimmed().to_string(),
        TokenKind::Operator => text.cyan().to_string(),
        _ => text.into_owned(),
    }
}

pub fn describe_slot(slot: Option<&ResourceSlot<'_>>) -> String {
    match slot {
        Some(slot) => format!(
            "{} {}",
            slot.attribute.name().cyan(),
            slot.category.green().bold()
        ),
        None => "no match".dimmed().to_string(),
    }
}
