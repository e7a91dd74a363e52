//! The parsed-element view the scanner reads.
//!
//! Elements come from the HTML parser upstream. The scanner only needs the
//! tag, and for each attribute its name, decoded value and whether decoding
//! failed, so that is all this model carries.

use std::fmt;

/// Tags the scanner knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HtmlKeyword {
    A,
    Area,
    Audio,
    Blockquote,
    Body,
    Button,
    Command,
    Del,
    Embed,
    Form,
    Frame,
    Html,
    Iframe,
    Img,
    Input,
    Ins,
    Link,
    Q,
    Script,
    Source,
    Table,
    Tbody,
    Td,
    Tfoot,
    Th,
    Thead,
    Track,
    Video,
    /// Any other tag name
    NotAKeyword,
}

impl HtmlKeyword {
    const NAMED: [HtmlKeyword; 28] = [
        HtmlKeyword::A,
        HtmlKeyword::Area,
        HtmlKeyword::Audio,
        HtmlKeyword::Blockquote,
        HtmlKeyword::Body,
        HtmlKeyword::Button,
        HtmlKeyword::Command,
        HtmlKeyword::Del,
        HtmlKeyword::Embed,
        HtmlKeyword::Form,
        HtmlKeyword::Frame,
        HtmlKeyword::Html,
        HtmlKeyword::Iframe,
        HtmlKeyword::Img,
        HtmlKeyword::Input,
        HtmlKeyword::Ins,
        HtmlKeyword::Link,
        HtmlKeyword::Q,
        HtmlKeyword::Script,
        HtmlKeyword::Source,
        HtmlKeyword::Table,
        HtmlKeyword::Tbody,
        HtmlKeyword::Td,
        HtmlKeyword::Tfoot,
        HtmlKeyword::Th,
        HtmlKeyword::Thead,
        HtmlKeyword::Track,
        HtmlKeyword::Video,
    ];

    /// Maps a tag name to its keyword, ignoring ASCII case.
    pub fn from_name(name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(HtmlKeyword::NotAKeyword)
    }

    /// Returns the lowercase tag name, or `""` for [`HtmlKeyword::NotAKeyword`].
    pub fn as_str(self) -> &'static str {
        match self {
            HtmlKeyword::A => "a",
            HtmlKeyword::Area => "area",
            HtmlKeyword::Audio => "audio",
            HtmlKeyword::Blockquote => "blockquote",
            HtmlKeyword::Body => "body",
            HtmlKeyword::Button => "button",
            HtmlKeyword::Command => "command",
            HtmlKeyword::Del => "del",
            HtmlKeyword::Embed => "embed",
            HtmlKeyword::Form => "form",
            HtmlKeyword::Frame => "frame",
            HtmlKeyword::Html => "html",
            HtmlKeyword::Iframe => "iframe",
            HtmlKeyword::Img => "img",
            HtmlKeyword::Input => "input",
            HtmlKeyword::Ins => "ins",
            HtmlKeyword::Link => "link",
            HtmlKeyword::Q => "q",
            HtmlKeyword::Script => "script",
            HtmlKeyword::Source => "source",
            HtmlKeyword::Table => "table",
            HtmlKeyword::Tbody => "tbody",
            HtmlKeyword::Td => "td",
            HtmlKeyword::Tfoot => "tfoot",
            HtmlKeyword::Th => "th",
            HtmlKeyword::Thead => "thead",
            HtmlKeyword::Track => "track",
            HtmlKeyword::Video => "video",
            HtmlKeyword::NotAKeyword => "",
        }
    }
}

/// One attribute of a parsed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    raw_value: Option<String>,
    decoded_value: Option<String>,
    decoding_error: bool,
}

impl Attribute {
    /// Creates an attribute whose value needed no decoding.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            raw_value: Some(value.clone()),
            decoded_value: Some(value),
            decoding_error: false,
        }
    }

    /// Creates a valueless attribute such as `async` or `defer`.
    pub fn valueless(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: None,
            decoded_value: None,
            decoding_error: false,
        }
    }

    /// Creates an attribute from its raw (escaped) and decoded values.
    pub fn decoded(
        name: impl Into<String>,
        raw_value: impl Into<String>,
        decoded_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_value: Some(raw_value.into()),
            decoded_value: Some(decoded_value.into()),
            decoding_error: false,
        }
    }

    /// Creates an attribute whose raw value could not be decoded.
    pub fn with_decoding_error(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: Some(raw_value.into()),
            decoded_value: None,
            decoding_error: true,
        }
    }

    /// The attribute name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value as it appeared in the document, entities still escaped.
    pub fn raw_value(&self) -> Option<&str> {
        self.raw_value.as_deref()
    }

    /// The decoded value; `None` when valueless or when decoding failed.
    pub fn decoded_value(&self) -> Option<&str> {
        self.decoded_value.as_deref()
    }

    /// Whether the raw value failed to decode.
    pub fn decoding_error(&self) -> bool {
        self.decoding_error
    }

    /// Compares the attribute name ignoring ASCII case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// A parsed HTML start tag and its attributes, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    keyword: HtmlKeyword,
    attributes: Vec<Attribute>,
}

impl Element {
    /// Creates an element with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            keyword: HtmlKeyword::from_name(&name),
            name,
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute, builder style.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds a plain `name="value"` attribute, builder style.
    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new(name, value))
    }

    /// Appends an attribute.
    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// The tag name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag keyword.
    pub fn keyword(&self) -> HtmlKeyword {
        self.keyword
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the first attribute called `name` (ASCII case-insensitive).
    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.has_name(name))
    }

    /// Returns the decoded value of the first attribute called `name`.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.find_attribute(name).and_then(Attribute::decoded_value)
    }
}

impl fmt::Display for Element {
    /// Renders the start tag using decoded values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            match attr.decoded_value().or(attr.raw_value()) {
                Some(value) => write!(f, " {}=\"{}\"", attr.name, value)?,
                None => write!(f, " {}", attr.name)?,
            }
        }
        f.write_str(">")
    }
}
