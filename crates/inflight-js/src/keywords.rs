//! The JavaScript keyword table.
//!
//! Maps the spelling of every reserved word to its [`Keyword`] and a
//! [`KeywordFlag`]. The flag tells the lexer whether the keyword can end a
//! value expression, which decides how a following `/` is read:
//!
//! ```text
//! this / 2      -> division ('this' is a value)
//! return /a/g   -> regex    ('return' is not)
//! ```
//!
//! The table is built once per process and never mutated afterwards, so any
//! number of lexers on any number of threads may read it without locking.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Whether a keyword may end a value expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordFlag {
    /// The keyword never ends a value (`return`, `typeof`, ...).
    None,
    /// The keyword is itself a value (`this`, `true`, `false`, `null`).
    IsValue,
}

/// A reserved word recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Keyword {
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Implements,
    Import,
    In,
    Instanceof,
    Interface,
    Let,
    New,
    Null,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Static,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
}

impl Keyword {
    /// Every keyword, in alphabetical order.
    pub const ALL: [Keyword; 45] = [
        Keyword::Break,
        Keyword::Case,
        Keyword::Catch,
        Keyword::Class,
        Keyword::Const,
        Keyword::Continue,
        Keyword::Debugger,
        Keyword::Default,
        Keyword::Delete,
        Keyword::Do,
        Keyword::Else,
        Keyword::Enum,
        Keyword::Export,
        Keyword::Extends,
        Keyword::False,
        Keyword::Finally,
        Keyword::For,
        Keyword::Function,
        Keyword::If,
        Keyword::Implements,
        Keyword::Import,
        Keyword::In,
        Keyword::Instanceof,
        Keyword::Interface,
        Keyword::Let,
        Keyword::New,
        Keyword::Null,
        Keyword::Package,
        Keyword::Private,
        Keyword::Protected,
        Keyword::Public,
        Keyword::Return,
        Keyword::Static,
        Keyword::Super,
        Keyword::Switch,
        Keyword::This,
        Keyword::Throw,
        Keyword::True,
        Keyword::Try,
        Keyword::Typeof,
        Keyword::Var,
        Keyword::Void,
        Keyword::While,
        Keyword::With,
        Keyword::Yield,
    ];

    /// Returns the source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Debugger => "debugger",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::Export => "export",
            Keyword::Extends => "extends",
            Keyword::False => "false",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::Implements => "implements",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Instanceof => "instanceof",
            Keyword::Interface => "interface",
            Keyword::Let => "let",
            Keyword::New => "new",
            Keyword::Null => "null",
            Keyword::Package => "package",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Public => "public",
            Keyword::Return => "return",
            Keyword::Static => "static",
            Keyword::Super => "super",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::True => "true",
            Keyword::Try => "try",
            Keyword::Typeof => "typeof",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
            Keyword::With => "with",
            Keyword::Yield => "yield",
        }
    }

    /// Returns the value flag for this keyword.
    pub fn flag(self) -> KeywordFlag {
        match self {
            Keyword::This | Keyword::True | Keyword::False | Keyword::Null => KeywordFlag::IsValue,
            _ => KeywordFlag::None,
        }
    }

    /// Returns true if this keyword can end a value expression.
    pub fn is_value(self) -> bool {
        self.flag() == KeywordFlag::IsValue
    }

    /// Returns true for words that are only reserved in strict mode code.
    pub fn is_strict_reserved(self) -> bool {
        matches!(
            self,
            Keyword::Implements
                | Keyword::Interface
                | Keyword::Let
                | Keyword::Package
                | Keyword::Private
                | Keyword::Protected
                | Keyword::Public
                | Keyword::Static
                | Keyword::Yield
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    /// The recognized keyword
    pub keyword: Keyword,
    /// Its value flag
    pub flag: KeywordFlag,
}

static TABLE: LazyLock<FxHashMap<&'static [u8], KeywordEntry>> = LazyLock::new(|| {
    iter()
        .map(|keyword| {
            (
                keyword.as_str().as_bytes(),
                KeywordEntry {
                    keyword,
                    flag: keyword.flag(),
                },
            )
        })
        .collect()
});

/// Looks up an identifier spelling. Matching is case-sensitive.
pub fn lookup(name: &[u8]) -> Option<KeywordEntry> {
    TABLE.get(name).copied()
}

/// Iterates the static keyword enumeration.
pub fn iter() -> impl Iterator<Item = Keyword> {
    Keyword::ALL.into_iter()
}

/// Returns the number of keywords in the table.
pub fn len() -> usize {
    Keyword::ALL.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_keywords() {
        let entry = lookup(b"function").unwrap();
        assert_eq!(entry.keyword, Keyword::Function);
        assert_eq!(entry.flag, KeywordFlag::None);

        let entry = lookup(b"this").unwrap();
        assert_eq!(entry.keyword, Keyword::This);
        assert_eq!(entry.flag, KeywordFlag::IsValue);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup(b"If").is_none());
        assert!(lookup(b"TRUE").is_none());
        assert!(lookup(b"if").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup(b"foo").is_none());
        assert!(lookup(b"").is_none());
        assert!(lookup(b"undefined").is_none());
    }

    #[test]
    fn test_every_keyword_round_trips_through_table() {
        for keyword in iter() {
            let entry = lookup(keyword.as_str().as_bytes()).unwrap();
            assert_eq!(entry.keyword, keyword);
        }
        assert_eq!(TABLE.len(), len());
    }

    #[test]
    fn test_value_keywords() {
        let values: Vec<_> = iter().filter(|k| k.is_value()).collect();
        assert_eq!(
            values,
            vec![Keyword::False, Keyword::Null, Keyword::This, Keyword::True]
        );
    }

    #[test]
    fn test_strict_reserved() {
        assert!(Keyword::Let.is_strict_reserved());
        assert!(Keyword::Yield.is_strict_reserved());
        assert!(!Keyword::Var.is_strict_reserved());
    }
}
