//! Token classification for route template segments
//!
//! Pure functional parsing of a single template segment into a typed token.
//! All functions are **pure**: same input → same output, no side effects.

/// One compiled segment of a route template
///
/// Functional sum type: both the hash generator and the path matcher switch
/// exhaustively over these variants.
///
/// # Examples
///
/// ```
/// use routemap::route::token::{classify_segment, Token};
///
/// assert_eq!(classify_segment("foo"), Some(Token::Literal("foo".into())));
/// assert_eq!(classify_segment(":id"), Some(Token::PositionalRequired("id".into())));
/// assert_eq!(classify_segment(":id?"), Some(Token::PositionalOptional("id".into())));
/// assert_eq!(classify_segment("page:"), Some(Token::NamedRequired("page".into())));
/// assert_eq!(classify_segment("page:?"), Some(Token::NamedOptional("page".into())));
/// assert_eq!(classify_segment("*"), Some(Token::WildcardPositional));
/// assert_eq!(classify_segment("rest:*"), Some(Token::WildcardNamed("rest".into())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Static text segment: `foo`
    Literal(String),
    /// Required positional parameter: `:name`
    PositionalRequired(String),
    /// Optional positional parameter: `:name?`
    PositionalOptional(String),
    /// Required named parameter: `name:` (rendered as `name=value`)
    NamedRequired(String),
    /// Optional named parameter: `name:?`
    NamedOptional(String),
    /// Unnamed trailing wildcard: `*` (bound under `*`)
    WildcardPositional,
    /// Named trailing wildcard: `name:*`
    WildcardNamed(String),
}

/// Binding key used for the unnamed wildcard
pub const WILDCARD_KEY: &str = "*";

impl Token {
    /// The key this token binds its value under, if it binds one
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Literal(_) => None,
            Token::WildcardPositional => Some(WILDCARD_KEY),
            Token::PositionalRequired(name)
            | Token::PositionalOptional(name)
            | Token::NamedRequired(name)
            | Token::NamedOptional(name)
            | Token::WildcardNamed(name) => Some(name),
        }
    }

    /// Named tokens are matched by `key=value`, not by position
    pub fn is_named(&self) -> bool {
        matches!(self, Token::NamedRequired(_) | Token::NamedOptional(_))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Token::WildcardPositional | Token::WildcardNamed(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// Whether the path matcher must consume a positional segment for this token
    pub fn is_mandatory_positional(&self) -> bool {
        matches!(self, Token::Literal(_) | Token::PositionalRequired(_))
    }
}

/// Classifies a segment into a token (pure function)
///
/// Returns `None` when the segment is malformed: an empty or invalid
/// parameter name, or a `:` that fits none of the parameter forms.
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Wildcard**: `*`
/// 2. **Positional**: `:name` or `:name?`
/// 3. **Named**: `name:`, `name:?` or `name:*`
/// 4. **Literal**: any other text without a `:`
pub fn classify_segment(segment: &str) -> Option<Token> {
    if segment == WILDCARD_KEY {
        return Some(Token::WildcardPositional);
    }

    if let Some(rest) = segment.strip_prefix(':') {
        return match rest.strip_suffix('?') {
            Some(name) => valid_name(name).map(Token::PositionalOptional),
            None => valid_name(rest).map(Token::PositionalRequired),
        };
    }

    match segment.split_once(':') {
        Some((name, "")) => valid_name(name).map(Token::NamedRequired),
        Some((name, "?")) => valid_name(name).map(Token::NamedOptional),
        Some((name, "*")) => valid_name(name).map(Token::WildcardNamed),
        Some(_) => None,
        None => Some(Token::Literal(segment.to_string())),
    }
}

/// Validates a parameter name, returning it owned when acceptable
fn valid_name(name: &str) -> Option<String> {
    let reserved = |c: char| matches!(c, ':' | '?' | '*' | '=' | '/');
    if name.is_empty() || name.contains(reserved) {
        None
    } else {
        Some(name.to_string())
    }
}
