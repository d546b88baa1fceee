/// Template compilation and validation
///
/// Pure functional compiler that turns a route template into an ordered token
/// list, rejecting templates that would make matching ambiguous.
/// All functions are **pure**: same input → same output, no side effects.

use std::collections::HashSet;

use super::token::{classify_segment, Token};
use crate::RouteError;

/// Internal state accumulator for fold-based compilation
///
/// All mutations are local to the fold accumulator. Each step consumes the
/// state and hands back the next one, or the first grammar error.
struct CompileState<'a> {
    route: &'a str,
    tokens: Vec<Token>,
    names: HashSet<String>,
    seen_optional: bool,
    seen_wildcard: bool,
}

impl<'a> CompileState<'a> {
    fn new(route: &'a str) -> Self {
        Self {
            route,
            tokens: Vec::new(),
            names: HashSet::new(),
            seen_optional: false,
            seen_wildcard: false,
        }
    }

    /// Appends one segment, enforcing every ordering and naming rule
    fn with_segment(mut self, segment: &str) -> Result<Self, RouteError> {
        if self.seen_wildcard {
            return Err(RouteError::SegmentAfterWildcard {
                route: self.route.to_string(),
                segment: segment.to_string(),
            });
        }

        let token = classify_segment(segment).ok_or_else(|| RouteError::InvalidSegment {
            route: self.route.to_string(),
            segment: segment.to_string(),
        })?;

        if let Some(name) = token.name() {
            if !self.names.insert(name.to_string()) {
                return Err(RouteError::DuplicateParam {
                    route: self.route.to_string(),
                    name: name.to_string(),
                });
            }
        }

        match &token {
            Token::PositionalOptional(_) => self.seen_optional = true,
            Token::PositionalRequired(name) if self.seen_optional => {
                return Err(RouteError::RequiredAfterOptional {
                    route: self.route.to_string(),
                    name: name.clone(),
                });
            }
            Token::WildcardPositional | Token::WildcardNamed(_) => self.seen_wildcard = true,
            _ => {}
        }

        self.tokens.push(token);
        Ok(self)
    }

    fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Compiles a route template into tokens (pure function)
///
/// Uses functional composition:
/// - `split('/')` → `filter` - break the template into non-empty segments
/// - `try_fold` - accumulate through [`CompileState`], stopping at the first error
///
/// # Errors
///
/// Grammar errors ([`crate::ErrorKind::Grammar`]) for:
/// - two tokens binding the same name
/// - a required positional parameter after an optional positional one
/// - any segment after `*` or `name:*`
/// - a malformed segment such as `:` or `a:b`
///
/// # Examples
///
/// ```
/// use routemap::route::compiler::compile;
/// use routemap::route::token::Token;
///
/// let tokens = compile("/foo/:bar/baz:").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Literal("foo".into()),
///         Token::PositionalRequired("bar".into()),
///         Token::NamedRequired("baz".into()),
///     ]
/// );
///
/// assert!(compile("/foo/:bar?/:baz").is_err());
/// ```
pub fn compile(route: &str) -> Result<Vec<Token>, RouteError> {
    route
        .split('/')
        .filter(|s| !s.is_empty())
        .try_fold(CompileState::new(route), CompileState::with_segment)
        .map(CompileState::into_tokens)
}
