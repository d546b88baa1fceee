/// Canonical path generation from a rule and parameter values
///
/// Walks the rule's tokens in order and substitutes values. Optional tokens
/// with no value emit nothing; required ones without a value are an error.
/// An empty positional value is treated as no value at all.

use super::token::Token;
use crate::path::{encode_value, encode_wildcard};
use crate::{Args, Rule, RouteError};

/// Renders the canonical path for `rule` with `params` (pure function)
///
/// When nothing past the leading literal prefix was emitted and the rule has
/// at least one parameter, a single trailing `/` is appended. This keeps
/// `/foo/:bar?` with no value (`/foo/`) distinct from a bare `/foo` route.
///
/// # Examples
///
/// ```
/// use routemap::{route::render::render, Args, Rule, RuleDef};
///
/// let rule = Rule::compile(&RuleDef::new("/foo/:bar/baz:?", "foo")).unwrap();
///
/// let mut params = Args::new();
/// params.insert("bar".into(), "abc".into());
/// assert_eq!(render(&rule, &params).unwrap(), "/foo/abc");
///
/// params.insert("baz".into(), "def".into());
/// assert_eq!(render(&rule, &params).unwrap(), "/foo/abc/baz=def");
///
/// let optional = Rule::compile(&RuleDef::new("/foo/:bar?", "foo")).unwrap();
/// assert_eq!(render(&optional, &Args::new()).unwrap(), "/foo/");
/// ```
pub fn render(rule: &Rule, params: &Args) -> Result<String, RouteError> {
    let tokens = rule.tokens();
    let prefix_len = tokens.iter().take_while(|t| t.is_literal()).count();

    let mut hash = String::new();
    for token in &tokens[..prefix_len] {
        if let Token::Literal(text) = token {
            hash.push('/');
            hash.push_str(text);
        }
    }
    let prefix_end = hash.len();

    let missing = |name: &str| RouteError::MissingParam {
        route: rule.route().to_string(),
        name: name.to_string(),
    };

    for token in &tokens[prefix_len..] {
        match token {
            Token::Literal(text) => {
                hash.push('/');
                hash.push_str(text);
            }
            Token::PositionalRequired(name) => {
                let value = positional(params, name).ok_or_else(|| missing(name.as_str()))?;
                hash.push('/');
                hash.push_str(&encode_value(value));
            }
            Token::PositionalOptional(name) => {
                if let Some(value) = positional(params, name) {
                    hash.push('/');
                    hash.push_str(&encode_value(value));
                }
            }
            Token::NamedRequired(name) => {
                let value = params.get(name).ok_or_else(|| missing(name.as_str()))?;
                push_named(&mut hash, name, value);
            }
            Token::NamedOptional(name) => {
                if let Some(value) = params.get(name) {
                    push_named(&mut hash, name, value);
                }
            }
            Token::WildcardPositional | Token::WildcardNamed(_) => {
                let encoded = token
                    .name()
                    .and_then(|name| params.get(name))
                    .map(|value| encode_wildcard(value))
                    .filter(|encoded| !encoded.is_empty());
                if let Some(encoded) = encoded {
                    hash.push('/');
                    hash.push_str(&encoded);
                }
            }
        }
    }

    let has_params = prefix_len < tokens.len();
    if hash.len() == prefix_end && has_params {
        hash.push('/');
    }
    if hash.is_empty() {
        hash.push('/');
    }

    Ok(hash)
}

/// A positional value; empty counts as absent since it cannot occupy a segment
fn positional<'a>(params: &'a Args, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

fn push_named(hash: &mut String, name: &str, value: &str) {
    hash.push('/');
    hash.push_str(name);
    hash.push('=');
    hash.push_str(&encode_value(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleDef;

    fn rule(route: &str) -> Rule {
        Rule::compile(&RuleDef::new(route, "foo")).unwrap()
    }

    fn args(pairs: &[(&str, &str)]) -> Args {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_static() {
        assert_eq!(render(&rule("/foo/bar"), &Args::new()).unwrap(), "/foo/bar");
        assert_eq!(render(&rule("/"), &Args::new()).unwrap(), "/");
    }

    #[test]
    fn test_render_required() {
        let params = args(&[("bar", "abc")]);
        assert_eq!(render(&rule("/foo/:bar"), &params).unwrap(), "/foo/abc");
        assert_eq!(render(&rule("/foo/bar:"), &params).unwrap(), "/foo/bar=abc");
    }

    #[test]
    fn test_render_missing_required() {
        let err = render(&rule("/foo/:bar"), &Args::new()).unwrap_err();
        assert!(matches!(err, RouteError::MissingParam { ref name, .. } if name == "bar"));
    }

    #[test]
    fn test_render_optional_absent_adds_slash() {
        assert_eq!(render(&rule("/foo/:bar?"), &Args::new()).unwrap(), "/foo/");
        assert_eq!(render(&rule("/foo/bar:?"), &Args::new()).unwrap(), "/foo/");
        assert_eq!(render(&rule("/foo/*"), &Args::new()).unwrap(), "/foo/");
    }

    #[test]
    fn test_render_optional_skipped_mid_walk() {
        // an absent optional does not stop later tokens from rendering
        let params = args(&[("baz", "def")]);
        assert_eq!(
            render(&rule("/foo/:bar?/baz:"), &params).unwrap(),
            "/foo/baz=def"
        );
        assert_eq!(render(&rule("/foo/:bar?/x"), &Args::new()).unwrap(), "/foo/x");
    }

    #[test]
    fn test_render_wildcards() {
        let params = args(&[("*", "abc/def")]);
        assert_eq!(render(&rule("/foo/*"), &params).unwrap(), "/foo/abc/def");

        let params = args(&[("bar", "abc"), ("baz", "def/ghi")]);
        assert_eq!(
            render(&rule("/foo/:bar/baz:*"), &params).unwrap(),
            "/foo/abc/def/ghi"
        );
    }

    #[test]
    fn test_render_empty_positional() {
        let err = render(&rule("/foo/:bar"), &args(&[("bar", "")])).unwrap_err();
        assert!(matches!(err, RouteError::MissingParam { ref name, .. } if name == "bar"));

        let params = args(&[("a", ""), ("b", "x")]);
        assert_eq!(render(&rule("/foo/:a?/:b?"), &params).unwrap(), "/foo/x");
        assert_eq!(render(&rule("/foo/:a?"), &args(&[("a", "")])).unwrap(), "/foo/");
    }

    #[test]
    fn test_render_empty_named_value() {
        let params = args(&[("bar", "")]);
        assert_eq!(render(&rule("/foo/bar:"), &params).unwrap(), "/foo/bar=");
    }

    #[test]
    fn test_render_wildcard_drops_empty_pieces() {
        let params = args(&[("*", "a//b/")]);
        assert_eq!(render(&rule("/foo/*"), &params).unwrap(), "/foo/a/b");

        let params = args(&[("*", "//")]);
        assert_eq!(render(&rule("/foo/*"), &params).unwrap(), "/foo/");
    }

    #[test]
    fn test_render_encodes_values() {
        let params = args(&[("bar", "a b"), ("q", "x=y")]);
        assert_eq!(
            render(&rule("/foo/:bar/q:"), &params).unwrap(),
            "/foo/a%20b/q=x%3Dy"
        );
    }
}
