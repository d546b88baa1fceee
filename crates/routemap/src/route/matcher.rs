/// Path matching against compiled rules
///
/// Named tokens are matched by `key=value` segments anywhere in the path.
/// Everything else is aligned positionally, in order.

use std::collections::HashMap;

use super::token::Token;
use crate::path::{decode_value, segments};
use crate::{Args, Rule};

/// Matches `path` against a single rule, returning its bindings
///
/// # Examples
///
/// ```
/// use routemap::{route::matcher::match_rule, Rule, RuleDef};
///
/// let rule = Rule::compile(&RuleDef::new("/foo/bar:/:baz", "foo")).unwrap();
/// let args = match_rule(&rule, "/foo/def/bar=abc").unwrap();
/// assert_eq!(args.get("bar").map(String::as_str), Some("abc"));
/// assert_eq!(args.get("baz").map(String::as_str), Some("def"));
///
/// assert!(match_rule(&rule, "/foo/def").is_none());
/// ```
pub fn match_rule(rule: &Rule, path: &str) -> Option<Args> {
    match_segments(rule, &segments(path))
}

/// Finds the first rule (in iteration order) that matches `path`
///
/// Uses functional iteration with short-circuit evaluation: stops at the
/// first match.
pub fn find_match<'r, I>(rules: I, path: &str) -> Option<(&'r Rule, Args)>
where
    I: IntoIterator<Item = &'r Rule>,
{
    let segments = segments(path);
    rules
        .into_iter()
        .find_map(|rule| match_segments(rule, &segments).map(|args| (rule, args)))
}

fn match_segments(rule: &Rule, segments: &[&str]) -> Option<Args> {
    let (named, positional): (Vec<&Token>, Vec<&Token>) =
        rule.tokens().iter().partition(|t| t.is_named());

    // Split off `key=value` segments whose key this rule declares
    let mut named_values: HashMap<&str, &str> = HashMap::new();
    let mut positional_segments = Vec::with_capacity(segments.len());
    for segment in segments {
        let declared = segment
            .split_once('=')
            .filter(|(key, _)| named.iter().any(|t| t.name() == Some(*key)));

        match declared {
            Some((key, value)) => {
                if named_values.insert(key, value).is_some() {
                    return None;
                }
            }
            None => positional_segments.push(*segment),
        }
    }

    let mut args = Args::new();
    for token in &named {
        match token {
            Token::NamedRequired(name) => {
                let value = named_values.get(name.as_str())?;
                args.insert(name.clone(), decode_value(value));
            }
            Token::NamedOptional(name) => {
                if let Some(value) = named_values.get(name.as_str()) {
                    args.insert(name.clone(), decode_value(value));
                }
            }
            _ => {}
        }
    }

    align(&positional, &positional_segments, args)
}

/// Aligns positional tokens with positional segments (tail-recursive)
///
/// # Algorithm
///
/// 1. Out of tokens: succeed only if every segment was consumed
/// 2. Literal: must equal the next segment exactly
/// 3. Required: consumes and binds the next segment
/// 4. Optional: binds the next segment only if enough remain for the
///    mandatory tokens after it
/// 5. Wildcard: binds everything left, joined by `/` (possibly empty)
fn align(tokens: &[&Token], segments: &[&str], mut args: Args) -> Option<Args> {
    let Some((token, rest)) = tokens.split_first() else {
        return segments.is_empty().then_some(args);
    };

    match token {
        Token::Literal(text) => {
            let (segment, tail) = segments.split_first()?;
            if segment != text {
                return None;
            }
            align(rest, tail, args)
        }
        Token::PositionalRequired(name) => {
            let (segment, tail) = segments.split_first()?;
            args.insert(name.clone(), decode_value(segment));
            align(rest, tail, args)
        }
        Token::PositionalOptional(name) => {
            let mandatory = rest.iter().filter(|t| t.is_mandatory_positional()).count();
            match segments.split_first() {
                Some((segment, tail)) if segments.len() > mandatory => {
                    args.insert(name.clone(), decode_value(segment));
                    align(rest, tail, args)
                }
                _ => align(rest, segments, args),
            }
        }
        Token::WildcardPositional | Token::WildcardNamed(_) => {
            let name = token.name()?;
            let value = segments
                .iter()
                .map(|s| decode_value(s))
                .collect::<Vec<_>>()
                .join("/");
            args.insert(name.to_string(), value);
            align(rest, &[], args)
        }
        // partitioned out by the caller
        Token::NamedRequired(_) | Token::NamedOptional(_) => align(rest, segments, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleDef;
    use pretty_assertions::assert_eq;

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
    fn test_match_static() {
        assert_eq!(match_rule(&rule("/foo/bar"), "/foo/bar"), Some(Args::new()));
        assert_eq!(match_rule(&rule("/foo/bar"), "/foo/bar/"), Some(Args::new()));
        assert_eq!(match_rule(&rule("/foo/bar"), "/foo/baz"), None);
        assert_eq!(match_rule(&rule("/foo"), "/foo/bar"), None);
    }

    #[test]
    fn test_match_required() {
        assert_eq!(
            match_rule(&rule("/foo/:bar"), "/foo/abc"),
            Some(args(&[("bar", "abc")]))
        );
        assert_eq!(match_rule(&rule("/foo/:bar"), "/foo/"), None);
    }

    #[test]
    fn test_match_optional() {
        assert_eq!(
            match_rule(&rule("/foo/:bar?"), "/foo/abc"),
            Some(args(&[("bar", "abc")]))
        );
        assert_eq!(match_rule(&rule("/foo/:bar?"), "/foo/"), Some(Args::new()));
        assert_eq!(match_rule(&rule("/foo/:bar?"), "/foo/abc/def"), None);
    }

    #[test]
    fn test_optional_before_literal() {
        let r = rule("/a/:b?/c");
        assert_eq!(match_rule(&r, "/a/c"), Some(Args::new()));
        assert_eq!(match_rule(&r, "/a/x/c"), Some(args(&[("b", "x")])));
        assert_eq!(match_rule(&r, "/a/x/y"), None);
    }

    #[test]
    fn test_match_named_any_order() {
        let r = rule("/foo/:bar/baz:/qux:");
        let expected = Some(args(&[("bar", "abc"), ("baz", "def"), ("qux", "ghi")]));
        assert_eq!(match_rule(&r, "/foo/abc/baz=def/qux=ghi"), expected);
        assert_eq!(match_rule(&r, "/foo/qux=ghi/abc/baz=def"), expected);
        assert_eq!(match_rule(&r, "/foo/abc/baz=def"), None);
    }

    #[test]
    fn test_undeclared_key_is_positional() {
        let r = rule("/foo/:bar");
        assert_eq!(
            match_rule(&r, "/foo/x=y"),
            Some(args(&[("bar", "x=y")]))
        );
    }

    #[test]
    fn test_duplicate_named_key_fails() {
        assert_eq!(match_rule(&rule("/foo/bar:"), "/foo/bar=a/bar=b"), None);
    }

    #[test]
    fn test_match_wildcards() {
        assert_eq!(
            match_rule(&rule("/foo/*"), "/foo/abc/def/ghi"),
            Some(args(&[("*", "abc/def/ghi")]))
        );
        assert_eq!(
            match_rule(&rule("/foo/bar:*"), "/foo/abc/def/ghi"),
            Some(args(&[("bar", "abc/def/ghi")]))
        );
        assert_eq!(
            match_rule(&rule("/foo/:bar/baz:*"), "/foo/abc/def/ghi"),
            Some(args(&[("bar", "abc"), ("baz", "def/ghi")]))
        );
        assert_eq!(
            match_rule(&rule("/foo/*"), "/foo"),
            Some(args(&[("*", "")]))
        );
    }

    #[test]
    fn test_wildcard_leaves_named_segments_alone() {
        let r = rule("/foo/q:?/*");
        assert_eq!(
            match_rule(&r, "/foo/a/q=1/b"),
            Some(args(&[("*", "a/b"), ("q", "1")]))
        );
    }

    #[test]
    fn test_match_decodes_values() {
        assert_eq!(
            match_rule(&rule("/foo/:bar/q:"), "/foo/a%20b/q=x%3Dy"),
            Some(args(&[("bar", "a b"), ("q", "x=y")]))
        );
    }

    #[test]
    fn test_find_match_first_wins() {
        let rules = vec![
            Rule::compile(&RuleDef::new("/foo/:bar", "first")).unwrap(),
            Rule::compile(&RuleDef::new("/foo/abc", "second")).unwrap(),
        ];
        let (matched, _) = find_match(&rules, "/foo/abc").unwrap();
        assert_eq!(matched.method(), "first");
        assert!(find_match(&rules, "/bar").is_none());
    }
}
