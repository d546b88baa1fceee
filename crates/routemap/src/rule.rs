/// Rule definitions and compiled rules
///
/// A [`RuleDef`] is the plain `{ route, method }` pair callers hand to the
/// router. A [`Rule`] is the same pair after compilation, carrying its tokens.
/// Both compare by (route, method) value only.
use serde::{Deserialize, Serialize};

use crate::route::{compiler::compile, token::Token};
use crate::RouteError;

/// An uncompiled rule: a route template and the handler key it dispatches to
///
/// # Examples
///
/// ```
/// use routemap::RuleDef;
///
/// let rule = RuleDef::new("/users/:id", "user");
/// assert_eq!(rule.route, "/users/:id");
/// assert_eq!(rule.method, "user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleDef {
    pub route: String,
    pub method: String,
}

impl RuleDef {
    pub fn new(route: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            method: method.into(),
        }
    }

    /// Builds a rule from an arbitrary JSON value
    ///
    /// Fails with [`RouteError::InvalidRule`] unless the value is an object
    /// with non-empty string `route` and `method` fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use routemap::RuleDef;
    /// use serde_json::json;
    ///
    /// let rule = RuleDef::from_value(json!({"route": "/foo", "method": "foo"})).unwrap();
    /// assert_eq!(rule, RuleDef::new("/foo", "foo"));
    ///
    /// assert!(RuleDef::from_value(json!({})).is_err());
    /// assert!(RuleDef::from_value(json!("foo")).is_err());
    /// assert!(RuleDef::from_value(json!({"route": "/foo"})).is_err());
    /// ```
    pub fn from_value(value: serde_json::Value) -> Result<Self, RouteError> {
        let object = value.as_object().ok_or_else(|| RouteError::InvalidRule {
            reason: format!("expected an object, got `{value}`"),
        })?;

        let field = |key: &str| {
            object
                .get(key)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| RouteError::InvalidRule {
                    reason: format!("missing string field `{key}`"),
                })
        };

        Ok(Self {
            route: field("route")?,
            method: field("method")?,
        })
    }

    /// A rule is well-formed when both fields are present
    pub fn is_complete(&self) -> bool {
        !self.route.is_empty() && !self.method.is_empty()
    }
}

/// A compiled, validated rule
///
/// Tokens are derived once from the route and never change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    route: String,
    method: String,
    #[serde(skip)]
    tokens: Vec<Token>,
}

impl Rule {
    /// Compiles a rule definition
    ///
    /// # Examples
    ///
    /// ```
    /// use routemap::{Rule, RuleDef};
    ///
    /// let rule = Rule::compile(&RuleDef::new("/foo/:bar?", "foo")).unwrap();
    /// assert_eq!(rule.tokens().len(), 2);
    ///
    /// assert!(Rule::compile(&RuleDef::new("/foo/:bar/:bar", "foo")).is_err());
    /// ```
    pub fn compile(def: &RuleDef) -> Result<Self, RouteError> {
        Ok(Self {
            route: def.route.clone(),
            method: def.method.clone(),
            tokens: compile(&def.route)?,
        })
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// The handler key looked up in the context on dispatch
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether this rule has the same identity as `def`
    pub fn is(&self, def: &RuleDef) -> bool {
        self.route == def.route && self.method == def.method
    }

    pub fn to_def(&self) -> RuleDef {
        RuleDef::new(self.route.clone(), self.method.clone())
    }
}

// Tokens are a pure function of the route, so identity is (route, method).
impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.route == other.route && self.method == other.method
    }
}

impl Eq for Rule {}

impl From<&Rule> for RuleDef {
    fn from(rule: &Rule) -> Self {
        rule.to_def()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_equality_ignores_tokens() {
        let a = Rule::compile(&RuleDef::new("/foo/:bar", "foo")).unwrap();
        let b = a.clone();
        assert_eq!(a, b);

        let c = Rule::compile(&RuleDef::new("/foo/:bar", "bar")).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_rule_is_def() {
        let rule = Rule::compile(&RuleDef::new("/foo", "foo")).unwrap();
        assert!(rule.is(&RuleDef::new("/foo", "foo")));
        assert!(!rule.is(&RuleDef::new("/foo", "bar")));
        assert_eq!(RuleDef::from(&rule), RuleDef::new("/foo", "foo"));
    }

    #[test]
    fn test_from_value_rejects_non_rules() {
        assert!(RuleDef::from_value(json!(null)).is_err());
        assert!(RuleDef::from_value(json!({"method": "foo"})).is_err());
        assert!(RuleDef::from_value(json!({"route": "", "method": "foo"})).is_err());
        assert!(RuleDef::from_value(json!({"route": 1, "method": "foo"})).is_err());
    }

    #[test]
    fn test_rule_serializes_without_tokens() {
        let rule = Rule::compile(&RuleDef::new("/foo/*", "foo")).unwrap();
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value, json!({"route": "/foo/*", "method": "foo"}));
    }

    #[test]
    fn test_is_complete() {
        assert!(RuleDef::new("/foo", "foo").is_complete());
        assert!(!RuleDef::new("/foo", "").is_complete());
        assert!(!RuleDef::new("", "foo").is_complete());
    }
}
