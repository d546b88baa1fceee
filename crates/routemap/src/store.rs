/// Ordered store of compiled rules
///
/// Insertion order is match priority: the first rule added that matches a
/// path wins. Identity is the (route, method) pair.
use crate::{Rule, RouteError, RuleDef};

#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and inserts a rule
    ///
    /// Compilation happens before the duplicate check, so a malformed
    /// template always reports its grammar error. Nothing changes on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use routemap::{store::RuleStore, RuleDef};
    ///
    /// let mut store = RuleStore::new();
    /// store.add(&RuleDef::new("/foo/:bar", "foo")).unwrap();
    /// store.add(&RuleDef::new("/foo/:bar", "bar")).unwrap();
    /// assert!(store.add(&RuleDef::new("/foo/:bar", "foo")).is_err());
    /// assert_eq!(store.len(), 2);
    /// ```
    pub fn add(&mut self, def: &RuleDef) -> Result<&Rule, RouteError> {
        if !def.is_complete() {
            return Err(incomplete(def));
        }
        let rule = Rule::compile(def)?;

        if self.rules.contains(&rule) {
            return Err(RouteError::DuplicateRule {
                route: def.route.clone(),
                method: def.method.clone(),
            });
        }

        self.rules.push(rule);
        Ok(&self.rules[self.rules.len() - 1])
    }

    /// Removes the rule equal to `def`
    ///
    /// Fails when `def` is incomplete or no stored rule has the same
    /// (route, method) pair.
    pub fn remove(&mut self, def: &RuleDef) -> Result<Rule, RouteError> {
        if !def.is_complete() {
            return Err(incomplete(def));
        }

        let pos = self
            .rules
            .iter()
            .position(|r| r.is(def))
            .ok_or_else(|| RouteError::UnknownRule {
                route: def.route.clone(),
                method: def.method.clone(),
            })?;

        Ok(self.rules.remove(pos))
    }

    /// Stored rules in match-priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, def: &RuleDef) -> Option<&Rule> {
        self.rules.iter().find(|r| r.is(def))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn incomplete(def: &RuleDef) -> RouteError {
    RouteError::InvalidRule {
        reason: format!("rule needs both a route and a method, got {def:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_add_preserves_order() {
        let mut store = RuleStore::new();
        store.add(&RuleDef::new("/b", "b")).unwrap();
        store.add(&RuleDef::new("/a", "a")).unwrap();

        let routes: Vec<&str> = store.rules().iter().map(Rule::route).collect();
        assert_eq!(routes, vec!["/b", "/a"]);
    }

    #[test]
    fn test_add_grammar_error_leaves_store_untouched() {
        let mut store = RuleStore::new();
        let err = store.add(&RuleDef::new("/foo/*/:bar", "foo")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Grammar);
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_rule() {
        let mut store = RuleStore::new();
        store.add(&RuleDef::new("/foo/:bar/baz:", "foo")).unwrap();
        let err = store.add(&RuleDef::new("/foo/:bar/baz:", "foo")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateRule);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = RuleStore::new();
        let def = RuleDef::new("/foo/:bar", "foo");
        store.add(&def).unwrap();

        let removed = store.remove(&def).unwrap();
        assert!(removed.is(&def));
        assert!(store.is_empty());

        let err = store.remove(&def).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRuleReference);
    }

    #[test]
    fn test_remove_incomplete_rule() {
        let mut store = RuleStore::new();
        store.add(&RuleDef::new("/foo", "foo")).unwrap();

        for def in [
            RuleDef::new("", ""),
            RuleDef::new("/foo", ""),
            RuleDef::new("", "foo"),
        ] {
            let err = store.remove(&def).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRuleReference);
        }
        assert_eq!(store.len(), 1);
    }
}
