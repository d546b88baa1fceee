//! Navigation snapshots, the handler context and dispatch hooks.
//!
//! A [`Snapshot`] pairs the rule that matched with the values it bound.
//! Snapshots are plain owned values: every accessor hands out a clone, so a
//! caller mutating its copy can never reach the router's state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::{Args, Rule};

/// One point in navigation history: a matched rule and its bindings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub rule: Rule,
    pub args: Args,
}

impl Snapshot {
    pub fn new(rule: Rule, args: Args) -> Self {
        Self { rule, args }
    }

    /// Bound value for `name`, if the path supplied one
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }
}

/// What a handler sees while it runs
///
/// `current` is the navigation being handled; `last` is the previous
/// completed one, which has not yet been replaced.
#[derive(Debug)]
pub struct Dispatch<'a> {
    pub args: &'a Args,
    pub current: &'a Snapshot,
    pub last: Option<&'a Snapshot>,
}

impl Dispatch<'_> {
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    /// Owned copy of the navigation being handled
    pub fn current(&self) -> Snapshot {
        self.current.clone()
    }

    /// Owned copy of the previous navigation
    pub fn last(&self) -> Option<Snapshot> {
        self.last.cloned()
    }
}

/// A callable registered under a rule's method name
pub type Handler = Arc<dyn Fn(&Dispatch<'_>) -> anyhow::Result<()> + Send + Sync>;

/// Registry of handlers keyed by method name
///
/// # Examples
///
/// ```
/// use routemap::Context;
///
/// let context = Context::new()
///     .with_handler("foo", |_| Ok(()))
///     .with_handler("bar", |nav| {
///         println!("bar got {:?}", nav.arg("id"));
///         Ok(())
///     });
///
/// assert!(context.contains("foo"));
/// assert_eq!(context.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Context {
    handlers: HashMap<String, Handler>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler<F>(mut self, method: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Dispatch<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.insert(method, handler);
        self
    }

    pub fn insert<F>(&mut self, method: impl Into<String>, handler: F) -> Option<Handler>
    where
        F: Fn(&Dispatch<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.handlers.insert(method.into(), Arc::new(handler))
    }

    pub fn remove(&mut self, method: &str) -> Option<Handler> {
        self.handlers.remove(method)
    }

    pub fn get(&self, method: &str) -> Option<&Handler> {
        self.handlers.get(method)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods().collect();
        methods.sort_unstable();
        f.debug_struct("Context").field("methods", &methods).finish()
    }
}

/// Extension points around rule registration and dispatch
///
/// Both methods default to doing nothing.
pub trait RouteHooks: Send + Sync {
    /// Called after a rule has been compiled and stored
    fn post_add(&self, _rule: &Rule) {}

    /// Called with a fresh match before it becomes `current`
    ///
    /// The returned snapshot is what gets committed and handed to the handler.
    fn pre_dispatch(&self, snapshot: Snapshot) -> Snapshot {
        snapshot
    }
}

/// Hooks that do nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl RouteHooks for NoHooks {}
