//! # RouteMap
//!
//! A two-way route template library: render canonical paths from parameter
//! values, and dispatch paths back to handlers with their values recovered.
//!
//! ## Template Grammar
//!
//! - Literal segments (`/foo`)
//! - Required positional parameters (`/:id`)
//! - Optional positional parameters (`/:id?`)
//! - Required named parameters (`/page:` → `/page=2`)
//! - Optional named parameters (`/page:?`)
//! - Trailing wildcards (`/*`, or `/rest:*` to bind under a name)
//!
//! Named segments may appear anywhere after the positional ones and in any
//! order; positional segments are matched in order.
//!
//! ## Deterministic Matching
//!
//! Templates that could match ambiguously are rejected when added:
//! - two parameters with the same name
//! - a required positional parameter after an optional one
//! - anything after a wildcard
//!
//! Rules are tried in the order they were added and the first match wins.
//!
//! ## Example
//!
//! ```
//! use routemap::{Args, Context, MemoryLocation, RouteMap, RuleDef};
//!
//! let location = MemoryLocation::new("/");
//! let mut routes = RouteMap::new().with_location(location.clone());
//!
//! let rule = RuleDef::new("/users/:id/tab:?", "user");
//! routes.add(rule.clone()).unwrap();
//! routes.set_context(Context::new().with_handler("user", |nav| {
//!     assert_eq!(nav.arg("id"), Some("42"));
//!     Ok(())
//! }));
//!
//! let mut params = Args::new();
//! params.insert("id".into(), "42".into());
//! let path = routes.hash(&rule, &params).unwrap();
//! assert_eq!(path, "/users/42");
//!
//! location.set(path);
//! routes.handle().unwrap();
//! assert_eq!(routes.current(), routes.last());
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod dispatch;
mod error;
mod location;
pub mod path;
pub mod route;
mod rule;
pub mod store;

pub use config::{RouteMapConfig, RoutingConfig};
pub use dispatch::{Context, Dispatch, Handler, NoHooks, RouteHooks, Snapshot};
pub use error::{ErrorKind, RouteError};
pub use location::{Location, MemoryLocation};
pub use route::token::Token;
pub use rule::{Rule, RuleDef};

use store::RuleStore;

/// Parameter bindings: name (or `*` for the unnamed wildcard) → value
pub type Args = BTreeMap<String, String>;

// ============================================================================
// RouteMap
// ============================================================================

/// Router instance: rule store, handler context, prefix and navigation state
///
/// All state is per instance; nothing is global.
pub struct RouteMap {
    store: RuleStore,
    context: Context,
    prefix: String,
    location: Box<dyn Location>,
    hooks: Box<dyn RouteHooks>,
    current: Option<Snapshot>,
    last: Option<Snapshot>,
}

impl Default for RouteMap {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteMap {
    /// Creates an empty router reading from an in-memory location at `/`
    pub fn new() -> Self {
        Self {
            store: RuleStore::new(),
            context: Context::new(),
            prefix: String::new(),
            location: Box::new(MemoryLocation::new("/")),
            hooks: Box::new(NoHooks),
            current: None,
            last: None,
        }
    }

    /// Builds a router from configuration, adding its rules in order
    ///
    /// # Examples
    ///
    /// ```
    /// use routemap::{RouteMap, RouteMapConfig};
    ///
    /// let config = RouteMapConfig::from_toml(r#"
    ///     [[rules]]
    ///     route = "/foo/:bar"
    ///     method = "foo"
    /// "#).unwrap();
    ///
    /// let routes = RouteMap::from_config(&config).unwrap();
    /// assert_eq!(routes.rules().len(), 1);
    /// ```
    pub fn from_config(config: &RouteMapConfig) -> Result<Self, RouteError> {
        let mut routes = Self::new()
            .with_prefix(config.routing.prefix.clone())
            .with_location(MemoryLocation::new(config.routing.start.clone()));

        for def in &config.rules {
            routes.add(def.clone())?;
        }
        Ok(routes)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Replaces the location the router reads paths from
    pub fn with_location(mut self, location: impl Location + 'static) -> Self {
        self.location = Box::new(location);
        self
    }

    pub fn with_hooks(mut self, hooks: impl RouteHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    // ========================================================================
    // Rule Store
    // ========================================================================

    /// Compiles and registers a rule
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Grammar`] when the template is malformed
    /// - [`ErrorKind::DuplicateRule`] when the same (route, method) is already registered
    pub fn add(&mut self, def: RuleDef) -> Result<(), RouteError> {
        let rule = self.store.add(&def)?;
        tracing::debug!("Added rule {} -> {}", rule.route(), rule.method());
        self.hooks.post_add(rule);
        Ok(())
    }

    /// Unregisters the rule equal to `def`
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidRuleReference`] when `def` is incomplete or was never added.
    pub fn remove(&mut self, def: &RuleDef) -> Result<(), RouteError> {
        let rule = self.store.remove(def)?;
        tracing::debug!("Removed rule {} -> {}", rule.route(), rule.method());
        Ok(())
    }

    /// Registered rules in match-priority order
    pub fn rules(&self) -> &[Rule] {
        self.store.rules()
    }

    // ========================================================================
    // Context & Prefix
    // ========================================================================

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Replaces the handler registry and returns the new one
    pub fn set_context(&mut self, context: Context) -> &Context {
        self.context = context;
        &self.context
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replaces the prefix and returns the new one
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &str {
        self.prefix = prefix.into();
        &self.prefix
    }

    // ========================================================================
    // Generation & Parsing
    // ========================================================================

    /// Renders the canonical path for a rule and its parameters
    ///
    /// The rule does not need to be registered. The prefix is not included;
    /// see [`RouteMap::link`].
    ///
    /// # Examples
    ///
    /// ```
    /// use routemap::{Args, RouteMap, RuleDef};
    ///
    /// let routes = RouteMap::new();
    /// let rule = RuleDef::new("/foo/:bar?", "foo");
    /// assert_eq!(routes.hash(&rule, &Args::new()).unwrap(), "/foo/");
    /// ```
    pub fn hash(&self, def: &RuleDef, params: &Args) -> Result<String, RouteError> {
        match self.store.get(def) {
            Some(rule) => route::render(rule, params),
            None => route::render(&Rule::compile(def)?, params),
        }
    }

    /// Like [`RouteMap::hash`], with the prefix prepended
    pub fn link(&self, def: &RuleDef, params: &Args) -> Result<String, RouteError> {
        Ok(format!("{}{}", self.prefix, self.hash(def, params)?))
    }

    /// Matches a path against the registered rules
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Grammar`] ([`RouteError::NoMatch`]) when no rule matches.
    pub fn parse(&self, path: &str) -> Result<Snapshot, RouteError> {
        match route::find_match(self.store.rules(), path) {
            Some((rule, args)) => Ok(Snapshot::new(rule.clone(), args)),
            None => {
                tracing::debug!("No rule matches {}", path);
                Err(RouteError::NoMatch {
                    path: path.to_string(),
                })
            }
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// The location's current path with the prefix removed
    pub fn read_path(&self) -> String {
        path::strip_prefix(&self.location.read(), &self.prefix).to_string()
    }

    /// Dispatches the location's current path to its handler
    ///
    /// The new snapshot becomes `current` before the handler runs. `last` is
    /// only replaced once the handler returns successfully; a failing handler
    /// leaves `last` pointing at the previous completed navigation.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Grammar`] when no rule matches the path
    /// - [`ErrorKind::MissingHandler`] when the rule's method is not in the context
    /// - [`ErrorKind::Handler`] when the handler fails
    pub fn handle(&mut self) -> Result<(), RouteError> {
        let path = self.read_path();
        let snapshot = self.hooks.pre_dispatch(self.parse(&path)?);
        tracing::debug!("Dispatching {} to {}", path, snapshot.rule.method());

        let current = &*self.current.insert(snapshot);
        let method = current.rule.method();
        let Some(handler) = self.context.get(method).map(Arc::clone) else {
            tracing::warn!("No handler registered for {}", method);
            return Err(RouteError::MissingHandler {
                method: method.to_string(),
            });
        };

        let nav = Dispatch {
            args: &current.args,
            current,
            last: self.last.as_ref(),
        };

        if let Err(source) = handler(&nav) {
            tracing::warn!("Handler {} failed: {:#}", method, source);
            return Err(RouteError::Handler {
                method: method.to_string(),
                source,
            });
        }

        self.last = self.current.clone();
        Ok(())
    }

    /// Writes `path` (with the prefix) to the location, then dispatches it
    ///
    /// # Examples
    ///
    /// ```
    /// use routemap::{Context, MemoryLocation, Location, RouteMap, RuleDef};
    ///
    /// let location = MemoryLocation::new("/");
    /// let mut routes = RouteMap::new()
    ///     .with_prefix("#")
    ///     .with_location(location.clone())
    ///     .with_context(Context::new().with_handler("foo", |_| Ok(())));
    /// routes.add(RuleDef::new("/foo/:bar", "foo")).unwrap();
    ///
    /// routes.go("/foo/abc").unwrap();
    /// assert_eq!(location.read(), "#/foo/abc");
    /// assert_eq!(routes.current().unwrap().arg("bar"), Some("abc"));
    /// ```
    pub fn go(&mut self, path: &str) -> Result<(), RouteError> {
        self.location.write(&format!("{}{}", self.prefix, path))?;
        self.handle()
    }

    /// Copy of the navigation being (or most recently) handled
    pub fn current(&self) -> Option<Snapshot> {
        self.current.clone()
    }

    /// Copy of the last navigation whose handler completed
    pub fn last(&self) -> Option<Snapshot> {
        self.last.clone()
    }
}

impl std::fmt::Debug for RouteMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteMap")
            .field("rules", &self.store.rules())
            .field("context", &self.context)
            .field("prefix", &self.prefix)
            .field("current", &self.current)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
