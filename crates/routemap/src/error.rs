/// Error types for rule compilation, matching and dispatch
///
/// Every failure surfaces as a [`RouteError`]. Callers that only care about
/// the broad category (for example "is this a grammar problem?") use
/// [`RouteError::kind`] instead of matching on every variant.
use thiserror::Error;

/// Broad category of a [`RouteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed template, or no rule matches a path
    Grammar,
    /// The same (route, method) pair was added twice
    DuplicateRule,
    /// `remove` was given something that is not a registered rule
    InvalidRuleReference,
    /// The matched rule's method has no handler in the context
    MissingHandler,
    /// `hash` was called without a required parameter value
    MissingParam,
    /// The location cannot be written to
    Location,
    /// The handler itself failed
    Handler,
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("duplicate parameter `{name}` in route `{route}`")]
    DuplicateParam { route: String, name: String },

    #[error("required parameter `{name}` follows an optional parameter in route `{route}`")]
    RequiredAfterOptional { route: String, name: String },

    #[error("segment `{segment}` follows a wildcard in route `{route}`")]
    SegmentAfterWildcard { route: String, segment: String },

    #[error("invalid segment `{segment}` in route `{route}`")]
    InvalidSegment { route: String, segment: String },

    #[error("no route matches `{path}`")]
    NoMatch { path: String },

    #[error("rule `{route}` -> `{method}` is already registered")]
    DuplicateRule { route: String, method: String },

    #[error("`{route}` -> `{method}` is not a registered rule")]
    UnknownRule { route: String, method: String },

    #[error("not a rule: {reason}")]
    InvalidRule { reason: String },

    #[error("no handler registered for `{method}`")]
    MissingHandler { method: String },

    #[error("missing value for parameter `{name}` in route `{route}`")]
    MissingParam { route: String, name: String },

    #[error("location is read-only")]
    ReadOnlyLocation,

    #[error("handler `{method}` failed")]
    Handler {
        method: String,
        #[source]
        source: anyhow::Error,
    },
}

impl RouteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteError::DuplicateParam { .. }
            | RouteError::RequiredAfterOptional { .. }
            | RouteError::SegmentAfterWildcard { .. }
            | RouteError::InvalidSegment { .. }
            | RouteError::NoMatch { .. } => ErrorKind::Grammar,
            RouteError::DuplicateRule { .. } => ErrorKind::DuplicateRule,
            RouteError::UnknownRule { .. } | RouteError::InvalidRule { .. } => {
                ErrorKind::InvalidRuleReference
            }
            RouteError::MissingHandler { .. } => ErrorKind::MissingHandler,
            RouteError::MissingParam { .. } => ErrorKind::MissingParam,
            RouteError::ReadOnlyLocation => ErrorKind::Location,
            RouteError::Handler { .. } => ErrorKind::Handler,
        }
    }

    /// Shorthand for `kind() == ErrorKind::Grammar`
    pub fn is_grammar(&self) -> bool {
        self.kind() == ErrorKind::Grammar
    }
}
