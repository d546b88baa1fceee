//! Source of the current path
//!
//! The router never owns the "address bar". It reads the live path through a
//! [`Location`] on every dispatch and writes through it on [`go`](crate::RouteMap::go).

use std::sync::{Arc, PoisonError, RwLock};

use crate::RouteError;

/// Where the router reads and writes the live path
pub trait Location: Send + Sync {
    /// Returns the live path, including any prefix
    fn read(&self) -> String;

    /// Replaces the live path
    ///
    /// Read-only locations keep the default, which refuses.
    fn write(&self, _path: &str) -> Result<(), RouteError> {
        Err(RouteError::ReadOnlyLocation)
    }
}

/// Any `Fn() -> String` reads as a location
///
/// # Examples
///
/// ```
/// use routemap::{Location, RouteMap, RuleDef};
///
/// let mut routes = RouteMap::new().with_location(|| "/foo/abc".to_string());
/// routes.add(RuleDef::new("/foo/:bar", "foo")).unwrap();
/// assert_eq!(routes.read_path(), "/foo/abc");
/// ```
impl<F> Location for F
where
    F: Fn() -> String + Send + Sync,
{
    fn read(&self) -> String {
        self()
    }
}

/// In-memory location shared between the router and its host
///
/// Cloning shares the same underlying path, so a test (or host) keeps one
/// handle to drive navigation while the router holds another.
///
/// # Examples
///
/// ```
/// use routemap::{Location, MemoryLocation};
///
/// let location = MemoryLocation::new("/");
/// let handle = location.clone();
/// handle.set("/foo/abc");
/// assert_eq!(location.read(), "/foo/abc");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    path: Arc<RwLock<String>>,
}

impl MemoryLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Arc::new(RwLock::new(path.into())),
        }
    }

    pub fn set(&self, path: impl Into<String>) {
        *self.path.write().unwrap_or_else(PoisonError::into_inner) = path.into();
    }
}

impl Location for MemoryLocation {
    fn read(&self) -> String {
        self.path
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write(&self, path: &str) -> Result<(), RouteError> {
        self.set(path);
        Ok(())
    }
}
