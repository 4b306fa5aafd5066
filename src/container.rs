//! A small dependency-injection container.
//!
//! Values are registered under a typed [`ServiceToken`] either directly or
//! through a factory. Factories run on the first [`Container::get`] and the
//! result is cached for later lookups.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vendure_admin::container::{Container, ServiceToken};
//!
//! const GREETING: ServiceToken<String> = ServiceToken::new("Greeting");
//!
//! let container = Container::new();
//! container.register_factory(GREETING, || Arc::new("hello".to_string()));
//!
//! assert!(container.has(GREETING));
//! assert_eq!(container.get(GREETING).unwrap().as_str(), "hello");
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use thiserror::Error;

type Instance = Arc<dyn Any + Send + Sync>;
type Factory = Arc<dyn Fn() -> Instance + Send + Sync>;

/// Errors returned by [`Container::get`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Nothing is registered under the token.
    #[error("Service not found: {0}")]
    NotFound(&'static str),

    /// The registered value has a different type than the token.
    #[error("Service '{name}' is registered with a different type")]
    TypeMismatch {
        /// The token name.
        name: &'static str,
    },
}

/// A typed key into a [`Container`].
///
/// Two tokens with the same name address the same slot.
pub struct ServiceToken<T> {
    name: &'static str,
    service: PhantomData<fn() -> T>,
}

impl<T> ServiceToken<T> {
    /// Creates a token.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            service: PhantomData,
        }
    }

    /// Returns the token name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for ServiceToken<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ServiceToken<T> {}

impl<T> fmt::Debug for ServiceToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceToken").field(&self.name).finish()
    }
}

/// Registry of shared services.
///
/// # Thread Safety
///
/// `Container` is `Send + Sync`. Factories are called without holding the
/// internal locks, so a factory may itself read from the container.
#[derive(Default)]
pub struct Container {
    instances: RwLock<HashMap<&'static str, Instance>>,
    factories: RwLock<HashMap<&'static str, Factory>>,
}

// Verify Container is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Container>();
};

static GLOBAL: OnceLock<Container> = OnceLock::new();

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide container.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Registers `value` under `token`, replacing any earlier value or factory.
    pub fn register<T: Send + Sync + 'static>(&self, token: ServiceToken<T>, value: Arc<T>) {
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token.name);
        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.name, value);
    }

    /// Registers a factory under `token`, replacing any earlier value or factory.
    pub fn register_factory<T, F>(&self, token: ServiceToken<T>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token.name);
        let factory: Factory = Arc::new(move || -> Instance { factory() });
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.name, factory);
    }

    /// Resolves `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NotFound`] if nothing is registered and
    /// [`ContainerError::TypeMismatch`] if the value is not a `T`.
    pub fn get<T: Send + Sync + 'static>(
        &self,
        token: ServiceToken<T>,
    ) -> Result<Arc<T>, ContainerError> {
        let cached = self
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token.name)
            .cloned();

        let instance = match cached {
            Some(instance) => instance,
            None => {
                let factory = self
                    .factories
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get(token.name)
                    .cloned()
                    .ok_or(ContainerError::NotFound(token.name))?;
                let created = factory();
                self.instances
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entry(token.name)
                    .or_insert(created)
                    .clone()
            }
        };

        instance
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch { name: token.name })
    }

    /// Returns `true` if a value or factory is registered under `token`.
    #[must_use]
    pub fn has<T>(&self, token: ServiceToken<T>) -> bool {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(token.name)
            || self
                .factories
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(token.name)
    }

    /// Removes the value and factory under `token`. Returns `true` if either existed.
    pub fn remove<T>(&self, token: ServiceToken<T>) -> bool {
        let instance = self
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token.name);
        let factory = self
            .factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token.name);
        instance.is_some() || factory.is_some()
    }

    /// Removes everything.
    pub fn clear(&self) {
        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instances = self.instances.read().unwrap_or_else(PoisonError::into_inner);
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<&str> = instances.keys().chain(factories.keys()).copied().collect();
        names.sort_unstable();
        names.dedup();
        f.debug_struct("Container").field("services", &names).finish()
    }
}
