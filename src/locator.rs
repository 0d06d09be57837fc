use crate::bag::OrderedBag;
use crate::callable::Callable;
use crate::error::BagError;
use crate::property::PropertyAccess;
use crate::value::Value;
use std::sync::{Arc, OnceLock};

/// A service container built on top of an [`OrderedBag`].
///
/// Where the bag is a passive store, the locator applies an invocation
/// policy when a key is resolved:
///
/// - a plain [`Callable`] is a factory and is invoked with no arguments
/// - a [`Protected`](crate::Protected) callable is handed back uninvoked, as a `Value::Callable`
/// - anything else is returned as stored
///
/// # Examples
///
/// ```
/// use sovran_bag::{ServiceLocator, Value};
///
/// let mut services = ServiceLocator::new();
/// services.set("name", "MyApp");
/// services.factory("greeting", || Value::from("hello"));
/// services.protect("on_error", |args| Value::from(args.len() as i64));
///
/// assert_eq!(services.resolve("name"), Value::from("MyApp"));
/// assert_eq!(services.resolve("greeting"), Value::from("hello"));
///
/// let handler = services.resolve("on_error");
/// assert_eq!(handler.call(&[Value::Null]).unwrap(), Value::Int(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ServiceLocator {
    bag: OrderedBag,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value as-is; a `Value::Callable` becomes a factory
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.bag.set(key, value);
    }

    /// Registers a factory that runs on every resolve
    pub fn factory<F>(&mut self, key: impl Into<String>, build: F)
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.bag.set(key, Callable::new(move |_| build()));
    }

    /// Registers a factory that runs on the first resolve only.
    ///
    /// Later resolves return clones of the cached result.
    pub fn singleton<F>(&mut self, key: impl Into<String>, build: F)
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        let key = key.into();
        let name = key.clone();
        let cell = Arc::new(OnceLock::new());
        self.bag.set(
            key,
            Callable::new(move |_| {
                cell.get_or_init(|| {
                    tracing::debug!(key = %name, "building singleton");
                    build()
                })
                .clone()
            }),
        );
    }

    /// Stores `f` as a protected callable so resolving returns it uninvoked
    pub fn protect<F>(&mut self, key: impl Into<String>, f: F)
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.bag.set(key, OrderedBag::protect(f));
    }

    /// Resolves `key` according to the invocation policy.
    ///
    /// Absent keys resolve to `Value::Null`.
    pub fn resolve(&self, key: &str) -> Value {
        let Some(stored) = self.bag.get(key) else {
            return Value::Null;
        };
        tracing::debug!(key, kind = stored.kind(), "resolving service");
        match stored {
            Value::Callable(factory) => factory.call(&[]),
            Value::Protected(protected) => Value::Callable(protected.inner().clone()),
            other => other.clone(),
        }
    }

    /// Resolves `key`, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `BagError::KeyNotFound` if nothing is stored under `key`.
    pub fn require(&self, key: &str) -> Result<Value, BagError> {
        if !self.bag.has(key) {
            return Err(BagError::KeyNotFound(key.to_string()));
        }
        Ok(self.resolve(key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.bag.has(key)
    }

    /// Borrows the underlying bag, where callables are visible uninvoked
    pub fn bag(&self) -> &OrderedBag {
        &self.bag
    }

    pub fn bag_mut(&mut self) -> &mut OrderedBag {
        &mut self.bag
    }

    pub fn into_bag(self) -> OrderedBag {
        self.bag
    }
}

impl From<OrderedBag> for ServiceLocator {
    fn from(bag: OrderedBag) -> Self {
        Self { bag }
    }
}

impl PropertyAccess for ServiceLocator {
    fn property(&self, name: &str) -> &Value {
        self.bag.property(name)
    }

    fn set_property(&mut self, name: &str, value: impl Into<Value>) {
        self.bag.set_property(name, value);
    }

    fn has_property(&self, name: &str) -> bool {
        self.bag.has_property(name)
    }

    fn unset_property(&mut self, name: &str) {
        self.bag.unset_property(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>) -> impl Fn() -> Value + Send + Sync + 'static {
        let counter = Arc::clone(counter);
        move || Value::from(counter.fetch_add(1, Ordering::SeqCst) as i64)
    }

    #[test]
    fn test_factory_runs_every_resolve() {
        let builds = Arc::new(AtomicUsize::new(0));
        let mut services = ServiceLocator::new();
        services.factory("id", counting(&builds));

        assert_eq!(services.resolve("id"), Value::Int(0));
        assert_eq!(services.resolve("id"), Value::Int(1));
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_singleton_runs_once() {
        let builds = Arc::new(AtomicUsize::new(0));
        let mut services = ServiceLocator::new();
        services.singleton("id", counting(&builds));

        assert_eq!(builds.load(Ordering::SeqCst), 0);
        assert_eq!(services.resolve("id"), Value::Int(0));
        assert_eq!(services.resolve("id"), Value::Int(0));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_protected_is_returned_uninvoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut services = ServiceLocator::new();
        services.protect("callback", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Value::from("foo")
        });

        let callback = services.resolve("callback");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(callback.as_callable().is_some());
        assert_eq!(callback.call(&[]).unwrap(), Value::from("foo"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_require_missing() {
        let services = ServiceLocator::new();
        assert!(services.resolve("db").is_null());
        assert!(matches!(
            services.require("db"),
            Err(BagError::KeyNotFound(key)) if key == "db"
        ));
    }

    #[test]
    fn test_bag_sees_raw_callables() {
        let mut services = ServiceLocator::new();
        services.factory("now", || Value::Int(1));
        assert_eq!(services.bag()["now"].kind(), "callable");
        assert_eq!(services.property("now").kind(), "callable");
    }

    #[test]
    fn test_bag_mut_edits_are_resolved() {
        let mut services = ServiceLocator::new();
        services.set("mode", "development");
        services.bag_mut().set("mode", "production");
        services.bag_mut().remove("missing");

        assert_eq!(services.resolve("mode"), Value::from("production"));
        assert!(services.has("mode"));
        assert_eq!(services.bag().len(), 1);
    }
}
