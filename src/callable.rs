use crate::error::BagError;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

type CallFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared handle to a function stored in a bag.
///
/// Arguments are passed as a slice of [`Value`]s and the result is a single
/// `Value`. Cloning a `Callable` shares the underlying closure.
///
/// # Examples
///
/// ```
/// use sovran_bag::{Callable, Value};
///
/// let add = Callable::new(|args| {
///     let sum: i64 = args.iter().filter_map(Value::as_i64).sum();
///     Value::Int(sum)
/// });
///
/// assert_eq!(add.call(&[Value::Int(2), Value::Int(3)]), Value::Int(5));
/// ```
#[derive(Clone)]
pub struct Callable(Arc<CallFn>);

impl Callable {
    /// Creates a callable from a closure
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the closure with `args`
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Returns true if both handles share the same closure
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// A callable marked so consumers return it as-is instead of invoking it.
///
/// Calling a `Protected` forwards the arguments unmodified to the wrapped
/// callable and returns its result verbatim. The bag treats it like any other
/// value; the distinction only matters to consumers such as
/// [`ServiceLocator`](crate::ServiceLocator), which invoke plain
/// [`Callable`]s as factories and hand protected ones back untouched.
#[derive(Clone, Debug)]
pub struct Protected {
    inner: Callable,
}

impl Protected {
    pub fn new(inner: Callable) -> Self {
        Self { inner }
    }

    /// Forwards to the wrapped callable
    pub fn call(&self, args: &[Value]) -> Value {
        self.inner.call(args)
    }

    pub fn inner(&self) -> &Callable {
        &self.inner
    }

    pub fn into_inner(self) -> Callable {
        self.inner
    }
}

impl From<Callable> for Protected {
    fn from(inner: Callable) -> Self {
        Self::new(inner)
    }
}

impl TryFrom<Value> for Protected {
    type Error = BagError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Callable(callable) => Ok(Self::new(callable)),
            Value::Protected(protected) => Ok(protected),
            other => Err(BagError::NotCallable(other.kind())),
        }
    }
}

/// Marks a closure as protected.
///
/// # Examples
///
/// ```
/// use sovran_bag::{protect, Value};
///
/// let greet = protect(|_| Value::from("foo"));
/// assert_eq!(greet.call(&[]), Value::from("foo"));
/// ```
pub fn protect<F>(f: F) -> Protected
where
    F: Fn(&[Value]) -> Value + Send + Sync + 'static,
{
    tracing::trace!("protecting callable");
    Protected::new(Callable::new(f))
}

/// Marks a dynamic value as protected.
///
/// Plain callables are wrapped, protected values are returned unchanged.
///
/// # Errors
///
/// Returns `BagError::NotCallable` for any other kind of value.
pub fn protect_value(value: Value) -> Result<Value, BagError> {
    Protected::try_from(value).map(Value::Protected)
}
