use crate::any_value::AnyValue;
use crate::callable::{Callable, Protected};
use crate::error::BagError;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

/// A value stored in an [`OrderedBag`](crate::OrderedBag).
///
/// `Null` doubles as the absence marker: reads of a missing key through the
/// subscript and property facades yield `&Value::Null`.
///
/// Data variants compare structurally; a float equals itself even when it
/// is NaN. `Callable`, `Protected` and `Object`
/// compare by handle identity, so two clones of one closure are equal while
/// two separately built closures never are.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Callable(Callable),
    Protected(Protected),
    Object(AnyValue),
}

impl Value {
    /// Wraps an arbitrary Rust value as an `Object`
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Value::Object(AnyValue::new(value))
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Callable(_) => "callable",
            Value::Protected(_) => "protected",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for both plain and protected callables
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable(_) | Value::Protected(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns floats as-is and widens integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Callable(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_protected(&self) -> Option<&Protected> {
        match self {
            Value::Protected(p) => Some(p),
            _ => None,
        }
    }

    /// Borrows the contents of an `Object` as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Object(obj) => obj.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Invokes a plain or protected callable.
    ///
    /// # Errors
    ///
    /// Returns `BagError::NotCallable` if the value is not callable.
    pub fn call(&self, args: &[Value]) -> Result<Value, BagError> {
        match self {
            Value::Callable(c) => Ok(c.call(args)),
            Value::Protected(p) => Ok(p.call(args)),
            other => Err(BagError::NotCallable(other.kind())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            (Value::Protected(a), Value::Protected(b)) => a.inner().ptr_eq(b.inner()),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Callable(c)
    }
}

impl From<Protected> for Value {
    fn from(p: Protected) -> Self {
        Value::Protected(p)
    }
}

impl From<AnyValue> for Value {
    fn from(obj: AnyValue) -> Self {
        Value::Object(obj)
    }
}

impl<T: Any + Send + Sync> From<Arc<T>> for Value {
    fn from(obj: Arc<T>) -> Self {
        Value::Object(AnyValue::from_arc(obj))
    }
}
