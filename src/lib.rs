//! # sovran-bag
//!
//! An insertion-ordered key-value bag with several interchangeable ways in.
//!
//! `sovran-bag` stores [`Value`]s under string keys and remembers the order
//! keys were first inserted. The same entries can be reached through plain
//! methods, `bag["key"]` subscripts, the [`PropertyAccess`] facade, or by
//! iterating over the bag. Callables can be stored like any other value and
//! marked with [`protect`] so a consumer such as [`ServiceLocator`] knows to
//! hand them back instead of invoking them.
//!
//! ## Key Features
//!
//! - **Ordered**: keys iterate in first-insertion order; overwriting keeps the position
//! - **Forgiving reads**: absent keys read as [`Value::Null`] or a caller-supplied default
//! - **Forgiving deletes**: removing an absent key is a no-op
//! - **Any value**: data, closures, protected closures and arbitrary Rust objects
//! - **Passive**: the bag never invokes what it stores
//!
//! The bag has no internal locking. Wrap it in a `Mutex` or `RwLock` if it
//! must be shared between threads.
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_bag::{OrderedBag, Value};
//!
//! let mut bag = OrderedBag::new();
//! bag.set("foo", "bar");
//! bag.replace([("abc", "123"), ("foo", "baz")]);
//!
//! assert_eq!(bag.keys(), vec!["foo", "abc"]);
//! assert_eq!(bag.get("foo"), Some(&Value::from("baz")));
//! assert_eq!(bag.get_or("missing", "default"), Value::from("default"));
//! assert_eq!(bag.len(), 2);
//!
//! bag.remove("foo");
//! bag.remove("foo");
//! assert_eq!(bag.keys(), vec!["abc"]);
//! ```
//!
//! ### Subscripts and Properties
//!
//! ```rust
//! use sovran_bag::{OrderedBag, PropertyAccess, Value};
//!
//! let mut bag = OrderedBag::new();
//! bag["foo"] = Value::from("bar");
//!
//! assert_eq!(bag.get("foo"), Some(&Value::from("bar")));
//! assert_eq!(bag.property("foo"), &Value::from("bar"));
//! assert!(bag["nothing"].is_null());
//!
//! bag.unset_property("foo");
//! assert!(!bag.has("foo"));
//! ```
//!
//! ### Iteration
//!
//! ```rust
//! use sovran_bag::OrderedBag;
//!
//! let bag = OrderedBag::from_iter([("one", 1), ("two", 2)]);
//!
//! for (key, value) in &bag {
//!     println!("{key} = {value:?}");
//! }
//!
//! let keys: Vec<&str> = bag.iter().map(|(key, _)| key).collect();
//! assert_eq!(keys, ["one", "two"]);
//! ```
//!
//! ### Protecting Callables
//!
//! ```rust
//! use sovran_bag::{OrderedBag, ServiceLocator, Value};
//!
//! let mut services = ServiceLocator::new();
//!
//! // A plain callable is a factory: resolving it returns its result
//! services.factory("greeting", || Value::from("hello"));
//!
//! // A protected callable is returned as-is
//! services.set("formatter", OrderedBag::protect(|args| {
//!     Value::from(format!("<{}>", args[0].as_str().unwrap_or_default()))
//! }));
//!
//! assert_eq!(services.resolve("greeting"), Value::from("hello"));
//!
//! let formatter = services.resolve("formatter");
//! assert_eq!(formatter.call(&[Value::from("b")])?, Value::from("<b>"));
//! # Ok::<(), sovran_bag::BagError>(())
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_bag::{protect_value, BagError, Value};
//!
//! match protect_value(Value::from("not a function")) {
//!     Ok(_) => println!("protected"),
//!     Err(BagError::NotCallable(kind)) => println!("cannot protect a {kind}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

mod any_value;
mod bag;
mod callable;
mod error;
#[cfg(feature = "serde")]
mod json;
mod locator;
mod property;
mod value;

pub use any_value::AnyValue;
pub use bag::{Iter, OrderedBag};
pub use callable::{protect, protect_value, Callable, Protected};
pub use error::BagError;
pub use locator::ServiceLocator;
pub use property::PropertyAccess;
pub use value::Value;

// Re-exported so callers can name snapshot types without a direct dependency
pub use indexmap::IndexMap;
