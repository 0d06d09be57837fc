use crate::bag::OrderedBag;
use crate::value::Value;

/// Name-based access to a bag's entries.
///
/// This is the property-style facade: a name is nothing more than a string
/// key, so every method here behaves exactly like its subscript or method
/// counterpart on [`OrderedBag`]. No names are reserved.
///
/// # Examples
///
/// ```
/// use sovran_bag::{OrderedBag, PropertyAccess, Value};
///
/// let mut bag = OrderedBag::new();
/// bag.set_property("foo", "bar");
///
/// assert_eq!(bag.property("foo"), &Value::from("bar"));
/// assert_eq!(bag.get("foo"), Some(&Value::from("bar")));
/// assert!(bag.has_property("foo"));
///
/// bag.unset_property("foo");
/// assert!(bag.property("foo").is_null());
/// ```
pub trait PropertyAccess {
    /// Reads `name`, yielding `Value::Null` when absent
    fn property(&self, name: &str) -> &Value;

    /// Writes `name`, keeping its position if it already exists
    fn set_property(&mut self, name: &str, value: impl Into<Value>);

    fn has_property(&self, name: &str) -> bool;

    /// Deletes `name`; a missing name is ignored
    fn unset_property(&mut self, name: &str);
}

impl PropertyAccess for OrderedBag {
    fn property(&self, name: &str) -> &Value {
        self.value(name)
    }

    fn set_property(&mut self, name: &str, value: impl Into<Value>) {
        self.set(name, value);
    }

    fn has_property(&self, name: &str) -> bool {
        self.has(name)
    }

    fn unset_property(&mut self, name: &str) {
        self.remove(name);
    }
}
