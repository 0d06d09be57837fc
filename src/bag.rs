use crate::callable::{self, Protected};
use crate::value::Value;
use indexmap::IndexMap;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

static NULL: Value = Value::Null;

/// An insertion-ordered bag of string keys and [`Value`]s.
///
/// Keys keep the position of their first insertion: overwriting a key leaves
/// it where it is, while removing and re-adding it moves it to the end.
///
/// The bag can be used through plain methods, through `bag["key"]`
/// subscripts, through the [`PropertyAccess`](crate::PropertyAccess) facade
/// or by iterating over it. All of them read and write the same entries.
///
/// The bag is a passive store. It never invokes the callables it holds; see
/// [`ServiceLocator`](crate::ServiceLocator) for a consumer that does.
///
/// # Examples
///
/// ```
/// use sovran_bag::{OrderedBag, Value};
///
/// let mut bag = OrderedBag::new();
/// bag.set("a", 1);
/// bag.set("b", 2);
/// bag.set("a", 3);
///
/// assert_eq!(bag.keys(), vec!["a", "b"]);
/// assert_eq!(bag["a"], Value::Int(3));
/// assert!(bag["missing"].is_null());
/// ```
#[derive(Clone, Debug, Default)]
pub struct OrderedBag {
    entries: IndexMap<String, Value>,
}

impl OrderedBag {
    /// Creates a new, empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bag with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Stores `value` under `key`.
    ///
    /// An existing key keeps its position; a new key goes to the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a clone of the value under `key`, or `default` when absent
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Returns the value under `key`, or `&Value::Null` when absent
    pub fn value(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }

    /// Returns mutable access to the value under `key`, if any
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns true if `key` is present
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Alias of [`has`](Self::has)
    pub fn contains_key(&self, key: &str) -> bool {
        self.has(key)
    }

    /// Merges `entries` into the bag.
    ///
    /// New keys are appended in iteration order and existing keys are
    /// updated in place. Keys not mentioned are left alone.
    pub fn replace<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let before = self.entries.len();
        let mut merged = 0usize;
        for (key, value) in entries {
            self.set(key, value);
            merged += 1;
        }
        tracing::trace!(
            merged,
            added = self.entries.len() - before,
            "replaced bag entries"
        );
    }

    /// Returns an owned snapshot of every entry in insertion order.
    ///
    /// Changing the snapshot does not affect the bag.
    pub fn all(&self) -> IndexMap<String, Value> {
        self.entries.clone()
    }

    /// Returns all keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Returns all values in insertion order
    pub fn values(&self) -> Vec<Value> {
        self.entries.values().cloned().collect()
    }

    /// Removes `key` and returns its value.
    ///
    /// The relative order of the remaining keys is preserved, which makes
    /// removal linear in the number of entries after `key`. Removing an
    /// absent key does nothing and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::trace!(dropped, "cleared bag");
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    ///
    /// Each call starts a fresh traversal of the current entries.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Marks `f` as protected so consumers return it instead of invoking it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_bag::{OrderedBag, Value};
    ///
    /// let mut bag = OrderedBag::new();
    /// bag.set("handler", OrderedBag::protect(|_| Value::from("foo")));
    ///
    /// assert_eq!(bag["handler"].call(&[]).unwrap(), Value::from("foo"));
    /// ```
    pub fn protect<F>(f: F) -> Protected
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        callable::protect(f)
    }
}

/// Two bags are equal when they hold equal entries in the same order
impl PartialEq for OrderedBag {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Index<&str> for OrderedBag {
    type Output = Value;

    /// Reads `key`, yielding `Value::Null` when it is absent
    fn index(&self, key: &str) -> &Value {
        self.value(key)
    }
}

impl IndexMut<&str> for OrderedBag {
    /// Gives write access to `key`, appending it as `Value::Null` first when
    /// absent so that `bag["key"] = value` behaves like [`OrderedBag::set`].
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.entries.entry(key.to_string()).or_default()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OrderedBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = OrderedBag::new();
        bag.replace(iter);
        bag
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for OrderedBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.replace(iter);
    }
}

impl From<IndexMap<String, Value>> for OrderedBag {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<OrderedBag> for IndexMap<String, Value> {
    fn from(bag: OrderedBag) -> Self {
        bag.entries
    }
}

/// Borrowing iterator over a bag's entries, created by [`OrderedBag::iter`]
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a OrderedBag {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for OrderedBag {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
