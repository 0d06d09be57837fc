use pretty_assertions::assert_eq;
use sovran_bag::{IndexMap, OrderedBag, PropertyAccess, Value};

fn populated() -> OrderedBag {
    let mut bag = OrderedBag::new();
    bag.replace([("abc", "123"), ("foo", "bar")]);
    bag
}

#[test]
fn test_set() {
    let mut bag = OrderedBag::new();
    bag.set("foo", "bar");

    assert!(bag.has("foo"));
    assert_eq!(bag.all()["foo"], Value::from("bar"));
}

#[test]
fn test_get() {
    let bag = populated();
    assert_eq!(bag.get("foo"), Some(&Value::from("bar")));
    assert_eq!(bag.get_or("foo", "default"), Value::from("bar"));
}

#[test]
fn test_get_not_exists() {
    let bag = populated();
    assert_eq!(bag.get("abcd"), None);
    assert_eq!(bag.get_or("abcd", "default"), Value::from("default"));
    assert_eq!(bag.get_or("abcd", Value::Null), Value::Null);
    assert!(bag.value("abcd").is_null());
}

#[test]
fn test_replace_is_additive() {
    let mut bag = OrderedBag::new();
    bag.set("keep", true);
    bag.replace([("abc", "123"), ("foo", "bar")]);

    assert_eq!(bag.keys(), vec!["keep", "abc", "foo"]);
    assert_eq!(bag["abc"], Value::from("123"));
    assert_eq!(bag["foo"], Value::from("bar"));

    bag.replace([("keep", false)]);
    assert_eq!(bag.keys(), vec!["keep", "abc", "foo"]);
    assert_eq!(bag["keep"], Value::Bool(false));
}

#[test]
fn test_all() {
    let bag = populated();

    let mut expected = IndexMap::new();
    expected.insert("abc".to_string(), Value::from("123"));
    expected.insert("foo".to_string(), Value::from("bar"));
    assert_eq!(bag.all(), expected);
}

#[test]
fn test_all_is_a_snapshot() {
    let bag = populated();
    let mut snapshot = bag.all();
    snapshot.insert("extra".to_string(), Value::Int(1));
    snapshot["foo"] = Value::from("changed");

    assert_eq!(bag.len(), 2);
    assert_eq!(bag["foo"], Value::from("bar"));
}

#[test]
fn test_keys() {
    assert_eq!(populated().keys(), vec!["abc", "foo"]);
    assert!(OrderedBag::new().keys().is_empty());
}

#[test]
fn test_remove() {
    let mut bag = populated();
    bag.remove("foo");
    assert_eq!(bag, OrderedBag::from_iter([("abc", "123")]));

    assert_eq!(bag.remove("foo"), None);
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_clear() {
    let mut bag = populated();
    bag.clear();

    assert_eq!(bag.len(), 0);
    assert!(bag.is_empty());
    assert!(bag.keys().is_empty());
    assert!(bag.all().is_empty());
}

#[test]
fn test_subscript_get() {
    let bag = populated();
    assert_eq!(bag["foo"], Value::from("bar"));
    assert_eq!(bag["bar"], Value::Null);
}

#[test]
fn test_subscript_set() {
    let mut bag = populated();
    bag["foo"] = Value::from("changed");

    assert_eq!(bag.get("foo"), Some(&Value::from("changed")));
    assert_eq!(bag.keys(), vec!["abc", "foo"]);
}

#[test]
fn test_subscript_exists_and_unset() {
    let mut bag = populated();
    assert!(bag.has("foo"));
    assert!(!bag.has("bar"));

    bag.remove("foo");
    assert_eq!(bag.keys(), vec!["abc"]);
}

#[test]
fn test_count() {
    let bag = populated();
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.iter().count(), 2);
}

#[test]
fn test_iteration_matches_all() {
    let bag = populated();

    let first: Vec<(String, Value)> = bag
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    let second: Vec<(String, Value)> = (&bag)
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    let snapshot: Vec<(String, Value)> = bag.all().into_iter().collect();

    assert_eq!(first, snapshot);
    assert_eq!(first, second);
}

#[test]
fn test_iteration_reflects_mutation() {
    let mut bag = populated();
    let before: Vec<String> = bag.iter().map(|(k, _)| k.to_string()).collect();

    bag.set("zzz", 1);
    let after: Vec<String> = bag.iter().map(|(k, _)| k.to_string()).collect();

    assert_eq!(before, vec!["abc", "foo"]);
    assert_eq!(after, vec!["abc", "foo", "zzz"]);
}

#[test]
fn test_property_get() {
    let bag = populated();
    assert_eq!(bag.property("abc"), &Value::from("123"));
    assert_eq!(bag.property("foo"), &Value::from("bar"));
}

#[test]
fn test_property_set() {
    let mut bag = OrderedBag::new();
    bag.set_property("foo", "bar");

    assert!(bag.all().contains_key("foo"));
    assert_eq!(bag.property("foo"), &Value::from("bar"));
}

#[test]
fn test_property_isset() {
    let bag = populated();
    assert!(bag.has_property("abc"));
    assert!(bag.has_property("foo"));
    assert!(!bag.has_property("foobar"));
}

#[test]
fn test_property_unset() {
    let mut bag = populated();
    assert!(bag.has_property("abc"));

    bag.unset_property("abc");
    assert!(!bag.has_property("abc"));
    assert!(!bag.all().contains_key("abc"));
    assert!(bag.all().contains_key("foo"));
}

#[test]
fn test_facades_are_equivalent() {
    let mut by_method = OrderedBag::new();
    let mut by_subscript = OrderedBag::new();
    let mut by_property = OrderedBag::new();

    for (key, value) in [("a", 1), ("b", 2), ("a", 3)] {
        by_method.set(key, value);
        by_subscript[key] = Value::from(value);
        by_property.set_property(key, value);
    }
    by_method.remove("b");
    by_subscript.remove("b");
    by_property.unset_property("b");

    assert_eq!(by_method, by_subscript);
    assert_eq!(by_method, by_property);
    assert_eq!(by_method.keys(), vec!["a"]);
}

#[test]
fn test_protect() {
    let mut bag = OrderedBag::new();
    let protected = OrderedBag::protect(|_| Value::from("foo"));
    bag.set("callable", protected.clone());

    assert_eq!(protected.call(&[]), Value::from("foo"));
    assert_eq!(bag["callable"], Value::Protected(protected));
    assert_eq!(bag["callable"].call(&[]).unwrap(), Value::from("foo"));
}

#[test]
fn test_stores_objects_by_handle() {
    #[derive(Debug, PartialEq)]
    struct Connection {
        dsn: String,
    }

    let mut bag = OrderedBag::new();
    bag.set(
        "db",
        Value::object(Connection {
            dsn: "sqlite::memory:".to_string(),
        }),
    );
    let copy = bag.clone();

    assert_eq!(bag["db"], copy["db"]);
    assert_eq!(
        bag["db"].downcast_ref::<Connection>().map(|c| c.dsn.as_str()),
        Some("sqlite::memory:")
    );
}
