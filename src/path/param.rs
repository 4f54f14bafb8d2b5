// Named placeholders and the parameter maps they read from

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A named hole in a path template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    key: String,
}

impl Param {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Look up this parameter's value. Absent keys and null values both yield `None`.
    pub fn extract<'v, V>(&self, values: &'v V) -> Option<&'v str>
    where
        V: ParamValues + ?Sized,
    {
        values.get_param(&self.key)
    }
}

/// Shorthand for [`Param::new`]
pub fn param(key: impl Into<String>) -> Param {
    Param::new(key)
}

/// A single value in a parameter map
pub trait ParamValue {
    fn as_param(&self) -> Option<&str>;
}

impl ParamValue for str {
    fn as_param(&self) -> Option<&str> {
        Some(self)
    }
}

impl ParamValue for String {
    fn as_param(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ParamValue for Cow<'_, str> {
    fn as_param(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

// None stands for a key that is present but null
impl<T: ParamValue> ParamValue for Option<T> {
    fn as_param(&self) -> Option<&str> {
        self.as_ref().and_then(ParamValue::as_param)
    }
}

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn as_param(&self) -> Option<&str> {
        (**self).as_param()
    }
}

/// Mapping from parameter key to the string substituted for it
pub trait ParamValues {
    fn get_param(&self, key: &str) -> Option<&str>;
}

/// No parameters at all
impl ParamValues for () {
    fn get_param(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl<K, V, S> ParamValues for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: ParamValue,
    S: BuildHasher,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_param)
    }
}

impl<K, V> ParamValues for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: ParamValue,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_param)
    }
}

// Pair lists: the first matching key wins
impl<K, V> ParamValues for [(K, V)]
where
    K: AsRef<str>,
    V: ParamValue,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .and_then(|(_, v)| v.as_param())
    }
}

impl<K, V, const N: usize> ParamValues for [(K, V); N]
where
    K: AsRef<str>,
    V: ParamValue,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.as_slice().get_param(key)
    }
}

impl<K, V> ParamValues for Vec<(K, V)>
where
    K: AsRef<str>,
    V: ParamValue,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.as_slice().get_param(key)
    }
}

impl<T: ParamValues + ?Sized> ParamValues for &T {
    fn get_param(&self, key: &str) -> Option<&str> {
        (**self).get_param(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_present_key() {
        let mut values = HashMap::new();
        values.insert("id".to_string(), "42".to_string());
        assert_eq!(param("id").extract(&values), Some("42"));
    }

    #[test]
    fn test_extract_missing_key() {
        let values: HashMap<&str, &str> = HashMap::new();
        assert_eq!(param("id").extract(&values), None);
    }

    #[test]
    fn test_extract_null_value() {
        let mut values: HashMap<&str, Option<String>> = HashMap::new();
        values.insert("id", None);
        assert_eq!(param("id").extract(&values), None);
    }

    #[test]
    fn test_extract_from_pairs() {
        let values = [("a", "1"), ("b", "2"), ("a", "3")];
        assert_eq!(param("a").extract(&values), Some("1"));
        assert_eq!(param("b").extract(&values), Some("2"));
        assert_eq!(param("c").extract(&values), None);
    }

    #[test]
    fn test_extract_from_btree_map() {
        let mut values = BTreeMap::new();
        values.insert("slug", Cow::Borrowed("hello"));
        assert_eq!(param("slug").extract(&values), Some("hello"));
    }

    #[test]
    fn test_extract_from_unit() {
        assert_eq!(param("anything").extract(&()), None);
    }

    #[test]
    fn test_extract_is_verbatim() {
        let values = vec![("q".to_string(), "a b/c?d".to_string())];
        assert_eq!(param("q").extract(&values), Some("a b/c?d"));
    }
}
