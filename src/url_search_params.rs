use crate::compat::{BTreeMap, String, ToString, Vec};
use crate::error::SearchParamsError;
use crate::form_urlencoded;
use crate::helpers::strip_leading;

/// Represents URL search parameters (query string).
/// An ordered list of name/value pairs where names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    params: Vec<(String, String)>,
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        Self::from_query(strip_leading(query, '?'))
    }

    /// Parse a query exactly as stored in a URL record
    pub(crate) fn from_query(query: &str) -> Self {
        Self {
            params: form_urlencoded::parse(query),
        }
    }

    /// Build from nested sequences such as `[["a", "1"], ["b", "2"]]`.
    ///
    /// # Errors
    ///
    /// Returns an error if any inner sequence does not hold exactly a name
    /// and a value.
    pub fn try_from_sequences<I, S, T>(sequences: I) -> Result<Self, SearchParamsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        let params = sequences
            .into_iter()
            .map(|sequence| match sequence.as_ref() {
                [name, value] => Ok((name.as_ref().to_string(), value.as_ref().to_string())),
                other => Err(SearchParamsError::InvalidPairLength(other.len())),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { params })
    }

    pub fn append(&mut self, key: &str, value: &str) {
        self.params.push((key.to_string(), value.to_string()));
    }

    /// Delete pairs with the given key.
    /// If `value` is provided, only deletes pairs matching both key and value.
    pub fn delete(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.params.retain(|(k, v)| k != key || v != value),
            None => self.params.retain(|(k, _)| k != key),
        }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Check if a key exists.
    /// If `value` is provided, checks for that exact pair.
    pub fn has(&self, key: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) => self.params.iter().any(|(k, v)| k == key && v == value),
            None => self.params.iter().any(|(k, _)| k == key),
        }
    }

    /// Set a key to a single value.
    ///
    /// The first pair with this key keeps its position and takes the value;
    /// later pairs with the key are removed. Appends when the key is new.
    pub fn set(&mut self, key: &str, value: &str) {
        let Some(first) = self.params.iter().position(|(k, _)| k == key) else {
            self.append(key, value);
            return;
        };
        self.params[first].1 = value.to_string();

        let mut index = 0;
        self.params.retain(|(k, _)| {
            let keep = index <= first || k != key;
            index += 1;
            keep
        });
    }

    /// Sort by key, comparing UTF-16 code units.
    /// Pairs with equal keys keep their relative order.
    pub fn sort(&mut self) {
        self.params
            .sort_by(|a, b| a.0.encode_utf16().cmp(b.0.encode_utf16()));
    }

    /// Call `f` with `(value, key)` for every pair, in order
    pub fn for_each<F: FnMut(&str, &str)>(&self, mut f: F) {
        for (key, value) in &self.params {
            f(value.as_str(), key.as_str());
        }
    }

    /// Get the number of pairs (WHATWG API).
    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.params.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over all key-value pairs (alias for `iter`, matches WHATWG API).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }
}

/// `application/x-www-form-urlencoded` serialization without a leading `?`
impl core::fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&form_urlencoded::serialize(self.iter()))
    }
}

impl From<&str> for UrlSearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for UrlSearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Object-like input: one pair per entry, in key order
impl<K: AsRef<str>, V: AsRef<str>> From<BTreeMap<K, V>> for UrlSearchParams {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for UrlSearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for UrlSearchParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.append(key.as_ref(), value.as_ref());
        }
    }
}

impl IntoIterator for UrlSearchParams {
    type Item = (String, String);
    type IntoIter = <Vec<(String, String)> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a UrlSearchParams {
    type Item = &'a (String, String);
    type IntoIter = core::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
