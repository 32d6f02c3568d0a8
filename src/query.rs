use crate::character_sets::QUERY_SET;
use crate::compat::{String, ToString, Vec};
use crate::error::Result;
use crate::percent;

/// Ordered query parameters with unique keys.
///
/// Values are optional: `key=value` stores `Some`, a bare `key` stores
/// `None`. Writing to an existing key replaces its value in place, so the
/// public ordering is insertion order of first-set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse a wire query string.
    ///
    /// The delimiter is `&`, fixed; `;` is ordinary data. Keys and values
    /// are percent-decoded independently after splitting, so an escaped
    /// `%26` survives as value data.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut params = Self::new();
        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => {
                    params.set(&percent::decode(key)?, Some(&percent::decode(value)?));
                }
                None => params.set(&percent::decode(pair)?, None),
            }
        }
        Ok(params)
    }

    /// Upsert: an existing key keeps its slot, a new key appends.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        let value = value.map(ToString::to_string);
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// Value for `key`: outer `None` when the key is absent, `Some(None)`
    /// when the key is present without a value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// Remove a key, returning its value slot if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let pos = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(pos).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Wire form: `key=value` or bare `key`, joined with `&`, each side
    /// encoded with the query rule.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            percent::encode_into(&mut out, key, QUERY_SET);
            if let Some(value) = value {
                out.push('=');
                percent::encode_into(&mut out, value, QUERY_SET);
            }
        }
        out
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    #[test]
    fn test_parse_empty() {
        let params = QueryParams::parse("").unwrap();
        assert!(params.is_empty());
        assert_eq!(params.serialize(), "");
    }

    #[test]
    fn test_parse_pairs_and_bare_keys() {
        let params = QueryParams::parse("a=1&flag&b=2").unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("a"), Some(Some("1")));
        assert_eq!(params.get("flag"), Some(None));
        assert_eq!(params.get("b"), Some(Some("2")));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let params = QueryParams::parse("q=setter+python&oq=setter+python&ie=UTF-8").unwrap();
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, ["q", "oq", "ie"]);
        assert_eq!(
            params.serialize(),
            "q=setter+python&oq=setter+python&ie=UTF-8"
        );
    }

    #[test]
    fn test_set_is_last_write_wins_in_place() {
        let mut params = QueryParams::parse("a=1&b=2").unwrap();
        params.set("a", Some("3"));
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some(Some("3")));
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let params = QueryParams::parse("k=first&k=second").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("k"), Some(Some("second")));
    }

    #[test]
    fn test_semicolon_is_data() {
        let params = QueryParams::parse("a=1;b=2").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some(Some("1;b=2")));
    }

    #[test]
    fn test_escaped_delimiters_survive() {
        let params = QueryParams::parse("k=a%26b%3Dc").unwrap();
        assert_eq!(params.get("k"), Some(Some("a&b=c")));
    }

    #[test]
    fn test_bare_key_is_decoded() {
        let params = QueryParams::parse("Ladies%20+%20Gentlemen").unwrap();
        assert_eq!(params.get("Ladies + Gentlemen"), Some(None));
        assert!(!params.contains_key("Ladies%20+%20Gentlemen"));
    }

    #[test]
    fn test_empty_pairs_are_skipped() {
        let params = QueryParams::parse("&&&key=value&&&").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("key"), Some(Some("value")));
    }

    #[test]
    fn test_remove() {
        let mut params = QueryParams::parse("a=1&flag").unwrap();
        assert_eq!(params.remove("flag"), Some(None));
        assert_eq!(params.remove("flag"), None);
        assert_eq!(params.len(), 1);
        assert!(params.contains_key("a"));
    }

    #[test]
    fn test_serialize_encodes_value_data() {
        let mut params = QueryParams::new();
        params.set("note", Some("two words"));
        params.set("flag", None);
        assert_eq!(params.serialize(), "note=two%20words&flag");
    }
}
