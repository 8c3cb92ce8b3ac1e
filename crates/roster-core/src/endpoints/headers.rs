//! Header set with right-biased merge.

use std::fmt;

/// Well-known header names.
pub mod header_name {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
}

/// Media types the client sends or accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Multipart,
    FormUrlEncoded,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => "multipart/form-data",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from header name to value.
///
/// Names compare ASCII case-insensitively, matching HTTP semantics. Inserting
/// a name that is already present overwrites its value in place, so merge is
/// right-biased and iteration order is first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Create an empty header set.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// `Accept` and `Content-Type` both set to `application/json`.
    pub fn json_defaults() -> Self {
        let mut headers = Self::new();
        headers.insert(header_name::ACCEPT, ContentType::Json.as_str());
        headers.set_content_type(ContentType::Json);
        headers
    }

    /// Insert or overwrite a header.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.insert(header_name::CONTENT_TYPE, content_type.as_str());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Merge `other` into `self`; values from `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.entries {
            self.insert(name.clone(), value.clone());
        }
    }

    /// Merged copy, leaving `self` untouched.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut copy = self.clone();
        copy.merge(other);
        copy
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_defaults() {
        let headers = HeaderSet::json_defaults();
        assert_eq!(headers.get("Accept"), Some("application/json"));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_insert_overwrites_case_insensitively() {
        let mut headers = HeaderSet::new();
        headers.insert("content-type", "text/plain");
        headers.insert("Content-Type", "application/json");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_merge_is_right_biased() {
        let base = HeaderSet::json_defaults().with("X-Trace", "base");
        let overrides = HeaderSet::new()
            .with("accept", "text/csv")
            .with("Authorization", "Bearer abc");

        let merged = base.merged(&overrides);

        assert_eq!(merged.get("Accept"), Some("text/csv"));
        assert_eq!(merged.get("Content-Type"), Some("application/json"));
        assert_eq!(merged.get("X-Trace"), Some("base"));
        assert_eq!(merged.get("Authorization"), Some("Bearer abc"));
        assert_eq!(merged.len(), 4);
        // Original untouched
        assert_eq!(base.get("Accept"), Some("application/json"));
    }

    #[test]
    fn test_iteration_keeps_first_insertion_order() {
        let headers: HeaderSet = [("B", "1"), ("A", "2"), ("b", "3")].into_iter().collect();
        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(pairs, vec![("b", "3"), ("A", "2")]);
    }

    #[test]
    fn test_content_type_strings() {
        assert_eq!(ContentType::Multipart.to_string(), "multipart/form-data");
        assert_eq!(
            ContentType::FormUrlEncoded.as_str(),
            "application/x-www-form-urlencoded"
        );
    }
}
