use crate::error::QueryError;
use std::borrow::Cow;

/// Decoded query parameters in first-seen order.
///
/// A repeated key keeps the position of its first occurrence and takes the
/// value of its last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`.
    pub fn insert(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Decode one form-encoded component: `+` is a space, `%XX` is a byte.
fn decode_component(raw: &str) -> Result<String, QueryError> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|_| QueryError::Decode {
            raw: raw.to_string(),
        })
}

/// Decode `key1=val1&key2=val2...` into [`QueryParams`].
///
/// Splits on `&`, then on the first `=` of each segment, and percent-decodes
/// both sides as UTF-8. Empty segments (`a=1&&b=2`, a trailing `&`) are
/// skipped. A non-empty segment without `=` rejects the whole query with
/// [`QueryError::MalformedPair`].
///
/// Callers treat an empty query string as "missing arguments" before getting
/// here; decoding `""` simply yields no parameters.
pub fn decode_query(query: &str) -> Result<QueryParams, QueryError> {
    let mut params = QueryParams::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| QueryError::MalformedPair {
                pair: pair.to_string(),
            })?;
        params.insert(decode_component(key)?, decode_component(value)?);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple_pairs() {
        let q = decode_query("num1=3&num2=4").unwrap();
        assert_eq!(q.get("num1"), Some("3"));
        assert_eq!(q.get("num2"), Some("4"));
        assert_eq!(q.iter().count(), 2);
    }

    #[test]
    fn test_decode_percent_and_plus() {
        let q = decode_query("q=hello+world%2Fme&bob=5").unwrap();
        assert_eq!(q.get("q"), Some("hello world/me"));
        assert_eq!(q.get("bob"), Some("5"));
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        let q = decode_query("query=a=b").unwrap();
        assert_eq!(q.get("query"), Some("a=b"));
    }

    #[test]
    fn test_duplicate_key_keeps_position_takes_last_value() {
        let q = decode_query("a=1&b=2&a=3").unwrap();
        let pairs: Vec<_> = q.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_empty_segments_skipped() {
        let q = decode_query("a=1&&b=2&").unwrap();
        assert_eq!(q.iter().count(), 2);
        assert_eq!(decode_query("").unwrap(), QueryParams::new());
    }

    #[test]
    fn test_pair_without_equals_rejected() {
        let err = decode_query("kitty=1&num1").unwrap_err();
        assert_eq!(
            err,
            QueryError::MalformedPair {
                pair: "num1".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert!(matches!(
            decode_query("a=%FF"),
            Err(QueryError::Decode { .. })
        ));
    }

    #[test]
    fn test_empty_value_allowed() {
        let q = decode_query("kitty=").unwrap();
        assert_eq!(q.get("kitty"), Some(""));
    }
}
