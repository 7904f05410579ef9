//! # Splitting [`http`](http1) header values
use crate::{get_decode_split, isomorphic_decode, values_of_header_field_value};
use http1::{HeaderMap, HeaderValue, header::AsHeaderName};

/// Isomorphic-decodes and splits a single [`http::HeaderValue`](HeaderValue)
///
/// ```rust
/// use http1::HeaderValue;
/// use trillium_field_values::http_compat1::values_of_http_header_value;
///
/// let value = HeaderValue::from_static(r#"W/"a,b", "c""#);
/// assert_eq!(values_of_http_header_value(&value), [r#"W/"a,b""#, r#""c""#]);
/// ```
pub fn values_of_http_header_value(value: &HeaderValue) -> Vec<String> {
    values_of_header_field_value(&isomorphic_decode(value.as_bytes())).to_owned_values()
}

/// fetch's get, decode, and split over every value of `name` in an
/// [`http::HeaderMap`](HeaderMap). See [`get_decode_split`].
///
/// ```rust
/// use http1::{HeaderMap, HeaderValue, header::VARY};
/// use trillium_field_values::http_compat1::get_decode_split_header_map;
///
/// let mut headers = HeaderMap::new();
/// headers.append(VARY, HeaderValue::from_static("accept-encoding"));
/// headers.append(VARY, HeaderValue::from_static("origin, accept"));
/// assert_eq!(
///     get_decode_split_header_map(&headers, VARY).unwrap(),
///     ["accept-encoding", "origin", "accept"]
/// );
/// assert!(get_decode_split_header_map(&headers, "x-missing").is_none());
/// ```
pub fn get_decode_split_header_map<K: AsHeaderName>(
    headers: &HeaderMap,
    name: K,
) -> Option<Vec<String>> {
    get_decode_split(headers.get_all(name).iter().map(HeaderValue::as_bytes))
}
