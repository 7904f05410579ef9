/*!
# Splitting http header field values

When a header appears more than once, its values are usually combined
into a single field value joined by `,`. This crate recovers the
individual values with
[`values_of_header_field_value`], respecting quoted-strings so that a
comma or quote inside `"…"` is never treated as a separator. The
quoted-string collector it is built on,
[`collect_http_quoted_string`], is exported as well, along with the
WHATWG code point classes used to scan and trim header text.

```rust
use trillium_field_values::{collect_http_quoted_string, values_of_header_field_value};

assert_eq!(
    values_of_header_field_value(r#"x/x;test="hi",y/y"#),
    [r#"x/x;test="hi""#, "y/y"]
);

let quoted = collect_http_quoted_string(r#""a \"b\"", c"#);
assert_eq!(quoted.collected(), r#"a "b""#);
assert_eq!(quoted.progression(), 9);
```

Neither operation can fail. Malformed input, such as an unterminated
quoted-string or a trailing comma, still has a well-defined result.

## Features

* `serde`: `Serialize` for [`FieldValues`] and [`CollectResult`]
* `http-compat-1`: helpers for splitting values from the
  [`http`](http1) crate's `HeaderValue` and `HeaderMap`
*/
#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

mod error;
pub use error::{Error, Result};

mod code_point_class;
pub use code_point_class::{
    ASCII_WHITESPACE, CodePointClass, CodePointRange, HTTP_QUOTED_STRING_TOKEN, HTTP_TAB_OR_SPACE,
    HTTP_TOKEN, HTTP_WHITESPACE, collect_matching_prefix, trim,
};

mod quoted_string;
pub use quoted_string::{CollectResult, collect_http_quoted_string};

mod field_values;
pub use field_values::FieldValues;

mod split;
pub use split::values_of_header_field_value;

mod decode;
pub use decode::{get_decode_split, isomorphic_decode};

#[cfg(feature = "http-compat-1")]
pub mod http_compat1;
