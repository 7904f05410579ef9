use std::borrow::Cow;

/// The outcome of [`collect_http_quoted_string`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectResult<'a> {
    collected: Cow<'a, str>,
    progression: usize,
}

impl<'a> CollectResult<'a> {
    /// the content between the quotes, with quoted-pair backslashes
    /// removed. Empty if the input did not start with `"`.
    pub fn collected(&self) -> &str {
        &self.collected
    }

    /// the number of code points consumed from the input, counting
    /// both the opening quote and, if present, the closing quote
    pub fn progression(&self) -> usize {
        self.progression
    }

    /// consume this result, returning the collected value. This
    /// borrows from the input unless a backslash was encountered.
    pub fn into_collected(self) -> Cow<'a, str> {
        self.collected
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CollectResult<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CollectResult", 2)?;
        state.serialize_field("collected", &*self.collected)?;
        state.serialize_field("progression", &self.progression)?;
        state.end()
    }
}

#[derive(Debug)]
pub(crate) struct Scanned<'a> {
    pub(crate) result: CollectResult<'a>,
    /// bytes of input consumed, for slicing
    pub(crate) len: usize,
    pub(crate) terminated: bool,
}

/**
Collects an [http quoted
string](https://fetch.spec.whatwg.org/#collect-an-http-quoted-string)
from the start of `input`.

If `input` does not start with `"`, nothing is consumed. An
unterminated string runs to the end of the input, and a backslash as
the very last code point is kept as a literal `\`.

```rust
use trillium_field_values::collect_http_quoted_string;

let result = collect_http_quoted_string(r#""Hello" World"#);
assert_eq!(result.collected(), "Hello");
assert_eq!(result.progression(), 7);

let result = collect_http_quoted_string(r#""Hello \\ World\"""#);
assert_eq!(result.collected(), r#"Hello \ World""#);
assert_eq!(result.progression(), 18);

let result = collect_http_quoted_string("Hello");
assert_eq!(result.collected(), "");
assert_eq!(result.progression(), 0);
```
*/
pub fn collect_http_quoted_string(input: &str) -> CollectResult<'_> {
    scan(input).result
}

pub(crate) fn scan(input: &str) -> Scanned<'_> {
    let Some(rest) = input.strip_prefix('"') else {
        return Scanned {
            result: CollectResult::default(),
            len: 0,
            terminated: false,
        };
    };

    let mut unescaped: Option<String> = None;
    let mut escaped = false;
    let mut progression = 1;
    let mut content_end = rest.len();
    let mut len = input.len();
    let mut terminated = false;

    for (i, c) in rest.char_indices() {
        progression += 1;

        if escaped {
            escaped = false;
            if let Some(unescaped) = &mut unescaped {
                unescaped.push(c);
            }
        } else if c == '"' {
            content_end = i;
            len = 1 + i + 1;
            terminated = true;
            break;
        } else if c == '\\' {
            escaped = true;
            unescaped.get_or_insert_with(|| String::from(&rest[..i]));
        } else if let Some(unescaped) = &mut unescaped {
            unescaped.push(c);
        }
    }

    if escaped {
        if let Some(unescaped) = &mut unescaped {
            unescaped.push('\\');
        }
    }

    let collected = match unescaped {
        Some(unescaped) => Cow::Owned(unescaped),
        None => Cow::Borrowed(&rest[..content_end]),
    };

    Scanned {
        result: CollectResult {
            collected,
            progression,
        },
        len,
        terminated,
    }
}
