use crate::{
    FieldValues,
    code_point_class::{HTTP_TAB_OR_SPACE, NOT_QUOTE_OR_COMMA},
    quoted_string,
};
use memchr::memchr2;

/**
Splits a header field value into the logical values it contains, as
described in the split step of fetch's [get, decode, and
split](https://fetch.spec.whatwg.org/#concept-header-list-get-decode-split).

Multiple occurrences of a header are commonly joined with `,`, so this
recovers the individual values. Commas inside a quoted-string do not
separate values, and the quoted-string is returned as written. Each
value is trimmed of tabs and spaces. A trailing comma, or two commas
in a row, produce an empty value.

Every input is accepted: an unterminated quoted-string simply extends
to the end of the input.

```rust
use trillium_field_values::values_of_header_field_value;

assert_eq!(values_of_header_field_value("1,4,3"), ["1", "4", "3"]);
assert_eq!(values_of_header_field_value(r#""1,2", 3"#), [r#""1,2""#, "3"]);
assert_eq!(values_of_header_field_value("nosniff,"), ["nosniff", ""]);
assert!(values_of_header_field_value(" ").is_empty());
```
*/
pub fn values_of_header_field_value(value: &str) -> FieldValues<'_> {
    let mut values = FieldValues::new();

    if memchr2(b'"', b',', value.as_bytes()).is_none() {
        let value = HTTP_TAB_OR_SPACE.trim(value);
        if !value.is_empty() {
            values.push(value);
        }
        return values;
    }

    let mut commas = 0;
    let mut position = 0;
    let mut segment_start = 0;

    while position < value.len() {
        position += NOT_QUOTE_OR_COMMA.collect_prefix(&value[position..]).len();
        let remaining = &value[position..];

        if remaining.starts_with('"') {
            let scanned = quoted_string::scan(remaining);
            if !scanned.terminated {
                log::trace!("unterminated quoted-string at byte {position} of {value:?}");
            }
            position += scanned.len;
            continue;
        }

        let segment = &value[segment_start..position];
        if remaining.starts_with(',') {
            commas += 1;
            position += 1;
        }
        values.push(HTTP_TAB_OR_SPACE.trim(segment));
        segment_start = position;
    }

    if segment_start < value.len() {
        values.push(HTTP_TAB_OR_SPACE.trim(&value[segment_start..]));
    }

    // a trailing comma leaves no text behind to flush
    if values.len() < commas + 1 {
        values.push("");
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(value: &str) -> Vec<&str> {
        values_of_header_field_value(value).into_iter().collect()
    }

    #[test]
    fn fast_path() {
        assert_eq!(split(""), Vec::<&str>::new());
        assert_eq!(split(" "), Vec::<&str>::new());
        assert_eq!(split("\t \t"), Vec::<&str>::new());
        assert_eq!(split("1"), ["1"]);
        assert_eq!(split(" \t1 "), ["1"]);
        assert_eq!(split("text/html; charset=utf-8"), ["text/html; charset=utf-8"]);
    }

    #[test]
    fn commas() {
        assert_eq!(split("1,4,3"), ["1", "4", "3"]);
        assert_eq!(split(","), ["", ""]);
        assert_eq!(split(",,"), ["", "", ""]);
        assert_eq!(split(", a"), ["", "a"]);
        assert_eq!(split("a, "), ["a", ""]);
        assert_eq!(split("x / x,,,1"), ["x / x", "", "", "1"]);
    }

    #[test]
    fn quotes() {
        assert_eq!(split(r#"1,"5",3"#), ["1", r#""5""#, "3"]);
        assert_eq!(split(r#""1,2", 3"#), [r#""1,2""#, "3"]);
        assert_eq!(split(r#"x/x;test="hi",y/y"#), [r#"x/x;test="hi""#, "y/y"]);
        assert_eq!(split(r#""a" b , c"#), [r#""a" b"#, "c"]);
        assert_eq!(split(r#""a\",b", c"#), [r#""a\",b""#, "c"]);
        assert_eq!(split(r#""a""b""#), [r#""a""b""#]);
    }

    #[test]
    fn unterminated_quote_takes_the_rest() {
        assert_eq!(split(r#"text/html;", x/x"#), [r#"text/html;", x/x"#]);
        assert_eq!(split("\""), ["\""]);
        assert_eq!(split("a,\"b\\"), ["a", "\"b\\"]);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(split("日本, \"語,😀\" ,é"), ["日本", "\"語,😀\"", "é"]);
    }

    #[test]
    fn count_matches_top_level_commas() {
        for value in [
            ",",
            "a,b",
            ",,,",
            r#""a,b""#,
            r#""a,b",,"c,d""#,
            r#"a,"b"#,
            r#"\",x"#,
        ] {
            let top_level_commas = {
                let mut count = 0;
                let mut rest = value;
                while let Some(c) = rest.chars().next() {
                    if c == '"' {
                        let scanned = quoted_string::scan(rest);
                        rest = &rest[scanned.len..];
                    } else {
                        if c == ',' {
                            count += 1;
                        }
                        rest = &rest[c.len_utf8()..];
                    }
                }
                count
            };

            assert_eq!(split(value).len(), top_level_commas + 1, "{value:?}");
        }
    }
}
