use crate::values_of_header_field_value;
use std::borrow::Cow;

/**
[Isomorphic decode](https://infra.spec.whatwg.org/#isomorphic-decode):
each byte becomes the code point with the same value.

Header values are not guaranteed to be utf8, and bytes 0x80-0xFF are
decoded as U+0080-U+00FF rather than as utf8 sequences. Borrows when
every byte is ascii.

```rust
use trillium_field_values::isomorphic_decode;
assert_eq!(isomorphic_decode(b"nosniff"), "nosniff");
assert_eq!(isomorphic_decode(b"caf\xe9"), "café");
assert_eq!(isomorphic_decode("é".as_bytes()), "Ã©");
```
*/
pub fn isomorphic_decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(ascii) if bytes.is_ascii() => Cow::Borrowed(ascii),
        _ => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
    }
}

/**
fetch's [get, decode, and
split](https://fetch.spec.whatwg.org/#concept-header-list-get-decode-split)
over every occurrence of a single header name.

Returns `None` if there are no occurrences. Otherwise the occurrences
are joined with `, `, [isomorphic decoded](isomorphic_decode), and
[split](values_of_header_field_value).

```rust
use trillium_field_values::get_decode_split;

let occurrences: [&[u8]; 2] = [b"text/html", br#"text/plain;x="a,b""#];
assert_eq!(
    get_decode_split(occurrences),
    Some(vec![
        String::from("text/html"),
        String::from(r#"text/plain;x="a,b""#)
    ])
);

assert_eq!(get_decode_split(std::iter::empty::<&[u8]>()), None);
```
*/
pub fn get_decode_split<'a, I>(occurrences: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut occurrences = occurrences.into_iter();
    let mut joined = occurrences.next()?.to_vec();
    for occurrence in occurrences {
        joined.extend_from_slice(b", ");
        joined.extend_from_slice(occurrence);
    }

    let decoded = isomorphic_decode(&joined);
    Some(values_of_header_field_value(&decoded).to_owned_values())
}
