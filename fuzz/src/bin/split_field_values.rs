use afl::fuzz;
use arbitrary::{Arbitrary, Unstructured};
use trillium_field_values::{
    HTTP_TAB_OR_SPACE, collect_http_quoted_string, values_of_header_field_value,
};

#[derive(Debug)]
struct FuzzInput {
    /// Header occurrences, joined with `,` the way a header list combines them.
    occurrences: Vec<String>,
}

impl<'a> Arbitrary<'a> for FuzzInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self {
            occurrences: Arbitrary::arbitrary(u)?,
        })
    }
}

fn top_level_commas(mut rest: &str) -> usize {
    let mut count = 0;
    while let Some(c) = rest.chars().next() {
        if c == '"' {
            let progression = collect_http_quoted_string(rest).progression();
            let len = rest.chars().take(progression).map(char::len_utf8).sum();
            assert!(len > 0, "a leading quote is always consumed");
            rest = &rest[len..];
        } else {
            if c == ',' {
                count += 1;
            }
            rest = &rest[c.len_utf8()..];
        }
    }
    count
}

fn split_fuzzer(input: FuzzInput) {
    let value = input.occurrences.join(",");
    log::debug!("{value:?}");

    let values = values_of_header_field_value(&value);

    for v in &values {
        assert_eq!(HTTP_TAB_OR_SPACE.trim(v), *v, "untrimmed value in {values:?}");
        assert!(value.contains(v), "{v:?} is not a slice of {value:?}");
    }

    if value.contains(['"', ',']) {
        assert_eq!(values.len(), top_level_commas(&value) + 1, "{values:?}");
    } else {
        assert!(values.len() <= 1);
    }
}

fn main() {
    env_logger::init();
    fuzz!(|data: FuzzInput| { split_fuzzer(data) });
}
