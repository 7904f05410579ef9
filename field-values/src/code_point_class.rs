use crate::{Error, Result};
use std::{borrow::Cow, cmp::Ordering};

/// An inclusive range of code points, `low..=high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePointRange {
    low: char,
    high: char,
}

impl CodePointRange {
    /// a range containing exactly one code point
    pub const fn single(c: char) -> Self {
        Self { low: c, high: c }
    }

    /// builds a range from `low` to `high`, inclusive
    ///
    /// ```rust
    /// use trillium_field_values::{CodePointRange, Error};
    /// assert!(CodePointRange::new('a', 'z').is_ok());
    /// assert_eq!(
    ///     CodePointRange::new('z', 'a'),
    ///     Err(Error::InvertedRange { low: 'z', high: 'a' })
    /// );
    /// ```
    pub const fn new(low: char, high: char) -> Result<Self> {
        if low as u32 > high as u32 {
            Err(Error::InvertedRange { low, high })
        } else {
            Ok(Self { low, high })
        }
    }

    const fn span(low: char, high: char) -> Self {
        Self { low, high }
    }

    /// the first code point in this range
    pub const fn low(&self) -> char {
        self.low
    }

    /// the last code point in this range
    pub const fn high(&self) -> char {
        self.high
    }

    /// does this range include `c`?
    pub const fn contains(&self, c: char) -> bool {
        self.low as u32 <= c as u32 && c as u32 <= self.high as u32
    }
}

impl From<char> for CodePointRange {
    fn from(c: char) -> Self {
        Self::single(c)
    }
}

/**
An ordered set of [`CodePointRange`]s.

Membership is tested per code point, never per byte, so multi-byte
utf8 sequences are classified as a whole.

The classes defined by the WHATWG fetch and mime sniffing standards are
provided as constants.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointClass {
    ranges: Cow<'static, [CodePointRange]>,
}

/// [ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
pub static ASCII_WHITESPACE: CodePointClass = CodePointClass::from_static(&[
    CodePointRange::single('\t'),
    CodePointRange::single('\n'),
    CodePointRange::single('\u{c}'),
    CodePointRange::single('\r'),
    CodePointRange::single(' '),
]);

/// [HTTP quoted-string token code point](https://mimesniff.spec.whatwg.org/#http-quoted-string-token-code-point)
pub static HTTP_QUOTED_STRING_TOKEN: CodePointClass = CodePointClass::from_static(&[
    CodePointRange::single('\t'),
    CodePointRange::span(' ', '~'),
    CodePointRange::span('\u{80}', '\u{ff}'),
]);

/// [HTTP tab or space](https://fetch.spec.whatwg.org/#http-tab-or-space)
pub static HTTP_TAB_OR_SPACE: CodePointClass =
    CodePointClass::from_static(&[CodePointRange::single('\t'), CodePointRange::single(' ')]);

/// [HTTP token code point](https://mimesniff.spec.whatwg.org/#http-token-code-point)
pub static HTTP_TOKEN: CodePointClass = CodePointClass::from_static(&[
    CodePointRange::single('!'),
    CodePointRange::span('#', '\''),
    CodePointRange::single('*'),
    CodePointRange::single('+'),
    CodePointRange::single('-'),
    CodePointRange::single('.'),
    CodePointRange::span('0', '9'),
    CodePointRange::span('A', 'Z'),
    CodePointRange::span('^', '`'),
    CodePointRange::span('a', 'z'),
    CodePointRange::single('|'),
    CodePointRange::single('~'),
]);

/// [HTTP whitespace](https://fetch.spec.whatwg.org/#http-whitespace)
pub static HTTP_WHITESPACE: CodePointClass = CodePointClass::from_static(&[
    CodePointRange::single('\t'),
    CodePointRange::single('\n'),
    CodePointRange::single('\r'),
    CodePointRange::single(' '),
]);

/// everything except U+0022 (`"`) and U+002C (`,`)
pub(crate) static NOT_QUOTE_OR_COMMA: CodePointClass = CodePointClass::from_static(&[
    CodePointRange::span('\0', '!'),
    CodePointRange::span('#', '+'),
    CodePointRange::span('-', char::MAX),
]);

impl CodePointClass {
    const fn from_static(ranges: &'static [CodePointRange]) -> Self {
        Self {
            ranges: Cow::Borrowed(ranges),
        }
    }

    /// Builds a class from ranges listed in ascending order without overlap.
    ///
    /// ```rust
    /// use trillium_field_values::{CodePointClass, CodePointRange, Error};
    /// let digits_and_dot = CodePointClass::try_new([
    ///     CodePointRange::single('.'),
    ///     CodePointRange::new('0', '9')?,
    /// ])?;
    /// assert_eq!(digits_and_dot.collect_prefix("1.5rem"), "1.5");
    ///
    /// assert_eq!(
    ///     CodePointClass::try_new([CodePointRange::from('b'), CodePointRange::from('a')]),
    ///     Err(Error::UnorderedRanges { previous: 'b', next: 'a' })
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_new(ranges: impl IntoIterator<Item = CodePointRange>) -> Result<Self> {
        let ranges: Vec<CodePointRange> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Err(Error::EmptyClass);
        }

        for pair in ranges.windows(2) {
            if pair[1].low as u32 <= pair[0].high as u32 {
                return Err(Error::UnorderedRanges {
                    previous: pair[0].high,
                    next: pair[1].low,
                });
            }
        }

        Ok(Self {
            ranges: Cow::Owned(ranges),
        })
    }

    /// the ranges that make up this class, in ascending order
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// is `c` a member of this class?
    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|range| {
                if range.high < c {
                    Ordering::Less
                } else if range.low > c {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// true if `input` is non-empty and every code point is in this class
    ///
    /// ```rust
    /// use trillium_field_values::HTTP_TOKEN;
    /// assert!(HTTP_TOKEN.matches_all("nosniff"));
    /// assert!(!HTTP_TOKEN.matches_all("no sniff"));
    /// assert!(!HTTP_TOKEN.matches_all(""));
    /// ```
    pub fn matches_all(&self, input: &str) -> bool {
        !input.is_empty() && input.chars().all(|c| self.contains(c))
    }

    /// the longest leading run of `input` made of code points in this class
    pub fn collect_prefix<'a>(&self, input: &'a str) -> &'a str {
        let end = input
            .char_indices()
            .find(|&(_, c)| !self.contains(c))
            .map_or(input.len(), |(i, _)| i);
        &input[..end]
    }

    /// removes leading code points in this class
    pub fn trim_start<'a>(&self, input: &'a str) -> &'a str {
        input.trim_start_matches(|c: char| self.contains(c))
    }

    /// removes trailing code points in this class
    pub fn trim_end<'a>(&self, input: &'a str) -> &'a str {
        input.trim_end_matches(|c: char| self.contains(c))
    }

    /// removes leading and trailing code points in this class
    pub fn trim<'a>(&self, input: &'a str) -> &'a str {
        input.trim_matches(|c: char| self.contains(c))
    }
}

/// Returns the longest leading run of `input` whose code points are all in `class`
///
/// ```rust
/// use trillium_field_values::{HTTP_TOKEN, collect_matching_prefix};
/// assert_eq!(collect_matching_prefix("text/html", &HTTP_TOKEN), "text");
/// assert_eq!(collect_matching_prefix("/html", &HTTP_TOKEN), "");
/// ```
pub fn collect_matching_prefix<'a>(input: &'a str, class: &CodePointClass) -> &'a str {
    class.collect_prefix(input)
}

/// Removes leading and trailing code points that are in `class`
///
/// ```rust
/// use trillium_field_values::{HTTP_TAB_OR_SPACE, trim};
/// assert_eq!(trim(" \tnosniff \n", &HTTP_TAB_OR_SPACE), "nosniff \n");
/// ```
pub fn trim<'a>(input: &'a str, class: &CodePointClass) -> &'a str {
    class.trim(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ascending(class: &CodePointClass) {
        assert!(
            CodePointClass::try_new(class.ranges().iter().copied()).is_ok(),
            "{class:?}"
        );
    }

    #[test]
    fn builtin_classes_are_well_formed() {
        for class in [
            &ASCII_WHITESPACE,
            &HTTP_QUOTED_STRING_TOKEN,
            &HTTP_TAB_OR_SPACE,
            &HTTP_TOKEN,
            &HTTP_WHITESPACE,
            &NOT_QUOTE_OR_COMMA,
        ] {
            assert_ascending(class);
        }
    }

    #[test]
    fn membership() {
        assert!(HTTP_TAB_OR_SPACE.contains('\t'));
        assert!(HTTP_TAB_OR_SPACE.contains(' '));
        assert!(!HTTP_TAB_OR_SPACE.contains('\n'));

        assert!(ASCII_WHITESPACE.contains('\u{c}'));
        assert!(!HTTP_WHITESPACE.contains('\u{c}'));

        assert!(HTTP_QUOTED_STRING_TOKEN.contains('ÿ'));
        assert!(!HTTP_QUOTED_STRING_TOKEN.contains('\u{100}'));
        assert!(!HTTP_QUOTED_STRING_TOKEN.contains('\u{7f}'));

        for c in "!#$%&'*+-.^_`|~09AZaz".chars() {
            assert!(HTTP_TOKEN.contains(c), "{c:?}");
        }
        for c in r#"(),/:;<=>?@[\]{}" "#.chars() {
            assert!(!HTTP_TOKEN.contains(c), "{c:?}");
        }

        assert!(!NOT_QUOTE_OR_COMMA.contains('"'));
        assert!(!NOT_QUOTE_OR_COMMA.contains(','));
        assert!(NOT_QUOTE_OR_COMMA.contains('\0'));
        assert!(NOT_QUOTE_OR_COMMA.contains('🦀'));
    }

    #[test]
    fn prefix_is_collected_per_code_point() {
        let latin1 = &HTTP_QUOTED_STRING_TOKEN;
        assert_eq!(latin1.collect_prefix("héllo\u{100}world"), "héllo");
        assert_eq!(latin1.collect_prefix(""), "");
        assert_eq!(NOT_QUOTE_OR_COMMA.collect_prefix("日本語,x"), "日本語");
    }

    #[test]
    fn trimming() {
        assert_eq!(HTTP_TAB_OR_SPACE.trim(" \t a b \t "), "a b");
        assert_eq!(HTTP_TAB_OR_SPACE.trim_start(" \ta "), "a ");
        assert_eq!(HTTP_TAB_OR_SPACE.trim_end(" a\t "), " a");
        assert_eq!(HTTP_TAB_OR_SPACE.trim(" \t "), "");
        assert_eq!(HTTP_WHITESPACE.trim("\r\n x \r\n"), "x");

        let once = HTTP_TAB_OR_SPACE.trim("  value\t");
        assert_eq!(HTTP_TAB_OR_SPACE.trim(once), once);
    }

    #[test]
    fn ranges() {
        let range = CodePointRange::new('a', 'f').unwrap();
        assert_eq!((range.low(), range.high()), ('a', 'f'));
        assert!(range.contains('a') && range.contains('f'));
        assert!(!range.contains('g'));
        assert_eq!(CodePointRange::from('x'), CodePointRange::single('x'));
        assert_eq!(
            CodePointRange::new('f', 'a'),
            Err(Error::InvertedRange { low: 'f', high: 'a' })
        );
    }

    #[test]
    fn invalid_classes() {
        assert_eq!(
            CodePointClass::try_new(std::iter::empty()),
            Err(Error::EmptyClass)
        );
        assert_eq!(
            CodePointClass::try_new([
                CodePointRange::span('a', 'f'),
                CodePointRange::span('f', 'z')
            ]),
            Err(Error::UnorderedRanges {
                previous: 'f',
                next: 'f'
            })
        );
    }
}
