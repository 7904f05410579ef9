use smallvec::SmallVec;
use std::{
    fmt::{self, Debug, Display, Formatter},
    ops::Deref,
};

/**
The logical values contained in one header field value, in order.

Each value borrows from the field value it was split from and has had
leading and trailing [tab or space](crate::HTTP_TAB_OR_SPACE) removed.
Quoted-strings are kept as they appeared, quotes and backslashes
included.
*/
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct FieldValues<'a>(SmallVec<[&'a str; 1]>);

impl<'a> Deref for FieldValues<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for FieldValues<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

/// values are written back out separated by `, `
impl Display for FieldValues<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for FieldValues<'a> {
    type Item = &'a str;

    type IntoIter = smallvec::IntoIter<[&'a str; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b FieldValues<'a> {
    type Item = &'b &'a str;

    type IntoIter = std::slice::Iter<'b, &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<&'a str> for FieldValues<'a> {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FieldValues<'a> {
    /// an empty list
    pub const fn new() -> Self {
        Self(SmallVec::new_const())
    }

    pub(crate) fn push(&mut self, value: &'a str) {
        self.0.push(value);
    }

    /// copies each value into an owned `String`
    pub fn to_owned_values(&self) -> Vec<String> {
        self.0.iter().map(|value| String::from(*value)).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldValues<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl PartialEq<[&str]> for FieldValues<'_> {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[&str; N]> for FieldValues<'_> {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<&str>> for FieldValues<'_> {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<String>> for FieldValues<'_> {
    fn eq(&self, other: &Vec<String>) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| *a == b.as_str())
    }
}
