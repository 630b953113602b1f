use std::fmt::Display;
use std::str::FromStr;

use regex::{Captures, Regex};

/// Pull typed fields out of a regex match, panicking with a useful message
/// when the input doesn't look the way the pattern says it should.
pub trait RegexExtractor<'t> {
    fn field(&self, index: usize) -> &'t str;

    fn named(&self, name: &str) -> &'t str;

    fn parse<T: FromStr>(&self, index: usize) -> T
    where
        T::Err: Display;

    fn parse_named<T: FromStr>(&self, name: &str) -> T
    where
        T::Err: Display;
}

fn parse_field<T: FromStr>(group: impl Display, field: &str) -> T
where
    T::Err: Display,
{
    field
        .parse()
        .unwrap_or_else(move |err| panic!("Failed to parse group {} \"{}\": {}", group, field, err))
}

impl<'t> RegexExtractor<'t> for Captures<'t> {
    #[inline]
    fn field(&self, index: usize) -> &'t str {
        self.get(index)
            .unwrap_or_else(move || panic!("Group {} didn't match anything", index))
            .as_str()
    }

    #[inline]
    fn named(&self, name: &str) -> &'t str {
        self.name(name)
            .unwrap_or_else(move || panic!("Group {:?} didn't match anything", name))
            .as_str()
    }

    #[inline]
    fn parse<T: FromStr>(&self, index: usize) -> T
    where
        T::Err: Display,
    {
        parse_field(index, self.field(index))
    }

    #[inline]
    fn parse_named<T: FromStr>(&self, name: &str) -> T
    where
        T::Err: Display,
    {
        parse_field(name, self.named(name))
    }
}

pub trait RegexMatcher {
    /// Like `captures`, but the text is required to match.
    fn must_captures<'t>(&self, text: &'t str) -> Captures<'t>;
}

impl RegexMatcher for Regex {
    fn must_captures<'t>(&self, text: &'t str) -> Captures<'t> {
        self.captures(text)
            .unwrap_or_else(move || panic!("{:?} doesn't match /{}/", text, self.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_numbered_and_named_groups() {
        let pattern = Regex::new(r"move (\d+) from (?P<from>\d+) to (\d+)").unwrap();
        let caps = pattern.must_captures("move 3 from 1 to 9");

        assert_eq!(caps.parse::<usize>(1), 3);
        assert_eq!(caps.parse_named::<usize>("from"), 1);
        assert_eq!(caps.field(3), "9");
    }

    #[test]
    #[should_panic(expected = "Failed to parse group 1")]
    fn bad_field_panics() {
        let pattern = Regex::new(r"x=(\S+)").unwrap();
        let _: i64 = pattern.must_captures("x=abc").parse(1);
    }

    #[test]
    #[should_panic(expected = "doesn't match")]
    fn mismatch_panics() {
        let pattern = Regex::new(r"^\d+$").unwrap();
        pattern.must_captures("nope");
    }
}
