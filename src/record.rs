use std::slice;

use crate::config::KeyIndex;

/// The only field delimiter understood in the input.
pub const DELIMITER: char = ' ';

/// One input line split into fields.
///
/// The line is split on every single space, so consecutive spaces produce empty fields and
/// leading or trailing spaces are kept as empty first or last fields.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Record {
    fields: Vec<String>,
    // 1-based line number in the source
    line: usize,
}

impl Record {
    /// Build a record from a line with its terminator already removed.
    pub fn from_line(line: usize, s: &str) -> Self {
        let mut rec = Record::default();
        rec.load(line, s);
        rec
    }

    #[inline]
    pub fn load(&mut self, line: usize, s: &str) {
        self.clear();
        self.line = line;
        self.fields.extend(s.split(DELIMITER).map(|f| f.to_owned()));
    }

    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
        self.line = 0;
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A record read from an empty line.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].is_empty()
    }

    #[inline]
    pub fn get_field(&self, i: usize) -> Option<&str> {
        self.fields.get(i).map(|f| f.as_str())
    }

    #[inline]
    pub fn iter(&self) -> RecIter {
        RecIter { inner: self.fields.iter() }
    }

    /// Split the record into its key and the remaining fields.
    ///
    /// Returns `None` when the record is too short to contain the key field.
    pub fn split_key(&self, key: KeyIndex) -> Option<Keyed> {
        let k = key.index();
        let key_field = self.get_field(k)?;
        let residual = self.iter()
                           .enumerate()
                           .filter(|&(i, _)| i != k)
                           .map(|(_, f)| f)
                           .collect();
        Some(Keyed {
            key: key_field,
            residual,
            line: self.line,
        })
    }
}

/// An iterator over the fields of a `Record`.
pub struct RecIter<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for RecIter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(|f| f.as_str())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A record viewed through its key: the key field and the residual fields in source order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Keyed<'a> {
    key: &'a str,
    residual: Vec<&'a str>,
    line: usize,
}

impl<'a> Keyed<'a> {
    #[inline]
    pub fn key(&self) -> &'a str {
        self.key
    }

    #[inline]
    pub fn residual(&self) -> &[&'a str] {
        &self.residual
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::config::KeyIndex;

    #[test]
    fn record_1() {
        let rec = Record::from_line(1, "foo bar quux");

        assert_eq!(rec.len(), 3);
        assert_eq!(rec.get_field(0), Some("foo"));
        assert_eq!(rec.get_field(1), Some("bar"));
        assert_eq!(rec.get_field(2), Some("quux"));
        assert_eq!(rec.get_field(3), None);
    }

    #[test]
    fn record_empty_fields() {
        let rec = Record::from_line(1, "a  b ");
        assert_eq!(rec.iter().collect::<Vec<_>>(), vec!["a", "", "b", ""]);

        let rec = Record::from_line(1, "");
        assert_eq!(rec.iter().collect::<Vec<_>>(), vec![""]);
        assert!(rec.is_blank());
        assert!(!Record::from_line(1, " ").is_blank());
    }

    #[test]
    fn record_keeps_other_whitespace() {
        let rec = Record::from_line(1, "a\tb c\rd");
        assert_eq!(rec.iter().collect::<Vec<_>>(), vec!["a\tb", "c\rd"]);
    }

    #[test]
    fn record_reload() {
        let mut rec = Record::from_line(1, "foo bar");
        rec.load(2, "x");
        assert_eq!(rec.line(), 2);
        assert_eq!(rec.iter().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn split_key_default() {
        let rec = Record::from_line(3, "foo bar quux");
        let k = rec.split_key(KeyIndex::default()).unwrap();

        // by default, the first field is the key
        assert_eq!(k.key(), "foo");
        assert_eq!(k.residual(), &["bar", "quux"][..]);
        assert_eq!(k.line(), 3);
    }

    #[test]
    fn split_key_middle() {
        let rec = Record::from_line(1, "nyc 1 extra");
        let k = rec.split_key(KeyIndex::new(1)).unwrap();

        assert_eq!(k.key(), "1");
        assert_eq!(k.residual(), &["nyc", "extra"][..]);
    }

    #[test]
    fn split_key_last() {
        let rec = Record::from_line(1, "a b");
        let k = rec.split_key(KeyIndex::new(1)).unwrap();

        assert_eq!(k.key(), "b");
        assert_eq!(k.residual(), &["a"][..]);
    }

    #[test]
    fn split_key_out_of_range() {
        let rec = Record::from_line(1, "a b");
        assert_eq!(rec.split_key(KeyIndex::new(2)), None);
        assert_eq!(rec.split_key(KeyIndex::new(10)), None);
    }
}
