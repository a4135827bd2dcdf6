use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A zero-based position of the key field within a record.
///
/// Users name fields with 1-based numbers; `from_field_number` does the conversion and
/// rejects anything that is not a positive integer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct KeyIndex(usize);

impl KeyIndex {
    pub fn new(idx: usize) -> Self {
        KeyIndex(idx)
    }

    /// Parse a 1-based field number given to the command line option `option`.
    pub fn from_field_number(value: &str, option: &'static str) -> Result<Self> {
        let invalid = || Error::InvalidKeyArgument {
            option,
            value: value.to_owned(),
        };
        let n = value.trim().parse::<usize>().map_err(|_| invalid())?;
        if n < 1 {
            return Err(invalid());
        }
        Ok(KeyIndex(n - 1))
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }

    /// The 1-based field number, as the user wrote it.
    #[inline]
    pub fn field_number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for KeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.field_number())
    }
}

/// Everything a single join run needs. Built once by the caller and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    left_path: PathBuf,
    right_path: PathBuf,
    left_key: KeyIndex,
    right_key: KeyIndex,
}

impl Config {
    pub fn new<P0, P1>(left_path: P0, right_path: P1) -> Self
        where P0: Into<PathBuf>,
              P1: Into<PathBuf>,
    {
        Config {
            left_path: left_path.into(),
            right_path: right_path.into(),
            left_key: KeyIndex::default(),
            right_key: KeyIndex::default(),
        }
    }

    pub fn left_key(mut self, k: KeyIndex) -> Self {
        self.left_key = k;
        self
    }

    pub fn right_key(mut self, k: KeyIndex) -> Self {
        self.right_key = k;
        self
    }

    pub fn left_path(&self) -> &Path {
        &self.left_path
    }

    pub fn right_path(&self) -> &Path {
        &self.right_path
    }

    pub fn left_key_index(&self) -> KeyIndex {
        self.left_key
    }

    pub fn right_key_index(&self) -> KeyIndex {
        self.right_key
    }

    /// Fail unless both inputs are existing regular files. Runs before any of them is opened.
    pub fn check_inputs(&self) -> Result<()> {
        for p in &[&self.left_path, &self.right_path] {
            if !p.is_file() {
                return Err(Error::MissingFile { path: p.to_path_buf() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, KeyIndex};
    use crate::error::Error;

    #[test]
    fn key_index_default_is_first_field() {
        let c = Config::new("a", "b");
        assert_eq!(c.left_key_index().index(), 0);
        assert_eq!(c.right_key_index().index(), 0);
        assert_eq!(KeyIndex::default().field_number(), 1);
    }

    #[test]
    fn key_index_from_field_number() {
        assert_eq!(KeyIndex::from_field_number("1", "left-key").unwrap().index(), 0);
        assert_eq!(KeyIndex::from_field_number("2", "right-key").unwrap().index(), 1);
        assert_eq!(KeyIndex::from_field_number(" 7 ", "key").unwrap().index(), 6);
    }

    #[test]
    fn key_index_rejects_invalid() {
        for v in &["0", "-1", "abc", "", "1.5"] {
            match KeyIndex::from_field_number(v, "left-key") {
                Err(Error::InvalidKeyArgument { option, value }) => {
                    assert_eq!(option, "left-key");
                    assert_eq!(value, *v);
                }
                r => panic!("expected InvalidKeyArgument for {:?}, got {:?}", v, r),
            }
        }
    }

    #[test]
    fn missing_inputs() {
        let c = Config::new("/nonexistent/left.txt", "/nonexistent/right.txt");
        match c.check_inputs() {
            Err(Error::MissingFile { path }) => {
                assert_eq!(path.to_str(), Some("/nonexistent/left.txt"));
            }
            r => panic!("expected MissingFile, got {:?}", r),
        }
    }
}
