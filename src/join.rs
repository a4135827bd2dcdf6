use std::collections::{HashMap, HashSet};
use std::io;
use std::slice;

use log::debug;

use crate::config::{Config, KeyIndex};
use crate::error::{Error, Result};
use crate::printer::PrintRow;
use crate::reader::{self, Table};
use crate::record::Keyed;

#[derive(Debug, Clone, Copy, Default)]
pub struct JoinOptions {
    left_key: KeyIndex,
    right_key: KeyIndex,
}

impl JoinOptions {
    pub fn new(left_key: KeyIndex, right_key: KeyIndex) -> Self {
        JoinOptions {
            left_key,
            right_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        JoinOptions::new(config.left_key_index(), config.right_key_index())
    }
}

/// An output row: the key followed by the residual fields of every contributing record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    fn from_keyed(k: &Keyed<'a>) -> Self {
        let mut fields = Vec::with_capacity(k.residual().len() + 1);
        fields.push(k.key());
        fields.extend_from_slice(k.residual());
        Row { fields }
    }

    #[inline]
    fn extend(&mut self, k: &Keyed<'a>) {
        self.fields.extend_from_slice(k.residual());
    }

    #[inline]
    pub fn key(&self) -> &'a str {
        self.fields[0]
    }

    #[inline]
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<&'a str> {
        self.fields.iter()
    }
}

/// The result of a join, in output order: all `matched` rows, then all `remainder` rows.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Joined<'a> {
    /// One row per left record, extended with the residual fields of its right matches.
    pub matched: Vec<Row<'a>>,
    /// Right records whose key is not shared with the left file.
    pub remainder: Vec<Row<'a>>,
    /// Number of distinct keys present in both files.
    pub joint_keys: usize,
}

impl<'a> Joined<'a> {
    pub fn rows(&self) -> impl Iterator<Item = &Row<'a>> {
        self.matched.iter().chain(self.remainder.iter())
    }
}

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Summary {
    pub left_records: usize,
    pub right_records: usize,
    pub joint_keys: usize,
    pub remainder_rows: usize,
}

/// Collect the right keys which also appear among the left keys.
pub fn joint_keys<'a>(left: &[Keyed<'a>], right: &[Keyed<'a>]) -> HashSet<&'a str> {
    let left_keys: HashSet<&str> = left.iter().map(|k| k.key()).collect();
    right.iter()
         .map(|k| k.key())
         .filter(|k| left_keys.contains(k))
         .collect()
}

/// Join `left` with `right`.
///
/// Every left record yields exactly one row. If its key is shared with the right file, the
/// residual fields of all the right records with that key are appended to the same row in
/// right file order; there is no fan-out into one row per pair. Right records with a key
/// unknown to the left file follow as rows of their own.
///
/// All the keys of both files are extracted before any row is built, so a record too short for
/// its key field fails the whole join.
pub fn join<'a>(left: &'a Table, right: &'a Table, opts: JoinOptions) -> Result<Joined<'a>> {
    let left_keyed = left.keyed(opts.left_key)?;
    let right_keyed = right.keyed(opts.right_key)?;
    let joint = joint_keys(&left_keyed, &right_keyed);
    debug!("{} key(s) shared by {} and {}", joint.len(), left.name(), right.name());

    // positions of the right records for each shared key, in file order
    let mut matches: HashMap<&str, Vec<usize>> = HashMap::with_capacity(joint.len());
    for (i, k) in right_keyed.iter().enumerate() {
        if joint.contains(k.key()) {
            matches.entry(k.key()).or_insert_with(Vec::new).push(i);
        }
    }

    let matched: Vec<Row> = left_keyed
        .iter()
        .map(|lk| {
            let mut row = Row::from_keyed(lk);
            if let Some(positions) = matches.get(lk.key()) {
                for &i in positions {
                    row.extend(&right_keyed[i]);
                }
            }
            row
        })
        .collect();

    let remainder: Vec<Row> = right_keyed
        .iter()
        .filter(|rk| !joint.contains(rk.key()))
        .map(Row::from_keyed)
        .collect();

    debug!("{} left row(s), {} right-only row(s)", matched.len(), remainder.len());
    Ok(Joined {
        matched,
        remainder,
        joint_keys: joint.len(),
    })
}

/// Print all the rows of `joined` into `w`.
pub fn write_joined<W, P>(w: &mut W, p: &mut P, joined: &Joined) -> Result<()>
    where W: io::Write,
          P: PrintRow<W>,
{
    for row in joined.rows() {
        p.print_row(w, row).map_err(Error::Write)?;
    }
    Ok(())
}

/// Run a complete join of the files named in `config`, printing the rows into `w`.
///
/// Both inputs are checked for existence before either of them is read.
pub fn join_files<W, P>(config: &Config, w: &mut W, mut p: P) -> Result<Summary>
    where W: io::Write,
          P: PrintRow<W>,
{
    config.check_inputs()?;
    let left = reader::load(config.left_path())?;
    let right = reader::load(config.right_path())?;

    let joined = join(&left, &right, JoinOptions::from_config(config))?;
    write_joined(w, &mut p, &joined)?;
    w.flush().map_err(Error::Write)?;

    Ok(Summary {
        left_records: left.len(),
        right_records: right.len(),
        joint_keys: joined.joint_keys,
        remainder_rows: joined.remainder.len(),
    })
}
