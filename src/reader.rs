use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use log::debug;

use crate::config::KeyIndex;
use crate::error::{Error, Result};
use crate::record::{Keyed, Record};

const TERMINATOR: char = '\n';
const CARRIAGE_RETURN: char = '\r';

/// Reads `Record`s line by line from the underlying reader.
pub struct Reader<R> {
    rdr: io::BufReader<R>,
    buf: String,
    state: ReaderState,
}

struct ReaderState {
    // number of lines consumed so far
    line: usize,
    // reached EOF of the underlying reader
    eof: bool,
}

impl<R> Reader<R> where R: io::Read {
    pub fn from_reader(rdr: R) -> Self {
        Reader {
            rdr: io::BufReader::new(rdr),
            buf: String::new(),
            state: ReaderState {
                line: 0,
                eof: false,
            },
        }
    }

    /// Read the next line into `record`. Returns `false` at the end of input.
    ///
    /// Only the line terminator, `\n` or `\r\n`, is stripped; any other whitespace stays in the
    /// fields.
    #[inline]
    pub fn read_record(&mut self, record: &mut Record) -> io::Result<bool> {
        record.clear();
        if self.state.eof {
            return Ok(false);
        }
        self.buf.clear();
        if self.rdr.read_line(&mut self.buf)? == 0 {
            self.state.eof = true;
            return Ok(false);
        }
        self.state.line += 1;
        let mut line = &self.buf[..];
        if line.ends_with(TERMINATOR) {
            line = &line[..line.len() - 1];
            if line.ends_with(CARRIAGE_RETURN) {
                line = &line[..line.len() - 1];
            }
        }
        record.load(self.state.line, line);
        Ok(true)
    }

    /// Read all the remaining records. Blank lines at the very end of the input are dropped.
    pub fn read_all(&mut self) -> io::Result<Vec<Record>> {
        let mut recs = Vec::new();
        let mut rec = Record::default();
        while self.read_record(&mut rec)? {
            recs.push(rec.clone());
        }
        while recs.last().map_or(false, |r| r.is_blank()) {
            recs.pop();
        }
        Ok(recs)
    }
}

/// A whole input file held in memory.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    records: Vec<Record>,
}

impl Table {
    pub fn from_records<S: Into<String>>(name: S, records: Vec<Record>) -> Self {
        Table {
            name: name.into(),
            records,
        }
    }

    pub fn from_reader<S, R>(name: S, rdr: R) -> io::Result<Self>
        where S: Into<String>,
              R: io::Read,
    {
        let records = Reader::from_reader(rdr).read_all()?;
        Ok(Table::from_records(name, records))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Split every record on `key`, in file order.
    ///
    /// Fails on the first record that has no field at `key`.
    pub fn keyed(&self, key: KeyIndex) -> Result<Vec<Keyed>> {
        self.records
            .iter()
            .map(|r| {
                r.split_key(key).ok_or_else(|| Error::KeyIndexOutOfRange {
                    source_name: self.name.clone(),
                    line: r.line(),
                    field: key.field_number(),
                    fields: r.len(),
                })
            })
            .collect()
    }
}

/// Load the file at `path` into a `Table`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let io_err = |e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::open(path).map_err(io_err)?;
    let table = Table::from_reader(path.display().to_string(), file).map_err(io_err)?;
    debug!("loaded {} record(s) from {}", table.len(), table.name());
    Ok(table)
}
