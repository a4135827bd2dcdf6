use std::fmt::Write as FmtWrite;
use std::io;

use crate::join::Row;

/// A trait for printing `Row`s in a desired format.
pub trait PrintRow<W: io::Write> {
    /// Print a single row into `w`, including its terminator.
    fn print_row(&mut self, w: &mut W, row: &Row) -> io::Result<()>;
}

/// Print the fields of a row separated by a delimiter: first the key followed by the residual
/// fields.
#[derive(Clone, Copy)]
pub struct KeyFirst {
    delimiter: u8,
    terminator: u8,
}

impl Default for KeyFirst {
    fn default() -> Self {
        KeyFirst {
            delimiter: b' ',
            terminator: b'\n',
        }
    }
}

impl KeyFirst {
    pub fn new(delimiter: u8, terminator: u8) -> Self {
        KeyFirst {
            delimiter,
            terminator,
        }
    }
}

impl<W: io::Write> PrintRow<W> for KeyFirst {
    #[inline]
    fn print_row(&mut self, w: &mut W, row: &Row) -> io::Result<()> {
        let mut is_first = true;
        for f in row.iter() {
            if !is_first {
                w.write_all(&[self.delimiter])?;
            } else {
                is_first = false;
            }
            w.write_all(f.as_bytes())?;
        }
        w.write_all(&[self.terminator])?;
        Ok(())
    }
}

/// Print a row as a bracketed list of quoted strings, e.g. `['1', 'alice', 'nyc']`.
///
/// Fields are quoted with `'`, or with `"` when they contain a `'` but no `"`. Backslashes and the
/// quote in use are escaped, and so are the characters which are not printable: control and
/// format characters, whitespace other than the space, and private use characters. Those are
/// written as `\xNN`, `\uNNNN` or `\UNNNNNNNN`. Unassigned code points are printed as they are.
#[derive(Clone, Default)]
pub struct Bracketed {
    buf: String,
}

impl Bracketed {
    pub fn new() -> Self {
        Bracketed::default()
    }
}

impl<W: io::Write> PrintRow<W> for Bracketed {
    fn print_row(&mut self, w: &mut W, row: &Row) -> io::Result<()> {
        self.buf.clear();
        self.buf.push('[');
        for (i, f) in row.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            push_quoted(&mut self.buf, f);
        }
        self.buf.push_str("]\n");
        w.write_all(self.buf.as_bytes())
    }
}

fn push_quoted(buf: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    buf.push(quote);
    for c in s.chars() {
        match c {
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c == quote => {
                buf.push('\\');
                buf.push(c);
            }
            c if !is_printable(c) => {
                // writing into a String cannot fail
                let _ = match c as u32 {
                    n @ 0..=0xff => write!(buf, "\\x{:02x}", n),
                    n @ 0x100..=0xffff => write!(buf, "\\u{:04x}", n),
                    n => write!(buf, "\\U{:08x}", n),
                };
            }
            c => buf.push(c),
        }
    }
    buf.push(quote);
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    match c as u32 {
        // format characters
        0xad | 0x600..=0x605 | 0x61c | 0x6dd | 0x70f | 0x890..=0x891 | 0x8e2 | 0x180e
        | 0x200b..=0x200f | 0x202a..=0x202e | 0x2060..=0x2064 | 0x2066..=0x206f | 0xfeff
        | 0xfff9..=0xfffb | 0x110bd | 0x110cd | 0x13430..=0x1343f | 0x1bca0..=0x1bca3
        | 0x1d173..=0x1d17a | 0xe0001 | 0xe0020..=0xe007f => false,
        // private use
        0xe000..=0xf8ff | 0xf0000..=0xffffd | 0x100000..=0x10fffd => false,
        _ => true,
    }
}
