//! Join the lines of two space-delimited files on a key field.
//!
//! Every line of the left file produces one output row: its key, its remaining fields, and the
//! remaining fields of all the right lines sharing that key. The right lines with a key the left
//! file does not have follow afterwards.

pub mod config;
pub mod error;
pub mod join;
pub mod printer;
pub mod reader;
pub mod record;
