use std::path::PathBuf;

use clap::{crate_authors, crate_version, App, Arg, ArgMatches};
use spjoin::config::{Config, KeyIndex};
use spjoin::error::{Error, Result};

pub fn app() -> App<'static, 'static> {
    App::new("spj")
        .author(crate_authors!())
        .version(crate_version!())
        .about("joins lines of two space-delimited files on a key field.")
        .arg(Arg::with_name("key")
                 .short("k")
                 .long("key")
                 .conflicts_with_all(&["left_key", "right_key"])
                 .takes_value(true)
                 .allow_hyphen_values(true)
                 .value_name("N")
                 .help("equivalent to '--left-key=N --right-key=N'"))
        .arg(Arg::with_name("left_key")
                 .long("left-key")
                 .takes_value(true)
                 .allow_hyphen_values(true)
                 .value_name("N")
                 .help("join on this field of the left file")
                 .long_help(
"join on this field of the left file. The index starts with one. The default is 1."))
        .arg(Arg::with_name("right_key")
                 .long("right-key")
                 .takes_value(true)
                 .allow_hyphen_values(true)
                 .value_name("N")
                 .help("join on this field of the right file")
                 .long_help(
"join on this field of the right file. The index starts with one. The default is 1."))
        .arg(Arg::with_name("out_delimiter")
                 .short("d")
                 .long("out-delimiter")
                 .takes_value(true)
                 .value_name("CHAR")
                 .conflicts_with("bracketed")
                 .help("use CHAR as output field delimiter")
                 .long_help(
"use CHAR as output field delimiter. It must be 1 byte long in utf-8. The default is a \
single space."))
        .arg(Arg::with_name("bracketed")
                 .long("bracketed")
                 .help("print each row as a bracketed list of quoted fields"))
        .arg(Arg::with_name("LEFT_FILE")
                 .help("the left input file")
                 .required(true)
                 .index(1))
        .arg(Arg::with_name("RIGHT_FILE")
                 .help("the right input file")
                 .required(true)
                 .index(2))
}

pub struct Args {
    left_path: PathBuf,
    right_path: PathBuf,
    left_key: KeyIndex,
    right_key: KeyIndex,
    out_delimiter: u8,
    bracketed: bool,
}

impl Args {
    pub fn parse() -> Result<Args> {
        Args::from_matches(&app().get_matches())
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Args> {
        // both are required, clap refuses to produce matches without them
        let left_path = matches.value_of_os("LEFT_FILE").unwrap_or_default();
        let right_path = matches.value_of_os("RIGHT_FILE").unwrap_or_default();

        let key = match matches.value_of("key") {
            Some(v) => KeyIndex::from_field_number(v, "key")?,
            None => KeyIndex::default(),
        };
        let left_key = match matches.value_of("left_key") {
            Some(v) => KeyIndex::from_field_number(v, "left-key")?,
            None => key,
        };
        let right_key = match matches.value_of("right_key") {
            Some(v) => KeyIndex::from_field_number(v, "right-key")?,
            None => key,
        };

        let out_delimiter = match matches.value_of("out_delimiter") {
            Some(s) => {
                let b = s.as_bytes();
                if b.len() != 1 {
                    return Err(Error::InvalidDelimiter { value: s.to_owned() });
                }
                b[0]
            }
            None => b' ',
        };

        Ok(Args {
            left_path: left_path.into(),
            right_path: right_path.into(),
            left_key,
            right_key,
            out_delimiter,
            bracketed: matches.is_present("bracketed"),
        })
    }

    pub fn config(&self) -> Config {
        Config::new(self.left_path.clone(), self.right_path.clone())
            .left_key(self.left_key)
            .right_key(self.right_key)
    }

    pub fn out_delimiter(&self) -> u8 {
        self.out_delimiter
    }

    pub fn bracketed(&self) -> bool {
        self.bracketed
    }
}
