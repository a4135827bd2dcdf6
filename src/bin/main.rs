mod args;

use std::io;
use std::process;

use log::info;

use args::Args;
use spjoin::error::Result;
use spjoin::join::join_files;
use spjoin::printer::{Bracketed, KeyFirst};

fn main() {
    env_logger::init();

    if let Err(e) = Args::parse().and_then(|args| run(&args)) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    const OUTBUF_CAP: usize = 4 * (1 << 14);
    let config = args.config();
    let stdout = io::stdout();
    let mut out = io::BufWriter::with_capacity(OUTBUF_CAP, stdout.lock());

    let summary = if args.bracketed() {
        join_files(&config, &mut out, Bracketed::new())?
    } else {
        join_files(&config, &mut out, KeyFirst::new(args.out_delimiter(), b'\n'))?
    };
    info!("joined {} left and {} right record(s): {} shared key(s), {} right-only row(s)",
          summary.left_records,
          summary.right_records,
          summary.joint_keys,
          summary.remainder_rows);
    Ok(())
}
