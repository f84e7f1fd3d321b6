//! Prints a tour of the stream combinators.
//!
//! ```text
//! $ stream-demo
//! $ stream-demo numbers.txt     # one integer per line replaces 1..=5
//! $ stream-demo --debug numbers.txt
//! ```

use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use lazy_stream::input::{parse_ints, read_lines};
use lazy_stream::{
    append, concat, filter, flat_map, from_vec, integers_from, iter, map, sieve, take, Link,
    StreamResult,
};

/// Print the lazy stream demonstration pipelines.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// File with one integer per line to use as the source stream
    input: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("stream-demo: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> StreamResult<()> {
    let source = match &args.input {
        Some(path) => parse_ints(&read_lines(path)?)?,
        None => (1..=5).collect(),
    };
    debug!("source has {} elements", source.len());

    let mut out = io::stdout().lock();

    let s = from_vec(source);
    let t = map(s.clone(), |x| 3 * x);
    let u = filter(t.clone(), |x| x & 1 == 1)?;
    let v = concat([s.clone(), t.clone(), None, s.clone()]);

    print_stream(&mut out, &s)?;
    print_stream(&mut out, &t)?;
    print_stream(&mut out, &u)?;
    print_stream(&mut out, &v)?;

    let odds = flat_map(s.clone(), |&x| if x & 1 == 1 { vec![x] } else { vec![] })?;
    print_stream(&mut out, &odds)?;

    let doubled = flat_map(s.clone(), |&x| [x * 2])?;
    print_stream(&mut out, &doubled)?;

    let xx = flat_map(s, |&x| {
        if x & 1 == 1 {
            Vec::new()
        } else {
            vec![x; usize::try_from(x).unwrap_or(0)]
        }
    })?;
    print_stream(&mut out, &xx)?;
    print_stream(&mut out, &concat([xx.clone(), xx.clone()]))?;
    print_stream(&mut out, &take(append(xx.clone(), xx), 3))?;

    print_stream(&mut out, &take(integers_from(1), 10))?;
    print_stream(&mut out, &take(sieve(integers_from(2)), 10))?;

    Ok(())
}

/// One value per line, then a blank line.
fn print_stream<T, W>(out: &mut W, s: &Link<T>) -> StreamResult<()>
where
    T: Clone + Display,
    W: Write,
{
    for value in iter(s.clone()) {
        writeln!(out, "{}", value?)?;
    }
    writeln!(out)?;
    Ok(())
}
