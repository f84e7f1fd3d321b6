//! Reading puzzle-style input files: whole text, lines, lazy line streams
//! and integers.
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{StreamError, StreamResult};
use crate::stream::{try_from_iter, Link};

/// Reads the whole file as text.
pub fn read_text(path: impl AsRef<Path>) -> StreamResult<String> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// Reads the file as lines, without line terminators.
pub fn read_lines(path: impl AsRef<Path>) -> StreamResult<Vec<String>> {
    Ok(read_text(path)?.lines().map(str::to_owned).collect())
}

/// Streams the file's lines, reading one line per force.
pub fn line_stream(path: impl AsRef<Path>) -> StreamResult<Link<String>> {
    let path = path.as_ref();
    log::debug!("streaming lines of {}", path.display());
    let file = File::open(path)?;
    try_from_iter(BufReader::new(file).lines())
}

/// Parses one integer, ignoring surrounding whitespace.
pub fn parse_int(text: &str) -> StreamResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|err| StreamError::Parse(format!("{:?}: {}", text, err)))
}

pub fn parse_ints<S: AsRef<str>>(lines: &[S]) -> StreamResult<Vec<i64>> {
    lines.iter().map(|line| parse_int(line.as_ref())).collect()
}
