//! Streaming loader for bar-race data files.
//!
//! ```text
//! The most populous cities in the world from 1500 to 2018     <- title
//! Population (thousands)                                      <- value label
//! Source: SEDAC; United Nations; Demographia                  <- source
//!                                                             <- blank ends the header
//! 3                                                           <- records that follow
//! 1500,Beijing,China,672,East Asia
//! 1500,Vijayanagar,India,500,South Asia
//! 1500,Cairo,Egypt,400,Middle East
//!
//! 3
//! 1501,...
//! ```
//!
//! Record columns: timestamp, label, (ignored), value, category. Anything
//! past the fifth column is ignored as well.

use std::{
    collections::HashSet,
    error::Error,
    fmt::{self, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
};

use crate::core::{
    dataset::{Dataset, Header},
    error::RaceError,
    palette::CategoryPalette,
    snapshot::{Bar, Snapshot},
};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseDataError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    MissingHeader(&'static str),
    BadCount(String),
    ZeroCount,
    ShortSnapshot { expected: usize, got: usize },
    BadColumnCount(usize),
    BadInteger { field: &'static str, text: String },
    TimestampMismatch { expected: String, found: String },
    NoSnapshots,
}

impl Display for ParseDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::MissingHeader(field) => {
                write!(f, "line {}: missing {field} in the file header", self.line)
            }
            ParseErrorKind::BadCount(text) => {
                write!(f, "line {}: expected a record count, got '{text}'", self.line)
            }
            ParseErrorKind::ZeroCount => {
                write!(f, "line {}: a snapshot needs at least one record", self.line)
            }
            ParseErrorKind::ShortSnapshot { expected, got } => write!(
                f,
                "line {}: snapshot announced {expected} records but only {got} followed",
                self.line
            ),
            ParseErrorKind::BadColumnCount(n) => {
                write!(f, "line {}: expected at least 4 columns, got {n}", self.line)
            }
            ParseErrorKind::BadInteger { field, text } => {
                write!(f, "line {}: invalid {field} '{text}'", self.line)
            }
            ParseErrorKind::TimestampMismatch { expected, found } => write!(
                f,
                "line {}: record timestamp '{found}' does not match snapshot '{expected}'",
                self.line
            ),
            ParseErrorKind::NoSnapshots => f.write_str("file contains no snapshots"),
        }
    }
}
impl Error for ParseDataError {}

impl ParseDataError {
    fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
fn text(b: &[u8]) -> String {
    String::from_utf8_lossy(b).into_owned()
}

/// Snapshot whose records are still being read.
struct Pending {
    expected: usize,
    limit: usize,
    timestamp: Option<String>,
    bars: Vec<Bar>,
}

impl Pending {
    fn short(&self, line: usize) -> ParseDataError {
        ParseDataError::at(
            line,
            ParseErrorKind::ShortSnapshot {
                expected: self.expected,
                got: self.bars.len(),
            },
        )
    }
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 16;

/// Line reader that strips line endings and counts lines.
struct Lines<R> {
    rdr: BufReader<R>,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: Read> Lines<R> {
    fn new(src: R) -> Self {
        Self {
            rdr: BufReader::with_capacity(BUF_CAP, src),
            buf: Vec::with_capacity(256),
            line_no: 0,
        }
    }

    /// Next line (without terminator) or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&[u8]>, ParseDataError> {
        self.buf.clear();
        let n = self
            .rdr
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| ParseDataError::at(self.line_no, ParseErrorKind::Io(e)))?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
        }
        if self.buf.ends_with(b"\r") {
            self.buf.pop();
        }
        Ok(Some(&self.buf))
    }
}

fn read_header<R: Read>(lines: &mut Lines<R>) -> Result<Header, ParseDataError> {
    let mut fields = [String::new(), String::new(), String::new()];
    for (slot, name) in fields.iter_mut().zip(["title", "value label", "source"]) {
        let line_no = lines.line_no + 1;
        match lines.next_line()? {
            Some(l) if !trim(l).is_empty() => *slot = text(trim(l)),
            _ => return Err(ParseDataError::at(line_no, ParseErrorKind::MissingHeader(name))),
        }
    }
    // anything else up to the first blank line belongs to the header
    while let Some(l) = lines.next_line()? {
        if trim(l).is_empty() {
            break;
        }
    }
    let [title, label, source] = fields;
    Ok(Header {
        title,
        label,
        source,
    })
}

fn parse_count(bytes: &[u8], line: usize) -> Result<usize, ParseDataError> {
    let n = lexical_core::parse::<usize>(bytes)
        .map_err(|_| ParseDataError::at(line, ParseErrorKind::BadCount(text(bytes))))?;
    if n == 0 {
        return Err(ParseDataError::at(line, ParseErrorKind::ZeroCount));
    }
    Ok(n)
}

fn parse_record(
    line: &[u8],
    line_no: usize,
    pending: &mut Pending,
    palette: &mut CategoryPalette,
) -> Result<(), ParseDataError> {
    let cols: Vec<&[u8]> = line.split(|&b| b == b',').map(trim).collect();
    if cols.len() < 4 {
        return Err(ParseDataError::at(
            line_no,
            ParseErrorKind::BadColumnCount(cols.len()),
        ));
    }

    let timestamp = text(cols[0]);
    if let Some(expected) = &pending.timestamp {
        if *expected != timestamp {
            return Err(ParseDataError::at(
                line_no,
                ParseErrorKind::TimestampMismatch {
                    expected: expected.clone(),
                    found: timestamp,
                },
            ));
        }
    } else {
        pending.timestamp = Some(timestamp);
    }

    let value = lexical_core::parse::<i64>(cols[3]).map_err(|_| {
        ParseDataError::at(
            line_no,
            ParseErrorKind::BadInteger {
                field: "value",
                text: text(cols[3]),
            },
        )
    })?;
    let category = cols.get(4).map(|c| text(c)).unwrap_or_default();
    palette.color_for(&category);

    pending.bars.push(Bar::new(text(cols[1]), category, value));
    Ok(())
}

/// Read a whole data file. Each snapshot keeps at most `max_bars` bars.
pub fn read_dataset<R: Read>(src: R, max_bars: usize) -> Result<Dataset, ParseDataError> {
    let mut lines = Lines::new(src);
    let header = read_header(&mut lines)?;

    let mut palette = CategoryPalette::new();
    let mut snapshots = Vec::<Snapshot>::new();
    let mut seen = HashSet::<String>::new();
    let mut pending: Option<Pending> = None;

    loop {
        let line_no = lines.line_no + 1;
        let Some(raw) = lines.next_line()? else {
            break;
        };
        let line = trim(raw);

        let complete = if let Some(p) = pending.as_mut() {
            if line.is_empty() {
                return Err(p.short(line_no));
            }
            parse_record(line, line_no, p, &mut palette)?;
            p.bars.len() == p.expected
        } else {
            if !line.is_empty() {
                let expected = parse_count(line, line_no)?;
                pending = Some(Pending {
                    expected,
                    limit: expected.min(max_bars),
                    timestamp: None,
                    bars: Vec::with_capacity(expected),
                });
            }
            false
        };
        if !complete {
            continue;
        }
        let Some(done) = pending.take() else {
            continue;
        };

        let timestamp = done.timestamp.unwrap_or_default();
        if !seen.insert(timestamp.clone()) {
            tracing::warn!(
                line = line_no,
                timestamp = %timestamp,
                "duplicate timestamp, keeping the first snapshot"
            );
            continue;
        }
        let mut snapshot = Snapshot::new(timestamp, done.limit);
        for bar in done.bars {
            snapshot.push(bar);
        }
        snapshots.push(snapshot);
    }

    if let Some(p) = pending {
        return Err(p.short(lines.line_no));
    }
    if snapshots.is_empty() {
        return Err(ParseDataError::at(lines.line_no, ParseErrorKind::NoSnapshots));
    }

    tracing::debug!(
        snapshots = snapshots.len(),
        categories = palette.len(),
        overflowed = palette.overflowed(),
        "dataset loaded"
    );
    Ok(Dataset::new(header, snapshots, palette))
}

/// Read from a file, or from stdin when `path` is `-`.
pub fn read_dataset_from_path(path: &str, max_bars: usize) -> Result<Dataset, RaceError> {
    if path == "-" {
        return Ok(read_dataset(std::io::stdin(), max_bars)?);
    }
    let file = File::open(path).map_err(|source| RaceError::Open {
        path: path.to_owned(),
        source,
    })?;
    Ok(read_dataset(file, max_bars)?)
}
