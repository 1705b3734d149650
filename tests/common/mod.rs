//! Common test utilities

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// One record line: `(label, value, category)`.
pub type Record<'a> = (&'a str, i64, &'a str);

/// Build a data file: header lines, then one count line + records per
/// snapshot, snapshots separated by blank lines.
pub fn dataset_text(title: &str, snapshots: &[(&str, Vec<Record<'_>>)]) -> String {
    let mut out = format!("{title}\nValue (units)\nSource: test suite\n\n");
    for (timestamp, records) in snapshots {
        let _ = writeln!(out, "{}", records.len());
        for (label, value, category) in records {
            let _ = writeln!(out, "{timestamp},{label},ignored,{value},{category}");
        }
        out.push('\n');
    }
    out
}

/// A small three-year race with four cities on three continents.
pub fn cities() -> String {
    dataset_text(
        "Cities",
        &[
            (
                "2000",
                vec![
                    ("Tokyo", 980, "Asia"),
                    ("Paris", 120, "Europe"),
                    ("Lagos", 300, "Africa"),
                    ("Osaka", 450, "Asia"),
                ],
            ),
            (
                "2001",
                vec![
                    ("Tokyo", 990, "Asia"),
                    ("Paris", 130, "Europe"),
                    ("Lagos", 700, "Africa"),
                    ("Osaka", 460, "Asia"),
                ],
            ),
            (
                "2002",
                vec![
                    ("Tokyo", 1000, "Asia"),
                    ("Paris", 140, "Europe"),
                    ("Lagos", 1200, "Africa"),
                    ("Osaka", 470, "Asia"),
                ],
            ),
        ],
    )
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Remove ANSI SGR sequences so assertions can look at plain text.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for e in chars.by_ref() {
                if e.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
