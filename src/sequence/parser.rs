//! Splitting raw input text into protein sequences
//!
//! Two layouts are understood: one sequence per line, and FASTA-like records
//! where a `>` header line starts each record. Nothing here validates residues;
//! malformed and blank lines are skipped silently.

use std::path::Path;

use log::debug;

/// Marks the header line of a record in tagged input
pub const RECORD_MARKER: char = '>';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Every non-blank line is its own sequence
    Plain,
    /// FASTA-like records, headers discarded
    Tagged,
}

impl InputFormat {
    /// FASTA extensions select tagged records, anything else is read line by line
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("fasta" | "fa" | "faa") => InputFormat::Tagged,
            _ => InputFormat::Plain,
        }
    }
}

pub fn parse_sequences(input: &str, format: InputFormat) -> Vec<String> {
    let sequences = match format {
        InputFormat::Plain => parse_plain(input),
        InputFormat::Tagged => parse_tagged(input),
    };
    debug!("Parsed {} sequences from {format:?} input", sequences.len());
    sequences
}

pub fn parse_plain(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn parse_tagged(input: &str) -> Vec<String> {
    let (mut records, current) = input.lines().map(str::trim).fold(
        (Vec::new(), String::new()),
        |(mut records, mut current), line| {
            if line.starts_with(RECORD_MARKER) {
                if !current.is_empty() {
                    records.push(std::mem::take(&mut current));
                }
            } else {
                current.push_str(line);
            }
            (records, current)
        },
    );

    if !current.is_empty() {
        records.push(current);
    }
    records
}
