//! Collecting the sequences for one calculation request

use std::fs;
use std::path::Path;

use log::{info, warn};

use super::parser::{parse_sequences, InputFormat};
use crate::error::{ProtwtError, Result};

/// Read and parse a sequence file, picking the format from its extension
/// unless one is given
pub fn read_sequence_file(path: &Path, format: Option<InputFormat>) -> Result<Vec<String>> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let contents = fs::read_to_string(path).map_err(|e| ProtwtError::io(path, e))?;
    let sequences = parse_sequences(&contents, format);

    if sequences.is_empty() {
        warn!("No sequences found in {path:?}");
    } else {
        info!("Read {} sequences from {path:?} as {format:?}", sequences.len());
    }
    Ok(sequences)
}

/// Gather the sequences to process: a file takes priority over manually entered
/// text, which counts as a single sequence
///
/// Fails with [`ProtwtError::EmptyInput`] when neither was provided.
pub fn gather_sequences(
    file: Option<&Path>,
    manual: Option<&str>,
    format: Option<InputFormat>,
) -> Result<Vec<String>> {
    if let Some(path) = file {
        return read_sequence_file(path, format);
    }

    match manual.map(str::trim) {
        Some(sequence) if !sequence.is_empty() => Ok(vec![sequence.to_owned()]),
        _ => Err(ProtwtError::EmptyInput),
    }
}
