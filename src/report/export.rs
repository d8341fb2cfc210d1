//! CSV export of result tables

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::info;

use super::table::ResultRow;
use crate::error::{ProtwtError, Result};

pub const DEFAULT_EXPORT_FILE: &str = "protein_weight_results.csv";

pub fn write_csv<W: Write>(rows: &[ResultRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render rows to an in-memory CSV document
pub fn to_csv_string(rows: &[ResultRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn export_csv(rows: &[ResultRow], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ProtwtError::io(path, e))?;
    write_csv(rows, file)?;
    info!("Exported {} result rows to {path:?}", rows.len());
    Ok(())
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ResultRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows = csv_reader.deserialize().collect::<Result<Vec<ResultRow>, _>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::{calculate_batch, Ptm};
    use crate::report::build_table;
    use tempfile::tempdir;

    fn sample_rows() -> Vec<ResultRow> {
        let reports = calculate_batch(
            &["ARN", "CaCCCx", "", "MKT*W,Q"],
            &[Ptm::Methylation, Ptm::DisulfideBond],
        );
        build_table(&reports)
    }

    #[test]
    fn test_header_and_row_count() {
        let csv = to_csv_string(&sample_rows()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some(
                "Sequence,Molecular Weight (Da),Molecular Weight (kDa),\
                 Amino Acid Composition,Applied PTMs,Invalid Characters"
            )
        );
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_round_trip_preserves_rounded_masses() {
        let rows = sample_rows();
        let csv = to_csv_string(&rows).unwrap();
        let parsed = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed, rows);
        for (original, parsed) in rows.iter().zip(&parsed) {
            assert_eq!(parsed.mass_da, original.mass_da);
            assert_eq!(parsed.mass_kda, original.mass_kda);
        }
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let rows = sample_rows();
        let csv = to_csv_string(&rows[3..]).unwrap();
        assert!(csv.contains("\"MKT*W,Q\""));
        assert!(csv.contains("\"*,,\""));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        let rows = sample_rows();

        export_csv(&rows, &path).unwrap();
        let parsed = read_csv(File::open(&path).unwrap()).unwrap();
        assert_eq!(parsed, rows);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.csv");
        let err = export_csv(&sample_rows(), &path).unwrap_err();
        assert!(matches!(err, ProtwtError::Io { .. }));
    }
}
