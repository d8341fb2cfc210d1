//! Human readable per-sequence summaries for terminal output

use std::fmt::Write;

use super::table::format_signed_mass;
use crate::protein::{CalculationResult, SequenceReport};

/// `146.08 Da (0.15 kDa)`
pub fn format_mass(result: &CalculationResult) -> String {
    format!("{:.2} Da ({:.2} kDa)", result.mass, result.mass_kda())
}

pub fn summarize(index: usize, report: &SequenceReport) -> String {
    let result = &report.result;
    let mut buf = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(buf, "Result for Sequence {index}:");
    let _ = writeln!(buf, "  {}", format_mass(result));
    let _ = writeln!(buf, "  Amino Acid Composition: {{{}}}", result.composition);

    if !result.applied_ptms.is_empty() {
        let _ = writeln!(buf, "  Applied PTMs:");
        for applied in &result.applied_ptms {
            let _ = writeln!(
                buf,
                "    • {} (×{}) → {}",
                applied.ptm,
                applied.multiplicity,
                format_signed_mass(applied.delta())
            );
        }
    }

    if !result.invalid.is_empty() {
        let invalid: Vec<String> = result.invalid.iter().map(char::to_string).collect();
        let _ = writeln!(buf, "  Ignored invalid characters: {}", invalid.join(", "));
    }

    buf
}

/// Summaries for a whole batch, numbered from 1
pub fn summarize_all(reports: &[SequenceReport]) -> String {
    reports
        .iter()
        .enumerate()
        .map(|(i, report)| summarize(i + 1, report))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::{calculate_batch, Ptm};

    #[test]
    fn test_summary_lines() {
        let reports = calculate_batch(&["CCxA"], &[Ptm::DisulfideBond]);
        let summary = summarize(1, &reports[0]);
        let lines: Vec<&str> = summary.lines().collect();

        // 2 * 121.2 + 89.1 - 2 * 18.015 - 2.015
        assert_eq!(lines[0], "Result for Sequence 1:");
        assert_eq!(lines[1], "  293.46 Da (0.29 kDa)");
        assert_eq!(lines[2], "  Amino Acid Composition: {C:2; A:1}");
        assert_eq!(lines[3], "  Applied PTMs:");
        assert_eq!(lines[4], "    • Disulfide bond (×1) → -2.02 Da");
        assert_eq!(lines[5], "  Ignored invalid characters: X");
    }

    #[test]
    fn test_summary_omits_empty_sections() {
        let reports = calculate_batch(&["GG"], &[]);
        let summary = summarize(3, &reports[0]);
        assert!(summary.starts_with("Result for Sequence 3:"));
        assert!(!summary.contains("Applied PTMs"));
        assert!(!summary.contains("Ignored"));
    }

    #[test]
    fn test_batch_numbering() {
        let reports = calculate_batch(&["A", "G"], &[]);
        let text = summarize_all(&reports);
        assert!(text.contains("Result for Sequence 1:"));
        assert!(text.contains("Result for Sequence 2:"));
    }
}
