//! Tabular view of calculation results, one row per sequence

use serde::{Deserialize, Serialize};

use crate::protein::{AppliedPtm, SequenceReport};

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mass delta with an explicit sign, e.g. `+79.97 Da`
pub fn format_signed_mass(delta: f64) -> String {
    // Adding zero turns -0.0 into 0.0
    format!("{:+.2} Da", delta + 0.0)
}

/// `Disulfide bond x2 (-4.03 Da)`
pub fn format_applied_ptm(applied: &AppliedPtm) -> String {
    format!(
        "{} x{} ({})",
        applied.ptm,
        applied.multiplicity,
        format_signed_mass(applied.delta())
    )
}

pub fn format_applied_ptms(applied: &[AppliedPtm]) -> String {
    if applied.is_empty() {
        return "None".to_owned();
    }
    applied
        .iter()
        .map(format_applied_ptm)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn format_invalid_characters(invalid: &[char]) -> String {
    invalid
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Sequence")]
    pub sequence: String,
    #[serde(rename = "Molecular Weight (Da)")]
    pub mass_da: f64,
    #[serde(rename = "Molecular Weight (kDa)")]
    pub mass_kda: f64,
    #[serde(rename = "Amino Acid Composition")]
    pub composition: String,
    #[serde(rename = "Applied PTMs")]
    pub applied_ptms: String,
    #[serde(rename = "Invalid Characters")]
    pub invalid_characters: String,
}

impl From<&SequenceReport> for ResultRow {
    fn from(report: &SequenceReport) -> Self {
        let result = &report.result;
        ResultRow {
            sequence: report.sequence.clone(),
            mass_da: round2(result.mass),
            mass_kda: round2(result.mass_kda()),
            composition: result.composition.to_string(),
            applied_ptms: format_applied_ptms(&result.applied_ptms),
            invalid_characters: format_invalid_characters(&result.invalid),
        }
    }
}

pub fn build_table(reports: &[SequenceReport]) -> Vec<ResultRow> {
    reports.iter().map(ResultRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::{calculate_batch, Ptm};

    #[test]
    fn test_round2() {
        assert_eq!(round2(146.075_1), 146.08);
        assert_eq!(round2(0.089_1), 0.09);
        assert_eq!(round2(-4.031), -4.03);
        assert_eq!(round2(89.1), 89.1);
    }

    #[test]
    fn test_signed_mass() {
        assert_eq!(format_signed_mass(79.97), "+79.97 Da");
        assert_eq!(format_signed_mass(-4.03), "-4.03 Da");
        assert_eq!(format_signed_mass(-2.015 * 0.0), "+0.00 Da");
    }

    #[test]
    fn test_row_columns() {
        let reports = calculate_batch(&["CaCCCx"], &[Ptm::Phosphorylation, Ptm::DisulfideBond]);
        let row = ResultRow::from(&reports[0]);

        // 4 * 121.2 + 89.1 - 4 * 18.015 + 79.97 - 2 * 2.015
        assert_eq!(row.sequence, "CaCCCx");
        assert_eq!(row.mass_da, 577.78);
        assert_eq!(row.mass_kda, 0.58);
        assert_eq!(row.composition, "C:4; A:1");
        assert_eq!(
            row.applied_ptms,
            "Phosphorylation x1 (+79.97 Da); Disulfide bond x2 (-4.03 Da)"
        );
        assert_eq!(row.invalid_characters, "X");
    }

    #[test]
    fn test_row_without_ptms_or_invalid() {
        let reports = calculate_batch(&["GG", "C"], &[Ptm::DisulfideBond]);
        let table = build_table(&reports);

        assert_eq!(table[0].applied_ptms, "None");
        assert_eq!(table[0].invalid_characters, "");
        assert_eq!(table[1].applied_ptms, "Disulfide bond x0 (+0.00 Da)");
    }
}
