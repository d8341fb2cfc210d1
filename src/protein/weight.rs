//! Protein molecular weight calculation
//!
//! Turns a raw sequence into a validated residue composition, a total mass
//! corrected for peptide bond water loss, and the modifications applied to it.

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use log::{debug, trace};

use super::molecular_weights::{residue_mass, PEPTIDE_BOND_WATER_LOSS};
use super::ptm::{AppliedPtm, Ptm};

/// Residue counts of a sequence, iterated in order of first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition(IndexMap<char, usize>);

impl Composition {
    fn add(&mut self, residue: char) {
        *self.0.entry(residue).or_insert(0) += 1;
    }

    pub fn count(&self, residue: char) -> usize {
        self.0.get(&residue).copied().unwrap_or(0)
    }

    pub fn contains(&self, residue: char) -> bool {
        self.0.contains_key(&residue)
    }

    /// Total number of valid residues
    pub fn residue_count(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().map(|(&residue, &count)| (residue, count))
    }
}

/// Formats as `A:2; R:1`
impl Display for Composition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (residue, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{residue}:{count}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Total mass in Da, unrounded
    pub mass: f64,
    pub composition: Composition,
    /// Rejected characters in sequence order, duplicates kept
    pub invalid: Vec<char>,
    pub applied_ptms: Vec<AppliedPtm>,
}

impl CalculationResult {
    pub fn mass_kda(&self) -> f64 {
        self.mass / 1000.0
    }
}

/// A sequence as entered together with its calculation
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceReport {
    pub sequence: String,
    pub result: CalculationResult,
}

/// Calculate the molecular weight of a protein sequence
///
/// Lowercase letters are accepted. Characters that are not one of the 20
/// standard residue codes are reported in `invalid` and contribute nothing to the
/// mass. Modifications are applied in the order given; a disulfide bond is
/// applied `floor(C / 2)` times, and skipped entirely when there is no cysteine.
pub fn calculate_weight(sequence: &str, ptms: &[Ptm]) -> CalculationResult {
    let mut composition = Composition::default();
    let mut invalid = Vec::new();
    let mut mass = 0.0;

    for residue in sequence.to_uppercase().chars() {
        match residue_mass(residue) {
            Some(residue_da) => {
                mass += residue_da;
                composition.add(residue);
            }
            None => invalid.push(residue),
        }
    }

    let valid_residues = composition.residue_count();
    if valid_residues > 1 {
        mass -= (valid_residues - 1) as f64 * PEPTIDE_BOND_WATER_LOSS;
    }

    let mut applied_ptms = Vec::with_capacity(ptms.len());
    for &ptm in ptms {
        let multiplicity = if ptm.is_per_bond() {
            if !composition.contains('C') {
                trace!("Skipping {ptm}: no cysteine present");
                continue;
            }
            composition.count('C') / 2
        } else {
            1
        };

        let applied = AppliedPtm { ptm, multiplicity };
        mass += applied.delta();
        applied_ptms.push(applied);
    }

    debug!(
        "Calculated {mass:.4} Da for {valid_residues} residues ({} invalid, {} PTMs)",
        invalid.len(),
        applied_ptms.len()
    );

    CalculationResult {
        mass,
        composition,
        invalid,
        applied_ptms,
    }
}

/// Run the calculator once per sequence, keeping input order
pub fn calculate_batch<S: AsRef<str>>(sequences: &[S], ptms: &[Ptm]) -> Vec<SequenceReport> {
    sequences
        .iter()
        .map(|sequence| SequenceReport {
            sequence: sequence.as_ref().to_owned(),
            result: calculate_weight(sequence.as_ref(), ptms),
        })
        .collect()
}
