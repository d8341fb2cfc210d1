//! Molecular weights of amino acids
//!
//! Average molecular weights of the 20 standard amino acids in Daltons (Da), as
//! free amino acids. Water lost during peptide bond formation is subtracted by the
//! weight calculator, once per bond.

use std::collections::HashMap;

/// Mass of the water molecule released by every peptide bond (Da)
pub const PEPTIDE_BOND_WATER_LOSS: f64 = 18.015;

/// The standard residues and their average masses, in alphabetical order of name
pub const RESIDUE_MASSES: [(char, f64); 20] = [
    ('A', 89.1),  // Alanine
    ('R', 174.2), // Arginine
    ('N', 132.1), // Asparagine
    ('D', 133.1), // Aspartic acid
    ('C', 121.2), // Cysteine
    ('E', 147.1), // Glutamic acid
    ('Q', 146.2), // Glutamine
    ('G', 75.1),  // Glycine
    ('H', 155.2), // Histidine
    ('I', 131.2), // Isoleucine
    ('L', 131.2), // Leucine
    ('K', 146.2), // Lysine
    ('M', 149.2), // Methionine
    ('F', 165.2), // Phenylalanine
    ('P', 115.1), // Proline
    ('S', 105.1), // Serine
    ('T', 119.1), // Threonine
    ('W', 204.2), // Tryptophan
    ('Y', 181.2), // Tyrosine
    ('V', 117.1), // Valine
];

/// Get the molecular weight of an amino acid by its single-letter code
///
/// Only uppercase codes are recognised; callers normalise case first.
pub fn residue_mass(amino_acid: char) -> Option<f64> {
    let mass = match amino_acid {
        'A' => 89.1,
        'R' => 174.2,
        'N' => 132.1,
        'D' => 133.1,
        'C' => 121.2,
        'E' => 147.1,
        'Q' => 146.2,
        'G' => 75.1,
        'H' => 155.2,
        'I' => 131.2,
        'L' => 131.2,
        'K' => 146.2,
        'M' => 149.2,
        'F' => 165.2,
        'P' => 115.1,
        'S' => 105.1,
        'T' => 119.1,
        'W' => 204.2,
        'Y' => 181.2,
        'V' => 117.1,
        _ => return None,
    };

    Some(mass)
}

pub fn is_standard_residue(amino_acid: char) -> bool {
    residue_mass(amino_acid).is_some()
}

/// Get a HashMap of all amino acid molecular weights
pub fn all_residue_masses() -> HashMap<char, f64> {
    RESIDUE_MASSES.into_iter().collect()
}
