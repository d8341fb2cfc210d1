//! Post-translational modifications and their mass deltas

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ProtwtError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ptm {
    Phosphorylation,
    Acetylation,
    Methylation,
    Ubiquitination,
    Glycosylation,
    /// Applied once per pair of cysteines rather than once per sequence
    DisulfideBond,
}

impl Ptm {
    pub const ALL: [Ptm; 6] = [
        Ptm::Phosphorylation,
        Ptm::Acetylation,
        Ptm::Methylation,
        Ptm::Ubiquitination,
        Ptm::Glycosylation,
        Ptm::DisulfideBond,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Ptm::Phosphorylation => "Phosphorylation",
            Ptm::Acetylation => "Acetylation",
            Ptm::Methylation => "Methylation",
            Ptm::Ubiquitination => "Ubiquitination",
            Ptm::Glycosylation => "Glycosylation",
            Ptm::DisulfideBond => "Disulfide bond",
        }
    }

    /// Mass delta (Da) for a single application of this modification
    pub fn delta(self) -> f64 {
        match self {
            Ptm::Phosphorylation => 79.97,
            Ptm::Acetylation => 42.01,
            Ptm::Methylation => 14.02,
            Ptm::Ubiquitination => 8564.8,
            Ptm::Glycosylation => 203.1,
            Ptm::DisulfideBond => -2.015,
        }
    }

    pub fn is_per_bond(self) -> bool {
        self == Ptm::DisulfideBond
    }
}

impl Display for Ptm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ptm {
    type Err = ProtwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Ptm::ALL
            .into_iter()
            .find(|ptm| ptm.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ProtwtError::UnknownPtm {
                name: wanted.to_owned(),
                expected: Ptm::ALL.map(Ptm::name).join(", "),
            })
    }
}

/// Drops repeated modifications, keeping the first occurrence of each
pub fn dedup_ptms(ptms: impl IntoIterator<Item = Ptm>) -> Vec<Ptm> {
    let mut unique = Vec::new();
    for ptm in ptms {
        if !unique.contains(&ptm) {
            unique.push(ptm);
        }
    }
    unique
}

/// A modification as it was actually applied to one sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedPtm {
    pub ptm: Ptm,
    pub multiplicity: usize,
}

impl AppliedPtm {
    pub fn delta(&self) -> f64 {
        self.ptm.delta() * self.multiplicity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("Phosphorylation".parse::<Ptm>().unwrap(), Ptm::Phosphorylation);
        assert_eq!("disulfide BOND".parse::<Ptm>().unwrap(), Ptm::DisulfideBond);
        assert_eq!(" Methylation ".parse::<Ptm>().unwrap(), Ptm::Methylation);
    }

    #[test]
    fn test_unknown_name() {
        let err = "Sumoylation".parse::<Ptm>().unwrap_err();
        assert!(matches!(err, ProtwtError::UnknownPtm { ref name, .. } if name == "Sumoylation"));
        assert!(err.to_string().contains("Disulfide bond"));
    }

    #[test]
    fn test_names_round_trip() {
        for ptm in Ptm::ALL {
            assert_eq!(ptm.name().parse::<Ptm>().unwrap(), ptm);
            assert_eq!(ptm.to_string(), ptm.name());
        }
    }

    #[test]
    fn test_only_disulfide_is_per_bond() {
        let per_bond: Vec<_> = Ptm::ALL.into_iter().filter(|p| p.is_per_bond()).collect();
        assert_eq!(per_bond, vec![Ptm::DisulfideBond]);
        assert!(Ptm::DisulfideBond.delta() < 0.0);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let ptms = dedup_ptms([
            Ptm::Methylation,
            Ptm::DisulfideBond,
            Ptm::Methylation,
            Ptm::Acetylation,
            Ptm::DisulfideBond,
        ]);
        assert_eq!(
            ptms,
            vec![Ptm::Methylation, Ptm::DisulfideBond, Ptm::Acetylation]
        );
    }

    #[test]
    fn test_applied_delta_scales_with_multiplicity() {
        let bonds = AppliedPtm { ptm: Ptm::DisulfideBond, multiplicity: 2 };
        assert!((bonds.delta() - (-4.03)).abs() < 1e-9);

        let none = AppliedPtm { ptm: Ptm::DisulfideBond, multiplicity: 0 };
        assert_eq!(none.delta(), 0.0);
    }
}
