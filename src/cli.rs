//! Command line configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::protein::{dedup_ptms, Ptm};
use crate::report::DEFAULT_EXPORT_FILE;
use crate::sequence::InputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatChoice {
    /// FASTA for .fasta/.fa/.faa files, one sequence per line otherwise
    #[default]
    Auto,
    Plain,
    Fasta,
}

impl FormatChoice {
    pub fn input_format(self) -> Option<InputFormat> {
        match self {
            FormatChoice::Auto => None,
            FormatChoice::Plain => Some(InputFormat::Plain),
            FormatChoice::Fasta => Some(InputFormat::Tagged),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "protwt", version)]
#[command(about = "Protein molecular weight calculator with PTM support", long_about = None)]
pub struct Cli {
    /// Sequence file (plain text or FASTA)
    pub file: Option<PathBuf>,

    /// Protein sequence in one-letter code, used when no file is given
    #[arg(short, long)]
    pub sequence: Option<String>,

    /// Post-translational modification to apply (repeatable)
    #[arg(short, long = "ptm", value_name = "NAME")]
    pub ptms: Vec<Ptm>,

    /// How to read FILE
    #[arg(short, long, value_enum, default_value_t = FormatChoice::Auto)]
    pub format: FormatChoice,

    /// Where to write the CSV results
    #[arg(short = 'o', long, value_name = "PATH", env = "PROTWT_EXPORT")]
    pub export: Option<PathBuf>,

    /// Print results and exit instead of starting the interactive interface
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Requested modifications in order, without repeats
    pub fn selected_ptms(&self) -> Vec<Ptm> {
        dedup_ptms(self.ptms.iter().copied())
    }

    pub fn export_path(&self) -> PathBuf {
        self.export
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["protwt"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.sequence.is_none());
        assert!(cli.selected_ptms().is_empty());
        assert_eq!(cli.format, FormatChoice::Auto);
        assert!(!cli.batch);
    }

    #[test]
    fn test_full_command_line() {
        let cli = Cli::try_parse_from([
            "protwt",
            "proteins.txt",
            "--ptm",
            "disulfide bond",
            "-p",
            "Acetylation",
            "-p",
            "Disulfide bond",
            "--format",
            "fasta",
            "-o",
            "out.csv",
            "--batch",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("proteins.txt")));
        assert_eq!(cli.selected_ptms(), vec![Ptm::DisulfideBond, Ptm::Acetylation]);
        assert_eq!(cli.format.input_format(), Some(InputFormat::Tagged));
        assert_eq!(cli.export_path(), PathBuf::from("out.csv"));
        assert!(cli.batch);
    }

    #[test]
    fn test_manual_sequence() {
        let cli = Cli::try_parse_from(["protwt", "-s", "ARN"]).unwrap();
        assert_eq!(cli.sequence.as_deref(), Some("ARN"));
        assert_eq!(FormatChoice::Plain.input_format(), Some(InputFormat::Plain));
        assert_eq!(FormatChoice::Auto.input_format(), None);
    }

    #[test]
    fn test_unknown_ptm_rejected() {
        assert!(Cli::try_parse_from(["protwt", "--ptm", "Sumoylation"]).is_err());
    }
}
