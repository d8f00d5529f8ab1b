use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sliding-window hydrophobicity profiling for protein sequences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Number of threads to use
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Path to log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute hydrophobicity profiles for sequences in FASTA files
    Profile(ProfileCommand),

    /// Inspect the hydrophobicity scale catalog
    Scales(ScalesCommand),
}

#[derive(Parser, Debug)]
pub struct ProfileCommand {
    /// Input FASTA files
    #[arg(required = true)]
    pub input_files: Vec<PathBuf>,

    /// Hydrophobicity scale to apply
    #[arg(short, long, default_value = "Kyte")]
    pub scale: String,

    /// Use raw scale values instead of min-max normalizing them to [0,1]
    #[arg(long = "no-normalize", action = ArgAction::SetFalse)]
    pub normalize: bool,

    /// Sliding window width (positive odd integer)
    #[arg(short, long, default_value = "7")]
    pub window: usize,

    /// Accept even window widths (treated as the next odd width)
    #[arg(long)]
    pub allow_even_window: bool,

    /// How to treat residues missing from the scale table
    #[arg(long, value_enum, default_value = "fail")]
    pub unknown_residue: ResiduePolicy,

    /// Directory of scale data files (defaults to the built-in catalog)
    #[arg(long)]
    pub scales_dir: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// Directory to write one SVG plot per sequence
    #[arg(short, long)]
    pub plot: Option<PathBuf>,

    /// Overlay the raw per-residue trace on the plot
    #[arg(long)]
    pub plot_raw: bool,
}

#[derive(Parser, Debug)]
pub struct ScalesCommand {
    #[command(subcommand)]
    pub command: ScalesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ScalesSubcommand {
    /// List the scales in the catalog
    List {
        /// Show the 20 per-residue values for each scale
        #[arg(long)]
        detailed: bool,
    },

    /// Show the per-residue values of one scale
    Show {
        /// Scale name (e.g. "Kyte")
        name: String,

        /// Show raw values instead of normalized ones
        #[arg(long = "no-normalize", action = ArgAction::SetFalse)]
        normalize: bool,

        /// Directory of scale data files (defaults to the built-in catalog)
        #[arg(long)]
        scales_dir: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ResiduePolicy {
    /// Abort on the first residue without a scale entry
    Fail,
    /// Substitute 0.0 and keep going
    Zero,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    Tsv,
    Json,
}

impl From<ResiduePolicy> for crate::profile::UnknownResiduePolicy {
    fn from(policy: ResiduePolicy) -> Self {
        match policy {
            ResiduePolicy::Fail => Self::Fail,
            ResiduePolicy::Zero => Self::SubstituteZero,
        }
    }
}

impl From<OutputFormat> for crate::io::writer::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
        }
    }
}
