use serde::Serialize;

/// How the computer treats a residue symbol that has no entry in the scale
/// table (ambiguity codes like X/B/Z, gap characters, anything non-standard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownResiduePolicy {
    /// Fail the whole computation, naming the residue and its position.
    Fail,
    /// Substitute 0.0 for the residue and log a warning with the count.
    SubstituteZero,
}

/// Per-residue hydrophobicity values for one sequence: the raw scale lookup
/// and its sliding-window mean, both of sequence length.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub raw: Vec<f64>,
    pub smoothed: Vec<f64>,
}

impl Profile {
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// A computed profile bundled with everything the writer and plot sink need
/// to label it.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    /// FASTA record identifier.
    pub id: String,
    /// The profiled sequence (uppercased).
    pub sequence: String,
    /// Catalog name of the scale applied.
    pub scale: String,
    /// AAindex accession of the scale.
    pub aaindex_id: String,
    pub normalized: bool,
    pub window: usize,
    pub profile: Profile,
}
