use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use needletail::parse_fastx_file;
use log::{info, warn};

/// One parsed FASTA record: header identifier and uppercased residue bytes.
#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

/// Represents a FASTA sequence reader that can handle multiple files
pub struct FastaReader {
    files: Vec<PathBuf>,
}

impl FastaReader {
    /// Create a new FastaReader from a list of input files
    pub fn new<P: AsRef<Path>>(files: Vec<P>) -> Self {
        let files = files.into_iter()
            .map(|p| p.as_ref().to_owned())
            .collect();

        FastaReader {
            files
        }
    }

    /// Process each sequence in all input files
    pub fn process_all<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(&[u8], &str) -> Result<()>
    {
        for file in &self.files {
            self.process_file(file, &mut callback)
                .with_context(|| format!("Failed to process file: {}", file.display()))?;
        }
        Ok(())
    }

    /// Collect every record from all input files.
    pub fn read_all(&self) -> Result<Vec<FastaRecord>> {
        let mut records = Vec::new();
        self.process_all(|sequence, id| {
            records.push(FastaRecord {
                id: id.to_string(),
                sequence: sequence.to_vec(),
            });
            Ok(())
        })?;
        Ok(records)
    }

    /// Process a single FASTA file
    fn process_file<F>(&self, path: &Path, callback: &mut F) -> Result<()>
    where
        F: FnMut(&[u8], &str) -> Result<()>
    {
        info!("Processing file: {}", path.display());

        let mut reader = parse_fastx_file(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let mut num_sequences = 0;
        let mut num_empty = 0;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "Failed to parse sequence record")?;

            // Residue lookups are uppercase-only; fold the sequence here so
            // lowercase FASTA bodies are not reported as unknown residues.
            let sequence: Vec<u8> = record.seq().iter().map(|b| b.to_ascii_uppercase()).collect();
            let id = String::from_utf8_lossy(record.id()).into_owned();

            if sequence.is_empty() {
                num_empty += 1;
                continue;
            }

            callback(&sequence, &id)?;
            num_sequences += 1;
        }

        info!("Processed {} sequences from {}", num_sequences, path.display());
        if num_empty > 0 {
            warn!("Skipped {} empty sequence records", num_empty);
        }

        Ok(())
    }
}
