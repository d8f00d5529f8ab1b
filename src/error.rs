use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by scale loading and profile computation.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("unknown scale '{0}' (run `scales list` for available names)")]
    UnknownScale(String),

    #[error("malformed scale data in {source_name}: {reason}")]
    MalformedScaleData { source_name: String, reason: String },

    #[error("unknown residue '{residue}' at position {position}")]
    UnknownResidue { residue: char, position: usize },

    #[error("window width must be a positive odd integer, got {0}")]
    InvalidWindowWidth(usize),

    #[error("window width {window} does not fit a sequence of length {length}")]
    WindowTooWide { window: usize, length: usize },

    #[error("cannot profile an empty sequence")]
    EmptySequence,

    #[error("failed to read scale data from {}", path.display())]
    ScaleIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_culprit() {
        let err = ProfileError::UnknownResidue {
            residue: 'X',
            position: 12,
        };
        assert_eq!(err.to_string(), "unknown residue 'X' at position 12");

        let err = ProfileError::UnknownScale("Hoop".to_string());
        assert!(err.to_string().contains("'Hoop'"));

        let err = ProfileError::MalformedScaleData {
            source_name: "KYTJ820101.dat".to_string(),
            reason: "expected 20 values, found 19".to_string(),
        };
        assert!(err.to_string().contains("KYTJ820101.dat"));
        assert!(err.to_string().contains("found 19"));
    }
}
