use std::fs;
use std::path::Path;

use log::warn;

use super::catalog::{self, CatalogEntry};
use super::rescale::rescale;
use crate::error::ProfileError;

/// The 20 standard amino acids, in the fixed order scale data files use.
pub const AMINO_ACIDS: [u8; 20] = *b"ACDEFGHIKLMNPQRSTVWY";

/// Index of a residue byte into [`AMINO_ACIDS`] order. `None` for anything
/// that is not one of the 20 standard one-letter codes.
pub(crate) fn residue_index(residue: u8) -> Option<usize> {
    match residue {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// An immutable per-residue hydrophobicity table for one catalog scale,
/// optionally min-max normalized. A given (name, normalize) pair always
/// yields the same table.
#[derive(Debug, Clone)]
pub struct ScaleTable {
    name: String,
    aaindex_id: String,
    normalized: bool,
    values: [f64; 20],
}

impl ScaleTable {
    /// Load a scale from the embedded catalog data.
    pub fn load(name: &str, normalize: bool) -> Result<Self, ProfileError> {
        let entry = catalog::find(name)
            .ok_or_else(|| ProfileError::UnknownScale(name.to_string()))?;
        Self::from_text(entry, entry.data, &entry.file_name(), normalize)
    }

    /// Load a scale from `<dir>/<ACCESSION>.dat` instead of the embedded
    /// data. File format is the same: 20 whitespace/tab-delimited decimals
    /// in [`AMINO_ACIDS`] order.
    pub fn load_from_dir(name: &str, normalize: bool, dir: &Path) -> Result<Self, ProfileError> {
        let entry = catalog::find(name)
            .ok_or_else(|| ProfileError::UnknownScale(name.to_string()))?;
        let path = dir.join(entry.file_name());
        let text = fs::read_to_string(&path).map_err(|source| ProfileError::ScaleIo {
            path: path.clone(),
            source,
        })?;
        Self::from_text(entry, &text, &path.display().to_string(), normalize)
    }

    fn from_text(
        entry: &CatalogEntry,
        text: &str,
        source_name: &str,
        normalize: bool,
    ) -> Result<Self, ProfileError> {
        let raw = parse_scale_values(text, source_name)?;

        let values = if normalize {
            let scaled = rescale(&raw, entry.inverted);
            if scaled.iter().any(|v| !v.is_finite()) {
                warn!(
                    "Scale {} is degenerate (min == max); normalized values are not finite",
                    entry.name
                );
            }
            let mut values = [0.0; 20];
            values.copy_from_slice(&scaled);
            values
        } else {
            let mut values = [0.0; 20];
            values.copy_from_slice(&raw);
            values
        };

        Ok(ScaleTable {
            name: entry.name.to_string(),
            aaindex_id: entry.aaindex_id.to_string(),
            normalized: normalize,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aaindex_id(&self) -> &str {
        &self.aaindex_id
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Value for a residue byte, or `None` if the residue is not one of the
    /// 20 standard codes. The caller decides how to treat the `None` case.
    pub fn get(&self, residue: u8) -> Option<f64> {
        residue_index(residue).map(|i| self.values[i])
    }

    /// All 20 values in [`AMINO_ACIDS`] order.
    pub fn values(&self) -> &[f64; 20] {
        &self.values
    }
}

/// Parse exactly 20 decimal values from a flat text resource.
fn parse_scale_values(text: &str, source_name: &str) -> Result<Vec<f64>, ProfileError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 20 {
        return Err(ProfileError::MalformedScaleData {
            source_name: source_name.to_string(),
            reason: format!("expected 20 values, found {}", fields.len()),
        });
    }

    let mut values = Vec::with_capacity(20);
    for (i, field) in fields.iter().enumerate() {
        let value: f64 = field.parse().map_err(|_| ProfileError::MalformedScaleData {
            source_name: source_name.to_string(),
            reason: format!("invalid value '{}' at field {}", field, i + 1),
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::catalog::CATALOG;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_raw_kyte_values() {
        let table = ScaleTable::load("Kyte", false).unwrap();
        assert_eq!(table.name(), "Kyte");
        assert_eq!(table.aaindex_id(), "KYTJ820101");
        assert!(!table.is_normalized());
        assert!((table.get(b'A').unwrap() - 1.8).abs() < 1e-12);
        assert!((table.get(b'I').unwrap() - 4.5).abs() < 1e-12);
        assert!((table.get(b'R').unwrap() - (-4.5)).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_kyte_spans_unit_interval() {
        let table = ScaleTable::load("Kyte", true).unwrap();
        // R is the Kyte-Doolittle minimum, I the maximum.
        assert!((table.get(b'R').unwrap() - 0.0).abs() < 1e-12);
        assert!((table.get(b'I').unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_inverted_scale_flips_extremes() {
        // Hopp-Woods is a hydrophilicity scale: its raw maximum (D/E/K/R at
        // 3.0) must land on 0.0 after inversion, its raw minimum (W at -3.4)
        // on 1.0.
        let table = ScaleTable::load("Hopp", true).unwrap();
        assert!((table.get(b'D').unwrap() - 0.0).abs() < 1e-12);
        assert!((table.get(b'W').unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_every_catalog_scale_loads() {
        for entry in &CATALOG {
            let raw = ScaleTable::load(entry.name, false).unwrap();
            assert_eq!(raw.values().len(), 20);

            let normalized = ScaleTable::load(entry.name, true).unwrap();
            for &aa in AMINO_ACIDS.iter() {
                let v = normalized.get(aa).unwrap();
                assert!(
                    (0.0..=1.0).contains(&v),
                    "scale {} residue {} normalized to {}",
                    entry.name,
                    aa as char,
                    v
                );
            }
        }
    }

    #[test]
    fn test_unknown_scale_name() {
        let err = ScaleTable::load("Doolittle", true).unwrap_err();
        assert!(matches!(err, ProfileError::UnknownScale(ref name) if name == "Doolittle"));
    }

    #[test]
    fn test_unknown_residue_lookup_is_none() {
        let table = ScaleTable::load("Kyte", false).unwrap();
        assert!(table.get(b'X').is_none());
        assert!(table.get(b'B').is_none());
        assert!(table.get(b'-').is_none());
        assert!(table.get(b'a').is_none()); // lookups are uppercase-only
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        let err = parse_scale_values("1.0 2.0 3.0", "short.dat").unwrap_err();
        match err {
            ProfileError::MalformedScaleData { source_name, reason } => {
                assert_eq!(source_name, "short.dat");
                assert_eq!(reason, "expected 20 values, found 3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_names_offending_field() {
        let mut fields: Vec<String> = (0..20).map(|i| format!("{}.0", i)).collect();
        fields[7] = "abc".to_string();
        let err = parse_scale_values(&fields.join("\t"), "bad.dat").unwrap_err();
        match err {
            ProfileError::MalformedScaleData { reason, .. } => {
                assert_eq!(reason, "invalid value 'abc' at field 8");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("KYTJ820101.dat");
        let mut file = File::create(&path).unwrap();
        // All alanine-ish values so the lookup is easy to spot.
        let line: Vec<String> = (0..20).map(|i| format!("{}.5", i)).collect();
        writeln!(file, "{}", line.join("\t")).unwrap();

        let table = ScaleTable::load_from_dir("Kyte", false, dir.path()).unwrap();
        assert!((table.get(b'A').unwrap() - 0.5).abs() < 1e-12);
        assert!((table.get(b'Y').unwrap() - 19.5).abs() < 1e-12);
    }

    #[test]
    fn test_load_from_missing_dir() {
        let dir = tempdir().unwrap();
        let err = ScaleTable::load_from_dir("Kyte", false, dir.path()).unwrap_err();
        assert!(matches!(err, ProfileError::ScaleIo { .. }));
    }

    #[test]
    fn test_same_inputs_same_table() {
        let a = ScaleTable::load("Eisenberg", true).unwrap();
        let b = ScaleTable::load("Eisenberg", true).unwrap();
        assert_eq!(a.values(), b.values());
    }
}
