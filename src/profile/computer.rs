use log::{debug, warn};

use super::types::{Profile, UnknownResiduePolicy};
use crate::error::ProfileError;
use crate::scale::ScaleTable;

/// Computes per-residue hydrophobicity profiles against one scale table.
///
/// The smoothed trace is the arithmetic mean over a centered window of
/// `window` residues. At the sequence edges the window clips asymmetrically:
/// near the start it keeps its full right extent (`i + half`) and clips only
/// the left; near the end it keeps its full left extent (`i - half`) and
/// clips only the right.
#[derive(Debug)]
pub struct ProfileComputer<'a> {
    scale: &'a ScaleTable,
    window: usize,
    policy: UnknownResiduePolicy,
}

impl<'a> ProfileComputer<'a> {
    /// Create a computer with a validated window width: positive and odd.
    pub fn new(
        scale: &'a ScaleTable,
        window: usize,
        policy: UnknownResiduePolicy,
    ) -> Result<Self, ProfileError> {
        if window == 0 || window % 2 == 0 {
            return Err(ProfileError::InvalidWindowWidth(window));
        }
        Ok(ProfileComputer {
            scale,
            window,
            policy,
        })
    }

    /// Create a computer that also accepts even window widths. An even width
    /// behaves exactly like the next odd width: the half-window is
    /// `window / 2` on both sides, so width 4 averages the same 5 residues
    /// width 5 does.
    pub fn permissive(
        scale: &'a ScaleTable,
        window: usize,
        policy: UnknownResiduePolicy,
    ) -> Result<Self, ProfileError> {
        if window == 0 {
            return Err(ProfileError::InvalidWindowWidth(window));
        }
        Ok(ProfileComputer {
            scale,
            window,
            policy,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Compute the raw and smoothed profile for one sequence.
    pub fn compute(&self, seq: &[u8]) -> Result<Profile, ProfileError> {
        if seq.is_empty() {
            return Err(ProfileError::EmptySequence);
        }

        let half = self.window / 2;
        if half * 2 > seq.len() {
            return Err(ProfileError::WindowTooWide {
                window: self.window,
                length: seq.len(),
            });
        }

        let raw = self.lookup_raw(seq)?;
        let smoothed = windowed_mean(&raw, half);

        Ok(Profile { raw, smoothed })
    }

    fn lookup_raw(&self, seq: &[u8]) -> Result<Vec<f64>, ProfileError> {
        let mut raw = Vec::with_capacity(seq.len());
        let mut substituted = 0usize;

        for (i, &residue) in seq.iter().enumerate() {
            match self.scale.get(residue) {
                Some(value) => raw.push(value),
                None => match self.policy {
                    UnknownResiduePolicy::Fail => {
                        return Err(ProfileError::UnknownResidue {
                            residue: residue as char,
                            position: i + 1,
                        });
                    }
                    UnknownResiduePolicy::SubstituteZero => {
                        debug!(
                            "Substituting 0.0 for unknown residue '{}' at position {}",
                            residue as char,
                            i + 1
                        );
                        raw.push(0.0);
                        substituted += 1;
                    }
                },
            }
        }

        if substituted > 0 {
            warn!(
                "Substituted 0.0 for {} unknown residues (scale {})",
                substituted,
                self.scale.name()
            );
        }

        Ok(raw)
    }
}

/// Mean of each centered window of `2 * half + 1` values, with the
/// asymmetric edge policy: left-edge windows span `[0, i + half]`,
/// right-edge windows span `[i - half, n - 1]`.
fn windowed_mean(raw: &[f64], half: usize) -> Vec<f64> {
    let n = raw.len();
    let mut smoothed = vec![0.0; n];

    for i in 0..n {
        let window = if i >= half && i + half < n {
            &raw[i - half..=i + half]
        } else if i < half {
            &raw[..=i + half]
        } else {
            &raw[i - half..]
        };
        smoothed[i] = mean(window);
    }

    smoothed
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
