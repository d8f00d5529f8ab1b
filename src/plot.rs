//! Profile figure rendering using plotters (SVG output)
//!
//! Uses SVG backend to avoid system font dependencies.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::profile::Profile;

/// Render one profile as a line plot: smoothed trace always, raw trace
/// optionally overlaid. Normalized profiles get the fixed [0, 1] y-range;
/// raw-scale profiles get a data-driven range.
pub fn render_profile(
    path: &Path,
    seq_id: &str,
    profile: &Profile,
    overlay_raw: bool,
    normalized: bool,
) -> Result<()> {
    // Convert path to SVG if it's PNG
    let svg_path = if path.extension().map(|e| e == "png").unwrap_or(false) {
        path.with_extension("svg")
    } else {
        path.to_path_buf()
    };

    let root = SVGBackend::new(&svg_path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    if profile.is_empty() {
        root.draw(&Text::new(
            "No profile data",
            (400, 250),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let n = profile.len();
    let (y_min, y_max) = if normalized {
        (0.0, 1.0)
    } else {
        data_range(profile, overlay_raw)
    };

    let x_max = (n as f64).max(2.0);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} - Hydrophobicity profile", seq_id),
            ("sans-serif", 20),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Residue number")
        .y_desc("Hydrophobicity")
        .draw()?;

    if overlay_raw {
        chart.draw_series(LineSeries::new(
            profile
                .raw
                .iter()
                .enumerate()
                .map(|(i, &v)| ((i + 1) as f64, v)),
            &RED,
        ))?;
    }

    chart.draw_series(LineSeries::new(
        profile
            .smoothed
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

fn data_range(profile: &Profile, include_raw: bool) -> (f64, f64) {
    let (mut min, mut max) = profile
        .smoothed
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });

    if include_raw {
        for &v in &profile.raw {
            min = min.min(v);
            max = max.max(v);
        }
    }

    let span = (max - min).max(1e-6);
    (min - 0.05 * span, max + 0.05 * span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_profile() -> Profile {
        Profile {
            raw: vec![0.1, 0.9, 0.4, 0.6, 0.2],
            smoothed: vec![0.5, 0.466667, 0.633333, 0.4, 0.4],
        }
    }

    #[test]
    fn test_renders_svg_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seq1.svg");
        render_profile(&path, "seq1", &sample_profile(), true, true).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"));
    }

    #[test]
    fn test_png_extension_becomes_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seq1.png");
        render_profile(&path, "seq1", &sample_profile(), false, false).unwrap();

        assert!(dir.path().join("seq1.svg").exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_profile_placeholder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let empty = Profile {
            raw: vec![],
            smoothed: vec![],
        };
        render_profile(&path, "empty", &empty, false, true).unwrap();
        assert!(path.exists());
    }
}
