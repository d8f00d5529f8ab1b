/// Min-max rescale a sequence of scale values into [0, 1].
///
/// With `invert` set, the output is flipped (`1.0 - x`) so that scales
/// published on a hydrophilicity convention still end up with 1.0 as most
/// hydrophobic. When all input values are identical the divisor is zero and
/// every output is NaN; callers that care must check for non-finite results
/// (see `ScaleTable` which logs a warning for degenerate sources).
pub fn rescale(values: &[f64], invert: bool) -> Vec<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    values
        .iter()
        .map(|&v| {
            let scaled = (v - min) / (max - min);
            if invert {
                1.0 - scaled
            } else {
                scaled
            }
        })
        .collect()
}
