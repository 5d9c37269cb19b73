/// Midplane stellar number density checkpoints: (cylindrical radius in ly, stars per ly³).
///
/// Values are anchored on star counts toward the galactic center (nuclear star
/// cluster and bar), the solar neighborhood (~0.004 stars/ly³ at 26,000 ly) and
/// halo star counts at large radii. Interpolation is linear in log density, so
/// the curve is continuous through every checkpoint. Beyond the last entry the
/// density is held flat; the edge taper of [`crate::DensityField`] brings it to zero.
///
/// This table is part of the addressing contract: it fixes expected chunk body
/// counts, so editing it re-addresses bodies.
pub const CALIBRATION_TABLE: [(f64, f64); 13] = [
    (0.0, 20.0),
    (500.0, 2.0),
    (1_500.0, 0.3),
    (3_000.0, 0.08),
    (6_000.0, 0.03),
    (10_000.0, 0.015),
    (18_000.0, 0.008),
    (26_000.0, 0.004),
    (35_000.0, 0.0018),
    (50_000.0, 0.0005),
    (65_000.0, 1e-4),
    (100_000.0, 1e-5),
    (150_000.0, 1e-6),
];

/// Calibrated midplane stars per cubic light year at cylindrical radius `r_ly`.
pub fn calibrated_stars_per_cubic_ly(r_ly: f64) -> f64 {
    let r = r_ly.max(0.0);
    let (first_r, first_density) = CALIBRATION_TABLE[0];
    if r <= first_r {
        return first_density;
    }

    for window in CALIBRATION_TABLE.windows(2) {
        let (r0, d0) = window[0];
        let (r1, d1) = window[1];
        if r <= r1 {
            let t = (r - r0) / (r1 - r0);
            return (d0.ln() + t * (d1.ln() - d0.ln())).exp();
        }
    }

    CALIBRATION_TABLE[CALIBRATION_TABLE.len() - 1].1
}
