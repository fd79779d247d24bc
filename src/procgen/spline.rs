/// Catmull-Rom spline smoothing of the sharpened outline
use super::generator::TrackGenError;
use crate::data::Outline;
use crate::geometry::Point2D;

/// Minimum number of control points for a Catmull-Rom segment.
pub const MIN_KNOTS: usize = 4;

/// Evaluate a uniform Catmull-Rom spline through `values` at `k`.
///
/// `k` runs over [0, 1] across the whole sequence. When the first and last
/// values are equal the sequence is treated as a loop and neighbours wrap
/// around; otherwise the ends are clamped, and `k` outside [0, 1]
/// extrapolates by mirroring the end segment.
pub fn catmull_rom(values: &[f64], k: f64) -> f64 {
    match values.len() {
        0 => return 0.0,
        1 => return values[0],
        _ => {}
    }

    let m = values.len() - 1;
    let mut f = m as f64 * k;
    let mut i = f.floor();

    if values[0] == values[m] {
        if k < 0.0 {
            f = m as f64 * (1.0 + k);
            i = f.floor();
        }
        let i = (i.max(0.0) as usize).min(m);
        return segment(
            f - i as f64,
            values[(i + m - 1) % m],
            values[i],
            values[(i + 1) % m],
            values[(i + 2) % m],
        );
    }

    if k < 0.0 {
        return values[0] - (segment(-f, values[0], values[0], values[1], values[1]) - values[0]);
    }

    if k > 1.0 {
        return values[m]
            - (segment(f - m as f64, values[m], values[m], values[m - 1], values[m - 1]) - values[m]);
    }

    let i = (i as usize).min(m);
    segment(
        f - i as f64,
        values[i.saturating_sub(1)],
        values[i],
        values[(i + 1).min(m)],
        values[(i + 2).min(m)],
    )
}

/// Cubic Hermite form of one Catmull-Rom segment between `p1` and `p2`.
fn segment(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let v0 = (p2 - p0) * 0.5;
    let v1 = (p3 - p1) * 0.5;
    let t2 = t * t;
    let t3 = t * t2;

    (2.0 * p1 - 2.0 * p2 + v0 + v1) * t3 + (-3.0 * p1 + 3.0 * p2 - 2.0 * v0 - v1) * t2 + v0 * t + p1
}

/// Number of samples produced for a parameter step, endpoints included.
pub fn sample_count(step: f64) -> usize {
    (1.0 / step + 1e-9).floor() as usize + 1
}

/// Resample `control` into a smooth curve, one point per `step` of the spline
/// parameter over [0, 1].
///
/// x and y are interpolated independently. A closed control outline gives a
/// closed curve because both ends of the parameter range land on the shared
/// first/last control point.
pub fn smooth(control: &Outline, step: f64) -> Result<Outline, TrackGenError> {
    if control.len() < MIN_KNOTS {
        return Err(TrackGenError::TooFewKnots {
            knots: control.len(),
        });
    }

    let xs = control.xs();
    let ys = control.ys();

    let samples = sample_count(step);
    let last = samples - 1;
    let mut curve = Outline::with_capacity(samples);
    for n in 0..samples {
        // Pin the final sample so float accumulation cannot miss the seam
        let f = if n == last && (n as f64 * step - 1.0).abs() < 1e-9 {
            1.0
        } else {
            n as f64 * step
        };
        curve.push(Point2D::new(catmull_rom(&xs, f), catmull_rom(&ys, f)));
    }

    Ok(curve)
}
