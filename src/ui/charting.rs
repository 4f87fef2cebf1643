use focusboard::mock::FOCUS_SCORES;
use focusboard::signal::{RollingBuffer, Sample};

/// Fixed vertical range of the live trace, in µV
pub const SIGNAL_Y_BOUNDS: [f64; 2] = [-80.0, 80.0];

/// Seconds since the oldest retained sample, paired with the value
pub fn signal_points(samples: &RollingBuffer<Sample>) -> Vec<(f64, f64)> {
    let Some(origin) = samples.oldest().map(|s| s.time) else {
        return Vec::new();
    };
    samples
        .iter()
        .map(|s| ((s.time - origin) as f64 / 1000.0, s.value))
        .collect()
}

/// Width of the visible window in seconds, never below one
pub fn compute_x_bound(points: &[(f64, f64)]) -> f64 {
    points.last().map(|p| p.0).unwrap_or(0.0).max(1.0)
}

/// Clock labels for the oldest and newest sample
pub fn time_labels(samples: &RollingBuffer<Sample>) -> (String, String) {
    let first = samples.oldest().map(|s| s.timestamp.clone()).unwrap_or_default();
    let last = samples.latest().map(|s| s.timestamp.clone()).unwrap_or_default();
    (first, last)
}

/// Weekly focus scores as chart points, Monday at x=0
pub fn focus_score_points() -> Vec<(f64, f64)> {
    FOCUS_SCORES
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.score as f64))
        .collect()
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
