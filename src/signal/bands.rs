use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BandKind {
    Delta,
    Theta,
    Alpha,
    Beta,
}

/// One sinusoidal component of the synthetic trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub kind: BandKind,
    /// Peak contribution in µV
    pub amplitude: f64,
    /// Angular rate applied to the millisecond timestamp
    pub rate: f64,
}

impl Band {
    pub const fn new(kind: BandKind, amplitude: f64, rate: f64) -> Self {
        Self {
            kind,
            amplitude,
            rate,
        }
    }

    pub fn at(&self, now_ms: i64) -> f64 {
        (now_ms as f64 * self.rate).sin() * self.amplitude
    }
}

/// Slowest to fastest, loosely following the delta/theta/alpha/beta ranges
pub const BANDS: [Band; 4] = [
    Band::new(BandKind::Delta, 30.0, 0.003),
    Band::new(BandKind::Theta, 20.0, 0.006),
    Band::new(BandKind::Alpha, 15.0, 0.01),
    Band::new(BandKind::Beta, 10.0, 0.025),
];

/// Half-width of the uniform noise added on top of the bands
pub const NOISE_SPAN: f64 = 2.5;

/// Sum of every band at `now_ms`, without noise
pub fn mix(bands: &[Band], now_ms: i64) -> f64 {
    bands.iter().map(|band| band.at(now_ms)).sum()
}

/// Largest magnitude the mix plus noise can reach
pub fn peak(bands: &[Band]) -> f64 {
    bands.iter().map(|band| band.amplitude).sum::<f64>() + NOISE_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_at_zero_is_zero() {
        assert_eq!(mix(&BANDS, 0), 0.0);
    }

    #[test]
    fn test_band_at_matches_formula() {
        let alpha = BANDS[2];
        assert_eq!(alpha.kind, BandKind::Alpha);

        let expected = (1234.0_f64 * 0.01).sin() * 15.0;
        assert!((alpha.at(1234) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_mix_stays_within_amplitude_sum() {
        for t in (0..200_000).step_by(37) {
            assert!(mix(&BANDS, t).abs() <= 75.0 + 1e-9);
        }
    }

    #[test]
    fn test_peak_fits_chart_domain() {
        assert_eq!(peak(&BANDS), 77.5);
        assert!(peak(&BANDS) < 80.0);
    }

    #[test]
    fn test_band_kind_display() {
        assert_eq!(BandKind::Delta.to_string(), "Delta");
        assert_eq!(BandKind::Beta.to_string(), "Beta");
    }
}
