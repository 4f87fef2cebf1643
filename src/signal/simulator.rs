use std::ops::RangeInclusive;

use chrono::{Local, TimeZone};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strum_macros::Display;

use crate::signal::bands::{self, Band, BANDS, NOISE_SPAN};
use crate::signal::buffer::RollingBuffer;

/// Number of samples kept for the live chart
pub const DEFAULT_HISTORY: usize = 100;
/// Reported dominant frequency range, in Hz
pub const FREQUENCY_RANGE: RangeInclusive<u8> = 5..=25;
pub const POOR_QUALITY_PROBABILITY: f64 = 0.1;

/// One synthesized point of the trace
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Epoch milliseconds
    pub time: i64,
    /// µV
    pub value: f64,
    /// Local wall clock `HH:MM:SS`, used for axis labels
    pub timestamp: String,
}

impl Sample {
    pub fn new(time: i64, value: f64) -> Self {
        Self {
            time,
            value,
            timestamp: format_clock(time),
        }
    }
}

pub fn format_clock(time_ms: i64) -> String {
    Local
        .timestamp_millis_opt(time_ms)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Quality {
    Good,
    Poor,
}

impl Quality {
    pub fn is_good(&self) -> bool {
        matches!(self, Quality::Good)
    }
}

/// Point metrics shown next to the live chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// µV, rounded magnitude of the latest sample
    pub amplitude: u32,
    /// Hz
    pub dominant_frequency: u8,
    pub quality: Quality,
}

pub fn amplitude_of(value: f64) -> u32 {
    value.abs().round() as u32
}

/// Dominant frequency and quality are drawn at random and carry no information
/// about the trace. Swap this out once a real spectral estimate exists.
fn placeholder_spectrum<R: Rng>(rng: &mut R) -> (u8, Quality) {
    let dominant_frequency = rng.gen_range(FREQUENCY_RANGE);
    let quality = if rng.gen_bool(POOR_QUALITY_PROBABILITY) {
        Quality::Poor
    } else {
        Quality::Good
    };
    (dominant_frequency, quality)
}

/// Additive multi-band synthesizer feeding a bounded history
#[derive(Debug)]
pub struct SignalSimulator {
    history: RollingBuffer<Sample>,
    metrics: Option<Metrics>,
    rng: StdRng,
    ticks: u64,
}

impl SignalSimulator {
    pub fn new(history: usize) -> Self {
        Self::with_rng(history, StdRng::from_entropy())
    }

    /// Deterministic noise and placeholder metrics
    pub fn seeded(history: usize, seed: u64) -> Self {
        Self::with_rng(history, StdRng::seed_from_u64(seed))
    }

    fn with_rng(history: usize, rng: StdRng) -> Self {
        Self {
            history: RollingBuffer::new(history),
            metrics: None,
            rng,
            ticks: 0,
        }
    }

    /// Synthesize the sample for `now_ms`, append it and refresh the metrics.
    pub fn tick(&mut self, now_ms: i64) -> Metrics {
        let noise = self.rng.gen_range(-NOISE_SPAN..NOISE_SPAN);
        let value = bands::mix(&BANDS, now_ms) + noise;
        self.record(now_ms, value)
    }

    fn record(&mut self, now_ms: i64, value: f64) -> Metrics {
        self.history.push(Sample::new(now_ms, value));
        self.ticks += 1;

        let (dominant_frequency, quality) = placeholder_spectrum(&mut self.rng);
        let metrics = Metrics {
            amplitude: amplitude_of(value),
            dominant_frequency,
            quality,
        };
        self.metrics = Some(metrics);

        log::trace!("signal tick {} value={:.2} {:?}", self.ticks, value, metrics);
        metrics
    }

    /// None until the first tick
    pub fn metrics(&self) -> Option<Metrics> {
        self.metrics
    }

    pub fn samples(&self) -> &RollingBuffer<Sample> {
        &self.history
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.history.latest()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn bands(&self) -> &'static [Band] {
        &BANDS
    }
}

impl Default for SignalSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}
