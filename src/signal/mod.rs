//! Synthetic EEG-like trace: band mixing, bounded history and point metrics.

pub mod bands;
pub mod buffer;
pub mod simulator;

pub use bands::{Band, BandKind, BANDS};
pub use buffer::RollingBuffer;
pub use simulator::{Metrics, Quality, Sample, SignalSimulator, DEFAULT_HISTORY};
