//! The live components and the cadences that drive them.
//!
//! Each component owns its cadence. The signal cadence lives from `mount` to
//! `unmount`; the timer cadence only while the countdown is running. Dropping
//! the dashboard releases both.

use std::io;
use std::sync::mpsc::Sender;

use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::mock::Heatmap;
use crate::runtime::{AppEvent, Cadence, FixedTicker};
use crate::signal::{Metrics, SignalSimulator};
use crate::timer::{SessionTimer, TimerPhase};

/// Simulator plus the cadence feeding it
#[derive(Debug)]
pub struct LiveSignal {
    simulator: SignalSimulator,
    ticker: FixedTicker,
    cadence: Option<Cadence>,
}

impl LiveSignal {
    pub fn new(simulator: SignalSimulator, ticker: FixedTicker) -> Self {
        Self {
            simulator,
            ticker,
            cadence: None,
        }
    }

    pub fn mount(&mut self, tx: Sender<AppEvent>) -> io::Result<()> {
        if self.cadence.is_none() {
            self.cadence = Some(Cadence::start(
                "signal",
                &self.ticker,
                tx,
                AppEvent::SignalTick,
            )?);
        }
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.cadence = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.cadence.is_some()
    }

    pub fn on_tick(&mut self, now_ms: i64) -> Metrics {
        self.simulator.tick(now_ms)
    }

    pub fn simulator(&self) -> &SignalSimulator {
        &self.simulator
    }
}

/// Session timer plus the cadence that exists only while it runs
#[derive(Debug)]
pub struct FocusTimer {
    timer: SessionTimer,
    ticker: FixedTicker,
    cadence: Option<Cadence>,
    generation: u64,
    tx: Option<Sender<AppEvent>>,
}

impl FocusTimer {
    pub fn new(timer: SessionTimer, ticker: FixedTicker) -> Self {
        Self {
            timer,
            ticker,
            cadence: None,
            generation: 0,
            tx: None,
        }
    }

    pub fn mount(&mut self, tx: Sender<AppEvent>) {
        self.tx = Some(tx);
    }

    /// A running timer is paused; it has no tick source once unmounted.
    pub fn unmount(&mut self) {
        self.pause();
        self.cadence = None;
        self.tx = None;
    }

    /// Start/Pause. Returns whether the timer is running afterwards.
    pub fn toggle(&mut self) -> io::Result<bool> {
        if self.timer.is_running() {
            self.pause();
            return Ok(false);
        }
        self.start()
    }

    pub fn start(&mut self) -> io::Result<bool> {
        let Some(tx) = self.tx.clone() else {
            log::warn!("focus timer started before mount; ignoring");
            return Ok(false);
        };
        if !self.timer.start() {
            return Ok(self.timer.is_running());
        }

        self.generation += 1;
        match Cadence::start(
            "timer",
            &self.ticker,
            tx,
            AppEvent::TimerTick(self.generation),
        ) {
            Ok(cadence) => {
                self.cadence = Some(cadence);
                log::info!("focus timer running at {}", self.timer.display());
                Ok(true)
            }
            Err(e) => {
                self.timer.pause();
                Err(e)
            }
        }
    }

    pub fn pause(&mut self) {
        if self.timer.pause() {
            self.cadence = None;
            log::info!("focus timer paused at {}", self.timer.display());
        }
    }

    pub fn reset(&mut self) {
        self.cadence = None;
        self.timer.reset();
        log::info!("focus timer reset to {}", self.timer.display());
    }

    /// Ticks from a cadence that has since been released are ignored.
    pub fn on_tick(&mut self, generation: u64) -> TimerPhase {
        if self.cadence.is_none() || generation != self.generation {
            log::debug!(
                "dropping stale timer tick {generation} (current {})",
                self.generation
            );
            return self.timer.phase();
        }

        let phase = self.timer.tick();
        if phase == TimerPhase::Expired {
            self.cadence = None;
            log::info!("focus session complete");
        }
        phase
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn has_cadence(&self) -> bool {
        self.cadence.is_some()
    }
}

#[derive(Debug)]
pub struct Dashboard {
    pub signal: LiveSignal,
    pub focus: FocusTimer,
    pub heatmap: Heatmap,
}

impl Dashboard {
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        let (simulator, heatmap) = match seed {
            Some(seed) => (
                SignalSimulator::seeded(config.history, seed),
                Heatmap::random(&mut StdRng::seed_from_u64(seed.wrapping_add(1))),
            ),
            None => (
                SignalSimulator::new(config.history),
                Heatmap::random(&mut rand::thread_rng()),
            ),
        };

        Self {
            signal: LiveSignal::new(
                simulator,
                FixedTicker::from_millis(config.signal_interval_ms),
            ),
            focus: FocusTimer::new(
                SessionTimer::new(config.focus_secs()),
                FixedTicker::from_millis(config.timer_interval_ms),
            ),
            heatmap,
        }
    }

    /// Start the signal cadence and hand both components the event queue.
    pub fn mount(&mut self, tx: Sender<AppEvent>) -> io::Result<()> {
        self.focus.mount(tx.clone());
        self.signal.mount(tx)?;
        log::info!("dashboard mounted");
        Ok(())
    }

    pub fn unmount(&mut self) {
        if self.signal.is_mounted() || self.focus.has_cadence() {
            log::info!("dashboard unmounted");
        }
        self.signal.unmount();
        self.focus.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.signal.is_mounted()
    }

    /// Apply a cadence tick. Returns true when something visible changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        self.handle_at(event, Utc::now().timestamp_millis())
    }

    pub fn handle_at(&mut self, event: &AppEvent, now_ms: i64) -> bool {
        match event {
            AppEvent::SignalTick => {
                self.signal.on_tick(now_ms);
                true
            }
            AppEvent::TimerTick(generation) => {
                let before = self.focus.timer().phase();
                before != self.focus.on_tick(*generation)
            }
            AppEvent::Key(_) | AppEvent::Resize => false,
        }
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.unmount();
    }
}
