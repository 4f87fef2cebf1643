use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    SignalTick,
    /// Carries the generation of the cadence that produced it
    TimerTick(u64),
}

/// Source of application events (keyboard, resize, cadence ticks)
pub trait EventSource {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// The single queue every producer feeds and the UI thread drains
pub struct EventChannel {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl EventChannel {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Everything currently queued, without blocking
    pub fn drain(&self) -> Vec<AppEvent> {
        self.rx.try_iter().collect()
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for EventChannel {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Forward crossterm key and resize events into `tx`.
///
/// The reader blocks on the terminal, so it is detached rather than joined; it
/// exits on the first event after the receiving side is gone.
pub fn spawn_terminal_reader(tx: Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("terminal-reader".into())
        .spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) => AppEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    log::warn!("terminal reader stopped: {e}");
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        })?;
    Ok(())
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// An owned periodic task that sends one event per interval.
///
/// The worker runs until the handle is stopped or dropped; both paths
/// disconnect the stop channel and join the worker, so no tick is sent once
/// `stop` returns.
#[derive(Debug)]
pub struct Cadence {
    name: &'static str,
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Cadence {
    pub fn start<T: Ticker>(
        name: &'static str,
        ticker: &T,
        tx: Sender<AppEvent>,
        event: AppEvent,
    ) -> io::Result<Self> {
        let interval = ticker.interval();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let worker = thread::Builder::new()
            .name(format!("cadence-{name}"))
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.send(event.clone()).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        log::debug!("cadence {name} started every {interval:?}");
        Ok(Self {
            name,
            stop: Some(stop_tx),
            worker: Some(worker),
        })
    }

    pub fn is_active(&self) -> bool {
        self.worker.is_some()
    }

    /// Cancel the worker and wait for it to exit. Idempotent.
    pub fn stop(&mut self) {
        drop(self.stop.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("cadence {} worker panicked", self.name);
            }
            log::debug!("cadence {} stopped", self.name);
        }
    }
}

impl Drop for Cadence {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Runner that hands the application one event at a time
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to the poll interval; None when nothing arrived
    pub fn step(&self) -> Option<AppEvent> {
        self.event_source.recv_timeout(self.ticker.interval()).ok()
    }
}
