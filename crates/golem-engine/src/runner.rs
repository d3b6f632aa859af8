//! Background auto-tick scheduler.
//!
//! [`Runner`] moves a [`SimulationEngine`] onto a dedicated thread that
//! owns it exclusively. Callers talk to it through a bounded crossbeam
//! channel; each request carries its own reply channel. While started,
//! the thread ticks once per `tick_interval` between requests.
//!
//! ```text
//! Caller thread                      Tick thread
//!     |                                  |
//!     |--Control::Start----------------->| engine.set_running(true)
//!     |   [ctl_tx: bounded(capacity)]    | recv_deadline(next_due)
//!     |                                  |   timeout -> engine.tick()
//!     |--Control::Observe--------------->|   message -> handle
//!     |<--Observation via reply_tx-------|
//!     |                                  |
//!     |  drop ctl_tx (shutdown)          | Disconnected -> exit
//!     |<--JoinHandle<SimulationEngine>---|
//! ```

use std::fmt;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError};
use golem_core::EngineError;

use crate::config::{ConfigError, RunnerConfig};
use crate::engine::{Observation, SimulationEngine, TickReport};

// ── Error types ──────────────────────────────────────────────────

/// Errors from [`Runner`] requests.
#[derive(Debug, PartialEq)]
pub enum RunnerError {
    /// The engine rejected the request.
    Engine(EngineError),
    /// The runner configuration is invalid.
    Config(ConfigError),
    /// The control channel is full (back-pressure).
    ChannelFull,
    /// The tick thread has shut down.
    Shutdown,
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// OS error description.
        reason: String,
    },
    /// The tick thread panicked, taking the engine with it.
    EngineLost,
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ChannelFull => write!(f, "control channel full"),
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::EngineLost => write!(f, "tick thread panicked; engine lost"),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for RunnerError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<ConfigError> for RunnerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── Control messages ─────────────────────────────────────────────

type Reply<T> = Sender<Result<T, EngineError>>;

enum Control {
    Initialize {
        size: i64,
        pattern: String,
        reply: Reply<()>,
    },
    Toggle {
        row: i32,
        col: i32,
        reply: Reply<bool>,
    },
    Tick {
        reply: Reply<TickReport>,
    },
    SetRunning {
        running: bool,
        reply: Reply<()>,
    },
    Reset {
        reply: Reply<()>,
    },
    Observe {
        reply: Sender<Observation>,
    },
}

// ── Tick thread ──────────────────────────────────────────────────

struct TickThread {
    engine: SimulationEngine,
    ctl_rx: Receiver<Control>,
    interval: Duration,
    next_due: Instant,
}

impl TickThread {
    /// Main loop. Runs until every sender is dropped, then hands the
    /// engine back through the join handle.
    fn run(mut self) -> SimulationEngine {
        loop {
            let received = if self.engine.is_running() {
                self.ctl_rx.recv_deadline(self.next_due)
            } else {
                self.ctl_rx
                    .recv()
                    .map_err(|_| RecvTimeoutError::Disconnected)
            };
            match received {
                Ok(msg) => self.handle(msg),
                Err(RecvTimeoutError::Timeout) => self.auto_tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        log::debug!("tick thread exiting at cycle {}", self.engine.total_cycles());
        self.engine
    }

    fn auto_tick(&mut self) {
        if let Err(e) = self.engine.tick() {
            log::warn!("auto-tick failed: {e}");
            return;
        }
        self.next_due += self.interval;
        let now = Instant::now();
        if self.next_due < now {
            // Fell behind; don't try to catch up with a burst.
            self.next_due = now + self.interval;
        }
    }

    fn handle(&mut self, msg: Control) {
        // A dropped reply receiver means the caller stopped waiting;
        // the request has still been applied.
        match msg {
            Control::Initialize {
                size,
                pattern,
                reply,
            } => {
                let _ = reply.send(self.engine.initialize(size, &pattern));
            }
            Control::Toggle { row, col, reply } => {
                let _ = reply.send(self.engine.toggle_cell(row, col));
            }
            Control::Tick { reply } => {
                let _ = reply.send(self.engine.tick());
            }
            Control::SetRunning { running, reply } => {
                let result = self.engine.set_running(running);
                if result.is_ok() && running {
                    self.next_due = Instant::now() + self.interval;
                }
                let _ = reply.send(result);
            }
            Control::Reset { reply } => {
                self.engine.reset();
                let _ = reply.send(Ok(()));
            }
            Control::Observe { reply } => {
                let _ = reply.send(self.engine.state().to_observation());
            }
        }
    }
}

// ── Runner ───────────────────────────────────────────────────────

/// Handle to an engine running on its own tick thread.
///
/// Dropping the handle stops the thread and discards the engine; use
/// [`shutdown()`](Runner::shutdown) to get the engine back.
pub struct Runner {
    ctl_tx: Option<Sender<Control>>,
    tick_thread: Option<JoinHandle<SimulationEngine>>,
}

impl Runner {
    /// Move `engine` onto a new tick thread.
    pub fn spawn(engine: SimulationEngine, config: RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let (ctl_tx, ctl_rx) = crossbeam_channel::bounded(config.control_capacity);
        let state = TickThread {
            engine,
            ctl_rx,
            interval: config.tick_interval,
            next_due: Instant::now() + config.tick_interval,
        };
        let tick_thread = thread::Builder::new()
            .name("golem-tick".into())
            .spawn(move || state.run())
            .map_err(|e| RunnerError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;
        log::debug!(
            "runner started, tick interval {:?}",
            config.tick_interval
        );
        Ok(Self {
            ctl_tx: Some(ctl_tx),
            tick_thread: Some(tick_thread),
        })
    }

    fn request<T>(
        &self,
        make: impl FnOnce(Sender<T>) -> Control,
    ) -> Result<T, RunnerError> {
        let tx = self.ctl_tx.as_ref().ok_or(RunnerError::Shutdown)?;
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        match tx.try_send(make(reply_tx)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                log::warn!("control channel full, request rejected");
                return Err(RunnerError::ChannelFull);
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("tick thread gone, request rejected");
                return Err(RunnerError::Shutdown);
            }
        }
        reply_rx.recv().map_err(|_| RunnerError::Shutdown)
    }

    /// Initialize (or re-initialize) the engine.
    pub fn initialize(&self, size: i64, pattern: &str) -> Result<(), RunnerError> {
        let pattern = pattern.to_string();
        Ok(self.request(|reply| Control::Initialize {
            size,
            pattern,
            reply,
        })??)
    }

    /// Flip one cell; returns its new state.
    pub fn toggle_cell(&self, row: i32, col: i32) -> Result<bool, RunnerError> {
        Ok(self.request(|reply| Control::Toggle { row, col, reply })??)
    }

    /// Advance one generation immediately, whether or not started.
    pub fn tick(&self) -> Result<TickReport, RunnerError> {
        Ok(self.request(|reply| Control::Tick { reply })??)
    }

    /// Begin ticking once per interval.
    pub fn start(&self) -> Result<(), RunnerError> {
        Ok(self.request(|reply| Control::SetRunning {
            running: true,
            reply,
        })??)
    }

    /// Stop automatic ticking.
    pub fn pause(&self) -> Result<(), RunnerError> {
        Ok(self.request(|reply| Control::SetRunning {
            running: false,
            reply,
        })??)
    }

    /// Discard the grid; automatic ticking stops with it.
    pub fn reset(&self) -> Result<(), RunnerError> {
        Ok(self.request(|reply| Control::Reset { reply })??)
    }

    /// Owned copy of the engine state.
    pub fn observe(&self) -> Result<Observation, RunnerError> {
        self.request(|reply| Control::Observe { reply })
    }

    /// Stop the tick thread and recover the engine.
    pub fn shutdown(mut self) -> Result<SimulationEngine, RunnerError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<SimulationEngine, RunnerError> {
        // Dropping the only sender disconnects the channel; the thread
        // drains what is queued and exits.
        self.ctl_tx.take();
        let handle = self.tick_thread.take().ok_or(RunnerError::Shutdown)?;
        handle.join().map_err(|_| RunnerError::EngineLost)
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            if let Err(e) = self.stop() {
                log::warn!("runner drop: {e}");
            }
        }
    }
}

impl fmt::Debug for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("alive", &self.tick_thread.is_some())
            .finish()
    }
}
