//! Pattern Engine - background worker running one pattern at a time
//!
//! The `PatternEngine` is the caller-side handle. It:
//! - Spawns a single dedicated worker thread that owns the strip
//! - Forwards pattern assignments and start/stop/terminate as commands
//! - Exposes the worker state through [`EngineStatus`]
//!
//! The worker is the only consumer of the command channel. It drains pending
//! commands before every update and also checks the stop and terminate
//! requests recorded in [`EngineStatus`], so a stop is observed at most one
//! `update` call after it was issued, even when its command was dropped
//! because the channel stayed full. Dynamic patterns are paced by the frame interval
//! while the worker keeps listening for commands.

use std::{
    io,
    sync::Arc,
    thread::{self, JoinHandle},
};

use embassy_futures::select::{Either, select};
use embassy_sync::channel::TrySendError;
use embassy_time::{Duration, Timer, with_timeout};
use futures::executor::block_on;
use log::{debug, error, trace, warn};

use crate::{
    command::{Command, CommandChannel},
    driver::LedStrip,
    pattern::Pattern,
    state::{EngineStatus, PatternState},
};

/// Default frames per second for dynamic patterns
const DEFAULT_FPS: u64 = 60;

/// How long a caller waits for room in a full command channel
const DISPATCH_TIMEOUT: Duration = Duration::from_secs(1);

const WORKER_THREAD_NAME: &str = "dotstar-pattern";

/// Configuration for the worker loop
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Minimum time between two updates of a dynamic pattern
    pub frame_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(1000 / DEFAULT_FPS),
        }
    }
}

impl EngineConfig {
    /// Pace dynamic patterns at `fps` frames per second
    ///
    /// Zero disables pacing: updates run back to back.
    pub fn with_fps(fps: u32) -> Self {
        let frame_interval = if fps == 0 {
            Duration::from_millis(0)
        } else {
            Duration::from_micros(1_000_000 / u64::from(fps))
        };
        Self { frame_interval }
    }
}

/// Caller-side handle of the pattern worker
///
/// Commands never block the caller except while the command channel is full,
/// which lasts at most one `update` of the running pattern.
pub struct PatternEngine<D: LedStrip + Send + 'static> {
    commands: Arc<CommandChannel<D>>,
    status: Arc<EngineStatus>,
    worker: Option<JoinHandle<D>>,
    terminated: bool,
}

impl<D: LedStrip + Send + 'static> PatternEngine<D> {
    /// Spawn the worker thread with the default configuration
    ///
    /// The strip moves into the worker; get it back with [`join`](Self::join).
    pub fn spawn(strip: D) -> io::Result<Self> {
        Self::spawn_with_config(strip, EngineConfig::default())
    }

    /// Spawn the worker thread
    pub fn spawn_with_config(strip: D, config: EngineConfig) -> io::Result<Self> {
        let commands = Arc::new(CommandChannel::new());
        let status = Arc::new(EngineStatus::new());
        let worker = Worker {
            strip,
            commands: Arc::clone(&commands),
            status: Arc::clone(&status),
            config,
            staged: None,
            active: None,
            running: false,
            stops_seen: 0,
        };

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || block_on(worker.run()))?;
        debug!("pattern engine: worker started");

        Ok(Self {
            commands,
            status,
            worker: Some(handle),
            terminated: false,
        })
    }

    /// Stage a pattern; it takes effect on the next [`start_pattern`](Self::start_pattern)
    pub fn set_pattern<P: Pattern<D> + 'static>(&self, pattern: P) {
        self.set_boxed_pattern(Box::new(pattern));
    }

    /// Stage an already boxed pattern
    pub fn set_boxed_pattern(&self, pattern: Box<dyn Pattern<D>>) {
        self.dispatch(Command::SetPattern(pattern));
    }

    /// Stop whatever runs, adopt the staged pattern and run it
    ///
    /// Without a newly staged pattern the active one is started again.
    pub fn start_pattern(&self) {
        self.dispatch(Command::Start {
            stops_seen: self.status.stop_requests(),
        });
    }

    /// Ask the worker to stop after the update in progress
    pub fn stop_pattern(&self) {
        if self.terminated {
            return;
        }
        self.status.request_stop();
        self.dispatch(Command::Stop);
    }

    /// Forward an external measurement to the staged and active patterns
    pub fn set_measured_value(&self, measurement: f64) {
        self.dispatch(Command::SetMeasuredValue(measurement));
    }

    /// Stop the worker for good
    ///
    /// Every later command is ignored; a terminated engine cannot be restarted.
    pub fn terminate(&mut self) {
        if self.terminated {
            return;
        }
        // Mark first: the worker honors the flag even if the command is dropped.
        self.status.terminate();
        self.dispatch(Command::Terminate);
        self.terminated = true;
        debug!("pattern engine: terminated");
    }

    /// Terminate and wait for the worker, handing back the strip
    ///
    /// Returns `None` if the worker panicked.
    pub fn join(mut self) -> Option<D> {
        self.terminate();
        let handle = self.worker.take()?;
        match handle.join() {
            Ok(strip) => Some(strip),
            Err(_) => {
                error!("pattern engine: worker panicked");
                None
            }
        }
    }

    /// Current worker state
    pub fn state(&self) -> PatternState {
        self.status.state()
    }

    /// Shared status for observation from other threads
    pub fn status(&self) -> Arc<EngineStatus> {
        Arc::clone(&self.status)
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    fn dispatch(&self, command: Command<D>) {
        if self.terminated {
            trace!("pattern engine: ignoring {} after terminate", command.name());
            return;
        }
        if self.worker.as_ref().is_none_or(JoinHandle::is_finished) {
            warn!("pattern engine: worker is gone, dropping {}", command.name());
            return;
        }

        if let Err(TrySendError::Full(command)) = self.commands.try_send(command) {
            let name = command.name();
            let send = with_timeout(DISPATCH_TIMEOUT, self.commands.send(command));
            if block_on(send).is_err() {
                warn!("pattern engine: worker did not accept {name} in time, dropped");
            }
        }
    }
}

impl<D: LedStrip + Send + 'static> Drop for PatternEngine<D> {
    fn drop(&mut self) {
        self.terminate();
    }
}

/// Whether the worker keeps serving commands
enum Flow {
    Continue,
    Exit,
}

/// Worker side, owned by the background thread
struct Worker<D: LedStrip> {
    strip: D,
    commands: Arc<CommandChannel<D>>,
    status: Arc<EngineStatus>,
    config: EngineConfig,
    /// Pattern waiting for the next start
    staged: Option<Box<dyn Pattern<D>>>,
    /// Pattern adopted by the last start
    active: Option<Box<dyn Pattern<D>>>,
    running: bool,
    /// Stop request count captured by the last start
    stops_seen: u32,
}

impl<D: LedStrip> Worker<D> {
    async fn run(mut self) -> D {
        loop {
            while let Ok(command) = self.commands.try_receive() {
                if let Flow::Exit = self.apply(command) {
                    return self.strip;
                }
            }

            if self.status.is_terminated() {
                debug!("pattern engine: worker exiting on terminate request");
                return self.strip;
            }
            if self.running && self.status.stop_requests() != self.stops_seen {
                debug!("pattern engine: stop request observed");
                self.finish_run();
            }

            if !self.running {
                let command = self.commands.receive().await;
                if let Flow::Exit = self.apply(command) {
                    return self.strip;
                }
                continue;
            }

            self.cycle();

            if self.running {
                let pacing = Timer::after(self.config.frame_interval);
                if let Either::First(command) = select(self.commands.receive(), pacing).await {
                    if let Flow::Exit = self.apply(command) {
                        return self.strip;
                    }
                }
            }
        }
    }

    fn apply(&mut self, command: Command<D>) -> Flow {
        trace!("pattern engine: received {}", command.name());
        match command {
            Command::SetPattern(pattern) => {
                self.staged = Some(pattern);
            }
            Command::Start { stops_seen } => {
                self.stops_seen = stops_seen;
                if let Some(mut pattern) = self.staged.take() {
                    pattern.reset();
                    self.active = Some(pattern);
                }
                if self.active.is_some() {
                    self.running = true;
                    self.status.set_state(PatternState::Running);
                } else {
                    debug!("pattern engine: start without a pattern");
                    self.finish_run();
                }
            }
            Command::Stop => {
                self.finish_run();
            }
            Command::SetMeasuredValue(measurement) => {
                for pattern in [self.staged.as_mut(), self.active.as_mut()]
                    .into_iter()
                    .flatten()
                {
                    pattern.set_measured_value(measurement);
                }
            }
            Command::Terminate => {
                self.running = false;
                self.status.terminate();
                debug!("pattern engine: worker exiting");
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Run one update of the active pattern
    fn cycle(&mut self) {
        let Some(pattern) = self.active.as_mut() else {
            self.finish_run();
            return;
        };

        let result = pattern.update(&mut self.strip);
        self.status.record_frame();
        match result {
            Ok(()) if pattern.is_static() => self.finish_run(),
            Ok(()) => {}
            Err(err) => {
                error!("pattern engine: update failed, run stopped: {err:?}");
                self.status.record_failure();
                self.finish_run();
            }
        }
    }

    fn finish_run(&mut self) {
        self.running = false;
        self.status.set_state(PatternState::Idle);
    }
}
