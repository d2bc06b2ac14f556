//! Threaded core controller.
//!
//! This module runs a [`Simulator`] on a dedicated thread and exposes the
//! external control surface. It provides:
//! 1. **Idle Flag:** A mutex/condvar pair holding the idle reason, pause flag and
//!    a single pending command slot.
//! 2. **Commands:** `resume` and `acknowledge` are applied by the core thread and
//!    their result is handed back to the caller.
//! 3. **Lifecycle:** `shutdown` joins the thread and returns the simulator.
//!
//! The core thread inspects the control state only at the top of each cycle, so
//! a cycle in progress always completes before a pause, command or shutdown is seen.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use serde::Serialize;

use crate::common::SimError;
use crate::sim::simulator::{IdleReason, Simulator};

/// Kind of acknowledgement a collaborator sends to an idle core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AckKind {
    /// An I/O request was serviced.
    Io,
    /// A guest-abort fault report was handled.
    Fault,
}

#[derive(Clone, Copy, Debug)]
enum Command {
    Resume(u32),
    Acknowledge(AckKind),
}

#[derive(Debug, Default)]
struct ControlState {
    paused: bool,
    idle: Option<IdleReason>,
    command: Option<Command>,
    reply: Option<Result<(), SimError>>,
    shutdown: bool,
    finished: bool,
}

#[derive(Debug, Default)]
struct Control {
    state: Mutex<ControlState>,
    cond: Condvar,
}

impl Control {
    fn lock(&self) -> MutexGuard<'_, ControlState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, ControlState>) -> MutexGuard<'a, ControlState> {
        self.cond.wait(guard).unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks the control state finished when the core thread ends, including by panic.
struct FinishGuard(Arc<Control>);

impl Drop for FinishGuard {
    fn drop(&mut self) {
        self.0.lock().finished = true;
        self.0.cond.notify_all();
    }
}

/// Handle to a simulator running on its own thread.
#[derive(Debug)]
pub struct CoreHandle {
    control: Arc<Control>,
    thread: Option<JoinHandle<Result<Simulator, SimError>>>,
}

impl Simulator {
    /// Moves the simulator onto a dedicated core thread.
    ///
    /// The core starts running immediately if it has been booted.
    pub fn spawn(self) -> CoreHandle {
        let control = Arc::new(Control::default());
        let guard = FinishGuard(Arc::clone(&control));
        let thread = thread::spawn(move || {
            let guard = guard;
            core_loop(self, &guard.0)
        });
        CoreHandle {
            control,
            thread: Some(thread),
        }
    }
}

fn apply(sim: &mut Simulator, command: Command) -> Result<(), SimError> {
    match command {
        Command::Resume(entry) => sim.resume(entry),
        Command::Acknowledge(kind) => sim.acknowledge(kind),
    }
}

fn core_loop(mut sim: Simulator, control: &Control) -> Result<Simulator, SimError> {
    loop {
        {
            let mut state = control.lock();
            loop {
                if let Some(command) = state.command.take() {
                    let result = apply(&mut sim, command);
                    if result.is_ok() {
                        state.idle = if sim.cpu.is_runnable() {
                            None
                        } else {
                            Some(IdleReason::Halted)
                        };
                    }
                    state.reply = Some(result);
                    control.cond.notify_all();
                    continue;
                }
                if state.shutdown {
                    return Ok(sim);
                }
                if state.paused && state.idle.is_none() {
                    state.idle = Some(IdleReason::Paused);
                    control.cond.notify_all();
                }
                if state.idle.is_some() || !sim.cpu.is_runnable() {
                    state = control.wait(state);
                    continue;
                }
                break;
            }
        }

        match sim.step() {
            Ok(None) => {}
            Ok(Some(reason)) => {
                control.lock().idle = Some(reason);
                control.cond.notify_all();
            }
            Err(err) => {
                if let SimError::Fatal(fault) = &err {
                    control.lock().idle = Some(IdleReason::Fatal(fault.clone()));
                }
                return Err(err);
            }
        }
    }
}

impl CoreHandle {
    /// Requests a pause at the next cycle boundary.
    pub fn pause(&self) {
        self.control.lock().paused = true;
        self.control.cond.notify_all();
    }

    /// Clears a pause.
    pub fn unpause(&self) {
        let mut state = self.control.lock();
        state.paused = false;
        if state.idle == Some(IdleReason::Paused) {
            state.idle = None;
        }
        drop(state);
        self.control.cond.notify_all();
    }

    /// Sets a halted core running at `entry`.
    pub fn resume(&self, entry: u32) -> Result<(), SimError> {
        self.send(Command::Resume(entry))
    }

    /// Delivers an acknowledgement to the idle core.
    pub fn acknowledge(&self, kind: AckKind) -> Result<(), SimError> {
        self.send(Command::Acknowledge(kind))
    }

    fn send(&self, command: Command) -> Result<(), SimError> {
        let mut state = self.control.lock();
        while state.command.is_some() || state.reply.is_some() {
            if state.finished {
                return Err(SimError::CoreStopped);
            }
            state = self.control.wait(state);
        }
        if state.finished {
            return Err(SimError::CoreStopped);
        }
        state.command = Some(command);
        self.control.cond.notify_all();
        loop {
            if let Some(reply) = state.reply.take() {
                self.control.cond.notify_all();
                return reply;
            }
            if state.finished {
                state.command = None;
                return Err(SimError::CoreStopped);
            }
            state = self.control.wait(state);
        }
    }

    /// Blocks until the core goes idle.
    ///
    /// # Returns
    ///
    /// The idle reason, or `None` if the core thread ended without one.
    pub fn wait_idle(&self) -> Option<IdleReason> {
        let mut state = self.control.lock();
        loop {
            if let Some(reason) = &state.idle {
                return Some(reason.clone());
            }
            if state.finished {
                return None;
            }
            state = self.control.wait(state);
        }
    }

    /// Stops the core thread at the next cycle boundary and joins it.
    ///
    /// # Returns
    ///
    /// The simulator, or the fatal error that ended the thread.
    pub fn shutdown(mut self) -> Result<Simulator, SimError> {
        self.request_shutdown();
        let thread = self.thread.take().ok_or(SimError::CoreStopped)?;
        thread.join().map_err(|_| SimError::ThreadPanicked)?
    }

    fn request_shutdown(&self) {
        self.control.lock().shutdown = true;
        self.control.cond.notify_all();
    }
}

impl Drop for CoreHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.request_shutdown();
        }
    }
}
