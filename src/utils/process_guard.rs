//! Interrupt handling for long-running build tools.
//!
//! Terminates the child when:
//! - SIGINT (Ctrl+C) arrives, via the ctrlc handler
//! - SIGHUP (terminal hangup) arrives, via signal_hook
//! - the parent process dies (ppid changes from the initial snapshot)

use std::process::{Child, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How a guarded child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The child exited on its own.
    Exited(ExitStatus),
    /// The run was interrupted: either we killed the child, or it exited
    /// on its own after the interrupt flag was set (Ctrl+C reaches the whole
    /// foreground process group, so the child usually dies first).
    Interrupted,
}

/// Waits on child processes and kills them on interrupt.
///
/// Create once, register signals, then use `wait_or_kill` instead of `.wait()`.
pub struct ProcessGuard {
    interrupted: Arc<AtomicBool>,
    #[cfg(unix)]
    initial_ppid: u32,
}

impl Default for ProcessGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessGuard {
    pub fn new() -> Self {
        Self {
            interrupted: Arc::new(AtomicBool::new(false)),
            #[cfg(unix)]
            initial_ppid: unsafe { libc::getppid() as u32 },
        }
    }

    /// Register SIGINT and SIGHUP handlers that set the interrupted flag.
    ///
    /// ctrlc accepts one handler per process; later registrations are ignored.
    pub fn register_signal_handlers(&self) {
        let flag = self.interrupted.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        }) {
            tracing::debug!("ctrl-c handler not installed: {}", e);
        }

        #[cfg(unix)]
        {
            use signal_hook::flag::register;
            if let Err(e) = register(libc::SIGHUP, self.interrupted.clone()) {
                tracing::debug!("SIGHUP handler not installed: {}", e);
            }
        }
    }

    /// Set the interrupted flag as a signal handler would.
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Poll the child every 100ms, killing it once an interrupt or parent
    /// death is observed.
    pub fn wait_or_kill(&self, child: &mut Child) -> Result<WaitOutcome> {
        loop {
            if let Some(status) = child.try_wait()? {
                if self.is_interrupted() {
                    tracing::debug!(?status, "child exited after interrupt");
                    return Ok(WaitOutcome::Interrupted);
                }
                return Ok(WaitOutcome::Exited(status));
            }
            if self.should_terminate() {
                tracing::debug!(pid = child.id(), "killing child after interrupt");
                let _ = child.kill();
                child.wait()?;
                return Ok(WaitOutcome::Interrupted);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    fn should_terminate(&self) -> bool {
        self.is_interrupted() || self.is_orphaned()
    }

    /// Any ppid change means the parent died and we were reparented.
    #[cfg(unix)]
    fn is_orphaned(&self) -> bool {
        let current_ppid = unsafe { libc::getppid() as u32 };
        current_ppid != self.initial_ppid
    }

    #[cfg(not(unix))]
    fn is_orphaned(&self) -> bool {
        false
    }
}
