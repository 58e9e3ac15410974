
use crate::pool::DrawPool;
use tokio::task::JoinHandle;

/// Session phases. There is one global session; it either waits or runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Everything the session state machine owns: the current phase, the
/// draw pool, and the cancelable handle of the recurring draw task
/// (present iff running).
///
/// Transitions are driven by the server; this type only guards their
/// legality. The pool starts empty and is replaced wholesale on each
/// start, so the previous game's history stays reportable until then.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    pool: DrawPool,
    ticker: Option<JoinHandle<()>>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    pub(crate) fn pool_mut(&mut self) -> &mut DrawPool {
        &mut self.pool
    }

    /// Idle → Running, loading a fresh pool.
    ///
    /// Returns `false` (and changes nothing) when already running.
    pub(crate) fn begin(&mut self, range_size: u32) -> bool {
        if self.is_running() {
            return false;
        }
        self.pool = DrawPool::new(range_size);
        self.phase = Phase::Running;
        true
    }

    /// Hands the session the handle of its recurring draw task.
    pub(crate) fn attach_ticker(&mut self, handle: JoinHandle<()>) {
        self.ticker = Some(handle);
    }

    /// Running → Idle, canceling any pending tick. Safe in any phase.
    ///
    /// A stop issued from within a tick takes effect at the ticker's next
    /// await point, so no draw can fire into an idle session.
    pub(crate) fn end(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        self.phase = Phase::Idle;
    }

    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }
}
