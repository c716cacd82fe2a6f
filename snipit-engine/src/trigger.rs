use crate::outcome::PasteOutcome;
use crate::pipeline::SnipitPipeline;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Dispatching,
}

#[derive(Debug)]
pub enum TriggerOutcome {
    Dispatched(JoinHandle<PasteOutcome>),
    /// A previous paste is still running; this one is dropped, not queued.
    IgnoredBusy,
}

impl TriggerOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, TriggerOutcome::Dispatched(_))
    }
}

/// Turns paste-chord notifications into pipeline runs.
///
/// `fire` is safe to call from a keyboard hook callback: it never blocks,
/// the run happens on the tokio runtime.
#[derive(Clone)]
pub struct PasteTrigger {
    pipeline: Arc<SnipitPipeline>,
    runtime: Handle,
    dispatching: Arc<AtomicBool>,
}

impl PasteTrigger {
    pub fn new(pipeline: Arc<SnipitPipeline>, runtime: Handle) -> Self {
        Self {
            pipeline,
            runtime,
            dispatching: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> TriggerState {
        if self.dispatching.load(Ordering::Acquire) {
            TriggerState::Dispatching
        } else {
            TriggerState::Idle
        }
    }

    pub fn fire(&self) -> TriggerOutcome {
        if self
            .dispatching
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("paste ignored: previous paste still dispatching");
            return TriggerOutcome::IgnoredBusy;
        }

        let pipeline = self.pipeline.clone();
        let idle = BackToIdle(self.dispatching.clone());
        TriggerOutcome::Dispatched(self.runtime.spawn(async move {
            let _idle = idle;
            pipeline.run_once().await
        }))
    }
}

// Resets the trigger even if the run panics.
struct BackToIdle(Arc<AtomicBool>);

impl Drop for BackToIdle {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
