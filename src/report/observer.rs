use std::fmt;
use std::time::Duration;

use crate::engine::Engine;

use super::ReportStep;

/// Events emitted while a report is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    RunStarted { engine: Engine },
    StepFinished {
        step: ReportStep,
        rows: usize,
        elapsed: Duration,
    },
    RunFinished { steps: usize, elapsed: Duration },
}

impl fmt::Display for ReportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunStarted { engine } => write!(f, "report started engine={engine}"),
            Self::StepFinished {
                step,
                rows,
                elapsed,
            } => write!(f, "step {} rows={rows} elapsed={elapsed:?}", step.name()),
            Self::RunFinished { steps, elapsed } => {
                write!(f, "report finished steps={steps} elapsed={elapsed:?}")
            }
        }
    }
}

/// Observer hook for report events.
pub trait ReportObserver: Send + Sync {
    fn on_event(&self, event: &ReportEvent);
}

/// Forwards report events to the `log` facade.
///
/// Run boundaries are logged at `info`, individual steps at `debug`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ReportObserver for LogObserver {
    fn on_event(&self, event: &ReportEvent) {
        match event {
            ReportEvent::StepFinished { .. } => log::debug!("{event}"),
            _ => log::info!("{event}"),
        }
    }
}
