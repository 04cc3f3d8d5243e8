use std::time::Duration;
use std::time::Instant;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    PaletteFocus,
    SectionSettle,
    TooltipShow,
}

impl TimerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PaletteFocus => "palette_focus",
            Self::SectionSettle => "section_settle",
            Self::TooltipShow => "tooltip_show",
        }
    }
}

/// Cancelable one-shot timers, at most one pending per kind. Scheduling a
/// kind that is already pending moves its deadline.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: Vec<(TimerKind, Instant)>,
}

impl TimerQueue {
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration, now: Instant) {
        self.cancel(kind);
        self.pending.push((kind, now + delay));
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != kind);
        before != self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due = Vec::new();
        self.pending.retain(|(kind, deadline)| {
            if *deadline <= now {
                due.push((*kind, *deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(kind, deadline)| (*deadline, *kind));
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}
