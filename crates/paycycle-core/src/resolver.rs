//! Anchor resolution: which occurrence of a schedule is "current" on a given day.
//!
//! The current occurrence is the earliest occurrence on or after the reference
//! date, i.e. the next one due. How it is reached depends on the series:
//!
//! * one-time: the anchor, always;
//! * fresh series (`existing_recurring == false`): roll forward from the anchor,
//!   never looking behind it;
//! * existing series anchored before the reference: roll forward as above;
//! * existing series anchored on/after the reference: walk backward while the
//!   predecessor is still on/after the reference.
//!
//! All walks are bounded. A walk that cannot make progress stops and reports a
//! [`WalkDiagnostic`] next to the last valid candidate.

use std::fmt;

use chrono::NaiveDate;
use paycycle_domain::{Frequency, Recurring};
use tracing::warn;

/// Hard cap on the number of steps any single walk may take.
pub const MAX_WALK_STEPS: usize = 100_000;

/// Backward walks never go below this date.
pub fn guard_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Why a walk stopped before converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDiagnostic {
    /// A step did not move the candidate forward (or backward when walking back).
    Stalled { at: NaiveDate, frequency: Frequency },
    /// The backward walk would have crossed the guard floor.
    FloorReached { floor: NaiveDate },
    /// The walk used up [`MAX_WALK_STEPS`].
    StepLimit { steps: usize },
}

impl fmt::Display for WalkDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkDiagnostic::Stalled { at, frequency } => {
                write!(f, "frequency `{}` did not advance past {}", frequency.as_str(), at)
            }
            WalkDiagnostic::FloorReached { floor } => {
                write!(f, "backward walk reached the guard floor {}", floor)
            }
            WalkDiagnostic::StepLimit { steps } => {
                write!(f, "walk stopped after {} steps", steps)
            }
        }
    }
}

/// Outcome of resolving a schedule against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub date: NaiveDate,
    /// Occurrence index of `date` relative to the anchor (0 is the anchor).
    pub index: i32,
    pub diagnostic: Option<WalkDiagnostic>,
}

impl Resolution {
    fn settled(date: NaiveDate, index: i32) -> Self {
        Self {
            date,
            index,
            diagnostic: None,
        }
    }

    fn tripped(date: NaiveDate, index: i32, diagnostic: WalkDiagnostic) -> Self {
        warn!(%date, %diagnostic, "occurrence walk aborted");
        Self {
            date,
            index,
            diagnostic: Some(diagnostic),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostic.is_none()
    }
}

/// Resolves the current occurrence of `item` as of `reference`.
pub fn resolve_current_occurrence<T>(item: &T, reference: NaiveDate) -> NaiveDate
where
    T: Recurring + ?Sized,
{
    resolve_occurrence(
        item.anchor(),
        item.frequency(),
        item.existing_recurring(),
        reference,
    )
    .date
}

/// Resolves the occurrence of the schedule `(anchor, frequency)` in force on `reference`.
pub fn resolve_occurrence(
    anchor: NaiveDate,
    frequency: Frequency,
    existing_recurring: bool,
    reference: NaiveDate,
) -> Resolution {
    if frequency.is_one_time() {
        return Resolution::settled(anchor, 0);
    }
    if existing_recurring && anchor >= reference {
        walk_backward(anchor, frequency, reference)
    } else {
        roll_forward(anchor, frequency, reference)
    }
}

/// Jumps close to `reference` by cycle count, then steps one occurrence at a time.
fn roll_forward(anchor: NaiveDate, frequency: Frequency, reference: NaiveDate) -> Resolution {
    let mut index = frequency.cycles_between(anchor, reference).max(0);
    while index > 0 && frequency.nth(anchor, index - 1) >= reference {
        index -= 1;
    }
    let mut candidate = frequency.nth(anchor, index);
    let mut steps = 0;
    while candidate < reference {
        if steps >= MAX_WALK_STEPS {
            return Resolution::tripped(candidate, index, WalkDiagnostic::StepLimit { steps });
        }
        let next = frequency.nth(anchor, index + 1);
        if next <= candidate {
            return Resolution::tripped(
                candidate,
                index,
                WalkDiagnostic::Stalled {
                    at: candidate,
                    frequency,
                },
            );
        }
        index += 1;
        candidate = next;
        steps += 1;
    }
    Resolution::settled(candidate, index)
}

fn walk_backward(anchor: NaiveDate, frequency: Frequency, reference: NaiveDate) -> Resolution {
    let floor = guard_floor();
    let mut index = 0;
    let mut candidate = anchor;
    let mut steps = 0;
    loop {
        if steps >= MAX_WALK_STEPS {
            return Resolution::tripped(candidate, index, WalkDiagnostic::StepLimit { steps });
        }
        let previous = frequency.nth(anchor, index - 1);
        if previous >= candidate {
            return Resolution::tripped(
                candidate,
                index,
                WalkDiagnostic::Stalled {
                    at: candidate,
                    frequency,
                },
            );
        }
        if previous < reference {
            // `candidate` is the step forward from the last predecessor before `reference`.
            return Resolution::settled(candidate, index);
        }
        if previous < floor {
            return Resolution::tripped(candidate, index, WalkDiagnostic::FloorReached { floor });
        }
        index -= 1;
        candidate = previous;
        steps += 1;
    }
}
