//! Finds the pay period containing a reference date.

use chrono::NaiveDate;
use paycycle_domain::{DateWindow, Frequency, PaySchedule};
use tracing::{debug, warn};

use crate::resolver::MAX_WALK_STEPS;

/// Returns the half-open window `[start, end)` between the two paydays that
/// bracket `reference`, so that `start <= reference < end`.
///
/// Weekly cadences jump straight to the right cycle by whole-day division.
/// Monthly cadences align to the anchor's day of month in the reference's
/// month, stepping back one month when that payday is still ahead. Both then
/// roll by single cycles until the window brackets `reference`. Paydays are
/// always derived from the anchor, so month-end clamping never drifts.
pub fn locate_pay_period(schedule: &PaySchedule, reference: NaiveDate) -> DateWindow {
    let anchor = schedule.last_payday;
    let frequency = Frequency::from(schedule.frequency);
    let mut index = frequency.cycles_between(anchor, reference);

    let mut steps = 0;
    while frequency.nth(anchor, index) > reference && steps < MAX_WALK_STEPS {
        index -= 1;
        steps += 1;
    }
    while frequency.nth(anchor, index + 1) <= reference && steps < MAX_WALK_STEPS {
        index += 1;
        steps += 1;
    }
    if steps >= MAX_WALK_STEPS {
        warn!(%anchor, %reference, steps, "pay period roll hit the step limit");
    }

    let window = DateWindow {
        start: frequency.nth(anchor, index),
        end: frequency.nth(anchor, index + 1),
    };
    debug!(%reference, start = %window.start, end = %window.end, "located pay period");
    window
}
