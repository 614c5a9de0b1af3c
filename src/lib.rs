#![doc(test(attr(deny(warnings))))]

//! Paycycle answers "how much money is left this pay period after my bills?"
//! It wires the recurrence engine in `paycycle-core` to JSON persistence,
//! user configuration and an interactive shell.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Paycycle tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
