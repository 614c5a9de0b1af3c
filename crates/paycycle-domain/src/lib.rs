//! paycycle-domain
//!
//! Pure domain models (Bill, PaySchedule, Book) plus the date-only calendar
//! arithmetic every schedule computation is built on. No I/O, no CLI, no storage.

pub mod bill;
pub mod book;
pub mod calendar;
pub mod common;
pub mod frequency;
pub mod pay;
pub mod window;

pub use bill::*;
pub use book::*;
pub use common::*;
pub use frequency::*;
pub use pay::*;
pub use window::*;
