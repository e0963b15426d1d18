//! Injected time sources and cooldown gates for tick-driven behaviors.
//!
//! Cooldown logic takes an explicit [`Clock`] rather than reaching for
//! ambient time: a [`SimClock`] advanced by the driver keeps gates correct
//! when the simulation is paused or throttled, while a [`WallClock`]
//! measures real elapsed time. The two are interchangeable behind the one
//! trait.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod clock;
pub mod cooldown;

pub use clock::{Clock, SimClock, WallClock};
pub use cooldown::Cooldown;
