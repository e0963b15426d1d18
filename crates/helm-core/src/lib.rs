//! Deterministic, engine-agnostic behavior task engine.
//!
//! One tick at a time: a [`Task`] is a restart-aware unit of intent, a
//! [`TaskSlot`] is the engine-owned cell that starts it, drives it, resolves
//! its delegation to child tasks, and stops it exactly once.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod rng;
pub mod slot;
pub mod task;
pub mod tick;

pub use agent::{AgentCtl, AgentView};
pub use rng::SplitMix64;
pub use slot::{TaskSlot, Transition};
pub use task::{StopReason, Task, TaskCaps, TaskStatus};
pub use tick::TickContext;
