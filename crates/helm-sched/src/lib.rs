//! Priority arbitration scheduler and behavior chains built on `helm-core`.
//!
//! A [`Chain`] groups one competing concern (hunger, danger, the user's
//! goal, maintenance) under a dynamic [`Priority`] and a root task tree.
//! Each tick the [`Scheduler`] picks the highest-priority active chain and
//! drives only that one; everything else stands still. [`ReplanChain`] is
//! the specialization most concerns want: re-derive the desired task from
//! fresh state every tick and let slot continuity keep in-progress work
//! alive.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod chain;
pub mod priority;
pub mod replan;
pub mod scheduler;

pub use chain::Chain;
pub use priority::Priority;
pub use replan::{ReplanChain, ReplanConfig, Replanner};
pub use scheduler::{ChainId, Scheduler, SchedulerConfig};
