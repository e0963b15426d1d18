use std::any::Any;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AgentCtl, TickContext};

/// Engine-owned lifecycle state of a task.
///
/// Task implementations never see or mutate this; the owning
/// [`TaskSlot`](crate::TaskSlot) transitions it through the
/// start/tick/stop calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaskStatus {
    NotStarted,
    Running,
    Stopped,
}

/// Capability flags a task declares about itself.
///
/// The engine carries these opaquely; they exist so `should_force`
/// implementations can interrogate a candidate without downcasting to every
/// concrete type that might override a safety constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaskCaps(u32);

impl TaskCaps {
    pub const NONE: Self = Self(0);
    /// Only meaningful while the agent stands on solid ground.
    pub const REQUIRES_GROUNDED: Self = Self(1 << 0);
    /// Declares the authority to interrupt a task that is protecting a
    /// grounded-safety transition (e.g. an in-flight landing).
    pub const OVERRIDES_GROUNDED: Self = Self(1 << 1);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for TaskCaps {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Why a task's stop hook is firing.
///
/// Cleanup frequently needs to distinguish "ran to completion" from "lost my
/// slot": a mining task may bank partial progress when superseded but not
/// when finished, a movement task may need to zero actuation flags in every
/// case.
pub enum StopReason<'a, A>
where
    A: AgentCtl + 'static,
{
    /// The terminal predicate fired; the task ran to completion (which may
    /// mean an internal failed state, see the crate docs on failure).
    Finished,
    /// An unequal candidate takes this slot; the incoming task is provided
    /// so cleanup can inspect what it is yielding to.
    Superseded(&'a dyn Task<A>),
    /// The owner withdrew the slot: the parent reclaimed direct control,
    /// the chain went idle, or a preempted chain tore its tree down.
    Canceled,
}

impl<'a, A> StopReason<'a, A>
where
    A: AgentCtl + 'static,
{
    /// The task taking over the slot, when there is one.
    pub fn interrupter(&self) -> Option<&'a dyn Task<A>> {
        match self {
            StopReason::Superseded(task) => Some(*task),
            _ => None,
        }
    }

    pub fn is_interruption(&self) -> bool {
        !matches!(self, StopReason::Finished)
    }
}

impl<A> Clone for StopReason<'_, A>
where
    A: AgentCtl + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for StopReason<'_, A> where A: AgentCtl + 'static {}

/// Upcast to `Any` for identity checks.
///
/// Blanket-implemented; task authors get it for free.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One unit of intent in the behavior hierarchy.
///
/// A task composes by *nominating* a child from [`Task::tick`]; it never
/// starts, ticks or stops that child itself. The owning slot resolves the
/// nomination against whatever is already running (equality continuity,
/// force-veto) and drives the winner, so a task may re-derive its desired
/// child from volatile state every tick without restarting multi-tick work
/// that has not actually changed.
///
/// There is no error channel. A task that cannot progress records that
/// internally and reports `is_finished() == true`; its owner reads any
/// failed marker back and picks an alternative on the next tick.
pub trait Task<A>: AsAny + 'static
where
    A: AgentCtl + 'static,
{
    /// Resource acquisition. Paired exactly once with [`Task::stop`].
    fn start(&mut self, _ctx: &TickContext, _agent: &mut A) {}

    /// One step. Return the child task this tick's intent delegates to, or
    /// `None` after acting on the agent directly. Returning `None` also
    /// reclaims the child slot: a previously nominated child is stopped.
    fn tick(&mut self, ctx: &TickContext, agent: &mut A) -> Option<Box<dyn Task<A>>>;

    /// Resource release. Fires exactly once per start, with the reason the
    /// slot is being vacated.
    fn stop(&mut self, _ctx: &TickContext, _agent: &mut A, _reason: StopReason<'_, A>) {}

    /// Terminal predicate, checked by the owner after each tick. A finished
    /// task is stopped and discarded.
    fn is_finished(&self, ctx: &TickContext, agent: &A) -> bool;

    /// Identity over construction parameters, never over transient
    /// progress. This is the sole basis for continuation vs. restart.
    /// Implementations downcast `other` (see `downcast_ref` on
    /// `dyn Task`) and treat a failed downcast as "not equal".
    fn is_equal(&self, other: &dyn Task<A>) -> bool;

    /// Veto a specific proposed successor while this task is running.
    ///
    /// Protects physically unsafe transition points within a chain's own
    /// replanning. Cross-chain preemption is not consulted here.
    fn should_force(&self, _candidate: &dyn Task<A>) -> bool {
        false
    }

    fn caps(&self) -> TaskCaps {
        TaskCaps::NONE
    }

    /// Debug label; shows up in slot breadcrumbs.
    fn name(&self) -> &str {
        "task"
    }
}

impl<A> dyn Task<A>
where
    A: AgentCtl + 'static,
{
    /// Typed view of another task for identity comparison.
    ///
    /// Comparing incompatible task types yields `None`, which `is_equal`
    /// implementations resolve to "not equal", never an error.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Task<A>,
    {
        self.as_any().downcast_ref::<T>()
    }
}
