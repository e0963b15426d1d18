use helm_core::{AgentCtl, TickContext};

use crate::Priority;

/// One competing concern registered with the scheduler.
///
/// A chain owns its root task tree and manages it however it likes inside
/// [`Chain::tick`]; most implementations should reach for
/// [`ReplanChain`](crate::ReplanChain) instead of driving a
/// `helm_core::TaskSlot` by hand.
///
/// `is_active` and `priority` are consulted fresh every scheduler tick:
/// world state moves every tick, so caching a priority across ticks is a
/// bug. Memoizing within a single tick number is fine.
pub trait Chain<A>: 'static
where
    A: AgentCtl + 'static,
{
    fn name(&self) -> &'static str;

    /// Whether this concern currently has work.
    fn is_active(&mut self, ctx: &TickContext, agent: &A) -> bool;

    /// Urgency this tick. Only consulted while active.
    fn priority(&mut self, ctx: &TickContext, agent: &A) -> Priority;

    /// Drive the root task tree for one tick. Called only on the winning
    /// chain.
    fn tick(&mut self, ctx: &TickContext, agent: &mut A);

    /// Control is transferring to `winner` this tick. Fired exactly when
    /// this chain held control and a different chain won arbitration; the
    /// default keeps the task tree intact (frozen) so work resumes when
    /// control returns.
    fn on_interrupt(&mut self, _ctx: &TickContext, _agent: &mut A, _winner: &dyn Chain<A>) {}
}
