use helm_core::{AgentCtl, TickContext};
use helm_tools::{TraceEvent, TraceSink, Tracer};

use crate::{Chain, Priority};

/// Arbitration cadence.
///
/// The default re-arbitrates every tick, which is what the priority model
/// assumes: an emergency chain preempts mid-task with at most one tick of
/// latency. Embeddings running very large chain sets can decimate; between
/// arbitration ticks the previous winner keeps control unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub arbitrate_every_ticks: u32,
    pub arbitrate_offset_ticks: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            arbitrate_every_ticks: 1,
            arbitrate_offset_ticks: 0,
        }
    }
}

impl SchedulerConfig {
    pub fn should_arbitrate(&self, tick: u64) -> bool {
        let every = self.arbitrate_every_ticks.max(1) as u64;
        ((tick + (self.arbitrate_offset_ticks as u64)) % every) == 0
    }
}

/// Stable handle returned by [`Scheduler::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(usize);

impl ChainId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns the registered chains and decides, each tick, which one controls
/// the agent.
///
/// Selection is strict priority preemption: the active chain with the
/// greatest priority wins, ties keep the earliest registration, and the
/// previous winner is told it lost control (`on_interrupt`) before the new
/// winner ticks. A chain never has to cooperate to be preempted.
pub struct Scheduler<A>
where
    A: AgentCtl + 'static,
{
    chains: Vec<Box<dyn Chain<A>>>,
    active: Option<usize>,
    config: SchedulerConfig,
    trace: Tracer,
}

impl<A> Default for Scheduler<A>
where
    A: AgentCtl + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A>
where
    A: AgentCtl + 'static,
{
    pub fn new() -> Self {
        Self {
            chains: Vec::new(),
            active: None,
            config: SchedulerConfig::default(),
            trace: Tracer::off(),
        }
    }

    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_trace(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Tracer::to(sink);
        self
    }

    /// Registration order is permanent and breaks priority ties.
    pub fn register(&mut self, chain: Box<dyn Chain<A>>) -> ChainId {
        self.chains.push(chain);
        ChainId(self.chains.len() - 1)
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn chain(&self, id: ChainId) -> Option<&dyn Chain<A>> {
        self.chains.get(id.0).map(|c| c.as_ref())
    }

    pub fn active_id(&self) -> Option<ChainId> {
        self.active.map(ChainId)
    }

    pub fn active_chain(&self) -> Option<&dyn Chain<A>> {
        self.active.map(|i| self.chains[i].as_ref())
    }

    /// One scheduling step: evaluate every chain, pick the winner, deliver
    /// the interrupt on a control transfer, drive the winner. With no
    /// active chain, the agent is left alone this tick.
    pub fn tick(&mut self, ctx: &TickContext, agent: &mut A) {
        if !self.config.should_arbitrate(ctx.tick) {
            if let Some(i) = self.active {
                self.chains[i].tick(ctx, agent);
            }
            return;
        }

        let mut winner: Option<(usize, Priority)> = None;
        for (i, chain) in self.chains.iter_mut().enumerate() {
            if !chain.is_active(ctx, agent) {
                continue;
            }
            let priority = chain.priority(ctx, agent);
            // Strict > keeps the earliest registration on ties.
            if winner.map_or(true, |(_, best)| priority > best) {
                winner = Some((i, priority));
            }
        }

        let Some((next, priority)) = winner else {
            // The previous winner went inactive of its own accord; no
            // interrupt is synthesized.
            if self.active.take().is_some() {
                self.trace.emit(TraceEvent::new(ctx.tick, "sched.idle"));
            }
            return;
        };

        if self.active != Some(next) {
            if let Some(prev) = self.active {
                let (outgoing, incoming) = pair_mut(&mut self.chains, prev, next);
                let outgoing_name = outgoing.name();
                outgoing.on_interrupt(ctx, agent, incoming);
                self.trace.emit(
                    TraceEvent::new(ctx.tick, "sched.preempt").with_chain(outgoing_name),
                );
            }
            self.active = Some(next);
            self.trace.emit(
                TraceEvent::new(ctx.tick, "sched.switch")
                    .with_chain(self.chains[next].name())
                    .with_value(priority.0 as u64),
            );
        }

        self.chains[next].tick(ctx, agent);
    }
}

/// Disjoint mutable/shared access to the outgoing and incoming chains.
fn pair_mut<A>(
    chains: &mut [Box<dyn Chain<A>>],
    prev: usize,
    next: usize,
) -> (&mut dyn Chain<A>, &dyn Chain<A>)
where
    A: AgentCtl + 'static,
{
    debug_assert_ne!(prev, next);
    if prev < next {
        let (lo, hi) = chains.split_at_mut(next);
        (lo[prev].as_mut(), hi[0].as_ref())
    } else {
        let (lo, hi) = chains.split_at_mut(prev);
        (hi[0].as_mut(), lo[next].as_ref())
    }
}
