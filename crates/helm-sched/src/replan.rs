use helm_core::{AgentCtl, Task, TaskSlot, TickContext, Transition};

use crate::{Chain, Priority};

/// Replanning cadence and preemption response for a [`ReplanChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplanConfig {
    /// Re-derive the candidate task every N ticks (the slot still ticks
    /// every tick). Default 1: derive fresh each tick, which is what slot
    /// continuity exists to make cheap.
    pub replan_every_ticks: u32,
    pub replan_offset_ticks: u32,
    /// Tear the task tree down when another chain takes control. The
    /// default keeps it intact and frozen, resuming in place when control
    /// returns; opt in for chains whose in-flight work must not straddle a
    /// preemption.
    pub stop_on_interrupt: bool,
}

impl Default for ReplanConfig {
    fn default() -> Self {
        Self {
            replan_every_ticks: 1,
            replan_offset_ticks: 0,
            stop_on_interrupt: false,
        }
    }
}

impl ReplanConfig {
    pub fn should_replan(&self, tick: u64) -> bool {
        let every = self.replan_every_ticks.max(1) as u64;
        ((tick + (self.replan_offset_ticks as u64)) % every) == 0
    }
}

/// The per-tick derivation a [`ReplanChain`] wraps.
///
/// Both hooks are pure functions of current state with no memory of prior
/// ticks; the chain supplies all the continuity. `poll` doubles as the
/// active flag: `None` means the concern has nothing to do.
pub trait Replanner<A>: 'static
where
    A: AgentCtl + 'static,
{
    fn name(&self) -> &'static str;

    /// Current urgency, or `None` while idle.
    fn poll(&mut self, ctx: &TickContext, agent: &A) -> Option<Priority>;

    /// The task this concern wants running this tick, derived fresh from
    /// state. `None` stops and clears whatever is running.
    fn replan(&mut self, ctx: &TickContext, agent: &A) -> Option<Box<dyn Task<A>>>;

    /// Another chain took control away.
    fn on_interrupt(&mut self, _ctx: &TickContext, _agent: &mut A, _winner: &dyn Chain<A>) {}
}

/// Chain that re-derives its task every tick and relies on equality-based
/// continuity to avoid restarting it.
///
/// Most behavior modules reconstruct their intended plan from scratch each
/// tick; routing the fresh candidate through [`TaskSlot::propose`] means an
/// unchanged plan keeps its running instance (one start, zero stops, all
/// progress intact) while a changed plan swaps tasks in the same cycle.
pub struct ReplanChain<A, R>
where
    A: AgentCtl + 'static,
    R: Replanner<A>,
{
    replanner: R,
    slot: TaskSlot<A>,
    config: ReplanConfig,
    polled_at: Option<u64>,
    last_poll: Option<Priority>,
    last_transition: Option<Transition>,
}

impl<A, R> ReplanChain<A, R>
where
    A: AgentCtl + 'static,
    R: Replanner<A>,
{
    pub fn new(replanner: R) -> Self {
        Self {
            replanner,
            slot: TaskSlot::new(),
            config: ReplanConfig::default(),
            polled_at: None,
            last_poll: None,
            last_transition: None,
        }
    }

    pub fn with_config(mut self, config: ReplanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn slot(&self) -> &TaskSlot<A> {
        &self.slot
    }

    pub fn replanner(&self) -> &R {
        &self.replanner
    }

    /// What the most recent replan did with its candidate; `None` when the
    /// last replan yielded no task.
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    // One poll per tick number feeds both is_active and priority; across
    // ticks the value is always recomputed.
    fn poll_cached(&mut self, ctx: &TickContext, agent: &A) -> Option<Priority> {
        if self.polled_at != Some(ctx.tick) {
            self.last_poll = self.replanner.poll(ctx, agent);
            self.polled_at = Some(ctx.tick);
        }
        self.last_poll
    }
}

impl<A, R> Chain<A> for ReplanChain<A, R>
where
    A: AgentCtl + 'static,
    R: Replanner<A>,
{
    fn name(&self) -> &'static str {
        self.replanner.name()
    }

    fn is_active(&mut self, ctx: &TickContext, agent: &A) -> bool {
        self.poll_cached(ctx, agent).is_some()
    }

    fn priority(&mut self, ctx: &TickContext, agent: &A) -> Priority {
        self.poll_cached(ctx, agent).unwrap_or(Priority::IDLE)
    }

    fn tick(&mut self, ctx: &TickContext, agent: &mut A) {
        if self.config.should_replan(ctx.tick) {
            match self.replanner.replan(ctx, agent) {
                Some(candidate) => {
                    self.last_transition = Some(self.slot.propose(ctx, agent, candidate));
                }
                None => {
                    self.slot.clear(ctx, agent);
                    self.last_transition = None;
                }
            }
        }

        self.slot.tick(ctx, agent);
    }

    fn on_interrupt(&mut self, ctx: &TickContext, agent: &mut A, winner: &dyn Chain<A>) {
        if self.config.stop_on_interrupt {
            self.slot.clear(ctx, agent);
            self.last_transition = None;
        }
        self.replanner.on_interrupt(ctx, agent, winner);
    }
}
