use crate::{AgentCtl, StopReason, Task, TaskStatus, TickContext};

/// What [`TaskSlot::propose`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The slot was empty; the candidate was installed.
    Started,
    /// The candidate was equal to the running task; the running instance was
    /// left untouched and the candidate dropped.
    Continued,
    /// The running task was stopped (`Superseded`) and the candidate
    /// installed in its place.
    Replaced,
    /// The running task refused the candidate via `should_force`; the
    /// candidate was dropped.
    Vetoed,
}

struct Running<A>
where
    A: AgentCtl + 'static,
{
    task: Box<dyn Task<A>>,
    status: TaskStatus,
    child: Box<TaskSlot<A>>,
}

impl<A> Running<A>
where
    A: AgentCtl + 'static,
{
    fn fresh(task: Box<dyn Task<A>>) -> Self {
        Self {
            task,
            status: TaskStatus::NotStarted,
            child: Box::new(TaskSlot::new()),
        }
    }
}

/// Engine-owned cell holding at most one running task.
///
/// The slot is the only code that calls a task's start/tick/stop hooks, and
/// it guarantees the lifecycle contract: start fires at most once between a
/// stop and the next start, stop fires exactly once per start, and a
/// candidate equal to the running task never restarts it.
///
/// Delegation is slots all the way down: each running task owns a child
/// slot, and a nomination from [`Task::tick`] is routed through
/// [`TaskSlot::propose`] on that child slot before the child is driven.
pub struct TaskSlot<A>
where
    A: AgentCtl + 'static,
{
    current: Option<Running<A>>,
    starts: u64,
    stops: u64,
    vetoes: u64,
}

impl<A> Default for TaskSlot<A>
where
    A: AgentCtl + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TaskSlot<A>
where
    A: AgentCtl + 'static,
{
    pub fn new() -> Self {
        Self {
            current: None,
            starts: 0,
            stops: 0,
            vetoes: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn status(&self) -> Option<TaskStatus> {
        self.current.as_ref().map(|run| run.status)
    }

    pub fn current(&self) -> Option<&dyn Task<A>> {
        self.current.as_ref().map(|run| run.task.as_ref())
    }

    /// The child slot of the current task, when one is running.
    pub fn child(&self) -> Option<&TaskSlot<A>> {
        self.current.as_ref().map(|run| run.child.as_ref())
    }

    /// Start hooks fired over this slot's lifetime.
    pub fn starts(&self) -> u64 {
        self.starts
    }

    /// Stop hooks fired over this slot's lifetime.
    pub fn stops(&self) -> u64 {
        self.stops
    }

    /// Candidates refused by a running task's `should_force`.
    pub fn vetoes(&self) -> u64 {
        self.vetoes
    }

    /// Debug rendering of the delegation chain, e.g. `gather > mine > goto`.
    pub fn breadcrumb(&self) -> String {
        let mut out = String::new();
        let mut slot = self;
        while let Some(run) = slot.current.as_ref() {
            if !out.is_empty() {
                out.push_str(" > ");
            }
            out.push_str(run.task.name());
            slot = run.child.as_ref();
        }
        out
    }

    /// Resolve a candidate against whatever is running.
    ///
    /// Order of precedence: equality continuity (keep the running instance,
    /// drop the candidate), force-veto (running task refuses this specific
    /// successor), otherwise stop the incumbent with
    /// [`StopReason::Superseded`] and install the candidate. The candidate
    /// is not ticked here; drive the slot afterwards.
    pub fn propose(
        &mut self,
        ctx: &TickContext,
        agent: &mut A,
        candidate: Box<dyn Task<A>>,
    ) -> Transition {
        if let Some(run) = self.current.as_ref() {
            if run.task.is_equal(candidate.as_ref()) {
                return Transition::Continued;
            }
            if run.status == TaskStatus::Running && run.task.should_force(candidate.as_ref()) {
                self.vetoes += 1;
                return Transition::Vetoed;
            }
        }

        let replaced = self.current.is_some();
        if replaced {
            self.stop_current(ctx, agent, StopReason::Superseded(candidate.as_ref()));
        }
        self.current = Some(Running::fresh(candidate));
        if replaced {
            Transition::Replaced
        } else {
            Transition::Started
        }
    }

    /// Stop and discard the current task (and its subtree) with
    /// [`StopReason::Canceled`]. No-op on an empty slot.
    pub fn clear(&mut self, ctx: &TickContext, agent: &mut A) {
        self.stop_current(ctx, agent, StopReason::Canceled);
    }

    /// Drive the current task for one tick: fire the start hook if needed,
    /// run the step function, resolve the nominated child against the child
    /// slot and drive it, then apply the terminal predicate and discard a
    /// finished task with [`StopReason::Finished`].
    pub fn tick(&mut self, ctx: &TickContext, agent: &mut A) {
        let Some(run) = self.current.as_mut() else {
            return;
        };

        if run.status != TaskStatus::Running {
            run.task.start(ctx, agent);
            run.status = TaskStatus::Running;
            self.starts += 1;
        }

        match run.task.tick(ctx, agent) {
            Some(candidate) => {
                run.child.propose(ctx, agent, candidate);
                run.child.tick(ctx, agent);
            }
            // The step acted directly this tick; the child slot is
            // reclaimed.
            None => run.child.clear(ctx, agent),
        }

        if run.task.is_finished(ctx, agent) {
            self.stop_current(ctx, agent, StopReason::Finished);
        }
    }

    /// Teardown is child-first (reverse of start order), with the same
    /// reason propagated through the subtree.
    fn stop_current(&mut self, ctx: &TickContext, agent: &mut A, reason: StopReason<'_, A>) {
        let Some(mut run) = self.current.take() else {
            return;
        };

        run.child.stop_current(ctx, agent, reason);
        if run.status == TaskStatus::Running {
            run.task.stop(ctx, agent, reason);
            run.status = TaskStatus::Stopped;
            self.stops += 1;
        }
    }
}
