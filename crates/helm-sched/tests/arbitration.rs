use helm_core::{AgentCtl, AgentView, TickContext};
use helm_sched::{Chain, Priority, Scheduler};

#[derive(Default)]
struct Rig {
    log: Vec<String>,
    danger: bool,
    hunger: u32,
    has_goal: bool,
}

impl AgentView for Rig {}
impl AgentCtl for Rig {}

fn ctx(tick: u64) -> TickContext {
    TickContext::new(tick, 0.05)
}

/// Fixed-priority concern whose activity is read off the rig each tick.
struct Concern {
    name: &'static str,
    priority: Priority,
    active: fn(&Rig) -> bool,
}

impl Chain<Rig> for Concern {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_active(&mut self, _ctx: &TickContext, agent: &Rig) -> bool {
        (self.active)(agent)
    }

    fn priority(&mut self, _ctx: &TickContext, _agent: &Rig) -> Priority {
        self.priority
    }

    fn tick(&mut self, _ctx: &TickContext, agent: &mut Rig) {
        agent.log.push(format!("tick:{}", self.name));
    }

    fn on_interrupt(&mut self, _ctx: &TickContext, agent: &mut Rig, winner: &dyn Chain<Rig>) {
        agent.log.push(format!("interrupt:{}:{}", self.name, winner.name()));
    }
}

fn goal_chain() -> Box<Concern> {
    Box::new(Concern {
        name: "goal",
        priority: Priority::ROUTINE,
        active: |rig| rig.has_goal,
    })
}

fn danger_chain() -> Box<Concern> {
    Box::new(Concern {
        name: "danger",
        priority: Priority::HAZARD,
        active: |rig| rig.danger,
    })
}

#[test]
fn highest_priority_active_chain_wins() {
    let mut rig = Rig {
        has_goal: true,
        ..Rig::default()
    };
    let mut sched: Scheduler<Rig> = Scheduler::new();
    sched.register(goal_chain());
    sched.register(danger_chain());

    sched.tick(&ctx(0), &mut rig);
    rig.danger = true;
    sched.tick(&ctx(1), &mut rig);

    assert_eq!(
        rig.log,
        vec!["tick:goal", "interrupt:goal:danger", "tick:danger"]
    );
}

#[test]
fn ties_break_by_registration_order() {
    let mut rig = Rig {
        has_goal: true,
        ..Rig::default()
    };
    let mut sched: Scheduler<Rig> = Scheduler::new();
    sched.register(Box::new(Concern {
        name: "first",
        priority: Priority::ROUTINE,
        active: |rig| rig.has_goal,
    }));
    sched.register(Box::new(Concern {
        name: "second",
        priority: Priority::ROUTINE,
        active: |rig| rig.has_goal,
    }));

    for tick in 0..4u64 {
        sched.tick(&ctx(tick), &mut rig);
    }

    assert_eq!(rig.log, vec!["tick:first"; 4]);
}

#[test]
fn no_active_chain_means_no_tick_and_no_interrupt() {
    let mut rig = Rig {
        has_goal: true,
        ..Rig::default()
    };
    let mut sched: Scheduler<Rig> = Scheduler::new();
    sched.register(goal_chain());
    sched.register(danger_chain());

    sched.tick(&ctx(0), &mut rig);
    rig.has_goal = false;
    sched.tick(&ctx(1), &mut rig);
    // The winner reference was cleared on the idle tick: regaining activity
    // later does not synthesize an interrupt.
    rig.has_goal = true;
    sched.tick(&ctx(2), &mut rig);

    assert_eq!(rig.log, vec!["tick:goal", "tick:goal"]);
    assert!(sched.active_chain().is_some());
}

/// Urgency grows with hunger; nothing is cached between ticks.
struct Appetite;

impl Chain<Rig> for Appetite {
    fn name(&self) -> &'static str {
        "appetite"
    }

    fn is_active(&mut self, _ctx: &TickContext, agent: &Rig) -> bool {
        agent.hunger > 0
    }

    fn priority(&mut self, _ctx: &TickContext, agent: &Rig) -> Priority {
        Priority(agent.hunger)
    }

    fn tick(&mut self, _ctx: &TickContext, agent: &mut Rig) {
        agent.log.push("tick:appetite".into());
    }
}

#[test]
fn priority_is_recomputed_fresh_every_tick() {
    let mut rig = Rig {
        has_goal: true,
        hunger: 10,
        ..Rig::default()
    };
    let mut sched: Scheduler<Rig> = Scheduler::new();
    sched.register(goal_chain());
    sched.register(Box::new(Appetite));

    sched.tick(&ctx(0), &mut rig);
    rig.hunger = 60;
    sched.tick(&ctx(1), &mut rig);
    rig.hunger = 10;
    sched.tick(&ctx(2), &mut rig);

    assert_eq!(
        rig.log,
        vec![
            "tick:goal",
            "interrupt:goal:appetite",
            "tick:appetite",
            "tick:goal",
        ]
    );
}
