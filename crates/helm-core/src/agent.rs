/// Read-only agent and environment queries.
///
/// The core crate intentionally does not prescribe which queries an agent
/// embedding must expose; position, vitals, inventory, block lookup and the
/// like belong in extension traits defined by the behavior catalog that
/// needs them.
pub trait AgentView {}

/// Actuation surface layered on the query surface.
///
/// Leaf tasks mutate movement intent, look direction, held item and action
/// flags through this. The one-active-chain / one-current-task invariant in
/// `helm-sched` guarantees a single task subtree holds `&mut` access at any
/// instant, so embeddings need no interior locking.
pub trait AgentCtl: AgentView {}
