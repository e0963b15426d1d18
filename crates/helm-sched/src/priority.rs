#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coarse urgency tier of a chain, recomputed fresh every tick.
///
/// Deliberately an integer tier rather than a fine-grained score: chains
/// compete by concern *class*, and the named constants give the classes a
/// total order with room between them. Ties break by registration order in
/// the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Priority(pub u32);

impl Priority {
    /// Basement tier for chains that stay selectable but yield to any real
    /// concern (e.g. an idle wander).
    pub const IDLE: Self = Self(0);
    /// An ordinary goal the agent is working toward.
    pub const ROUTINE: Self = Self(50);
    /// A periodic need (eat, restock, repair) that outranks routine work.
    pub const NEED: Self = Self(55);
    /// An environmental hazard demanding a response.
    pub const HAZARD: Self = Self(100);
    /// Imminent-death tier; preempts everything, every tick.
    pub const EMERGENCY: Self = Self(1000);
}
