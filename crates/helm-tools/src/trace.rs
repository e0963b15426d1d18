#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A small, allocation-friendly record of one scheduling decision.
///
/// This is intentionally "dumb data" so it can be recorded during a live
/// run and rendered later by tooling; subsystems wanting richer events
/// should define their own on top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    /// Name of the chain the event concerns, empty when not applicable.
    pub chain: Cow<'static, str>,
    pub value: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            chain: Cow::Borrowed(""),
            value: 0,
        }
    }

    pub fn with_chain(mut self, chain: impl Into<Cow<'static, str>>) -> Self {
        self.chain = chain.into();
        self
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Nullable sink handle embedded in the runtime types that emit.
///
/// Tracing is off by default and costs one branch per would-be event.
#[derive(Default)]
pub struct Tracer {
    sink: Option<Box<dyn TraceSink>>,
}

impl Tracer {
    pub fn off() -> Self {
        Self { sink: None }
    }

    pub fn to(sink: Box<dyn TraceSink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.emit(event);
        }
    }
}
