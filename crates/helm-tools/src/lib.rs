//! Tooling primitives for deterministic behavior control (tracing/debug).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{TraceEvent, TraceLog, TraceSink, Tracer, VecTraceSink};
