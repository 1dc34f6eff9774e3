//! Library crate for the policy-atlas service: configuration, telemetry,
//! error surface, and the research-to-policy workflow modules. The ranking
//! engine under [`workflows::rankings`] is a pure, synchronous computation;
//! everything else here is the service plumbing around it.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
