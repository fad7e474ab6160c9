//! Controller layer: button command queue and the events produced by applying it.

pub mod events;
pub mod orchestration;
