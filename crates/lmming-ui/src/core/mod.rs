//! Core, DOM-free primitives for the selection gate.
pub mod lifecycle;
pub mod markers;
pub mod selection;
pub mod tooltip;
