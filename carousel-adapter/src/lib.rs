//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and time-agnostic: it takes `now_ms` and leaves the
//! scheduling of auto-scroll ticks to its caller. This crate provides the std side of that
//! contract:
//!
//! - A monotonic [`Clock`]
//! - An [`AutoScrollWorker`] that runs one auto-scroll task on a background thread, guarded by the
//!   task's cancellation token
//! - A [`Controller`] that owns a carousel behind a mutex and keeps the worker in step with its
//!   run state
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod clock;
mod controller;
mod worker;


pub use clock::Clock;
pub use controller::Controller;
pub use worker::AutoScrollWorker;
