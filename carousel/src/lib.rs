//! A headless infinite-scrolling carousel engine.
//!
//! For a background-thread auto-scroll driver, see the `carousel-adapter` crate.
//!
//! This crate focuses on the state that makes a paging carousel appear to loop forever: the
//! tripled index space and its physical ↔ logical mapping, the drag-phase state machine that
//! rewraps the position only while the surface is at rest, and a cancellable auto-scroll task
//! gated by user interaction, app lifecycle and configuration.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the number of child items
//! - scroll gesture phases (idle / interacting / decelerating)
//! - app foreground/background transitions
//! - the current time, for auto-scroll ticks
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod auto_scroll;
mod carousel;
mod dots;
pub mod index;
mod options;
mod position;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use auto_scroll::{
    AutoScrollConfig, AutoScrollController, AutoScrollTask, AutoScrollUpdate, CancellationToken,
    DEFAULT_PAUSE_DURATION_MS, RunStateChange,
};
pub use carousel::Carousel;
pub use dots::{Dot, DotsIndicator};
pub use index::{index_space, logical_index, physical_index_for_logical, rewrap};
pub use options::{CarouselOptions, OnChangeCallback, OnPageChangeCallback};
pub use position::{PhaseTransition, PositionModel};
pub use state::CarouselState;
pub use types::{AppPhase, CarouselItem, DragPhase, ScrollDirection};
