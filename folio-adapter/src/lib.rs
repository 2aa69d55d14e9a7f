//! Surface binding utilities for the `folio` crate.
//!
//! The `folio` crate is UI-agnostic and only projects its state into [`folio::Frame`]s. This
//! crate provides the small, framework-neutral pieces an adapter needs to draw them:
//!
//! - Surface traits describing the visual collaborators (track, controls, indicators, cards,
//!   tabs, panels)
//! - Frame diffing into minimal property patches
//! - Controllers that dispatch input and keep a surface in sync
//! - CSS renderings of frame values
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod patch;
pub mod style;
mod surface;


pub use controller::{CarouselController, PageController};
pub use patch::{PagePatch, Patch, apply_page_patches, apply_patches, diff_frames};
pub use surface::{Applied, CarouselSurface, PageSurface};
