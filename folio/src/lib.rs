//! Headless behavior for a portfolio page: a sliding card carousel, tab switching between
//! content panels, and hash deep links into a tab.
//!
//! For binding frames onto a rendering surface, see the `folio-adapter` crate.
//!
//! Nothing here touches a UI. A page/TUI/GUI layer is expected to:
//! - forward input events (control clicks, indicator clicks, pointer press/move/release/leave)
//! - forward the location hash on load and on every change
//! - draw the [`Frame`] projected after each state change
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod error;
mod gesture;
mod options;
mod portfolio;
mod route;
mod tabs;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use error::{RouteError, TabError};
pub use gesture::{DragGesture, DragState};
pub use options::{
    CarouselOptions, DEFAULT_CARD_WIDTH, DEFAULT_DRAG_THRESHOLD, DEFAULT_SECTION, DEFAULT_TABS,
    DEFAULT_VISIBLE_COUNT, OnChangeCallback, PortfolioOptions,
};
pub use portfolio::Portfolio;
pub use route::{HashRouter, parse_hash};
pub use tabs::TabSet;
pub use types::{Cursor, DeepLink, Emphasis, Frame, Input, Response, Swipe, Window};
