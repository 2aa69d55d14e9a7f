use alloc::vec::Vec;

/// Visual treatment of a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Emphasis {
    /// Inside the visible window: full opacity, full scale.
    Emphasized,
    /// Outside the visible window: dimmed and slightly shrunk.
    DeEmphasized,
}

impl Emphasis {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Emphasized
        } else {
            Self::DeEmphasized
        }
    }

    pub fn is_emphasized(self) -> bool {
        matches!(self, Self::Emphasized)
    }

    pub fn opacity(self) -> f32 {
        match self {
            Self::Emphasized => 1.0,
            Self::DeEmphasized => 0.7,
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            Self::Emphasized => 1.0,
            Self::DeEmphasized => 0.9,
        }
    }
}

/// Pointer cursor shown over the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    #[default]
    Grab,
    Grabbing,
}

/// Direction recognized from a completed drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Swipe {
    /// Dragged right: go back one card.
    Backward,
    /// Dragged left: go forward one card.
    Forward,
}

/// The run of cards currently emphasized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive, may exceed the card count
}

impl Window {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }
}

/// Input events understood by [`crate::Carousel::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    PrevClicked,
    NextClicked,
    IndicatorClicked(usize),
    PointerDown { x: i32 },
    PointerMove { x: i32 },
    PointerUp { x: i32 },
    PointerLeave,
}

/// What the adapter should do after an input was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    /// `current_index` changed.
    pub navigated: bool,
    /// The platform's default action for the event (native drag) must be suppressed.
    pub prevent_default: bool,
}

/// A pure projection of the carousel state onto its visual collaborators.
///
/// Adapters bind this record to real visual properties; see the `folio-adapter` crate for a
/// diffing binder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Horizontal translation of the track, in pixels (zero or negative).
    pub translate_x: i64,
    pub cursor: Cursor,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub indicator_count: usize,
    /// `None` only when there are no indicators (no cards).
    pub active_indicator: Option<usize>,
    pub window: Window,
    pub cards: Vec<Emphasis>,
}

impl Frame {
    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.active_indicator == Some(index)
    }

    pub fn card(&self, index: usize) -> Option<Emphasis> {
        self.cards.get(index).copied()
    }
}

/// A resolved hash deep link.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeepLink {
    /// Tab to activate.
    pub tab: alloc::string::String,
    /// Element id to bring into view once the tab is active.
    pub scroll_target: alloc::string::String,
}
