use folio::{Cursor, Emphasis};

/// The visual collaborators of a carousel: track, previous/next controls, indicators, cards.
///
/// Every setter returns whether the targeted element exists. Returning `false` means the update
/// was skipped; the controller keeps navigating and pushes the remaining updates.
pub trait CarouselSurface {
    /// Applies a horizontal translation (pixels) to the track.
    fn set_track_offset(&mut self, translate_x: i64) -> bool;

    fn set_track_cursor(&mut self, cursor: Cursor) -> bool;

    fn set_prev_disabled(&mut self, disabled: bool) -> bool;

    fn set_next_disabled(&mut self, disabled: bool) -> bool;

    /// Replaces the indicator container's content with `count` inactive indicators.
    fn set_indicator_count(&mut self, count: usize) -> bool;

    fn set_indicator_active(&mut self, index: usize, active: bool) -> bool;

    fn set_card_emphasis(&mut self, index: usize, emphasis: Emphasis) -> bool;
}

/// A whole page: the carousel plus tab headers, content panels and scrolling.
pub trait PageSurface: CarouselSurface {
    fn set_tab_active(&mut self, name: &str, active: bool) -> bool;

    fn set_panel_active(&mut self, name: &str, active: bool) -> bool;

    /// Brings the element with this id into view.
    fn scroll_into_view(&mut self, id: &str) -> bool;
}

/// Outcome of pushing a batch of patches to a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Applied {
    pub applied: usize,
    /// Updates whose target element was missing.
    pub skipped: usize,
}

impl Applied {
    pub(crate) fn record(&mut self, ok: bool) {
        if ok {
            self.applied += 1;
        } else {
            self.skipped += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.applied + self.skipped
    }

    pub fn merge(self, other: Applied) -> Applied {
        Applied {
            applied: self.applied + other.applied,
            skipped: self.skipped + other.skipped,
        }
    }
}
