use alloc::string::String;
use alloc::vec::Vec;

use folio::{Cursor, Emphasis, Frame};

use crate::{Applied, CarouselSurface, PageSurface};

/// A single property update on a carousel surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Patch {
    TrackOffset(i64),
    TrackCursor(Cursor),
    PrevDisabled(bool),
    NextDisabled(bool),
    IndicatorCount(usize),
    IndicatorActive { index: usize, active: bool },
    CardEmphasis { index: usize, emphasis: Emphasis },
}

impl Patch {
    /// Returns `false` when the surface lacks the targeted element.
    pub fn apply<S: CarouselSurface + ?Sized>(&self, surface: &mut S) -> bool {
        match *self {
            Self::TrackOffset(px) => surface.set_track_offset(px),
            Self::TrackCursor(cursor) => surface.set_track_cursor(cursor),
            Self::PrevDisabled(disabled) => surface.set_prev_disabled(disabled),
            Self::NextDisabled(disabled) => surface.set_next_disabled(disabled),
            Self::IndicatorCount(count) => surface.set_indicator_count(count),
            Self::IndicatorActive { index, active } => surface.set_indicator_active(index, active),
            Self::CardEmphasis { index, emphasis } => surface.set_card_emphasis(index, emphasis),
        }
    }
}

/// A property update on a page surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagePatch {
    Carousel(Patch),
    TabActive { name: String, active: bool },
    PanelActive { name: String, active: bool },
    ScrollIntoView(String),
}

impl PagePatch {
    pub fn apply<S: PageSurface + ?Sized>(&self, surface: &mut S) -> bool {
        match self {
            Self::Carousel(patch) => patch.apply(surface),
            Self::TabActive { name, active } => surface.set_tab_active(name, *active),
            Self::PanelActive { name, active } => surface.set_panel_active(name, *active),
            Self::ScrollIntoView(id) => surface.scroll_into_view(id),
        }
    }
}

/// Pushes patches in order, skipping (and counting) updates whose element is missing.
pub fn apply_patches<S: CarouselSurface + ?Sized>(patches: &[Patch], surface: &mut S) -> Applied {
    let mut out = Applied::default();
    for patch in patches {
        let ok = patch.apply(surface);
        if !ok {
            atrace!(?patch, "element missing, update skipped");
        }
        out.record(ok);
    }
    out
}

pub fn apply_page_patches<S: PageSurface + ?Sized>(
    patches: &[PagePatch],
    surface: &mut S,
) -> Applied {
    let mut out = Applied::default();
    for patch in patches {
        let ok = patch.apply(surface);
        if !ok {
            atrace!(?patch, "element missing, update skipped");
        }
        out.record(ok);
    }
    out
}

/// Appends to `out` the patches that turn `prev` into `next`.
///
/// With `prev = None` every property of `next` is emitted, including the indicator count.
pub fn diff_frames(prev: Option<&Frame>, next: &Frame, out: &mut Vec<Patch>) {
    let Some(prev) = prev else {
        full_frame(next, out);
        return;
    };

    if prev.translate_x != next.translate_x {
        out.push(Patch::TrackOffset(next.translate_x));
    }
    if prev.cursor != next.cursor {
        out.push(Patch::TrackCursor(next.cursor));
    }
    if prev.prev_disabled != next.prev_disabled {
        out.push(Patch::PrevDisabled(next.prev_disabled));
    }
    if prev.next_disabled != next.next_disabled {
        out.push(Patch::NextDisabled(next.next_disabled));
    }

    if prev.indicator_count != next.indicator_count {
        push_indicators(next, out);
    } else if prev.active_indicator != next.active_indicator {
        if let Some(index) = prev.active_indicator {
            out.push(Patch::IndicatorActive {
                index,
                active: false,
            });
        }
        if let Some(index) = next.active_indicator {
            out.push(Patch::IndicatorActive {
                index,
                active: true,
            });
        }
    }

    if prev.cards.len() != next.cards.len() {
        push_cards(next, out);
        return;
    }
    for (index, (before, after)) in prev.cards.iter().zip(&next.cards).enumerate() {
        if before != after {
            out.push(Patch::CardEmphasis {
                index,
                emphasis: *after,
            });
        }
    }
}

fn full_frame(frame: &Frame, out: &mut Vec<Patch>) {
    out.push(Patch::TrackOffset(frame.translate_x));
    out.push(Patch::TrackCursor(frame.cursor));
    out.push(Patch::PrevDisabled(frame.prev_disabled));
    out.push(Patch::NextDisabled(frame.next_disabled));
    push_indicators(frame, out);
    push_cards(frame, out);
}

fn push_indicators(frame: &Frame, out: &mut Vec<Patch>) {
    out.push(Patch::IndicatorCount(frame.indicator_count));
    for index in 0..frame.indicator_count {
        out.push(Patch::IndicatorActive {
            index,
            active: frame.is_indicator_active(index),
        });
    }
}

fn push_cards(frame: &Frame, out: &mut Vec<Patch>) {
    out.extend(
        frame
            .cards
            .iter()
            .enumerate()
            .map(|(index, &emphasis)| Patch::CardEmphasis { index, emphasis }),
    );
}
