use crate::{Cursor, Swipe};

/// State of the two-event drag recognizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start_x: i32,
    },
}

/// Press/release drag recognizer.
///
/// The displayed window does not follow the pointer: a drag is only classified on release,
/// by comparing the release coordinate against the press coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragGesture {
    state: DragState,
    threshold: u32,
}

impl DragGesture {
    pub fn new(threshold: u32) -> Self {
        Self {
            state: DragState::Idle,
            threshold,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    /// Pointer pressed over the track. A second press restarts the drag.
    pub fn press(&mut self, x: i32) {
        self.state = DragState::Dragging { start_x: x };
    }

    /// Pointer moved over the track. The coordinate is not tracked: the window only moves on
    /// release.
    ///
    /// Returns `true` when the platform's default drag behavior must be suppressed.
    pub fn pointer_move(&self, _x: i32) -> bool {
        self.is_dragging()
    }

    /// Pointer released over the track.
    pub fn release(&mut self, x: i32) -> Option<Swipe> {
        let DragState::Dragging { start_x } = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        self.classify(start_x, x)
    }

    /// Pointer left the track: abandon the drag without navigating.
    ///
    /// Returns `true` if a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    fn classify(&self, start_x: i32, end_x: i32) -> Option<Swipe> {
        let delta = end_x as i64 - start_x as i64;
        if delta.unsigned_abs() <= self.threshold as u64 {
            return None;
        }
        if delta > 0 {
            Some(Swipe::Backward)
        } else {
            Some(Swipe::Forward)
        }
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(crate::DEFAULT_DRAG_THRESHOLD)
    }
}
