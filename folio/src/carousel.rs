use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::gesture::DragGesture;
use crate::{CarouselOptions, Cursor, Emphasis, Frame, Input, Response, Swipe, Window};

/// A headless card carousel.
///
/// The carousel owns a single integer, `current_index`: the first card of the visible window.
/// It always stays within `[0, max_index]` where `max_index = max(0, card_count - visible_count)`.
/// Navigation saturates at both ends; it never wraps and never fails.
///
/// This type does not hold any UI objects:
/// - Adapters feed it input through [`Carousel::handle`] (or the individual operations).
/// - Rendering is exposed as a pure projection, [`Carousel::frame`].
/// - `on_change` fires after every state change, which is where an adapter re-renders.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    visible_count: usize,
    max_index: usize,
    current_index: usize,
    drag: DragGesture,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Self {
        let visible_count = if options.visible_count == 0 {
            fwarn!("Carousel::new: visible_count is 0, using 1");
            1
        } else {
            options.visible_count
        };
        let max_index = options.card_count.saturating_sub(visible_count);
        let current_index = options.initial_index.min(max_index);
        fdebug!(
            card_count = options.card_count,
            visible_count,
            card_width = options.card_width,
            max_index,
            "Carousel::new"
        );
        Self {
            visible_count,
            max_index,
            current_index,
            drag: DragGesture::new(options.drag_threshold),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn card_count(&self) -> usize {
        self.options.card_count
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn card_width(&self) -> u32 {
        self.options.card_width
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of indicators: `ceil(card_count / visible_count)`.
    pub fn page_count(&self) -> usize {
        self.options.card_count.div_ceil(self.visible_count)
    }

    /// The page containing `current_index`.
    pub fn current_page(&self) -> usize {
        self.current_index / self.visible_count
    }

    /// Start index addressed by a page (indicator) before clamping.
    pub fn page_start(&self, page: usize) -> usize {
        page.saturating_mul(self.visible_count)
    }

    pub fn can_advance(&self) -> bool {
        self.current_index < self.max_index
    }

    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    /// Moves forward by one card. Returns `false` (and does nothing) at the last window.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_index += 1;
        ftrace!(current_index = self.current_index, "Carousel::advance");
        self.notify();
        true
    }

    /// Moves back by one card. Returns `false` (and does nothing) at the first window.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current_index -= 1;
        ftrace!(current_index = self.current_index, "Carousel::retreat");
        self.notify();
        true
    }

    /// Sets `current_index` to `target` clamped into `[0, max_index]` and re-renders.
    ///
    /// Re-renders even when the index does not change. Returns the applied index.
    pub fn jump_to(&mut self, target: isize) -> usize {
        let target = usize::try_from(target).unwrap_or(0);
        self.jump_to_index(target)
    }

    /// Unsigned variant of [`Carousel::jump_to`].
    pub fn jump_to_index(&mut self, target: usize) -> usize {
        self.current_index = self.clamp_index(target);
        ftrace!(target, current_index = self.current_index, "Carousel::jump_to");
        self.notify();
        self.current_index
    }

    /// Jumps to the first card of `page`; this is what an indicator click does.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        if page >= self.page_count() {
            fwarn!(page, page_count = self.page_count(), "Carousel::go_to_page: no such indicator");
        }
        self.jump_to_index(self.page_start(page))
    }

    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.max_index)
    }

    /// Applies a recognized swipe: backward retreats, forward advances.
    pub fn swipe(&mut self, swipe: Swipe) -> bool {
        match swipe {
            Swipe::Backward => self.retreat(),
            Swipe::Forward => self.advance(),
        }
    }

    pub fn drag(&self) -> &DragGesture {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn cursor(&self) -> Cursor {
        self.drag.cursor()
    }

    pub fn pointer_down(&mut self, x: i32) {
        let was_dragging = self.drag.is_dragging();
        self.drag.press(x);
        ftrace!(x, "Carousel::pointer_down");
        if !was_dragging {
            self.notify();
        }
    }

    /// Returns `true` when the platform's default drag behavior must be suppressed.
    pub fn pointer_move(&self, x: i32) -> bool {
        self.drag.pointer_move(x)
    }

    /// Completes a drag. Returns `true` if it navigated.
    pub fn pointer_up(&mut self, x: i32) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        let mut navigated = false;
        self.batch_update(|c| {
            let swipe = c.drag.release(x);
            ftrace!(x, ?swipe, "Carousel::pointer_up");
            c.notify();
            if let Some(swipe) = swipe {
                navigated = c.swipe(swipe);
            }
        });
        navigated
    }

    /// The pointer left the track: cancel any drag without navigating.
    pub fn pointer_leave(&mut self) {
        if self.drag.cancel() {
            ftrace!("Carousel::pointer_leave: drag cancelled");
            self.notify();
        }
    }

    /// Single entry point for adapters.
    pub fn handle(&mut self, input: Input) -> Response {
        match input {
            Input::PrevClicked => Response {
                navigated: self.retreat(),
                prevent_default: false,
            },
            Input::NextClicked => Response {
                navigated: self.advance(),
                prevent_default: false,
            },
            Input::IndicatorClicked(page) => {
                let before = self.current_index;
                let after = self.go_to_page(page);
                Response {
                    navigated: before != after,
                    prevent_default: false,
                }
            }
            Input::PointerDown { x } => {
                self.pointer_down(x);
                Response::default()
            }
            Input::PointerMove { x } => Response {
                navigated: false,
                prevent_default: self.pointer_move(x),
            },
            Input::PointerUp { x } => Response {
                navigated: self.pointer_up(x),
                prevent_default: false,
            },
            Input::PointerLeave => {
                self.pointer_leave();
                Response::default()
            }
        }
    }

    /// The emphasized window `[current_index, current_index + visible_count)`.
    pub fn window(&self) -> Window {
        Window {
            start_index: self.current_index,
            end_index: self.current_index.saturating_add(self.visible_count),
        }
    }

    /// Horizontal translation of the track in pixels.
    pub fn translate_x(&self) -> i64 {
        -(self.current_index as i64).saturating_mul(self.options.card_width as i64)
    }

    pub fn is_emphasized(&self, index: usize) -> bool {
        index < self.options.card_count && self.window().contains(index)
    }

    pub fn emphasis(&self, index: usize) -> Emphasis {
        Emphasis::from_visible(self.is_emphasized(index))
    }

    /// Calls `f(index, emphasis)` for every card, in order, without allocating.
    pub fn for_each_card(&self, mut f: impl FnMut(usize, Emphasis)) {
        let window = self.window();
        for index in 0..self.options.card_count {
            f(index, Emphasis::from_visible(window.contains(index)));
        }
    }

    pub fn active_indicator(&self) -> Option<usize> {
        let page = self.current_page();
        (page < self.page_count()).then_some(page)
    }

    /// Projects the current state onto its visual collaborators.
    pub fn frame(&self) -> Frame {
        let mut cards = Vec::with_capacity(self.options.card_count);
        self.for_each_card(|_, emphasis| cards.push(emphasis));
        Frame {
            translate_x: self.translate_x(),
            cursor: self.cursor(),
            prev_disabled: self.current_index == 0,
            next_disabled: self.current_index == self.max_index,
            indicator_count: self.page_count(),
            active_indicator: self.active_indicator(),
            window: self.window(),
            cards,
        }
    }
}
