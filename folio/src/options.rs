use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::carousel::Carousel;

/// Default number of cards shown at once.
pub const DEFAULT_VISIBLE_COUNT: usize = 3;
/// Default pixel pitch of one card (card width plus gap).
pub const DEFAULT_CARD_WIDTH: u32 = 300;
/// Default horizontal distance a drag must exceed to navigate.
pub const DEFAULT_DRAG_THRESHOLD: u32 = 50;

/// Tabs recognized by the default portfolio page.
pub const DEFAULT_TABS: [&str; 3] = ["projects", "certificates", "techstack"];
/// Id of the page section holding the tabs.
pub const DEFAULT_SECTION: &str = "portfolio";

/// A callback fired after every carousel state change (the "render" step).
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Values are fixed at construction. The type is cheap to clone: the callback lives in an `Arc`.
pub struct CarouselOptions {
    pub card_count: usize,
    /// Cards shown simultaneously. `0` is treated as `1`.
    pub visible_count: usize,
    /// Pixel pitch per card, including the gap.
    pub card_width: u32,
    /// A drag navigates only when `|release_x - press_x|` is strictly greater than this.
    pub drag_threshold: u32,
    /// Starting index, clamped into `[0, max_index]`.
    pub initial_index: usize,
    /// Optional callback fired when the carousel re-renders.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            card_count: self.card_count,
            visible_count: self.visible_count,
            card_width: self.card_width,
            drag_threshold: self.drag_threshold,
            initial_index: self.initial_index,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            visible_count: DEFAULT_VISIBLE_COUNT,
            card_width: DEFAULT_CARD_WIDTH,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            initial_index: 0,
            on_change: None,
        }
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count;
        self
    }

    pub fn with_card_width(mut self, card_width: u32) -> Self {
        self.card_width = card_width;
        self
    }

    pub fn with_drag_threshold(mut self, drag_threshold: u32) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("card_count", &self.card_count)
            .field("visible_count", &self.visible_count)
            .field("card_width", &self.card_width)
            .field("drag_threshold", &self.drag_threshold)
            .field("initial_index", &self.initial_index)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::Portfolio`].
#[derive(Clone, Debug)]
pub struct PortfolioOptions {
    /// Tab names in display order; the first one starts active.
    pub tabs: Vec<String>,
    /// Id of the section scrolled into view on a deep link.
    pub section: String,
    pub carousel: CarouselOptions,
}

impl PortfolioOptions {
    /// Default page layout (`projects`, `certificates`, `techstack` under `#portfolio`) with a
    /// carousel of `card_count` cards.
    pub fn new(card_count: usize) -> Self {
        Self {
            tabs: DEFAULT_TABS.iter().map(|t| String::from(*t)).collect(),
            section: String::from(DEFAULT_SECTION),
            carousel: CarouselOptions::new(card_count),
        }
    }

    pub fn with_tabs<I, S>(mut self, tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tabs = tabs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_carousel(mut self, carousel: CarouselOptions) -> Self {
        self.carousel = carousel;
        self
    }
}
