use alloc::string::String;
use alloc::vec::Vec;

use folio::{
    Carousel, CarouselOptions, DeepLink, Frame, Input, Portfolio, PortfolioOptions, Response,
    TabError,
};

use crate::{
    Applied, CarouselSurface, PagePatch, PageSurface, Patch, apply_page_patches, apply_patches,
    diff_frames,
};

/// A framework-neutral controller that wraps a `folio::Carousel` and keeps a surface in sync.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` once, when the surface is ready (creates the indicators)
/// - `dispatch` for every input event
///
/// Only properties that changed since the last applied frame are pushed.
#[derive(Clone, Debug)]
pub struct CarouselController {
    carousel: Carousel,
    last: Option<Frame>,
    last_applied: Applied,
    scratch: Vec<Patch>,
}

impl CarouselController {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            carousel,
            last: None,
            last_applied: Applied::default(),
            scratch: Vec::new(),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Direct access for programmatic navigation; call `sync` afterwards.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    /// The last frame pushed to a surface, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.last.is_some()
    }

    /// Outcome of the most recent `mount`, `sync` or `dispatch`.
    pub fn last_applied(&self) -> Applied {
        self.last_applied
    }

    /// Writes the complete current frame, regardless of what was applied before.
    pub fn mount<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) -> Applied {
        self.last = None;
        let applied = self.sync(surface);
        adebug!(
            cards = self.carousel.card_count(),
            indicators = self.carousel.page_count(),
            skipped = applied.skipped,
            "CarouselController::mount"
        );
        applied
    }

    /// Pushes the difference between the last applied frame and the current state.
    pub fn sync<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) -> Applied {
        let next = self.carousel.frame();
        self.scratch.clear();
        diff_frames(self.last.as_ref(), &next, &mut self.scratch);
        let applied = apply_patches(&self.scratch, surface);
        self.last = Some(next);
        self.last_applied = applied;
        applied
    }

    /// Patches `sync` would push, without applying them.
    pub fn pending_patches(&self) -> Vec<Patch> {
        let mut out = Vec::new();
        diff_frames(self.last.as_ref(), &self.carousel.frame(), &mut out);
        out
    }

    /// Handles one input event and re-renders onto `surface`.
    pub fn dispatch<S: CarouselSurface + ?Sized>(
        &mut self,
        input: Input,
        surface: &mut S,
    ) -> Response {
        let response = self.carousel.handle(input);
        atrace!(?input, ?response, "CarouselController::dispatch");
        let applied = self.sync(surface);
        if applied.skipped > 0 {
            awarn!(
                skipped = applied.skipped,
                "CarouselController::dispatch: surface is missing elements"
            );
        }
        response
    }
}

/// Drives a whole [`Portfolio`] page: tabs, deep links and the carousel.
#[derive(Clone, Debug)]
pub struct PageController {
    page: Portfolio,
    carousel_frame: Option<Frame>,
    shown_tab: Option<String>,
    last_applied: Applied,
    scratch: Vec<PagePatch>,
}

impl PageController {
    pub fn new(options: PortfolioOptions) -> Self {
        Self::from_portfolio(Portfolio::new(options))
    }

    pub fn from_portfolio(page: Portfolio) -> Self {
        Self {
            page,
            carousel_frame: None,
            shown_tab: None,
            last_applied: Applied::default(),
            scratch: Vec::new(),
        }
    }

    pub fn page(&self) -> &Portfolio {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Portfolio {
        &mut self.page
    }

    /// Outcome of the most recent `mount`, `click_tab`, `hash_changed` or `dispatch`.
    pub fn last_applied(&self) -> Applied {
        self.last_applied
    }

    /// Page became ready: writes every tab, panel and carousel property, then applies the
    /// initial location hash.
    pub fn mount<S: PageSurface + ?Sized>(
        &mut self,
        initial_hash: &str,
        surface: &mut S,
    ) -> Applied {
        self.scratch.clear();
        for (name, active) in self.page.tabs().iter() {
            self.scratch.push(PagePatch::TabActive {
                name: String::from(name),
                active,
            });
            self.scratch.push(PagePatch::PanelActive {
                name: String::from(name),
                active,
            });
        }
        self.shown_tab = self.page.tabs().active().map(String::from);
        self.carousel_frame = None;
        self.push_carousel();
        let applied = apply_page_patches(&self.scratch, surface);
        if applied.skipped > 0 {
            awarn!(
                skipped = applied.skipped,
                "PageController::mount: surface is missing elements"
            );
        }
        adebug!(applied = applied.applied, "PageController::mount");
        let (_, routed) = self.hash_changed(initial_hash, surface);
        self.last_applied = applied.merge(routed);
        self.last_applied
    }

    /// A tab header was clicked.
    pub fn click_tab<S: PageSurface + ?Sized>(
        &mut self,
        name: &str,
        surface: &mut S,
    ) -> Result<Applied, TabError> {
        self.page.click_tab(name)?;
        self.scratch.clear();
        self.push_tabs();
        self.last_applied = apply_page_patches(&self.scratch, surface);
        Ok(self.last_applied)
    }

    /// The location hash changed (or was read on load).
    ///
    /// Returns the deep link that was followed, if any.
    pub fn hash_changed<S: PageSurface + ?Sized>(
        &mut self,
        hash: &str,
        surface: &mut S,
    ) -> (Option<DeepLink>, Applied) {
        let Some(link) = self.page.handle_hash(hash) else {
            self.last_applied = Applied::default();
            return (None, self.last_applied);
        };
        self.scratch.clear();
        self.push_tabs();
        self.scratch
            .push(PagePatch::ScrollIntoView(link.scroll_target.clone()));
        self.last_applied = apply_page_patches(&self.scratch, surface);
        (Some(link), self.last_applied)
    }

    /// Handles a carousel input event and re-renders the carousel.
    pub fn dispatch<S: PageSurface + ?Sized>(
        &mut self,
        input: Input,
        surface: &mut S,
    ) -> Response {
        let response = self.page.handle_carousel(input);
        self.scratch.clear();
        self.push_carousel();
        self.last_applied = apply_page_patches(&self.scratch, surface);
        if self.last_applied.skipped > 0 {
            awarn!(
                skipped = self.last_applied.skipped,
                "PageController::dispatch: surface is missing elements"
            );
        }
        response
    }

    fn push_tabs(&mut self) {
        let active = self.page.tabs().active();
        if self.shown_tab.as_deref() == active {
            return;
        }
        if let Some(prev) = self.shown_tab.take() {
            self.scratch.push(PagePatch::TabActive {
                name: prev.clone(),
                active: false,
            });
            self.scratch.push(PagePatch::PanelActive {
                name: prev,
                active: false,
            });
        }
        if let Some(next) = active {
            self.scratch.push(PagePatch::TabActive {
                name: String::from(next),
                active: true,
            });
            self.scratch.push(PagePatch::PanelActive {
                name: String::from(next),
                active: true,
            });
        }
        self.shown_tab = active.map(String::from);
    }

    fn push_carousel(&mut self) {
        let next = self.page.carousel().frame();
        let mut patches = Vec::new();
        diff_frames(self.carousel_frame.as_ref(), &next, &mut patches);
        self.scratch.extend(patches.into_iter().map(PagePatch::Carousel));
        self.carousel_frame = Some(next);
    }
}
