use crate::{Carousel, DeepLink, HashRouter, Input, PortfolioOptions, Response, TabError, TabSet};

/// The portfolio page's behavior: tabs, hash deep links and the tech stack carousel.
///
/// Built once when the page becomes ready; every collaborator is owned here rather than
/// looked up from a shared document scope.
#[derive(Clone, Debug)]
pub struct Portfolio {
    tabs: TabSet,
    router: HashRouter,
    carousel: Carousel,
}

impl Portfolio {
    pub fn new(options: PortfolioOptions) -> Self {
        let PortfolioOptions {
            tabs,
            section,
            carousel,
        } = options;
        fdebug!(tabs = tabs.len(), section = section.as_str(), "Portfolio::new");
        Self {
            router: HashRouter::new(section, tabs.iter().cloned()),
            tabs: TabSet::new(tabs),
            carousel: Carousel::new(carousel),
        }
    }

    /// Assembles a page from separately built parts.
    pub fn from_parts(tabs: TabSet, router: HashRouter, carousel: Carousel) -> Self {
        Self {
            tabs,
            router,
            carousel,
        }
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn router(&self) -> &HashRouter {
        &self.router
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// A tab header was clicked.
    pub fn click_tab(&mut self, name: &str) -> Result<usize, TabError> {
        self.tabs.activate(name)
    }

    /// Handles the initial hash and every later hash change.
    ///
    /// Returns the deep link when a tab was activated; the caller should then scroll
    /// `scroll_target` into view. Hashes that do not address a known tab are ignored.
    ///
    /// A routed tab that the tab set does not contain is ignored as well: no tab is cleared and
    /// nothing is scrolled, whereas a page that clears its tabs first would still scroll the
    /// section into view. Router and tab set are built from the same names, so this only
    /// happens when they are assembled separately with [`Portfolio::from_parts`].
    pub fn handle_hash(&mut self, hash: &str) -> Option<DeepLink> {
        let link = self
            .router
            .resolve(hash)
            .inspect_err(|_err| {
                fdebug!(hash, err = %_err, "Portfolio::handle_hash: ignored");
            })
            .ok()?;
        self.tabs
            .activate(&link.tab)
            .inspect_err(|_err| {
                fwarn!(err = %_err, "Portfolio::handle_hash: routed tab missing from page");
            })
            .ok()?;
        Some(link)
    }

    /// Forwards carousel input.
    pub fn handle_carousel(&mut self, input: Input) -> Response {
        self.carousel.handle(input)
    }
}
