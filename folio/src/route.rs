use alloc::string::String;
use alloc::vec::Vec;

use crate::{DeepLink, RouteError};

/// Extracts the tab name addressed by a location hash.
///
/// Two shapes are understood:
/// - `#<section>/<tab>` (anything after a further `/` is ignored)
/// - any hash containing `tab=`, e.g. `#<section>?tab=<tab>`
///
/// Returns `None` for any other hash, or when the tab part is empty.
pub fn parse_hash<'a>(hash: &'a str, section: &str) -> Option<&'a str> {
    let name = if let Some(rest) = hash
        .strip_prefix('#')
        .and_then(|h| h.strip_prefix(section))
        .and_then(|h| h.strip_prefix('/'))
    {
        rest.split('/').next().unwrap_or_default()
    } else if let Some((_, rest)) = hash.split_once("tab=") {
        rest.split("tab=").next().unwrap_or_default()
    } else {
        return None;
    };
    (!name.is_empty()).then_some(name)
}

/// Resolves location hashes into deep links for one page section.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashRouter {
    section: String,
    tabs: Vec<String>,
}

impl HashRouter {
    /// `section` is the id of the element holding the tabs; `tabs` is the allow-list.
    pub fn new<I, S>(section: impl Into<String>, tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            section: section.into(),
            tabs: tabs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn is_known(&self, tab: &str) -> bool {
        self.tabs.iter().any(|t| t == tab)
    }

    pub fn resolve(&self, hash: &str) -> Result<DeepLink, RouteError> {
        let tab = parse_hash(hash, &self.section).ok_or(RouteError::NoTab)?;
        if !self.is_known(tab) {
            return Err(RouteError::UnknownTab(String::from(tab)));
        }
        Ok(DeepLink {
            tab: String::from(tab),
            scroll_target: self.section.clone(),
        })
    }
}

impl Default for HashRouter {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SECTION, crate::DEFAULT_TABS)
    }
}
