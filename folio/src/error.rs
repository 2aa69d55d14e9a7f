use alloc::string::String;

use thiserror::Error;

/// Failure to activate a tab.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TabError {
    /// No tab carries this name.
    #[error("unknown tab: {0}")]
    Unknown(String),

    /// Index past the last tab.
    #[error("tab index {index} out of range ({len} tabs)")]
    OutOfRange { index: usize, len: usize },
}

/// Failure to resolve a location hash into a deep link.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The hash does not address any tab.
    #[error("hash does not name a tab")]
    NoTab,

    /// The hash names a tab outside the allow-list.
    #[error("unknown tab in hash: {0}")]
    UnknownTab(String),
}
