use alloc::string::String;
use alloc::vec::Vec;

use crate::TabError;

/// An ordered set of tabs, each paired with the content panel of the same name.
///
/// At most one tab is active; activating a tab deactivates every other one. Only an empty set
/// has no active tab.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTabSet"))]
pub struct TabSet {
    names: Vec<String>,
    active: Option<usize>,
}

/// Unvalidated wire form of [`TabSet`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTabSet {
    names: Vec<String>,
    active: Option<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTabSet> for TabSet {
    type Error = TabError;

    fn try_from(raw: RawTabSet) -> Result<Self, Self::Error> {
        if let Some(index) = raw.active {
            if index >= raw.names.len() {
                return Err(TabError::OutOfRange {
                    index,
                    len: raw.names.len(),
                });
            }
        }
        Ok(Self {
            names: raw.names,
            active: raw.active,
        })
    }
}

impl TabSet {
    /// Creates a tab set with the first tab active.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let active = (!names.is_empty()).then_some(0);
        Self { names, active }
    }

    /// Starts with `name` active instead of the first tab.
    pub fn with_active(mut self, name: &str) -> Result<Self, TabError> {
        self.activate(name)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active() == Some(name)
    }

    /// Activates the tab (and panel) called `name`.
    ///
    /// Unknown names leave the current selection untouched.
    pub fn activate(&mut self, name: &str) -> Result<usize, TabError> {
        let Some(index) = self.position(name) else {
            fdebug!(name, "TabSet::activate: unknown tab");
            return Err(TabError::Unknown(String::from(name)));
        };
        ftrace!(name, index, "TabSet::activate");
        self.active = Some(index);
        Ok(index)
    }

    pub fn activate_index(&mut self, index: usize) -> Result<&str, TabError> {
        if index >= self.names.len() {
            return Err(TabError::OutOfRange {
                index,
                len: self.names.len(),
            });
        }
        self.active = Some(index);
        Ok(self.names[index].as_str())
    }

    /// Iterates `(name, is_active)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), self.active == Some(i)))
    }
}
