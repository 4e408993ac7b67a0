//! The dashboard's only piece of state: which tab is selected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// One of the five dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Headline statistics.
    #[default]
    Overview,
    /// Breakdown by age group.
    Demographics,
    /// Cost-of-living factors and household debt.
    Causes,
    /// Housing burden by city.
    Housing,
    /// Personal and policy responses.
    Solutions,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 5] = [
        Self::Overview,
        Self::Demographics,
        Self::Causes,
        Self::Housing,
        Self::Solutions,
    ];

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Demographics => "demographics",
            Self::Causes => "causes",
            Self::Housing => "housing",
            Self::Solutions => "solutions",
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Crisis Overview",
            Self::Demographics => "Demographics",
            Self::Causes => "Root Causes",
            Self::Housing => "Housing Crisis",
            Self::Solutions => "Solutions",
        }
    }

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == wanted)
            .ok_or_else(|| Error::unknown_tab(s))
    }
}

/// Holds the selected tab.
///
/// The only way to change it is [`ViewState::select_tab`], which accepts any
/// tab unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active: Tab,
}

impl ViewState {
    /// Start on a specific tab.
    #[must_use]
    pub const fn new(active: Tab) -> Self {
        Self { active }
    }

    /// The selected tab.
    #[must_use]
    pub const fn active(&self) -> Tab {
        self.active
    }

    /// Whether `tab` is the selected one.
    #[must_use]
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Replace the selected tab. Returns `true` if the selection changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        if changed {
            debug!(from = %self.active, to = %tab, "tab selected");
        }
        self.active = tab;
        changed
    }
}
