//! The declarative output tree.
//!
//! [`Dashboard::render`] turns a [`ViewState`] into a [`Screen`]. The tree is
//! plain data: the terminal layer draws it, the `render --format json`
//! command serializes it, and tests inspect it directly.

use std::borrow::Cow;

use serde::Serialize;

use crate::chart::{Chart, ChartId};
use crate::panels;
use crate::theme::{Accent, Icon};
use crate::view::{Tab, ViewState};

/// A clickable tab control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabButton {
    /// The tab this button selects.
    pub tab: Tab,
    /// Button text.
    pub label: &'static str,
    /// Whether this is the selected tab; the only input to its style.
    pub active: bool,
}

impl TabButton {
    /// Invoke the transition with this button's tab.
    pub fn activate(&self, state: &mut ViewState) -> bool {
        state.select_tab(self.tab)
    }

    /// Color of the button.
    #[must_use]
    pub const fn accent(&self) -> Accent {
        if self.active {
            Accent::Red
        } else {
            Accent::Gray
        }
    }
}

/// Build the button for `tab`.
#[must_use]
pub const fn tab_button(tab: Tab, active: bool) -> TabButton {
    TabButton {
        tab,
        label: tab.label(),
        active,
    }
}

/// A small card summarizing one figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Heading, drawn in caps.
    pub title: &'static str,
    /// The figure itself.
    pub value: Cow<'static, str>,
    /// Optional caption under the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    /// Border and value color.
    pub accent: Accent,
    /// Optional glyph in the corner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Build a stat card. A pure function of its inputs.
#[must_use]
pub const fn stat_card(
    title: &'static str,
    value: &'static str,
    subtitle: Option<&'static str>,
    accent: Accent,
    icon: Option<Icon>,
) -> StatCard {
    StatCard {
        title,
        value: Cow::Borrowed(value),
        subtitle,
        accent,
        icon,
    }
}

/// A titled block of fixed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callout {
    /// Heading.
    pub title: &'static str,
    /// Paragraph text.
    pub body: &'static str,
    /// Bullet points after the body.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<&'static str>,
    /// Border color.
    pub accent: Accent,
    /// Optional leading glyph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Callout {
    /// A callout with no bullets or icon.
    #[must_use]
    pub fn new(title: &'static str, body: &'static str, accent: Accent) -> Self {
        Self {
            title,
            body,
            bullets: Vec::new(),
            accent,
            icon: None,
        }
    }

    /// Append bullet points.
    #[must_use]
    pub fn bullets(mut self, bullets: &[&'static str]) -> Self {
        self.bullets.extend_from_slice(bullets);
        self
    }

    /// Add a leading glyph.
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// One element of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    /// A row of stat cards.
    Stats {
        /// Cards, left to right.
        cards: Vec<StatCard>,
    },
    /// A chart.
    Chart {
        /// The chart description.
        chart: Chart,
    },
    /// A grid of callouts.
    Callouts {
        /// Callouts, left to right.
        items: Vec<Callout>,
    },
    /// A highlighted call to action.
    Banner {
        /// Heading.
        title: &'static str,
        /// Columns under the heading.
        items: Vec<Callout>,
    },
}

/// A titled group of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    /// Heading color.
    pub accent: Accent,
    /// Contents, top to bottom.
    pub blocks: Vec<Block>,
}

impl Section {
    /// A section with a heading.
    #[must_use]
    pub fn titled(title: &'static str, blocks: Vec<Block>) -> Self {
        Self {
            title: Some(title),
            accent: Accent::Gray,
            blocks,
        }
    }

    /// A section without a heading.
    #[must_use]
    pub fn untitled(blocks: Vec<Block>) -> Self {
        Self {
            title: None,
            accent: Accent::Gray,
            blocks,
        }
    }

    /// Color the heading.
    #[must_use]
    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }
}

/// The content of one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    /// The tab this panel belongs to.
    pub tab: Tab,
    /// Sections, top to bottom.
    pub sections: Vec<Section>,
}

impl Panel {
    /// Every chart in the panel, in order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.sections
            .iter()
            .flat_map(|s| &s.blocks)
            .filter_map(|b| match b {
                Block::Chart { chart } => Some(chart),
                _ => None,
            })
    }

    /// Every stat card in the panel, in order.
    pub fn stat_cards(&self) -> impl Iterator<Item = &StatCard> {
        self.sections
            .iter()
            .flat_map(|s| &s.blocks)
            .filter_map(|b| match b {
                Block::Stats { cards } => Some(cards.iter()),
                _ => None,
            })
            .flatten()
    }

    /// Every callout in the panel, banners included.
    pub fn callouts(&self) -> impl Iterator<Item = &Callout> {
        self.sections
            .iter()
            .flat_map(|s| &s.blocks)
            .filter_map(|b| match b {
                Block::Callouts { items } | Block::Banner { items, .. } => Some(items.iter()),
                _ => None,
            })
            .flatten()
    }
}

/// The closing methodology note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Heading.
    pub title: &'static str,
    /// Note text.
    pub body: &'static str,
}

/// Everything drawn for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// Dashboard title.
    pub title: &'static str,
    /// First line under the title.
    pub headline: &'static str,
    /// Second line under the title.
    pub tagline: &'static str,
    /// One button per tab, exactly one active.
    pub tabs: Vec<TabButton>,
    /// The selected tab's content.
    pub panel: Panel,
    /// Data sources note, when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

impl Screen {
    /// Ids of every chart on screen.
    #[must_use]
    pub fn chart_ids(&self) -> Vec<ChartId> {
        self.panel.charts().map(|c| c.id).collect()
    }

    /// The active tab button.
    #[must_use]
    pub fn active_tab(&self) -> Option<&TabButton> {
        self.tabs.iter().find(|b| b.active)
    }

    /// Whether any visible string on the screen contains `needle`.
    ///
    /// Chart tooltips count as visible.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        let header = [self.title, self.headline, self.tagline];
        if header.iter().any(|s| s.contains(needle))
            || self.tabs.iter().any(|b| b.label.contains(needle))
        {
            return true;
        }
        if let Some(footer) = &self.footer {
            if footer.title.contains(needle) || footer.body.contains(needle) {
                return true;
            }
        }
        self.panel.sections.iter().any(|section| {
            section.title.is_some_and(|t| t.contains(needle))
                || section.blocks.iter().any(|b| block_contains(b, needle))
        })
    }
}

fn callout_contains(callout: &Callout, needle: &str) -> bool {
    callout.title.contains(needle)
        || callout.body.contains(needle)
        || callout.bullets.iter().any(|b| b.contains(needle))
}

fn block_contains(block: &Block, needle: &str) -> bool {
    match block {
        Block::Stats { cards } => cards.iter().any(|c| {
            c.title.contains(needle)
                || c.value.contains(needle)
                || c.subtitle.is_some_and(|s| s.contains(needle))
        }),
        Block::Chart { chart } => {
            chart.title.contains(needle)
                || chart.tooltips().iter().any(|(label, tooltip)| {
                    label.contains(needle) || tooltip.lines().iter().any(|l| l.contains(needle))
                })
        }
        Block::Callouts { items } => items.iter().any(|c| callout_contains(c, needle)),
        Block::Banner { title, items } => {
            title.contains(needle) || items.iter().any(|c| callout_contains(c, needle))
        }
    }
}

const TITLE: &str = "Canadian Financial Crisis Analytics";
const HEADLINE: &str = "85% of Canadians Living Paycheck to Paycheck";
const TAGLINE: &str = "A Systemic Crisis Affecting All Demographics";

const SOURCES: Footer = Footer {
    title: "Data Sources & Methodology",
    body: "Data compiled from National Payroll Institute surveys, Statistics Canada reports, \
           and recent inflation-impact studies. The 85% figure represents the upper range of \
           recent surveys showing Canadians experiencing financial stress or lack of emergency \
           savings. Individual survey results may vary between 50-85% depending on methodology \
           and timing.",
};

/// Builds screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dashboard {
    show_sources: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self { show_sources: true }
    }
}

impl Dashboard {
    /// Create a dashboard; `show_sources` controls the footer.
    #[must_use]
    pub const fn new(show_sources: bool) -> Self {
        Self { show_sources }
    }

    /// Describe everything to draw for `state`.
    #[must_use]
    pub fn render(&self, state: &ViewState) -> Screen {
        Screen {
            title: TITLE,
            headline: HEADLINE,
            tagline: TAGLINE,
            tabs: Tab::ALL
                .iter()
                .map(|&tab| tab_button(tab, state.is_active(tab)))
                .collect(),
            panel: panels::render(state.active()),
            footer: self.show_sources.then_some(SOURCES),
        }
    }
}
