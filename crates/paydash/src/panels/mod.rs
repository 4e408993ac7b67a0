//! Tab panels.
//!
//! Each panel is a pure function of the static tables in [`crate::data`].
//! Panels never look at each other; the view state decides which one is
//! built.

mod causes;
mod demographics;
mod housing;
mod overview;
mod solutions;

use crate::screen::Panel;
use crate::view::Tab;

/// Build the panel for `tab`.
#[must_use]
pub fn render(tab: Tab) -> Panel {
    match tab {
        Tab::Overview => overview::panel(),
        Tab::Demographics => demographics::panel(),
        Tab::Causes => causes::panel(),
        Tab::Housing => housing::panel(),
        Tab::Solutions => solutions::panel(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::chart::ChartId;

    #[test]
    fn test_panel_tab_matches_request() {
        for tab in Tab::ALL {
            assert_eq!(render(tab).tab, tab);
        }
    }

    #[test]
    fn test_charts_belong_to_one_panel() {
        let mut seen = HashSet::new();
        for tab in Tab::ALL {
            for chart in render(tab).charts() {
                assert!(seen.insert(chart.id), "{:?} drawn twice", chart.id);
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_panels_are_deterministic() {
        for tab in Tab::ALL {
            assert_eq!(render(tab), render(tab));
        }
    }

    #[test]
    fn test_chart_placement() {
        let ids = |tab| render(tab).charts().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(
            ids(Tab::Overview),
            [ChartId::SecurityStatus, ChartId::EmergencySavings]
        );
        assert_eq!(ids(Tab::Demographics), [ChartId::AgeStress]);
        assert_eq!(
            ids(Tab::Causes),
            [ChartId::CostImpact, ChartId::DebtBreakdown]
        );
        assert_eq!(ids(Tab::Housing), [ChartId::HousingBurden]);
        assert!(ids(Tab::Solutions).is_empty());
    }
}
