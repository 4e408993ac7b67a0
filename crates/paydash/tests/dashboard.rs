//! End-to-end checks through the public API: state in, screen out.

use paydash::chart::{Datum, TooltipFormat};
use paydash::data::{self, Dataset};
use paydash::tui::{self, Action, App, Flow};
use paydash::{ChartId, Dashboard, Tab, ViewState};

fn screen_for(tab: Tab) -> paydash::Screen {
    Dashboard::default().render(&ViewState::new(tab))
}

/// One string that only its own panel shows.
fn marker(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "Critical Economic Vulnerability",
        Tab::Demographics => "Young Adults Hit Hardest",
        Tab::Causes => "Root Causes Analysis",
        Tab::Housing => "Housing Burden Across Canadian Cities",
        Tab::Solutions => "Personal Financial Strategies",
    }
}

#[test]
fn each_tab_shows_only_its_own_panel() {
    for tab in Tab::ALL {
        let screen = screen_for(tab);
        assert_eq!(screen.panel.tab, tab);
        assert_eq!(screen.tabs.iter().filter(|b| b.active).count(), 1);
        assert_eq!(screen.active_tab().map(|b| b.tab), Some(tab));

        for other in Tab::ALL {
            assert_eq!(
                screen.contains_text(marker(other)),
                other == tab,
                "{} on the {tab} screen",
                marker(other)
            );
        }
    }
}

#[test]
fn each_tab_has_its_own_charts() {
    let charts: Vec<Vec<ChartId>> = Tab::ALL
        .iter()
        .map(|&tab| screen_for(tab).chart_ids())
        .collect();

    assert!(charts[Tab::Solutions.index()].is_empty());
    for (i, ids) in charts.iter().enumerate() {
        for (j, others) in charts.iter().enumerate() {
            if i != j {
                assert!(ids.iter().all(|id| !others.contains(id)));
            }
        }
    }
}

#[test]
fn default_state_shows_overview_headline() {
    let screen = Dashboard::default().render(&ViewState::default());
    let card = screen.panel.stat_cards().next().unwrap();
    assert_eq!(card.title, "Living Paycheck to Paycheck");
    assert_eq!(card.value, "85%");

    let text = tui::snapshot(&screen, 120, 60).unwrap();
    assert!(text.contains("LIVING PAYCHECK TO PAYCHECK"));
    assert!(text.contains("85%"));
}

#[test]
fn selecting_demographics_swaps_charts() {
    let mut state = ViewState::default();
    assert!(state.select_tab(Tab::Demographics));

    let ids = Dashboard::default().render(&state).chart_ids();
    assert!(ids.contains(&ChartId::AgeStress));
    assert!(!ids.contains(&ChartId::SecurityStatus));
}

#[test]
fn reselecting_active_tab_is_idempotent() {
    let dashboard = Dashboard::default();
    let mut state = ViewState::new(Tab::Causes);
    let before = dashboard.render(&state);

    assert!(!state.select_tab(Tab::Causes));
    assert_eq!(dashboard.render(&state), before);

    let mut app = App::new(Tab::Causes);
    assert_eq!(app.apply(Action::Select(Tab::Causes)), Flow::Idle);
}

#[test]
fn housing_tooltip_formats_cost_and_rent() {
    let datum = Datum {
        label: "Toronto",
        value: 62,
        accent: None,
        note: Some("$2,600"),
    };
    let tooltip = TooltipFormat::HousingCost.format(&datum);
    assert_eq!(tooltip.value, "62% of income");
    assert_eq!(tooltip.detail.as_deref(), Some("Average rent: $2,600"));

    let housing = screen_for(Tab::Housing);
    let chart = housing.panel.charts().next().unwrap();
    assert_eq!(chart.id, ChartId::HousingBurden);
    assert!(chart
        .tooltips()
        .iter()
        .any(|(city, t)| *city == "Toronto"
            && t.to_string() == "62% of income · Housing costs · Average rent: $2,600"));
}

#[test]
fn datasets_hold_expected_rows() {
    let total: u32 = data::paycheck_status()
        .iter()
        .map(|r| u32::from(r.percentage))
        .sum();
    assert_eq!(total, 100);

    let lengths: Vec<usize> = Dataset::ALL.iter().map(|d| d.len()).collect();
    assert_eq!(lengths, vec![2, 4, 3, 6, 6, 5]);
}

#[test]
fn keyboard_walk_visits_every_tab() {
    let mut app = App::default();
    let mut seen = vec![app.state.active()];
    for _ in 1..Tab::ALL.len() {
        assert_eq!(app.apply(Action::Next), Flow::Redraw);
        seen.push(app.state.active());
    }
    assert_eq!(seen, Tab::ALL.to_vec());
}
