use std::borrow::Cow;

use crate::chart::{Chart, ChartId, ChartKind, Fields, TooltipFormat};
use crate::data::{self, CostFactor, DebtType};
use crate::screen::{Block, Callout, Panel, Section, StatCard};
use crate::theme::Accent;
use crate::view::Tab;

/// One card per cost factor, colored and iconed by the row itself.
fn factor_cards() -> Vec<StatCard> {
    data::cost_factors()
        .iter()
        .map(|factor| StatCard {
            title: factor.factor,
            value: Cow::Owned(format!("{}%", factor.impact)),
            subtitle: Some(factor.description),
            accent: factor.color,
            icon: Some(factor.icon),
        })
        .collect()
}

pub(super) fn panel() -> Panel {
    let impact = Chart::from_records(
        ChartId::CostImpact,
        ChartKind::Bar,
        "Impact Level",
        data::cost_factors(),
        &Fields::new(
            |r: &CostFactor| r.factor,
            |r: &CostFactor| u32::from(r.impact),
        ),
    )
    .domain(0, 100)
    .tooltip(TooltipFormat::Percent {
        series: "Impact Level",
    });

    let debt = Chart::from_records(
        ChartId::DebtBreakdown,
        ChartKind::Column,
        "Prevalence",
        data::debt_types(),
        &Fields::new(|r: &DebtType| r.kind, |r: &DebtType| u32::from(r.amount)),
    )
    .tooltip(TooltipFormat::Percent {
        series: "Prevalence",
    });

    let debt_notes = vec![
        Callout::new(
            "World's Highest Debt Ratio",
            "Canada has one of the highest household debt-to-income ratios globally, making \
             families extremely vulnerable to economic shocks.",
            Accent::Red,
        ),
        Callout::new(
            "Multiple Debt Sources",
            "Most Canadians carry multiple forms of debt simultaneously, creating compound \
             financial pressure and limiting savings ability.",
            Accent::Orange,
        ),
    ];

    Panel {
        tab: Tab::Causes,
        sections: vec![
            Section::titled(
                "Root Causes Analysis",
                vec![
                    Block::Stats {
                        cards: factor_cards(),
                    },
                    Block::Chart { chart: impact },
                ],
            ),
            Section::titled(
                "Canadian Household Debt Breakdown",
                vec![
                    Block::Chart { chart: debt },
                    Block::Callouts { items: debt_notes },
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_cards_follow_table() {
        let cards = factor_cards();
        assert_eq!(cards.len(), data::cost_factors().len());
        for (card, factor) in cards.iter().zip(data::cost_factors()) {
            assert_eq!(card.title, factor.factor);
            assert_eq!(card.value, format!("{}%", factor.impact));
            assert_eq!(card.accent, factor.color);
            assert_eq!(card.icon, Some(factor.icon));
        }
    }

    #[test]
    fn test_impact_chart_is_horizontal() {
        let panel = panel();
        let impact = panel.charts().next().unwrap();
        assert_eq!(impact.kind, ChartKind::Bar);
        assert_eq!(impact.domain_max(), 100);
        assert_eq!(impact.data.len(), 6);
    }

    #[test]
    fn test_debt_chart_scales_to_data() {
        let panel = panel();
        let debt = panel
            .charts()
            .find(|c| c.id == ChartId::DebtBreakdown)
            .unwrap();
        assert_eq!(debt.domain, None);
        assert_eq!(debt.domain_max(), 68);
    }
}
