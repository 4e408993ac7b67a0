use crate::chart::{Chart, ChartId, ChartKind, Fields, TooltipFormat};
use crate::data::{self, SavingsBucket, StatusSplit};
use crate::screen::{stat_card, Block, Callout, Panel, Section};
use crate::theme::{Accent, Icon};
use crate::view::Tab;

pub(super) fn panel() -> Panel {
    let cards = vec![
        stat_card(
            "Living Paycheck to Paycheck",
            "85%",
            Some("of Canadian workers"),
            Accent::Red,
            Some(Icon::AlertTriangle),
        ),
        stat_card(
            "Under 35 Age Group",
            "70-80%",
            Some("young adults affected"),
            Accent::Orange,
            Some(Icon::Users),
        ),
        stat_card(
            "Less than $200 buffer",
            "58%",
            Some("after monthly expenses"),
            Accent::Yellow,
            Some(Icon::DollarSign),
        ),
        stat_card(
            "Debt-to-Income Ratio",
            "Highest",
            Some("globally among developed nations"),
            Accent::Red,
            Some(Icon::CreditCard),
        ),
    ];

    let status = Chart::from_records(
        ChartId::SecurityStatus,
        ChartKind::Pie,
        "Financial Security Status",
        data::paycheck_status(),
        &Fields::new(
            |r: &StatusSplit| r.category,
            |r: &StatusSplit| u32::from(r.percentage),
        )
        .color(|r: &StatusSplit| r.color),
    )
    .tooltip(TooltipFormat::Percent {
        series: "Percentage",
    });

    let savings = Chart::from_records(
        ChartId::EmergencySavings,
        ChartKind::Column,
        "Emergency Savings Reality",
        data::emergency_savings(),
        &Fields::new(
            |r: &SavingsBucket| r.category,
            |r: &SavingsBucket| u32::from(r.percentage),
        ),
    )
    .domain(0, 70)
    .tooltip(TooltipFormat::Percent {
        series: "Percentage of Canadians",
    });

    let alert = Callout::new(
        "Critical Economic Vulnerability",
        "With 85% of Canadians living paycheck to paycheck and 58% having less than $200 left \
         monthly, a single unexpected expense can push millions into debt. This represents a \
         systemic crisis affecting national economic stability, consumer spending, and \
         long-term prosperity.",
        Accent::Red,
    )
    .icon(Icon::AlertTriangle);

    Panel {
        tab: Tab::Overview,
        sections: vec![
            Section::untitled(vec![Block::Stats { cards }]),
            Section::untitled(vec![
                Block::Chart { chart: status },
                Block::Chart { chart: savings },
            ]),
            Section::untitled(vec![Block::Callouts { items: vec![alert] }]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_card() {
        let panel = panel();
        let first = panel.stat_cards().next().unwrap();
        assert_eq!(first.title, "Living Paycheck to Paycheck");
        assert_eq!(first.value, "85%");
        assert_eq!(panel.stat_cards().count(), 4);
    }

    #[test]
    fn test_pie_slices_use_row_colors() {
        let panel = panel();
        let pie = panel.charts().next().unwrap();
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.data[0].accent, Some(Accent::Red));
        assert_eq!(pie.data[1].accent, Some(Accent::Green));
    }

    #[test]
    fn test_savings_domain() {
        let panel = panel();
        let savings = panel
            .charts()
            .find(|c| c.id == ChartId::EmergencySavings)
            .unwrap();
        assert_eq!(savings.domain, Some((0, 70)));
        assert_eq!(savings.data.len(), 3);
    }
}
