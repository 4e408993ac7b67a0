use crate::chart::{Chart, ChartId, ChartKind, Fields, TooltipFormat};
use crate::data::{self, CityBurden};
use crate::screen::{Block, Callout, Panel, Section};
use crate::theme::Accent;
use crate::view::Tab;

pub(super) fn panel() -> Panel {
    let chart = Chart::from_records(
        ChartId::HousingBurden,
        ChartKind::Column,
        "Housing Burden Across Canadian Cities",
        data::housing_burden(),
        &Fields::new(
            |r: &CityBurden| r.city,
            |r: &CityBurden| u32::from(r.percentage),
        )
        .note(|r: &CityBurden| r.avg_rent),
    )
    .domain(0, 70)
    .tooltip(TooltipFormat::HousingCost);

    let callouts = vec![
        Callout::new(
            "40-60% of Income",
            "Housing costs consume nearly half of most Canadians' income, far exceeding the \
             recommended 30% threshold.",
            Accent::Red,
        ),
        Callout::new(
            "Major Cities Unaffordable",
            "Vancouver and Toronto lead with 60%+ housing burden, but even smaller cities now \
             face affordability crises.",
            Accent::Orange,
        ),
        Callout::new(
            "Rental Market Crisis",
            "Average rents have surged beyond wage growth, trapping renters in \
             paycheck-to-paycheck cycles.",
            Accent::Yellow,
        ),
    ];

    Panel {
        tab: Tab::Housing,
        sections: vec![Section::titled(
            "Housing Burden Across Canadian Cities",
            vec![
                Block::Chart { chart },
                Block::Callouts { items: callouts },
            ],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_housing_tooltips_carry_rent() {
        let panel = panel();
        let chart = panel.charts().next().unwrap();
        let tooltips = chart.tooltips();
        let (city, toronto) = &tooltips[1];
        assert_eq!(*city, "Toronto");
        assert_eq!(toronto.value, "62% of income");
        assert_eq!(toronto.detail.as_deref(), Some("Average rent: $2,600"));
    }

    #[test]
    fn test_three_callouts() {
        assert_eq!(panel().callouts().count(), 3);
    }
}
