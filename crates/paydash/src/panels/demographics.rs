use crate::chart::{Chart, ChartId, ChartKind, Fields, TooltipFormat};
use crate::data::{self, AgeBracket};
use crate::screen::{Block, Callout, Panel, Section};
use crate::theme::Accent;
use crate::view::Tab;

pub(super) fn panel() -> Panel {
    let chart = Chart::from_records(
        ChartId::AgeStress,
        ChartKind::Column,
        "Financial Stress by Age Group",
        data::age_breakdown(),
        &Fields::new(
            |r: &AgeBracket| r.age_group,
            |r: &AgeBracket| u32::from(r.percentage),
        )
        .note(|r: &AgeBracket| r.label),
    )
    .domain(0, 90)
    .tooltip(TooltipFormat::Percent {
        series: "Living Paycheck to Paycheck",
    });

    let callouts = vec![
        Callout::new(
            "Young Adults Hit Hardest",
            "70-80% of Canadians under 35 live paycheck to paycheck, facing unique challenges:",
            Accent::Orange,
        )
        .bullets(&[
            "Student loan debt burden",
            "Entry-level wages vs. high living costs",
            "Gig economy instability",
            "Difficulty entering housing market",
        ]),
        Callout::new(
            "Cross-Generational Impact",
            "Even older demographics face significant financial stress:",
            Accent::Blue,
        )
        .bullets(&[
            "45% of 50-65 year-olds affected",
            "Pre-retirement savings challenges",
            "Healthcare cost increases",
            "Supporting adult children financially",
        ]),
    ];

    Panel {
        tab: Tab::Demographics,
        sections: vec![Section::titled(
            "Financial Stress by Age Group",
            vec![
                Block::Chart { chart },
                Block::Callouts { items: callouts },
            ],
        )],
    }
}
