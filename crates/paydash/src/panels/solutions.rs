use crate::screen::{Block, Callout, Panel, Section};
use crate::theme::{Accent, Icon};
use crate::view::Tab;

fn personal() -> Section {
    Section::titled(
        "Personal Financial Strategies",
        vec![Block::Callouts {
            items: vec![
                Callout::new(
                    "Budget Management",
                    "Create detailed budgets focusing on needs vs. wants, track all expenses",
                    Accent::Green,
                ),
                Callout::new(
                    "Debt Prioritization",
                    "Pay off high-interest debt first, consolidate where possible",
                    Accent::Blue,
                ),
                Callout::new(
                    "Income Diversification",
                    "Side gigs, freelancing, skill development for better employment",
                    Accent::Purple,
                ),
                Callout::new(
                    "Financial Education",
                    "Learn investing, savings strategies, and money management skills",
                    Accent::Orange,
                ),
            ],
        }],
    )
    .accent(Accent::Green)
}

fn policy() -> Section {
    Section::titled(
        "Systemic Policy Solutions",
        vec![Block::Callouts {
            items: vec![
                Callout::new(
                    "Affordable Housing",
                    "Increase housing supply, rent controls, social housing programs",
                    Accent::Red,
                ),
                Callout::new(
                    "Wage Growth",
                    "Minimum wage increases, living wage policies, worker protections",
                    Accent::Green,
                ),
                Callout::new(
                    "Corporate Accountability",
                    "Control pricing on essentials, regulate corporate profits",
                    Accent::Blue,
                ),
                Callout::new(
                    "Social Safety Net",
                    "Enhanced unemployment benefits, universal basic services",
                    Accent::Purple,
                ),
            ],
        }],
    )
    .accent(Accent::Blue)
}

fn call_to_action() -> Section {
    Section::untitled(vec![Block::Banner {
        title: "This Crisis Requires Immediate Action",
        items: vec![
            Callout::new(
                "Individual Level",
                "Take control of your finances with budgeting and financial education",
                Accent::Blue,
            )
            .icon(Icon::Users),
            Callout::new(
                "Community Level",
                "Advocate for affordable housing and local economic policies",
                Accent::Blue,
            )
            .icon(Icon::Home),
            Callout::new(
                "Policy Level",
                "Support systemic changes to address root causes",
                Accent::Purple,
            )
            .icon(Icon::TrendingUp),
        ],
    }])
}

pub(super) fn panel() -> Panel {
    Panel {
        tab: Tab::Solutions,
        sections: vec![personal(), policy(), call_to_action()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_charts() {
        assert_eq!(panel().charts().count(), 0);
    }

    #[test]
    fn test_callout_counts() {
        let panel = panel();
        assert_eq!(panel.sections.len(), 3);
        // 4 personal + 4 policy + 3 banner items
        assert_eq!(panel.callouts().count(), 11);
    }

    #[test]
    fn test_banner_items_have_icons() {
        let section = call_to_action();
        let Block::Banner { items, .. } = &section.blocks[0] else {
            panic!("expected a banner");
        };
        assert!(items.iter().all(|c| c.icon.is_some()));
    }
}
