//! Chart descriptions handed to the drawing layer.
//!
//! A [`Chart`] is built from a static table plus typed field selectors, so a
//! chart can only reference fields the record type actually has. Axis
//! scaling and slice proportions are left to the widgets that draw it.

use serde::Serialize;

use crate::theme::Accent;

/// How a chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Proportional slices.
    Pie,
    /// Vertical bars over a category axis.
    Column,
    /// Horizontal bars with categories on the vertical axis.
    Bar,
}

/// Identifies each chart the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    /// Paycheck status pie.
    SecurityStatus,
    /// Emergency savings columns.
    EmergencySavings,
    /// Prevalence by age group.
    AgeStress,
    /// Cost-factor impact bars.
    CostImpact,
    /// Household debt composition.
    DebtBreakdown,
    /// Housing burden by city.
    HousingBurden,
}

/// One plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Datum {
    /// Category axis value.
    pub label: &'static str,
    /// Value axis value.
    pub value: u32,
    /// Per-point color, when the series is not a single fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
    /// Extra text surfaced in the tooltip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// Field selectors for a record type.
#[derive(Debug)]
pub struct Fields<T> {
    category: fn(&T) -> &'static str,
    value: fn(&T) -> u32,
    color: Option<fn(&T) -> Accent>,
    note: Option<fn(&T) -> &'static str>,
}

impl<T> Fields<T> {
    /// Select the category and value fields.
    #[must_use]
    pub fn new(category: fn(&T) -> &'static str, value: fn(&T) -> u32) -> Self {
        Self {
            category,
            value,
            color: None,
            note: None,
        }
    }

    /// Also select a per-record color.
    #[must_use]
    pub fn color(mut self, color: fn(&T) -> Accent) -> Self {
        self.color = Some(color);
        self
    }

    /// Also select a per-record tooltip note.
    #[must_use]
    pub fn note(mut self, note: fn(&T) -> &'static str) -> Self {
        self.note = Some(note);
        self
    }

    fn datum(&self, record: &T) -> Datum {
        Datum {
            label: (self.category)(record),
            value: (self.value)(record),
            accent: self.color.map(|f| f(record)),
            note: self.note.map(|f| f(record)),
        }
    }
}

/// Tooltip formatting for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum TooltipFormat {
    /// `"{value}%"` labelled with the series name.
    Percent {
        /// Series name shown next to the value.
        series: &'static str,
    },
    /// Share of income plus the city's average rent.
    HousingCost,
}

/// The strings shown when a point is inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Formatted value.
    pub value: String,
    /// Series name.
    pub name: String,
    /// Optional third line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TooltipFormat {
    /// Format one point.
    #[must_use]
    pub fn format(&self, datum: &Datum) -> Tooltip {
        match self {
            Self::Percent { series } => Tooltip {
                value: format!("{}%", datum.value),
                name: (*series).to_string(),
                detail: None,
            },
            Self::HousingCost => Tooltip {
                value: format!("{}% of income", datum.value),
                name: "Housing costs".to_string(),
                detail: datum.note.map(|rent| format!("Average rent: {rent}")),
            },
        }
    }
}

impl Tooltip {
    /// All non-empty lines, in display order.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.value.as_str(), self.name.as_str()];
        if let Some(detail) = &self.detail {
            lines.push(detail);
        }
        lines
    }
}

impl std::fmt::Display for Tooltip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines().join(" · "))
    }
}

/// A chart invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    /// Which chart this is.
    pub id: ChartId,
    /// Drawing style.
    pub kind: ChartKind,
    /// Heading above the chart.
    pub title: &'static str,
    /// Points in table order.
    pub data: Vec<Datum>,
    /// Value axis range, when fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<(u32, u32)>,
    /// Fill for points without their own accent.
    pub fill: Accent,
    /// Tooltip formatter.
    pub tooltip: TooltipFormat,
}

impl Chart {
    /// Build a chart from a static table and its field selectors.
    #[must_use]
    pub fn from_records<T>(
        id: ChartId,
        kind: ChartKind,
        title: &'static str,
        records: &[T],
        fields: &Fields<T>,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            data: records.iter().map(|r| fields.datum(r)).collect(),
            domain: None,
            fill: Accent::Red,
            tooltip: TooltipFormat::Percent {
                series: "Percentage",
            },
        }
    }

    /// Fix the value axis range.
    #[must_use]
    pub fn domain(mut self, min: u32, max: u32) -> Self {
        self.domain = Some((min, max));
        self
    }

    /// Set the default fill.
    #[must_use]
    pub fn fill(mut self, accent: Accent) -> Self {
        self.fill = accent;
        self
    }

    /// Set the tooltip formatter.
    #[must_use]
    pub fn tooltip(mut self, tooltip: TooltipFormat) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Upper bound of the value axis.
    #[must_use]
    pub fn domain_max(&self) -> u32 {
        match self.domain {
            Some((_, max)) => max,
            None => self.data.iter().map(|d| d.value).max().unwrap_or(0),
        }
    }

    /// Sum of all values; the denominator for pie slices.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data.iter().map(|d| d.value).sum()
    }

    /// Color of a point.
    #[must_use]
    pub fn accent_of(&self, datum: &Datum) -> Accent {
        datum.accent.unwrap_or(self.fill)
    }

    /// Tooltips for every point, in order.
    #[must_use]
    pub fn tooltips(&self) -> Vec<(&'static str, Tooltip)> {
        self.data
            .iter()
            .map(|d| (d.label, self.tooltip.format(d)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{self, CityBurden};

    fn housing_fields() -> Fields<CityBurden> {
        Fields::new(|r: &CityBurden| r.city, |r: &CityBurden| u32::from(r.percentage))
            .note(|r: &CityBurden| r.avg_rent)
    }

    #[test]
    fn test_housing_tooltip() {
        let datum = Datum {
            label: "Toronto",
            value: 62,
            accent: None,
            note: Some("$2,600"),
        };
        let tooltip = TooltipFormat::HousingCost.format(&datum);
        assert_eq!(tooltip.value, "62% of income");
        assert_eq!(tooltip.name, "Housing costs");
        assert_eq!(tooltip.detail.as_deref(), Some("Average rent: $2,600"));
        assert!(tooltip.to_string().contains("$2,600"));
    }

    #[test]
    fn test_percent_tooltip() {
        let datum = Datum {
            label: "Under 35",
            value: 78,
            accent: None,
            note: None,
        };
        let tooltip = TooltipFormat::Percent {
            series: "Living Paycheck to Paycheck",
        }
        .format(&datum);
        assert_eq!(tooltip.lines(), ["78%", "Living Paycheck to Paycheck"]);
    }

    #[test]
    fn test_from_records_preserves_order_and_notes() {
        let chart = Chart::from_records(
            ChartId::HousingBurden,
            ChartKind::Column,
            "Housing",
            data::housing_burden(),
            &housing_fields(),
        );
        let labels: Vec<_> = chart.data.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            ["Vancouver", "Toronto", "Montreal", "Calgary", "Ottawa", "Halifax"]
        );
        assert_eq!(chart.data[1].note, Some("$2,600"));
    }

    #[test]
    fn test_domain_max() {
        let chart = Chart::from_records(
            ChartId::HousingBurden,
            ChartKind::Column,
            "Housing",
            data::housing_burden(),
            &housing_fields(),
        );
        assert_eq!(chart.domain_max(), 65);
        assert_eq!(chart.domain(0, 70).domain_max(), 70);
    }

    #[test]
    fn test_accent_of_falls_back_to_fill() {
        let chart = Chart::from_records(
            ChartId::DebtBreakdown,
            ChartKind::Column,
            "Debt",
            data::debt_types(),
            &Fields::new(|r: &data::DebtType| r.kind, |r: &data::DebtType| u32::from(r.amount))
                .color(|r: &data::DebtType| r.color),
        );
        assert_eq!(chart.accent_of(&chart.data[1]), Accent::Orange);

        let plain = Datum {
            label: "x",
            value: 1,
            accent: None,
            note: None,
        };
        assert_eq!(chart.fill(Accent::Blue).accent_of(&plain), Accent::Blue);
    }

    #[test]
    fn test_total() {
        let chart = Chart::from_records(
            ChartId::SecurityStatus,
            ChartKind::Pie,
            "Status",
            data::paycheck_status(),
            &Fields::new(
                |r: &data::StatusSplit| r.category,
                |r: &data::StatusSplit| u32::from(r.percentage),
            ),
        );
        assert_eq!(chart.total(), 100);
    }

    #[test]
    fn test_chart_serializes_tooltip_format() {
        let chart = Chart::from_records(
            ChartId::HousingBurden,
            ChartKind::Column,
            "Housing",
            data::housing_burden(),
            &housing_fields(),
        )
        .tooltip(TooltipFormat::HousingCost);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["id"], "housing_burden");
        assert_eq!(json["tooltip"]["format"], "housing_cost");
        assert_eq!(json["data"][0]["note"], "$2,800");
    }
}
