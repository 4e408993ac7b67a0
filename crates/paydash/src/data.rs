//! Static survey tables.
//!
//! Every figure here is a presentation constant compiled from National
//! Payroll Institute surveys and Statistics Canada reports. Nothing is
//! derived at runtime.

use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::theme::{Accent, Icon};

/// Share of workers with and without a financial buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSplit {
    /// Row name.
    pub category: &'static str,
    /// Share in percent.
    pub percentage: u8,
    /// Respondents per hundred.
    pub count: u32,
    /// Slice color.
    pub color: Accent,
}

/// Paycheck-to-paycheck prevalence for one age group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBracket {
    /// Age group name, unique within the table.
    pub age_group: &'static str,
    /// Point estimate in percent.
    pub percentage: u8,
    /// Reported range as published.
    pub label: &'static str,
}

/// Money left after monthly expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingsBucket {
    /// Bucket name.
    pub category: &'static str,
    /// Share in percent.
    pub percentage: u8,
    /// Respondents per hundred.
    pub count: u32,
}

/// A contributor to financial stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostFactor {
    /// Factor name.
    pub factor: &'static str,
    /// Impact score out of 100.
    pub impact: u8,
    /// One-line explanation.
    pub description: &'static str,
    /// Card icon.
    pub icon: Icon,
    /// Card color.
    pub color: Accent,
}

/// Housing cost as a share of income in one city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityBurden {
    /// City name.
    pub city: &'static str,
    /// Share of income in percent.
    pub percentage: u8,
    /// Average monthly rent, preformatted.
    pub avg_rent: &'static str,
}

/// Prevalence of one kind of household debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebtType {
    /// Debt kind.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Share of households carrying it, in percent.
    pub amount: u8,
    /// Series color.
    pub color: Accent,
}

static PAYCHECK_STATUS: [StatusSplit; 2] = [
    StatusSplit {
        category: "Living Paycheck to Paycheck",
        percentage: 85,
        count: 85,
        color: Accent::Red,
    },
    StatusSplit {
        category: "Have Financial Buffer",
        percentage: 15,
        count: 15,
        color: Accent::Green,
    },
];

static AGE_BREAKDOWN: [AgeBracket; 4] = [
    AgeBracket {
        age_group: "Under 35",
        percentage: 78,
        label: "70-80%",
    },
    AgeBracket {
        age_group: "35-50",
        percentage: 58,
        label: "~60%",
    },
    AgeBracket {
        age_group: "50-65",
        percentage: 45,
        label: "~45%",
    },
    AgeBracket {
        age_group: "Over 65",
        percentage: 25,
        label: "~25%",
    },
];

static EMERGENCY_SAVINGS: [SavingsBucket; 3] = [
    SavingsBucket {
        category: "Less than $200 left monthly",
        percentage: 58,
        count: 58,
    },
    SavingsBucket {
        category: "Some monthly buffer",
        percentage: 27,
        count: 27,
    },
    SavingsBucket {
        category: "Comfortable savings",
        percentage: 15,
        count: 15,
    },
];

static COST_FACTORS: [CostFactor; 6] = [
    CostFactor {
        factor: "Housing Costs",
        impact: 95,
        description: "40-60% of income",
        icon: Icon::Home,
        color: Accent::Red,
    },
    CostFactor {
        factor: "Food Inflation",
        impact: 89,
        description: "Highest in decades",
        icon: Icon::ShoppingCart,
        color: Accent::Orange,
    },
    CostFactor {
        factor: "Utilities & Transit",
        impact: 82,
        description: "Rising faster than income",
        icon: Icon::Car,
        color: Accent::Amber,
    },
    CostFactor {
        factor: "Stagnant Wages",
        impact: 78,
        description: "Not keeping pace",
        icon: Icon::DollarSign,
        color: Accent::Yellow,
    },
    CostFactor {
        factor: "High Debt Levels",
        impact: 85,
        description: "Highest debt-to-income globally",
        icon: Icon::CreditCard,
        color: Accent::Red,
    },
    CostFactor {
        factor: "Financial Illiteracy",
        impact: 65,
        description: "Lack of money management",
        icon: Icon::BookOpen,
        color: Accent::Purple,
    },
];

static HOUSING_BURDEN: [CityBurden; 6] = [
    CityBurden {
        city: "Vancouver",
        percentage: 65,
        avg_rent: "$2,800",
    },
    CityBurden {
        city: "Toronto",
        percentage: 62,
        avg_rent: "$2,600",
    },
    CityBurden {
        city: "Montreal",
        percentage: 45,
        avg_rent: "$1,800",
    },
    CityBurden {
        city: "Calgary",
        percentage: 42,
        avg_rent: "$1,600",
    },
    CityBurden {
        city: "Ottawa",
        percentage: 48,
        avg_rent: "$1,900",
    },
    CityBurden {
        city: "Halifax",
        percentage: 50,
        avg_rent: "$1,700",
    },
];

static DEBT_TYPES: [DebtType; 5] = [
    DebtType {
        kind: "Mortgages",
        amount: 68,
        color: Accent::Red,
    },
    DebtType {
        kind: "Credit Cards",
        amount: 23,
        color: Accent::Orange,
    },
    DebtType {
        kind: "Student Loans",
        amount: 15,
        color: Accent::Amber,
    },
    DebtType {
        kind: "Car Loans",
        amount: 18,
        color: Accent::Yellow,
    },
    DebtType {
        kind: "Other Debt",
        amount: 12,
        color: Accent::Purple,
    },
];

/// Workers living paycheck to paycheck versus those with a buffer.
#[must_use]
pub fn paycheck_status() -> &'static [StatusSplit] {
    &PAYCHECK_STATUS
}

/// Paycheck-to-paycheck prevalence by age group.
#[must_use]
pub fn age_breakdown() -> &'static [AgeBracket] {
    &AGE_BREAKDOWN
}

/// Emergency savings buckets. These are separate survey cuts and do not
/// have to add up to 100.
#[must_use]
pub fn emergency_savings() -> &'static [SavingsBucket] {
    &EMERGENCY_SAVINGS
}

/// Cost-of-living factors.
#[must_use]
pub fn cost_factors() -> &'static [CostFactor] {
    &COST_FACTORS
}

/// Housing burden in major cities.
#[must_use]
pub fn housing_burden() -> &'static [CityBurden] {
    &HOUSING_BURDEN
}

/// Household debt composition.
#[must_use]
pub fn debt_types() -> &'static [DebtType] {
    &DEBT_TYPES
}

/// Names one of the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// [`paycheck_status`]
    PaycheckStatus,
    /// [`age_breakdown`]
    AgeBreakdown,
    /// [`emergency_savings`]
    EmergencySavings,
    /// [`cost_factors`]
    CostFactors,
    /// [`housing_burden`]
    HousingBurden,
    /// [`debt_types`]
    DebtTypes,
}

/// A dataset flattened into display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names.
    pub header: Vec<&'static str>,
    /// One entry per record.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Every dataset, in dashboard order.
    pub const ALL: [Dataset; 6] = [
        Self::PaycheckStatus,
        Self::AgeBreakdown,
        Self::EmergencySavings,
        Self::CostFactors,
        Self::HousingBurden,
        Self::DebtTypes,
    ];

    /// Identifier used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PaycheckStatus => "paycheck_status",
            Self::AgeBreakdown => "age_breakdown",
            Self::EmergencySavings => "emergency_savings",
            Self::CostFactors => "cost_factors",
            Self::HousingBurden => "housing_burden",
            Self::DebtTypes => "debt_types",
        }
    }

    /// Number of records in the table.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Self::PaycheckStatus => PAYCHECK_STATUS.len(),
            Self::AgeBreakdown => AGE_BREAKDOWN.len(),
            Self::EmergencySavings => EMERGENCY_SAVINGS.len(),
            Self::CostFactors => COST_FACTORS.len(),
            Self::HousingBurden => HOUSING_BURDEN.len(),
            Self::DebtTypes => DEBT_TYPES.len(),
        }
    }

    /// Always false; every table has rows.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Serialize the records as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::PaycheckStatus => serde_json::to_value(paycheck_status()),
            Self::AgeBreakdown => serde_json::to_value(age_breakdown()),
            Self::EmergencySavings => serde_json::to_value(emergency_savings()),
            Self::CostFactors => serde_json::to_value(cost_factors()),
            Self::HousingBurden => serde_json::to_value(housing_burden()),
            Self::DebtTypes => serde_json::to_value(debt_types()),
        }
    }

    /// Flatten the records into a printable table.
    #[must_use]
    pub fn table(self) -> Table {
        let (header, rows): (Vec<&'static str>, Vec<Vec<String>>) = match self {
            Self::PaycheckStatus => (
                vec!["category", "percentage", "count", "color"],
                paycheck_status()
                    .iter()
                    .map(|r| {
                        vec![
                            r.category.to_string(),
                            r.percentage.to_string(),
                            r.count.to_string(),
                            r.color.name().to_string(),
                        ]
                    })
                    .collect(),
            ),
            Self::AgeBreakdown => (
                vec!["age_group", "percentage", "label"],
                age_breakdown()
                    .iter()
                    .map(|r| {
                        vec![
                            r.age_group.to_string(),
                            r.percentage.to_string(),
                            r.label.to_string(),
                        ]
                    })
                    .collect(),
            ),
            Self::EmergencySavings => (
                vec!["category", "percentage", "count"],
                emergency_savings()
                    .iter()
                    .map(|r| {
                        vec![
                            r.category.to_string(),
                            r.percentage.to_string(),
                            r.count.to_string(),
                        ]
                    })
                    .collect(),
            ),
            Self::CostFactors => (
                vec!["factor", "impact", "description", "icon", "color"],
                cost_factors()
                    .iter()
                    .map(|r| {
                        vec![
                            r.factor.to_string(),
                            r.impact.to_string(),
                            r.description.to_string(),
                            r.icon.name().to_string(),
                            r.color.name().to_string(),
                        ]
                    })
                    .collect(),
            ),
            Self::HousingBurden => (
                vec!["city", "percentage", "avg_rent"],
                housing_burden()
                    .iter()
                    .map(|r| {
                        vec![
                            r.city.to_string(),
                            r.percentage.to_string(),
                            r.avg_rent.to_string(),
                        ]
                    })
                    .collect(),
            ),
            Self::DebtTypes => (
                vec!["type", "amount", "color"],
                debt_types()
                    .iter()
                    .map(|r| {
                        vec![
                            r.kind.to_string(),
                            r.amount.to_string(),
                            r.color.name().to_string(),
                        ]
                    })
                    .collect(),
            ),
        };
        Table { header, rows }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| Error::UnknownDataset {
                name: s.to_string(),
            })
    }
}

impl Table {
    /// Render as left-aligned, space-padded columns.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let format_row = |cells: Vec<&str>| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = vec![format_row(self.header.clone())];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            out.push(format_row(row.iter().map(String::as_str).collect()));
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(paycheck_status().len(), 2);
        assert_eq!(age_breakdown().len(), 4);
        assert_eq!(emergency_savings().len(), 3);
        assert_eq!(cost_factors().len(), 6);
        assert_eq!(housing_burden().len(), 6);
        assert_eq!(debt_types().len(), 5);
    }

    #[test]
    fn test_status_split_sums_to_100() {
        let total: u32 = paycheck_status()
            .iter()
            .map(|r| u32::from(r.percentage))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_age_groups_unique_and_ordered() {
        let groups: Vec<_> = age_breakdown().iter().map(|r| r.age_group).collect();
        let unique: HashSet<_> = groups.iter().collect();
        assert_eq!(unique.len(), groups.len());
        assert_eq!(groups, ["Under 35", "35-50", "50-65", "Over 65"]);
    }

    #[test]
    fn test_percentages_in_range() {
        let all = paycheck_status()
            .iter()
            .map(|r| r.percentage)
            .chain(age_breakdown().iter().map(|r| r.percentage))
            .chain(emergency_savings().iter().map(|r| r.percentage))
            .chain(cost_factors().iter().map(|r| r.impact))
            .chain(housing_burden().iter().map(|r| r.percentage))
            .chain(debt_types().iter().map(|r| r.amount));
        for value in all {
            assert!(value <= 100, "{value} out of range");
        }
    }

    #[test]
    fn test_toronto_rent() {
        let toronto = housing_burden()
            .iter()
            .find(|r| r.city == "Toronto")
            .unwrap();
        assert_eq!(toronto.percentage, 62);
        assert_eq!(toronto.avg_rent, "$2,600");
    }

    #[test]
    fn test_dataset_from_str() {
        assert_eq!(
            "cost-factors".parse::<Dataset>().unwrap(),
            Dataset::CostFactors
        );
        assert_eq!(
            "HOUSING_BURDEN".parse::<Dataset>().unwrap(),
            Dataset::HousingBurden
        );
        let err = "wages".parse::<Dataset>().unwrap_err();
        assert!(matches!(err, Error::UnknownDataset { .. }));
    }

    #[test]
    fn test_dataset_len_matches_table() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.table().rows.len(), dataset.len());
            assert!(!dataset.is_empty());
        }
    }

    #[test]
    fn test_debt_type_serializes_as_type() {
        let json = Dataset::DebtTypes.to_json().unwrap();
        assert_eq!(json[0]["type"], "Mortgages");
        assert_eq!(json[0]["color"], "red");
    }

    #[test]
    fn test_cost_factor_table_has_every_field() {
        let table = Dataset::CostFactors.table();
        assert_eq!(
            table.header,
            vec!["factor", "impact", "description", "icon", "color"]
        );
        assert_eq!(
            table.rows[0],
            vec!["Housing Costs", "95", "40-60% of income", "home", "red"]
        );
        assert!(table.rows.iter().all(|row| row.len() == table.header.len()));
    }

    #[test]
    fn test_table_to_plain() {
        let plain = Dataset::HousingBurden.table().to_plain();
        let lines: Vec<_> = plain.lines().collect();
        assert_eq!(lines.len(), 2 + 6);
        assert!(lines[0].starts_with("city"));
        assert!(lines[3].contains("Toronto"));
        assert!(lines[3].contains("$2,600"));
    }
}
