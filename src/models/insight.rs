use serde::Serialize;

pub const SAVINGS_RATE_TITLE: &str = "Savings Rate";
pub const EXPENSE_RATIO_TITLE: &str = "Expense Ratio";
pub const INVESTMENT_POTENTIAL_TITLE: &str = "Investment Potential";

/// Shown for value and change before the first successful analysis.
pub const PLACEHOLDER: &str = "\u{2014}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Positive,
    Negative,
}

impl Classification {
    pub fn from_bool(is_positive: bool) -> Self {
        if is_positive {
            Classification::Positive
        } else {
            Classification::Negative
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Classification::Positive)
    }
}

/// Which icon the presentation layer draws on a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconHint {
    PiggyBank,
    Wallet,
    Coins,
}

impl IconHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconHint::PiggyBank => "piggy-bank",
            IconHint::Wallet => "wallet",
            IconHint::Coins => "coins",
        }
    }
}

impl std::fmt::Display for IconHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightMetric {
    pub title: &'static str,
    pub value: String,
    /// Trend label next to the value, e.g. "+ Excellent".
    pub change: String,
    pub classification: Classification,
    pub icon: IconHint,
}

impl InsightMetric {
    pub fn placeholder(title: &'static str, icon: IconHint) -> Self {
        Self {
            title,
            value: PLACEHOLDER.into(),
            change: PLACEHOLDER.into(),
            classification: Classification::Positive,
            icon,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.classification.is_positive()
    }
}

/// The three insight metrics, always replaced together.
///
/// Order is fixed: savings rate, expense ratio, investment potential.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSet([InsightMetric; 3]);

impl InsightSet {
    pub fn new(
        savings_rate: InsightMetric,
        expense_ratio: InsightMetric,
        investment_potential: InsightMetric,
    ) -> Self {
        Self([savings_rate, expense_ratio, investment_potential])
    }

    pub fn placeholder() -> Self {
        Self::new(
            InsightMetric::placeholder(SAVINGS_RATE_TITLE, IconHint::PiggyBank),
            InsightMetric::placeholder(EXPENSE_RATIO_TITLE, IconHint::Wallet),
            InsightMetric::placeholder(INVESTMENT_POTENTIAL_TITLE, IconHint::Coins),
        )
    }

    pub fn savings_rate(&self) -> &InsightMetric {
        &self.0[0]
    }

    pub fn expense_ratio(&self) -> &InsightMetric {
        &self.0[1]
    }

    pub fn investment_potential(&self) -> &InsightMetric {
        &self.0[2]
    }

    pub fn as_slice(&self) -> &[InsightMetric] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InsightMetric> {
        self.0.iter()
    }
}

impl Default for InsightSet {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// A slice of the suggested needs/wants/savings split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub name: &'static str,
    pub percent: u8,
    pub color: &'static str,
}

/// Suggested monthly budget split shown beside the cash-flow chart.
pub const SPENDING_BREAKDOWN: [BreakdownSlice; 3] = [
    BreakdownSlice {
        name: "Needs",
        percent: 50,
        color: "#0088FE",
    },
    BreakdownSlice {
        name: "Wants",
        percent: 30,
        color: "#00C49F",
    },
    BreakdownSlice {
        name: "Savings",
        percent: 20,
        color: "#FFBB28",
    },
];
