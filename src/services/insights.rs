//! Metric engine: turns monthly income, expenses and savings into the three
//! classified insight metrics.
//!
//! Validation runs before anything is computed. A rejected input never
//! produces a metric, so callers can keep whatever they already display.

use tracing::debug;

use crate::config::{AnalyzerConfig, DisplaySettings, Thresholds};
use crate::error::InvalidInputError;
use crate::filters::{format_money, format_percent, round_one_decimal};
use crate::models::insight::{
    EXPENSE_RATIO_TITLE, INVESTMENT_POTENTIAL_TITLE, SAVINGS_RATE_TITLE,
};
use crate::models::{
    Classification, Field, IconHint, InsightMetric, InsightSet, ParsedInput, RawInput,
};

/// Unformatted results of one analysis, before display formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    /// Savings as a percentage of income, rounded to one decimal.
    pub savings_rate: f64,
    /// Expenses as a percentage of income, rounded to one decimal.
    pub expense_ratio: f64,
    /// Income minus expenses minus savings.
    pub leftover: f64,
}

impl Thresholds {
    pub fn classify_savings_rate(&self, savings_rate: f64) -> Classification {
        Classification::from_bool(savings_rate >= self.savings_rate_min)
    }

    pub fn classify_expense_ratio(&self, expense_ratio: f64) -> Classification {
        Classification::from_bool(expense_ratio <= self.expense_ratio_max)
    }

    pub fn classify_leftover(&self, leftover: f64) -> Classification {
        Classification::from_bool(leftover >= self.leftover_min)
    }
}

/// Parse and validate the raw form values.
///
/// Fields are checked in order income, expenses, savings and the first
/// failure is reported. Zero income is rejected after all three parse.
///
/// Parsing is strict: after trimming surrounding whitespace the whole value
/// must be a decimal number, so `"12abc"` or `"1,000"` is `NotANumber`
/// rather than being read as its numeric prefix.
pub fn parse_input(raw: &RawInput) -> Result<ParsedInput, InvalidInputError> {
    let income = parse_field(raw, Field::Income)?;
    let expenses = parse_field(raw, Field::Expenses)?;
    let savings = parse_field(raw, Field::Savings)?;

    if income == 0.0 {
        return Err(InvalidInputError::ZeroIncome);
    }

    Ok(ParsedInput::new(income, expenses, savings))
}

fn parse_field(raw: &RawInput, field: Field) -> Result<f64, InvalidInputError> {
    let text = raw.get(field).map(str::trim).unwrap_or("");
    let value: f64 = text.parse().map_err(|_| InvalidInputError::NotANumber {
        field,
        raw: text.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field });
    }

    Ok(value)
}

/// Derive the rounded ratios and the leftover amount.
pub fn ratios(input: &ParsedInput) -> Result<Ratios, InvalidInputError> {
    if input.income() == 0.0 {
        return Err(InvalidInputError::ZeroIncome);
    }

    let ratios = Ratios {
        savings_rate: round_one_decimal(input.savings() / input.income() * 100.0),
        expense_ratio: round_one_decimal(input.expenses() / input.income() * 100.0),
        leftover: input.income() - input.expenses() - input.savings(),
    };

    // Tiny incomes or huge amounts can still overflow.
    if !(ratios.savings_rate.is_finite()
        && ratios.expense_ratio.is_finite()
        && ratios.leftover.is_finite())
    {
        return Err(InvalidInputError::OutOfRange);
    }

    Ok(ratios)
}

/// Compute the full insight set for already validated input.
pub fn compute(
    input: &ParsedInput,
    config: &AnalyzerConfig,
) -> Result<InsightSet, InvalidInputError> {
    let ratios = ratios(input)?;
    let insights = build_insights(&ratios, &config.thresholds, &config.display);

    debug!(
        savings_rate = ratios.savings_rate,
        expense_ratio = ratios.expense_ratio,
        leftover = ratios.leftover,
        "Computed insights"
    );

    Ok(insights)
}

/// Validate then compute. Returns the parsed figures alongside the insights
/// so callers can fold them into the cash-flow series.
pub fn analyze(
    raw: &RawInput,
    config: &AnalyzerConfig,
) -> Result<(ParsedInput, InsightSet), InvalidInputError> {
    let input = parse_input(raw)?;
    let insights = compute(&input, config)?;
    Ok((input, insights))
}

fn build_insights(
    ratios: &Ratios,
    thresholds: &Thresholds,
    display: &DisplaySettings,
) -> InsightSet {
    let savings = thresholds.classify_savings_rate(ratios.savings_rate);
    let expenses = thresholds.classify_expense_ratio(ratios.expense_ratio);
    let leftover = thresholds.classify_leftover(ratios.leftover);

    InsightSet::new(
        InsightMetric {
            title: SAVINGS_RATE_TITLE,
            value: format_percent(ratios.savings_rate, &display.locale),
            change: change_label(savings, "+ Excellent", "- Needs Work"),
            classification: savings,
            icon: IconHint::PiggyBank,
        },
        InsightMetric {
            title: EXPENSE_RATIO_TITLE,
            value: format_percent(ratios.expense_ratio, &display.locale),
            change: change_label(expenses, "- Healthy", "+ High"),
            classification: expenses,
            icon: IconHint::Wallet,
        },
        InsightMetric {
            title: INVESTMENT_POTENTIAL_TITLE,
            value: format_money(ratios.leftover, &display.currency, &display.locale),
            change: change_label(leftover, "+ Available", "- Deficit"),
            classification: leftover,
            icon: IconHint::Coins,
        },
    )
}

fn change_label(classification: Classification, positive: &str, negative: &str) -> String {
    match classification {
        Classification::Positive => positive.to_string(),
        Classification::Negative => negative.to_string(),
    }
}
