//! Series aggregator for the monthly cash-flow chart.

use crate::models::{CashFlowSeries, ParsedInput};

/// Fold new actuals into the series.
///
/// The last point's income and expenses are overwritten and its period label
/// is kept, so the window never grows. An empty series is returned as is.
pub fn update(series: &CashFlowSeries, income: f64, expenses: f64) -> CashFlowSeries {
    let mut points = series.points().to_vec();
    if let Some(last) = points.last_mut() {
        last.income = income;
        last.expenses = expenses;
    }
    CashFlowSeries::from_points(points)
}

/// [`update`] with the figures of a validated analyzer input.
pub fn fold_input(series: &CashFlowSeries, input: &ParsedInput) -> CashFlowSeries {
    update(series, input.income(), input.expenses())
}
