pub mod input;
pub mod insight;
pub mod series;

pub use input::{Field, ParsedInput, RawInput};
pub use insight::{
    BreakdownSlice, Classification, IconHint, InsightMetric, InsightSet, SPENDING_BREAKDOWN,
};
pub use series::{CashFlowSeries, SeriesPoint};
