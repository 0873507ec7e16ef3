use serde::Serialize;

/// One period's income and expenses in the cash-flow chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub period: String,
    pub income: f64,
    pub expenses: f64,
}

impl SeriesPoint {
    pub fn new(period: impl Into<String>, income: f64, expenses: f64) -> Self {
        Self {
            period: period.into(),
            income,
            expenses,
        }
    }
}

/// Trailing window shown when the analyzer first opens.
const SEED: [(&str, f64, f64); 6] = [
    ("Jan", 4000.0, 3200.0),
    ("Feb", 3000.0, 2800.0),
    ("Mar", 5000.0, 4200.0),
    ("Apr", 4500.0, 3800.0),
    ("May", 6000.0, 5200.0),
    ("Jun", 5500.0, 4800.0),
];

/// Chronological, fixed-length window of cash-flow points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CashFlowSeries(Vec<SeriesPoint>);

impl CashFlowSeries {
    pub fn seeded() -> Self {
        Self(
            SEED.iter()
                .map(|(period, income, expenses)| SeriesPoint::new(*period, *income, *expenses))
                .collect(),
        )
    }

    pub fn from_points(points: Vec<SeriesPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.0
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CashFlowSeries {
    fn default() -> Self {
        Self::seeded()
    }
}
