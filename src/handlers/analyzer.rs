use askama::Template;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use tower_cookies::Cookies;
use tracing::debug;

use crate::config::DisplaySettings;
use crate::error::{AppResult, RenderHtml};
use crate::filters::format_money;
use crate::models::{BreakdownSlice, InsightMetric, RawInput, SPENDING_BREAKDOWN};
use crate::session::{session_id, AnalyzerState};
use crate::state::AppState;
use crate::VERSION;

/// One row of the cash-flow table, already formatted.
pub struct SeriesRow {
    pub period: String,
    pub income: String,
    pub expenses: String,
}

#[derive(Template)]
#[template(path = "pages/analyzer.html")]
pub struct AnalyzerTemplate {
    pub title: String,
    pub version: &'static str,
    pub currency_symbol: &'static str,
    pub metrics: Vec<InsightMetric>,
    pub series_rows: Vec<SeriesRow>,
    /// Chart payload, consumed by the page script.
    pub series_json: String,
    pub breakdown: Vec<BreakdownSlice>,
}

impl AnalyzerTemplate {
    fn build(analyzer: &AnalyzerState, display: &DisplaySettings) -> AppResult<Self> {
        let series_rows = analyzer
            .series
            .points()
            .iter()
            .map(|point| SeriesRow {
                period: point.period.clone(),
                income: format_money(point.income, &display.currency, &display.locale),
                expenses: format_money(point.expenses, &display.currency, &display.locale),
            })
            .collect();

        Ok(Self {
            title: "Financial Health Analyzer".into(),
            version: VERSION,
            currency_symbol: crate::filters::currency_symbol(&display.currency),
            metrics: analyzer.metrics.as_slice().to_vec(),
            series_rows,
            series_json: serde_json::to_string(&analyzer.series)?,
            breakdown: SPENDING_BREAKDOWN.to_vec(),
        })
    }
}

pub async fn index(State(state): State<AppState>, cookies: Cookies) -> AppResult<Html<String>> {
    let id = session_id(&cookies);
    let analyzer = state.sessions.current(&id);

    AnalyzerTemplate::build(&analyzer, &state.config.analyzer.display)?.render_html()
}

/// Form submit. Invalid input is a silent no-op: the page is shown again
/// with whatever it displayed before.
pub async fn submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(input): Form<RawInput>,
) -> Redirect {
    let id = session_id(&cookies);

    match state.sessions.submit(&id, &input, &state.config.analyzer) {
        Ok(analyzer) => {
            debug!(
                savings_rate = %analyzer.metrics.savings_rate().value,
                expense_ratio = %analyzer.metrics.expense_ratio().value,
                "Analyzer updated"
            );
        }
        Err((e, _)) => {
            debug!(error = %e, "Analyzer input ignored");
        }
    }

    Redirect::to("/analyzer")
}
