//! Dashboard endpoint handler.

use axum::extract::State;
use axum::response::Html;

use kiroku::db::operations;
use kiroku::report;

use crate::error::AppResult;
use crate::routes::AppState;
use crate::views;

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    let history = operations::weight_history(&state.pool).await?;
    let series = report::group_by_workout(&history);
    let chart = report::render_bar_chart(&series);
    Ok(Html(views::dashboard_page(&chart)))
}
