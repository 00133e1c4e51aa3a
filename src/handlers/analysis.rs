use axum::{extract::State, Json};

use crate::analysis::analyze;
use crate::dto::{ComprehensiveAnalysisResponse, EntryText};
use crate::error::AppResult;
use crate::AppState;

pub async fn get_comprehensive_analysis(
    State(state): State<AppState>,
    text: EntryText,
) -> AppResult<Json<ComprehensiveAnalysisResponse>> {
    let text = text.require("No entry provided for analysis.")?;

    let result = analyze(state.scorer.as_ref(), &text);
    tracing::debug!(
        category = ?result.category,
        patterns = result.mental_patterns.len(),
        strengths = result.strengths.len(),
        "Entry analysed"
    );

    Ok(Json(result.into()))
}
