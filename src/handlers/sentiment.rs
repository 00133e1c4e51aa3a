use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{Duration, Local, NaiveDate};

use crate::analysis::{PolarityScorer, PolarityScores};
use crate::dto::{
    EntryText, Period, SentimentCounts, SentimentCountsResponse, SentimentResponse,
};
use crate::error::AppResult;
use crate::models::entry::{date_label, Entry};
use crate::AppState;

const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30;

/// Scores all texts as one document, oldest entry first.
fn score_joined(scorer: &dyn PolarityScorer, entries: &[Entry]) -> PolarityScores {
    let joined = entries
        .iter()
        .rev()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    scorer.score(&joined)
}

/// Entries dated within `[today - days, today]`. Undated labels are skipped.
pub fn entries_within(entries: Vec<Entry>, today: NaiveDate, days: i64) -> Vec<Entry> {
    let start = today - Duration::days(days);
    entries
        .into_iter()
        .filter(|e| e.date().is_some_and(|d| start <= d && d <= today))
        .collect()
}

/// Mean compound score per calendar day.
pub fn daily_averages(scorer: &dyn PolarityScorer, entries: &[Entry]) -> BTreeMap<String, f64> {
    let mut by_day: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for entry in entries {
        if let Some(date) = entry.date() {
            by_day
                .entry(date.format("%Y-%m-%d").to_string())
                .or_default()
                .push(scorer.score(&entry.text).compound);
        }
    }

    by_day
        .into_iter()
        .map(|(day, scores)| {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (day, mean)
        })
        .collect()
}

pub fn count_by_polarity<I>(compounds: I) -> SentimentCounts
where
    I: IntoIterator<Item = f64>,
{
    let mut counts = SentimentCounts::default();
    for compound in compounds {
        if compound > 0.0 {
            counts.happy += 1;
        } else if compound == 0.0 {
            counts.neutral += 1;
        } else {
            counts.sad += 1;
        }
    }
    counts
}

pub async fn get_sentiment(State(state): State<AppState>) -> AppResult<Json<SentimentResponse>> {
    let entries = state.store.list_entries().await?;
    if entries.is_empty() {
        return Ok(Json(SentimentResponse::empty(
            "No entries available for sentiment analysis.",
        )));
    }
    Ok(Json(SentimentResponse::scores(score_joined(
        state.scorer.as_ref(),
        &entries,
    ))))
}

pub async fn get_current_entry_sentiment(
    State(state): State<AppState>,
    text: EntryText,
) -> AppResult<Json<SentimentResponse>> {
    let text = text.require("No entry provided for sentiment analysis.")?;
    Ok(Json(SentimentResponse::scores(state.scorer.score(&text))))
}

pub async fn get_daily_sentiment(
    State(state): State<AppState>,
) -> AppResult<Json<SentimentResponse>> {
    let today = date_label(Local::now().date_naive());
    let entries: Vec<Entry> = state
        .store
        .list_entries()
        .await?
        .into_iter()
        .filter(|e| e.date_label == today)
        .collect();

    if entries.is_empty() {
        return Ok(Json(SentimentResponse::empty("No entries available for today.")));
    }

    Ok(Json(SentimentResponse {
        period: Some(Period::Daily),
        ..SentimentResponse::scores(score_joined(state.scorer.as_ref(), &entries))
    }))
}

pub async fn get_weekly_sentiment(
    State(state): State<AppState>,
) -> AppResult<Json<SentimentResponse>> {
    period_sentiment(
        &state,
        WEEK_DAYS,
        Period::Weekly,
        "No entries available for the past week.",
    )
    .await
}

pub async fn get_monthly_sentiment(
    State(state): State<AppState>,
) -> AppResult<Json<SentimentResponse>> {
    period_sentiment(
        &state,
        MONTH_DAYS,
        Period::Monthly,
        "No entries available for the past month.",
    )
    .await
}

async fn period_sentiment(
    state: &AppState,
    days: i64,
    period: Period,
    empty_message: &str,
) -> AppResult<Json<SentimentResponse>> {
    let today = Local::now().date_naive();
    let entries = entries_within(state.store.list_entries().await?, today, days);

    if entries.is_empty() {
        return Ok(Json(SentimentResponse::empty(empty_message)));
    }

    let scorer = state.scorer.as_ref();
    Ok(Json(SentimentResponse {
        sentiment: Some(score_joined(scorer, &entries)),
        period: Some(period),
        daily_data: Some(daily_averages(scorer, &entries)),
        message: None,
    }))
}

pub async fn get_sentiment_counts(
    State(state): State<AppState>,
) -> AppResult<Json<SentimentCountsResponse>> {
    let entries = state.store.list_entries().await?;
    let counts = count_by_polarity(entries.iter().map(|e| state.scorer.score(&e.text).compound));
    Ok(Json(SentimentCountsResponse { counts }))
}
