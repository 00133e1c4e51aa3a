//! # Diary API: Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or form fields
//! - `*Response` → serialized to client JSON
//! - Key names match the routes the diary frontend already calls

use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analysis::{
    AnalysisResult, EmotionDistribution, Intensity, PolarityScores, SentimentCategory,
};
use crate::error::{AppError, AppResult};
use crate::models::user::UserSummary;

// ============================================================================
// Common
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

/// POST /register
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: Option<String>,
}

/// POST /login. `username` may also be the account email.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: uuid::Uuid,
    pub username: String,
}

// ============================================================================
// Entries
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct EntryPayload {
    entry: Option<String>,
}

/// Entry text taken from either a form field or a JSON body named `entry`.
///
/// A missing or unparsable body yields empty text; handlers decide how to
/// reject it via [`EntryText::require`].
#[derive(Debug)]
pub struct EntryText(pub String);

impl EntryText {
    pub fn require(self, message: &str) -> AppResult<String> {
        if self.0.trim().is_empty() {
            return Err(AppError::BadRequest(message.into()));
        }
        Ok(self.0)
    }
}

#[async_trait]
impl<S> FromRequest<S> for EntryText
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let payload = if is_form {
            Form::<EntryPayload>::from_request(req, state)
                .await
                .map(|Form(p)| p)
                .ok()
        } else {
            Json::<EntryPayload>::from_request(req, state)
                .await
                .map(|Json(p)| p)
                .ok()
        };

        Ok(EntryText(
            payload.and_then(|p| p.entry).unwrap_or_default(),
        ))
    }
}

// ============================================================================
// Sentiment
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

/// Either scores or, when there was nothing to score, just a message.
#[derive(Debug, Default, Serialize)]
pub struct SentimentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<PolarityScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Date (`YYYY-MM-DD`) → mean compound score of that day's entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_data: Option<BTreeMap<String, f64>>,
}

impl SentimentResponse {
    pub fn empty(message: &str) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn scores(sentiment: PolarityScores) -> Self {
        Self {
            sentiment: Some(sentiment),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct SentimentCounts {
    pub happy: u32,
    pub neutral: u32,
    pub sad: u32,
}

#[derive(Debug, Serialize)]
pub struct SentimentCountsResponse {
    pub counts: SentimentCounts,
}

// ============================================================================
// Analysis
// ============================================================================

pub const TREND_INSIGHT_PLACEHOLDER: &str = "Not enough data for trend analysis yet.";

#[derive(Debug, Serialize)]
pub struct OverallSentiment {
    pub category: SentimentCategory,
    pub intensity: Intensity,
}

/// POST /get_comprehensive_analysis
#[derive(Debug, Serialize)]
pub struct ComprehensiveAnalysisResponse {
    pub overall_sentiment: OverallSentiment,
    pub emotions: EmotionDistribution,
    pub highlights: Vec<String>,
    pub mental_patterns: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    pub summary: String,
    pub trend_insight: String,
}

impl From<AnalysisResult> for ComprehensiveAnalysisResponse {
    fn from(r: AnalysisResult) -> Self {
        Self {
            overall_sentiment: OverallSentiment {
                category: r.category,
                intensity: r.intensity,
            },
            emotions: r.emotion_distribution,
            highlights: r.highlights,
            mental_patterns: r.mental_patterns,
            strengths: r.strengths,
            suggestions: r.suggestions,
            summary: r.summary,
            trend_insight: TREND_INSIGHT_PLACEHOLDER.into(),
        }
    }
}
