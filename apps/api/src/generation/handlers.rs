//! Axum route handlers for the generation and rendering API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::generate_package;
use crate::generation::strength::{profile_strength, StrengthReport};
use crate::generation::suggestions::{score_against_job, suggest_for_field};
use crate::layout::assembler::{build_elements, DocumentElement};
use crate::layout::styles::TemplateStyle;
use crate::models::resume::{suggested_filename, GeneratedText, ResumeForm};
use crate::render::render;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub resume_body: String,
    pub cover_letter_body: String,
    pub strength: StrengthReport,
}

/// Text to lay out, as returned by the generate route (possibly user-edited).
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub resume_body: String,
    #[serde(default)]
    pub cover_letter_body: String,
    #[serde(default)]
    pub template: TemplateStyle,
}

impl RenderRequest {
    fn elements(&self) -> Vec<DocumentElement> {
        let text = GeneratedText {
            resume_body: self.resume_body.clone(),
            cover_letter_body: self.cover_letter_body.clone(),
        };
        build_elements(&self.candidate_name, &text)
    }
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub elements: Vec<DocumentElement>,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub field: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub field: String,
    pub suggestion: String,
}

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    pub analysis: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// One model call for the résumé and cover letter, plus the form's profile strength.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<ResumeForm>,
) -> Result<Json<GenerateResponse>, AppError> {
    let generator = state.generator()?;
    info!(model = %state.config.gemini_model, "Generating résumé package");
    let generated = generate_package(&form, generator).await?;

    Ok(Json(GenerateResponse {
        resume_body: generated.resume_body,
        cover_letter_body: generated.cover_letter_body,
        strength: profile_strength(&form),
    }))
}

/// POST /api/v1/resumes/preview
///
/// Returns the element list the PDF route would render.
pub async fn handle_preview(Json(request): Json<RenderRequest>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        elements: request.elements(),
        filename: suggested_filename(&request.candidate_name),
    })
}

/// POST /api/v1/resumes/pdf
///
/// Renders the résumé and cover letter to a PDF download.
pub async fn handle_render_pdf(Json(request): Json<RenderRequest>) -> Result<Response, AppError> {
    let filename = suggested_filename(&request.candidate_name);
    let template = request.template;

    // Layout and serialization are CPU-bound.
    let document = tokio::task::spawn_blocking(move || render(&request.elements(), template))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    info!(
        template = %template,
        pages = document.page_count(),
        "Rendered PDF {filename}"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        document.into_bytes(),
    )
        .into_response())
}

/// POST /api/v1/suggestions
pub async fn handle_suggestion(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let generator = state.generator()?;
    let suggestion = suggest_for_field(&request.field, &request.text, generator).await?;

    Ok(Json(SuggestionResponse {
        field: request.field,
        suggestion,
    }))
}

/// POST /api/v1/ats/score
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(request): Json<AtsScoreRequest>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let generator = state.generator()?;
    let analysis =
        score_against_job(&request.resume_text, &request.job_description, generator).await?;

    Ok(Json(AtsScoreResponse { analysis }))
}

/// POST /api/v1/profile/strength
pub async fn handle_profile_strength(Json(form): Json<ResumeForm>) -> Json<StrengthReport> {
    Json(profile_strength(&form))
}

/// Header values must be visible ASCII; anything else in the name becomes `_`.
fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() => c,
            '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
