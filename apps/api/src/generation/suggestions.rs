//! Per-field writing suggestions and résumé/job-description match analysis.

use crate::errors::AppError;
use crate::generation::prompts::{
    ATS_MATCH_PROMPT_TEMPLATE, FIELD_IMPROVE_PROMPT_TEMPLATE, FIELD_TIPS_PROMPT_TEMPLATE,
};
use crate::llm_client::TextGenerator;

/// Tips for an empty field, a rewrite request for a filled one.
pub fn build_field_prompt(field: &str, text: &str) -> String {
    if text.trim().is_empty() {
        FIELD_TIPS_PROMPT_TEMPLATE.replace("{field}", field)
    } else {
        FIELD_IMPROVE_PROMPT_TEMPLATE
            .replace("{field}", field)
            .replace("{content}", text.trim())
    }
}

pub fn build_ats_prompt(resume_text: &str, job_description: &str) -> String {
    ATS_MATCH_PROMPT_TEMPLATE
        .replace("{job_description}", job_description.trim())
        .replace("{resume}", resume_text.trim())
}

pub async fn suggest_for_field(
    field: &str,
    text: &str,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    if field.trim().is_empty() {
        return Err(AppError::Validation("field cannot be empty".to_string()));
    }
    generator
        .generate(&build_field_prompt(field.trim(), text))
        .await
        .map_err(|e| AppError::Llm(e.to_string()))
}

pub async fn score_against_job(
    resume_text: &str,
    job_description: &str,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text and job_description are both required".to_string(),
        ));
    }
    generator
        .generate(&build_ats_prompt(resume_text, job_description))
        .await
        .map_err(|e| AppError::Llm(e.to_string()))
}
