//! Résumé package generation: one prompt built from the form, one model call,
//! output split into résumé and cover letter at the marker.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::FULL_PACKAGE_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{field_or_placeholder, IMPACT_INSTRUCTION, MISSING_INFO_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::models::resume::{GeneratedText, ResumeForm, COVER_LETTER_MARKER};

/// Builds the full-package prompt for a form.
pub fn build_resume_prompt(form: &ResumeForm) -> String {
    // User data goes in last so its text is never treated as a placeholder.
    FULL_PACKAGE_PROMPT_TEMPLATE
        .replace("{impact}", IMPACT_INSTRUCTION)
        .replace("{missing}", MISSING_INFO_INSTRUCTION)
        .replace("{marker}", COVER_LETTER_MARKER)
        .replace("{title}", field_or_placeholder(&form.title))
        .replace("{data}", &data_block(form))
}

fn data_block(form: &ResumeForm) -> String {
    let skills = form
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    [
        ("Name", form.name.as_str()),
        ("Job Title", form.title.as_str()),
        ("Email", form.email.as_str()),
        ("LinkedIn", form.linkedin.as_str()),
        ("Summary", form.summary.as_str()),
        ("Skills", skills.as_str()),
        ("Additional Skills", form.extra_skills.as_str()),
        ("Experience", form.experience.as_str()),
        ("Education", form.education.as_str()),
        ("Projects", form.projects.as_str()),
    ]
    .iter()
    .map(|(label, value)| format!("{label}: {}", field_or_placeholder(value)))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generates the résumé and cover-letter text for a form.
pub async fn generate_package(
    form: &ResumeForm,
    generator: &dyn TextGenerator,
) -> Result<GeneratedText, AppError> {
    let prompt = build_resume_prompt(form);
    let output = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let generated = GeneratedText::from_model_output(&output);
    if generated.cover_letter_body.is_empty() {
        warn!("Model output contained no cover letter");
    }

    info!(
        resume_chars = generated.resume_body.len(),
        cover_letter_chars = generated.cover_letter_body.len(),
        "Generated résumé package"
    );

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct Canned(&'static str);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn form() -> ResumeForm {
        ResumeForm {
            name: "Jane Doe".to_string(),
            title: "Staff Engineer".to_string(),
            skills: vec!["Rust".to_string(), " ".to_string(), "SQL".to_string()],
            experience: "Acme 2019-2024 {marker}".to_string(),
            ..ResumeForm::default()
        }
    }

    #[test]
    fn test_prompt_contains_form_data_and_marker() {
        let prompt = build_resume_prompt(&form());
        assert!(prompt.contains("Name: Jane Doe"));
        assert!(prompt.contains("keywords for Staff Engineer"));
        assert!(prompt.contains("Skills: Rust, SQL"));
        assert!(prompt.contains("Education: Not provided"));
        assert!(prompt.contains("[MISSING: <detail>]"));
        assert_eq!(prompt.matches(COVER_LETTER_MARKER).count(), 1);
    }

    #[test]
    fn test_user_text_is_not_substituted() {
        let prompt = build_resume_prompt(&form());
        assert!(prompt.contains("Experience: Acme 2019-2024 {marker}"));
    }

    #[tokio::test]
    async fn test_generate_package_splits_output() {
        let generator = Canned("JANE DOE\nEXPERIENCE\n===COVER_LETTER===\nDear Hiring Manager,");
        let generated = generate_package(&form(), &generator).await.unwrap();
        assert_eq!(generated.resume_body, "JANE DOE\nEXPERIENCE");
        assert_eq!(generated.cover_letter_body, "Dear Hiring Manager,");
    }

    #[tokio::test]
    async fn test_generator_failure_maps_to_llm_error() {
        let err = generate_package(&form(), &Failing).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
