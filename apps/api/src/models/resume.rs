use serde::{Deserialize, Serialize};

/// Separator the generation prompt asks the model to place between the résumé
/// and the cover letter.
pub const COVER_LETTER_MARKER: &str = "===COVER_LETTER===";

/// Raw résumé form data, passed by value into each request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeForm {
    pub name: String,
    pub title: String,
    pub email: String,
    pub linkedin: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub extra_skills: String,
    pub experience: String,
    pub education: String,
    pub projects: String,
}

/// The two text bodies produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedText {
    pub resume_body: String,
    pub cover_letter_body: String,
}

impl GeneratedText {
    /// Splits model output on [`COVER_LETTER_MARKER`].
    ///
    /// Without the marker the whole output is the résumé and the cover letter is
    /// empty. With it, both halves are trimmed; only the first marker splits.
    pub fn from_model_output(text: &str) -> Self {
        match text.split_once(COVER_LETTER_MARKER) {
            Some((resume, cover)) => GeneratedText {
                resume_body: resume.trim().to_string(),
                cover_letter_body: cover.trim().to_string(),
            },
            None => GeneratedText {
                resume_body: text.to_string(),
                cover_letter_body: String::new(),
            },
        }
    }
}

/// Download filename for a candidate's PDF: spaces become underscores.
///
/// A whitespace-only name is treated like an empty one and gets the
/// `Candidate` placeholder, matching the document heading; otherwise the
/// filename would be a run of underscores.
pub fn suggested_filename(candidate_name: &str) -> String {
    let name = match candidate_name.trim() {
        "" => "Candidate",
        name => name,
    };
    format!("{}_Resume.pdf", name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_marker_trims_both_halves() {
        let text = "JANE DOE\nSUMMARY\n\n===COVER_LETTER===\n\nDear Hiring Manager,\n";
        let generated = GeneratedText::from_model_output(text);
        assert_eq!(generated.resume_body, "JANE DOE\nSUMMARY");
        assert_eq!(generated.cover_letter_body, "Dear Hiring Manager,");
    }

    #[test]
    fn test_missing_marker_keeps_whole_text_as_resume() {
        let generated = GeneratedText::from_model_output("Error: quota exceeded");
        assert_eq!(generated.resume_body, "Error: quota exceeded");
        assert!(generated.cover_letter_body.is_empty());
    }

    #[test]
    fn test_only_first_marker_splits() {
        let text = "A===COVER_LETTER===B===COVER_LETTER===C";
        let generated = GeneratedText::from_model_output(text);
        assert_eq!(generated.resume_body, "A");
        assert_eq!(generated.cover_letter_body, "B===COVER_LETTER===C");
    }

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("Jane Q Doe"), "Jane_Q_Doe_Resume.pdf");
        assert_eq!(suggested_filename(""), "Candidate_Resume.pdf");
        assert_eq!(suggested_filename("  "), "Candidate_Resume.pdf");
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let form: ResumeForm = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert_eq!(form.name, "Jane");
        assert!(form.skills.is_empty());
        assert!(form.projects.is_empty());
    }
}
