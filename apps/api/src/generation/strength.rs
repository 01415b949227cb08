//! Profile strength: a weighted completion score over the form fields.

use serde::Serialize;

use crate::models::resume::ResumeForm;

/// (field name, weight). Weights sum to 100.
pub const FIELD_WEIGHTS: &[(&str, u32)] = &[
    ("name", 10),
    ("title", 10),
    ("summary", 20),
    ("skills", 20),
    ("experience", 20),
    ("projects", 20),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    /// 0–100.
    pub score: u32,
    pub missing: Vec<String>,
}

pub fn profile_strength(form: &ResumeForm) -> StrengthReport {
    let mut score = 0;
    let mut missing = Vec::new();

    for &(field, weight) in FIELD_WEIGHTS {
        if is_filled(form, field) {
            score += weight;
        } else {
            missing.push(field.to_string());
        }
    }

    StrengthReport { score, missing }
}

fn is_filled(form: &ResumeForm, field: &str) -> bool {
    let text = match field {
        "name" => &form.name,
        "title" => &form.title,
        "summary" => &form.summary,
        "skills" => return form.skills.iter().any(|s| !s.trim().is_empty()),
        "experience" => &form.experience,
        "projects" => &form.projects,
        _ => return false,
    };
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one_hundred() {
        assert_eq!(FIELD_WEIGHTS.iter().map(|(_, w)| w).sum::<u32>(), 100);
    }

    #[test]
    fn test_empty_form_scores_zero() {
        let report = profile_strength(&ResumeForm::default());
        assert_eq!(report.score, 0);
        assert_eq!(report.missing.len(), FIELD_WEIGHTS.len());
    }

    #[test]
    fn test_partial_form() {
        let form = ResumeForm {
            name: "Jane".to_string(),
            summary: "Engineer".to_string(),
            skills: vec!["  ".to_string()],
            experience: "Acme".to_string(),
            ..ResumeForm::default()
        };
        let report = profile_strength(&form);
        assert_eq!(report.score, 50);
        assert_eq!(report.missing, vec!["title", "skills", "projects"]);
    }
}
