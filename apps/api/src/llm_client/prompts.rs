// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// How the model must mark information the user did not provide.
pub const MISSING_INFO_INSTRUCTION: &str =
    "If information is missing, use [MISSING: <detail>] - DO NOT INVENT FACTS.";

/// Style guidance shared by every writing prompt.
pub const IMPACT_INSTRUCTION: &str = "\
- Use powerful action verbs (e.g., \"Spearheaded\", \"Orchestrated\", \"Engineered\").
- Focus on RESULTS and METRICS (e.g., \"increased efficiency by 30%\").";

/// Renders a value for a prompt DATA block; blanks become "Not provided".
pub fn field_or_placeholder(value: &str) -> &str {
    match value.trim() {
        "" => "Not provided",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_or_placeholder() {
        assert_eq!(field_or_placeholder("  Rust  "), "Rust");
        assert_eq!(field_or_placeholder(" \n"), "Not provided");
    }
}
