// All LLM prompt templates for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.
// Templates use `{name}` placeholders filled with `str::replace`.

/// Full résumé + cover letter prompt.
/// Replace `{title}`, `{impact}`, `{missing}`, `{data}` and `{marker}` before sending.
pub const FULL_PACKAGE_PROMPT_TEMPLATE: &str = r#"You are a world-class executive resume writer. Your task is to transform raw data into a high-impact resume and a tailored cover letter.

CRITICAL INSTRUCTIONS:
{impact}
- Ensure the resume is 100% ATS-FRIENDLY with relevant keywords for {title}.
- {missing}
- Format with clear sections: HEADER, PROFESSIONAL SUMMARY, CORE SKILLS, PROFESSIONAL EXPERIENCE, PROJECTS/ACHIEVEMENTS, EDUCATION.
- Write section headings on their own line in UPPER CASE. Start every bullet with "- ".
- Plain text only. No markdown, no tables.

DATA PROVIDED:
{data}

Output Format:
RESUME CONTENT
...
{marker}
Dear Hiring Manager,
..."#;

/// Tips for a field the user has not filled in yet. Replace `{field}`.
pub const FIELD_TIPS_PROMPT_TEMPLATE: &str = "Resume Field: '{field}'. \
Give 3 tips for writing this and 1 short example. Focus on impact and ATS keywords.";

/// Rewrite suggestions for a filled-in field. Replace `{field}` and `{content}`.
pub const FIELD_IMPROVE_PROMPT_TEMPLATE: &str = r#"Field: {field}
Content: {content}

Task: Improve this for a professional resume.
1. Rewrite it to be more impactful (STAR method).
2. Identify [MISSING: info].
3. Suggest 2 relevant keywords for ATS."#;

/// Résumé vs. job description comparison.
/// Replace `{resume}` and `{job_description}`.
pub const ATS_MATCH_PROMPT_TEMPLATE: &str = r#"Compare the following Resume and Job Description.
RESUME: {resume}
JOB DESCRIPTION: {job_description}

1. Give an ATS Match Score (0-100%).
2. Identify 5 missing keywords.
3. Suggest 3 bullet point improvements to better align with this specific role."#;
