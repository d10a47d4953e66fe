// LLM prompt constants for role analysis.

/// Role analysis prompt template. Replace `{role}` before sending.
pub const ROLE_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the role: {role}

Return ONLY valid JSON.

FORMAT:
{
  "job_overview": {
    "summary": "",
    "responsibilities": []
  },
  "job_required_skills": {
    "technical": [],
    "non_technical": [],
    "tools": []
  },
  "preparation_roadmap": {
    "fundamentals": [],
    "advanced": [],
    "projects": [],
    "interview_topics": []
  }
}"#;

pub fn role_analysis_prompt(role: &str) -> String {
    ROLE_ANALYSIS_PROMPT_TEMPLATE.replace("{role}", role)
}
