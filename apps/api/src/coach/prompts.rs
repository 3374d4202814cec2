// All LLM prompt constants for the coaching features.
// Every template describes the exact JSON schema expected in the reply and
// ends with the JSON-only reminder; the extraction layer handles the rest.

/// System persona for resume analysis.
pub const ANALYZER_SYSTEM: &str =
    "You are an expert ATS resume analyzer. Always return valid JSON only.";

/// Resume analysis prompt template. Replace `{resume}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and provide a comprehensive ATS (Applicant Tracking System) analysis.

Resume:
{resume}

Please provide a JSON response with the following structure:
{
  "atsScore": <number between 0-100>,
  "weakSections": [<array of section names that need improvement>],
  "suggestions": [<array of improved bullet points or suggestions>],
  "missingInfo": [<array of missing information that should be added>]
}

Focus on:
1. ATS-friendly formatting and keywords
2. Quantifiable achievements
3. Action verbs
4. Relevant skills and experience
5. Professional structure

Return ONLY valid JSON, no additional text."#;

/// System persona for JD matching.
pub const MATCHER_SYSTEM: &str =
    "You are an expert resume-to-job-description matcher. Always return valid JSON only.";

/// JD match prompt template. Replace `{resume}` and `{job_description}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Analyze how well the following resume matches the job description.

Resume:
{resume}

Job Description:
{job_description}

Please provide a JSON response with the following structure:
{
  "matchScore": <number between 0-100>,
  "keywordMatches": {
    "matched": [<array of keywords that match>],
    "missing": [<array of important keywords from JD that are missing>]
  },
  "optimizedSummary": "<A 2-3 sentence resume summary tailored to this job>",
  "improvedBullets": [<array of 3-5 improved bullet points that better match the JD>]
}

Focus on:
1. Keyword alignment
2. Skill matching
3. Experience relevance
4. Industry-specific terminology

Return ONLY valid JSON, no additional text."#;

/// System persona for STAR answer generation.
pub const STAR_SYSTEM: &str =
    "You are an expert interview coach specializing in STAR method answers. Always return valid JSON only.";

/// STAR generation prompt template.
/// Replace `{question}`, `{user_notes}`, and `{role_context}` before sending.
/// `{role_context}` is a single sentence naming the target role, or empty.
pub const STAR_PROMPT_TEMPLATE: &str = r#"Generate a structured STAR (Situation, Task, Action, Result) answer for the following interview question.

Interview Question:
{question}

User Context/Notes:
{user_notes}

{role_context}

Please provide a JSON response with the following structure:
{
  "situation": "<Clear description of the situation/context>",
  "task": "<The task or challenge you faced>",
  "action": "<Specific actions you took to address the task>",
  "result": "<Quantifiable results and outcomes achieved>",
  "fullAnswer": "<A polished, complete STAR answer combining all elements>"
}

Make the answer:
- Professional and concise
- Quantifiable where possible
- Relevant to the question
- Tailored to the job role if provided

Return ONLY valid JSON, no additional text."#;
