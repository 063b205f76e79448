// Prompt constants for the analysis module.

/// ATS evaluation prompt template. Replace `{resume_text}` and
/// `{job_description}` before sending. The reply contract (one JSON object with
/// the keys `JD Match`, `MissingKeywords`, `Profile Summary`) is part of the
/// external API shape — do not reword the structure line.
pub const ATS_PROMPT_TEMPLATE: &str = r#"Hey Act Like a skilled or very experience ATS(Application Tracking System)
with a deep understanding of tech field, software engineering, data science, data analyst
and big data engineer. Your task is to evaluate the resume based on the given job description.
You must consider the job market is very competitive and you should provide
best assistance for improving the resumes. Assign the percentage Matching based
on JD and the missing keywords with high accuracy

resume:{resume_text}
description:{job_description}

I want the response in one single string having the structure
{"JD Match":"%","MissingKeywords":[],"Profile Summary":""}"#;

/// Builds the analysis prompt. Inputs are embedded verbatim — no escaping
/// (prompt injection is an accepted limitation of this service).
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ATS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
