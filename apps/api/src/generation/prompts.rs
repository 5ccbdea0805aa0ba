// All LLM prompt constants for the generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::BULLETS_ONLY_INSTRUCTION;

/// Characters of job description forwarded to the provider as alignment context.
pub const JOB_CONTEXT_CHARS: usize = 500;

/// Fixed opening of the experience rewrite prompt.
pub const ENHANCE_PROMPT_PREAMBLE: &str = "You are a professional resume writer. Transform the following work experience description into optimized, ATS-friendly bullet points.

Use strong action verbs, quantify achievements where possible, and make it professional and concise.";

/// Builds the rewrite prompt. The job context line is omitted when the
/// description is empty.
pub fn build_enhance_prompt(experience: &str, job_description: &str) -> String {
    let job_context = if job_description.trim().is_empty() {
        String::new()
    } else {
        let excerpt: String = job_description.chars().take(JOB_CONTEXT_CHARS).collect();
        format!("Target job context (for better alignment): {excerpt}")
    };

    // Single pass: braces in user text are never treated as placeholders.
    format!(
        "{ENHANCE_PROMPT_PREAMBLE}\n\nOriginal experience:\n{experience}\n\n{job_context}\n\n{BULLETS_ONLY_INSTRUCTION}"
    )
}
