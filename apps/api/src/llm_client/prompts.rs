// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Output-format instruction appended to every bullet-producing prompt.
pub const BULLETS_ONLY_INSTRUCTION: &str = "Return ONLY the enhanced bullet points, \
    one per line, each starting with \"• \". \
    Do not include any other text or explanations.";
