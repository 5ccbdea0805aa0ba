use serde::{Deserialize, Serialize};

/// Candidate data as posted by the front end.
///
/// Every field defaults to an empty string; required-field checks happen in the
/// HTTP handler, not here. Only `skills`, `experience` and `job_description`
/// are read by the processor; the rest are echoed back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRequest {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub portfolio: String,
    /// Comma-separated skill list, e.g. `"Python, SQL, Docker"`.
    pub skills: String,
    pub experience: String,
    pub job_description: String,
}

/// Enhanced resume payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResult {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub portfolio: String,
    pub skills: Vec<String>,
    /// Newline-joined bullet lines.
    pub experience: String,
    /// 0 – 100
    pub score: u32,
    /// At most 10 entries.
    pub matched_keywords: Vec<String>,
    /// True only when the external provider produced `experience`.
    pub ai_enhanced: bool,
}
