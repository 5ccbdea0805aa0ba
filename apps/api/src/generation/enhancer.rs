//! Experience enhancement — pluggable, trait-based external rewrite of work experience.
//!
//! `GeminiEnhancer` rewrites through the LLM client; `DisabledEnhancer` stands in
//! when no API key is configured. Callers go through [`enhance_with_fallback`],
//! which never fails: any provider error, timeout or empty answer falls back to
//! the rule-based rewriter and is only logged.
//!
//! `AppState` holds the chosen backend as `Arc<dyn EnhancementProvider>`.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::bullets::{rewrite_experience, BULLET_MARKER};
use crate::generation::prompts::build_enhance_prompt;
use crate::llm_client::{strip_code_fences, LlmClient, LlmError};

/// Characters trimmed from both ends of every provider line.
const STRAY_BULLET_CHARS: &[char] = &['-', '•', '\t', ' '];

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("AI enhancement is not configured")]
    Disabled,

    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("provider returned no usable bullet lines")]
    EmptyOutput,

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// An external experience rewriter. Implement this to swap backends without
/// touching the processor or handlers.
#[async_trait]
pub trait EnhancementProvider: Send + Sync {
    /// Short backend label used in logs.
    fn backend(&self) -> &'static str;

    /// False when the backend cannot be called at all (no credential).
    fn is_enabled(&self) -> bool {
        true
    }

    /// Rewrites `experience` into a bullet document, aligned to `job_description`.
    async fn enhance(
        &self,
        experience: &str,
        job_description: &str,
    ) -> Result<String, EnhanceError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

/// Backend used when no API key is configured.
pub struct DisabledEnhancer;

#[async_trait]
impl EnhancementProvider for DisabledEnhancer {
    fn backend(&self) -> &'static str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    async fn enhance(
        &self,
        _experience: &str,
        _job_description: &str,
    ) -> Result<String, EnhanceError> {
        Err(EnhanceError::Disabled)
    }
}

/// Rewrites experience through Gemini.
pub struct GeminiEnhancer(pub LlmClient);

#[async_trait]
impl EnhancementProvider for GeminiEnhancer {
    fn backend(&self) -> &'static str {
        "gemini"
    }

    async fn enhance(
        &self,
        experience: &str,
        job_description: &str,
    ) -> Result<String, EnhanceError> {
        let prompt = build_enhance_prompt(experience, job_description);
        let raw = self.0.call_text(&prompt).await?;
        format_provider_bullets(&raw).ok_or(EnhanceError::EmptyOutput)
    }
}

/// Normalizes free-form provider output into bullet lines.
///
/// Returns `None` when no line survives.
pub fn format_provider_bullets(raw: &str) -> Option<String> {
    let lines: Vec<String> = strip_code_fences(raw)
        .lines()
        .map(|line| strip_list_marker(line).trim_matches(STRAY_BULLET_CHARS))
        .filter(|line| !line.is_empty())
        .map(|line| format!("{BULLET_MARKER}{line}"))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Drops a leading Markdown `*` list marker. Emphasis like `**Led**` is kept.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix('*') {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => line,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback adapter
// ────────────────────────────────────────────────────────────────────────────

/// Experience document plus which path produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementOutcome {
    pub document: String,
    pub ai_enhanced: bool,
}

impl EnhancementOutcome {
    fn rule_based(experience: &str) -> Self {
        Self {
            document: rewrite_experience(experience),
            ai_enhanced: false,
        }
    }
}

/// Runs the provider with a bounded wait. A disabled provider goes straight to
/// the rule-based rewriter; every provider failure falls back to it.
pub async fn enhance_with_fallback(
    provider: &dyn EnhancementProvider,
    timeout: Duration,
    experience: &str,
    job_description: &str,
) -> EnhancementOutcome {
    if !provider.is_enabled() {
        return EnhancementOutcome::rule_based(experience);
    }

    let result = tokio::time::timeout(timeout, provider.enhance(experience, job_description))
        .await
        .unwrap_or_else(|_| Err(EnhanceError::Timeout(timeout)));

    match result {
        Ok(document) => {
            info!("Experience enhanced by {} provider", provider.backend());
            EnhancementOutcome {
                document,
                ai_enhanced: true,
            }
        }
        Err(e) => {
            warn!(
                "{} enhancement failed: {e}. Falling back to rule-based rewrite.",
                provider.backend()
            );
            EnhancementOutcome::rule_based(experience)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
