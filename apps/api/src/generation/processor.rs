//! Resume processing — orchestrates the enhancement pipeline for one request.
//!
//! Flow: extract_keywords → calculate_match_score → enhance_with_fallback →
//!       assemble ResumeResult.
//!
//! `process` is total: it never fails for a deserialized request. Required-field
//! checks belong to the HTTP handler; missing fields here are empty strings.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::generation::enhancer::{enhance_with_fallback, EnhancementProvider};
use crate::generation::fit_scoring::{calculate_match_score, parse_skills};
use crate::generation::keywords::extract_keywords;
use crate::models::resume::{ResumeRequest, ResumeResult};

/// Number of extracted keywords echoed back as `matchedKeywords`.
const MATCHED_KEYWORDS_LIMIT: usize = 10;

/// Stateless per-request pipeline. Shared across handlers behind an `Arc`.
pub struct ResumeProcessor {
    enhancer: Arc<dyn EnhancementProvider>,
    enhancement_timeout: Duration,
}

impl ResumeProcessor {
    pub fn new(enhancer: Arc<dyn EnhancementProvider>, enhancement_timeout: Duration) -> Self {
        Self {
            enhancer,
            enhancement_timeout,
        }
    }

    /// True when a configured external provider will be tried first.
    pub fn ai_enabled(&self) -> bool {
        self.enhancer.is_enabled()
    }

    pub async fn process(&self, request: &ResumeRequest) -> ResumeResult {
        // Step 1: Keywords
        let keywords = extract_keywords(&request.job_description);

        // Step 2: Match score
        let score = calculate_match_score(&request.skills, &keywords);
        info!(
            "Extracted {} keywords, match score {}/100",
            keywords.len(),
            score
        );

        // Step 3: Experience rewrite (provider first when configured)
        let outcome = enhance_with_fallback(
            self.enhancer.as_ref(),
            self.enhancement_timeout,
            &request.experience,
            &request.job_description,
        )
        .await;

        // Step 4: Assemble
        ResumeResult {
            full_name: request.full_name.clone(),
            job_title: request.job_title.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            location: request.location.clone(),
            portfolio: request.portfolio.clone(),
            skills: parse_skills(&request.skills),
            experience: outcome.document,
            score,
            matched_keywords: keywords.into_iter().take(MATCHED_KEYWORDS_LIMIT).collect(),
            ai_enhanced: outcome.ai_enhanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::generation::bullets::rewrite_experience;
    use crate::generation::enhancer::{DisabledEnhancer, EnhanceError};
    use crate::llm_client::LlmError;

    struct CannedEnhancer;

    #[async_trait]
    impl EnhancementProvider for CannedEnhancer {
        fn backend(&self) -> &'static str {
            "canned"
        }

        async fn enhance(&self, _e: &str, _j: &str) -> Result<String, EnhanceError> {
            Ok("• Led a team of five engineers".to_string())
        }
    }

    struct BrokenEnhancer;

    #[async_trait]
    impl EnhancementProvider for BrokenEnhancer {
        fn backend(&self) -> &'static str {
            "broken"
        }

        async fn enhance(&self, _e: &str, _j: &str) -> Result<String, EnhanceError> {
            Err(EnhanceError::Llm(LlmError::EmptyContent))
        }
    }

    fn processor(enhancer: Arc<dyn EnhancementProvider>) -> ResumeProcessor {
        ResumeProcessor::new(enhancer, Duration::from_secs(5))
    }

    fn sample_request() -> ResumeRequest {
        ResumeRequest {
            full_name: "Ada Lovelace".to_string(),
            job_title: "Backend Engineer".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 0000 0000".to_string(),
            location: "London".to_string(),
            portfolio: "https://ada.dev".to_string(),
            skills: "Python, SQL, Docker".to_string(),
            experience: "I managed a team of five. We improved deployment speed.".to_string(),
            job_description: "We need a Python developer with Docker and SQL experience, strong communication skills.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_rule_based_end_to_end() {
        let result = processor(Arc::new(DisabledEnhancer))
            .process(&sample_request())
            .await;

        assert_eq!(
            result.matched_keywords,
            vec!["python", "docker", "sql", "communication"]
        );
        assert_eq!(result.score, 75);
        assert_eq!(result.skills, vec!["Python", "SQL", "Docker"]);
        assert_eq!(
            result.experience,
            "• Developed managed a team of five.\n• Developed improved deployment speed."
        );
        assert!(!result.ai_enhanced);
    }

    #[tokio::test]
    async fn test_identity_fields_are_echoed() {
        let request = sample_request();
        let result = processor(Arc::new(DisabledEnhancer)).process(&request).await;
        assert_eq!(result.full_name, request.full_name);
        assert_eq!(result.job_title, request.job_title);
        assert_eq!(result.email, request.email);
        assert_eq!(result.phone, request.phone);
        assert_eq!(result.location, request.location);
        assert_eq!(result.portfolio, request.portfolio);
    }

    #[tokio::test]
    async fn test_provider_output_sets_ai_flag() {
        let result = processor(Arc::new(CannedEnhancer))
            .process(&sample_request())
            .await;
        assert!(result.ai_enhanced);
        assert_eq!(result.experience, "• Led a team of five engineers");
    }

    #[tokio::test]
    async fn test_provider_failure_matches_rule_based_output() {
        let request = sample_request();
        let result = processor(Arc::new(BrokenEnhancer)).process(&request).await;
        assert!(!result.ai_enhanced);
        assert_eq!(result.experience, rewrite_experience(&request.experience));
    }

    #[tokio::test]
    async fn test_empty_request_yields_defaults() {
        let result = processor(Arc::new(DisabledEnhancer))
            .process(&ResumeRequest::default())
            .await;
        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.skills.is_empty());
        assert_eq!(result.experience, "• Worked on various projects and tasks");
        assert!(!result.ai_enhanced);
    }

    #[tokio::test]
    async fn test_matched_keywords_capped_at_ten() {
        let request = ResumeRequest {
            job_description: "Java Python JavaScript TypeScript React Angular Vue Node SQL \
                MongoDB AWS Docker Kubernetes Git Agile Scrum"
                .to_string(),
            skills: "Java".to_string(),
            ..sample_request()
        };
        let result = processor(Arc::new(DisabledEnhancer)).process(&request).await;
        assert_eq!(result.matched_keywords.len(), MATCHED_KEYWORDS_LIMIT);
        assert_eq!(result.matched_keywords[0], "java");
    }

    #[tokio::test]
    async fn test_concurrent_requests_do_not_interfere() {
        let processor = Arc::new(processor(Arc::new(DisabledEnhancer)));
        let mut handles = Vec::new();
        for i in 0..16 {
            let processor = Arc::clone(&processor);
            handles.push(tokio::spawn(async move {
                let request = ResumeRequest {
                    full_name: format!("Candidate {i}"),
                    skills: if i % 2 == 0 { "Python".to_string() } else { String::new() },
                    job_description: "Python role".to_string(),
                    ..ResumeRequest::default()
                };
                (i, processor.process(&request).await)
            }));
        }
        for handle in handles {
            let (i, result) = handle.await.unwrap();
            assert_eq!(result.full_name, format!("Candidate {i}"));
            assert_eq!(result.score, if i % 2 == 0 { 100 } else { 0 });
        }
    }
}
