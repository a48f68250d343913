//! Section extraction driver
//!
//! Calls an extractor once per planned section, strictly one at a time with
//! a pause between calls, and feeds the results to the merge engine.

use crate::config::ExtractionConfig;
use crate::metrics::METRICS;
use crate::ordering::{plan_sections, SectionPlan, SectionRequest};
use crate::tokens::{MergeOutcome, SectionExtraction, TokenMerger};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Source of per-section token fragments, typically a vision model client
#[async_trait]
pub trait SectionExtractor: Send + Sync {
    async fn extract(&self, request: &SectionRequest) -> anyhow::Result<SectionExtraction>;
}

/// Run every planned request in order.
///
/// A failed call becomes a failed result carrying the error text. Each
/// result is stamped with its request identifier.
pub async fn extract_sections<E>(
    extractor: &E,
    plan: &SectionPlan,
    delay: Duration,
) -> Vec<SectionExtraction>
where
    E: SectionExtractor + ?Sized,
{
    if !plan.discarded.is_empty() {
        METRICS.record_discarded(plan.discarded.len());
    }

    let mut results = Vec::with_capacity(plan.requests.len());

    for (position, request) in plan.requests.iter().enumerate() {
        if position > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        debug!("Extracting {}", request.id);
        let started = Instant::now();
        let outcome = extractor.extract(request).await;
        METRICS.record_section(outcome.is_ok(), started.elapsed());

        let result = match outcome {
            Ok(mut result) => {
                result.section = Some(request.id.clone());
                result
            }
            Err(e) => {
                warn!("Extraction failed for {}: {:#}", request.id, e);
                SectionExtraction::failed(request.id.clone(), format!("{:#}", e))
            }
        };
        results.push(result);
    }

    results
}

/// Plan, extract and merge one run using the configured cap and delay
pub async fn run_section_extraction<E, I, S>(
    extractor: &E,
    section_names: I,
    config: &ExtractionConfig,
    merger: &TokenMerger,
) -> MergeOutcome
where
    E: SectionExtractor + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let plan = plan_sections(section_names, config.max_sections);
    let results = extract_sections(extractor, &plan, config.inter_call_delay()).await;
    merger.merge(&results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;

    /// Records call order; fails on sections named `footer`
    struct ScriptedExtractor {
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedExtractor {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SectionExtractor for ScriptedExtractor {
        async fn extract(&self, request: &SectionRequest) -> anyhow::Result<SectionExtraction> {
            self.calls.lock().unwrap().push(request.name.clone());
            if request.name == "footer" {
                return Err(anyhow!("timeout"));
            }
            let mut result = SectionExtraction::default();
            result.colors.background = Some(format!("#00000{}", request.index));
            Ok(result)
        }
    }

    #[tokio::test]
    async fn test_results_in_request_order() {
        let extractor = ScriptedExtractor::new();
        let plan = plan_sections(["header", "hero", "footer"], 8);

        let results = extract_sections(&extractor, &plan, Duration::ZERO).await;

        assert_eq!(*extractor.calls.lock().unwrap(), vec!["header", "hero", "footer"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].section_id(), "section-0-header");
        assert_eq!(results[2].error.as_deref(), Some("timeout"));
    }

    #[tokio::test]
    async fn test_delay_between_calls() {
        let extractor = ScriptedExtractor::new();
        let plan = plan_sections(["a", "b", "c"], 8);

        let started = Instant::now();
        extract_sections(&extractor, &plan, Duration::from_millis(20)).await;

        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_run_respects_cap() {
        let extractor = ScriptedExtractor::new();
        let config = ExtractionConfig {
            max_sections: 2,
            inter_call_delay_ms: 0,
            ..ExtractionConfig::default()
        };

        let outcome = run_section_extraction(
            &extractor,
            ["header", "hero", "footer"],
            &config,
            &TokenMerger::new(),
        )
        .await;

        assert_eq!(*extractor.calls.lock().unwrap(), vec!["header", "hero"]);
        assert_eq!(outcome.failed, 0);
        assert_eq!(outcome.tokens.section_count, Some(2));
        assert_eq!(outcome.tokens.colors.background.as_deref(), Some("#000000"));
    }
}
