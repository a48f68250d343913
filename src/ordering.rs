//! Section request planning
//!
//! Assigns identifiers in page order, applies the per-run cap, and puts
//! results back into request order when they arrive out of order.

use crate::tokens::SectionExtraction;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One planned extraction call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRequest {
    /// Position in page order, starting at 0
    pub index: usize,
    /// Assigned identifier, `section-<index>-<name>`
    pub id: String,
    pub name: String,
}

/// Requests kept under the cap, plus the names dropped past it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPlan {
    pub requests: Vec<SectionRequest>,
    pub discarded: Vec<String>,
}

impl SectionPlan {
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

pub fn section_id(index: usize, name: &str) -> String {
    format!("section-{}-{}", index, name)
}

/// Plan at most `max_sections` calls, in the order the names were given
pub fn plan_sections<I, S>(names: I, max_sections: usize) -> SectionPlan
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut plan = SectionPlan::default();

    for (index, name) in names.into_iter().map(Into::into).enumerate() {
        if index < max_sections {
            plan.requests.push(SectionRequest {
                index,
                id: section_id(index, &name),
                name,
            });
        } else {
            plan.discarded.push(name);
        }
    }

    if !plan.discarded.is_empty() {
        warn!(
            "Section cap of {} reached, discarding {} sections: {:?}",
            max_sections,
            plan.discarded.len(),
            plan.discarded
        );
    }
    info!("Planned {} section extraction calls", plan.requests.len());

    plan
}

/// Stable sort by request index, dropping the index
pub fn restore_request_order(mut results: Vec<(usize, SectionExtraction)>) -> Vec<SectionExtraction> {
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = ["header", "hero", "features", "footer"];

    #[test]
    fn test_ids_follow_page_order() {
        let plan = plan_sections(NAMES, 8);
        let ids: Vec<&str> = plan.requests.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "section-0-header",
                "section-1-hero",
                "section-2-features",
                "section-3-footer"
            ]
        );
        assert!(plan.discarded.is_empty());
    }

    #[test]
    fn test_cap_exactly_met() {
        let plan = plan_sections(NAMES, 4);
        assert_eq!(plan.len(), 4);
        assert!(plan.discarded.is_empty());
    }

    #[test]
    fn test_cap_exceeded_by_one() {
        let plan = plan_sections(NAMES, 3);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.discarded, vec!["footer".to_string()]);
    }

    #[test]
    fn test_zero_names() {
        let plan = plan_sections(Vec::<String>::new(), 8);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_restore_request_order() {
        let results = vec![
            (2, SectionExtraction::new("c")),
            (0, SectionExtraction::new("a")),
            (1, SectionExtraction::failed("b", "timeout")),
        ];
        let ordered: Vec<String> = restore_request_order(results)
            .iter()
            .map(|r| r.section_id().to_string())
            .collect();
        assert_eq!(ordered, vec!["a", "b", "c"]);
    }
}
