use crate::models::Framework;
use crate::registry::default_metric_id;

/// Label patterns in match priority order. Earlier rows win, so reordering changes results.
pub const TAG_PATTERNS: &[(&str, &str)] = &[
    // DORA
    ("Deployment Frequency", "deployment-frequency"),
    ("Deploy Freq", "deployment-frequency"),
    ("Lead Time", "lead-time"),
    ("Delivery Lead Time", "lead-time"),
    ("Lead Time for Changes", "lead-time"),
    ("Change Failure Rate", "change-failure-rate"),
    ("Failure Rate", "change-failure-rate"),
    ("Mean Time to Restore", "mttr"),
    ("MTTR", "mttr"),
    ("Code Churn", "code-churn"),
    ("Throughput", "throughput"),
    // SPACE
    ("Satisfaction", "satisfaction"),
    ("Satisfaction & Well-Being", "satisfaction"),
    ("Overall Satisfaction", "satisfaction"),
    ("Team Satisfaction", "satisfaction"),
    ("Performance", "performance"),
    ("Overall Performance", "performance"),
    ("Activity", "activity"),
    ("Coding Activity", "activity"),
    ("Active Coding Time", "activity"),
    ("Collaboration", "collaboration"),
    ("Communication & Collaboration", "collaboration"),
    ("Collaboration Score", "collaboration"),
    ("Efficiency", "efficiency"),
    ("Efficiency & Flow", "efficiency"),
    ("Flow Efficiency", "flow-efficiency"),
    ("Team Efficiency", "efficiency"),
    ("Focus Score", "efficiency"),
    ("Burnout Risk", "burnout-risk"),
    ("Workload Balance", "satisfaction"),
    // Pull requests
    ("Avg Review Time", "pr-review-time"),
    ("PR Review Time", "pr-review-time"),
];

/// Maps a displayed label to a metric id.
///
/// A row matches when the label contains the pattern or the pattern contains the label.
/// Overlapping rows are not disambiguated: "Flow Efficiency" hits the plain "Efficiency"
/// row first and resolves to `efficiency`. Labels matching nothing fall back to the
/// framework's generic metric.
pub fn resolve(label: &str, framework_hint: Framework) -> &'static str {
    let label = label.trim();
    match match_pattern(label) {
        Some(metric_id) => metric_id,
        None => {
            let fallback = default_metric_id(framework_hint);
            tracing::debug!(label = %label, fallback, "no metric pattern matched label");
            fallback
        }
    }
}

fn match_pattern(label: &str) -> Option<&'static str> {
    TAG_PATTERNS
        .iter()
        .find(|(pattern, _)| label.contains(pattern) || pattern.contains(label))
        .map(|(_, metric_id)| *metric_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MetricRegistry;

    #[test]
    fn every_pattern_targets_a_registered_metric() {
        let registry = MetricRegistry::builtin();
        for (pattern, metric_id) in TAG_PATTERNS {
            assert!(registry.contains(metric_id), "{pattern} -> {metric_id}");
        }
    }

    #[test]
    fn resolves_lead_time_for_changes() {
        assert_eq!(resolve("Lead Time for Changes", Framework::Dora), "lead-time");
    }

    #[test]
    fn unknown_label_uses_framework_fallback() {
        assert_eq!(resolve("Unknown Custom Metric", Framework::Space), "satisfaction");
        assert_eq!(resolve("Unknown Custom Metric", Framework::Dora), "deployment-frequency");
    }

    #[test]
    fn matches_when_label_is_a_fragment_of_a_pattern() {
        assert_eq!(resolve("Churn", Framework::Space), "code-churn");
        assert_eq!(resolve("Review Time", Framework::Dora), "pr-review-time");
    }

    #[test]
    fn first_row_wins_over_more_specific_rows() {
        assert_eq!(resolve("Flow Efficiency", Framework::Space), "efficiency");
        assert_eq!(resolve("Team Satisfaction Score", Framework::Dora), "satisfaction");
        assert_eq!(resolve("Weekly Deployment Frequency", Framework::Space), "deployment-frequency");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(resolve("  MTTR \n", Framework::Space), "mttr");
    }

    #[test]
    fn empty_label_matches_first_row() {
        assert_eq!(resolve("", Framework::Space), "deployment-frequency");
    }

    #[test]
    fn always_returns_a_registered_id() {
        let registry = MetricRegistry::builtin();
        for label in ["", "x", "Velocity", "Lead", "Failure", "Overall"] {
            for hint in [Framework::Dora, Framework::Space] {
                assert!(registry.contains(resolve(label, hint)), "{label:?} {hint:?}");
            }
        }
    }
}
