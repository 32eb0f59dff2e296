mod catalog;

use crate::errors::{AppError, AppResult};
use crate::models::{Framework, MetricDefinition};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DORA_DEFAULT_METRIC: &str = "deployment-frequency";
pub const SPACE_DEFAULT_METRIC: &str = "satisfaction";

static BUILTIN: Lazy<MetricRegistry> = Lazy::new(|| {
    let definitions = catalog::CATALOG.iter().map(MetricDefinition::from).collect();
    MetricRegistry::new(definitions).expect("builtin metric catalog is valid")
});

pub fn default_metric_id(framework: Framework) -> &'static str {
    match framework {
        Framework::Dora => DORA_DEFAULT_METRIC,
        Framework::Space => SPACE_DEFAULT_METRIC,
    }
}

/// Read-only catalog of metric definitions, keyed by id.
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    definitions: Vec<MetricDefinition>,
    index: HashMap<String, usize>,
    dora_default: usize,
    space_default: usize,
}

impl MetricRegistry {
    /// Process-wide catalog shipped with the dashboard.
    pub fn builtin() -> &'static MetricRegistry {
        &BUILTIN
    }

    pub fn new(definitions: Vec<MetricDefinition>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            if index.insert(definition.id.clone(), position).is_some() {
                return Err(AppError::Invalid(format!("duplicate metric id {}", definition.id)));
            }
        }

        let default_position = |framework: Framework| {
            let id = default_metric_id(framework);
            index
                .get(id)
                .copied()
                .ok_or_else(|| AppError::Invalid(format!("missing {} default metric {}", framework.as_str(), id)))
        };
        let dora_default = default_position(Framework::Dora)?;
        let space_default = default_position(Framework::Space)?;

        Ok(Self {
            definitions,
            index,
            dora_default,
            space_default,
        })
    }

    pub fn lookup(&self, id: &str) -> Option<&MetricDefinition> {
        self.index.get(id).map(|position| &self.definitions[*position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn framework_default(&self, framework: Framework) -> &MetricDefinition {
        match framework {
            Framework::Dora => &self.definitions[self.dora_default],
            Framework::Space => &self.definitions[self.space_default],
        }
    }

    /// Never comes back empty: unknown ids degrade to the framework's generic record.
    pub fn lookup_or_default(&self, id: &str, framework: Framework) -> &MetricDefinition {
        match self.lookup(id) {
            Some(definition) => definition,
            None => {
                tracing::debug!(metric_id = %id, framework = framework.as_str(), "unknown metric id, using framework default");
                self.framework_default(framework)
            }
        }
    }

    pub fn all(&self) -> &[MetricDefinition] {
        &self.definitions
    }

    pub fn by_framework(&self, framework: Framework) -> impl Iterator<Item = &MetricDefinition> {
        self.definitions
            .iter()
            .filter(move |definition| definition.framework == framework)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_every_dashboard_metric() {
        let registry = MetricRegistry::builtin();
        assert_eq!(registry.len(), 14);
        for id in [
            "deployment-frequency",
            "lead-time",
            "change-failure-rate",
            "mttr",
            "satisfaction",
            "performance",
            "activity",
            "collaboration",
            "efficiency",
            "code-churn",
            "flow-efficiency",
            "throughput",
            "pr-review-time",
            "burnout-risk",
        ] {
            assert!(registry.contains(id), "missing {id}");
        }
    }

    #[test]
    fn every_definition_has_four_benchmarks_in_tier_order() {
        use crate::models::BenchmarkLevel;

        for definition in MetricRegistry::builtin().all() {
            let levels = definition
                .benchmarks
                .iter()
                .map(|benchmark| benchmark.level)
                .collect::<Vec<_>>();
            assert_eq!(
                levels,
                vec![
                    BenchmarkLevel::Elite,
                    BenchmarkLevel::High,
                    BenchmarkLevel::Medium,
                    BenchmarkLevel::Low
                ],
                "{}",
                definition.id
            );
            assert!(!definition.benefits.is_empty());
        }
    }

    #[test]
    fn unknown_id_degrades_to_framework_default() {
        let registry = MetricRegistry::builtin();
        assert!(registry.lookup("velocity").is_none());
        assert_eq!(
            registry.lookup_or_default("velocity", Framework::Dora).id,
            "deployment-frequency"
        );
        assert_eq!(
            registry.lookup_or_default("velocity", Framework::Space).id,
            "satisfaction"
        );
        assert_eq!(registry.lookup_or_default("mttr", Framework::Space).id, "mttr");
    }

    #[test]
    fn rejects_catalog_without_defaults() {
        let registry = MetricRegistry::builtin();
        let only_mttr = vec![registry.lookup("mttr").cloned().expect("mttr")];
        let error = MetricRegistry::new(only_mttr).expect_err("defaults are required");
        assert!(error.to_string().contains("deployment-frequency"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut definitions = MetricRegistry::builtin().all().to_vec();
        definitions.push(definitions[0].clone());
        assert!(MetricRegistry::new(definitions).is_err());
    }

    #[test]
    fn filters_by_framework() {
        let registry = MetricRegistry::builtin();
        let dora = registry
            .by_framework(Framework::Dora)
            .map(|definition| definition.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            dora,
            vec!["deployment-frequency", "lead-time", "change-failure-rate", "mttr", "code-churn"]
        );
    }
}
